//! Server configuration.
//!
//! Read from `TRANSIT_*` environment variables, each optional.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::stops::StopFetcherConfig;

/// Address to bind when `TRANSIT_ADDR` is unset.
const DEFAULT_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 5000);

/// Where the built single-page app lives when `TRANSIT_STATIC_DIR` is unset.
const DEFAULT_STATIC_DIR: &str = "frontend/build";

/// A configuration variable held a value that could not be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {var}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Everything needed to start the server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address to listen on
    pub addr: SocketAddr,

    /// Directory holding `index.html` and the app's assets
    pub static_dir: PathBuf,

    /// Stop scraping settings
    pub fetcher: StopFetcherConfig,
}

impl ServerConfig {
    /// Build from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(value) = get("TRANSIT_ADDR") {
            config.addr = value.trim().parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::Invalid {
                    var: "TRANSIT_ADDR",
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        if let Some(value) = get("TRANSIT_STATIC_DIR") {
            config.static_dir = PathBuf::from(value);
        }

        if let Some(value) = get("TRANSIT_FETCH_TIMEOUT_SECS") {
            let secs: u64 = value.trim().parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::Invalid {
                    var: "TRANSIT_FETCH_TIMEOUT_SECS",
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?;
            if secs == 0 {
                return Err(ConfigError::Invalid {
                    var: "TRANSIT_FETCH_TIMEOUT_SECS",
                    value,
                    reason: "timeout must be at least one second".to_string(),
                });
            }
            config.fetcher = config.fetcher.with_timeout(secs);
        }

        if let Some(value) = get("TRANSIT_USER_AGENT") {
            config.fetcher = config.fetcher.with_user_agent(value);
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(DEFAULT_ADDR),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            fetcher: StopFetcherConfig::default(),
        }
    }
}

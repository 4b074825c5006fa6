//! Best-effort stop scraping client.

use std::collections::HashMap;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info, warn};

use super::error::FetchError;
use super::fallback::fallback_stops;
use super::system::TransitSystem;

/// Browser-like client identity; several sources reject obvious bots.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Default single-attempt timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// A stop as produced by the fetcher.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopRecord {
    pub name: String,
    pub line: String,
    pub system: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl StopRecord {
    /// A stop of `system` with no known location.
    pub fn new(name: impl Into<String>, system: TransitSystem) -> Self {
        Self {
            name: name.into(),
            line: system.label().to_string(),
            system: system.label().to_string(),
            lat: None,
            lon: None,
        }
    }

    pub fn with_location(mut self, lat: f64, lon: f64) -> Self {
        self.lat = Some(lat);
        self.lon = Some(lon);
        self
    }
}

/// Configuration for the stop fetcher.
#[derive(Debug, Clone)]
pub struct StopFetcherConfig {
    /// User-Agent header sent with every request
    pub user_agent: String,
    /// Request timeout in seconds (single attempt, no retries)
    pub timeout_secs: u64,
    /// Source page per system
    pub sources: HashMap<TransitSystem, String>,
}

impl StopFetcherConfig {
    /// Create a config pointing at each system's public station page.
    pub fn new() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            sources: TransitSystem::ALL
                .into_iter()
                .map(|s| (s, s.default_source_url().to_string()))
                .collect(),
        }
    }

    /// Override the source page of one system (for testing).
    pub fn with_source(mut self, system: TransitSystem, url: impl Into<String>) -> Self {
        self.sources.insert(system, url.into());
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    fn source_url(&self, system: TransitSystem) -> &str {
        self.sources
            .get(&system)
            .map(String::as_str)
            .unwrap_or_else(|| system.default_source_url())
    }
}

impl Default for StopFetcherConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Lists the stops of a transit system by scraping its public station page.
///
/// Holds no mutable state; concurrent calls each perform their own request.
#[derive(Debug, Clone)]
pub struct StopFetcher {
    http: reqwest::Client,
    config: StopFetcherConfig,
}

impl StopFetcher {
    /// Create a new fetcher.
    pub fn new(config: StopFetcherConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, config })
    }

    /// Stops for a system identifier such as `"ttc"` or `"GO Transit"`.
    ///
    /// Unrecognised identifiers yield an empty list. Recognised ones never
    /// do: if the live page cannot be used, the static list is returned.
    pub async fn fetch_stops(&self, identifier: &str) -> Vec<StopRecord> {
        match TransitSystem::parse(identifier) {
            Some(system) => self.fetch_system(system).await,
            None => {
                debug!(identifier, "unknown transit system");
                Vec::new()
            }
        }
    }

    /// Stops for a known system, falling back to the static list on any failure.
    pub async fn fetch_system(&self, system: TransitSystem) -> Vec<StopRecord> {
        match self.scrape(system).await {
            Ok(stops) => {
                info!(%system, count = stops.len(), "scraped stops");
                stops
            }
            Err(e) => {
                warn!(%system, error = %e, "scrape failed, using static stop list");
                fallback_stops(system)
            }
        }
    }

    /// One attempt at the live source page.
    async fn scrape(&self, system: TransitSystem) -> Result<Vec<StopRecord>, FetchError> {
        let url = self.config.source_url(system);

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let names = system.extract_rule().extract(&body);

        if names.is_empty() {
            return Err(FetchError::NoStops);
        }

        Ok(names
            .into_iter()
            .map(|name| StopRecord::new(name, system))
            .collect())
    }
}

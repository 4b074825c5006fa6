//! Application state for the web layer.

use std::sync::Arc;

use crate::placement::Resolver;
use crate::stops::StopFetcher;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Car placement lookup
    pub resolver: Arc<Resolver>,

    /// Stop scraper with static fallback
    pub fetcher: Arc<StopFetcher>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(resolver: Resolver, fetcher: StopFetcher) -> Self {
        Self {
            resolver: Arc::new(resolver),
            fetcher: Arc::new(fetcher),
        }
    }
}

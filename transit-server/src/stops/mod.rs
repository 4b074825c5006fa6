//! Stop listings for the supported transit systems.
//!
//! Stops are scraped from each system's public station page on demand.
//! Scraping is best effort: one request, one timeout, and on any failure a
//! small hand-curated list is served instead, so a recognised system never
//! comes back empty.

mod client;
mod error;
mod extract;
mod fallback;
mod system;

pub use client::{
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, StopFetcher, StopFetcherConfig, StopRecord,
};
pub use error::FetchError;
pub use extract::{ExtractRule, Tag};
pub use fallback::{demo_stops, fallback_stops};
pub use system::TransitSystem;

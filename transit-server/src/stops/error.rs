//! Stop fetching error types.

/// Reasons a scrape can fail.
///
/// These never reach callers of [`super::StopFetcher::fetch_stops`]; any of
/// them means "use the static list instead".
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// HTTP request failed (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Source returned a non-success status
    #[error("source returned status {status}")]
    Status { status: u16 },

    /// Page parsed but contained no stops
    #[error("no stops found in page")]
    NoStops,
}

//! Car placement resolution errors.

/// Why a boarding lookup could not be answered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// Station or exit missing, or the exit is not one the station has.
    #[error("Please specify a valid exit or exit is ambiguous/missing.")]
    InvalidRequest,

    /// The station is not in the placement table at all.
    #[error("Station '{station}' not found")]
    NotFound { station: String },

    /// The station is known but its data has not been published yet.
    #[error("Information not available: station under construction")]
    Unavailable,

    /// The station serves several lines and the caller did not say which.
    #[error("Please clarify which line you are on at {station}.")]
    AmbiguousLine { station: String },
}

//! Unified error types for cardscout-core.

/// Errors raised by the pure core: year-spec parsing and CSV output.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A year token could not be parsed as an integer or `start-end` range.
    #[error("INVALID_YEARS: {0}")]
    InvalidYears(String),

    /// The year specification produced no years at all.
    #[error("INVALID_YEARS: no years in {0:?}")]
    NoYears(String),

    /// Filesystem failure while writing output.
    #[error("OUTPUT_ERROR: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization failure.
    #[error("OUTPUT_ERROR: {0}")]
    Csv(#[from] csv::Error),
}

//! Finding API client error types.

use std::sync::Arc;

/// Errors from a single Finding API page request.
///
/// Every variant is a "fetch failed" outcome: the retrieval controller
/// retries the same page regardless of which one occurred.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FindingError {
    /// Missing application id.
    #[error("missing app id: EBAY_APP_ID not set")]
    MissingAppId,

    /// Endpoint URL could not be parsed.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Non-success HTTP status.
    #[error("HTTP error: {status}")]
    HttpError { status: u16 },

    /// Request timeout.
    #[error("request timeout")]
    Timeout,

    /// Network error.
    #[error("network error: {0}")]
    Network(Arc<reqwest::Error>),

    /// Response body was not valid JSON.
    #[error("parse error: {0}")]
    Parse(String),
}

impl FindingError {
    /// Whether the retrieval controller should retry after this error.
    pub fn is_transient(&self) -> bool {
        !matches!(self, FindingError::MissingAppId | FindingError::InvalidEndpoint(_))
    }
}

impl From<reqwest::Error> for FindingError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { FindingError::Timeout } else { FindingError::Network(Arc::new(err)) }
    }
}

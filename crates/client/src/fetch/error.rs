//! Asset fetch error types.

use std::sync::Arc;

/// Errors from downloading a single SVG asset.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchError {
    /// URL is not an absolute http(s) URL.
    #[error("unsupported URL: {0}")]
    UnsupportedUrl(String),

    /// Configured header value is not valid in HTTP.
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// HTTP error response.
    #[error("HTTP error: {status}")]
    HttpError { status: u16 },

    /// Request timeout.
    #[error("request timeout")]
    Timeout,

    /// Network error.
    #[error("network error: {0}")]
    Network(Arc<reqwest::Error>),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { FetchError::Timeout } else { FetchError::Network(Arc::new(err)) }
    }
}

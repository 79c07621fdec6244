//! SVGL API client error types.

use std::sync::Arc;

/// Errors from the SVGL search client.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SvglError {
    /// Invalid search query.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// Search URL could not be built.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

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

    /// Response parse error.
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for SvglError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { SvglError::Timeout } else { SvglError::Network(Arc::new(err)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SvglError::HttpError { status: 500 };
        assert_eq!(err.to_string(), "HTTP error: 500");

        let err = SvglError::InvalidQuery("test".to_string());
        assert!(err.to_string().contains("invalid query"));

        let err = SvglError::Parse("expected value at line 1 column 1".to_string());
        assert!(err.to_string().starts_with("parse error"));
    }
}

//! Structured errors for the extension server.

/// Errors that stop the event loop.
///
/// Malformed events are not errors; they are logged and skipped.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Reading stdin or writing stdout failed.
    #[error("IO_ERROR: {0}")]
    Io(#[from] std::io::Error),

    /// A response could not be encoded.
    #[error("ENCODE_FAILED: {0}")]
    Encode(#[from] serde_json::Error),
}

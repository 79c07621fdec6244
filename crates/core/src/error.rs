//! Unified error types for svgl-search.

use std::path::PathBuf;

/// Unified error types shared by the client, server and CLI.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Cache directory or file could not be written.
    #[error("CACHE_ERROR: {path}: {source}")]
    Cache {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be loaded or failed validation.
    #[error("CONFIG_ERROR: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl Error {
    pub(crate) fn cache(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Cache { path: path.into(), source }
    }
}

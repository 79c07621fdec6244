//! Configuration validation rules.
//!
//! This module provides validation logic for `AppConfig` values
//! after they have been loaded from environment, files, or defaults.

use crate::config::AppConfig;
use thiserror::Error;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },
}

const MIN_TIMEOUT_MS: u64 = 100;
const MAX_TIMEOUT_MS: u64 = 300_000;
const MAX_RESULT_LIMIT: usize = 50;

impl AppConfig {
    /// Validate configuration values after loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if:
    /// - `api_base_url` is not an http(s) URL
    /// - `user_agent` is empty
    /// - either timeout is below 100ms or above 5 minutes
    /// - `result_limit` is 0 or above 50
    /// - `cache_dir` or `fallback_icon` is empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                field: "api_base_url".into(),
                reason: "must start with http:// or https://".into(),
            });
        }

        if self.user_agent.is_empty() {
            return Err(ConfigError::Invalid { field: "user_agent".into(), reason: "must not be empty".into() });
        }

        validate_timeout("search_timeout_ms", self.search_timeout_ms)?;
        validate_timeout("asset_timeout_ms", self.asset_timeout_ms)?;

        if self.result_limit == 0 {
            return Err(ConfigError::Invalid { field: "result_limit".into(), reason: "must be greater than 0".into() });
        }
        if self.result_limit > MAX_RESULT_LIMIT {
            return Err(ConfigError::Invalid {
                field: "result_limit".into(),
                reason: format!("must not exceed {MAX_RESULT_LIMIT}"),
            });
        }

        if self.cache_dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid { field: "cache_dir".into(), reason: "must not be empty".into() });
        }

        if self.fallback_icon.as_os_str().is_empty() {
            return Err(ConfigError::Invalid { field: "fallback_icon".into(), reason: "must not be empty".into() });
        }

        if self.escape_query {
            tracing::warn!("escape_query is enabled; search queries will be percent-encoded");
        }

        Ok(())
    }
}

fn validate_timeout(field: &str, value: u64) -> Result<(), ConfigError> {
    if value < MIN_TIMEOUT_MS {
        return Err(ConfigError::Invalid { field: field.into(), reason: "must be at least 100ms".into() });
    }
    if value > MAX_TIMEOUT_MS {
        return Err(ConfigError::Invalid {
            field: field.into(),
            reason: "must not exceed 5 minutes (300000ms)".into(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validate_default_config() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_base_url_scheme() {
        let config = AppConfig { api_base_url: "ftp://api.svgl.app".into(), ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "api_base_url"));
    }

    #[test]
    fn test_validate_empty_user_agent() {
        let config = AppConfig { user_agent: String::new(), ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "user_agent"));
    }

    #[test]
    fn test_validate_search_timeout_too_small() {
        let config = AppConfig { search_timeout_ms: 50, ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "search_timeout_ms"));
    }

    #[test]
    fn test_validate_asset_timeout_exceeds_limit() {
        let config = AppConfig { asset_timeout_ms: 301_000, ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "asset_timeout_ms"));
    }

    #[test]
    fn test_validate_result_limit_bounds() {
        let config = AppConfig { result_limit: 0, ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid { field, .. }) if field == "result_limit"));

        let config = AppConfig { result_limit: 51, ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid { field, .. }) if field == "result_limit"));
    }

    #[test]
    fn test_validate_empty_paths() {
        let config = AppConfig { cache_dir: PathBuf::new(), ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid { field, .. }) if field == "cache_dir"));

        let config = AppConfig { fallback_icon: PathBuf::new(), ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid { field, .. }) if field == "fallback_icon"));
    }

    #[test]
    fn test_validate_edge_case_values() {
        let config =
            AppConfig { search_timeout_ms: 100, asset_timeout_ms: 300_000, result_limit: 50, ..Default::default() };
        assert!(config.validate().is_ok());
    }
}

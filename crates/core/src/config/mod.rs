//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (SVGL_*)
//! 2. TOML config file (if SVGL_CONFIG_FILE set)
//! 3. Built-in defaults

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

mod validation;

pub use validation::ConfigError;

/// Browser user agent sent with every request; the API answers 304 to
/// unfamiliar clients.
pub const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0.0.0 Safari/537.36";

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (SVGL_*)
/// 2. TOML config file (if SVGL_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the search API.
    ///
    /// Set via SVGL_API_BASE_URL environment variable.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// User-Agent string for HTTP requests.
    ///
    /// Set via SVGL_USER_AGENT environment variable.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Search request timeout in milliseconds.
    ///
    /// Set via SVGL_SEARCH_TIMEOUT_MS environment variable.
    #[serde(default = "default_search_timeout_ms")]
    pub search_timeout_ms: u64,

    /// Per-asset download timeout in milliseconds.
    ///
    /// Set via SVGL_ASSET_TIMEOUT_MS environment variable.
    #[serde(default = "default_asset_timeout_ms")]
    pub asset_timeout_ms: u64,

    /// Maximum number of leading API entries turned into items.
    ///
    /// Set via SVGL_RESULT_LIMIT environment variable.
    #[serde(default = "default_result_limit")]
    pub result_limit: usize,

    /// Directory downloaded SVGs are written to.
    ///
    /// Set via SVGL_CACHE_DIR environment variable.
    #[serde(default = "default_cache_dir")]
    pub cache_dir: PathBuf,

    /// Icon used by placeholders and items without a cached asset.
    ///
    /// Set via SVGL_FALLBACK_ICON environment variable.
    #[serde(default = "default_fallback_icon")]
    pub fallback_icon: PathBuf,

    /// Percent-encode the query before putting it in the search URL.
    ///
    /// Off by default: the query is interpolated as typed.
    /// Set via SVGL_ESCAPE_QUERY environment variable.
    #[serde(default)]
    pub escape_query: bool,
}

fn default_api_base_url() -> String {
    "https://api.svgl.app".into()
}

fn default_user_agent() -> String {
    BROWSER_USER_AGENT.into()
}

fn default_search_timeout_ms() -> u64 {
    10_000
}

fn default_asset_timeout_ms() -> u64 {
    5_000
}

fn default_result_limit() -> usize {
    10
}

fn default_cache_dir() -> PathBuf {
    std::env::temp_dir().join("svgl_search")
}

fn default_fallback_icon() -> PathBuf {
    PathBuf::from("images/icon.png")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            user_agent: default_user_agent(),
            search_timeout_ms: default_search_timeout_ms(),
            asset_timeout_ms: default_asset_timeout_ms(),
            result_limit: default_result_limit(),
            cache_dir: default_cache_dir(),
            fallback_icon: default_fallback_icon(),
            escape_query: false,
        }
    }
}

impl AppConfig {
    /// Search timeout as Duration for use with reqwest.
    pub fn search_timeout(&self) -> Duration {
        Duration::from_millis(self.search_timeout_ms)
    }

    /// Asset timeout as Duration for use with reqwest.
    pub fn asset_timeout(&self) -> Duration {
        Duration::from_millis(self.asset_timeout_ms)
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `SVGL_`
    /// 2. TOML file from `SVGL_CONFIG_FILE` (if set)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("SVGL_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment = figment.merge(
            Env::prefixed("SVGL_")
                .ignore(&["CONFIG_FILE"])
                .map(|key| key.as_str().to_lowercase().into()),
        );

        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }
}

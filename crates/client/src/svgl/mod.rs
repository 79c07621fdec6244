//! SVGL search API client.
//!
//! ### Protocol
//!
//! - **Endpoint**: `GET https://api.svgl.app/?search=<query>`
//! - **Headers**: browser user agent plus `Origin`/`Referer` of svgl.app
//! - **Timeout**: 10s
//! - **Response**: JSON array of [`ApiEntry`], in the API's own order.
//! - **Errors**: any non-2xx status, transport failure or decode failure is
//!   returned as [`SvglError`]; nothing is retried.

pub mod error;
pub mod request;
pub mod response;

pub use error::SvglError;
pub use request::SearchRequest;
pub use response::{ApiEntry, Category, Route, UNKNOWN_TITLE, parse_entries};

use crate::headers::browser_headers;
use std::sync::Arc;
use std::time::{Duration, Instant};
use svgl_core::AppConfig;
use svgl_core::config::BROWSER_USER_AGENT;

/// Default base URL for the SVGL API.
const DEFAULT_BASE_URL: &str = "https://api.svgl.app";

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// SVGL client configuration.
#[derive(Debug, Clone)]
pub struct SvglConfig {
    /// Base URL (default: https://api.svgl.app).
    pub base_url: String,
    /// Request timeout (default: 10s).
    pub timeout: Duration,
    /// User-agent string (default: desktop Chrome).
    pub user_agent: String,
    /// Percent-encode the query (default: false).
    pub escape_query: bool,
}

impl Default for SvglConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: BROWSER_USER_AGENT.to_string(),
            escape_query: false,
        }
    }
}

impl From<&AppConfig> for SvglConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            timeout: config.search_timeout(),
            user_agent: config.user_agent.clone(),
            escape_query: config.escape_query,
        }
    }
}

/// SVGL search API client.
#[derive(Debug, Clone)]
pub struct SvglClient {
    http: reqwest::Client,
    config: SvglConfig,
}

impl SvglClient {
    /// Create a new client with the given configuration.
    pub fn new(config: SvglConfig) -> Result<Self, SvglError> {
        let headers = browser_headers(&config.user_agent).map_err(|e| SvglError::InvalidHeader(e.to_string()))?;

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .use_rustls_tls()
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .build()
            .map_err(|e| SvglError::Network(Arc::new(e)))?;

        Ok(Self { http, config })
    }

    /// Execute a search.
    ///
    /// Returns the decoded entries in response order; an empty vector when the
    /// API matched nothing.
    pub async fn search(&self, req: &SearchRequest) -> Result<Vec<ApiEntry>, SvglError> {
        req.validate()?;

        let start = Instant::now();
        let url = req.url(&self.config.base_url, self.config.escape_query)?;

        tracing::debug!("searching SVGL API: query={}", req.query);

        let http_response = self.http.get(url).send().await?;

        let status = http_response.status();
        tracing::debug!("SVGL API response status: {}", status);

        if !status.is_success() {
            return Err(SvglError::HttpError { status: status.as_u16() });
        }

        let bytes = http_response.bytes().await?;
        let entries = parse_entries(&bytes).map_err(|e| SvglError::Parse(e.to_string()))?;

        tracing::debug!("search completed in {:?}, {} results", start.elapsed(), entries.len());

        Ok(entries)
    }
}

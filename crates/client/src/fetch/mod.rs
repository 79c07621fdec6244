//! SVG asset download.
//!
//! - Only absolute `http://` / `https://` URLs are requested
//! - Same browser header set as the search request
//! - 5s timeout per asset, no retries
//! - Any non-2xx status is an error

pub mod error;
pub mod url;

use bytes::Bytes;
use reqwest::{Client, Url, header};
use std::sync::Arc;
use std::time::{Duration, Instant};
use svgl_core::AppConfig;
use svgl_core::config::BROWSER_USER_AGENT;

pub use error::FetchError;
pub use self::url::has_http_scheme;

use crate::headers::browser_headers;

/// Configuration for the asset fetcher.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// User agent string (default: desktop Chrome)
    pub user_agent: String,

    /// Request timeout (default: 5s)
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { user_agent: BROWSER_USER_AGENT.to_string(), timeout: Duration::from_secs(5) }
    }
}

impl From<&AppConfig> for FetchConfig {
    fn from(config: &AppConfig) -> Self {
        Self { user_agent: config.user_agent.clone(), timeout: config.asset_timeout() }
    }
}

/// A downloaded asset.
#[derive(Debug, Clone)]
pub struct AssetResponse {
    /// Content-Type header
    pub content_type: Option<String>,
    /// Response body bytes
    pub bytes: Bytes,
}

impl AssetResponse {
    /// Body as SVG markup, if it is valid UTF-8.
    pub fn text(&self) -> Option<&str> {
        std::str::from_utf8(&self.bytes).ok()
    }
}

/// HTTP client for SVG assets.
#[derive(Debug, Clone)]
pub struct AssetFetcher {
    http: Client,
}

impl AssetFetcher {
    /// Create a new fetcher with the given configuration.
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        let headers = browser_headers(&config.user_agent).map_err(|e| FetchError::InvalidHeader(e.to_string()))?;

        let http = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .use_rustls_tls()
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .build()
            .map_err(|e| FetchError::Network(Arc::new(e)))?;

        Ok(Self { http })
    }

    /// Download the asset at `url_str`.
    pub async fn fetch(&self, url_str: &str) -> Result<AssetResponse, FetchError> {
        if !has_http_scheme(url_str) {
            return Err(FetchError::UnsupportedUrl(url_str.to_string()));
        }

        let start = Instant::now();
        let url = Url::parse(url_str).map_err(|_| FetchError::UnsupportedUrl(url_str.to_string()))?;

        let response = self.http.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpError { status: status.as_u16() });
        }

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        let bytes = response.bytes().await?;
        let fetch_ms = start.elapsed().as_millis() as u64;

        tracing::debug!("fetched {} in {}ms ({} bytes)", url, fetch_ms, bytes.len());

        Ok(AssetResponse { content_type, bytes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_config_default() {
        let config = FetchConfig::default();
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_asset_response_text() {
        let response =
            AssetResponse { content_type: Some("image/svg+xml".to_string()), bytes: Bytes::from_static(b"<svg/>") };
        assert_eq!(response.text(), Some("<svg/>"));

        let binary = AssetResponse { bytes: Bytes::from_static(&[0xff, 0xfe, 0x00]), ..response };
        assert_eq!(binary.text(), None);
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/library/rust.svg")
            .match_header("referer", "https://svgl.app/")
            .with_status(200)
            .with_header("content-type", "image/svg+xml")
            .with_body("<svg>rust</svg>")
            .create_async()
            .await;

        let fetcher = AssetFetcher::new(FetchConfig::default()).unwrap();
        let response = fetcher.fetch(&format!("{}/library/rust.svg", server.url())).await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.content_type.as_deref(), Some("image/svg+xml"));
        assert_eq!(response.text(), Some("<svg>rust</svg>"));
    }

    #[tokio::test]
    async fn test_fetch_not_found() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server.mock("GET", "/missing.svg").with_status(404).create_async().await;

        let fetcher = AssetFetcher::new(FetchConfig::default()).unwrap();
        let result = fetcher.fetch(&format!("{}/missing.svg", server.url())).await;
        assert!(matches!(result, Err(FetchError::HttpError { status: 404 })));
    }

    #[tokio::test]
    async fn test_fetch_timeout() {
        // Accepted by the kernel backlog but never answered.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let fetcher = AssetFetcher::new(FetchConfig { timeout: Duration::from_millis(100), ..Default::default() })
            .unwrap();
        let result = fetcher.fetch(&format!("http://{addr}/slow.svg")).await;

        assert!(matches!(result, Err(FetchError::Timeout)));
        drop(listener);
    }

    #[tokio::test]
    async fn test_fetch_rejects_relative_route() {
        let fetcher = AssetFetcher::new(FetchConfig::default()).unwrap();
        let result = fetcher.fetch("/library/rust.svg").await;
        assert!(matches!(result, Err(FetchError::UnsupportedUrl(_))));
    }
}

//! Keyword query pipeline.
//!
//! Turns the text the user typed into a result list:
//!
//! 1. Empty or whitespace-only input yields a single hint item.
//! 2. Search failures yield a single error item; an empty result set
//!    yields a single "no matches" item.
//! 3. The first `result_limit` entries are resolved one at a time, in
//!    response order. Entries without a usable route are dropped. Each
//!    asset download is best-effort: on any failure the item keeps its
//!    title and description but falls back to the default icon and an
//!    empty clipboard payload.
//!
//! Nothing is retried and no error reaches the host.

use std::path::PathBuf;

use svgl_core::{
    Action, AppConfig, KeywordQueryListener, QueryEvent, RenderResultList, ResultItem, SvgCache,
};

use crate::fetch::{AssetFetcher, FetchConfig, FetchError, has_http_scheme};
use crate::svgl::{ApiEntry, SearchRequest, SvglClient, SvglConfig, SvglError};

/// Default number of entries turned into items.
pub const DEFAULT_RESULT_LIMIT: usize = 10;

/// Errors building a pipeline.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Search(#[from] SvglError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// The query-to-result pipeline.
#[derive(Debug, Clone)]
pub struct SearchPipeline {
    search: SvglClient,
    fetcher: AssetFetcher,
    cache: SvgCache,
    fallback_icon: PathBuf,
    result_limit: usize,
}

impl SearchPipeline {
    /// Assemble a pipeline from its parts.
    pub fn new(search: SvglClient, fetcher: AssetFetcher, cache: SvgCache, fallback_icon: impl Into<PathBuf>) -> Self {
        Self { search, fetcher, cache, fallback_icon: fallback_icon.into(), result_limit: DEFAULT_RESULT_LIMIT }
    }

    /// Build a pipeline from the application configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, PipelineError> {
        let search = SvglClient::new(SvglConfig::from(config))?;
        let fetcher = AssetFetcher::new(FetchConfig::from(config))?;
        let cache = SvgCache::new(&config.cache_dir);

        Ok(Self::new(search, fetcher, cache, &config.fallback_icon).with_result_limit(config.result_limit))
    }

    /// Override how many leading entries are turned into items.
    pub fn with_result_limit(mut self, limit: usize) -> Self {
        self.result_limit = limit;
        self
    }

    /// Cache the pipeline writes assets to.
    pub fn cache(&self) -> &SvgCache {
        &self.cache
    }

    /// Run one keyword query.
    pub async fn handle(&self, argument: Option<&str>) -> RenderResultList {
        let query = argument.unwrap_or_default().trim();

        if query.is_empty() {
            return RenderResultList::single(ResultItem::hint(&self.fallback_icon));
        }

        let entries = match self.search.search(&SearchRequest::new(query)).await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!("search failed for query={}: {}", query, e);
                return RenderResultList::single(ResultItem::search_error(&self.fallback_icon, e));
            }
        };

        if entries.is_empty() {
            return RenderResultList::single(ResultItem::no_results(&self.fallback_icon));
        }

        if entries.len() > self.result_limit {
            tracing::debug!("dropping {} entries past the first {}", entries.len() - self.result_limit, self.result_limit);
        }

        let mut items = Vec::with_capacity(entries.len().min(self.result_limit));
        for entry in entries.iter().take(self.result_limit) {
            if let Some(item) = self.build_item(entry).await {
                items.push(item);
            }
        }

        RenderResultList::new(items)
    }

    /// Turn one API entry into a result item.
    ///
    /// Returns `None` when the entry has no usable route.
    async fn build_item(&self, entry: &ApiEntry) -> Option<ResultItem> {
        let asset_url = entry.asset_url()?;
        let title = entry.display_title();

        let (icon, payload) = self
            .cache_asset(title, asset_url)
            .await
            .unwrap_or_else(|| (self.fallback_icon.clone(), String::new()));

        Some(ResultItem {
            icon,
            name: title.to_string(),
            description: entry.description(),
            on_enter: Action::CopyToClipboard { text: payload },
        })
    }

    /// Download the asset and write it to the cache.
    ///
    /// Returns the cached path and the markup, or `None` if any step fails.
    async fn cache_asset(&self, title: &str, asset_url: &str) -> Option<(PathBuf, String)> {
        if !has_http_scheme(asset_url) {
            tracing::debug!("skipping non-http route for {}: {}", title, asset_url);
            return None;
        }

        let response = match self.fetcher.fetch(asset_url).await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!("asset fetch failed for {}: {}", asset_url, e);
                return None;
            }
        };

        if response.bytes.is_empty() {
            tracing::debug!("empty asset body for {}", asset_url);
            return None;
        }

        let Some(text) = response.text() else {
            tracing::debug!(
                "asset for {} is not valid UTF-8 (content-type: {})",
                asset_url,
                response.content_type.as_deref().unwrap_or("unknown")
            );
            return None;
        };

        match self.cache.store(title, &response.bytes).await {
            Ok(path) => Some((path, text.to_string())),
            Err(e) => {
                tracing::warn!("failed to cache asset for {}: {}", title, e);
                None
            }
        }
    }
}

#[async_trait::async_trait]
impl KeywordQueryListener for SearchPipeline {
    async fn on_event(&self, event: &(dyn QueryEvent + Sync)) -> RenderResultList {
        self.handle(event.argument()).await
    }
}

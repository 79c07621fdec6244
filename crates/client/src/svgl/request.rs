//! SVGL search request construction.

use crate::svgl::SvglError;

/// A search against the SVGL API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    /// Search text, already trimmed.
    pub query: String,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self { query: query.into() }
    }

    /// Validate the request.
    pub fn validate(&self) -> Result<(), SvglError> {
        if self.query.trim().is_empty() {
            return Err(SvglError::InvalidQuery("query cannot be empty".to_string()));
        }
        Ok(())
    }

    /// Build the search URL against `base_url`.
    ///
    /// By default the query goes into the URL as typed, leaving reserved
    /// characters such as `&` or `#` to change the meaning of the URL. With
    /// `escape` set it is percent-encoded as a form value instead.
    pub fn url(&self, base_url: &str, escape: bool) -> Result<url::Url, SvglError> {
        let base = base_url.trim_end_matches('/');

        if escape {
            let mut url = url::Url::parse(&format!("{base}/")).map_err(|e| SvglError::InvalidUrl(e.to_string()))?;
            url.query_pairs_mut().append_pair("search", &self.query);
            return Ok(url);
        }

        url::Url::parse(&format!("{base}/?search={}", self.query)).map_err(|e| SvglError::InvalidUrl(e.to_string()))
    }
}

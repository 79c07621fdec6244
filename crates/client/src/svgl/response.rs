//! SVGL API response types and normalization.
//!
//! The API returns a JSON array of loosely shaped objects. Every field is
//! optional, `category` is either a string or a list of strings, and `route`
//! is either a single URL or a map of theme name to URL.
//!
//! Elements are decoded one at a time. An element that does not match the
//! expected shape becomes an empty entry, which has no route and is dropped
//! later without failing the rest of the response.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Title used when an entry has none.
pub const UNKNOWN_TITLE: &str = "Unknown";

/// One element of the API's response array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiEntry {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub route: Option<Route>,
}

/// Category of a logo: a single name or a list of names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Category {
    One(String),
    Many(Vec<String>),
}

/// Location of a logo's SVG.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Route {
    /// A single URL.
    Url(String),
    /// Theme variant name (`light`, `dark`, ...) to URL. Non-string values
    /// (`null`, numbers) are kept but never resolve.
    Mapping(BTreeMap<String, Value>),
}

impl Category {
    /// Comma-separated category names.
    pub fn joined(&self) -> String {
        match self {
            Category::One(name) => name.clone(),
            Category::Many(names) => names.join(", "),
        }
    }
}

impl Route {
    /// Pick the URL to download.
    ///
    /// A mapping prefers `light`, then `dark`, then its first non-empty string
    /// value in key order. Empty strings and non-string values never resolve.
    pub fn resolve(&self) -> Option<&str> {
        let url = match self {
            Route::Url(url) => Some(url.as_str()),
            Route::Mapping(variants) => variant(variants, "light")
                .or_else(|| variant(variants, "dark"))
                .or_else(|| variants.values().filter_map(Value::as_str).find(|v| !v.is_empty())),
        };
        url.filter(|u| !u.is_empty())
    }
}

fn variant<'a>(variants: &'a BTreeMap<String, Value>, name: &str) -> Option<&'a str> {
    variants.get(name).and_then(Value::as_str).filter(|v| !v.is_empty())
}

/// Decode the response body.
///
/// Only a body that is not a JSON array is an error. Each element keeps its
/// position, so malformed elements still count toward the result limit.
pub fn parse_entries(bytes: &[u8]) -> Result<Vec<ApiEntry>, serde_json::Error> {
    let values: Vec<Value> = serde_json::from_slice(bytes)?;
    Ok(values.into_iter().map(ApiEntry::from_value).collect())
}

impl ApiEntry {
    /// Decode one array element, falling back to an empty entry.
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_else(|e| {
            tracing::debug!("malformed API entry: {}", e);
            Self::default()
        })
    }

    /// Resolved asset URL, if the entry has a usable route.
    pub fn asset_url(&self) -> Option<&str> {
        self.route.as_ref().and_then(Route::resolve)
    }

    /// Title shown in the result list.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(UNKNOWN_TITLE)
    }

    /// Subtitle shown in the result list.
    ///
    /// `Category: a, b` when the entry has a non-empty category, otherwise
    /// `Source: <url>` when it has a URL, otherwise empty.
    pub fn description(&self) -> String {
        let category = self.category.as_ref().map(Category::joined).unwrap_or_default();
        if !category.is_empty() {
            return format!("Category: {category}");
        }

        match self.url.as_deref() {
            Some(url) if !url.is_empty() => format!("Source: {url}"),
            _ => String::new(),
        }
    }
}

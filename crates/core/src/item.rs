//! Result items handed back to the host launcher.
//!
//! The host renders each [`ResultItem`] as one row (icon, name, description)
//! and runs its [`Action`] when the user presses enter.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the hint shown before the user has typed anything.
pub const HINT_NAME: &str = "Type a logo name to search...";

/// Description of the hint item.
pub const HINT_DESCRIPTION: &str = "e.g. svg firefox";

/// Name of the item shown when the search request fails.
pub const SEARCH_ERROR_NAME: &str = "Error searching for SVGs";

/// Name of the item shown when the search matched nothing.
pub const NO_RESULTS_NAME: &str = "No matching SVG logos found";

/// Description of the no-results item.
pub const NO_RESULTS_DESCRIPTION: &str = "Try a different search term.";

/// Action the host performs when an item is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Copy the given text to the clipboard.
    CopyToClipboard { text: String },
    /// Do nothing.
    DoNothing,
}

/// A single row in the launcher result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
    /// Filesystem path of the icon image.
    pub icon: PathBuf,
    /// Title line.
    pub name: String,
    /// Subtitle line.
    pub description: String,
    /// Action run on enter.
    pub on_enter: Action,
}

impl ResultItem {
    /// Hint shown for an empty query.
    pub fn hint(icon: impl Into<PathBuf>) -> Self {
        Self::placeholder(icon, HINT_NAME, HINT_DESCRIPTION.to_string())
    }

    /// Placeholder describing a failed search request.
    pub fn search_error(icon: impl Into<PathBuf>, detail: impl std::fmt::Display) -> Self {
        Self::placeholder(icon, SEARCH_ERROR_NAME, format!("Error: {detail}"))
    }

    /// Placeholder for a search that returned no entries.
    pub fn no_results(icon: impl Into<PathBuf>) -> Self {
        Self::placeholder(icon, NO_RESULTS_NAME, NO_RESULTS_DESCRIPTION.to_string())
    }

    fn placeholder(icon: impl Into<PathBuf>, name: &str, description: String) -> Self {
        Self { icon: icon.into(), name: name.to_string(), description, on_enter: Action::DoNothing }
    }

    /// Whether this item is a placeholder rather than a logo.
    pub fn is_placeholder(&self) -> bool {
        self.on_enter == Action::DoNothing
    }

    /// Text copied on enter, if any.
    pub fn payload(&self) -> Option<&str> {
        match &self.on_enter {
            Action::CopyToClipboard { text } => Some(text),
            Action::DoNothing => None,
        }
    }
}

/// Ordered list of items for the host to render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderResultList {
    pub items: Vec<ResultItem>,
}

impl RenderResultList {
    pub fn new(items: Vec<ResultItem>) -> Self {
        Self { items }
    }

    /// A list holding exactly one item.
    pub fn single(item: ResultItem) -> Self {
        Self { items: vec![item] }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<ResultItem>> for RenderResultList {
    fn from(items: Vec<ResultItem>) -> Self {
        Self::new(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_item() {
        let item = ResultItem::hint("images/icon.png");
        assert_eq!(item.name, HINT_NAME);
        assert_eq!(item.description, "e.g. svg firefox");
        assert_eq!(item.icon, PathBuf::from("images/icon.png"));
        assert!(item.is_placeholder());
        assert_eq!(item.payload(), None);
    }

    #[test]
    fn test_search_error_item() {
        let item = ResultItem::search_error("images/icon.png", "HTTP error: 500");
        assert_eq!(item.name, SEARCH_ERROR_NAME);
        assert_eq!(item.description, "Error: HTTP error: 500");
        assert_eq!(item.on_enter, Action::DoNothing);
    }

    #[test]
    fn test_copy_payload() {
        let item = ResultItem {
            icon: PathBuf::from("/tmp/svgl_search/svg_firefox.svg"),
            name: "Firefox".into(),
            description: "Category: Browser".into(),
            on_enter: Action::CopyToClipboard { text: "<svg/>".into() },
        };
        assert!(!item.is_placeholder());
        assert_eq!(item.payload(), Some("<svg/>"));
    }

    #[test]
    fn test_action_serialization() {
        let json = serde_json::to_value(Action::CopyToClipboard { text: "<svg/>".into() }).unwrap();
        assert_eq!(json, serde_json::json!({"type": "copy_to_clipboard", "text": "<svg/>"}));

        let json = serde_json::to_value(Action::DoNothing).unwrap();
        assert_eq!(json, serde_json::json!({"type": "do_nothing"}));
    }

    #[test]
    fn test_render_result_list_single() {
        let list = RenderResultList::single(ResultItem::no_results("images/icon.png"));
        assert_eq!(list.len(), 1);
        assert!(!list.is_empty());
        assert_eq!(list.items[0].description, NO_RESULTS_DESCRIPTION);
    }
}

//! Contract between the launcher host and this extension.
//!
//! The host owns the plugin lifecycle, rendering and the clipboard. It hands
//! the extension a [`QueryEvent`] for each keystroke and renders whatever
//! [`RenderResultList`] comes back.

use crate::item::RenderResultList;

/// A keyword query typed by the user.
pub trait QueryEvent {
    /// Raw trailing text after the keyword, if any.
    fn argument(&self) -> Option<&str>;
}

impl QueryEvent for &str {
    fn argument(&self) -> Option<&str> {
        Some(*self)
    }
}

impl QueryEvent for String {
    fn argument(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl QueryEvent for Option<String> {
    fn argument(&self) -> Option<&str> {
        self.as_deref()
    }
}

/// Listener invoked by the host for every keyword query.
///
/// Implementations never fail: every error is folded into the returned list
/// as a placeholder item.
#[async_trait::async_trait]
pub trait KeywordQueryListener: Send + Sync {
    async fn on_event(&self, event: &(dyn QueryEvent + Sync)) -> RenderResultList;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ResultItem;

    struct Echo;

    #[async_trait::async_trait]
    impl KeywordQueryListener for Echo {
        async fn on_event(&self, event: &(dyn QueryEvent + Sync)) -> RenderResultList {
            let text = event.argument().unwrap_or_default().to_string();
            RenderResultList::single(ResultItem::search_error("icon.png", text))
        }
    }

    #[test]
    fn test_query_event_impls() {
        assert_eq!("firefox".argument(), Some("firefox"));
        assert_eq!("svelte".to_string().argument(), Some("svelte"));
        assert_eq!(None::<String>.argument(), None);
        assert_eq!(Some("rust".to_string()).argument(), Some("rust"));
    }

    #[tokio::test]
    async fn test_listener_object_safety() {
        let listener: Box<dyn KeywordQueryListener> = Box::new(Echo);
        let list = listener.on_event(&"github").await;
        assert_eq!(list.items[0].description, "Error: github");
    }
}

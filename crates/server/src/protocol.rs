//! Wire format between the launcher and the extension.
//!
//! One JSON object per line in each direction:
//!
//! ```text
//! -> {"event":"keyword_query","argument":"firefox"}
//! <- {"action":"render_result_list","items":[{"icon":"...","name":"...","description":"...","on_enter":{...}}]}
//! ```

use serde::{Deserialize, Serialize};
use svgl_core::{QueryEvent, RenderResultList};

/// Event sent by the host.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HostEvent {
    /// The user typed after the extension keyword.
    KeywordQuery(KeywordQuery),
    /// Any event this extension does not subscribe to.
    #[serde(other)]
    Unknown,
}

/// Payload of a keyword query event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct KeywordQuery {
    #[serde(default)]
    pub argument: Option<String>,
}

impl QueryEvent for KeywordQuery {
    fn argument(&self) -> Option<&str> {
        self.argument.as_deref()
    }
}

/// Response written back to the host.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum HostResponse {
    RenderResultList(RenderResultList),
}

#[cfg(test)]
mod tests {
    use super::*;
    use svgl_core::ResultItem;

    #[test]
    fn test_decode_keyword_query() {
        let event: HostEvent = serde_json::from_str(r#"{"event":"keyword_query","argument":"firefox"}"#).unwrap();
        assert_eq!(event, HostEvent::KeywordQuery(KeywordQuery { argument: Some("firefox".into()) }));
    }

    #[test]
    fn test_decode_keyword_query_without_argument() {
        let event: HostEvent = serde_json::from_str(r#"{"event":"keyword_query"}"#).unwrap();
        assert_eq!(event, HostEvent::KeywordQuery(KeywordQuery { argument: None }));

        let event: HostEvent = serde_json::from_str(r#"{"event":"keyword_query","argument":null}"#).unwrap();
        assert_eq!(event, HostEvent::KeywordQuery(KeywordQuery { argument: None }));
    }

    #[test]
    fn test_decode_unknown_event() {
        let event: HostEvent = serde_json::from_str(r#"{"event":"item_enter","data":1}"#).unwrap();
        assert_eq!(event, HostEvent::Unknown);
    }

    #[test]
    fn test_encode_render_result_list() {
        let response = HostResponse::RenderResultList(RenderResultList::single(ResultItem::hint("images/icon.png")));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["action"], "render_result_list");
        assert_eq!(json["items"][0]["icon"], "images/icon.png");
        assert_eq!(json["items"][0]["name"], "Type a logo name to search...");
        assert_eq!(json["items"][0]["on_enter"]["type"], "do_nothing");
    }
}

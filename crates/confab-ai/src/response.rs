//! Provider response classification and reply extraction.
//!
//! Completion APIs have shipped several response shapes over time, so the
//! reply is pulled out through a fallback chain instead of one fixed
//! deserialization: typed field access first, then a raw JSON index path,
//! then the stringified body, with the empty string as the floor. A failed
//! tier degrades to the next; extraction itself never returns an error.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// Typed shape of a chat-completion response body.
///
/// Only the fields on the reply path are modeled; anything else in the
/// body (id, usage, timings) is ignored by serde.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletion {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

/// A provider response body, classified by how much structure it has.
#[derive(Debug, Clone)]
pub enum ProviderResponse {
    /// Body deserialized into the typed completion shape. The raw JSON is
    /// kept so the fallback tiers still see the full original body.
    Structured { completion: ChatCompletion, raw: Value },
    /// Body is valid JSON but not the typed shape; only index-path lookup
    /// applies.
    Mapping(Value),
    /// Body is not JSON at all.
    Opaque(String),
}

impl ProviderResponse {
    /// Classify a raw response body. Never fails: an unparseable body is
    /// simply `Opaque`.
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(raw) => match ChatCompletion::deserialize(&raw) {
                Ok(completion) => Self::Structured { completion, raw },
                Err(_) => Self::Mapping(raw),
            },
            Err(_) => Self::Opaque(body.to_string()),
        }
    }

    /// Extract the assistant reply, degrading tier by tier.
    ///
    /// Order: typed `choices[0].message.content`, then the JSON index path
    /// `["choices"][0]["message"]["content"]`, then the stringified body.
    /// Each tier runs only after the previous one conclusively failed
    /// (absent field, wrong type, unparseable body).
    pub fn reply_text(&self) -> String {
        let reply = match self {
            Self::Structured { completion, raw } => {
                structured_reply(completion).or_else(|| {
                    warn!("typed reply path absent, trying index path");
                    index_reply(raw)
                })
            }
            Self::Mapping(raw) => index_reply(raw),
            Self::Opaque(_) => None,
        };
        reply.unwrap_or_else(|| {
            warn!("no reply path in provider response, using stringified body");
            self.stringified()
        })
    }

    /// Final tier: the whole body as text. Floor is the empty string.
    fn stringified(&self) -> String {
        match self {
            Self::Structured { raw, .. } | Self::Mapping(raw) => {
                serde_json::to_string(raw).unwrap_or_default()
            }
            Self::Opaque(body) => body.clone(),
        }
    }
}

fn structured_reply(completion: &ChatCompletion) -> Option<String> {
    completion
        .choices
        .first()?
        .message
        .as_ref()?
        .content
        .clone()
}

fn index_reply(raw: &Value) -> Option<String> {
    raw.get("choices")?
        .get(0)?
        .get("message")?
        .get("content")?
        .as_str()
        .map(String::from)
}

#[cfg(test)]
mod extraction_tests {
    use super::*;

    #[test]
    fn typed_path_wins() {
        let response =
            ProviderResponse::from_body(r#"{"choices":[{"message":{"content":"hello"}}]}"#);
        assert!(matches!(response, ProviderResponse::Structured { .. }));
        assert_eq!(response.reply_text(), "hello");
    }

    #[test]
    fn extra_fields_ignored_by_typed_path() {
        let body = r#"{"id":"cmpl-1","usage":{"total_tokens":7},
                       "choices":[{"index":0,"message":{"role":"assistant","content":"hi"}}]}"#;
        let response = ProviderResponse::from_body(body);
        assert_eq!(response.reply_text(), "hi");
    }

    #[test]
    fn malformed_choice_falls_back_to_index_path() {
        // Second choice defeats typed deserialization, but the index path
        // only needs the first one.
        let body = r#"{"choices":[{"message":{"content":"hi"}},{"message":"oops"}]}"#;
        let response = ProviderResponse::from_body(body);
        assert!(matches!(response, ProviderResponse::Mapping(_)));
        assert_eq!(response.reply_text(), "hi");
    }

    #[test]
    fn null_content_degrades_to_stringified_body() {
        let body = r#"{"choices":[{"message":{"content":null}}]}"#;
        let response = ProviderResponse::from_body(body);
        assert!(matches!(response, ProviderResponse::Structured { .. }));
        // Both reply paths see null; the stringified body is the answer.
        assert_eq!(
            response.reply_text(),
            r#"{"choices":[{"message":{"content":null}}]}"#
        );
    }

    #[test]
    fn json_without_reply_path_is_stringified() {
        let response = ProviderResponse::from_body(r#"{"error":"overloaded"}"#);
        assert!(matches!(response, ProviderResponse::Mapping(_)));
        assert_eq!(response.reply_text(), r#"{"error":"overloaded"}"#);
    }

    #[test]
    fn non_json_body_is_returned_verbatim() {
        let response = ProviderResponse::from_body("<html>502 Bad Gateway</html>");
        assert!(matches!(response, ProviderResponse::Opaque(_)));
        assert_eq!(response.reply_text(), "<html>502 Bad Gateway</html>");
    }

    #[test]
    fn empty_body_floors_to_empty_string() {
        let response = ProviderResponse::from_body("");
        assert!(matches!(response, ProviderResponse::Opaque(_)));
        assert_eq!(response.reply_text(), "");
    }

    #[test]
    fn non_string_content_is_not_a_reply() {
        // content must be text; a numeric content fails both paths.
        let body = r#"{"choices":[{"message":{"content":42}}]}"#;
        let response = ProviderResponse::from_body(body);
        assert_eq!(response.reply_text(), body);
    }
}

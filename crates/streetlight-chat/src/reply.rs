//! The normalized chat reply shape and the tagged parse of provider output.

use serde::{Deserialize, Serialize};

/// The canonical structured reply every chat response is coerced into,
/// regardless of what the provider returned.
///
/// When parsing provider output, `response` is required (`content` is
/// accepted as an alias) and the remaining fields default, so a partial
/// structured reply still normalizes cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(alias = "content")]
    pub response: String,
    #[serde(default = "default_query_type")]
    pub query_type: String,
    #[serde(default)]
    pub files_to_query: Vec<String>,
    #[serde(default)]
    pub response_description: String,
    #[serde(default)]
    pub search_terms: Vec<String>,
}

fn default_query_type() -> String {
    "chat".to_string()
}

/// A provider reply after the explicit parse-attempt step.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderReply {
    /// The reply was valid JSON matching [`ChatReply`]'s shape.
    Structured(ChatReply),
    /// Anything else: plain prose, malformed JSON, or JSON missing the
    /// required `response` field.
    PlainText(String),
}

impl ProviderReply {
    pub fn parse(raw: &str) -> Self {
        match serde_json::from_str::<ChatReply>(raw) {
            Ok(reply) => Self::Structured(reply),
            Err(_) => Self::PlainText(raw.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_reply_parses() {
        let raw = r#"{
            "response": "PM2.5 levels are elevated along this corridor.",
            "query_type": "analysis",
            "files_to_query": ["streetlight_data.json"],
            "response_description": "Air quality summary",
            "search_terms": ["PM2.5", "corridor"]
        }"#;

        match ProviderReply::parse(raw) {
            ProviderReply::Structured(reply) => {
                assert_eq!(reply.query_type, "analysis");
                assert_eq!(reply.search_terms, vec!["PM2.5", "corridor"]);
            }
            other => panic!("expected structured reply, got {:?}", other),
        }
    }

    #[test]
    fn content_is_accepted_as_alias_for_response() {
        let raw = r#"{"content": "Noise peaks at 22:00."}"#;

        match ProviderReply::parse(raw) {
            ProviderReply::Structured(reply) => {
                assert_eq!(reply.response, "Noise peaks at 22:00.");
                assert_eq!(reply.query_type, "chat");
                assert!(reply.files_to_query.is_empty());
            }
            other => panic!("expected structured reply, got {:?}", other),
        }
    }

    #[test]
    fn prose_falls_through_to_plain_text() {
        let raw = "The area around the lake is quiet and has good air quality.";
        assert_eq!(ProviderReply::parse(raw), ProviderReply::PlainText(raw.to_string()));
    }

    #[test]
    fn json_without_response_field_is_plain_text() {
        let raw = r#"{"query_type": "analysis", "search_terms": ["noise"]}"#;
        assert_eq!(ProviderReply::parse(raw), ProviderReply::PlainText(raw.to_string()));
    }

    #[test]
    fn json_string_is_plain_text() {
        let raw = r#""just a quoted string""#;
        assert!(matches!(ProviderReply::parse(raw), ProviderReply::PlainText(_)));
    }
}

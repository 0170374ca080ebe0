//! Composes the domain prompt, calls the provider, and normalizes the reply.

use std::sync::Arc;

use streetlight_core::error::Result;

use crate::ports::{ChatMessage, ChatProvider};
use crate::prompt::{system_prompt, AdvisoryRule, RING_ROAD_RULE};
use crate::reply::{ChatReply, ProviderReply};

/// Description attached to replies that took the plain-text fallback path.
pub const FALLBACK_DESCRIPTION: &str = "Chat response from citizen report bot";

pub struct ChatOrchestrator {
    provider: Arc<dyn ChatProvider>,
    rules: Vec<AdvisoryRule>,
}

impl ChatOrchestrator {
    /// Orchestrator with the built-in advisory rules.
    pub fn new(provider: Arc<dyn ChatProvider>) -> Self {
        Self::with_rules(provider, vec![RING_ROAD_RULE])
    }

    pub fn with_rules(provider: Arc<dyn ChatProvider>, rules: Vec<AdvisoryRule>) -> Self {
        Self { provider, rules }
    }

    /// Send the user message under the fixed domain prompt and normalize
    /// whatever comes back into a [`ChatReply`].
    ///
    /// `candidate_files` seeds `files_to_query` (first three entries) when
    /// the provider answers in plain prose. Provider failures propagate
    /// untouched; a successful call always yields a well-formed reply.
    pub async fn ask(&self, message: &str, candidate_files: &[String]) -> Result<ChatReply> {
        let messages = [
            ChatMessage::system(system_prompt(&self.rules)),
            ChatMessage::user(message),
        ];

        let raw = self.provider.complete(&messages).await?;
        Ok(normalize(raw, candidate_files))
    }
}

fn normalize(raw: String, candidate_files: &[String]) -> ChatReply {
    match ProviderReply::parse(&raw) {
        ProviderReply::Structured(reply) => reply,
        ProviderReply::PlainText(text) => {
            tracing::debug!("Provider reply was not structured, wrapping as plain chat");
            ChatReply {
                response: text,
                query_type: "chat".to_string(),
                files_to_query: candidate_files.iter().take(3).cloned().collect(),
                response_description: FALLBACK_DESCRIPTION.to_string(),
                search_terms: Vec::new(),
            }
        }
    }
}

//! Chat provider port definitions

use async_trait::async_trait;
use serde::Serialize;
use streetlight_core::error::Result;

/// One message in a chat completion exchange.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: "system".to_string(), content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user".to_string(), content: content.into() }
    }
}

/// Port for an external chat completion provider.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send a message sequence and return the assistant's raw text reply.
    ///
    /// Any transport, auth, or upstream failure maps to
    /// [`StreetlightError::Provider`]; callers do not retry.
    ///
    /// [`StreetlightError::Provider`]: streetlight_core::StreetlightError::Provider
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String>;

    /// The model identifier this provider targets.
    fn model_name(&self) -> &str;
}

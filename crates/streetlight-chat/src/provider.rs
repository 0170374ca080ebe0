//! GitHub Models chat completion client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use streetlight_core::error::{Result, StreetlightError};

use crate::ports::{ChatMessage, ChatProvider};

/// Fixed sampling temperature: reproducibility bias over creativity.
const TEMPERATURE: f32 = 0.1;

pub const DEFAULT_ENDPOINT: &str = "https://models.github.ai/inference";
pub const DEFAULT_MODEL: &str = "openai/gpt-4.1";

/// Chat completion client for the GitHub Models inference endpoint
/// (Azure AI Inference REST contract).
pub struct GithubModelsClient {
    endpoint: String,
    model: String,
    token: String,
    client: reqwest::Client,
}

impl GithubModelsClient {
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            token: token.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Client against the default endpoint and model.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self::new(DEFAULT_ENDPOINT, DEFAULT_MODEL, token)
    }
}

#[async_trait]
impl ChatProvider for GithubModelsClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        let request = CompletionRequest { model: &self.model, messages, temperature: TEMPERATURE };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.endpoint))
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                StreetlightError::Provider(format!("request to {} failed: {}", self.endpoint, e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(StreetlightError::Provider(format!(
                "provider returned {}: {}",
                status, body
            )));
        }

        let completion: CompletionResponse = response.json().await.map_err(|e| {
            StreetlightError::Provider(format!("malformed completion response: {}", e))
        })?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| StreetlightError::Provider("completion contained no choices".to_string()))
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: String,
}

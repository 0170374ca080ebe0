use std::env;
use std::path::PathBuf;

use streetlight_chat::{DEFAULT_ENDPOINT, DEFAULT_MODEL};

/// API server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub port: u16,
    pub cors_origin: String,
    pub dataset_path: PathBuf,
    pub chat: ChatConfig,
}

/// Chat provider configuration
#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub endpoint: String,
    pub model: String,
    /// Provider credential; its absence disables the chat endpoint but
    /// nothing else.
    pub token: Option<String>,
}

impl ChatConfig {
    pub fn is_configured(&self) -> bool {
        self.token.is_some()
    }
}

impl ApiConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let port = env::var("STREETLIGHT_PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(8000);

        let cors_origin = env::var("STREETLIGHT_CORS_ORIGIN").unwrap_or_else(|_| "*".to_string());

        let dataset_path = env::var("STREETLIGHT_DATASET")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("ring_roads_streetlight_points.geojson"));

        let chat = ChatConfig {
            endpoint: env::var("STREETLIGHT_CHAT_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
            model: env::var("STREETLIGHT_CHAT_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            token: env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty()),
        };

        Self { port, cors_origin, dataset_path, chat }
    }

    /// Get the server bind address
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

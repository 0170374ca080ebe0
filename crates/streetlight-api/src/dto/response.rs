use serde::Serialize;
use streetlight_chat::ChatReply;

/// Chat endpoint response, always fully populated per the normalization
/// guarantee.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub query_type: String,
    pub files_to_query: Vec<String>,
    pub response_description: String,
    pub search_terms: Vec<String>,
}

impl From<ChatReply> for ChatResponse {
    fn from(reply: ChatReply) -> Self {
        Self {
            response: reply.response,
            query_type: reply.query_type,
            files_to_query: reply.files_to_query,
            response_description: reply.response_description,
            search_terms: reply.search_terms,
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub features_loaded: usize,
    pub gpt_configured: bool,
}

/// Capability descriptor served at the root path
#[derive(Debug, Serialize)]
pub struct ServiceDescriptor {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: EndpointMap,
}

#[derive(Debug, Serialize)]
pub struct EndpointMap {
    #[serde(rename = "/api/points")]
    pub points: &'static str,
    #[serde(rename = "/api/chat")]
    pub chat: &'static str,
    #[serde(rename = "/api/health")]
    pub health: &'static str,
}

impl Default for ServiceDescriptor {
    fn default() -> Self {
        Self {
            message: "Streetlight Points & Citizen Report API",
            version: env!("CARGO_PKG_VERSION"),
            endpoints: EndpointMap {
                points: "GET - Fetch points by bounding box",
                chat: "POST - Chat with citizen report bot",
                health: "GET - Health check",
            },
        }
    }
}

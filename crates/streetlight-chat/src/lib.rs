//! Conversational layer of the streetlight service: the provider port, the
//! GitHub Models client, the fixed domain prompt with named advisory rules,
//! and the orchestrator that normalizes provider output.

pub mod orchestrator;
pub mod ports;
pub mod prompt;
pub mod provider;
pub mod reply;

pub use orchestrator::{ChatOrchestrator, FALLBACK_DESCRIPTION};
pub use ports::{ChatMessage, ChatProvider};
pub use prompt::{system_prompt, AdvisoryRule, RING_ROAD_RULE};
pub use provider::{GithubModelsClient, DEFAULT_ENDPOINT, DEFAULT_MODEL};
pub use reply::{ChatReply, ProviderReply};

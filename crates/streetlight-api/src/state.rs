use std::sync::Arc;

use streetlight_chat::ChatOrchestrator;
use streetlight_core::FeatureStore;

/// Shared per-process state, built once in `main` and injected into handlers.
///
/// The store is read-only after startup, so handlers share it without
/// locking. `chat` is `None` when no provider credential was configured;
/// only the chat endpoint cares.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<FeatureStore>,
    pub chat: Option<Arc<ChatOrchestrator>>,
}

impl AppState {
    pub fn new(store: Arc<FeatureStore>, chat: Option<Arc<ChatOrchestrator>>) -> Self {
        Self { store, chat }
    }

    pub fn chat_configured(&self) -> bool {
        self.chat.is_some()
    }
}

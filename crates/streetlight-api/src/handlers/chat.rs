use std::sync::Arc;

use axum::{extract::State, Json};
use streetlight_core::StreetlightError;

use crate::dto::{ChatRequest, ChatResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// Files the bot may point clients at when it answers in plain prose.
const CANDIDATE_FILES: [&str; 3] =
    ["streetlight_data.json", "road_reports.json", "maintenance_logs.json"];

pub async fn chat_with_bot(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Some(orchestrator) = &state.chat else {
        return Err(StreetlightError::MissingCredential { key: "GITHUB_TOKEN".to_string() }.into());
    };

    tracing::info!(message_len = request.message.len(), "Processing chat request");

    let candidates: Vec<String> = CANDIDATE_FILES.iter().map(|f| f.to_string()).collect();
    let reply = orchestrator.ask(&request.message, &candidates).await?;

    Ok(Json(reply.into()))
}

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::state::AppState;

/// Create the API router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::service_descriptor))
        .route("/api/health", get(handlers::health_check))
        .route("/api/points", get(handlers::get_points))
        .route("/api/chat", post(handlers::chat_with_bot))
        .with_state(state)
}

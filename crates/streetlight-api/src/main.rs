use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use streetlight_chat::{ChatOrchestrator, GithubModelsClient};
use streetlight_core::FeatureStore;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use streetlight_api::config::ApiConfig;
use streetlight_api::router::create_router;
use streetlight_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "streetlight_api=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env();

    tracing::info!(
        port = config.port,
        dataset = %config.dataset_path.display(),
        chat_model = %config.chat.model,
        "Starting streetlight API server"
    );

    // Load once, strictly before serving; a missing or broken dataset
    // degrades to an empty store instead of aborting startup.
    let store = Arc::new(FeatureStore::load(&config.dataset_path));

    let chat = match &config.chat.token {
        Some(token) => {
            tracing::info!(
                endpoint = %config.chat.endpoint,
                model = %config.chat.model,
                "Chat provider configured"
            );
            let provider =
                GithubModelsClient::new(&config.chat.endpoint, &config.chat.model, token);
            Some(Arc::new(ChatOrchestrator::new(Arc::new(provider))))
        }
        None => {
            tracing::warn!(
                "GITHUB_TOKEN not set; /api/chat will report a configuration error"
            );
            None
        }
    };

    let state = Arc::new(AppState::new(store, chat));

    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_origin)?);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("CORS enabled for {}", config.cors_origin);

    axum::serve(listener, app).await?;

    Ok(())
}

fn cors_layer(origin: &str) -> anyhow::Result<CorsLayer> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Ok(if origin == "*" {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(origin.parse::<HeaderValue>()?)
    })
}

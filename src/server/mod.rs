pub mod handlers;
mod types;

pub use types::{ErrorResponse, GenerateRequest, GenerateResponse};

use crate::{Result, config::Config, llm::GeminiClient};
use axum::{Router, routing::post};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

/// Builds the application router around the given state. Split from [`run`]
/// so tests can drive it with `tower::ServiceExt::oneshot`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/generate",
            post(handlers::generate).fallback(handlers::method_not_allowed),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let api_key_configured = !config.llm.api_key.is_empty();
    if !api_key_configured {
        warn!("No API key configured; generate requests will fail until GEMINI_API_KEY is set");
    }

    let generator = Arc::new(GeminiClient::new(config.llm.clone())?);

    let state = AppState {
        generator,
        api_key_configured,
    };
    let app = router(state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

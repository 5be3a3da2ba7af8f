//! Router construction and server startup.

use anyhow::Result;
use axum::{
    http::Method,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::api::handlers::{health_check, score};
use crate::config::Config;
use crate::model::Model;

/// Application state shared with every handler.
///
/// Holds no mutable state; the model is behind an `Arc` so the state stays
/// cheap to clone per request.
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn Model>,
}

impl AppState {
    pub fn new(model: Arc<dyn Model>) -> Self {
        Self { model }
    }
}

/// Build the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint for deployment probes
        .route("/health", get(health_check))
        // Scoring endpoint
        .route("/score", post(score))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Bind the listener and serve until terminated.
pub async fn start_api_server(config: &Config, state: AppState) -> Result<()> {
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    log::info!("scoring service listening on http://{}", config.bind_addr());
    log::info!("  GET  /health - Health check");
    log::info!("  POST /score  - Score a feature list");

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

//! Yappster HTTP API server (Axum).
//!
//! Exposes the `compress` and `status` tools, their schemas, mode detection,
//! and a health probe.

pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use error::ApiError;
use state::AppState;

/// Build the application router with local-only compression.
pub fn app() -> Router {
    app_with_state(AppState::new())
}

/// Build the application router with a custom state.
pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .merge(routes::health_routes())
        .merge(routes::tool_routes())
        .fallback(not_found)
        .with_state(state)
}

async fn not_found() -> ApiError {
    ApiError::not_found("no such route")
}

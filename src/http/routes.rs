//! Axum router configuration

use axum::{middleware, routing::any, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

use super::handlers::{health_check, transcript, version_check};
use super::middleware::{preflight, request_logger};

/// Create the Axum router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health and version endpoints
        .route("/health", any(health_check))
        .route("/version", any(version_check))
        // The transcript endpoint does not depend on the path.
        .fallback(transcript)
        // Middleware; preflight runs before any handler or method check.
        .layer(middleware::from_fn(preflight))
        .layer(middleware::from_fn(request_logger))
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}

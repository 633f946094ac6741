//! Router configuration for the web server.

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use super::handlers;
use super::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/tabs", get(handlers::get_tabs))
        .route("/api/onug", get(handlers::check_tabs))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

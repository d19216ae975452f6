//! HTTP API server for the calculator service.
//!
//! Provides REST endpoints for integer addition and subtraction,
//! with structured logging (tracing) and a health check endpoint
//! for container orchestrators.

pub mod config;
pub mod error;
pub mod routes;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Creates the Axum application router with all routes.
///
/// Handlers are stateless and pure, so the router carries no shared state.
pub fn create_app() -> Router {
    Router::new()
        .route("/", get(routes::info::get))
        .route("/health", get(routes::health::check))
        .route("/add/{a}/{b}", get(routes::ops::add))
        .route("/sub/{a}/{b}", get(routes::ops::sub))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

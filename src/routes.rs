//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST   /shorten`                     - Create a short URL
//! - `GET    /shorten/{short_code}`        - Redirect to the original URL
//! - `GET    /shorten/{short_code}/stats`  - Full record with access count
//! - `PUT    /shorten/{short_code}`        - Point the code at a new URL
//! - `DELETE /shorten/{short_code}`        - Remove the record
//! - `GET    /health`                      - Health check
//! - `GET    /`                            - Greeting
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Short-code validation** - Blank path parameters are rejected with 400
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{
    delete_url_handler, health_handler, redirect_handler, shorten_handler, stats_handler,
    update_url_handler,
};
use crate::api::middleware::{tracing, validate_code};
use crate::state::AppState;
use axum::routing::{get, post};
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

async fn root_handler() -> &'static str {
    "Hello World"
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let code_routes = Router::new()
        .route(
            "/shorten/{short_code}",
            get(redirect_handler)
                .put(update_url_handler)
                .delete(delete_url_handler),
        )
        .route("/shorten/{short_code}/stats", get(stats_handler))
        .route_layer(middleware::from_fn(validate_code::layer));

    let router = Router::new()
        .route("/", get(root_handler))
        .route("/shorten", post(shorten_handler))
        .route("/health", get(health_handler))
        .merge(code_routes)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

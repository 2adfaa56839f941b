//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST   /url`       - Store a mapping
//! - `GET    /{alias}`   - Alias redirect
//! - `DELETE /{alias}`   - Remove a mapping
//! - `GET    /health`    - Health check: storage engine
//!
//! # Middleware
//!
//! Outermost first:
//!
//! - **Request id** - `x-request-id` assigned, traced and echoed back
//! - **Tracing** - Structured request/response logging
//! - **Panic recovery** - Panics become `500 internal_error`
//! - **CORS** - Any origin, no credentials
//! - **Timeout** - `408` after `HTTP_TIMEOUT`
//! - **Path normalization** - Trailing slash handling (applied by [`with_path_normalization`])

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{cors, panic, request_id, timeout, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use std::time::Duration;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// `http_timeout` bounds the handling time of every request.
pub fn app_router(state: AppState, http_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::alias_routes())
        .with_state(state)
        .layer(timeout::layer(http_timeout))
        .layer(cors::layer())
        .layer(panic::layer())
        .layer(request_id::propagate_layer())
        .layer(tracing::layer())
        .layer(request_id::set_layer())
}

/// Strips trailing slashes before routing, so `/health/` hits `/health`.
pub fn with_path_normalization(router: Router) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router)
}

//! API route configuration.

use crate::api::handlers::{delete_handler, redirect_handler, save_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Alias routes.
///
/// # Endpoints
///
/// - `POST   /url`       - Store a mapping
/// - `GET    /{alias}`   - Redirect to the target URL
/// - `DELETE /{alias}`   - Remove a mapping
pub fn alias_routes() -> Router<AppState> {
    Router::new()
        .route("/url", post(save_handler))
        .route("/{alias}", get(redirect_handler).delete(delete_handler))
}

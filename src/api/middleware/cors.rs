//! Cross-origin resource sharing policy.

use axum::http::{HeaderName, Method, header};
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};

/// Preflight responses may be cached by browsers for this long.
const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(300);

/// Creates the CORS layer.
///
/// Any origin may call the API; credentials are not allowed, which keeps the
/// wildcard origin valid.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ACCEPT,
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-csrf-token"),
        ])
        .expose_headers([header::LINK])
        .allow_credentials(false)
        .max_age(PREFLIGHT_MAX_AGE)
}

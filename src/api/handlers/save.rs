//! Handler for the save endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::save::{SaveRequest, SaveResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Stores a mapping under a caller-chosen or generated alias.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/a/b",
///   "alias": "ex1"   // optional
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "id": 1, "alias": "ex1", "url": "https://example.com/a/b" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
/// Returns 409 Conflict if the alias already exists.
pub async fn save_handler(
    State(state): State<AppState>,
    Json(payload): Json<SaveRequest>,
) -> Result<(StatusCode, Json<SaveResponse>), AppError> {
    if let Err(errors) = payload.validate() {
        tracing::info!(url = %payload.url, "Invalid save request");
        return Err(errors.into());
    }

    let mapping = state
        .alias_service
        .save_mapping(payload.url, payload.alias)
        .await
        .inspect_err(|e| tracing::info!(error = %e, "Failed to save mapping"))?;

    Ok((StatusCode::CREATED, Json(mapping.into())))
}

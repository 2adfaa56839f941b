//! Handler for alias deletion.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::error::AppError;
use crate::state::AppState;

/// Deletes the mapping bound to an alias.
///
/// # Endpoint
///
/// `DELETE /{alias}`
///
/// The alias becomes available for reuse immediately; its id is not.
///
/// # Errors
///
/// Returns 404 Not Found if the alias doesn't exist.
pub async fn delete_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state
        .alias_service
        .delete_mapping(&alias)
        .await
        .inspect_err(|e| tracing::info!(alias = %alias, error = %e, "Failed to delete mapping"))?;

    Ok(StatusCode::NO_CONTENT)
}

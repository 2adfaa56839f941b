//! Error taxonomy shared by the store, the alias service and the HTTP layer.
//!
//! Every failure surfaced by the core falls into one of four kinds:
//!
//! | Variant                          | HTTP status | `code`             |
//! |----------------------------------|-------------|--------------------|
//! | [`AppError::InvalidInput`]       | 400         | `validation_error` |
//! | [`AppError::AliasNotFound`]      | 404         | `not_found`        |
//! | [`AppError::AliasAlreadyExists`] | 409         | `conflict`         |
//! | [`AppError::Storage`]            | 500         | `internal_error`   |
//!
//! Storage messages are logged where they are produced and never rendered to
//! clients.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Serialized error payload returned to HTTP clients.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Caller supplied something the core refuses to process.
    #[error("{message}")]
    InvalidInput { message: String, details: Value },

    /// The alias is already bound to another mapping.
    #[error("alias '{alias}' already exists")]
    AliasAlreadyExists { alias: String },

    /// No live mapping carries this alias.
    #[error("alias '{alias}' not found")]
    AliasNotFound { alias: String },

    /// Any failure of the underlying engine: connectivity, timeout, schema.
    #[error("storage error: {message}")]
    Storage { message: String },
}

impl AppError {
    pub fn invalid_input(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidInput {
            message: message.into(),
            details,
        }
    }

    pub fn already_exists(alias: impl Into<String>) -> Self {
        Self::AliasAlreadyExists {
            alias: alias.into(),
        }
    }

    pub fn not_found(alias: impl Into<String>) -> Self {
        Self::AliasNotFound {
            alias: alias.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Returns the HTTP status this error kind maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            AppError::AliasNotFound { .. } => StatusCode::NOT_FOUND,
            AppError::AliasAlreadyExists { .. } => StatusCode::CONFLICT,
            AppError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Builds the client-facing error payload.
    ///
    /// Storage failures are reduced to a generic message.
    pub fn to_error_info(&self) -> ErrorInfo {
        match self {
            AppError::InvalidInput { message, details } => ErrorInfo {
                code: "validation_error",
                message: message.clone(),
                details: details.clone(),
            },
            AppError::AliasNotFound { alias } => ErrorInfo {
                code: "not_found",
                message: "Alias not found".to_string(),
                details: json!({ "alias": alias }),
            },
            AppError::AliasAlreadyExists { alias } => ErrorInfo {
                code: "conflict",
                message: "Alias already exists".to_string(),
                details: json!({ "alias": alias }),
            },
            AppError::Storage { .. } => ErrorInfo {
                code: "internal_error",
                message: "Internal storage error".to_string(),
                details: json!({}),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::invalid_input(
            "Request validation failed",
            serde_json::to_value(&errors).unwrap_or_else(|_| json!({})),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            AppError::invalid_input("bad", json!({})).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::not_found("abc").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::already_exists("abc").status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::storage("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_storage_details_are_not_exposed() {
        let info = AppError::storage("connection refused at 10.0.0.5:5432").to_error_info();

        assert_eq!(info.code, "internal_error");
        assert!(!info.message.contains("10.0.0.5"));
        assert_eq!(info.details, json!({}));
    }

    #[test]
    fn test_display_includes_alias() {
        assert_eq!(
            AppError::already_exists("ex1").to_string(),
            "alias 'ex1' already exists"
        );
        assert_eq!(
            AppError::not_found("ex1").to_string(),
            "alias 'ex1' not found"
        );
    }
}

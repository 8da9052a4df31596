//! Unified error handling for the HTTP layer.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use adminhub_core::Violation;

use crate::db::RepositoryError;
use crate::services::AdminServiceError;

/// Application-level error type returned by handlers.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Resource already exists.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Request fields failed validation.
    #[error("Validation failed")]
    Validation(Vec<Violation>),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl From<AdminServiceError> for AppError {
    fn from(err: AdminServiceError) -> Self {
        match err {
            AdminServiceError::Validation(violations) => Self::Validation(violations),
            AdminServiceError::InvalidAdminData => Self::BadRequest(err.to_string()),
            AdminServiceError::NotFound(_) => Self::NotFound(err.to_string()),
            AdminServiceError::DuplicateEmail(_) => Self::Conflict(err.to_string()),
            AdminServiceError::Repository(e) => Self::Database(e),
        }
    }
}

/// JSON error body.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    violations: Vec<Violation>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log server errors with Sentry
        if matches!(self, Self::Database(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        // Don't expose internal error details to clients
        let body = match self {
            Self::Database(_) => ErrorBody {
                error: "Internal server error".to_string(),
                violations: Vec::new(),
            },
            Self::Validation(violations) => ErrorBody {
                error: "Validation failed".to_string(),
                violations,
            },
            Self::NotFound(message) | Self::Conflict(message) | Self::BadRequest(message) => {
                ErrorBody {
                    error: message,
                    violations: Vec::new(),
                }
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use adminhub_core::AdminId;

    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("Admin not found".to_string());
        assert_eq!(err.to_string(), "Not found: Admin not found");

        let err = AppError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid input");
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            get_status(AppError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Conflict("test".to_string())),
            StatusCode::CONFLICT
        );
        assert_eq!(
            get_status(AppError::Validation(Vec::new())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::BadRequest("test".to_string())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_service_errors_map_to_statuses() {
        assert_eq!(
            get_status(AdminServiceError::NotFound(AdminId::new(9)).into()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AdminServiceError::DuplicateEmail("a@x".to_string()).into()),
            StatusCode::CONFLICT
        );
        assert_eq!(
            get_status(AdminServiceError::InvalidAdminData.into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(
                AdminServiceError::Repository(RepositoryError::DataCorruption(
                    "bad row".to_string()
                ))
                .into()
            ),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use domain::{AuthError, DomainError};

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found.
    NotFound(String),
    /// A required request field was missing or unparseable.
    Validation {
        field: &'static str,
        reason: String,
    },
    /// Domain logic error.
    Domain(DomainError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Validation { field, reason } => (
                StatusCode::BAD_REQUEST,
                format!("invalid value for field `{field}`: {reason}"),
            ),
            ApiError::Domain(err) => domain_error_to_response(err),
        };

        let body = serde_json::json!({ "message": message });
        (status, axum::Json(body)).into_response()
    }
}

fn domain_error_to_response(err: DomainError) -> (StatusCode, String) {
    match &err {
        DomainError::Validation { .. } => (StatusCode::BAD_REQUEST, err.to_string()),
        DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, err.to_string()),
        DomainError::Auth(auth_err) => match auth_err {
            AuthError::UnknownUser | AuthError::InvalidPassword => {
                (StatusCode::UNAUTHORIZED, err.to_string())
            }
            AuthError::Inactive => (StatusCode::FORBIDDEN, err.to_string()),
        },
        DomainError::Store(store_err) => {
            // The store's message goes to the log, not to the client.
            tracing::error!(error = %store_err, "store operation failed");
            (StatusCode::BAD_REQUEST, "internal error".to_string())
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::Domain(err)
    }
}

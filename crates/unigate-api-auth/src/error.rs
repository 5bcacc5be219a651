//! Error types for the authentication API.
//!
//! Uses RFC 7807 Problem Details for HTTP error bodies.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use unigate_core::{FieldError, ProblemDetails};

/// Authentication API errors.
#[derive(Debug, Error)]
pub enum ApiAuthError {
    /// Email or password did not match.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No valid session on a protected route.
    #[error("Authentication required")]
    Unauthorized,

    /// Session valid but role insufficient.
    #[error("Admin role required")]
    Forbidden,

    /// Request body failed validation.
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal server error.
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiAuthError {
    fn into_response(self) -> Response {
        let (status, problem) = match self {
            ApiAuthError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                ProblemDetails::new("invalid-credentials", "Invalid credentials", 401),
            ),
            ApiAuthError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                ProblemDetails::new("unauthorized", "Authentication required", 401),
            ),
            ApiAuthError::Forbidden => (
                StatusCode::FORBIDDEN,
                ProblemDetails::new("forbidden", "Admin role required", 403),
            ),
            ApiAuthError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ProblemDetails::new("validation-failed", "Validation failed", 422)
                    .with_errors(errors),
            ),
            ApiAuthError::Database(ref e) => {
                tracing::error!(error = %e, "Database error in auth API");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ProblemDetails::new("internal", "Internal server error", 500),
                )
            }
            ApiAuthError::Internal(ref msg) => {
                tracing::error!(error = %msg, "Internal error in auth API");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ProblemDetails::new("internal", "Internal server error", 500),
                )
            }
        };

        (status, Json(problem)).into_response()
    }
}

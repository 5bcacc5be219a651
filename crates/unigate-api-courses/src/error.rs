//! Error types for the course catalog API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use unigate_core::{FieldError, ProblemDetails};

/// Error type for the course catalog API.
#[derive(Debug, Error)]
pub enum ApiCoursesError {
    /// Course not found.
    #[error("Course not found")]
    NotFound,

    /// Input failed validation; every offending field is listed.
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    /// Database error. Surfaced to the caller as a generic failure,
    /// never with partial results.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for ApiCoursesError {
    fn into_response(self) -> Response {
        let (status, problem) = match self {
            ApiCoursesError::NotFound => (
                StatusCode::NOT_FOUND,
                ProblemDetails::new("not-found", "Course not found", 404),
            ),
            ApiCoursesError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ProblemDetails::new("validation-failed", "Validation failed", 422)
                    .with_errors(errors),
            ),
            ApiCoursesError::Database(ref e) => {
                tracing::error!(error = %e, "Course query failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ProblemDetails::new("query-failed", "Query failed", 500)
                        .with_detail("Failed to reach the course store. Please try again."),
                )
            }
        };

        (status, Json(problem)).into_response()
    }
}

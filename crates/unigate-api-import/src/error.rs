//! Error types for the bulk import API.
//!
//! Uses RFC 7807 Problem Details for HTTP error bodies. Batch-level
//! validation failures are not errors in this sense; they are reported
//! through the structured import response (see [`crate::models`]).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use unigate_core::ProblemDetails;

/// Import API errors.
#[derive(Debug, Error)]
pub enum ImportError {
    /// File exceeds maximum allowed size.
    #[error("File too large: {0}")]
    FileTooLarge(String),

    /// CSV contains too many data rows.
    #[error("Too many rows: {0}")]
    TooManyRows(String),

    /// Upload did not contain a usable file field.
    #[error("Invalid upload: {0}")]
    InvalidUpload(String),

    /// Required CSV headers are missing.
    #[error("Missing required headers: {0}")]
    MissingHeaders(String),

    /// CSV could not be parsed at all.
    #[error("Invalid CSV: {0}")]
    InvalidCsv(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for ImportError {
    fn into_response(self) -> Response {
        let (status, problem) = match self {
            ImportError::FileTooLarge(ref detail) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                ProblemDetails::new("file-too-large", "File too large", 413)
                    .with_detail(detail.clone()),
            ),
            ImportError::TooManyRows(ref detail) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                ProblemDetails::new("too-many-rows", "Too many rows", 413)
                    .with_detail(detail.clone()),
            ),
            ImportError::InvalidUpload(ref detail) => (
                StatusCode::BAD_REQUEST,
                ProblemDetails::new("invalid-upload", "Invalid upload", 400)
                    .with_detail(detail.clone()),
            ),
            ImportError::MissingHeaders(ref detail) => (
                StatusCode::BAD_REQUEST,
                ProblemDetails::new("missing-headers", "Missing required headers", 400)
                    .with_detail(detail.clone()),
            ),
            ImportError::InvalidCsv(ref detail) => (
                StatusCode::BAD_REQUEST,
                ProblemDetails::new("invalid-csv", "Invalid CSV", 400).with_detail(detail.clone()),
            ),
            ImportError::Database(ref e) => {
                tracing::error!(error = %e, "Import failed on store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ProblemDetails::new("import-failed", "Import failed", 500)
                        .with_detail("Failed to write the import batch. No rows were committed."),
                )
            }
        };

        (status, Json(problem)).into_response()
    }
}

//! Error Primitives
//!
//! Shared error reporting types for the API crates: RFC 7807 problem
//! details for HTTP error bodies, and field-addressable validation
//! errors. Both the course form validation and the CSV row validation
//! report their problems as lists of [`FieldError`]s.

use serde::Serialize;

/// Base URL for problem type URIs.
const ERROR_BASE_URL: &str = "https://unigate.app/errors";

/// RFC 7807 Problem Details structure.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ProblemDetails {
    /// URI identifying the problem type.
    #[serde(rename = "type")]
    pub error_type: String,

    /// Short human-readable summary.
    pub title: String,

    /// HTTP status code.
    pub status: u16,

    /// Human-readable explanation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Field-level validation errors, when applicable.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

impl ProblemDetails {
    /// Create a new `ProblemDetails` instance.
    #[must_use]
    pub fn new(error_type: &str, title: &str, status: u16) -> Self {
        Self {
            error_type: format!("{ERROR_BASE_URL}/{error_type}"),
            title: title.to_string(),
            status,
            detail: None,
            errors: Vec::new(),
        }
    }

    /// Add detail message.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Attach field-level validation errors.
    #[must_use]
    pub fn with_errors(mut self, errors: Vec<FieldError>) -> Self {
        self.errors = errors;
        self
    }
}

/// A single field-level validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FieldError {
    /// The input field that failed validation.
    pub field: String,
    /// Human-readable description of the failure.
    pub message: String,
}

impl FieldError {
    /// Create a field error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_field_and_message() {
        let err = FieldError::new("tuitionFee", "must be a non-negative number");
        assert_eq!(err.to_string(), "tuitionFee: must be a non-negative number");
    }

    #[test]
    fn test_serializes_to_flat_object() {
        let err = FieldError::new("level", "Level is required");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["field"], "level");
        assert_eq!(json["message"], "Level is required");
    }

    #[test]
    fn test_problem_details_shape() {
        let problem = ProblemDetails::new("validation-failed", "Validation failed", 422)
            .with_errors(vec![FieldError::new("campus", "Campus is required")]);
        let json = serde_json::to_value(&problem).unwrap();
        assert_eq!(
            json["type"],
            "https://unigate.app/errors/validation-failed"
        );
        assert_eq!(json["status"], 422);
        assert_eq!(json["errors"][0]["field"], "campus");
        assert!(json.get("detail").is_none());
    }
}

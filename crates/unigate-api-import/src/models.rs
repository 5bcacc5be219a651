//! Response models for the bulk import API.

use serde::Serialize;
use unigate_core::FieldError;
use utoipa::ToSchema;

/// Validation errors for one CSV row.
///
/// Row numbers are 1-indexed data rows plus one for the header, so the
/// first data row reports as row 2.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RowErrors {
    /// Row number in the uploaded file.
    pub row: i32,

    /// Every field error found in the row.
    pub errors: Vec<FieldError>,
}

/// Result of an import request.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImportResponse {
    /// Whether the batch was imported.
    pub success: bool,

    /// Number of rows written (0 on rejection).
    pub processed_count: usize,

    /// Per-row validation errors (empty on success).
    pub errors: Vec<RowErrors>,
}

impl ImportResponse {
    /// A successful import of `count` rows.
    #[must_use]
    pub fn imported(count: usize) -> Self {
        Self {
            success: true,
            processed_count: count,
            errors: Vec::new(),
        }
    }

    /// A rejected batch with its per-row errors.
    #[must_use]
    pub fn rejected(errors: Vec<RowErrors>) -> Self {
        Self {
            success: false,
            processed_count: 0,
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_shape() {
        let json = serde_json::to_value(ImportResponse::imported(3)).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["processedCount"], 3);
        assert_eq!(json["errors"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_rejection_shape() {
        let response = ImportResponse::rejected(vec![RowErrors {
            row: 2,
            errors: vec![FieldError::new("Tuition Fee", "must be a non-negative number")],
        }]);
        let json = serde_json::to_value(response).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["processedCount"], 0);
        assert_eq!(json["errors"][0]["row"], 2);
    }
}

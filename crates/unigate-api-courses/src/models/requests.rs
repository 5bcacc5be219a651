//! Request models for the course catalog API.

use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::IntoParams;

/// Query parameters for course search.
///
/// All parameters are optional; an empty query lists everything,
/// newest first.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct CourseSearchQuery {
    /// Free-text search term.
    #[serde(default)]
    pub query: Option<String>,

    /// Match type for `query`: `exact` restricts to an exact match on
    /// the primary course name; anything else (default `smart`) is a
    /// case-insensitive substring match across the name and description
    /// fields.
    #[serde(default, rename = "type")]
    pub match_type: Option<String>,

    /// Exact study level: `Undergraduate` or `Postgraduate`.
    #[serde(default)]
    pub level: Option<String>,

    /// Case-insensitive substring match on the university name.
    #[serde(default)]
    pub university: Option<String>,

    /// Inclusive lower bound on tuition fee.
    #[serde(default)]
    pub min_fee: Option<Decimal>,

    /// Inclusive upper bound on tuition fee.
    #[serde(default)]
    pub max_fee: Option<Decimal>,

    /// Exact intake label.
    #[serde(default)]
    pub intake: Option<String>,

    /// Exact duration label.
    #[serde(default)]
    pub duration: Option<String>,

    /// Express-offer filter; matches courses where the flag equals
    /// `value == "true"`.
    #[serde(default)]
    pub express_offer: Option<String>,

    /// Page number, 1-indexed (default: 1).
    #[serde(default)]
    pub page: Option<i64>,

    /// Page size (default: 10, max: 50).
    #[serde(default)]
    pub limit: Option<i64>,
}

impl CourseSearchQuery {
    /// Default page size.
    pub const DEFAULT_LIMIT: i64 = 10;

    /// Maximum allowed page size.
    pub const MAX_LIMIT: i64 = 50;

    /// Get the page, 1-indexed and floored at 1.
    #[must_use]
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    /// Get the limit, clamped to valid range.
    #[must_use]
    pub fn limit(&self) -> i64 {
        self.limit
            .unwrap_or(Self::DEFAULT_LIMIT)
            .clamp(1, Self::MAX_LIMIT)
    }

    /// Rows to skip: `(page - 1) * limit`.
    #[must_use]
    pub fn offset(&self) -> i64 {
        (self.page() - 1) * self.limit()
    }

    /// Whether the free-text match is restricted to an exact name match.
    #[must_use]
    pub fn exact_match(&self) -> bool {
        self.match_type.as_deref() == Some("exact")
    }

    /// The express-offer predicate value, when the filter is present.
    #[must_use]
    pub fn express_offer_filter(&self) -> Option<bool> {
        self.express_offer.as_deref().map(|v| v == "true")
    }
}

/// Form fields for creating a course.
///
/// Everything arrives as strings (form-encoded submission); parsing and
/// validation happen in [`crate::validation::validate_course_form`],
/// which reports every offending field rather than the first.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    /// Primary (English) course name.
    #[serde(default)]
    pub course_name: String,

    /// Uzbek course name.
    #[serde(default)]
    pub course_name_uz: String,

    /// Study level: `Undergraduate` or `Postgraduate`.
    #[serde(default)]
    pub level: String,

    /// University ID.
    #[serde(default)]
    pub university_id: String,

    /// Campus label.
    #[serde(default)]
    pub campus: String,

    /// Tuition fee (decimal, non-negative).
    #[serde(default)]
    pub tuition_fee: String,

    /// Currency code; blank defaults to GBP.
    #[serde(default)]
    pub currency: String,

    /// Intake label.
    #[serde(default)]
    pub selected_intake: String,

    /// Duration label.
    #[serde(default)]
    pub selected_duration: String,

    /// Submission deadline (`YYYY-MM-DD`), optional.
    #[serde(default)]
    pub submission_deadline: Option<String>,

    /// Offer turnaround in weeks, optional.
    #[serde(default, rename = "offerTAT")]
    pub offer_tat: Option<String>,

    /// Express-offer checkbox (`on`/`true` when checked).
    #[serde(default)]
    pub express_offer: Option<String>,

    /// Mode of study, optional.
    #[serde(default)]
    pub mode_of_study: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_query_defaults() {
        let query = CourseSearchQuery::default();
        assert_eq!(query.page(), 1);
        assert_eq!(query.limit(), 10);
        assert_eq!(query.offset(), 0);
        assert!(!query.exact_match());
        assert_eq!(query.express_offer_filter(), None);
    }

    #[test]
    fn test_limit_clamped_to_max() {
        let query = CourseSearchQuery {
            limit: Some(500),
            ..Default::default()
        };
        assert_eq!(query.limit(), 50);
    }

    #[test]
    fn test_page_floored_at_one() {
        let query = CourseSearchQuery {
            page: Some(-3),
            ..Default::default()
        };
        assert_eq!(query.page(), 1);
        assert_eq!(query.offset(), 0);
    }

    #[test]
    fn test_offset_math() {
        let query = CourseSearchQuery {
            page: Some(3),
            limit: Some(25),
            ..Default::default()
        };
        assert_eq!(query.offset(), 50);
    }

    #[test]
    fn test_exact_match_only_for_exact() {
        let exact = CourseSearchQuery {
            match_type: Some("exact".to_string()),
            ..Default::default()
        };
        assert!(exact.exact_match());

        let smart = CourseSearchQuery {
            match_type: Some("smart".to_string()),
            ..Default::default()
        };
        assert!(!smart.exact_match());
    }

    #[test]
    fn test_express_offer_filter_values() {
        let yes = CourseSearchQuery {
            express_offer: Some("true".to_string()),
            ..Default::default()
        };
        assert_eq!(yes.express_offer_filter(), Some(true));

        let no = CourseSearchQuery {
            express_offer: Some("false".to_string()),
            ..Default::default()
        };
        assert_eq!(no.express_offer_filter(), Some(false));
    }
}

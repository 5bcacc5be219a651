//! Response models for the course catalog API.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use unigate_db::{CourseWithUniversity, University};
use utoipa::ToSchema;
use uuid::Uuid;

/// The university embedded in a course response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UniversityRef {
    /// University ID.
    pub id: Uuid,
    /// University name.
    pub name: String,
}

/// A course as returned by search and lookup endpoints.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    pub id: Uuid,
    pub course_name: String,
    pub course_name_uz: String,
    pub level: String,
    pub university: UniversityRef,
    pub campus: String,
    pub tuition_fee: Decimal,
    pub currency: String,
    pub selected_intake: String,
    pub selected_duration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission_deadline: Option<NaiveDate>,
    #[serde(rename = "offerTAT", skip_serializing_if = "Option::is_none")]
    pub offer_tat: Option<i32>,
    pub express_offer: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode_of_study: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<CourseWithUniversity> for CourseResponse {
    fn from(row: CourseWithUniversity) -> Self {
        let course = row.course;
        Self {
            id: course.id,
            course_name: course.course_name,
            course_name_uz: course.course_name_uz,
            level: course.level,
            university: UniversityRef {
                id: course.university_id,
                name: row.university_name,
            },
            campus: course.campus,
            tuition_fee: course.tuition_fee,
            currency: course.currency,
            selected_intake: course.selected_intake,
            selected_duration: course.selected_duration,
            submission_deadline: course.submission_deadline,
            offer_tat: course.offer_tat,
            express_offer: course.express_offer,
            mode_of_study: course.mode_of_study,
            created_at: course.created_at,
        }
    }
}

/// A university as returned by `GET /universities`.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UniversityResponse {
    pub id: Uuid,
    pub name: String,
    pub name_uz: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_uz: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<University> for UniversityResponse {
    fn from(u: University) -> Self {
        Self {
            id: u.id,
            name: u.name,
            name_uz: u.name_uz,
            country: u.country,
            city: u.city,
            website: u.website,
            description: u.description,
            description_uz: u.description_uz,
            created_at: u.created_at,
        }
    }
}

/// Pagination metadata for the course listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    /// Current page, 1-indexed.
    pub page: i64,

    /// Page size.
    pub limit: i64,

    /// Total number of matching courses.
    pub total: i64,

    /// Total number of pages.
    pub total_pages: i64,

    /// Whether a next page exists.
    pub has_next_page: bool,

    /// Whether a previous page exists.
    pub has_prev_page: bool,
}

impl PaginationMeta {
    /// Compute pagination metadata: `totalPages = ceil(total / limit)`.
    #[must_use]
    pub fn new(total: i64, page: i64, limit: i64) -> Self {
        let total_pages = if limit > 0 { (total + limit - 1) / limit } else { 0 };
        Self {
            page,
            limit,
            total,
            total_pages,
            has_next_page: page < total_pages,
            has_prev_page: page > 1,
        }
    }
}

/// Response for the course search endpoint.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CourseListResponse {
    /// Matching courses, newest first.
    pub courses: Vec<CourseResponse>,

    /// Pagination metadata.
    pub pagination: PaginationMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_is_ceiling() {
        let meta = PaginationMeta::new(21, 1, 10);
        assert_eq!(meta.total_pages, 3);

        let exact = PaginationMeta::new(20, 1, 10);
        assert_eq!(exact.total_pages, 2);

        let empty = PaginationMeta::new(0, 1, 10);
        assert_eq!(empty.total_pages, 0);
    }

    #[test]
    fn test_page_flags() {
        let first = PaginationMeta::new(30, 1, 10);
        assert!(first.has_next_page);
        assert!(!first.has_prev_page);

        let middle = PaginationMeta::new(30, 2, 10);
        assert!(middle.has_next_page);
        assert!(middle.has_prev_page);

        let last = PaginationMeta::new(30, 3, 10);
        assert!(!last.has_next_page);
        assert!(last.has_prev_page);
    }

    #[test]
    fn test_serialized_keys_are_camel_case() {
        let meta = PaginationMeta::new(5, 1, 10);
        let json = serde_json::to_value(&meta).unwrap();
        assert!(json.get("totalPages").is_some());
        assert!(json.get("hasNextPage").is_some());
        assert!(json.get("hasPrevPage").is_some());
    }
}

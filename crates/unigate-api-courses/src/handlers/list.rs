//! Course search endpoint handler.
//!
//! GET /courses - Filtered, paginated course listing.

use axum::{
    extract::Query,
    http::{header, HeaderName},
    Extension, Json,
};
use std::sync::Arc;
use unigate_auth::SessionClaims;

use crate::error::ApiCoursesError;
use crate::listing::ListingVersion;
use crate::models::{CourseListResponse, CourseSearchQuery};
use crate::services::CourseService;

/// Search courses.
///
/// Supports free-text search (`query` + `type=exact|smart`), exact
/// filters (`level`, `intake`, `duration`), a university name substring
/// filter, inclusive fee bounds (`minFee`, `maxFee`), an `expressOffer`
/// flag filter, and 1-indexed pagination (`page`, `limit`, max 50).
/// Results are newest-created first. The response carries the current
/// listing version as a weak `ETag`.
#[utoipa::path(
    get,
    path = "/courses",
    params(CourseSearchQuery),
    responses(
        (status = 200, description = "Matching courses with pagination", body = CourseListResponse),
        (status = 401, description = "Not authenticated"),
        (status = 500, description = "Query failed"),
    ),
    security(("bearerAuth" = [])),
    tag = "Courses"
)]
pub async fn list_courses_handler(
    Extension(claims): Extension<SessionClaims>,
    Extension(service): Extension<Arc<CourseService>>,
    Extension(listing): Extension<ListingVersion>,
    Query(query): Query<CourseSearchQuery>,
) -> Result<([(HeaderName, String); 1], Json<CourseListResponse>), ApiCoursesError> {
    tracing::info!(
        user_id = %claims.sub,
        page = query.page(),
        limit = query.limit(),
        free_text = ?query.query,
        level = ?query.level,
        "Searching courses"
    );

    let response = service.search(&query).await?;

    Ok(([(header::ETAG, listing.etag())], Json(response)))
}

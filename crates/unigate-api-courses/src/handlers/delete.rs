//! Course deletion endpoint handler.
//!
//! DELETE /courses/:id - Remove a course (ADMIN only).

use axum::{extract::Path, http::StatusCode, Extension};
use std::sync::Arc;
use unigate_activity::ActivityLogger;
use unigate_auth::SessionClaims;
use unigate_core::CourseId;
use unigate_db::ActivityType;
use uuid::Uuid;

use crate::error::ApiCoursesError;
use crate::listing::ListingVersion;
use crate::services::CourseService;

/// Delete a course.
///
/// Returns 404 when the id does not exist. On success the listing
/// version is bumped and a `DELETE_COURSE` activity entry is queued
/// after the response.
#[utoipa::path(
    delete,
    path = "/courses/{id}",
    params(("id" = Uuid, Path, description = "Course ID")),
    responses(
        (status = 204, description = "Course deleted"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Course not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Courses"
)]
pub async fn delete_course_handler(
    Extension(claims): Extension<SessionClaims>,
    Extension(service): Extension<Arc<CourseService>>,
    Extension(activity): Extension<ActivityLogger>,
    Extension(listing): Extension<ListingVersion>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiCoursesError> {
    service.delete(CourseId::from_uuid(id)).await?;

    let version = listing.bump();
    tracing::info!(
        course_id = %id,
        user_id = %claims.sub,
        listing_version = version,
        "Course deleted"
    );

    activity.log(
        claims.user_id(),
        ActivityType::DeleteCourse,
        format!("Deleted course: {id}"),
    );

    Ok(StatusCode::NO_CONTENT)
}

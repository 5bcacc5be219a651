//! Course creation endpoint handler.
//!
//! POST /courses - Create a course (ADMIN only).

use axum::{extract::Form, http::StatusCode, Extension, Json};
use std::sync::Arc;
use unigate_activity::ActivityLogger;
use unigate_auth::SessionClaims;
use unigate_db::ActivityType;

use crate::error::ApiCoursesError;
use crate::listing::ListingVersion;
use crate::models::{CourseResponse, CreateCourseRequest};
use crate::services::CourseService;
use crate::validation::validate_course_form;

/// Create a course from a submitted form.
///
/// The admin guard has already run; validation failures enumerate every
/// offending field. On success the listing version is bumped and a
/// `CREATE_COURSE` activity entry is queued after the response.
#[utoipa::path(
    post,
    path = "/courses",
    request_body(content = CreateCourseRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Course created", body = CourseResponse),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Admin role required"),
        (status = 422, description = "Validation failed"),
    ),
    security(("bearerAuth" = [])),
    tag = "Courses"
)]
pub async fn create_course_handler(
    Extension(claims): Extension<SessionClaims>,
    Extension(service): Extension<Arc<CourseService>>,
    Extension(activity): Extension<ActivityLogger>,
    Extension(listing): Extension<ListingVersion>,
    Form(request): Form<CreateCourseRequest>,
) -> Result<(StatusCode, Json<CourseResponse>), ApiCoursesError> {
    let data = validate_course_form(&request).map_err(ApiCoursesError::Validation)?;

    let created = service.create(&data).await?;

    let version = listing.bump();
    tracing::info!(
        course_id = %created.id,
        user_id = %claims.sub,
        listing_version = version,
        "Course created"
    );

    activity.log(
        claims.user_id(),
        ActivityType::CreateCourse,
        format!("Created course: {} ({})", created.course_name, created.id),
    );

    Ok((StatusCode::CREATED, Json(created)))
}

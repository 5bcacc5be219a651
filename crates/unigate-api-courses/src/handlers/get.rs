//! Single-course endpoint handler.
//!
//! GET /courses/:id - Fetch one course with its university.

use axum::{extract::Path, Extension, Json};
use std::sync::Arc;
use unigate_core::CourseId;
use uuid::Uuid;

use crate::error::ApiCoursesError;
use crate::models::CourseResponse;
use crate::services::CourseService;

/// Fetch a single course.
#[utoipa::path(
    get,
    path = "/courses/{id}",
    params(("id" = Uuid, Path, description = "Course ID")),
    responses(
        (status = 200, description = "The course", body = CourseResponse),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Course not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Courses"
)]
pub async fn get_course_handler(
    Extension(service): Extension<Arc<CourseService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<CourseResponse>, ApiCoursesError> {
    let course = service.get(CourseId::from_uuid(id)).await?;
    Ok(Json(course))
}

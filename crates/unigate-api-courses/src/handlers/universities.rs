//! University listing endpoint handler.
//!
//! GET /universities - Universities ordered by name, for the course form.

use axum::{Extension, Json};
use std::sync::Arc;

use crate::error::ApiCoursesError;
use crate::models::UniversityResponse;
use crate::services::CourseService;

/// List universities, ordered by name ascending.
#[utoipa::path(
    get,
    path = "/universities",
    responses(
        (status = 200, description = "All universities", body = [UniversityResponse]),
        (status = 401, description = "Not authenticated"),
    ),
    security(("bearerAuth" = [])),
    tag = "Universities"
)]
pub async fn list_universities_handler(
    Extension(service): Extension<Arc<CourseService>>,
) -> Result<Json<Vec<UniversityResponse>>, ApiCoursesError> {
    let universities = service.universities().await?;
    Ok(Json(
        universities.into_iter().map(UniversityResponse::from).collect(),
    ))
}

//! `OpenAPI` documentation and Swagger UI configuration.

use axum::Router;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::health::HealthResponse;

/// Security scheme modifier for Bearer authentication.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// `OpenAPI` documentation for the unigate API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "unigate API",
        version = "0.1.0",
        description = "Course catalog CRM API: search, admin mutations, CSV import"
    ),
    modifiers(&SecurityAddon),
    paths(
        crate::health::health_handler,
        unigate_api_auth::handlers::login::login_handler,
        unigate_api_auth::handlers::me::me_handler,
        unigate_api_auth::handlers::activity::activity_handler,
        unigate_api_courses::handlers::list::list_courses_handler,
        unigate_api_courses::handlers::get::get_course_handler,
        unigate_api_courses::handlers::create::create_course_handler,
        unigate_api_courses::handlers::delete::delete_course_handler,
        unigate_api_courses::handlers::universities::list_universities_handler,
        unigate_api_import::handlers::import::import_handler,
    ),
    components(schemas(
        HealthResponse,
        unigate_api_auth::models::LoginRequest,
        unigate_api_auth::models::TokenResponse,
        unigate_api_auth::models::SessionUserResponse,
        unigate_api_auth::models::ActivityResponse,
        unigate_api_courses::models::CreateCourseRequest,
        unigate_api_courses::models::CourseResponse,
        unigate_api_courses::models::CourseListResponse,
        unigate_api_courses::models::PaginationMeta,
        unigate_api_courses::models::UniversityRef,
        unigate_api_courses::models::UniversityResponse,
        unigate_api_import::models::ImportResponse,
        unigate_api_import::models::RowErrors,
        unigate_core::FieldError,
    )),
    tags(
        (name = "Health", description = "Service health and status"),
        (name = "Authentication", description = "Login and session inspection"),
        (name = "Courses", description = "Course search and administration"),
        (name = "Universities", description = "University listing"),
        (name = "Import", description = "CSV bulk import"),
    )
)]
pub struct ApiDoc;

/// Swagger UI routes serving the generated spec.
pub fn swagger_routes() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

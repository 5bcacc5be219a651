//! Course catalog router configuration.
//!
//! Configures routes for the course catalog endpoints:
//! - GET /courses - Search courses (any authenticated role)
//! - GET /courses/:id - Fetch one course
//! - POST /courses - Create a course (ADMIN)
//! - DELETE /courses/:id - Delete a course (ADMIN)
//! - GET /universities - List universities

use axum::{
    middleware,
    routing::{delete, get, post},
    Extension, Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use unigate_activity::ActivityLogger;
use unigate_api_auth::{admin_guard, session_auth_middleware, SessionSecret};

use crate::handlers::{
    create_course_handler, delete_course_handler, get_course_handler, list_courses_handler,
    list_universities_handler,
};
use crate::listing::ListingVersion;
use crate::services::CourseService;

/// Application state for course catalog routes.
#[derive(Clone)]
pub struct CoursesState {
    /// Database connection pool.
    pub pool: PgPool,
    /// Course service for search and CRUD operations.
    pub service: Arc<CourseService>,
    /// Deferred activity logger.
    pub activity: ActivityLogger,
    /// Listing staleness version.
    pub listing: ListingVersion,
}

impl CoursesState {
    /// Create a new courses state.
    #[must_use]
    pub fn new(pool: PgPool, activity: ActivityLogger) -> Self {
        let service = Arc::new(CourseService::new(pool.clone()));
        Self {
            pool,
            service,
            activity,
            listing: ListingVersion::new(),
        }
    }
}

/// Create the course catalog router.
///
/// Every route requires a valid session; the mutating routes
/// additionally require the ADMIN role, enforced before any validation
/// or store I/O.
pub fn courses_router(state: CoursesState, secret: SessionSecret) -> Router {
    let admin_routes = Router::new()
        .route("/courses", post(create_course_handler))
        .route("/courses/:id", delete(delete_course_handler))
        .layer(middleware::from_fn(admin_guard));

    let read_routes = Router::new()
        .route("/courses", get(list_courses_handler))
        .route("/courses/:id", get(get_course_handler))
        .route("/universities", get(list_universities_handler));

    Router::new()
        .merge(admin_routes)
        .merge(read_routes)
        .layer(middleware::from_fn(session_auth_middleware))
        .layer(Extension(secret))
        .layer(Extension(state.service))
        .layer(Extension(state.activity))
        .layer(Extension(state.listing))
        .layer(Extension(state.pool))
}

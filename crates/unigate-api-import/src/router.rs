//! Router and state for the bulk import API.

use axum::{middleware, routing::post, Extension, Router};
use sqlx::PgPool;
use unigate_activity::ActivityLogger;
use unigate_api_auth::{admin_guard, session_auth_middleware, SessionSecret};

use crate::handlers::import_handler;

/// Shared state for import routes.
#[derive(Clone)]
pub struct ImportState {
    /// Database connection pool.
    pub pool: PgPool,
    /// Deferred activity logger.
    pub activity: ActivityLogger,
}

impl ImportState {
    /// Create a new `ImportState`.
    #[must_use]
    pub fn new(pool: PgPool, activity: ActivityLogger) -> Self {
        Self { pool, activity }
    }
}

/// Create the import router.
///
/// The session and admin guards run before the multipart body is
/// touched, so unauthenticated and non-admin uploads are rejected
/// without reading the file.
pub fn import_router(state: ImportState, secret: SessionSecret) -> Router {
    Router::new()
        .route("/import", post(import_handler))
        .layer(middleware::from_fn(admin_guard))
        .layer(middleware::from_fn(session_auth_middleware))
        .layer(Extension(secret))
        .layer(Extension(state.pool))
        .layer(Extension(state.activity))
}

//! Router and shared extensions for the authentication API.

use axum::{
    middleware,
    routing::{get, post},
    Extension, Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use unigate_activity::ActivityLogger;

use crate::handlers::{activity_handler, login_handler, me_handler};
use crate::middleware::session_auth_middleware;

/// Secret used to sign and validate session tokens.
///
/// Cheap to clone; layered as an extension so both the login handler
/// and the session middleware can reach it.
#[derive(Clone)]
pub struct SessionSecret(Arc<Vec<u8>>);

impl SessionSecret {
    /// Wrap a configured secret.
    #[must_use]
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self(Arc::new(secret.into()))
    }

    /// The raw secret bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Create the authentication router.
///
/// - `POST /auth/login` — public
/// - `GET /auth/me` — requires a valid session
/// - `GET /auth/activity` — requires a valid session
pub fn auth_router(pool: PgPool, secret: SessionSecret, activity: ActivityLogger) -> Router {
    let protected = Router::new()
        .route("/auth/me", get(me_handler))
        .route("/auth/activity", get(activity_handler))
        .layer(middleware::from_fn(session_auth_middleware));

    Router::new()
        .route("/auth/login", post(login_handler))
        .merge(protected)
        .layer(Extension(pool))
        .layer(Extension(secret))
        .layer(Extension(activity))
}

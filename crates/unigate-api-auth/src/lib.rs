//! Authentication API for unigate.
//!
//! Provides the login endpoint and the session middleware used by every
//! protected route:
//!
//! - `POST /auth/login` — verify credentials, issue a session token
//! - `GET /auth/me` — return the authenticated session's user
//! - [`middleware::session_auth_middleware`] — bearer-token validation
//! - [`middleware::admin_guard`] — ADMIN role enforcement

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod router;

pub use error::ApiAuthError;
pub use middleware::{admin_guard, session_auth_middleware};
pub use router::{auth_router, SessionSecret};

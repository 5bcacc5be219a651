//! Middleware for session validation and role enforcement.

pub mod admin_guard;
pub mod session_auth;

pub use admin_guard::admin_guard;
pub use session_auth::session_auth_middleware;

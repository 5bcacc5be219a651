//! Admin role guard middleware.
//!
//! Checks that the authenticated session carries the ADMIN role before
//! allowing access to mutating endpoints. Runs before any validation or
//! store I/O in the protected handler.

use axum::{body::Body, extract::Request, middleware::Next, response::Response};
use unigate_auth::SessionClaims;

use crate::error::ApiAuthError;

/// Middleware that requires the authenticated user to have the ADMIN role.
///
/// Expects a prior [`super::session_auth_middleware`] to have inserted
/// [`SessionClaims`] into the request extensions.
///
/// # Errors
///
/// - `ApiAuthError::Unauthorized` (401): no session claims in request extensions
/// - `ApiAuthError::Forbidden` (403): session role is not ADMIN
pub async fn admin_guard(request: Request<Body>, next: Next) -> Result<Response, ApiAuthError> {
    let claims = request
        .extensions()
        .get::<SessionClaims>()
        .ok_or(ApiAuthError::Unauthorized)?;

    if !claims.is_admin() {
        tracing::warn!(
            user_id = %claims.sub,
            role = %claims.role,
            "Access denied: admin role required"
        );
        return Err(ApiAuthError::Forbidden);
    }

    tracing::debug!(user_id = %claims.sub, "Admin access granted");

    Ok(next.run(request).await)
}

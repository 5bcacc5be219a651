//! Session authentication middleware.
//!
//! Extracts and validates the bearer token from the Authorization
//! header, then inserts [`SessionClaims`] into request extensions.

use axum::{body::Body, extract::Request, middleware::Next, response::Response};
use unigate_auth::{decode_token, SessionClaims};

use crate::error::ApiAuthError;
use crate::router::SessionSecret;

/// Session authentication middleware.
///
/// This middleware:
/// 1. Extracts the Bearer token from the Authorization header
/// 2. Decodes and validates the session token
/// 3. Inserts [`SessionClaims`] into request extensions
///
/// Requires a [`SessionSecret`] extension layered below it.
///
/// # Errors
///
/// - `ApiAuthError::Unauthorized` (401): missing, empty, malformed, or
///   expired token
/// - `ApiAuthError::Internal` (500): session secret not configured
pub async fn session_auth_middleware(
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, ApiAuthError> {
    let secret = request
        .extensions()
        .get::<SessionSecret>()
        .cloned()
        .ok_or_else(|| {
            tracing::error!("Session secret not configured");
            ApiAuthError::Internal("Session secret not configured".to_string())
        })?;

    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or(ApiAuthError::Unauthorized)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(ApiAuthError::Unauthorized)?;

    // Reject empty bearer tokens before attempting to decode.
    if token.is_empty() {
        tracing::warn!("Rejected empty bearer token");
        return Err(ApiAuthError::Unauthorized);
    }

    let claims: SessionClaims = decode_token(token, secret.as_bytes()).map_err(|e| {
        tracing::warn!(error = %e, "Session token validation failed");
        ApiAuthError::Unauthorized
    })?;

    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}

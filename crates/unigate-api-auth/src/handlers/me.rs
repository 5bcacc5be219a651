//! Current-session endpoint handler.
//!
//! GET /auth/me - Return the authenticated session's user.

use axum::{Extension, Json};
use unigate_auth::SessionClaims;

use crate::error::ApiAuthError;
use crate::models::SessionUserResponse;

/// Return the user behind the current session token.
#[utoipa::path(
    get,
    path = "/auth/me",
    responses(
        (status = 200, description = "Current session user", body = SessionUserResponse),
        (status = 401, description = "Not authenticated"),
    ),
    security(("bearerAuth" = [])),
    tag = "Authentication"
)]
pub async fn me_handler(
    Extension(claims): Extension<SessionClaims>,
) -> Result<Json<SessionUserResponse>, ApiAuthError> {
    Ok(Json(SessionUserResponse {
        id: claims.sub,
        name: claims.name,
        email: claims.email,
        role: claims.role,
    }))
}

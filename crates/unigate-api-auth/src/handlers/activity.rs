//! Session activity endpoint handler.
//!
//! GET /auth/activity - Recent activity entries for the session user.

use axum::{Extension, Json};
use sqlx::PgPool;
use unigate_auth::SessionClaims;
use unigate_db::UserActivity;

use crate::error::ApiAuthError;
use crate::models::ActivityResponse;

/// How many entries the endpoint returns.
const ACTIVITY_LIMIT: i64 = 50;

/// Return the most recent activity entries for the authenticated user.
#[utoipa::path(
    get,
    path = "/auth/activity",
    responses(
        (status = 200, description = "Recent activity, newest first", body = [ActivityResponse]),
        (status = 401, description = "Not authenticated"),
    ),
    security(("bearerAuth" = [])),
    tag = "Authentication"
)]
pub async fn activity_handler(
    Extension(claims): Extension<SessionClaims>,
    Extension(pool): Extension<PgPool>,
) -> Result<Json<Vec<ActivityResponse>>, ApiAuthError> {
    let entries = UserActivity::list_recent(&pool, claims.sub, ACTIVITY_LIMIT).await?;
    Ok(Json(entries.into_iter().map(ActivityResponse::from).collect()))
}

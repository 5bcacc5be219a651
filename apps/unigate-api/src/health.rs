//! Service health endpoint.

use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// `healthy` when the database responds, `degraded` otherwise.
    pub status: String,

    /// Service version.
    pub version: String,

    /// Seconds since startup.
    pub uptime_seconds: u64,

    /// Whether the database ping succeeded.
    pub database: bool,

    /// Current server time (RFC 3339).
    pub timestamp: String,
}

/// GET /health
///
/// Reports service status and a database connectivity check. Always
/// returns 200; consumers inspect the `status` field.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service health", body = HealthResponse)),
    tag = "Health"
)]
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&state.db)
        .await
        .is_ok();

    if !database {
        tracing::warn!("Health check: database ping failed");
    }

    Json(HealthResponse {
        status: if database { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.startup_time.elapsed().as_secs(),
        database,
        timestamp: Utc::now().to_rfc3339(),
    })
}

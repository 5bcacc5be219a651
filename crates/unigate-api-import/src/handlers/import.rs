//! CSV import endpoint handler.
//!
//! POST /import - Upload a CSV and import its course rows (ADMIN only).

use axum::{http::StatusCode, Extension, Json};
use axum_extra::extract::Multipart;
use sqlx::PgPool;
use unigate_activity::ActivityLogger;
use unigate_auth::SessionClaims;
use unigate_db::ActivityType;

use crate::error::ImportError;
use crate::models::ImportResponse;
use crate::services::ImportService;

/// Import courses from an uploaded CSV file.
///
/// Expects a multipart body with one field named `file`. The admin
/// guard has already rejected non-ADMIN callers before the body is
/// parsed. An all-valid batch is written in one transaction and
/// answered with the imported count; any invalid row rejects the whole
/// batch with every offending row listed, and nothing is written. A
/// successful import queues one `IMPORT_DATA` activity entry after the
/// response.
#[utoipa::path(
    post,
    path = "/import",
    request_body(content = Vec<u8>, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Batch imported", body = ImportResponse),
        (status = 400, description = "Missing file field or unreadable CSV"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Admin role required"),
        (status = 413, description = "File or row count over limits"),
        (status = 422, description = "Row validation failed; nothing written", body = ImportResponse),
    ),
    security(("bearerAuth" = [])),
    tag = "Import"
)]
pub async fn import_handler(
    Extension(claims): Extension<SessionClaims>,
    Extension(pool): Extension<PgPool>,
    Extension(activity): Extension<ActivityLogger>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ImportResponse>), ImportError> {
    let mut file_data: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ImportError::InvalidUpload(format!("Multipart read error: {e}")))?
    {
        if field.name() == Some("file") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ImportError::InvalidUpload(format!("Failed to read file: {e}")))?;
            file_data = Some(bytes.to_vec());
        }
        // Unknown fields are ignored.
    }

    let data = file_data.ok_or_else(|| {
        ImportError::InvalidUpload("No 'file' field found in multipart upload".to_string())
    })?;

    tracing::info!(
        user_id = %claims.sub,
        size_bytes = data.len(),
        "Processing course import"
    );

    let response = ImportService::import_csv(&pool, &data).await?;

    if response.success {
        activity.log(
            claims.user_id(),
            ActivityType::ImportData,
            format!("Imported {} courses from CSV", response.processed_count),
        );
        Ok((StatusCode::OK, Json(response)))
    } else {
        Ok((StatusCode::UNPROCESSABLE_ENTITY, Json(response)))
    }
}

//! Login endpoint handler.
//!
//! POST /auth/login - Authenticate user and issue a session token.

use axum::{Extension, Json};
use sqlx::PgPool;
use unigate_activity::ActivityLogger;
use unigate_auth::claims::SESSION_TTL_HOURS;
use unigate_auth::{encode_token, PasswordHasher, SessionClaims};
use unigate_core::FieldError;
use unigate_db::{ActivityType, User};
use validator::Validate;

use crate::error::ApiAuthError;
use crate::models::{LoginRequest, TokenResponse};
use crate::router::SessionSecret;

/// Handle user login.
///
/// Verifies the email/password pair against the stored Argon2id hash
/// and issues a session token. A `SIGN_IN` activity entry is queued
/// after the response is produced; invalid credentials never reveal
/// whether the email or the password was wrong.
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 401, description = "Invalid credentials"),
        (status = 422, description = "Malformed request"),
    ),
    tag = "Authentication"
)]
pub async fn login_handler(
    Extension(pool): Extension<PgPool>,
    Extension(secret): Extension<SessionSecret>,
    Extension(activity): Extension<ActivityLogger>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiAuthError> {
    request
        .validate()
        .map_err(|e| ApiAuthError::Validation(collect_field_errors(&e)))?;

    let user = User::find_by_email(&pool, &request.email)
        .await?
        .ok_or(ApiAuthError::InvalidCredentials)?;

    let hasher = PasswordHasher::new();
    let verified = hasher
        .verify_password(&request.password, &user.password_hash)
        .map_err(|e| ApiAuthError::Internal(e.to_string()))?;
    if !verified {
        tracing::info!(email = %request.email, "Login rejected: password mismatch");
        return Err(ApiAuthError::InvalidCredentials);
    }

    let claims = SessionClaims::new(user.id, &user.name, &user.email, &user.role);
    let token = encode_token(&claims, secret.as_bytes())
        .map_err(|e| ApiAuthError::Internal(e.to_string()))?;

    tracing::info!(user_id = %user.id, "User signed in");
    activity.log(
        claims.user_id(),
        ActivityType::SignIn,
        format!("Signed in: {}", user.email),
    );

    Ok(Json(TokenResponse {
        access_token: token,
        token_type: "Bearer".to_string(),
        expires_in: SESSION_TTL_HOURS * 3600,
    }))
}

/// Flatten validator output into field errors.
fn collect_field_errors(errors: &validator::ValidationErrors) -> Vec<FieldError> {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(|e| {
                let message = e
                    .message
                    .as_ref()
                    .map_or_else(|| "invalid value".to_string(), ToString::to_string);
                FieldError::new(*field, message)
            })
        })
        .collect()
}

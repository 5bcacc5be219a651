//! Request and response models for the authentication API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Login request body.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// Email address.
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,

    /// Password.
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TokenResponse {
    /// Signed session token.
    pub access_token: String,

    /// Always `Bearer`.
    pub token_type: String,

    /// Seconds until the token expires.
    pub expires_in: i64,
}

/// One activity entry, as returned by `GET /auth/activity`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ActivityResponse {
    /// Entry ID.
    pub id: Uuid,

    /// Type tag, e.g. `CREATE_COURSE`.
    #[serde(rename = "type")]
    pub activity_type: String,

    /// Free-text detail.
    pub details: String,

    /// When the activity was recorded.
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl From<unigate_db::UserActivity> for ActivityResponse {
    fn from(entry: unigate_db::UserActivity) -> Self {
        Self {
            id: entry.id,
            activity_type: entry.activity_type,
            details: entry.details,
            timestamp: entry.created_at,
        }
    }
}

/// The authenticated user, as returned by `GET /auth/me`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SessionUserResponse {
    /// User ID.
    pub id: Uuid,

    /// Display name.
    pub name: String,

    /// Email address.
    pub email: String,

    /// Role: `ADMIN` or `AGENT`.
    pub role: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_validation() {
        let ok = LoginRequest {
            email: "admin@example.com".to_string(),
            password: "password123".to_string(),
        };
        assert!(ok.validate().is_ok());

        let bad_email = LoginRequest {
            email: "not-an-email".to_string(),
            password: "password123".to_string(),
        };
        assert!(bad_email.validate().is_err());

        let empty_password = LoginRequest {
            email: "admin@example.com".to_string(),
            password: String::new(),
        };
        assert!(empty_password.validate().is_err());
    }
}

//! Session claims carried by bearer tokens.
//!
//! A successful login issues a token whose claims identify the user and
//! their role; the auth middleware decodes them back into
//! [`SessionClaims`] and inserts them into request extensions.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use unigate_core::UserId;
use uuid::Uuid;

/// Role string required for mutating operations.
pub const ADMIN_ROLE: &str = "ADMIN";

/// Default session lifetime.
pub const SESSION_TTL_HOURS: i64 = 24;

/// Claims embedded in a session token.
///
/// `sub`, `iat`, and `exp` follow RFC 7519; `name`, `email`, and `role`
/// are unigate-specific.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionClaims {
    /// Subject: the user's ID.
    pub sub: Uuid,

    /// User's display name.
    pub name: String,

    /// User's email address.
    pub email: String,

    /// Role string: `ADMIN` or `AGENT`.
    pub role: String,

    /// Issued-at (Unix timestamp).
    pub iat: i64,

    /// Expiration (Unix timestamp).
    pub exp: i64,
}

impl SessionClaims {
    /// Build claims for a freshly authenticated user with the default TTL.
    #[must_use]
    pub fn new(user_id: Uuid, name: &str, email: &str, role: &str) -> Self {
        let now = Utc::now();
        Self {
            sub: user_id,
            name: name.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(SESSION_TTL_HOURS)).timestamp(),
        }
    }

    /// The authenticated user's ID.
    #[must_use]
    pub fn user_id(&self) -> UserId {
        UserId::from_uuid(self.sub)
    }

    /// Whether the session carries the ADMIN role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role.eq_ignore_ascii_case(ADMIN_ROLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_expiry_after_issue() {
        let claims = SessionClaims::new(Uuid::new_v4(), "A", "a@example.com", "AGENT");
        assert!(claims.exp > claims.iat);
        assert_eq!(claims.exp - claims.iat, SESSION_TTL_HOURS * 3600);
    }

    #[test]
    fn test_is_admin() {
        let admin = SessionClaims::new(Uuid::new_v4(), "A", "a@example.com", "ADMIN");
        assert!(admin.is_admin());

        let agent = SessionClaims::new(Uuid::new_v4(), "B", "b@example.com", "AGENT");
        assert!(!agent.is_admin());
    }

    #[test]
    fn test_user_id_matches_sub() {
        let id = Uuid::new_v4();
        let claims = SessionClaims::new(id, "A", "a@example.com", "AGENT");
        assert_eq!(*claims.user_id().as_uuid(), id);
    }
}

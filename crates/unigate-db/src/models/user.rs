//! User account model.
//!
//! Users exist for authentication and authorization only; the catalog
//! endpoints never mutate them outside of bootstrap seeding.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgExecutor, PgPool};
use uuid::Uuid;

/// Role of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    Agent,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "ADMIN"),
            UserRole::Agent => write!(f, "AGENT"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ADMIN" => Ok(UserRole::Admin),
            "AGENT" => Ok(UserRole::Agent),
            _ => Err(format!("Invalid user role: {s}")),
        }
    }
}

/// A user account record.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    /// Unique identifier.
    pub id: Uuid,

    /// Display name.
    pub name: String,

    /// Email address (unique, used for login).
    pub email: String,

    /// Argon2id password hash. Never serialized into API responses.
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Role string: `ADMIN` or `AGENT`.
    pub role: String,

    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new user.
#[derive(Debug)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
}

impl User {
    /// Whether this account carries the ADMIN role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role.parse() == Ok(UserRole::Admin)
    }

    /// Find a user by email address.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Create a new user record.
    ///
    /// The unique constraint on `email` is enforced by the store; a
    /// duplicate surfaces as a database error.
    pub async fn create<'e, E>(executor: E, data: &CreateUser) -> Result<Self, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as(
            r"
            INSERT INTO users (name, email, password_hash, role)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            ",
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(data.role.to_string())
        .fetch_one(executor)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_roundtrip() {
        for role in [UserRole::Admin, UserRole::Agent] {
            let parsed: UserRole = role.to_string().parse().unwrap();
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn test_role_parse_is_case_insensitive() {
        assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert!("superuser".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_is_admin() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Admin".to_string(),
            email: "admin@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: "ADMIN".to_string(),
            created_at: Utc::now(),
        };
        assert!(user.is_admin());

        let agent = User {
            role: "AGENT".to_string(),
            ..user
        };
        assert!(!agent.is_admin());
    }

    #[test]
    fn test_password_hash_never_serialized() {
        let user = User {
            id: Uuid::new_v4(),
            name: "A".to_string(),
            email: "a@example.com".to_string(),
            password_hash: "secret".to_string(),
            role: "AGENT".to_string(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("secret"));
        assert!(!json.contains("password_hash"));
    }
}

//! User activity log model.
//!
//! Append-only audit trail of user-triggered mutations. Rows are never
//! updated or deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// Kind of recorded activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityType {
    SignIn,
    CreateCourse,
    DeleteCourse,
    ImportData,
}

impl std::fmt::Display for ActivityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityType::SignIn => write!(f, "SIGN_IN"),
            ActivityType::CreateCourse => write!(f, "CREATE_COURSE"),
            ActivityType::DeleteCourse => write!(f, "DELETE_COURSE"),
            ActivityType::ImportData => write!(f, "IMPORT_DATA"),
        }
    }
}

impl std::str::FromStr for ActivityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "SIGN_IN" => Ok(ActivityType::SignIn),
            "CREATE_COURSE" => Ok(ActivityType::CreateCourse),
            "DELETE_COURSE" => Ok(ActivityType::DeleteCourse),
            "IMPORT_DATA" => Ok(ActivityType::ImportData),
            _ => Err(format!("Invalid activity type: {s}")),
        }
    }
}

/// A user activity log entry.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserActivity {
    /// Unique identifier.
    pub id: Uuid,

    /// User who triggered the activity.
    pub user_id: Uuid,

    /// Type tag, e.g. `CREATE_COURSE`.
    pub activity_type: String,

    /// Free-text detail.
    pub details: String,

    /// When the activity was recorded.
    pub created_at: DateTime<Utc>,
}

/// Data required to append an activity entry.
#[derive(Debug, Clone)]
pub struct NewUserActivity {
    pub user_id: Uuid,
    pub activity_type: ActivityType,
    pub details: String,
}

impl UserActivity {
    /// Append one activity entry.
    pub async fn insert(pool: &PgPool, data: &NewUserActivity) -> Result<Self, sqlx::Error> {
        sqlx::query_as(
            r"
            INSERT INTO user_activities (user_id, activity_type, details)
            VALUES ($1, $2, $3)
            RETURNING *
            ",
        )
        .bind(data.user_id)
        .bind(data.activity_type.to_string())
        .bind(&data.details)
        .fetch_one(pool)
        .await
    }

    /// List the most recent activity entries for a user.
    pub async fn list_recent(
        pool: &PgPool,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as(
            r"
            SELECT * FROM user_activities
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            ",
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_type_roundtrip() {
        for ty in [
            ActivityType::SignIn,
            ActivityType::CreateCourse,
            ActivityType::DeleteCourse,
            ActivityType::ImportData,
        ] {
            let parsed: ActivityType = ty.to_string().parse().unwrap();
            assert_eq!(parsed, ty);
        }
    }

    #[test]
    fn test_activity_type_tags_match_store_format() {
        assert_eq!(ActivityType::SignIn.to_string(), "SIGN_IN");
        assert_eq!(ActivityType::ImportData.to_string(), "IMPORT_DATA");
        assert!("UPDATE_COURSE".parse::<ActivityType>().is_err());
    }
}

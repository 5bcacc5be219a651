//! University model.
//!
//! Universities are referenced by courses (one-to-many) and resolved by
//! name-keyed upsert during CSV import.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgExecutor, PgPool};
use uuid::Uuid;

/// Country assigned to universities auto-created during import, where
/// the CSV carries only a name.
pub const UNKNOWN_COUNTRY: &str = "Unknown";

/// A university record.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct University {
    /// Unique identifier.
    pub id: Uuid,

    /// Primary (English) name. Unique, used as the upsert key.
    pub name: String,

    /// Uzbek name.
    pub name_uz: String,

    /// Country.
    pub country: String,

    /// City, when known.
    pub city: Option<String>,

    /// Website URL, when known.
    pub website: Option<String>,

    /// English description.
    pub description: Option<String>,

    /// Uzbek description.
    pub description_uz: Option<String>,

    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl University {
    /// Find a university by ID.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM universities WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all universities, ordered by name ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM universities ORDER BY name ASC")
            .fetch_all(pool)
            .await
    }

    /// Create-or-fetch a university by name.
    ///
    /// A new row gets the given name as both the primary and Uzbek name
    /// and country `Unknown`; an existing row is returned untouched.
    /// Generic over the executor so it can run inside an import
    /// transaction.
    pub async fn upsert_by_name<'e, E>(executor: E, name: &str) -> Result<Self, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        // DO UPDATE with a no-op assignment so RETURNING yields the row
        // in both the insert and the conflict case.
        sqlx::query_as(
            r"
            INSERT INTO universities (name, name_uz, country)
            VALUES ($1, $1, $2)
            ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
            RETURNING *
            ",
        )
        .bind(name)
        .bind(UNKNOWN_COUNTRY)
        .fetch_one(executor)
        .await
    }
}

//! Database connection pool.
//!
//! Wraps `sqlx::PgPool` so connection policy (pool sizing, acquire
//! timeout) lives in one place.

use crate::error::DbError;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

/// Default acquire timeout for pool connections.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// A Postgres connection pool.
#[derive(Debug, Clone)]
pub struct DbPool {
    pool: PgPool,
}

impl DbPool {
    /// Connect to the database and build a pool.
    ///
    /// # Errors
    ///
    /// Returns `DbError::ConnectionFailed` if the database is unreachable
    /// or the URL is invalid.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, DbError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect(database_url)
            .await
            .map_err(DbError::ConnectionFailed)?;

        tracing::info!(max_connections, "Database pool established");
        Ok(Self { pool })
    }

    /// Returns a reference to the inner `PgPool`.
    #[must_use]
    pub fn inner(&self) -> &PgPool {
        &self.pool
    }

    /// Consumes the wrapper, returning the inner `PgPool`.
    #[must_use]
    pub fn into_inner(self) -> PgPool {
        self.pool
    }
}

//! Application state shared across the service-level handlers.

use sqlx::PgPool;
use std::sync::Arc;
use std::time::Instant;

/// State backing the health endpoint.
///
/// This struct is cloned per request; the inner resources use `Arc`
/// (or are `Arc`-backed, like `PgPool`) so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: PgPool,

    /// Service startup time for uptime calculation.
    pub startup_time: Arc<Instant>,
}

impl AppState {
    /// Create the application state.
    #[must_use]
    pub fn new(db: PgPool) -> Self {
        Self {
            db,
            startup_time: Arc::new(Instant::now()),
        }
    }
}

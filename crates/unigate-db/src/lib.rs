//! unigate Database Layer
//!
//! Connection pooling, embedded migrations, and the sqlx models backing
//! the course catalog: [`Course`], [`University`], [`User`], and the
//! append-only [`UserActivity`] log.
//!
//! Models follow a consistent shape: a `FromRow` struct plus associated
//! async query functions taking a `&PgPool` (or a generic `PgExecutor`
//! where the caller may be inside a transaction).

pub mod error;
pub mod migrations;
pub mod models;
pub mod pool;

pub use error::DbError;
pub use migrations::run_migrations;
pub use models::{
    ActivityType, Course, CourseLevel, CourseWithUniversity, CreateCourse, CreateUser,
    NewUserActivity, University, User, UserActivity, UserRole,
};
pub use pool::DbPool;

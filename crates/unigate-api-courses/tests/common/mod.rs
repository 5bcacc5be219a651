//! Shared helpers for database-backed integration tests.
//!
//! Run with: `DATABASE_URL=postgres://... cargo test -p unigate-api-courses -- --ignored`

use rust_decimal::Decimal;
use sqlx::PgPool;
use unigate_db::{Course, CourseLevel, CreateCourse, University};
use uuid::Uuid;

/// Connect to the test database and apply migrations.
pub async fn create_test_pool() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for DB tests");
    let pool = PgPool::connect(&url).await.expect("test database reachable");
    sqlx::migrate!("../unigate-db/migrations")
        .run(&pool)
        .await
        .expect("migrations apply");
    pool
}

/// A unique name, to keep test runs independent.
pub fn unique(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4())
}

/// Create a university row for tests.
pub async fn create_test_university(pool: &PgPool, name: &str) -> University {
    University::upsert_by_name(pool, name)
        .await
        .expect("university upsert")
}

/// Create a course with sensible defaults.
pub async fn create_test_course(
    pool: &PgPool,
    university_id: Uuid,
    name: &str,
    level: CourseLevel,
    fee: Decimal,
) -> Course {
    Course::create(
        pool,
        &CreateCourse {
            course_name: name.to_string(),
            course_name_uz: format!("{name} uz"),
            level,
            university_id,
            campus: "Main Campus".to_string(),
            tuition_fee: fee,
            currency: "GBP".to_string(),
            selected_intake: "September 2025".to_string(),
            selected_duration: "1 year".to_string(),
            submission_deadline: None,
            offer_tat: Some(2),
            express_offer: false,
            mode_of_study: None,
        },
    )
    .await
    .expect("course insert")
}

//! Database-backed integration tests for the import write phase.
//!
//! Run with: `DATABASE_URL=postgres://... cargo test -p unigate-api-import -- --ignored`

use sqlx::PgPool;
use unigate_api_import::services::ImportService;
use uuid::Uuid;

async fn create_test_pool() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for DB tests");
    let pool = PgPool::connect(&url).await.expect("test database reachable");
    sqlx::migrate!("../unigate-db/migrations")
        .run(&pool)
        .await
        .expect("migrations apply");
    pool
}

fn unique(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4())
}

const HEADER: &str = "Course Name,Course Name (Uzbek),Level,University,Campus,Tuition Fee,Currency,Selected Intake,Selected Duration";

#[tokio::test]
#[ignore = "Requires database - run locally with DATABASE_URL"]
async fn test_valid_batch_creates_courses_and_universities() {
    let pool = create_test_pool().await;
    let uni = unique("Import Uni");
    let course = unique("MSc Import");
    let csv = format!(
        "{HEADER}\n\"{course}\",\"{course} uz\",\"Postgraduate\",\"{uni}\",\"Main\",\"10000\",\"GBP\",\"Sept 2025\",\"1 year\""
    );

    let response = ImportService::import_csv(&pool, csv.as_bytes()).await.unwrap();
    assert!(response.success);
    assert_eq!(response.processed_count, 1);
    assert!(response.errors.is_empty());

    let uni_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM universities WHERE name = $1")
        .bind(&uni)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(uni_count, 1);

    let (fee, currency, country): (rust_decimal::Decimal, String, String) = sqlx::query_as(
        "SELECT c.tuition_fee, c.currency, u.country FROM courses c \
         JOIN universities u ON u.id = c.university_id WHERE c.course_name = $1",
    )
    .bind(&course)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(fee, rust_decimal::Decimal::from(10000));
    assert_eq!(currency, "GBP");
    assert_eq!(country, "Unknown");
}

#[tokio::test]
#[ignore = "Requires database - run locally with DATABASE_URL"]
async fn test_invalid_batch_writes_nothing() {
    let pool = create_test_pool().await;
    let uni = unique("Rejected Uni");
    let good = unique("MSc Good");
    let csv = format!(
        "{HEADER}\n\
         \"{good}\",\"{good} uz\",\"Postgraduate\",\"{uni}\",\"Main\",\"10000\",\"GBP\",\"Sept 2025\",\"1 year\"\n\
         \"Bad\",\"Bad uz\",\"Postgraduate\",\"{uni}\",\"Main\",\"-1\",\"GBP\",\"Sept 2025\",\"1 year\""
    );

    let response = ImportService::import_csv(&pool, csv.as_bytes()).await.unwrap();
    assert!(!response.success);
    assert_eq!(response.processed_count, 0);
    assert_eq!(response.errors.len(), 1);
    assert_eq!(response.errors[0].row, 3);

    // The valid row was not written either: all-or-nothing.
    let course_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM courses WHERE course_name = $1")
        .bind(&good)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(course_count, 0);

    let uni_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM universities WHERE name = $1")
        .bind(&uni)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(uni_count, 0);
}

#[tokio::test]
#[ignore = "Requires database - run locally with DATABASE_URL"]
async fn test_reimporting_same_university_does_not_duplicate_it() {
    let pool = create_test_pool().await;
    let uni = unique("Shared Uni");

    for i in 0..2 {
        let course = unique(&format!("MSc Repeat {i}"));
        let csv = format!(
            "{HEADER}\n\"{course}\",\"{course} uz\",\"Undergraduate\",\"{uni}\",\"Main\",\"5000\",\"GBP\",\"Jan 2026\",\"3 years\""
        );
        let response = ImportService::import_csv(&pool, csv.as_bytes()).await.unwrap();
        assert!(response.success);
    }

    let uni_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM universities WHERE name = $1")
        .bind(&uni)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(uni_count, 1);
}

//! Database-backed integration tests for course search and mutations.
//!
//! Run with: `DATABASE_URL=postgres://... cargo test -p unigate-api-courses -- --ignored`

mod common;

use common::*;
use rust_decimal::Decimal;
use unigate_api_courses::models::CourseSearchQuery;
use unigate_api_courses::{ApiCoursesError, CourseService};
use unigate_core::CourseId;
use unigate_db::{CourseLevel, University};
use uuid::Uuid;

fn query_for_university(university: &str) -> CourseSearchQuery {
    CourseSearchQuery {
        university: Some(university.to_string()),
        ..Default::default()
    }
}

#[tokio::test]
#[ignore = "Requires database - run locally with DATABASE_URL"]
async fn test_created_course_is_retrievable_with_matching_level_filter() {
    let pool = create_test_pool().await;
    let uni_name = unique("Roundtrip Uni");
    let university = create_test_university(&pool, &uni_name).await;
    let course_name = unique("MSc Search");
    create_test_course(
        &pool,
        university.id,
        &course_name,
        CourseLevel::Postgraduate,
        Decimal::from(18050),
    )
    .await;

    let service = CourseService::new(pool.clone());

    // Matching level filter finds it
    let matching = CourseSearchQuery {
        level: Some("Postgraduate".to_string()),
        ..query_for_university(&uni_name)
    };
    let found = service.search(&matching).await.unwrap();
    assert_eq!(found.pagination.total, 1);
    let course = &found.courses[0];
    assert_eq!(course.course_name, course_name);
    assert_eq!(course.university.name, uni_name);
    assert_eq!(course.tuition_fee, Decimal::from(18050));

    // Non-matching level filter excludes it
    let non_matching = CourseSearchQuery {
        level: Some("Undergraduate".to_string()),
        ..query_for_university(&uni_name)
    };
    let excluded = service.search(&non_matching).await.unwrap();
    assert_eq!(excluded.pagination.total, 0);
}

#[tokio::test]
#[ignore = "Requires database - run locally with DATABASE_URL"]
async fn test_fee_boundary_is_inclusive_and_exact() {
    let pool = create_test_pool().await;
    let uni_name = unique("Boundary Uni");
    let university = create_test_university(&pool, &uni_name).await;

    let exact = Decimal::new(1000000, 2); // 10000.00
    let below = Decimal::new(999999, 2); // 9999.99
    create_test_course(&pool, university.id, "Exact", CourseLevel::Postgraduate, exact).await;
    create_test_course(&pool, university.id, "Below", CourseLevel::Postgraduate, below).await;

    let service = CourseService::new(pool.clone());
    let query = CourseSearchQuery {
        min_fee: Some(exact),
        max_fee: Some(exact),
        ..query_for_university(&uni_name)
    };
    let result = service.search(&query).await.unwrap();

    assert_eq!(result.pagination.total, 1);
    assert_eq!(result.courses[0].course_name, "Exact");
}

#[tokio::test]
#[ignore = "Requires database - run locally with DATABASE_URL"]
async fn test_ordering_is_newest_first_with_stable_pagination() {
    let pool = create_test_pool().await;
    let uni_name = unique("Order Uni");
    let university = create_test_university(&pool, &uni_name).await;
    for i in 0..5 {
        create_test_course(
            &pool,
            university.id,
            &format!("Course {i}"),
            CourseLevel::Undergraduate,
            Decimal::from(1000 + i),
        )
        .await;
    }

    let service = CourseService::new(pool.clone());
    let page1 = service
        .search(&CourseSearchQuery {
            limit: Some(3),
            page: Some(1),
            ..query_for_university(&uni_name)
        })
        .await
        .unwrap();
    let page2 = service
        .search(&CourseSearchQuery {
            limit: Some(3),
            page: Some(2),
            ..query_for_university(&uni_name)
        })
        .await
        .unwrap();

    assert_eq!(page1.pagination.total, 5);
    assert_eq!(page1.pagination.total_pages, 2);
    assert!(page1.pagination.has_next_page);
    assert!(!page1.pagination.has_prev_page);
    assert!(page2.pagination.has_prev_page);

    // No course appears on both pages, even with identical timestamps.
    let ids1: Vec<Uuid> = page1.courses.iter().map(|c| c.id).collect();
    for course in &page2.courses {
        assert!(!ids1.contains(&course.id));
    }
    assert_eq!(ids1.len() + page2.courses.len(), 5);
}

#[tokio::test]
#[ignore = "Requires database - run locally with DATABASE_URL"]
async fn test_smart_search_matches_uzbek_name() {
    let pool = create_test_pool().await;
    let uni_name = unique("Smart Uni");
    let university = create_test_university(&pool, &uni_name).await;
    let marker = unique("smartmarker");
    create_test_course(
        &pool,
        university.id,
        &format!("MSc {marker}"),
        CourseLevel::Postgraduate,
        Decimal::from(9000),
    )
    .await;

    let service = CourseService::new(pool.clone());

    // The uz name is "<name> uz"; a substring of it must match.
    let result = service
        .search(&CourseSearchQuery {
            query: Some(marker.to_uppercase()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(result.pagination.total, 1);

    // Exact match on the primary name is case-sensitive equality.
    let exact_miss = service
        .search(&CourseSearchQuery {
            query: Some(marker.clone()),
            match_type: Some("exact".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(exact_miss.pagination.total, 0);
}

#[tokio::test]
#[ignore = "Requires database - run locally with DATABASE_URL"]
async fn test_university_upsert_is_idempotent() {
    let pool = create_test_pool().await;
    let name = unique("Idempotent Uni");

    let first = University::upsert_by_name(&pool, &name).await.unwrap();
    let second = University::upsert_by_name(&pool, &name).await.unwrap();
    assert_eq!(first.id, second.id);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM universities WHERE name = $1")
        .bind(&name)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
#[ignore = "Requires database - run locally with DATABASE_URL"]
async fn test_delete_missing_course_is_not_found() {
    let pool = create_test_pool().await;
    let service = CourseService::new(pool);

    let err = service.delete(CourseId::new()).await.unwrap_err();
    assert!(matches!(err, ApiCoursesError::NotFound));
}

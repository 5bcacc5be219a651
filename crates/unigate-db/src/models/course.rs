//! Course model.
//!
//! Courses are created through the action layer or CSV import, searched
//! through the course service, and deleted through the action layer.
//! The `level` column stays TEXT in the store; `CourseLevel` gives the
//! write path a closed enum.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgExecutor, PgPool};
use uuid::Uuid;

/// Study level of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseLevel {
    Undergraduate,
    Postgraduate,
}

impl std::fmt::Display for CourseLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CourseLevel::Undergraduate => write!(f, "Undergraduate"),
            CourseLevel::Postgraduate => write!(f, "Postgraduate"),
        }
    }
}

impl std::str::FromStr for CourseLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "undergraduate" => Ok(CourseLevel::Undergraduate),
            "postgraduate" => Ok(CourseLevel::Postgraduate),
            _ => Err(format!("Invalid course level: {s}")),
        }
    }
}

/// A course record.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Course {
    /// Unique identifier.
    pub id: Uuid,

    /// Primary (English) course name.
    pub course_name: String,

    /// Uzbek course name.
    pub course_name_uz: String,

    /// Study level: `Undergraduate` or `Postgraduate`.
    pub level: String,

    /// University offering the course.
    pub university_id: Uuid,

    /// Campus label, e.g. "Headington Campus, United Kingdom".
    pub campus: String,

    /// Tuition fee, non-negative.
    pub tuition_fee: Decimal,

    /// ISO currency code, defaults to GBP.
    pub currency: String,

    /// Intake label, e.g. "September 2025".
    pub selected_intake: String,

    /// Duration label, e.g. "1 year".
    pub selected_duration: String,

    /// Application submission deadline, when known.
    pub submission_deadline: Option<NaiveDate>,

    /// Offer turnaround time in weeks, when known.
    pub offer_tat: Option<i32>,

    /// Whether the course qualifies for accelerated offer processing.
    pub express_offer: bool,

    /// Mode of study, e.g. "Full-time".
    pub mode_of_study: Option<String>,

    /// English description, searched by free-text queries.
    pub description: Option<String>,

    /// Uzbek description, searched by free-text queries.
    pub description_uz: Option<String>,

    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// A course joined with its university's name, as returned by listing
/// and lookup queries.
#[derive(Debug, Clone, FromRow)]
pub struct CourseWithUniversity {
    /// The course columns.
    #[sqlx(flatten)]
    pub course: Course,

    /// Name of the referenced university.
    pub university_name: String,
}

/// Data required to create a new course.
#[derive(Debug, Clone)]
pub struct CreateCourse {
    pub course_name: String,
    pub course_name_uz: String,
    pub level: CourseLevel,
    pub university_id: Uuid,
    pub campus: String,
    pub tuition_fee: Decimal,
    pub currency: String,
    pub selected_intake: String,
    pub selected_duration: String,
    pub submission_deadline: Option<NaiveDate>,
    pub offer_tat: Option<i32>,
    pub express_offer: bool,
    pub mode_of_study: Option<String>,
}

impl Course {
    /// Insert a new course record.
    ///
    /// Generic over the executor so import can run it inside a
    /// transaction. Foreign-key integrity (`university_id`) and the
    /// non-negative fee check are enforced by the store.
    pub async fn create<'e, E>(executor: E, data: &CreateCourse) -> Result<Self, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as(
            r"
            INSERT INTO courses
                (course_name, course_name_uz, level, university_id, campus,
                 tuition_fee, currency, selected_intake, selected_duration,
                 submission_deadline, offer_tat, express_offer, mode_of_study)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *
            ",
        )
        .bind(&data.course_name)
        .bind(&data.course_name_uz)
        .bind(data.level.to_string())
        .bind(data.university_id)
        .bind(&data.campus)
        .bind(data.tuition_fee)
        .bind(&data.currency)
        .bind(&data.selected_intake)
        .bind(&data.selected_duration)
        .bind(data.submission_deadline)
        .bind(data.offer_tat)
        .bind(data.express_offer)
        .bind(&data.mode_of_study)
        .fetch_one(executor)
        .await
    }

    /// Find a course by ID, joined with its university name.
    pub async fn find_by_id(
        pool: &PgPool,
        id: Uuid,
    ) -> Result<Option<CourseWithUniversity>, sqlx::Error> {
        sqlx::query_as(
            r"
            SELECT c.*, u.name AS university_name
            FROM courses c
            JOIN universities u ON u.id = c.university_id
            WHERE c.id = $1
            ",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Delete a course by ID. Returns the number of rows removed
    /// (0 when the id does not exist).
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_roundtrip() {
        for level in [CourseLevel::Undergraduate, CourseLevel::Postgraduate] {
            let parsed: CourseLevel = level.to_string().parse().unwrap();
            assert_eq!(parsed, level);
        }
    }

    #[test]
    fn test_level_parse_is_case_insensitive() {
        assert_eq!(
            "postgraduate".parse::<CourseLevel>().unwrap(),
            CourseLevel::Postgraduate
        );
        assert!("PhD".parse::<CourseLevel>().is_err());
    }
}

//! Course search and mutation service.
//!
//! Translates a flat search query into SQL predicates and a pagination
//! window. The count and page queries are assembled from the same
//! fragments in the same order, so their bind lists stay aligned.

use sqlx::PgPool;
use unigate_core::{CourseId, FieldError};
use unigate_db::{Course, CourseWithUniversity, CreateCourse, University};

use crate::error::ApiCoursesError;
use crate::models::{CourseListResponse, CourseResponse, CourseSearchQuery, PaginationMeta};

/// Columns searched by the smart (substring) free-text match.
const SMART_SEARCH_COLUMNS: [&str; 4] = [
    "c.course_name",
    "c.course_name_uz",
    "c.description",
    "c.description_uz",
];

/// Course catalog service.
#[derive(Clone)]
pub struct CourseService {
    pool: PgPool,
}

impl CourseService {
    /// Create a new course service.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Search courses with filters and pagination.
    ///
    /// Results are ordered newest-created first, with the row id as a
    /// deterministic tie-break. A store failure surfaces as a generic
    /// query failure; no partial results are returned.
    pub async fn search(
        &self,
        query: &CourseSearchQuery,
    ) -> Result<CourseListResponse, ApiCoursesError> {
        let page = query.page();
        let limit = query.limit();
        let offset = query.offset();

        // Precompute bound values; clause order and bind order must agree.
        let text_value: Option<String> = query.query.as_deref().map(|term| {
            if query.exact_match() {
                term.to_string()
            } else {
                format!("%{}%", escape_ilike(term))
            }
        });
        let university_pattern: Option<String> = query
            .university
            .as_deref()
            .map(|u| format!("%{}%", escape_ilike(u)));
        let express_offer = query.express_offer_filter();

        // Build count query dynamically
        let total: i64 = {
            let mut sql = String::from(
                "SELECT COUNT(*) FROM courses c \
                 JOIN universities u ON u.id = c.university_id WHERE 1=1",
            );
            push_filter_clauses(&mut sql, query);

            let mut q = sqlx::query_scalar::<_, i64>(&sql);
            if let Some(ref text) = text_value {
                q = q.bind(text);
            }
            if let Some(ref level) = query.level {
                q = q.bind(level);
            }
            if let Some(ref pattern) = university_pattern {
                q = q.bind(pattern);
            }
            if let Some(min_fee) = query.min_fee {
                q = q.bind(min_fee);
            }
            if let Some(max_fee) = query.max_fee {
                q = q.bind(max_fee);
            }
            if let Some(ref intake) = query.intake {
                q = q.bind(intake);
            }
            if let Some(ref duration) = query.duration {
                q = q.bind(duration);
            }
            if let Some(flag) = express_offer {
                q = q.bind(flag);
            }

            q.fetch_one(&self.pool).await?
        };

        // Build page query dynamically
        let rows: Vec<CourseWithUniversity> = {
            let mut sql = String::from(
                "SELECT c.*, u.name AS university_name FROM courses c \
                 JOIN universities u ON u.id = c.university_id WHERE 1=1",
            );
            let param_idx = push_filter_clauses(&mut sql, query);

            sql.push_str(&format!(
                " ORDER BY c.created_at DESC, c.id DESC LIMIT ${param_idx} OFFSET ${}",
                param_idx + 1
            ));

            let mut q = sqlx::query_as::<_, CourseWithUniversity>(&sql);
            if let Some(ref text) = text_value {
                q = q.bind(text);
            }
            if let Some(ref level) = query.level {
                q = q.bind(level);
            }
            if let Some(ref pattern) = university_pattern {
                q = q.bind(pattern);
            }
            if let Some(min_fee) = query.min_fee {
                q = q.bind(min_fee);
            }
            if let Some(max_fee) = query.max_fee {
                q = q.bind(max_fee);
            }
            if let Some(ref intake) = query.intake {
                q = q.bind(intake);
            }
            if let Some(ref duration) = query.duration {
                q = q.bind(duration);
            }
            if let Some(flag) = express_offer {
                q = q.bind(flag);
            }
            q = q.bind(limit).bind(offset);

            q.fetch_all(&self.pool).await?
        };

        Ok(CourseListResponse {
            courses: rows.into_iter().map(CourseResponse::from).collect(),
            pagination: PaginationMeta::new(total, page, limit),
        })
    }

    /// Fetch a single course with its university.
    pub async fn get(&self, id: CourseId) -> Result<CourseResponse, ApiCoursesError> {
        Course::find_by_id(&self.pool, id.into_uuid())
            .await?
            .map(CourseResponse::from)
            .ok_or(ApiCoursesError::NotFound)
    }

    /// Create a course from validated input.
    ///
    /// The referenced university must exist; foreign-key integrity is
    /// ultimately the store's, this check only turns a typo'd id into a
    /// field error instead of a generic failure.
    pub async fn create(&self, data: &CreateCourse) -> Result<CourseResponse, ApiCoursesError> {
        let university = University::find_by_id(&self.pool, data.university_id)
            .await?
            .ok_or_else(|| {
                ApiCoursesError::Validation(vec![FieldError::new(
                    "universityId",
                    "Unknown university",
                )])
            })?;

        let course = Course::create(&self.pool, data).await?;

        Ok(CourseResponse::from(CourseWithUniversity {
            course,
            university_name: university.name,
        }))
    }

    /// Delete a course by id.
    pub async fn delete(&self, id: CourseId) -> Result<(), ApiCoursesError> {
        let removed = Course::delete(&self.pool, id.into_uuid()).await?;
        if removed == 0 {
            return Err(ApiCoursesError::NotFound);
        }
        Ok(())
    }

    /// List universities, ordered by name.
    pub async fn universities(&self) -> Result<Vec<University>, ApiCoursesError> {
        Ok(University::list(&self.pool).await?)
    }
}

/// Append the WHERE fragments for every present filter, numbering bind
/// parameters from `$1`. Returns the next unused parameter index.
///
/// The bind chains in [`CourseService::search`] must bind values in
/// exactly this order.
fn push_filter_clauses(sql: &mut String, query: &CourseSearchQuery) -> usize {
    let mut param_idx: usize = 1;

    if query.query.is_some() {
        if query.exact_match() {
            sql.push_str(&format!(" AND c.course_name = ${param_idx}"));
        } else {
            let ors: Vec<String> = SMART_SEARCH_COLUMNS
                .iter()
                .map(|col| format!("{col} ILIKE ${param_idx}"))
                .collect();
            sql.push_str(&format!(" AND ({})", ors.join(" OR ")));
        }
        param_idx += 1;
    }

    if query.level.is_some() {
        sql.push_str(&format!(" AND c.level = ${param_idx}"));
        param_idx += 1;
    }

    if query.university.is_some() {
        sql.push_str(&format!(" AND u.name ILIKE ${param_idx}"));
        param_idx += 1;
    }

    if query.min_fee.is_some() {
        sql.push_str(&format!(" AND c.tuition_fee >= ${param_idx}"));
        param_idx += 1;
    }

    if query.max_fee.is_some() {
        sql.push_str(&format!(" AND c.tuition_fee <= ${param_idx}"));
        param_idx += 1;
    }

    if query.intake.is_some() {
        sql.push_str(&format!(" AND c.selected_intake = ${param_idx}"));
        param_idx += 1;
    }

    if query.duration.is_some() {
        sql.push_str(&format!(" AND c.selected_duration = ${param_idx}"));
        param_idx += 1;
    }

    if query.express_offer.is_some() {
        sql.push_str(&format!(" AND c.express_offer = ${param_idx}"));
        param_idx += 1;
    }

    param_idx
}

/// Escape ILIKE metacharacters in user-supplied search terms.
fn escape_ilike(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

//! Import service: the validate-then-commit write phase.
//!
//! Rows reach this service only after the whole batch validated; the
//! write phase runs in a single transaction so a mid-batch store
//! failure rolls back every row.

use sqlx::PgPool;
use unigate_db::{Course, CreateCourse, University};

use crate::error::ImportError;
use crate::models::ImportResponse;
use crate::services::csv_parser::{self, CsvParseResult};

/// Course import service.
pub struct ImportService;

impl ImportService {
    /// Parse, validate, and (when the whole batch is valid) write an
    /// uploaded CSV.
    ///
    /// Returns the structured import response: either the imported-row
    /// count or the full per-row error list with zero rows written.
    pub async fn import_csv(pool: &PgPool, data: &[u8]) -> Result<ImportResponse, ImportError> {
        let CsvParseResult {
            rows,
            errors,
            total_rows,
        } = csv_parser::parse_csv(data)?;

        if total_rows == 0 {
            return Err(ImportError::InvalidCsv(
                "CSV file contains no data rows".to_string(),
            ));
        }

        // All-or-nothing: any invalid row rejects the batch before any
        // write happens.
        if !errors.is_empty() {
            tracing::info!(
                total_rows,
                invalid_rows = errors.len(),
                "Import rejected by row validation"
            );
            return Ok(ImportResponse::rejected(errors));
        }

        let mut tx = pool.begin().await?;

        for row in &rows {
            let university = University::upsert_by_name(&mut *tx, &row.university_name).await?;

            let course = CreateCourse {
                course_name: row.course_name.clone(),
                course_name_uz: row.course_name_uz.clone(),
                level: row.level,
                university_id: university.id,
                campus: row.campus.clone(),
                tuition_fee: row.tuition_fee,
                currency: row.currency.clone(),
                selected_intake: row.selected_intake.clone(),
                selected_duration: row.selected_duration.clone(),
                submission_deadline: row.submission_deadline,
                offer_tat: row.offer_tat,
                express_offer: row.express_offer,
                mode_of_study: None,
            };
            Course::create(&mut *tx, &course).await?;
        }

        tx.commit().await?;

        tracing::info!(imported = rows.len(), "Import committed");
        Ok(ImportResponse::imported(rows.len()))
    }
}

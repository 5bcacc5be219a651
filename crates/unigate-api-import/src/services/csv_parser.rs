//! CSV parsing and row validation for course import.
//!
//! Parses the uploaded bytes into typed course rows, validating every
//! row against the course schema and collecting the full error list.
//! No row is written here; the caller enforces the all-or-nothing
//! batch policy.

use chrono::NaiveDate;
use csv::StringRecord;
use rust_decimal::Decimal;
use unigate_core::FieldError;
use unigate_db::CourseLevel;

use crate::error::ImportError;
use crate::models::RowErrors;
use crate::validation::{validate_headers, HeaderValidation};

/// Maximum upload size (10 MiB).
pub const MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

/// Maximum data rows per import.
pub const MAX_ROWS: usize = 10_000;

/// Currency assigned when the column is absent or blank.
pub const DEFAULT_CURRENCY: &str = "GBP";

/// Date format accepted for submission deadlines.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// UTF-8 BOM bytes.
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// A validated CSV data row, ready to be written.
#[derive(Debug, Clone)]
pub struct CourseRow {
    /// 1-based line number (header = 1, first data row = 2).
    pub line_number: i32,
    pub course_name: String,
    pub course_name_uz: String,
    pub level: CourseLevel,
    /// University name, resolved by upsert at write time.
    pub university_name: String,
    pub campus: String,
    pub tuition_fee: Decimal,
    pub currency: String,
    pub selected_intake: String,
    pub selected_duration: String,
    pub submission_deadline: Option<NaiveDate>,
    pub offer_tat: Option<i32>,
    pub express_offer: bool,
}

/// Result of parsing a complete CSV file.
#[derive(Debug)]
pub struct CsvParseResult {
    /// Successfully validated rows, in file order.
    pub rows: Vec<CourseRow>,
    /// Per-row validation errors, in file order.
    pub errors: Vec<RowErrors>,
    /// Total data rows in the CSV (excluding header).
    pub total_rows: usize,
}

/// Strip UTF-8 BOM from the beginning of data if present.
fn strip_utf8_bom(data: &[u8]) -> &[u8] {
    if data.starts_with(UTF8_BOM) {
        &data[UTF8_BOM.len()..]
    } else {
        data
    }
}

/// Parse and validate a CSV file from raw bytes.
///
/// Returns validated rows alongside per-row errors; a structural
/// problem (unreadable CSV, missing required header, caps exceeded)
/// fails the whole call instead.
pub fn parse_csv(data: &[u8]) -> Result<CsvParseResult, ImportError> {
    if data.len() > MAX_FILE_SIZE {
        return Err(ImportError::FileTooLarge(format!(
            "File size {} bytes exceeds maximum of {MAX_FILE_SIZE} bytes",
            data.len()
        )));
    }

    let data = strip_utf8_bom(data);
    if data.is_empty() {
        return Err(ImportError::InvalidCsv("CSV file is empty".to_string()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| ImportError::InvalidCsv(format!("Failed to read CSV headers: {e}")))?
        .iter()
        .map(ToString::to_string)
        .collect();

    let header_validation = validate_headers(&headers);
    if !header_validation.is_valid() {
        return Err(ImportError::MissingHeaders(
            header_validation.missing.join(", "),
        ));
    }

    let mut rows = Vec::new();
    let mut errors = Vec::new();
    let mut total_rows = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // Header is line 1, so the first data row reports as line 2.
        let line_number = (idx + 2) as i32;
        total_rows += 1;

        if total_rows > MAX_ROWS {
            return Err(ImportError::TooManyRows(format!(
                "CSV contains more than {MAX_ROWS} data rows"
            )));
        }

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                errors.push(RowErrors {
                    row: line_number,
                    errors: vec![FieldError::new("row", format!("Failed to parse CSV row: {e}"))],
                });
                continue;
            }
        };

        match validate_row(&record, &header_validation, line_number) {
            Ok(row) => rows.push(row),
            Err(row_errors) => errors.push(row_errors),
        }
    }

    Ok(CsvParseResult {
        rows,
        errors,
        total_rows,
    })
}

/// Fetch a trimmed cell by canonical column name; absent cells read as "".
fn cell<'r>(record: &'r StringRecord, headers: &HeaderValidation, column: &str) -> &'r str {
    headers
        .columns
        .get(column)
        .and_then(|&idx| record.get(idx))
        .map_or("", str::trim)
}

/// Validate one data row against the course schema.
///
/// Collects every field error in the row rather than stopping at the
/// first.
fn validate_row(
    record: &StringRecord,
    headers: &HeaderValidation,
    line_number: i32,
) -> Result<CourseRow, RowErrors> {
    let mut errors = Vec::new();

    let mut required = |column: &'static str| -> Option<String> {
        let value = cell(record, headers, column);
        if value.is_empty() {
            errors.push(FieldError::new(column, format!("{column} is required")));
            None
        } else {
            Some(value.to_string())
        }
    };

    let course_name = required("Course Name");
    let course_name_uz = required("Course Name (Uzbek)");
    let university_name = required("University");
    let campus = required("Campus");
    let selected_intake = required("Selected Intake");
    let selected_duration = required("Selected Duration");

    let level = match cell(record, headers, "Level") {
        "" => {
            errors.push(FieldError::new("Level", "Level is required"));
            None
        }
        raw => match raw.parse::<CourseLevel>() {
            Ok(level) => Some(level),
            Err(_) => {
                errors.push(FieldError::new(
                    "Level",
                    "Level must be Undergraduate or Postgraduate",
                ));
                None
            }
        },
    };

    let tuition_fee = match cell(record, headers, "Tuition Fee").parse::<Decimal>() {
        Ok(fee) if fee >= Decimal::ZERO => Some(fee),
        _ => {
            errors.push(FieldError::new(
                "Tuition Fee",
                "Tuition Fee must be a non-negative number",
            ));
            None
        }
    };

    let currency = match cell(record, headers, "Currency") {
        "" => DEFAULT_CURRENCY.to_string(),
        raw => raw.to_string(),
    };

    let submission_deadline = match cell(record, headers, "Submission Deadline") {
        "" => None,
        raw => match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
            Ok(date) => Some(date),
            Err(_) => {
                errors.push(FieldError::new(
                    "Submission Deadline",
                    "Submission Deadline must be a date in YYYY-MM-DD format",
                ));
                None
            }
        },
    };

    let offer_tat = match cell(record, headers, "Offer TAT") {
        "" => None,
        raw => match raw.parse::<i32>() {
            Ok(weeks) => Some(weeks),
            Err(_) => {
                errors.push(FieldError::new(
                    "Offer TAT",
                    "Offer TAT must be an integer number of weeks",
                ));
                None
            }
        },
    };

    // "yes" or "true" (case-insensitive) means true; anything else,
    // including blank, means false.
    let express_offer = matches!(
        cell(record, headers, "Express Offer")
            .to_lowercase()
            .as_str(),
        "yes" | "true"
    );

    match (
        course_name,
        course_name_uz,
        level,
        university_name,
        campus,
        tuition_fee,
        selected_intake,
        selected_duration,
    ) {
        (
            Some(course_name),
            Some(course_name_uz),
            Some(level),
            Some(university_name),
            Some(campus),
            Some(tuition_fee),
            Some(selected_intake),
            Some(selected_duration),
        ) if errors.is_empty() => Ok(CourseRow {
            line_number,
            course_name,
            course_name_uz,
            level,
            university_name,
            campus,
            tuition_fee,
            currency,
            selected_intake,
            selected_duration,
            submission_deadline,
            offer_tat,
            express_offer,
        }),
        _ => Err(RowErrors {
            row: line_number,
            errors,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_HEADER: &str = "Course Name,Course Name (Uzbek),Level,University,Campus,Tuition Fee,Currency,Selected Intake,Selected Duration";

    fn csv(body: &str) -> Vec<u8> {
        format!("{FULL_HEADER}\n{body}").into_bytes()
    }

    #[test]
    fn test_valid_row_parses() {
        let data = csv(r#""MSc X","MSc X uz","Postgraduate","Test Uni","Main","10000","GBP","Sept 2025","1 year""#);
        let result = parse_csv(&data).unwrap();
        assert_eq!(result.total_rows, 1);
        assert!(result.errors.is_empty());
        let row = &result.rows[0];
        assert_eq!(row.line_number, 2);
        assert_eq!(row.course_name, "MSc X");
        assert_eq!(row.level, CourseLevel::Postgraduate);
        assert_eq!(row.tuition_fee, Decimal::from(10000));
        assert!(!row.express_offer);
    }

    #[test]
    fn test_blank_currency_defaults_to_gbp() {
        let data = csv("MSc X,MSc X uz,Postgraduate,Test Uni,Main,10000,,Sept 2025,1 year");
        let result = parse_csv(&data).unwrap();
        assert_eq!(result.rows[0].currency, "GBP");
    }

    #[test]
    fn test_optional_columns_may_be_absent() {
        let data = b"Course Name,Course Name (Uzbek),Level,University,Campus,Tuition Fee,Selected Intake,Selected Duration\n\
            MSc X,MSc X uz,Postgraduate,Test Uni,Main,10000,Sept 2025,1 year";
        let result = parse_csv(data).unwrap();
        assert_eq!(result.rows[0].currency, "GBP");
        assert_eq!(result.rows[0].submission_deadline, None);
        assert_eq!(result.rows[0].offer_tat, None);
    }

    #[test]
    fn test_express_offer_values() {
        let header = "Course Name,Course Name (Uzbek),Level,University,Campus,Tuition Fee,Selected Intake,Selected Duration,Express Offer";
        for (value, expected) in [("yes", true), ("TRUE", true), ("no", false), ("", false)] {
            let data = format!(
                "{header}\nMSc X,MSc X uz,Postgraduate,Test Uni,Main,10000,Sept 2025,1 year,{value}"
            );
            let result = parse_csv(data.as_bytes()).unwrap();
            assert_eq!(result.rows[0].express_offer, expected, "value: {value:?}");
        }
    }

    #[test]
    fn test_missing_header_rejected() {
        let data = b"Course Name,Level\nMSc X,Postgraduate";
        let err = parse_csv(data).unwrap_err();
        match err {
            ImportError::MissingHeaders(missing) => {
                assert!(missing.contains("University"));
                assert!(missing.contains("Tuition Fee"));
            }
            other => panic!("expected MissingHeaders, got {other:?}"),
        }
    }

    #[test]
    fn test_every_invalid_row_reported() {
        let data = csv(
            "MSc X,MSc X uz,Postgraduate,Test Uni,Main,not-a-fee,GBP,Sept 2025,1 year\n\
             ,MSc Y uz,Doctorate,Test Uni,Main,9000,GBP,Sept 2025,1 year\n\
             MSc Z,MSc Z uz,Undergraduate,Test Uni,Main,8000,GBP,Sept 2025,1 year",
        );
        let result = parse_csv(&data).unwrap();
        assert_eq!(result.total_rows, 3);
        assert_eq!(result.rows.len(), 1);
        assert_eq!(result.errors.len(), 2);

        assert_eq!(result.errors[0].row, 2);
        assert_eq!(result.errors[0].errors[0].field, "Tuition Fee");

        assert_eq!(result.errors[1].row, 3);
        let fields: Vec<&str> = result.errors[1]
            .errors
            .iter()
            .map(|e| e.field.as_str())
            .collect();
        assert!(fields.contains(&"Course Name"));
        assert!(fields.contains(&"Level"));
    }

    #[test]
    fn test_negative_fee_rejected() {
        let data = csv("MSc X,MSc X uz,Postgraduate,Test Uni,Main,-5,GBP,Sept 2025,1 year");
        let result = parse_csv(&data).unwrap();
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].errors[0].field, "Tuition Fee");
    }

    #[test]
    fn test_bom_is_stripped() {
        let mut data = vec![0xEF, 0xBB, 0xBF];
        data.extend_from_slice(&csv(
            "MSc X,MSc X uz,Postgraduate,Test Uni,Main,10000,GBP,Sept 2025,1 year",
        ));
        let result = parse_csv(&data).unwrap();
        assert_eq!(result.rows.len(), 1);
    }

    #[test]
    fn test_empty_file_rejected() {
        assert!(matches!(
            parse_csv(b"").unwrap_err(),
            ImportError::InvalidCsv(_)
        ));
    }

    #[test]
    fn test_deadline_and_tat_parsed() {
        let header = "Course Name,Course Name (Uzbek),Level,University,Campus,Tuition Fee,Selected Intake,Selected Duration,Submission Deadline,Offer TAT";
        let data = format!(
            "{header}\nMSc X,MSc X uz,Postgraduate,Test Uni,Main,10000,Sept 2025,1 year,2025-08-01,2"
        );
        let result = parse_csv(data.as_bytes()).unwrap();
        let row = &result.rows[0];
        assert_eq!(
            row.submission_deadline,
            Some(NaiveDate::from_ymd_opt(2025, 8, 1).unwrap())
        );
        assert_eq!(row.offer_tat, Some(2));
    }
}

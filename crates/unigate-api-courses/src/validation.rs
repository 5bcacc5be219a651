//! Course form validation.
//!
//! Parses the string-typed form fields into a typed [`CreateCourse`],
//! collecting an error for every offending field rather than stopping
//! at the first.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use unigate_core::{FieldError, UniversityId};
use unigate_db::{CourseLevel, CreateCourse};

use crate::models::CreateCourseRequest;

/// Default currency when the form leaves it blank.
pub const DEFAULT_CURRENCY: &str = "GBP";

/// Date format accepted for submission deadlines.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validate the course form and build the typed creation input.
///
/// # Errors
///
/// Returns the full list of field errors when any field is missing or
/// unparseable.
pub fn validate_course_form(req: &CreateCourseRequest) -> Result<CreateCourse, Vec<FieldError>> {
    let mut errors = Vec::new();

    let course_name = required(&req.course_name, "courseName", "Course name is required", &mut errors);
    let course_name_uz = required(
        &req.course_name_uz,
        "courseNameUz",
        "Uzbek course name is required",
        &mut errors,
    );
    let campus = required(&req.campus, "campus", "Campus is required", &mut errors);
    let selected_intake = required(&req.selected_intake, "selectedIntake", "Intake is required", &mut errors);
    let selected_duration = required(
        &req.selected_duration,
        "selectedDuration",
        "Duration is required",
        &mut errors,
    );

    let level = if req.level.trim().is_empty() {
        errors.push(FieldError::new("level", "Level is required"));
        None
    } else {
        match req.level.trim().parse::<CourseLevel>() {
            Ok(level) => Some(level),
            Err(_) => {
                errors.push(FieldError::new(
                    "level",
                    "Level must be Undergraduate or Postgraduate",
                ));
                None
            }
        }
    };

    let university_id = if req.university_id.trim().is_empty() {
        errors.push(FieldError::new("universityId", "University is required"));
        None
    } else {
        match req.university_id.trim().parse::<UniversityId>() {
            Ok(id) => Some(id.into_uuid()),
            Err(_) => {
                errors.push(FieldError::new(
                    "universityId",
                    "University must be a valid identifier",
                ));
                None
            }
        }
    };

    let tuition_fee = match req.tuition_fee.trim().parse::<Decimal>() {
        Ok(fee) if fee >= Decimal::ZERO => Some(fee),
        _ => {
            errors.push(FieldError::new(
                "tuitionFee",
                "Tuition fee must be a positive number",
            ));
            None
        }
    };

    let submission_deadline = match optional(req.submission_deadline.as_deref()) {
        None => None,
        Some(raw) => match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
            Ok(date) => Some(date),
            Err(_) => {
                errors.push(FieldError::new(
                    "submissionDeadline",
                    "Submission deadline must be a date in YYYY-MM-DD format",
                ));
                None
            }
        },
    };

    let offer_tat = match optional(req.offer_tat.as_deref()) {
        None => None,
        Some(raw) => match raw.parse::<i32>() {
            Ok(weeks) => Some(weeks),
            Err(_) => {
                errors.push(FieldError::new(
                    "offerTAT",
                    "Offer TAT must be an integer number of weeks",
                ));
                None
            }
        },
    };

    let currency = match req.currency.trim() {
        "" => DEFAULT_CURRENCY.to_string(),
        other => other.to_string(),
    };

    // Checkbox submission: "on" from a form, "true" from API clients.
    let express_offer = matches!(
        req.express_offer.as_deref().map(str::trim),
        Some("on") | Some("true")
    );

    // Every required field is Some exactly when no error was recorded
    // for it, so the two arms cannot disagree with `errors`.
    match (
        course_name,
        course_name_uz,
        level,
        university_id,
        campus,
        tuition_fee,
        selected_intake,
        selected_duration,
    ) {
        (
            Some(course_name),
            Some(course_name_uz),
            Some(level),
            Some(university_id),
            Some(campus),
            Some(tuition_fee),
            Some(selected_intake),
            Some(selected_duration),
        ) if errors.is_empty() => Ok(CreateCourse {
            course_name,
            course_name_uz,
            level,
            university_id,
            campus,
            tuition_fee,
            currency,
            selected_intake,
            selected_duration,
            submission_deadline,
            offer_tat,
            express_offer,
            mode_of_study: optional(req.mode_of_study.as_deref()).map(ToString::to_string),
        }),
        _ => Err(errors),
    }
}

/// Require a non-blank string field.
fn required(
    value: &str,
    field: &str,
    message: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(FieldError::new(field, message));
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Normalize an optional field: absent or blank becomes `None`.
fn optional(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn valid_request() -> CreateCourseRequest {
        CreateCourseRequest {
            course_name: "MSc Data Science".to_string(),
            course_name_uz: "MSc Ma'lumotlar fani".to_string(),
            level: "Postgraduate".to_string(),
            university_id: Uuid::new_v4().to_string(),
            campus: "Headington Campus, United Kingdom".to_string(),
            tuition_fee: "18050".to_string(),
            currency: String::new(),
            selected_intake: "September 2025".to_string(),
            selected_duration: "1 year".to_string(),
            submission_deadline: Some("2025-08-01".to_string()),
            offer_tat: Some("2".to_string()),
            express_offer: Some("on".to_string()),
            mode_of_study: None,
        }
    }

    #[test]
    fn test_valid_form_parses() {
        let course = validate_course_form(&valid_request()).unwrap();
        assert_eq!(course.course_name, "MSc Data Science");
        assert_eq!(course.currency, "GBP");
        assert!(course.express_offer);
        assert_eq!(course.offer_tat, Some(2));
        assert_eq!(
            course.submission_deadline,
            Some(NaiveDate::from_ymd_opt(2025, 8, 1).unwrap())
        );
    }

    #[test]
    fn test_all_missing_fields_reported() {
        let errors = validate_course_form(&CreateCourseRequest::default()).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        for expected in [
            "courseName",
            "courseNameUz",
            "level",
            "universityId",
            "campus",
            "tuitionFee",
            "selectedIntake",
            "selectedDuration",
        ] {
            assert!(fields.contains(&expected), "missing error for {expected}");
        }
    }

    #[test]
    fn test_negative_fee_rejected() {
        let request = CreateCourseRequest {
            tuition_fee: "-100".to_string(),
            ..valid_request()
        };
        let errors = validate_course_form(&request).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "tuitionFee");
    }

    #[test]
    fn test_unknown_level_rejected() {
        let request = CreateCourseRequest {
            level: "Doctorate".to_string(),
            ..valid_request()
        };
        let errors = validate_course_form(&request).unwrap_err();
        assert_eq!(errors[0].field, "level");
    }

    #[test]
    fn test_bad_deadline_rejected() {
        let request = CreateCourseRequest {
            submission_deadline: Some("01/08/2025".to_string()),
            ..valid_request()
        };
        let errors = validate_course_form(&request).unwrap_err();
        assert_eq!(errors[0].field, "submissionDeadline");
    }

    #[test]
    fn test_unchecked_express_offer_is_false() {
        let request = CreateCourseRequest {
            express_offer: None,
            ..valid_request()
        };
        let course = validate_course_form(&request).unwrap();
        assert!(!course.express_offer);
    }

    #[test]
    fn test_blank_optionals_become_none() {
        let request = CreateCourseRequest {
            submission_deadline: Some("  ".to_string()),
            offer_tat: Some(String::new()),
            mode_of_study: Some(String::new()),
            ..valid_request()
        };
        let course = validate_course_form(&request).unwrap();
        assert_eq!(course.submission_deadline, None);
        assert_eq!(course.offer_tat, None);
        assert_eq!(course.mode_of_study, None);
    }
}

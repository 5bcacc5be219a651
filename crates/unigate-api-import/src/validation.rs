//! CSV header validation for course import.
//!
//! Column names are matched after trimming, case-insensitively, so
//! `course name` and `Course Name ` both resolve. Unknown columns are
//! ignored.

use std::collections::HashMap;

/// Columns that must be present in the header row.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "Course Name",
    "Course Name (Uzbek)",
    "Level",
    "University",
    "Campus",
    "Tuition Fee",
    "Selected Intake",
    "Selected Duration",
];

/// Columns that may be present.
pub const OPTIONAL_COLUMNS: &[&str] = &[
    "Currency",
    "Submission Deadline",
    "Offer TAT",
    "Express Offer",
];

/// Result of CSV header validation.
#[derive(Debug)]
pub struct HeaderValidation {
    /// Canonical column name -> index in the header row.
    pub columns: HashMap<&'static str, usize>,
    /// Required columns missing from the header, in declaration order.
    pub missing: Vec<&'static str>,
}

impl HeaderValidation {
    /// Whether every required column was found.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Resolve header columns against the known set.
#[must_use]
pub fn validate_headers(headers: &[String]) -> HeaderValidation {
    let mut columns = HashMap::new();

    for canonical in REQUIRED_COLUMNS.iter().chain(OPTIONAL_COLUMNS) {
        let found = headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(canonical));
        if let Some(idx) = found {
            columns.insert(*canonical, idx);
        }
    }

    let missing = REQUIRED_COLUMNS
        .iter()
        .filter(|c| !columns.contains_key(*c))
        .copied()
        .collect();

    HeaderValidation { columns, missing }
}

//! Services for the bulk import API.

pub mod csv_parser;
pub mod import_service;

pub use csv_parser::{parse_csv, CourseRow, CsvParseResult};
pub use import_service::ImportService;

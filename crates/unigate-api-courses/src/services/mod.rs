//! Services for the course catalog API.

pub mod course_service;

pub use course_service::CourseService;

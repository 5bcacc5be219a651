//! Request and response models for the course catalog API.

pub mod requests;
pub mod responses;

pub use requests::{CourseSearchQuery, CreateCourseRequest};
pub use responses::{
    CourseListResponse, CourseResponse, PaginationMeta, UniversityRef, UniversityResponse,
};

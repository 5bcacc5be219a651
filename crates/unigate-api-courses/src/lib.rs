//! Course Catalog API for unigate.
//!
//! This crate provides the course search/filter endpoint, the admin
//! mutation endpoints, and the university listing:
//!
//! - `GET /courses` — filtered, paginated search (any authenticated role)
//! - `GET /courses/:id` — single course lookup
//! - `POST /courses` — create (ADMIN)
//! - `DELETE /courses/:id` — delete (ADMIN)
//! - `GET /universities` — university list for the course form
//!
//! Mutations queue an activity entry on the background worker and bump
//! the listing version so clients re-fetch.

pub mod error;
pub mod handlers;
pub mod listing;
pub mod models;
pub mod router;
pub mod services;
pub mod validation;

pub use error::ApiCoursesError;
pub use listing::ListingVersion;
pub use router::{courses_router, CoursesState};
pub use services::CourseService;

//! CSV Bulk Import API for unigate.
//!
//! This crate provides the course bulk-import endpoint:
//!
//! - `POST /import` — multipart CSV upload (ADMIN only)
//!
//! Validation is all-or-nothing at the batch level: every row is
//! checked against the course schema before any write happens, and a
//! single invalid row rejects the whole file with a per-row error list.
//! An all-valid batch is written inside one transaction, resolving each
//! row's university by name-keyed upsert.

pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;
pub mod validation;

pub use error::ImportError;
pub use router::{import_router, ImportState};

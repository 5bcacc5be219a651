//! Bulk import endpoint handlers.

pub mod import;

pub use import::import_handler;

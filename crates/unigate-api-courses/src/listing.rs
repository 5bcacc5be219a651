//! Listing staleness tracking.
//!
//! A monotonically increasing version for the course listing, bumped by
//! every successful create/delete. `GET /courses` responses carry it as
//! a weak `ETag`, so a client holding a stale tag knows to re-fetch
//! after a mutation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Shared course-listing version counter.
#[derive(Debug, Clone, Default)]
pub struct ListingVersion(Arc<AtomicU64>);

impl ListingVersion {
    /// Create a fresh version counter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current version.
    #[must_use]
    pub fn current(&self) -> u64 {
        self.0.load(Ordering::Acquire)
    }

    /// Mark the listing stale, returning the new version.
    pub fn bump(&self) -> u64 {
        self.0.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Weak ETag value for the current version.
    #[must_use]
    pub fn etag(&self) -> String {
        format!("W/\"courses-v{}\"", self.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bump_advances_version() {
        let version = ListingVersion::new();
        assert_eq!(version.current(), 0);
        assert_eq!(version.bump(), 1);
        assert_eq!(version.bump(), 2);
        assert_eq!(version.current(), 2);
    }

    #[test]
    fn test_clones_share_state() {
        let version = ListingVersion::new();
        let clone = version.clone();
        version.bump();
        assert_eq!(clone.current(), 1);
    }

    #[test]
    fn test_etag_format() {
        let version = ListingVersion::new();
        version.bump();
        assert_eq!(version.etag(), "W/\"courses-v1\"");
    }
}

//! # Storage Errors

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage layer errors
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// Create attempted where a file or directory already occupies the path
    #[error("entry already exists: {0}")]
    AlreadyExists(String),

    /// Read, overwrite or delete attempted on a non-existent entity
    #[error("entry not found: {0}")]
    NotFound(String),

    /// Persisted content is not valid JSON for the expected shape
    #[error("invalid content in {path}: {reason}")]
    Decode { path: String, reason: String },

    /// Any other filesystem failure
    #[error("I/O error at {path}: {reason}")]
    Io { path: String, reason: String },
}

impl StorageError {
    pub(crate) fn io(path: &Path, err: io::Error) -> Self {
        StorageError::Io {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }
}

/// One path that could not be removed during a recursive delete.
#[derive(Debug, Clone)]
pub struct CleanupFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of a best-effort recursive delete.
///
/// Recursive deletion never fails as a whole; every path that could not be
/// removed is recorded here so callers can inspect partial failures instead
/// of losing them to a side channel.
#[derive(Debug, Clone, Default)]
pub struct CleanupReport {
    failures: Vec<CleanupFailure>,
}

impl CleanupReport {
    /// True if every path was removed.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Paths that could not be removed, in encounter order.
    pub fn failures(&self) -> &[CleanupFailure] {
        &self.failures
    }

    pub(crate) fn record(&mut self, path: &Path, err: io::Error) {
        self.failures.push(CleanupFailure {
            path: path.to_path_buf(),
            reason: err.to_string(),
        });
    }

    /// Fold another report's failures into this one.
    pub fn merge(&mut self, other: CleanupReport) {
        self.failures.extend(other.failures);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_is_clean() {
        let report = CleanupReport::default();
        assert!(report.is_clean());
        assert!(report.failures().is_empty());
    }

    #[test]
    fn test_record_and_merge() {
        let err = || io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let mut a = CleanupReport::default();
        a.record(Path::new("/x/a.json"), err());

        let mut b = CleanupReport::default();
        b.record(Path::new("/x/b.json"), err());

        a.merge(b);
        assert!(!a.is_clean());
        assert_eq!(a.failures().len(), 2);
        assert_eq!(a.failures()[1].path, PathBuf::from("/x/b.json"));
    }
}

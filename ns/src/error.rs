//! Seeding step errors
//!
//! These never reach callers of [`crate::seed_workspace`]; each step returns one
//! and the seeder decides on the spot whether to skip or stop.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single seeding step
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to create directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("Failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("Failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("Refusing to overwrite existing file {0}")]
    AlreadyExists(PathBuf),
}

impl SeedError {
    /// Path the failed step was operating on
    pub fn path(&self) -> &PathBuf {
        match self {
            SeedError::CreateDir { path, .. } => path,
            SeedError::Write { path, .. } => path,
            SeedError::Read { path, .. } => path,
            SeedError::AlreadyExists(path) => path,
        }
    }

    /// True when the step lost a race with another writer
    pub fn is_already_exists(&self) -> bool {
        matches!(self, SeedError::AlreadyExists(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_path() {
        let err = SeedError::Write {
            path: PathBuf::from("/ws/SOUL.md"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/ws/SOUL.md"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_is_already_exists() {
        assert!(SeedError::AlreadyExists(PathBuf::from("a")).is_already_exists());
        let err = SeedError::CreateDir {
            path: PathBuf::from("a"),
            source: io::Error::other("boom"),
        };
        assert!(!err.is_already_exists());
        assert_eq!(err.path(), &PathBuf::from("a"));
    }
}

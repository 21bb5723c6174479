//! Skill store error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the skill store
#[derive(Debug, Error)]
pub enum SkillError {
    #[error("Failed to access skills file {}: {source}", .path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: StorageFailure,
    },

    #[error("Skill already exists: {0}")]
    DuplicateName(String),

    #[error("Skill not found: {0}")]
    NotFound(String),

    #[error("Skill name must not be empty")]
    InvalidName,
}

/// Underlying cause of a storage error
#[derive(Debug, Error)]
pub enum StorageFailure {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed skills document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("atomic replace failed: {0}")]
    Persist(#[from] tempfile::PersistError),
}

impl SkillError {
    pub(crate) fn storage(path: impl Into<PathBuf>, source: impl Into<StorageFailure>) -> Self {
        SkillError::Storage {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Check if this error came from reading or writing the skills file
    pub fn is_storage(&self) -> bool {
        matches!(self, SkillError::Storage { .. })
    }
}

/// Result alias for skill store operations
pub type Result<T> = std::result::Result<T, SkillError>;

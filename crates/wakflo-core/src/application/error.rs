//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The working directory is not an integration project.
    #[error("Not an integration project: missing '{}'", path.display())]
    MissingProjectMarker { path: PathBuf },

    /// A remote backend call failed.
    #[error("{operation} failed: {reason}")]
    ExternalService { operation: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {}: {reason}", path.display())]
    FilesystemError { path: PathBuf, reason: String },

    /// Integration folder already exists.
    #[error("Integration folder already exists at {}", path.display())]
    ProjectExists { path: PathBuf },

    /// Resource file already exists.
    #[error("Resource already exists at {}", path.display())]
    ResourceExists { path: PathBuf },

    /// Rollback failed (best-effort cleanup failed).
    #[error("Rollback failed for {}: {reason}", path.display())]
    RollbackFailed { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingProjectMarker { path } => vec![
                format!("Expected to find: {}", path.display()),
                "Run this command from the root of an integration folder".into(),
                "Or create one first: wakflo create integration".into(),
            ],
            Self::ExternalService { operation, .. } => vec![
                format!("The backend could not complete: {}", operation),
                "Check your network connection and the backend.url setting".into(),
                "Pass the value with a flag to skip the backend call".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different integration name".into(),
                "Or remove the existing folder first".into(),
            ],
            Self::ResourceExists { path } => vec![
                format!("File already exists: {}", path.display()),
                "Choose a different name for the resource".into(),
            ],
            Self::RollbackFailed { path, .. } => vec![
                format!("Some changes could not be undone under {}", path.display()),
                "Inspect the folder and restore it from version control".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingProjectMarker { .. } => ErrorCategory::NotFound,
            Self::ProjectExists { .. } | Self::ResourceExists { .. } => ErrorCategory::Validation,
            Self::ExternalService { .. } => ErrorCategory::External,
            Self::FilesystemError { .. } | Self::RollbackFailed { .. } => ErrorCategory::Internal,
        }
    }
}

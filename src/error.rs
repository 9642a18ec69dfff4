//! Error types for txedit.
//!
//! All operations return `Result<T>` which aliases `Result<T, EditError>`.
//! Public engine operations fold these into an [`OperationResult`] failure at
//! their boundary; [`FailureKind`] keeps the cause visible after that.
//!
//! [`OperationResult`]: crate::engine::OperationResult

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from edit, rename, replace and move operations.
#[derive(Debug, Error)]
pub enum EditError {
    /// Search text (or the requested occurrence of it) is absent.
    #[error("Pattern not found in {path}: {pattern}")]
    PatternNotFound { path: PathBuf, pattern: String },

    /// File to edit, back up or move does not exist.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Move target is already taken.
    #[error("Destination already exists: {0}")]
    DestinationExists(PathBuf),

    /// Caller supplied an unusable argument.
    #[error("Invalid input '{0}': {1}")]
    InvalidInput(String, String),

    /// One or more changes could not be undone.
    #[error("Rollback failed: {0}")]
    RollbackFailed(String),

    /// A failed [`OperationResult`](crate::engine::OperationResult) turned
    /// back into an error.
    #[error("{message}")]
    Operation { kind: FailureKind, message: String },

    /// File system operation failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Regex compilation failed.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Configuration file could not be parsed.
    #[error("TOML error: {0}")]
    Toml(#[from] toml_edit::TomlError),

    /// Unexpected error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Coarse cause of a failed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    PatternNotFound,
    FileNotFound,
    DestinationExists,
    InvalidInput,
    RollbackFailed,
    Io,
}

impl EditError {
    pub fn kind(&self) -> FailureKind {
        match self {
            EditError::PatternNotFound { .. } => FailureKind::PatternNotFound,
            EditError::FileNotFound(_) => FailureKind::FileNotFound,
            EditError::DestinationExists(_) => FailureKind::DestinationExists,
            EditError::InvalidInput(..) | EditError::Regex(_) | EditError::Toml(_) => {
                FailureKind::InvalidInput
            }
            EditError::RollbackFailed(_) => FailureKind::RollbackFailed,
            EditError::Operation { kind, .. } => *kind,
            EditError::Io(e) if e.kind() == std::io::ErrorKind::NotFound => {
                FailureKind::FileNotFound
            }
            EditError::Io(_) | EditError::Other(_) => FailureKind::Io,
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureKind::PatternNotFound => "pattern not found",
            FailureKind::FileNotFound => "file not found",
            FailureKind::DestinationExists => "destination exists",
            FailureKind::InvalidInput => "invalid input",
            FailureKind::RollbackFailed => "rollback failed",
            FailureKind::Io => "I/O error",
        };
        f.write_str(name)
    }
}

/// Result type alias for txedit operations.
pub type Result<T> = std::result::Result<T, EditError>;

//! Error types for the filesystem boundary.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while resolving projects, versions, and snapshot files.
#[derive(Debug, Error)]
pub enum FsError {
    /// No directory for the named project under the projects root.
    #[error("project not found: {0}")]
    ProjectNotFound(String),

    /// No directory for the named version under the project.
    #[error("version not found: {project}/{version}")]
    VersionNotFound { project: String, version: String },

    /// File content is not valid UTF-8 and cannot be line-diffed.
    #[error("not a text file: {0}")]
    NonUtf8(PathBuf),

    /// A directory walk failed partway through.
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for boundary results.
pub type FsResult<T> = Result<T, FsError>;

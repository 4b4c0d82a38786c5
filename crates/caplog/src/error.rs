//! Error types for log operations.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for log operations.
pub type LogResult<T> = Result<T, LogError>;

/// Errors that can occur while recording a log message.
///
/// Suppression is not an error: a filtered message returns `Ok(())`.
/// Likewise a missing log file during the size probe is treated as an
/// empty file, never an error.
#[derive(Debug, Error)]
pub enum LogError {
    /// The log file could not be opened, locked, written, or truncated.
    ///
    /// This is the only condition the logger raises. It covers permission
    /// problems, missing parent directories, and disk exhaustion alike;
    /// the underlying [`io::Error`] distinguishes them.
    #[error("cannot write log file {}: {source}", .path.display())]
    PermissionDenied {
        /// Path of the offending log file.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

impl LogError {
    /// Creates a permission error for the given log file path.
    pub fn permission_denied(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::PermissionDenied {
            path: path.into(),
            source,
        }
    }

    /// Returns the path of the log file the error refers to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::PermissionDenied { path, .. } => path,
        }
    }
}

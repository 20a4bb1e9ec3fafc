//! Error types for the pyautoenv library.
//!
//! Most conditions met while resolving an environment are not errors at all:
//! a missing marker, an unreadable directory or a Poetry project without a
//! virtualenv all resolve to "no environment". The variants here cover the
//! remaining cases, where a caller asked for something that cannot be done.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a pyautoenv error.
///
/// # Examples
///
/// ```
/// use pyautoenv::{Error, Result};
///
/// fn example_operation() -> Result<&'static str> {
///     Ok(".venv")
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pyautoenv library.
#[derive(Debug, Error)]
pub enum Error {
    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A path does not exist.
    #[error("path not found: {}", path.display())]
    PathNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Permission denied accessing a path.
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathBuf,
    },

    /// A path cannot be rendered as shell text without loss.
    #[error("path is not valid UTF-8: {}", path.display())]
    NonUtf8Path {
        /// The offending path.
        path: PathBuf,
    },

    /// A `pyproject.toml` could not be read as a project description.
    #[error("invalid pyproject file {}: {reason}", path.display())]
    InvalidPyProject {
        /// The path to the pyproject file.
        path: PathBuf,
        /// Why the file was rejected.
        reason: String,
    },
}

impl Error {
    /// Build an error from an I/O failure on a specific path.
    ///
    /// Not-found and permission-denied failures keep the path; anything else
    /// becomes [`Error::Io`].
    #[must_use]
    pub fn from_io(path: &std::path::Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::PathNotFound {
                path: path.to_path_buf(),
            },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => Self::Io(err),
        }
    }

    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use pyautoenv::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PathNotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PathNotFound { .. })
    }

    /// Check if error is permission-related.
    ///
    /// # Examples
    ///
    /// ```
    /// use pyautoenv::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PermissionDenied { path: PathBuf::from("/restricted") };
    /// assert!(err.is_permission_denied());
    /// ```
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }
}

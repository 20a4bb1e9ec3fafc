//! Core types for path handling.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::canonicalize::canonicalize;
use crate::path::normalize::normalize_from;

/// An absolute, normalized directory path that existed when it was resolved.
///
/// # Examples
///
/// ```no_run
/// use pyautoenv::path::Directory;
/// use std::path::Path;
///
/// let dir = Directory::resolve(Some(Path::new("src")), Path::new("/proj"), None).unwrap();
/// assert!(dir.as_path().is_absolute());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Directory {
    path: PathBuf,
}

impl Directory {
    /// Resolve the starting directory for a walk.
    ///
    /// With `explicit` set (a command-line argument), that path is
    /// normalized against `cwd`, expanding `~` with `home`, but not
    /// canonicalized: the walk follows the path as typed, symlinks included.
    /// Without it, `cwd` itself is canonicalized.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be normalized, or if it does not
    /// name an existing directory.
    pub fn resolve(explicit: Option<&Path>, cwd: &Path, home: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => normalize_from(path, cwd, home)?,
            None => canonicalize(cwd)?,
        };

        if !path.is_dir() {
            return Err(if path.exists() {
                Error::InvalidPath {
                    path,
                    reason: "not a directory".to_string(),
                }
            } else {
                Error::PathNotFound { path }
            });
        }

        Ok(Self { path })
    }

    /// Get a reference to the path.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.path
    }
}

impl AsRef<Path> for Directory {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

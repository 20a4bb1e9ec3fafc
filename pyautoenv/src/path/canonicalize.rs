//! Path canonicalization.
//!
//! Canonicalization follows symlinks, so it is only used where the real
//! location matters: the implicit working directory and "same location"
//! checks between an active and a resolved environment.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Canonicalize a path by following symlinks.
///
/// On Windows the verbatim `\\?\` prefix that `std::fs::canonicalize` adds to
/// drive and UNC paths is removed again, since activation scripts and shells
/// do not expect it.
///
/// # Errors
///
/// Returns an error if:
/// - The path does not exist (`PathNotFound`)
/// - Permission is denied (`PermissionDenied`)
/// - Any other I/O error occurs
///
/// # Examples
///
/// ```no_run
/// use pyautoenv::path::canonicalize::canonicalize;
/// use std::path::Path;
///
/// let canonical = canonicalize(Path::new(".")).unwrap();
/// assert!(canonical.is_absolute());
/// ```
pub fn canonicalize(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path)
        .map(|p| strip_verbatim(&p))
        .map_err(|e| Error::from_io(path, e))
}

/// Remove a Windows verbatim prefix (`\\?\C:\` or `\\?\UNC\`) from a path.
///
/// Paths without such a prefix are returned unchanged.
///
/// # Examples
///
/// ```
/// use pyautoenv::path::canonicalize::strip_verbatim;
/// use std::path::Path;
///
/// assert_eq!(strip_verbatim(Path::new(r"\\?\C:\proj")), Path::new(r"C:\proj"));
/// assert_eq!(strip_verbatim(Path::new(r"\\?\UNC\srv\share")), Path::new(r"\\srv\share"));
/// assert_eq!(strip_verbatim(Path::new("/proj")), Path::new("/proj"));
/// ```
#[must_use]
pub fn strip_verbatim(path: &Path) -> PathBuf {
    let Some(s) = path.to_str() else {
        return path.to_path_buf();
    };

    if let Some(rest) = s.strip_prefix(r"\\?\UNC\") {
        return PathBuf::from(format!(r"\\{rest}"));
    }
    if let Some(rest) = s.strip_prefix(r"\\?\") {
        let bytes = rest.as_bytes();
        if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
            return PathBuf::from(rest);
        }
    }
    path.to_path_buf()
}

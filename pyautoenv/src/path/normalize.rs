//! Path normalization functions.
//!
//! Normalization is purely lexical: it expands a leading `~`, anchors
//! relative paths to a base directory and resolves `.` and `..` components.
//! It never touches the filesystem, so it is safe to apply to paths that
//! come from configuration and may not exist.

use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Expand a leading tilde (`~`) to the given home directory.
///
/// Handles `~` and `~/path` (or `~\path`); `~user` is rejected. Paths without
/// a leading tilde are returned unchanged, whether or not `home` is known.
///
/// # Errors
///
/// Returns an error if:
/// - The path contains invalid UTF-8 and starts with something tilde-like
/// - The path starts with `~` but no home directory is known
/// - The path uses `~user` syntax
///
/// # Examples
///
/// ```
/// use pyautoenv::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// let home = Path::new("/home/user");
///
/// let expanded = expand_tilde(Path::new("~/project"), Some(home)).unwrap();
/// assert_eq!(expanded, Path::new("/home/user/project"));
///
/// let expanded = expand_tilde(Path::new("/absolute"), None).unwrap();
/// assert_eq!(expanded, Path::new("/absolute"));
/// ```
pub fn expand_tilde(path: &Path, home: Option<&Path>) -> Result<PathBuf> {
    let Some(path_str) = path.to_str() else {
        // A non-UTF-8 path cannot start with a literal '~' we care about.
        return Ok(path.to_path_buf());
    };

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let home = home.ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Cannot determine home directory".to_string(),
    })?;

    if path_str == "~" {
        Ok(home.to_path_buf())
    } else if path_str.starts_with("~/") || path_str.starts_with("~\\") {
        Ok(home.join(&path_str[2..]))
    } else {
        Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        })
    }
}

/// Resolve `.` and `..` components in a path.
///
/// `..` at the root stays at the root, matching what the operating system
/// does when such a path is opened.
///
/// # Examples
///
/// ```
/// use pyautoenv::path::normalize::resolve_components;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(resolve_components(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
/// assert_eq!(resolve_components(Path::new("/a/../..")), PathBuf::from("/"));
/// ```
#[must_use]
pub fn resolve_components(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    let mut depth = 0usize;

    for component in path.components() {
        match component {
            Component::Prefix(prefix) => result.push(prefix.as_os_str()),
            Component::RootDir => result.push(component),
            Component::CurDir => {}
            Component::ParentDir => {
                if depth > 0 {
                    result.pop();
                    depth -= 1;
                } else if !path.has_root() {
                    result.push(component);
                }
            }
            Component::Normal(c) => {
                result.push(c);
                depth += 1;
            }
        }
    }

    if result.as_os_str().is_empty() {
        result.push(Component::CurDir);
    }
    result
}

/// Normalize a path to absolute form relative to `base`.
///
/// 1. Expands tilde (`~`) using `home`
/// 2. Joins relative paths onto `base`
/// 3. Resolves `.` and `..` components
///
/// # Errors
///
/// Returns an error if tilde expansion fails or if the result is still not
/// absolute (because `base` was relative).
///
/// # Examples
///
/// ```
/// use pyautoenv::path::normalize::normalize_from;
/// use std::path::Path;
///
/// # #[cfg(unix)]
/// # {
/// let normalized = normalize_from(Path::new("../legacy"), Path::new("/proj/src"), None).unwrap();
/// assert_eq!(normalized, Path::new("/proj/legacy"));
/// # }
/// ```
pub fn normalize_from(path: &Path, base: &Path, home: Option<&Path>) -> Result<PathBuf> {
    let expanded = expand_tilde(path, home)?;
    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        base.join(expanded)
    };

    let resolved = resolve_components(&absolute);
    if !resolved.is_absolute() {
        return Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "Path must be absolute after normalization".to_string(),
        });
    }
    Ok(resolved)
}

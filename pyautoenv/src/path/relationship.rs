//! Path relationship checking.
//!
//! Comparisons are component-wise, so `/proj/app` is never mistaken for a
//! child of `/proj/a`. On operating systems whose default filesystem is case
//! insensitive, components are compared case-folded.

use std::path::{Component, Path, PathBuf};

use crate::path::canonicalize::canonicalize;
use crate::path::normalize::resolve_components;
use crate::platform::Os;

/// Relationship between two paths.
///
/// # Examples
///
/// ```
/// use pyautoenv::path::PathRelationship;
/// use pyautoenv::platform::Os;
/// use std::path::Path;
///
/// let parent = Path::new("/home/user");
/// let child = Path::new("/home/user/project");
///
/// assert_eq!(
///     PathRelationship::between(parent, child, Os::Linux),
///     PathRelationship::Ancestor
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The first path is an ancestor of the second.
    Ancestor,

    /// The first path is a descendant of the second.
    Descendant,

    /// The paths are the same after normalization.
    Same,

    /// Neither path contains the other.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two paths.
    ///
    /// Both paths are resolved lexically (`.`/`..`, trailing separators) and
    /// case-folded when `os` is case insensitive. The filesystem is not
    /// consulted.
    ///
    /// # Examples
    ///
    /// ```
    /// use pyautoenv::path::PathRelationship;
    /// use pyautoenv::platform::Os;
    /// use std::path::Path;
    ///
    /// let rel = PathRelationship::between(Path::new("/a/b"), Path::new("/a"), Os::Linux);
    /// assert_eq!(rel, PathRelationship::Descendant);
    ///
    /// let rel = PathRelationship::between(Path::new("/A"), Path::new("/a"), Os::MacOs);
    /// assert_eq!(rel, PathRelationship::Same);
    ///
    /// let rel = PathRelationship::between(Path::new("/A"), Path::new("/a"), Os::Linux);
    /// assert_eq!(rel, PathRelationship::Unrelated);
    /// ```
    #[must_use]
    pub fn between(path1: &Path, path2: &Path, os: Os) -> Self {
        let p1 = comparison_key(path1, os);
        let p2 = comparison_key(path2, os);

        if p1 == p2 {
            Self::Same
        } else if p2.starts_with(&p1) {
            Self::Ancestor
        } else if p1.starts_with(&p2) {
            Self::Descendant
        } else {
            Self::Unrelated
        }
    }

    /// Check if `path` is `directory` itself or somewhere beneath it.
    ///
    /// # Examples
    ///
    /// ```
    /// use pyautoenv::path::PathRelationship;
    /// use pyautoenv::platform::Os;
    /// use std::path::Path;
    ///
    /// let dir = Path::new("/proj/legacy");
    /// assert!(PathRelationship::is_within(Path::new("/proj/legacy/deep"), dir, Os::Linux));
    /// assert!(PathRelationship::is_within(dir, dir, Os::Linux));
    /// assert!(!PathRelationship::is_within(Path::new("/proj/legacy2"), dir, Os::Linux));
    /// ```
    #[must_use]
    pub fn is_within(path: &Path, directory: &Path, os: Os) -> bool {
        matches!(
            Self::between(path, directory, os),
            Self::Descendant | Self::Same
        )
    }
}

/// Check whether two paths name the same location.
///
/// Lexically equal paths (under the case rules of `os`) are the same. If they
/// differ lexically but both exist, their canonical forms are compared, so a
/// symlinked path and its target count as the same location.
///
/// # Examples
///
/// ```
/// use pyautoenv::path::same_location;
/// use pyautoenv::platform::Os;
/// use std::path::Path;
///
/// assert!(same_location(Path::new("/proj/.venv/"), Path::new("/proj/./.venv"), Os::Linux));
/// assert!(!same_location(Path::new("/a/.venv"), Path::new("/b/.venv"), Os::Linux));
/// ```
#[must_use]
pub fn same_location(path1: &Path, path2: &Path, os: Os) -> bool {
    if PathRelationship::between(path1, path2, os) == PathRelationship::Same {
        return true;
    }
    match (canonicalize(path1), canonicalize(path2)) {
        (Ok(c1), Ok(c2)) => comparison_key(&c1, os) == comparison_key(&c2, os),
        _ => false,
    }
}

/// Produce the key used to compare paths under the rules of `os`.
fn comparison_key(path: &Path, os: Os) -> PathBuf {
    let resolved = resolve_components(path);
    if !os.is_case_insensitive() {
        return resolved;
    }

    resolved
        .components()
        .map(|component| match component {
            Component::Normal(name) => name.to_string_lossy().to_lowercase().into(),
            Component::Prefix(prefix) => prefix.as_os_str().to_string_lossy().to_lowercase().into(),
            other => other.as_os_str().to_os_string(),
        })
        .collect()
}

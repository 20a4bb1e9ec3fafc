//! Ancestor traversal.

use std::iter::FusedIterator;
use std::path::{Path, PathBuf};

/// Iterator over a directory and each of its ancestors, ending at the
/// filesystem root.
///
/// The iterator owns its cursor, so it can be cloned to restart from the
/// current position, and it performs no I/O.
///
/// # Examples
///
/// ```
/// use pyautoenv::path::ancestors;
/// use std::path::PathBuf;
///
/// # #[cfg(unix)]
/// # {
/// let chain: Vec<PathBuf> = ancestors("/proj/src/sub").collect();
/// assert_eq!(
///     chain,
///     vec![
///         PathBuf::from("/proj/src/sub"),
///         PathBuf::from("/proj/src"),
///         PathBuf::from("/proj"),
///         PathBuf::from("/"),
///     ]
/// );
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Ancestors {
    next: Option<PathBuf>,
}

/// Walk from `start` up to the filesystem root, inclusive of both.
pub fn ancestors(start: impl AsRef<Path>) -> Ancestors {
    Ancestors {
        next: Some(start.as_ref().to_path_buf()),
    }
}

impl Iterator for Ancestors {
    type Item = PathBuf;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty() && *parent != current)
            .map(Path::to_path_buf);
        Some(current)
    }
}

impl FusedIterator for Ancestors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(unix)]
    fn test_root_yields_only_itself() {
        let chain: Vec<PathBuf> = ancestors("/").collect();
        assert_eq!(chain, vec![PathBuf::from("/")]);
    }

    #[test]
    #[cfg(windows)]
    fn test_drive_root_yields_only_itself() {
        let chain: Vec<PathBuf> = ancestors(r"C:\").collect();
        assert_eq!(chain, vec![PathBuf::from(r"C:\")]);
    }

    #[test]
    #[cfg(unix)]
    fn test_full_chain() {
        let chain: Vec<PathBuf> = ancestors("/a/b/c").collect();
        assert_eq!(
            chain,
            vec![
                PathBuf::from("/a/b/c"),
                PathBuf::from("/a/b"),
                PathBuf::from("/a"),
                PathBuf::from("/"),
            ]
        );
    }

    #[test]
    #[cfg(unix)]
    fn test_restartable_by_clone() {
        let mut walk = ancestors("/a/b");
        assert_eq!(walk.next(), Some(PathBuf::from("/a/b")));
        let resumed: Vec<PathBuf> = walk.clone().collect();
        let original: Vec<PathBuf> = walk.collect();
        assert_eq!(resumed, original);
    }

    #[test]
    #[cfg(unix)]
    fn test_fused_after_root() {
        let mut walk = ancestors("/");
        assert!(walk.next().is_some());
        assert!(walk.next().is_none());
        assert!(walk.next().is_none());
    }
}

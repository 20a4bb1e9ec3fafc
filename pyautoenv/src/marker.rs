//! Per-directory environment detection.

use std::path::{Path, PathBuf};

use crate::config::SearchConfig;

/// Name of the file that marks a Poetry project root.
pub const POETRY_LOCK: &str = "poetry.lock";

/// What a single directory says about its environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvironmentMarker {
    /// The directory contains a usable venv.
    PlainVenv {
        /// Root of the venv.
        path: PathBuf,
        /// Activation script found inside it.
        activator: PathBuf,
    },

    /// The directory is a Poetry project whose venv lives elsewhere.
    PoetryProject {
        /// Directory holding `poetry.lock`.
        project_root: PathBuf,
    },
}

/// Decide whether `dir` defines an environment.
///
/// Precedence is: ignore rules, then the configured venv names in order,
/// then the Poetry lock file. An ignored directory is rejected without
/// touching the filesystem.
///
/// # Examples
///
/// ```
/// use pyautoenv::config::SearchConfig;
/// use pyautoenv::marker::detect;
/// use std::path::{Path, PathBuf};
///
/// let config = SearchConfig {
///     ignored: vec![PathBuf::from("/proj")],
///     ..SearchConfig::default()
/// };
/// assert!(detect(Path::new("/proj/src"), &config).is_none());
/// ```
#[must_use]
pub fn detect(dir: &Path, config: &SearchConfig) -> Option<EnvironmentMarker> {
    if config.is_ignored(dir) {
        log::debug!("{} is ignored", dir.display());
        return None;
    }

    for name in &config.venv_names {
        let candidate = dir.join(name);
        if let Some(activator) = config.layout.find_activator(&candidate) {
            return Some(EnvironmentMarker::PlainVenv {
                path: candidate,
                activator,
            });
        }
    }

    if dir.join(POETRY_LOCK).is_file() {
        return Some(EnvironmentMarker::PoetryProject {
            project_root: dir.to_path_buf(),
        });
    }

    None
}

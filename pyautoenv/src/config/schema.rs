//! Configuration values.

use std::path::{Path, PathBuf};

use crate::layout::Layout;
use crate::path::PathRelationship;

/// Venv directory name searched for when `PYAUTOENV_VENV_NAME` is not set.
pub const DEFAULT_VENV_NAME: &str = ".venv";

/// Everything read from the environment for one invocation.
///
/// Built once by [`EnvironmentConfig`](super::EnvironmentConfig) and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Resolution is switched off entirely.
    pub disabled: bool,

    /// Candidate venv directory names, in search order. Never empty.
    pub venv_names: Vec<String>,

    /// Directories (with their descendants) that never define an environment.
    pub ignored_dirs: Vec<PathBuf>,

    /// Environment recorded as active by the previous invocation.
    pub active_env: Option<PathBuf>,

    /// The user's home directory, if known.
    pub home: Option<PathBuf>,

    /// Locations that influence where Poetry keeps its environments.
    pub poetry: PoetryLocations,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            disabled: false,
            venv_names: vec![DEFAULT_VENV_NAME.to_string()],
            ignored_dirs: Vec::new(),
            active_env: None,
            home: None,
            poetry: PoetryLocations::default(),
        }
    }
}

/// Environment-provided paths used to find Poetry's virtualenvs directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoetryLocations {
    /// `POETRY_VIRTUALENVS_PATH`.
    pub virtualenvs_path: Option<PathBuf>,

    /// `POETRY_CACHE_DIR`.
    pub cache_dir: Option<PathBuf>,

    /// `XDG_CACHE_HOME`.
    pub xdg_cache_home: Option<PathBuf>,

    /// `LOCALAPPDATA`.
    pub local_app_data: Option<PathBuf>,
}

/// Rules applied to each directory of a walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Candidate venv directory names, in search order.
    pub venv_names: Vec<String>,

    /// Directories (with their descendants) that never define an environment.
    pub ignored: Vec<PathBuf>,

    /// Platform and dialect a venv must be usable with.
    pub layout: Layout,
}

impl SearchConfig {
    /// Build the search rules from settings.
    #[must_use]
    pub fn from_settings(settings: &Settings, layout: Layout) -> Self {
        Self {
            venv_names: settings.venv_names.clone(),
            ignored: settings.ignored_dirs.clone(),
            layout,
        }
    }

    /// Check whether `dir` is an ignored directory or lies beneath one.
    ///
    /// # Examples
    ///
    /// ```
    /// use pyautoenv::config::SearchConfig;
    /// use pyautoenv::layout::Layout;
    /// use pyautoenv::output::Shell;
    /// use pyautoenv::platform::Os;
    /// use std::path::{Path, PathBuf};
    ///
    /// let config = SearchConfig {
    ///     venv_names: vec![".venv".to_string()],
    ///     ignored: vec![PathBuf::from("/proj/legacy")],
    ///     layout: Layout::new(Os::Linux, Shell::Posix),
    /// };
    ///
    /// assert!(config.is_ignored(Path::new("/proj/legacy/deep/nested")));
    /// assert!(!config.is_ignored(Path::new("/proj")));
    /// ```
    #[must_use]
    pub fn is_ignored(&self, dir: &Path) -> bool {
        self.ignored
            .iter()
            .any(|ignored| PathRelationship::is_within(dir, ignored, self.layout.os))
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::from_settings(&Settings::default(), Layout::default())
    }
}

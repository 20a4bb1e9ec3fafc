//! Environment variable handling.
//!
//! pyautoenv has no configuration file; every setting comes from the
//! process environment. Malformed values never fail an invocation: empty
//! list entries are dropped, unusable paths are skipped with a warning, and
//! anything unrecognisable falls back to the default.

use std::env;
use std::path::{Path, PathBuf};

use crate::config::schema::{PoetryLocations, Settings, DEFAULT_VENV_NAME};
use crate::path::canonicalize::canonicalize;
use crate::path::normalize::normalize_from;

/// Disables resolution when set to anything other than empty or `0`.
pub const DISABLE_VAR: &str = "PYAUTOENV_DISABLE";

/// `;`-separated venv directory names, searched in order.
pub const VENV_NAME_VAR: &str = "PYAUTOENV_VENV_NAME";

/// `;`-separated directories that never define an environment.
pub const IGNORE_DIR_VAR: &str = "PYAUTOENV_IGNORE_DIR";

/// Path of the environment activated by the previous invocation.
pub const ACTIVE_ENV_VAR: &str = "PYAUTOENV_ACTIVE_ENV";

/// Separator for list-valued variables.
pub const LIST_SEPARATOR: char = ';';

/// Reads [`Settings`] from environment variables.
///
/// # Examples
///
/// ```
/// use pyautoenv::config::EnvironmentConfig;
/// use std::collections::HashMap;
/// use std::path::Path;
///
/// let vars = HashMap::from([("PYAUTOENV_VENV_NAME", ".venv;venv")]);
/// let settings = EnvironmentConfig::load(
///     |key| vars.get(key).map(|v| (*v).to_string()),
///     Path::new("/"),
/// );
/// assert_eq!(settings.venv_names, vec![".venv", "venv"]);
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Read settings from the real process environment.
    ///
    /// Falls back to the `home` crate when neither `HOME` nor `USERPROFILE`
    /// is set.
    #[must_use]
    pub fn from_env(cwd: &Path) -> Settings {
        let mut settings = Self::load(|key| env::var(key).ok(), cwd);
        if settings.home.is_none() {
            settings.home = home::home_dir();
        }
        settings
    }

    /// Check the disable flag alone.
    ///
    /// Needs neither the working directory nor the home directory, so a
    /// caller can bail out before either is read.
    ///
    /// # Examples
    ///
    /// ```
    /// use pyautoenv::config::EnvironmentConfig;
    ///
    /// assert!(EnvironmentConfig::is_disabled(|_| Some("1".to_string())));
    /// assert!(!EnvironmentConfig::is_disabled(|_| Some("0".to_string())));
    /// assert!(!EnvironmentConfig::is_disabled(|_| None));
    /// ```
    pub fn is_disabled<F>(lookup: F) -> bool
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup(DISABLE_VAR).is_some_and(|v| Self::parse_flag(&v))
    }

    /// Read settings through `lookup`.
    ///
    /// Relative ignore entries are resolved against `cwd`.
    pub fn load<F>(lookup: F, cwd: &Path) -> Settings
    where
        F: Fn(&str) -> Option<String>,
    {
        let home = non_empty(lookup("HOME"))
            .or_else(|| non_empty(lookup("USERPROFILE")))
            .map(PathBuf::from);

        let venv_names = lookup(VENV_NAME_VAR)
            .map(|raw| Self::parse_list(&raw))
            .filter(|names| !names.is_empty())
            .unwrap_or_else(|| vec![DEFAULT_VENV_NAME.to_string()]);

        let ignored_dirs = lookup(IGNORE_DIR_VAR)
            .map(|raw| Self::parse_ignore_dirs(&raw, cwd, home.as_deref()))
            .unwrap_or_default();

        let poetry = PoetryLocations {
            virtualenvs_path: non_empty(lookup("POETRY_VIRTUALENVS_PATH")).map(PathBuf::from),
            cache_dir: non_empty(lookup("POETRY_CACHE_DIR")).map(PathBuf::from),
            xdg_cache_home: non_empty(lookup("XDG_CACHE_HOME")).map(PathBuf::from),
            local_app_data: non_empty(lookup("LOCALAPPDATA")).map(PathBuf::from),
        };

        Settings {
            disabled: Self::is_disabled(&lookup),
            venv_names,
            ignored_dirs,
            active_env: non_empty(lookup(ACTIVE_ENV_VAR)).map(PathBuf::from),
            home,
            poetry,
        }
    }

    /// Interpret an on/off variable: empty and `0` are off, anything else on.
    fn parse_flag(s: &str) -> bool {
        !matches!(s.trim(), "" | "0")
    }

    /// Split a `;`-separated list, dropping empty and whitespace-only entries.
    fn parse_list(s: &str) -> Vec<String> {
        s.split(LIST_SEPARATOR)
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(ToString::to_string)
            .collect()
    }

    /// Normalize the ignore list.
    ///
    /// Each entry contributes its normalized form and, when it exists and
    /// differs, its canonical form, so a symlinked entry matches both the
    /// path the user sees and the resolved working directory.
    fn parse_ignore_dirs(s: &str, cwd: &Path, home: Option<&Path>) -> Vec<PathBuf> {
        let mut dirs = Vec::new();
        for entry in Self::parse_list(s) {
            let normalized = match normalize_from(Path::new(&entry), cwd, home) {
                Ok(path) => path,
                Err(e) => {
                    log::warn!("ignoring {IGNORE_DIR_VAR} entry '{entry}': {e}");
                    continue;
                }
            };
            if let Ok(canonical) = canonicalize(&normalized) {
                if canonical != normalized {
                    dirs.push(canonical);
                }
            }
            dirs.push(normalized);
        }
        dirs
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

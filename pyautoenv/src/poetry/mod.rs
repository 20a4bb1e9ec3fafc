//! Locating the virtualenv Poetry manages for a project.
//!
//! Poetry keeps project environments outside the project, in a shared
//! virtualenvs directory, under a name derived from the project name and
//! path. [`PoetryResolver`] reproduces that lookup from the filesystem alone.
//! Any mismatch with Poetry's layout means "not found", never an error.

pub mod cache;
pub mod naming;
pub mod pyproject;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::config::{PoetryLocations, Settings};
use crate::layout::Layout;
use crate::path::canonicalize::canonicalize;
use crate::resolver::{EnvKind, ResolvedEnvironment};

/// Name of Poetry's in-project environment directory.
pub const IN_PROJECT_VENV: &str = ".venv";

/// Finds the environment of a Poetry project.
///
/// # Examples
///
/// ```no_run
/// use pyautoenv::config::Settings;
/// use pyautoenv::layout::Layout;
/// use pyautoenv::output::Shell;
/// use pyautoenv::poetry::PoetryResolver;
/// use std::path::Path;
///
/// let resolver = PoetryResolver::new(&Settings::default(), Layout::host(Shell::Posix));
/// if let Some(env) = resolver.resolve(Path::new("/home/me/project")) {
///     println!("{}", env.venv_path.display());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct PoetryResolver {
    locations: PoetryLocations,
    home: Option<PathBuf>,
    layout: Layout,
}

impl PoetryResolver {
    /// Create a resolver from settings.
    #[must_use]
    pub fn new(settings: &Settings, layout: Layout) -> Self {
        Self {
            locations: settings.poetry.clone(),
            home: settings.home.clone(),
            layout,
        }
    }

    /// The virtualenvs directory this resolver searches.
    #[must_use]
    pub fn virtualenvs_dir(&self) -> Option<PathBuf> {
        cache::virtualenvs_dir(&self.locations, self.home.as_deref(), self.layout.os)
    }

    /// Resolve the environment for the project rooted at `project_root`.
    ///
    /// An in-project `.venv` wins. Otherwise the virtualenvs directory is
    /// scanned for `<prefix>-py*` environments and the most recently
    /// modified usable one is returned.
    #[must_use]
    pub fn resolve(&self, project_root: &Path) -> Option<ResolvedEnvironment> {
        let in_project = project_root.join(IN_PROJECT_VENV);
        if let Some(activator) = self.layout.find_activator(&in_project) {
            return Some(ResolvedEnvironment::new(in_project, EnvKind::Poetry, activator));
        }

        let Some(venvs_dir) = self.virtualenvs_dir() else {
            log::debug!("no Poetry virtualenvs directory for this platform");
            return None;
        };

        let name = match pyproject::read_project_name(project_root) {
            Ok(Some(name)) => name,
            Ok(None) => {
                log::debug!("{} has no project name", project_root.display());
                return None;
            }
            Err(e) => {
                log::debug!("cannot read Poetry project name: {e}");
                return None;
            }
        };

        // Poetry hashes the symlink-resolved project path.
        let hashed_root = canonicalize(project_root).unwrap_or_else(|_| project_root.to_path_buf());
        let prefixes = self.prefixes(&name, &hashed_root);
        log::debug!(
            "searching {} for {}",
            venvs_dir.display(),
            prefixes.join(" or ")
        );

        self.newest_match(&venvs_dir, &prefixes)
    }

    /// Environment name prefixes to look for, raw name first.
    fn prefixes(&self, name: &str, project_root: &Path) -> Vec<String> {
        let mut prefixes = vec![naming::env_prefix(name, project_root, self.layout.os)];
        let canonical =
            naming::env_prefix(&naming::canonicalize_name(name), project_root, self.layout.os);
        if !prefixes.contains(&canonical) {
            prefixes.push(canonical);
        }
        prefixes
    }

    fn newest_match(&self, venvs_dir: &Path, prefixes: &[String]) -> Option<ResolvedEnvironment> {
        let entries = match fs::read_dir(venvs_dir) {
            Ok(entries) => entries,
            Err(e) => {
                log::debug!("cannot list {}: {e}", venvs_dir.display());
                return None;
            }
        };

        let patterns: Vec<String> = prefixes.iter().map(|p| format!("{p}-py")).collect();
        let mut best: Option<(SystemTime, ResolvedEnvironment)> = None;

        for entry in entries.flatten() {
            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                continue;
            };
            if !patterns.iter().any(|p| file_name.starts_with(p.as_str())) {
                continue;
            }

            let venv_path = entry.path();
            let Some(activator) = self.layout.find_activator(&venv_path) else {
                continue;
            };
            let modified = entry
                .metadata()
                .and_then(|m| m.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH);

            if best.as_ref().map_or(true, |(newest, _)| modified > *newest) {
                best = Some((
                    modified,
                    ResolvedEnvironment::new(venv_path, EnvKind::Poetry, activator),
                ));
            }
        }

        best.map(|(_, env)| env)
    }
}

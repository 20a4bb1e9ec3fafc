//! Finding the environment that applies to a directory.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::SearchConfig;
use crate::marker::{detect, EnvironmentMarker};
use crate::path::ancestors;
use crate::poetry::PoetryResolver;

/// How an environment was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvKind {
    /// A venv directory inside a walked directory.
    Venv,
    /// The environment of a Poetry project.
    Poetry,
}

impl fmt::Display for EnvKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Venv => write!(f, "venv"),
            Self::Poetry => write!(f, "poetry"),
        }
    }
}

/// A usable environment.
///
/// `activator` existed inside `venv_path` when the environment was
/// resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEnvironment {
    /// Root of the environment.
    pub venv_path: PathBuf,
    /// How it was found.
    pub kind: EnvKind,
    /// Activation script for the requested layout.
    pub activator: PathBuf,
}

impl ResolvedEnvironment {
    /// Create a resolved environment.
    #[must_use]
    pub fn new(venv_path: PathBuf, kind: EnvKind, activator: PathBuf) -> Self {
        Self {
            venv_path,
            kind,
            activator,
        }
    }
}

/// Resolves the environment for a starting directory.
///
/// Walks from the start directory toward the root. The first plain venv
/// wins; a Poetry project whose environment cannot be found does not stop
/// the walk.
///
/// # Examples
///
/// ```no_run
/// use pyautoenv::config::{SearchConfig, Settings};
/// use pyautoenv::layout::Layout;
/// use pyautoenv::output::Shell;
/// use pyautoenv::resolver::EnvironmentResolver;
/// use std::path::Path;
///
/// let settings = Settings::default();
/// let layout = Layout::host(Shell::Posix);
/// let resolver = EnvironmentResolver::new(
///     SearchConfig::from_settings(&settings, layout),
///     pyautoenv::poetry::PoetryResolver::new(&settings, layout),
/// );
/// let env = resolver.resolve(Path::new("/proj/src/sub"));
/// ```
#[derive(Debug, Clone)]
pub struct EnvironmentResolver {
    config: SearchConfig,
    poetry: PoetryResolver,
}

impl EnvironmentResolver {
    /// Create a resolver.
    #[must_use]
    pub fn new(config: SearchConfig, poetry: PoetryResolver) -> Self {
        Self { config, poetry }
    }

    /// Resolve the environment for `start`, or `None` when no directory
    /// from `start` to the root defines one.
    ///
    /// Reaching an ignored directory ends the walk: nothing inside an
    /// ignored tree resolves, even when an ancestor of it defines an
    /// environment.
    #[must_use]
    pub fn resolve(&self, start: &Path) -> Option<ResolvedEnvironment> {
        for dir in ancestors(start) {
            if self.config.is_ignored(&dir) {
                log::debug!("{} is ignored, stopping", dir.display());
                return None;
            }
            match detect(&dir, &self.config) {
                Some(EnvironmentMarker::PlainVenv { path, activator }) => {
                    log::debug!("found venv {}", path.display());
                    return Some(ResolvedEnvironment::new(path, EnvKind::Venv, activator));
                }
                Some(EnvironmentMarker::PoetryProject { project_root }) => {
                    if let Some(env) = self.poetry.resolve(&project_root) {
                        log::debug!("found Poetry env {}", env.venv_path.display());
                        return Some(env);
                    }
                    log::debug!(
                        "no environment for Poetry project {}, continuing",
                        project_root.display()
                    );
                }
                None => {}
            }
        }
        None
    }
}

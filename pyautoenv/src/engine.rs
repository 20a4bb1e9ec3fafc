//! One invocation, from working directory to shell text.

use std::path::Path;

use crate::activation::{decide, Action, ActivationState};
use crate::config::{SearchConfig, Settings};
use crate::layout::Layout;
use crate::output::ShellEmitter;
use crate::path::Directory;
use crate::poetry::PoetryResolver;
use crate::resolver::EnvironmentResolver;
use crate::Result;

/// Runs the resolve, decide and render pipeline for one shell dialect.
///
/// # Examples
///
/// ```no_run
/// use pyautoenv::config::EnvironmentConfig;
/// use pyautoenv::engine::Engine;
/// use pyautoenv::layout::Layout;
/// use pyautoenv::output::Shell;
///
/// let cwd = std::env::current_dir().unwrap();
/// let engine = Engine::new(EnvironmentConfig::from_env(&cwd), Layout::host(Shell::Posix));
/// print!("{}", engine.run(None, &cwd).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    settings: Settings,
    layout: Layout,
    resolver: EnvironmentResolver,
}

impl Engine {
    /// Create an engine.
    #[must_use]
    pub fn new(settings: Settings, layout: Layout) -> Self {
        let resolver = EnvironmentResolver::new(
            SearchConfig::from_settings(&settings, layout),
            PoetryResolver::new(&settings, layout),
        );
        Self {
            settings,
            layout,
            resolver,
        }
    }

    /// Decide the action for an already resolved start directory.
    #[must_use]
    pub fn plan(&self, start: &Directory) -> Action {
        let resolved = self.resolver.resolve(start.as_path());
        let state = ActivationState::from_marker(self.settings.active_env.clone());
        let action = decide(resolved, &state, self.layout.os);
        log::debug!("{} -> {action:?}", start.as_path().display());
        action
    }

    /// Produce the text the shell should evaluate.
    ///
    /// `explicit` is the directory named on the command line, if any;
    /// otherwise `cwd` is used. Returns an empty string when resolution is
    /// disabled or nothing needs to change.
    ///
    /// # Errors
    ///
    /// Returns an error if the start directory does not exist, or if the
    /// commands cannot be rendered safely.
    pub fn run(&self, explicit: Option<&Path>, cwd: &Path) -> Result<String> {
        if self.settings.disabled {
            log::debug!("disabled, emitting nothing");
            return Ok(String::new());
        }

        let start = Directory::resolve(explicit, cwd, self.settings.home.as_deref())?;
        let action = self.plan(&start);
        ShellEmitter::new(self.layout.shell).render(&action)
    }
}

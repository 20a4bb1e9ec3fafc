//! Where a virtual environment keeps its activation scripts.

use std::path::{Path, PathBuf};

use crate::output::Shell;
use crate::platform::Os;

/// The platform and dialect an environment is activated for.
///
/// A directory only counts as an environment when it carries the
/// activation script this layout asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Layout {
    /// Operating system the venv was created on.
    pub os: Os,
    /// Shell dialect that will source the script.
    pub shell: Shell,
}

impl Layout {
    /// Create a layout.
    #[must_use]
    pub const fn new(os: Os, shell: Shell) -> Self {
        Self { os, shell }
    }

    /// Layout for the current host and `shell`.
    #[must_use]
    pub const fn host(shell: Shell) -> Self {
        Self::new(Os::current(), shell)
    }

    /// Candidate activation scripts relative to a venv root, in
    /// preference order.
    ///
    /// # Examples
    ///
    /// ```
    /// use pyautoenv::layout::Layout;
    /// use pyautoenv::output::Shell;
    /// use pyautoenv::platform::Os;
    /// use std::path::PathBuf;
    ///
    /// let layout = Layout::new(Os::Linux, Shell::Fish);
    /// assert_eq!(layout.candidates(), vec![PathBuf::from("bin/activate.fish")]);
    /// ```
    #[must_use]
    pub fn candidates(&self) -> Vec<PathBuf> {
        let dir = Path::new(self.os.scripts_dir());
        self.shell
            .activation_scripts()
            .iter()
            .map(|script| dir.join(script))
            .collect()
    }

    /// Find the activation script inside `venv_dir`.
    ///
    /// Returns the first candidate that exists as a regular file (after
    /// following symlinks), or `None` when `venv_dir` is not a usable
    /// environment for this layout.
    #[must_use]
    pub fn find_activator(&self, venv_dir: &Path) -> Option<PathBuf> {
        self.candidates()
            .into_iter()
            .map(|relative| venv_dir.join(relative))
            .find(|script| script.is_file())
    }

    /// Check whether `venv_dir` is a usable environment for this layout.
    #[must_use]
    pub fn is_environment(&self, venv_dir: &Path) -> bool {
        self.find_activator(venv_dir).is_some()
    }
}

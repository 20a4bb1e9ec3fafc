//! Rendering actions as shell commands.

use std::path::Path;

use crate::activation::Action;
use crate::config::ACTIVE_ENV_VAR;
use crate::resolver::ResolvedEnvironment;
use crate::{Error, Result};

use super::Shell;

/// Turns an [`Action`] into commands for one shell dialect.
///
/// # Examples
///
/// ```
/// use pyautoenv::activation::Action;
/// use pyautoenv::output::{Shell, ShellEmitter};
///
/// let emitter = ShellEmitter::new(Shell::Posix);
/// assert_eq!(
///     emitter.lines(&Action::Deactivate).unwrap(),
///     vec![
///         "if command -v deactivate >/dev/null 2>&1; then deactivate; fi".to_string(),
///         "unset PYAUTOENV_ACTIVE_ENV".to_string(),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ShellEmitter {
    shell: Shell,
}

impl ShellEmitter {
    /// Create an emitter for `shell`.
    #[must_use]
    pub const fn new(shell: Shell) -> Self {
        Self { shell }
    }

    /// Command lines for `action`, in execution order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonUtf8Path`] if a path cannot be written as text
    /// without loss. No partial output is produced in that case.
    pub fn lines(&self, action: &Action) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        match action {
            Action::NoOp => {}
            Action::Activate(env) => self.push_activate(&mut lines, env)?,
            Action::Deactivate => self.push_deactivate(&mut lines),
            Action::Switch { to, .. } => {
                self.push_deactivate(&mut lines);
                self.push_activate(&mut lines, to)?;
            }
        }
        Ok(lines)
    }

    /// Text to print for `action`: one command per line, with a trailing
    /// newline unless there are no commands.
    ///
    /// # Errors
    ///
    /// Same as [`ShellEmitter::lines`].
    pub fn render(&self, action: &Action) -> Result<String> {
        let lines = self.lines(action)?;
        if lines.is_empty() {
            return Ok(String::new());
        }
        let mut text = lines.join("\n");
        text.push('\n');
        Ok(text)
    }

    fn push_activate(&self, lines: &mut Vec<String>, env: &ResolvedEnvironment) -> Result<()> {
        let script = utf8(&env.activator)?;
        let venv = utf8(&env.venv_path)?;
        lines.push(self.shell.format_activate(script, ACTIVE_ENV_VAR, venv));
        Ok(())
    }

    fn push_deactivate(&self, lines: &mut Vec<String>) {
        lines.push(self.shell.guarded_deactivate().to_string());
        lines.push(self.shell.format_unset(ACTIVE_ENV_VAR));
    }
}

/// Command lines for `action` in `shell`.
///
/// # Errors
///
/// Returns [`Error::NonUtf8Path`] if a path is not valid UTF-8.
pub fn emit(action: &Action, shell: Shell) -> Result<Vec<String>> {
    ShellEmitter::new(shell).lines(action)
}

fn utf8(path: &Path) -> Result<&str> {
    path.to_str().ok_or_else(|| Error::NonUtf8Path {
        path: path.to_path_buf(),
    })
}

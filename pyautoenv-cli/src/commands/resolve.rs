//! Resolve a directory's environment and print the shell commands.

use std::env;
use std::path::PathBuf;

use pyautoenv::{Engine, EnvironmentConfig, Layout, Shell};

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::{working_directory, write_stdout};

/// The one thing `pyautoenv` does.
#[derive(Debug, Clone)]
pub struct ResolveCommand {
    /// Directory named on the command line.
    pub directory: Option<PathBuf>,

    /// Dialect to print.
    pub shell: Shell,
}

impl From<&Cli> for ResolveCommand {
    fn from(cli: &Cli) -> Self {
        Self {
            directory: cli.directory.clone(),
            shell: cli.shell(),
        }
    }
}

impl ResolveCommand {
    /// Run the command.
    ///
    /// Output is rendered completely before anything is written, so a
    /// failure leaves stdout empty. When resolution is disabled nothing is
    /// read, not even the working directory.
    pub fn execute(self) -> Result<(), CliError> {
        if EnvironmentConfig::is_disabled(|key| env::var(key).ok()) {
            log::debug!("disabled, emitting nothing");
            return Ok(());
        }

        let cwd = working_directory()?;
        let settings = EnvironmentConfig::from_env(&cwd);
        let engine = Engine::new(settings, Layout::host(self.shell));

        let text = engine.run(self.directory.as_deref(), &cwd)?;
        write_stdout(&text)
    }
}

//! CLI structure and argument parsing.
//!
//! `pyautoenv` has no subcommands: it resolves one directory and prints the
//! commands for one shell dialect.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use pyautoenv::Shell;

/// Print shell commands that activate the Python environment for a directory.
#[derive(Parser, Debug)]
#[command(name = "pyautoenv")]
#[command(
    version,
    about = "Activate the Python environment for a directory",
    long_about = "Print shell commands that activate, deactivate or switch the Python \
                  virtual environment for a directory. Meant to be evaluated by a shell \
                  hook on every directory change."
)]
pub struct Cli {
    /// Directory to resolve the environment for [default: the working directory]
    #[arg(value_name = "DIRECTORY")]
    pub directory: Option<PathBuf>,

    /// Emit fish commands
    #[arg(long, conflicts_with = "pwsh")]
    pub fish: bool,

    /// Emit `PowerShell` commands
    #[arg(long)]
    pub pwsh: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long)]
    pub quiet: bool,
}

impl Cli {
    /// Parse arguments, dropping empty and whitespace-only entries first.
    ///
    /// Shell hooks commonly pass `"$1"` unconditionally, which arrives as an
    /// empty argument when the hook was called without one.
    ///
    /// # Errors
    ///
    /// Returns the clap error for unknown flags, conflicting flags, or
    /// `--help`/`--version` requests.
    pub fn try_parse_filtered<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);
        let program = args.next();
        let filtered = program.into_iter().chain(args.filter(|arg: &OsString| {
            !arg.to_string_lossy().trim().is_empty()
        }));
        Self::try_parse_from(filtered)
    }

    /// The shell dialect requested on the command line.
    #[must_use]
    pub fn shell(&self) -> Shell {
        if self.fish {
            Shell::Fish
        } else if self.pwsh {
            Shell::PowerShell
        } else {
            Shell::Posix
        }
    }
}

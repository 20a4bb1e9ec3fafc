//! Utility functions for CLI operations.

use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::error::CliError;

/// The process working directory.
///
/// # Errors
///
/// Returns an error if the working directory has been removed or cannot be
/// read.
pub fn working_directory() -> Result<PathBuf, CliError> {
    Ok(env::current_dir()?)
}

/// Write `text` to stdout in one piece.
///
/// A closed pipe is not an error: the shell stopped listening.
///
/// # Errors
///
/// Returns any other I/O error.
pub fn write_stdout(text: &str) -> Result<(), CliError> {
    if text.is_empty() {
        return Ok(());
    }
    let mut stdout = io::stdout().lock();
    match stdout.write_all(text.as_bytes()).and_then(|()| stdout.flush()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => Ok(other?),
    }
}

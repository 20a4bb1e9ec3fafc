//! Main entry point for the pyautoenv CLI.
//!
//! Prints shell commands that activate the Python environment for the
//! working directory. A shell hook evaluates the output on every directory
//! change.

mod cli;
mod commands;
mod error;
mod utils;

use cli::Cli;
use commands::ResolveCommand;

fn main() {
    let cli = match Cli::try_parse_filtered(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    let level = pyautoenv::init_logger(cli.verbose, cli.quiet);
    log::debug!("log level {level}");

    match ResolveCommand::from(&cli).execute() {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}

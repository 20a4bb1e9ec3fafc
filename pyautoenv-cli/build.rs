//! Build script for pyautoenv-cli.
//!
//! Generates the `pyautoenv.1` man page into `OUT_DIR` with clap_mangen.
//!
//! Note: build scripts cannot depend on the crate being built, so the
//! command structure is restated here.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("pyautoenv")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Activate the Python environment for a directory")
        .long_about(
            "Print shell commands that activate, deactivate or switch the Python virtual \
             environment for a directory. Meant to be evaluated by a shell hook on every \
             directory change.",
        )
        .arg(
            Arg::new("directory")
                .value_name("DIRECTORY")
                .help("Directory to resolve the environment for [default: the working directory]"),
        )
        .arg(
            Arg::new("fish")
                .long("fish")
                .help("Emit fish commands")
                .conflicts_with("pwsh")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("pwsh")
                .long("pwsh")
                .help("Emit PowerShell commands")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .action(ArgAction::SetTrue),
        )
}

fn main() -> io::Result<()> {
    let out_dir = env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .ok_or_else(|| io::Error::other("OUT_DIR is not set"))?;
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("pyautoenv.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    Ok(())
}

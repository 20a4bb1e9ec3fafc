//! Library exports for pyautoenv-cli.
//!
//! This module exports the CLI structure so it can be exercised by tests and
//! benchmarks without spawning the binary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;

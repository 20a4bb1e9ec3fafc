#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pyautoenv
//!
//! Resolve the Python virtual environment that applies to a directory and
//! print the shell commands that activate, deactivate or switch to it.
//!
//! A shell hook runs `pyautoenv` on every directory change and evaluates its
//! output. The library walks from the directory toward the root looking for a
//! venv directory or a Poetry project, compares the result with the
//! environment recorded in `PYAUTOENV_ACTIVE_ENV`, and renders the resulting
//! [`Action`] for the target [`Shell`].
//!
//! ## Core Types
//!
//! - [`Settings`] and [`EnvironmentConfig`]: configuration from the environment
//! - [`EnvironmentResolver`] and [`ResolvedEnvironment`]: finding an environment
//! - [`ActivationState`] and [`Action`]: deciding what the shell must do
//! - [`ShellEmitter`] and [`Shell`]: rendering commands
//! - [`Engine`]: all of the above for one invocation
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pyautoenv::{emit, Action, Shell};
//!
//! let lines = emit(&Action::Deactivate, Shell::Fish).unwrap();
//! assert_eq!(lines[0], "functions -q deactivate; and deactivate");
//! assert_eq!(lines[1], "set -e -g PYAUTOENV_ACTIVE_ENV");
//! ```

pub mod activation;
pub mod config;
pub mod engine;
pub mod error;
pub mod layout;
pub mod logging;
pub mod marker;
pub mod output;
pub mod path;
pub mod platform;
pub mod poetry;
pub mod resolver;

// Re-export key types at crate root for convenience
pub use activation::{decide, Action, ActivationState};
pub use config::{EnvironmentConfig, SearchConfig, Settings};
pub use engine::Engine;
pub use error::{Error, Result};
pub use layout::Layout;
pub use logging::{init_logger, LogLevel, Logger};
pub use marker::{detect, EnvironmentMarker};
pub use output::{emit, Shell, ShellEmitter};
pub use path::{ancestors, Directory, PathRelationship};
pub use platform::Os;
pub use poetry::PoetryResolver;
pub use resolver::{EnvKind, EnvironmentResolver, ResolvedEnvironment};

//! Shell output.
//!
//! Everything written to stdout is meant to be evaluated by the calling
//! shell, so output is produced only through [`ShellEmitter`], which quotes
//! every path for the target [`Shell`].

mod emitter;
mod shell;

pub use emitter::{emit, ShellEmitter};
pub use shell::Shell;

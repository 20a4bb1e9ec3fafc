//! CLI command implementations.

pub mod resolve;

pub use resolve::ResolveCommand;

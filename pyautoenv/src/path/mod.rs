//! Path handling for directory walks and environment comparisons.
//!
//! # Normalization
//!
//! Normalization is lexical: `~` expansion, anchoring relative paths and
//! resolving `.`/`..`. It is applied to every path that enters the engine
//! from configuration or the command line.
//!
//! # Canonicalization
//!
//! Canonicalization follows symlinks. It is applied to the implicit working
//! directory, and as a fallback when deciding whether two paths name the
//! same environment.
//!
//! # Relationships
//!
//! Ignore rules and "same environment" checks are decided component-wise,
//! with case folding on case-insensitive platforms:
//!
//! ```
//! use pyautoenv::path::PathRelationship;
//! use pyautoenv::platform::Os;
//! use std::path::Path;
//!
//! let ignored = Path::new("/proj/legacy");
//! let here = Path::new("/proj/legacy/deep/nested");
//!
//! assert!(PathRelationship::is_within(here, ignored, Os::Linux));
//! ```
//!
//! # Walking
//!
//! [`ancestors`] yields a directory and each parent up to the root.

pub mod canonicalize;
pub mod normalize;
pub mod relationship;
mod types;
pub mod walker;

#[cfg(all(test, unix, feature = "property-tests"))]
mod proptests;

pub use relationship::{same_location, PathRelationship};
pub use types::Directory;
pub use walker::{ancestors, Ancestors};

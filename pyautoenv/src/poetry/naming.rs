//! Poetry's virtualenv naming scheme.
//!
//! Poetry stores a project's environments as `<prefix>-py<X.Y>` where the
//! prefix is derived from the project name and a hash of the project path:
//!
//! ```text
//! <sanitized name, max 42 chars>-<first 8 chars of urlsafe_b64(sha256(path))>
//! ```

use std::path::Path;

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine as _;
use sha2::{Digest, Sha256};

use crate::platform::Os;

/// Longest sanitized name Poetry keeps in an environment prefix.
pub const MAX_NAME_LEN: usize = 42;

/// Number of hash characters in an environment prefix.
pub const HASH_LEN: usize = 8;

/// Lowercase `name` and replace the characters Poetry considers unsafe in
/// a directory name.
///
/// # Examples
///
/// ```
/// use pyautoenv::poetry::naming::sanitize_name;
///
/// assert_eq!(sanitize_name("My Project!"), "my_project_");
/// ```
#[must_use]
pub fn sanitize_name(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| match c {
            ' ' | '$' | '`' | '!' | '*' | '@' | '"' | '\\' | '\r' | '\n' | '\t' => '_',
            other => other,
        })
        .take(MAX_NAME_LEN)
        .collect()
}

/// PEP 503 normalized form of a distribution name.
///
/// Runs of `-`, `_` and `.` collapse to a single `-`, and the result is
/// lowercased.
///
/// # Examples
///
/// ```
/// use pyautoenv::poetry::naming::canonicalize_name;
///
/// assert_eq!(canonicalize_name("Foo__Bar.baz"), "foo-bar-baz");
/// ```
#[must_use]
pub fn canonicalize_name(name: &str) -> String {
    let mut canonical = String::with_capacity(name.len());
    let mut in_separator = false;
    for c in name.chars() {
        if matches!(c, '-' | '_' | '.') {
            if !in_separator {
                canonical.push('-');
            }
            in_separator = true;
        } else {
            canonical.extend(c.to_lowercase());
            in_separator = false;
        }
    }
    canonical
}

/// Hash of a project directory as it appears in environment names.
///
/// On Windows the path is case-folded with `/` turned into `\` first.
#[must_use]
pub fn path_hash(project_root: &Path, os: Os) -> String {
    let path = project_root.to_string_lossy();
    let path = match os {
        Os::Windows => path.to_lowercase().replace('/', "\\"),
        Os::Linux | Os::MacOs => path.into_owned(),
    };

    let digest = Sha256::digest(path.as_bytes());
    let mut encoded = URL_SAFE.encode(digest);
    encoded.truncate(HASH_LEN);
    encoded
}

/// Full environment prefix for `name` at `project_root`.
///
/// # Examples
///
/// ```
/// use pyautoenv::platform::Os;
/// use pyautoenv::poetry::naming::env_prefix;
/// use std::path::Path;
///
/// assert_eq!(
///     env_prefix("python_project", Path::new("/python_project"), Os::Linux),
///     "python_project-frtSrewI"
/// );
/// ```
#[must_use]
pub fn env_prefix(name: &str, project_root: &Path, os: Os) -> String {
    format!("{}-{}", sanitize_name(name), path_hash(project_root, os))
}

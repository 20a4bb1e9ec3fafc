//! Location of Poetry's virtualenvs directory.

use std::path::{Path, PathBuf};

use crate::config::PoetryLocations;
use crate::platform::Os;

const VIRTUALENVS: &str = "virtualenvs";

/// Find the directory Poetry keeps its virtualenvs in.
///
/// In order: `POETRY_VIRTUALENVS_PATH` if it is an existing directory,
/// `POETRY_CACHE_DIR/virtualenvs` if `POETRY_CACHE_DIR` is an existing
/// directory, then the platform cache directory. The platform default is
/// returned whether or not it exists.
#[must_use]
pub fn virtualenvs_dir(locations: &PoetryLocations, home: Option<&Path>, os: Os) -> Option<PathBuf> {
    if let Some(path) = locations.virtualenvs_path.as_deref().filter(|p| p.is_dir()) {
        return Some(path.to_path_buf());
    }
    if let Some(cache) = locations.cache_dir.as_deref().filter(|p| p.is_dir()) {
        return Some(cache.join(VIRTUALENVS));
    }
    default_cache_dir(locations, home, os).map(|cache| cache.join(VIRTUALENVS))
}

/// Poetry's cache directory when nothing overrides it.
///
/// # Examples
///
/// ```
/// use pyautoenv::config::PoetryLocations;
/// use pyautoenv::platform::Os;
/// use pyautoenv::poetry::cache::default_cache_dir;
/// use std::path::{Path, PathBuf};
///
/// let cache = default_cache_dir(&PoetryLocations::default(), Some(Path::new("/home/u")), Os::MacOs);
/// assert_eq!(cache, Some(PathBuf::from("/home/u/Library/Caches/pypoetry")));
/// ```
#[must_use]
pub fn default_cache_dir(locations: &PoetryLocations, home: Option<&Path>, os: Os) -> Option<PathBuf> {
    match os {
        Os::Linux => locations
            .xdg_cache_home
            .clone()
            .or_else(|| home.map(|h| h.join(".cache")))
            .map(|cache| cache.join("pypoetry")),
        Os::MacOs => home.map(|h| h.join("Library").join("Caches").join("pypoetry")),
        Os::Windows => locations
            .local_app_data
            .as_ref()
            .map(|local| local.join("pypoetry").join("Cache")),
    }
}

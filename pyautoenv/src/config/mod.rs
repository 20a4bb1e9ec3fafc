//! Configuration for pyautoenv.
//!
//! All configuration comes from environment variables, read once per
//! invocation into an immutable [`Settings`] value:
//!
//! | Variable                  | Meaning                                             |
//! |---------------------------|-----------------------------------------------------|
//! | `PYAUTOENV_DISABLE`       | anything but empty or `0` switches resolution off   |
//! | `PYAUTOENV_VENV_NAME`     | `;`-separated venv directory names (default `.venv`) |
//! | `PYAUTOENV_IGNORE_DIR`    | `;`-separated directories to treat as env-free      |
//! | `PYAUTOENV_ACTIVE_ENV`    | environment activated by the previous invocation    |
//! | `POETRY_VIRTUALENVS_PATH` | explicit Poetry virtualenvs directory               |
//! | `POETRY_CACHE_DIR`        | Poetry cache directory                              |
//!
//! # Examples
//!
//! ```
//! use pyautoenv::config::{EnvironmentConfig, SearchConfig};
//! use pyautoenv::layout::Layout;
//! use pyautoenv::output::Shell;
//! use std::path::Path;
//!
//! let settings = EnvironmentConfig::load(|_| None, Path::new("/"));
//! let search = SearchConfig::from_settings(&settings, Layout::host(Shell::Posix));
//! assert_eq!(search.venv_names, vec![".venv"]);
//! ```

pub mod environment;
pub mod schema;

pub use environment::{
    EnvironmentConfig, ACTIVE_ENV_VAR, DISABLE_VAR, IGNORE_DIR_VAR, VENV_NAME_VAR,
};
pub use schema::{PoetryLocations, SearchConfig, Settings, DEFAULT_VENV_NAME};

//! Host operating system as a value.
//!
//! Several decisions depend on the operating system: where a virtualenv keeps
//! its activation scripts, where Poetry caches environments and whether path
//! comparisons fold case. Carrying the OS as a value instead of branching on
//! `cfg!` at each site lets every layout be exercised on any host.

use std::fmt;

/// Operating systems with distinct virtualenv and cache layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Os {
    /// Linux and other Unix-like systems using XDG conventions.
    Linux,
    /// macOS.
    MacOs,
    /// Windows.
    Windows,
}

impl Os {
    /// The operating system this binary was compiled for.
    ///
    /// Unix systems other than macOS are treated as Linux.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Linux
        }
    }

    /// Name of the directory inside a virtualenv that holds the activation
    /// scripts.
    ///
    /// # Examples
    ///
    /// ```
    /// use pyautoenv::platform::Os;
    ///
    /// assert_eq!(Os::Linux.scripts_dir(), "bin");
    /// assert_eq!(Os::Windows.scripts_dir(), "Scripts");
    /// ```
    #[must_use]
    pub const fn scripts_dir(self) -> &'static str {
        match self {
            Self::Windows => "Scripts",
            Self::Linux | Self::MacOs => "bin",
        }
    }

    /// Whether the default filesystem on this OS compares names without
    /// regard to case.
    #[must_use]
    pub const fn is_case_insensitive(self) -> bool {
        matches!(self, Self::Windows | Self::MacOs)
    }
}

impl Default for Os {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linux => write!(f, "linux"),
            Self::MacOs => write!(f, "macos"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

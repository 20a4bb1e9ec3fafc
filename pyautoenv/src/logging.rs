//! Logging infrastructure for pyautoenv.
//!
//! Standard output belongs to the shell that evaluates it, so every
//! diagnostic goes to stderr through a [`Logger`] installed as the `log`
//! crate's global logger.

use std::env;
use std::fmt;
use std::io::Write;

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable selecting the log level by name.
pub const LOG_MODE_VAR: &str = "PYAUTOENV_LOG_MODE";

/// Environment variable that turns on verbose output when set to anything
/// other than empty or `0`.
pub const DEBUG_VAR: &str = "PYAUTOENV_DEBUG";

/// Logging level for controlling output verbosity.
///
/// Log levels are ordered from least verbose (Quiet) to most verbose (Verbose).
///
/// # Examples
///
/// ```
/// use pyautoenv::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    /// Print nothing.
    Quiet,
    /// Errors and warnings.
    #[default]
    Normal,
    /// Everything, including the resolution trace.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string.
    ///
    /// Recognizes: "quiet", "normal", "verbose" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use pyautoenv::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("quiet").unwrap(), LogLevel::Quiet);
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("invalid").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// The `log` crate filter for this level.
    #[must_use]
    pub const fn filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::Off,
            Self::Normal => LevelFilter::Warn,
            Self::Verbose => LevelFilter::Debug,
        }
    }
}

/// A stderr logger for the `log` facade.
///
/// # Examples
///
/// ```
/// use log::Log;
/// use pyautoenv::{LogLevel, Logger};
///
/// let logger = Logger::new(LogLevel::Normal);
/// let warn = log::Metadata::builder().level(log::Level::Warn).build();
/// let debug = log::Metadata::builder().level(log::Level::Debug).build();
/// assert!(logger.enabled(&warn));
/// assert!(!logger.enabled(&debug));
/// ```
#[derive(Debug)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level.filter()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(
                std::io::stderr().lock(),
                "pyautoenv: {}: {}",
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Decide the log level from CLI flags and environment values.
///
/// The priority order is:
/// 1. CLI flags (verbose/quiet; verbose wins when both are set)
/// 2. `PYAUTOENV_LOG_MODE`
/// 3. `PYAUTOENV_DEBUG`
/// 4. Default (Normal)
///
/// Unrecognized values are skipped.
///
/// # Examples
///
/// ```
/// use pyautoenv::logging::resolve_level;
/// use pyautoenv::LogLevel;
///
/// assert_eq!(resolve_level(false, false, |_| None), LogLevel::Normal);
/// assert_eq!(
///     resolve_level(false, false, |k| (k == "PYAUTOENV_DEBUG").then(|| "1".to_string())),
///     LogLevel::Verbose
/// );
/// ```
pub fn resolve_level<F>(verbose: bool, quiet: bool, lookup: F) -> LogLevel
where
    F: Fn(&str) -> Option<String>,
{
    if verbose {
        return LogLevel::Verbose;
    }
    if quiet {
        return LogLevel::Quiet;
    }

    if let Some(level) = lookup(LOG_MODE_VAR).and_then(|v| LogLevel::parse(&v).ok()) {
        return level;
    }

    if lookup(DEBUG_VAR).is_some_and(|v| !matches!(v.trim(), "" | "0")) {
        return LogLevel::Verbose;
    }

    LogLevel::Normal
}

/// Initializes the global logger from CLI flags and the environment.
///
/// See [`resolve_level`] for the priority order. Installing the logger a
/// second time leaves the first one in place. Returns the selected level.
///
/// # Examples
///
/// ```
/// use pyautoenv::{init_logger, LogLevel};
///
/// assert_eq!(init_logger(true, false), LogLevel::Verbose);
/// ```
pub fn init_logger(verbose: bool, quiet: bool) -> LogLevel {
    let level = resolve_level(verbose, quiet, |key| env::var(key).ok());
    if log::set_boxed_logger(Box::new(Logger::new(level))).is_ok() {
        log::set_max_level(level.filter());
    }
    level
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;

    fn resolve(verbose: bool, quiet: bool, vars: &[(&str, &str)]) -> LogLevel {
        let map: HashMap<&str, &str> = vars.iter().copied().collect();
        resolve_level(verbose, quiet, |key| map.get(key).map(|v| (*v).to_string()))
    }

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Quiet < LogLevel::Normal);
        assert!(LogLevel::Normal < LogLevel::Verbose);
        assert!(LogLevel::Quiet < LogLevel::Verbose);
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(format!("{}", LogLevel::Quiet), "quiet");
        assert_eq!(format!("{}", LogLevel::Normal), "normal");
        assert_eq!(format!("{}", LogLevel::Verbose), "verbose");
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::parse("quiet").unwrap(), LogLevel::Quiet);
        assert_eq!(LogLevel::parse("Normal").unwrap(), LogLevel::Normal);
        assert_eq!(LogLevel::parse(" VERBOSE ").unwrap(), LogLevel::Verbose);

        assert!(LogLevel::parse("debug").is_err());
        assert!(LogLevel::parse("").is_err());
    }

    #[test]
    fn test_log_level_filter() {
        assert_eq!(LogLevel::Quiet.filter(), LevelFilter::Off);
        assert_eq!(LogLevel::Normal.filter(), LevelFilter::Warn);
        assert_eq!(LogLevel::Verbose.filter(), LevelFilter::Debug);
    }

    #[test]
    fn test_logger_enabled_respects_level() {
        let debug = Metadata::builder().level(log::Level::Debug).build();
        let error = Metadata::builder().level(log::Level::Error).build();

        assert!(Logger::new(LogLevel::Verbose).enabled(&debug));
        assert!(Logger::new(LogLevel::Normal).enabled(&error));
        assert!(!Logger::new(LogLevel::Quiet).enabled(&error));
    }

    #[test]
    fn test_logger_default() {
        assert_eq!(Logger::default().level(), LogLevel::Normal);
    }

    #[test]
    fn test_resolve_defaults() {
        assert_eq!(resolve(false, false, &[]), LogLevel::Normal);
    }

    #[test]
    fn test_resolve_flags() {
        assert_eq!(resolve(true, false, &[]), LogLevel::Verbose);
        assert_eq!(resolve(false, true, &[]), LogLevel::Quiet);
        assert_eq!(resolve(true, true, &[]), LogLevel::Verbose);
    }

    #[test]
    fn test_resolve_log_mode() {
        assert_eq!(resolve(false, false, &[(LOG_MODE_VAR, "quiet")]), LogLevel::Quiet);
        assert_eq!(
            resolve(false, false, &[(LOG_MODE_VAR, "invalid")]),
            LogLevel::Normal
        );
    }

    #[test]
    fn test_resolve_debug_var() {
        assert_eq!(resolve(false, false, &[(DEBUG_VAR, "1")]), LogLevel::Verbose);
        assert_eq!(resolve(false, false, &[(DEBUG_VAR, "0")]), LogLevel::Normal);
        assert_eq!(resolve(false, false, &[(DEBUG_VAR, "")]), LogLevel::Normal);
    }

    #[test]
    fn test_log_mode_beats_debug_var() {
        let level = resolve(false, false, &[(LOG_MODE_VAR, "quiet"), (DEBUG_VAR, "1")]);
        assert_eq!(level, LogLevel::Quiet);
    }

    #[test]
    fn test_cli_overrides_env() {
        assert_eq!(
            resolve(false, true, &[(LOG_MODE_VAR, "verbose")]),
            LogLevel::Quiet
        );
    }

    #[test]
    #[serial]
    fn test_init_logger_from_env() {
        let saved = env::var(LOG_MODE_VAR).ok();

        env::set_var(LOG_MODE_VAR, "verbose");
        assert_eq!(init_logger(false, false), LogLevel::Verbose);

        env::set_var(LOG_MODE_VAR, "quiet");
        assert_eq!(init_logger(false, false), LogLevel::Quiet);

        match saved {
            Some(val) => env::set_var(LOG_MODE_VAR, val),
            None => env::remove_var(LOG_MODE_VAR),
        }
    }
}

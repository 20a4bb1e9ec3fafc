//! Shell dialects and their quoting rules.
//!
//! Everything this crate prints is evaluated by the calling shell, so every
//! interpolated value goes through [`Shell::quote`]. Each dialect uses its
//! single-quoted string form, the one with the fewest special characters.

use std::fmt;

/// Supported shell dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Shell {
    /// POSIX-compatible shells (sh, bash, zsh).
    #[default]
    Posix,
    /// Friendly Interactive Shell (fish).
    Fish,
    /// `PowerShell`.
    PowerShell,
}

impl Shell {
    /// Activation script names inside a venv's scripts directory, most
    /// common spelling first.
    ///
    /// `venv` writes `Activate.ps1` while `virtualenv` writes `activate.ps1`;
    /// on case-sensitive filesystems both must be tried.
    #[must_use]
    pub const fn activation_scripts(self) -> &'static [&'static str] {
        match self {
            Self::Posix => &["activate"],
            Self::Fish => &["activate.fish"],
            Self::PowerShell => &["Activate.ps1", "activate.ps1"],
        }
    }

    /// Quote `value` as a single literal word.
    ///
    /// # Examples
    ///
    /// ```
    /// use pyautoenv::output::Shell;
    ///
    /// assert_eq!(Shell::Posix.quote("it's"), r"'it'\''s'");
    /// assert_eq!(Shell::Fish.quote(r"a\b'c"), r"'a\\b\'c'");
    /// assert_eq!(Shell::PowerShell.quote("it's"), "'it''s'");
    /// ```
    #[must_use]
    pub fn quote(self, value: &str) -> String {
        let mut quoted = String::with_capacity(value.len() + 2);
        quoted.push('\'');
        for c in value.chars() {
            match (self, c) {
                (Self::Posix, '\'') => quoted.push_str(r"'\''"),
                (Self::Fish, '\'' | '\\') => {
                    quoted.push('\\');
                    quoted.push(c);
                }
                // PowerShell also closes single-quoted strings on the
                // typographic single quotes.
                (Self::PowerShell, '\'' | '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{201B}') => {
                    quoted.push(c);
                    quoted.push(c);
                }
                _ => quoted.push(c),
            }
        }
        quoted.push('\'');
        quoted
    }

    /// Command that runs a script in the current shell.
    #[must_use]
    pub fn format_source(self, script: &str) -> String {
        match self {
            Self::Posix | Self::PowerShell => format!(". {}", self.quote(script)),
            Self::Fish => format!("source {}", self.quote(script)),
        }
    }

    /// Statement that sets and exports an environment variable.
    ///
    /// `var` must be a plain identifier; only `value` is quoted.
    ///
    /// # Examples
    ///
    /// ```
    /// use pyautoenv::output::Shell;
    ///
    /// assert_eq!(Shell::Posix.format_export("VAR", "/a b"), "export VAR='/a b'");
    /// assert_eq!(Shell::Fish.format_export("VAR", "/a b"), "set -gx VAR '/a b'");
    /// assert_eq!(Shell::PowerShell.format_export("VAR", "/a b"), "$env:VAR = '/a b'");
    /// ```
    #[must_use]
    pub fn format_export(self, var: &str, value: &str) -> String {
        let value = self.quote(value);
        match self {
            Self::Posix => format!("export {var}={value}"),
            Self::Fish => format!("set -gx {var} {value}"),
            Self::PowerShell => format!("$env:{var} = {value}"),
        }
    }

    /// Source `script`, then export `var` only if sourcing succeeded.
    ///
    /// A script that vanished or failed leaves `var` unset, so the next
    /// invocation tries again.
    ///
    /// # Examples
    ///
    /// ```
    /// use pyautoenv::output::Shell;
    ///
    /// assert_eq!(
    ///     Shell::Posix.format_activate("/v/bin/activate", "VAR", "/v"),
    ///     ". '/v/bin/activate' && export VAR='/v'"
    /// );
    /// ```
    #[must_use]
    pub fn format_activate(self, script: &str, var: &str, value: &str) -> String {
        let source = self.format_source(script);
        let export = self.format_export(var, value);
        match self {
            Self::Posix => format!("{source} && {export}"),
            Self::Fish => format!("{source}; and {export}"),
            Self::PowerShell => format!("{source}; if ($?) {{ {export} }}"),
        }
    }

    /// Statement that removes an environment variable, succeeding when it
    /// is already unset.
    #[must_use]
    pub fn format_unset(self, var: &str) -> String {
        match self {
            Self::Posix => format!("unset {var}"),
            Self::Fish => format!("set -e -g {var}"),
            Self::PowerShell => format!("Remove-Item Env:{var} -ErrorAction SilentlyContinue"),
        }
    }

    /// Call `deactivate` only when the shell currently defines it.
    #[must_use]
    pub const fn guarded_deactivate(self) -> &'static str {
        match self {
            Self::Posix => "if command -v deactivate >/dev/null 2>&1; then deactivate; fi",
            Self::Fish => "functions -q deactivate; and deactivate",
            Self::PowerShell => {
                "if (Get-Command deactivate -ErrorAction SilentlyContinue) { deactivate }"
            }
        }
    }
}

impl fmt::Display for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Posix => write!(f, "posix"),
            Self::Fish => write!(f, "fish"),
            Self::PowerShell => write!(f, "powershell"),
        }
    }
}

//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - An isolated environment with a temporary project tree
//! - Command builders that start from a clean set of variables
//! - Venv and Poetry fixtures laid out for the host platform

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Variables that influence pyautoenv and must not leak in from the
/// developer's shell.
const CONTROLLED_VARS: &[&str] = &[
    "PYAUTOENV_DISABLE",
    "PYAUTOENV_VENV_NAME",
    "PYAUTOENV_IGNORE_DIR",
    "PYAUTOENV_ACTIVE_ENV",
    "PYAUTOENV_LOG_MODE",
    "PYAUTOENV_DEBUG",
    "POETRY_VIRTUALENVS_PATH",
    "POETRY_CACHE_DIR",
    "XDG_CACHE_HOME",
    "LOCALAPPDATA",
    "VIRTUAL_ENV",
];

/// Test environment with an isolated project tree and home directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Canonical path of the temporary directory
    pub root: PathBuf,
    /// Fake home directory inside the tree
    pub home: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp dir");
        let root = strip_verbatim(root);
        let home = root.join("home");
        fs::create_dir_all(&home).expect("Failed to create home dir");

        Self {
            temp_dir,
            root,
            home,
        }
    }

    /// A command with the controlled variables cleared, `HOME` pointing
    /// into the tree and the tree root as working directory.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("pyautoenv").expect("Failed to find pyautoenv binary");
        for var in CONTROLLED_VARS {
            cmd.env_remove(var);
        }
        cmd.env("HOME", &self.home)
            .env("USERPROFILE", &self.home)
            .current_dir(&self.root);
        cmd
    }

    /// Absolute path of `rel` inside the tree.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }

    /// Create a subdirectory and return its path.
    pub fn create_dir(&self, rel: &str) -> PathBuf {
        let path = self.path(rel);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Create a venv with activation scripts for every dialect.
    pub fn create_venv(&self, rel: &str) -> PathBuf {
        let path = self.path(rel);
        make_venv(&path);
        path
    }

    /// Create a Poetry project named `name`.
    pub fn create_poetry_project(&self, rel: &str, name: &str) -> PathBuf {
        let path = self.create_dir(rel);
        fs::write(path.join("poetry.lock"), "").expect("Failed to write poetry.lock");
        fs::write(
            path.join("pyproject.toml"),
            format!("[tool.poetry]\nname = \"{name}\"\n"),
        )
        .expect("Failed to write pyproject.toml");
        path
    }
}

/// Scripts directory name for the host platform.
pub fn scripts_dir() -> &'static str {
    if cfg!(windows) {
        "Scripts"
    } else {
        "bin"
    }
}

/// Create a venv at `path` with the host's activation scripts.
pub fn make_venv(path: &Path) {
    let scripts = path.join(scripts_dir());
    fs::create_dir_all(&scripts).expect("Failed to create venv");
    for script in ["activate", "activate.fish", "Activate.ps1"] {
        fs::write(scripts.join(script), "").expect("Failed to write activation script");
    }
}

/// Remove the `\\?\` prefix Windows adds to canonical paths.
fn strip_verbatim(path: PathBuf) -> PathBuf {
    match path.to_str().and_then(|s| s.strip_prefix(r"\\?\")) {
        Some(rest) if !rest.starts_with("UNC") => PathBuf::from(rest),
        _ => path,
    }
}

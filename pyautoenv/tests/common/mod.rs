//! Common test utilities for integration tests.
//!
//! This module provides a fixture for building project trees on disk and
//! helpers for loading settings from an in-memory environment.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use pyautoenv::config::{EnvironmentConfig, Settings};
use pyautoenv::path::canonicalize::canonicalize;
use pyautoenv::poetry::naming::env_prefix;
use pyautoenv::{Engine, Layout, Os, Shell};
use tempfile::TempDir;

/// A project tree in a temporary directory.
///
/// The root is canonicalized so that paths compare equal to the ones the
/// resolver produces.
pub struct ProjectTree {
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)]
impl ProjectTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        let temp = tempfile::tempdir().expect("Failed to create temp dir");
        let root = canonicalize(temp.path()).expect("Failed to canonicalize temp dir");
        Self { _temp: temp, root }
    }

    /// Root of the tree.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of `rel` inside the tree.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }

    /// Creates a directory and returns its path.
    pub fn dir(&self, rel: &str) -> PathBuf {
        let path = self.path(rel);
        fs::create_dir_all(&path).expect("Failed to create directory");
        path
    }

    /// Creates a venv with activation scripts for every dialect, using the
    /// Unix `bin/` layout.
    pub fn venv(&self, rel: &str) -> PathBuf {
        let path = self.path(rel);
        make_venv(&path);
        path
    }

    /// Creates a Poetry project with `poetry.lock` and a `pyproject.toml`
    /// naming it `name`.
    pub fn poetry_project(&self, rel: &str, name: &str) -> PathBuf {
        let path = self.dir(rel);
        fs::write(path.join("poetry.lock"), "# lock\n").expect("Failed to write poetry.lock");
        fs::write(
            path.join("pyproject.toml"),
            format!("[tool.poetry]\nname = \"{name}\"\nversion = \"0.1.0\"\n"),
        )
        .expect("Failed to write pyproject.toml");
        path
    }

    /// Creates the cached Poetry env for `project` inside `venvs_dir`.
    pub fn poetry_env(&self, venvs_dir: &Path, name: &str, project: &Path, py: &str) -> PathBuf {
        let path = venvs_dir.join(format!("{}-py{py}", env_prefix(name, project, Os::Linux)));
        make_venv(&path);
        path
    }
}

/// Creates `bin/activate`, `bin/activate.fish` and `bin/Activate.ps1`.
pub fn make_venv(path: &Path) {
    let bin = path.join("bin");
    fs::create_dir_all(&bin).expect("Failed to create venv");
    for script in ["activate", "activate.fish", "Activate.ps1"] {
        fs::write(bin.join(script), "").expect("Failed to write activation script");
    }
}

/// Loads settings from the given variables, as if they were the whole
/// environment.
#[allow(dead_code)]
pub fn settings(vars: &[(&str, &str)], cwd: &Path) -> Settings {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    EnvironmentConfig::load(|key| map.get(key).cloned(), cwd)
}

/// An engine using the Unix layout for `shell`.
#[allow(dead_code)]
pub fn engine(settings: Settings, shell: Shell) -> Engine {
    Engine::new(settings, Layout::new(Os::Linux, shell))
}

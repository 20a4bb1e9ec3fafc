//! Reading the project name out of `pyproject.toml`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// File holding the project metadata.
pub const PYPROJECT_FILE: &str = "pyproject.toml";

#[derive(Debug, Default, Deserialize)]
struct PyProject {
    #[serde(default)]
    project: Option<NameTable>,
    #[serde(default)]
    tool: Option<ToolTable>,
}

#[derive(Debug, Default, Deserialize)]
struct ToolTable {
    #[serde(default)]
    poetry: Option<NameTable>,
}

#[derive(Debug, Default, Deserialize)]
struct NameTable {
    #[serde(default)]
    name: Option<String>,
}

impl PyProject {
    fn name(self) -> Option<String> {
        self.project
            .and_then(|p| p.name)
            .or_else(|| self.tool.and_then(|t| t.poetry).and_then(|p| p.name))
            .filter(|name| !name.trim().is_empty())
    }
}

/// Parse a project name from `pyproject.toml` text.
///
/// `[project].name` takes precedence over `[tool.poetry].name`.
///
/// # Errors
///
/// Returns [`Error::InvalidPyProject`] when `content` is not valid TOML or
/// a name field has the wrong type.
///
/// # Examples
///
/// ```
/// use pyautoenv::poetry::pyproject::parse_project_name;
/// use std::path::Path;
///
/// let toml = "[tool.poetry]\nname = \"demo\"\n";
/// let name = parse_project_name(toml, Path::new("pyproject.toml")).unwrap();
/// assert_eq!(name.as_deref(), Some("demo"));
/// ```
pub fn parse_project_name(content: &str, path: &Path) -> Result<Option<String>> {
    let parsed: PyProject = toml::from_str(content).map_err(|e| Error::InvalidPyProject {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(parsed.name())
}

/// Read the project name of the project rooted at `project_root`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn read_project_name(project_root: &Path) -> Result<Option<String>> {
    let path = project_root.join(PYPROJECT_FILE);
    let content = fs::read_to_string(&path).map_err(|e| Error::from_io(&path, e))?;
    parse_project_name(&content, &path)
}

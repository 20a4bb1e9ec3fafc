//! Integration tests for Poetry project resolution.
//!
//! Poetry keeps environments in a shared cache directory. These tests lay
//! out that directory the way Poetry does and check the resolver finds the
//! right environment from every supported location setting.

mod common;

use std::fs;

use common::{engine, make_venv, settings, ProjectTree};
use pyautoenv::activation::Action;
use pyautoenv::path::Directory;
use pyautoenv::poetry::naming::env_prefix;
use pyautoenv::{EnvKind, Os, Shell};

fn plan(tree: &ProjectTree, vars: &[(&str, &str)], start: &str) -> Action {
    let start = Directory::resolve(Some(&tree.path(start)), tree.root(), None).unwrap();
    engine(settings(vars, tree.root()), Shell::Posix).plan(&start)
}

#[test]
fn test_env_in_virtualenvs_path() {
    let tree = ProjectTree::new();
    let project = tree.poetry_project("proj", "python_project");
    tree.dir("proj/src");
    let venvs = tree.dir("venvs");
    let env = tree.poetry_env(&venvs, "python_project", &project, "3.11");

    let action = plan(
        &tree,
        &[("POETRY_VIRTUALENVS_PATH", venvs.to_str().unwrap())],
        "proj/src",
    );
    match action {
        Action::Activate(resolved) => {
            assert_eq!(resolved.venv_path, env);
            assert_eq!(resolved.kind, EnvKind::Poetry);
            assert_eq!(resolved.activator, env.join("bin").join("activate"));
        }
        other => panic!("expected activation, got {other:?}"),
    }
}

#[test]
fn test_env_in_poetry_cache_dir() {
    let tree = ProjectTree::new();
    let project = tree.poetry_project("proj", "demo");
    let cache = tree.dir("cache");
    let env = tree.poetry_env(&cache.join("virtualenvs"), "demo", &project, "3.12");

    let action = plan(&tree, &[("POETRY_CACHE_DIR", cache.to_str().unwrap())], "proj");
    assert_eq!(action, Action::Activate(expected(env)));
}

#[test]
fn test_env_in_xdg_cache_home() {
    let tree = ProjectTree::new();
    let project = tree.poetry_project("proj", "demo");
    let xdg = tree.dir("xdg");
    let env = tree.poetry_env(&xdg.join("pypoetry/virtualenvs"), "demo", &project, "3.12");

    let action = plan(&tree, &[("XDG_CACHE_HOME", xdg.to_str().unwrap())], "proj");
    assert_eq!(action, Action::Activate(expected(env)));
}

#[test]
fn test_env_in_home_cache() {
    let tree = ProjectTree::new();
    let project = tree.poetry_project("proj", "demo");
    let home = tree.dir("home");
    let env = tree.poetry_env(&home.join(".cache/pypoetry/virtualenvs"), "demo", &project, "3.9");

    let action = plan(&tree, &[("HOME", home.to_str().unwrap())], "proj");
    assert_eq!(action, Action::Activate(expected(env)));
}

#[test]
fn test_in_project_venv() {
    let tree = ProjectTree::new();
    tree.poetry_project("proj", "demo");
    let in_project = tree.venv("proj/.venv");

    // `.venv` is not a configured name, so only the Poetry lookup sees it.
    let action = plan(&tree, &[("PYAUTOENV_VENV_NAME", "env")], "proj");
    match action {
        Action::Activate(resolved) => {
            assert_eq!(resolved.venv_path, in_project);
            assert_eq!(resolved.kind, EnvKind::Poetry);
        }
        other => panic!("expected activation, got {other:?}"),
    }
}

#[test]
fn test_name_from_project_table() {
    let tree = ProjectTree::new();
    let project = tree.dir("proj");
    fs::write(project.join("poetry.lock"), "").unwrap();
    fs::write(
        project.join("pyproject.toml"),
        "[project]\nname = \"Fancy.Name\"\n[tool.poetry]\nname = \"other\"\n",
    )
    .unwrap();
    let venvs = tree.dir("venvs");
    let env = venvs.join(format!(
        "{}-py3.13",
        env_prefix("fancy-name", &project, Os::Linux)
    ));
    make_venv(&env);

    let action = plan(
        &tree,
        &[("POETRY_VIRTUALENVS_PATH", venvs.to_str().unwrap())],
        "proj",
    );
    assert_eq!(action, Action::Activate(expected(env)));
}

#[test]
fn test_env_stored_under_ignored_directory_is_used() {
    let tree = ProjectTree::new();
    let project = tree.poetry_project("proj", "demo");
    let ignored = tree.dir("ignored");
    let venvs = tree.dir("ignored/venvs");
    let env = tree.poetry_env(&venvs, "demo", &project, "3.11");

    // Ignore rules apply to the walked directories, not to the env store.
    let action = plan(
        &tree,
        &[
            ("POETRY_VIRTUALENVS_PATH", venvs.to_str().unwrap()),
            ("PYAUTOENV_IGNORE_DIR", ignored.to_str().unwrap()),
        ],
        "proj",
    );
    assert_eq!(action, Action::Activate(expected(env)));
}

#[test]
fn test_ignored_project_is_not_resolved() {
    let tree = ProjectTree::new();
    let project = tree.poetry_project("proj", "demo");
    let venvs = tree.dir("venvs");
    tree.poetry_env(&venvs, "demo", &project, "3.11");

    let action = plan(
        &tree,
        &[
            ("POETRY_VIRTUALENVS_PATH", venvs.to_str().unwrap()),
            ("PYAUTOENV_IGNORE_DIR", project.to_str().unwrap()),
        ],
        "proj",
    );
    assert!(action.is_noop());
}

#[test]
fn test_unresolved_project_continues_to_parent() {
    let tree = ProjectTree::new();
    let outer = tree.venv(".venv");
    tree.poetry_project("proj", "demo");
    let venvs = tree.dir("venvs");

    let action = plan(
        &tree,
        &[("POETRY_VIRTUALENVS_PATH", venvs.to_str().unwrap())],
        "proj",
    );
    match action {
        Action::Activate(resolved) => {
            assert_eq!(resolved.venv_path, outer);
            assert_eq!(resolved.kind, EnvKind::Venv);
        }
        other => panic!("expected activation, got {other:?}"),
    }
}

#[test]
fn test_project_without_name_is_skipped() {
    let tree = ProjectTree::new();
    let project = tree.dir("proj");
    fs::write(project.join("poetry.lock"), "").unwrap();
    fs::write(project.join("pyproject.toml"), "[tool.black]\n").unwrap();
    let venvs = tree.dir("venvs");

    let action = plan(
        &tree,
        &[
            ("POETRY_VIRTUALENVS_PATH", venvs.to_str().unwrap()),
            ("PYAUTOENV_VENV_NAME", ".no-such-venv-name"),
        ],
        "proj",
    );
    assert!(action.is_noop());
}

#[test]
fn test_other_project_env_not_used() {
    let tree = ProjectTree::new();
    tree.poetry_project("proj", "demo");
    let other = tree.poetry_project("other", "demo");
    let venvs = tree.dir("venvs");
    tree.poetry_env(&venvs, "demo", &other, "3.11");

    let action = plan(
        &tree,
        &[
            ("POETRY_VIRTUALENVS_PATH", venvs.to_str().unwrap()),
            ("PYAUTOENV_VENV_NAME", ".no-such-venv-name"),
        ],
        "proj",
    );
    assert!(action.is_noop());
}

fn expected(venv: std::path::PathBuf) -> pyautoenv::ResolvedEnvironment {
    let activator = venv.join("bin").join("activate");
    pyautoenv::ResolvedEnvironment::new(venv, EnvKind::Poetry, activator)
}

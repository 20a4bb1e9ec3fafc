//! Deciding what the shell must do.
//!
//! The environment active in the calling shell is recorded in
//! `PYAUTOENV_ACTIVE_ENV` by the commands this crate emits. Comparing it with
//! the freshly resolved environment gives one of four actions:
//!
//! | resolved | active          | action       |
//! |----------|-----------------|--------------|
//! | none     | none            | `NoOp`       |
//! | none     | `p`             | `Deactivate` |
//! | `e`      | none            | `Activate`   |
//! | `e`      | same as `e`     | `NoOp`       |
//! | `e`      | `p`, different  | `Switch`     |

use std::path::PathBuf;

use crate::path::same_location;
use crate::platform::Os;
use crate::resolver::ResolvedEnvironment;

/// The environment active in the calling shell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActivationState {
    /// Nothing is active.
    #[default]
    Inactive,
    /// The environment rooted at this path is active.
    ActiveAt(PathBuf),
}

impl ActivationState {
    /// Build the state from the recorded marker value.
    ///
    /// # Examples
    ///
    /// ```
    /// use pyautoenv::activation::ActivationState;
    /// use std::path::PathBuf;
    ///
    /// assert_eq!(ActivationState::from_marker(None), ActivationState::Inactive);
    /// assert_eq!(
    ///     ActivationState::from_marker(Some(PathBuf::from("/p/.venv"))),
    ///     ActivationState::ActiveAt(PathBuf::from("/p/.venv"))
    /// );
    /// ```
    #[must_use]
    pub fn from_marker(marker: Option<PathBuf>) -> Self {
        match marker {
            Some(path) if !path.as_os_str().is_empty() => Self::ActiveAt(path),
            _ => Self::Inactive,
        }
    }
}

/// What the shell must do to match the resolved environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Leave the shell as it is.
    NoOp,
    /// Activate an environment; nothing was active.
    Activate(ResolvedEnvironment),
    /// Deactivate the active environment.
    Deactivate,
    /// Deactivate the environment at `from`, then activate `to`.
    Switch {
        /// Environment being left.
        from: PathBuf,
        /// Environment being entered.
        to: ResolvedEnvironment,
    },
}

impl Action {
    /// Whether this action changes the shell.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        matches!(self, Self::NoOp)
    }
}

/// Decide the action for `resolved` given the current `state`.
///
/// `os` selects the path comparison rules used to recognise the active
/// environment.
#[must_use]
pub fn decide(resolved: Option<ResolvedEnvironment>, state: &ActivationState, os: Os) -> Action {
    match (resolved, state) {
        (None, ActivationState::Inactive) => Action::NoOp,
        (None, ActivationState::ActiveAt(_)) => Action::Deactivate,
        (Some(env), ActivationState::Inactive) => Action::Activate(env),
        (Some(env), ActivationState::ActiveAt(active)) => {
            if same_location(active, &env.venv_path, os) {
                Action::NoOp
            } else {
                Action::Switch {
                    from: active.clone(),
                    to: env,
                }
            }
        }
    }
}

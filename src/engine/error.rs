//! Transition failures.

use crate::core::HookError;
use thiserror::Error;

/// Errors returned by [`Machine::transition`](crate::engine::Machine::transition).
///
/// In every case the machine's current state is left as it was before the
/// call.
#[derive(Debug, Error)]
pub enum TransitionError<S, E> {
    /// No transition is registered for the current state and event.
    #[error("there is no state to transition to from state '{state:?}' on event '{event:?}'")]
    NoTransitionDefined { state: S, event: E },

    /// The exit or enter hook failed. The hook's error is carried as is.
    #[error(transparent)]
    Hook(HookError),
}

impl<S, E> TransitionError<S, E> {
    /// Whether the failure is a missing transition rather than a hook.
    pub fn is_no_transition(&self) -> bool {
        matches!(self, Self::NoTransitionDefined { .. })
    }

    /// The hook's error, if a hook caused the failure.
    pub fn hook_error(&self) -> Option<&HookError> {
        match self {
            Self::Hook(err) => Some(err),
            Self::NoTransitionDefined { .. } => None,
        }
    }

    /// Take the hook's error out, if a hook caused the failure.
    pub fn into_hook_error(self) -> Option<HookError> {
        match self {
            Self::Hook(err) => Some(err),
            Self::NoTransitionDefined { .. } => None,
        }
    }
}

//! Lifecycle hooks run while a transition is attempted.
//!
//! A machine holds at most one enter hook and one exit hook. Both receive the
//! current state and the candidate next state; returning an error aborts the
//! transition before it is committed.

use std::fmt;

/// Failure returned by a hook.
///
/// The engine does not interpret it. Callers that need the concrete error
/// can downcast it after the transition fails.
pub type HookError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Callback invoked with `(current, next)` during a transition.
///
/// The candidate next state is passed mutably: changes a hook makes to it
/// are part of the state that gets committed.
///
/// # Example
///
/// ```rust
/// use switchyard::core::Hook;
///
/// let mut hook = Hook::new(|current: &&str, next: &mut &str| {
///     if *current == *next {
///         return Err("already there".into());
///     }
///     Ok(())
/// });
///
/// let mut next = "open";
/// assert!(hook.call(&"close", &mut next).is_ok());
/// assert!(hook.call(&"open", &mut next).is_err());
/// ```
pub struct Hook<S> {
    callback: Box<dyn FnMut(&S, &mut S) -> Result<(), HookError> + Send>,
}

impl<S> Hook<S> {
    /// Wrap a closure as a hook.
    pub fn new<F>(callback: F) -> Self
    where
        F: FnMut(&S, &mut S) -> Result<(), HookError> + Send + 'static,
    {
        Hook {
            callback: Box::new(callback),
        }
    }

    /// Invoke the hook with the current and candidate next state.
    pub fn call(&mut self, current: &S, next: &mut S) -> Result<(), HookError> {
        (self.callback)(current, next)
    }
}

impl<S> fmt::Debug for Hook<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Hook(..)")
    }
}

//! The transition engine.

use crate::core::{Event, Hook, HookError, State, Transition, Transitioned};
use crate::engine::error::TransitionError;
use crate::table::{KeyedTable, ScanTable, TransitionTable};
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

/// Finite-state machine holding one current state, a transition table and
/// optional enter and exit hooks.
///
/// The table strategy is a type parameter. [`Machine::new`] uses a
/// [`ScanTable`], which works for any state type; [`Machine::keyed`] uses a
/// [`KeyedTable`] for hashable states. Both behave the same.
///
/// `Machine` does no locking. A host that shares one across threads or tasks
/// must serialize access itself, for example behind a mutex. Under shared
/// access a successful [`can_transition`](Machine::can_transition) does not
/// guarantee the following [`transition`](Machine::transition) succeeds, so
/// the result of `transition` must always be checked.
///
/// # Example
///
/// ```rust
/// use switchyard::Machine;
///
/// let mut machine = Machine::new("close");
/// machine.set_transition("close", "open-door", "open");
/// machine.set_transition("open", "close-door", "close");
///
/// assert!(machine.can_transition(&"open-door"));
/// assert!(!machine.can_transition(&"close-door"));
///
/// let outcome = machine.transition("open-door").unwrap();
/// assert_eq!(outcome.previous, "close");
/// assert_eq!(outcome.current, "open");
/// assert_eq!(*machine.state(), "open");
///
/// assert!(machine.transition("open-door").is_err());
/// assert_eq!(*machine.state(), "open");
/// ```
pub struct Machine<S, E, T = ScanTable<S, E>> {
    current: S,
    table: T,
    enter_action: Option<Hook<S>>,
    exit_action: Option<Hook<S>>,
    _event: PhantomData<fn(E)>,
}

impl<S: State, E: Event> Machine<S, E> {
    /// Create a machine in `initial` with an empty list-backed table and no
    /// hooks.
    pub fn new(initial: S) -> Self {
        Self::with_table(initial, ScanTable::new())
    }
}

impl<S, E> Machine<S, E, KeyedTable<S, E>>
where
    S: State + Eq + Hash,
    E: Event + Eq + Hash,
{
    /// Create a machine in `initial` with an empty hash-backed table and no
    /// hooks.
    pub fn keyed(initial: S) -> Self {
        Self::with_table(initial, KeyedTable::new())
    }
}

impl<S, E, T> Machine<S, E, T>
where
    S: State,
    E: Event,
    T: TransitionTable<S, E>,
{
    /// Create a machine in `initial` backed by `table`.
    pub fn with_table(initial: S, table: T) -> Self {
        Self {
            current: initial,
            table,
            enter_action: None,
            exit_action: None,
            _event: PhantomData,
        }
    }

    pub(crate) fn with_hooks(mut self, enter: Option<Hook<S>>, exit: Option<Hook<S>>) -> Self {
        self.enter_action = enter;
        self.exit_action = exit;
        self
    }

    /// Register the transition `(from, event) -> to`, overwriting any
    /// transition already registered for `(from, event)`.
    pub fn set_transition(&mut self, from: S, event: E, to: S) {
        tracing::trace!(from = ?from, event = ?event, to = ?to, "registering transition");
        self.table.insert(from, event, to);
    }

    /// Replace the enter hook.
    pub fn set_enter_action<F>(&mut self, hook: F)
    where
        F: FnMut(&S, &mut S) -> Result<(), HookError> + Send + 'static,
    {
        tracing::trace!(replaced = self.enter_action.is_some(), "setting enter action");
        self.enter_action = Some(Hook::new(hook));
    }

    /// Replace the exit hook.
    pub fn set_exit_action<F>(&mut self, hook: F)
    where
        F: FnMut(&S, &mut S) -> Result<(), HookError> + Send + 'static,
    {
        tracing::trace!(replaced = self.exit_action.is_some(), "setting exit action");
        self.exit_action = Some(Hook::new(hook));
    }

    /// Remove the enter hook.
    pub fn clear_enter_action(&mut self) {
        self.enter_action = None;
    }

    /// Remove the exit hook.
    pub fn clear_exit_action(&mut self) {
        self.exit_action = None;
    }

    /// Whether an enter hook is set.
    pub fn has_enter_action(&self) -> bool {
        self.enter_action.is_some()
    }

    /// Whether an exit hook is set.
    pub fn has_exit_action(&self) -> bool {
        self.exit_action.is_some()
    }

    /// Current state (pure)
    pub fn state(&self) -> &S {
        &self.current
    }

    /// Target of `event` from the current state, if one is registered (pure)
    pub fn target(&self, event: &E) -> Option<&S> {
        self.table.lookup(&self.current, event)
    }

    /// Check whether `event` has a transition from the current state (pure).
    ///
    /// The answer is only valid at the time of the call.
    pub fn can_transition(&self, event: &E) -> bool {
        self.target(event).is_some()
    }

    /// Snapshot of the registered transitions.
    pub fn transitions(&self) -> Vec<Transition<S, E>> {
        self.table.transitions()
    }

    /// The underlying transition table.
    pub fn table(&self) -> &T {
        &self.table
    }

    /// Perform the transition for `event`.
    ///
    /// The exit hook runs first, then the enter hook, each with the current
    /// state and the candidate next state. The candidate is committed only
    /// if both succeed; otherwise the current state is left untouched and
    /// the failure is returned. Side effects of an exit hook are not undone
    /// when the enter hook fails.
    pub fn transition(&mut self, event: E) -> Result<Transitioned<S>, TransitionError<S, E>> {
        let Some(target) = self.table.lookup(&self.current, &event) else {
            tracing::debug!(state = ?self.current, event = ?event, "no transition defined");
            return Err(TransitionError::NoTransitionDefined {
                state: self.current.clone(),
                event,
            });
        };

        // Hooks work on a copy so the table entry never sees their changes.
        let mut next = target.clone();

        if let Some(exit) = self.exit_action.as_mut() {
            if let Err(err) = exit.call(&self.current, &mut next) {
                tracing::debug!(from = ?self.current, event = ?event, error = %err, "exit action failed");
                return Err(TransitionError::Hook(err));
            }
        }

        if let Some(enter) = self.enter_action.as_mut() {
            if let Err(err) = enter.call(&self.current, &mut next) {
                tracing::debug!(from = ?self.current, event = ?event, error = %err, "enter action failed");
                return Err(TransitionError::Hook(err));
            }
        }

        let previous = std::mem::replace(&mut self.current, next);
        tracing::debug!(from = ?previous, event = ?event, to = ?self.current, "transition committed");

        Ok(Transitioned {
            previous,
            current: self.current.clone(),
        })
    }
}

impl<S: fmt::Debug, E, T> fmt::Debug for Machine<S, E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("current", &self.current)
            .field("enter_action", &self.enter_action.is_some())
            .field("exit_action", &self.exit_action.is_some())
            .finish_non_exhaustive()
    }
}

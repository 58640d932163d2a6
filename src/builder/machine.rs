//! Builder for constructing machines.

use crate::builder::error::BuildError;
use crate::core::{Event, Hook, HookError, State};
use crate::engine::Machine;
use crate::table::{ScanTable, TransitionTable};

/// Builder for constructing machines with a fluent API.
///
/// Transitions are registered in order, so a later `.transition()` with the
/// same `(from, event)` replaces an earlier one, exactly as
/// [`Machine::set_transition`] would.
///
/// # Example
///
/// ```rust
/// use switchyard::MachineBuilder;
///
/// let mut machine = MachineBuilder::new()
///     .initial("close")
///     .transition("close", "open-door", "open")
///     .transition("open", "close-door", "close")
///     .on_enter(|_, _| Ok(()))
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.transition("open-door").unwrap().current, "open");
/// ```
pub struct MachineBuilder<S, E, T = ScanTable<S, E>> {
    initial: Option<S>,
    table: T,
    enter_action: Option<Hook<S>>,
    exit_action: Option<Hook<S>>,
    _event: std::marker::PhantomData<fn(E)>,
}

impl<S: State, E: Event> MachineBuilder<S, E> {
    /// Create a new builder backed by a list table.
    pub fn new() -> Self {
        Self::with_table(ScanTable::new())
    }
}

impl<S: State, E: Event, T: TransitionTable<S, E>> MachineBuilder<S, E, T> {
    /// Create a new builder backed by `table`.
    pub fn with_table(table: T) -> Self {
        Self {
            initial: None,
            table,
            enter_action: None,
            exit_action: None,
            _event: std::marker::PhantomData,
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Register a transition.
    pub fn transition(mut self, from: S, event: E, to: S) -> Self {
        self.table.insert(from, event, to);
        self
    }

    /// Register several transitions at once.
    pub fn transitions<I>(mut self, transitions: I) -> Self
    where
        I: IntoIterator<Item = (S, E, S)>,
    {
        for (from, event, to) in transitions {
            self.table.insert(from, event, to);
        }
        self
    }

    /// Set the enter hook (optional).
    pub fn on_enter<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&S, &mut S) -> Result<(), HookError> + Send + 'static,
    {
        self.enter_action = Some(Hook::new(hook));
        self
    }

    /// Set the exit hook (optional).
    pub fn on_exit<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&S, &mut S) -> Result<(), HookError> + Send + 'static,
    {
        self.exit_action = Some(Hook::new(hook));
        self
    }

    /// Build the machine.
    /// Returns an error if no initial state was given.
    pub fn build(self) -> Result<Machine<S, E, T>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        Ok(Machine::with_table(initial, self.table).with_hooks(self.enter_action, self.exit_action))
    }
}

impl<S: State, E: Event> Default for MachineBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

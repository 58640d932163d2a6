//! Transition tables.
//!
//! A table maps `(from, event)` to a target state with last-write-wins
//! semantics. Two strategies are provided and behave identically:
//!
//! - [`ScanTable`] keeps a list of [`Transition`] records and finds matches
//!   with `PartialEq`. It works for any state type, including composite
//!   records that cannot be hashed.
//! - [`KeyedTable`] keeps a `HashMap` keyed by `(from, event)` and requires
//!   `Eq + Hash` on both.
//!
//! Lookup cost for `ScanTable` is linear in the number of transitions, which
//! is fine for tables of tens of entries.

mod keyed;
mod scan;

pub use keyed::KeyedTable;
pub use scan::ScanTable;

use crate::core::Transition;

/// Storage and lookup of registered transitions.
pub trait TransitionTable<S, E> {
    /// Register `(from, event) -> to`, replacing any existing entry for the
    /// same key.
    fn insert(&mut self, from: S, event: E, to: S);

    /// Find the target state for `(from, event)`.
    fn lookup(&self, from: &S, event: &E) -> Option<&S>;

    /// Number of distinct `(from, event)` keys.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Owned snapshot of every registered transition.
    fn transitions(&self) -> Vec<Transition<S, E>>;
}

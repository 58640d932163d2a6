use super::TransitionTable;
use crate::core::{Event, State, Transition};
use std::collections::HashMap;
use std::hash::Hash;

/// Hash-backed table for state and event types that are `Eq + Hash`.
///
/// # Example
///
/// ```rust
/// use switchyard::table::{KeyedTable, TransitionTable};
///
/// let mut table = KeyedTable::new();
/// table.insert("close", "open-door", "open");
///
/// assert_eq!(table.lookup(&"close", &"open-door"), Some(&"open"));
/// assert_eq!(table.lookup(&"open", &"open-door"), None);
/// ```
#[derive(Clone, Debug)]
pub struct KeyedTable<S, E> {
    entries: HashMap<(S, E), S>,
}

impl<S, E> KeyedTable<S, E> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<S, E> Default for KeyedTable<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, E> TransitionTable<S, E> for KeyedTable<S, E>
where
    S: State + Eq + Hash,
    E: Event + Eq + Hash,
{
    fn insert(&mut self, from: S, event: E, to: S) {
        self.entries.insert((from, event), to);
    }

    fn lookup(&self, from: &S, event: &E) -> Option<&S> {
        // Keys are owned tuples, so the probe has to be built from clones.
        self.entries.get(&(from.clone(), event.clone()))
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn transitions(&self) -> Vec<Transition<S, E>> {
        self.entries
            .iter()
            .map(|((from, event), to)| Transition::new(from.clone(), event.clone(), to.clone()))
            .collect()
    }
}

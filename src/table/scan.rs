use super::TransitionTable;
use crate::core::{Event, State, Transition};

/// List-backed table matched by linear scan with `PartialEq`.
///
/// # Example
///
/// ```rust
/// use switchyard::table::{ScanTable, TransitionTable};
///
/// let mut table = ScanTable::new();
/// table.insert("close", "open-door", "open");
/// table.insert("close", "open-door", "ajar");
///
/// assert_eq!(table.len(), 1);
/// assert_eq!(table.lookup(&"close", &"open-door"), Some(&"ajar"));
/// ```
#[derive(Clone, Debug)]
pub struct ScanTable<S, E> {
    entries: Vec<Transition<S, E>>,
}

impl<S, E> ScanTable<S, E> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<S, E> Default for ScanTable<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, E: Event> TransitionTable<S, E> for ScanTable<S, E> {
    fn insert(&mut self, from: S, event: E, to: S) {
        match self.entries.iter_mut().find(|t| t.matches(&from, &event)) {
            Some(existing) => {
                existing.from = from;
                existing.to = to;
            }
            None => self.entries.push(Transition::new(from, event, to)),
        }
    }

    fn lookup(&self, from: &S, event: &E) -> Option<&S> {
        self.entries
            .iter()
            .find(|t| t.matches(from, event))
            .map(|t| &t.to)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn transitions(&self) -> Vec<Transition<S, E>> {
        self.entries.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    struct DoorState {
        id: &'static str,
        opened_by: Option<&'static str>,
    }

    fn door(id: &'static str) -> DoorState {
        DoorState {
            id,
            opened_by: None,
        }
    }

    #[test]
    fn new_table_is_empty() {
        let table: ScanTable<&str, &str> = ScanTable::new();
        assert!(table.is_empty());
        assert_eq!(table.lookup(&"close", &"open-door"), None);
    }

    #[test]
    fn insert_then_lookup() {
        let mut table = ScanTable::new();
        table.insert("close", "open-door", "open");
        table.insert("open", "close-door", "close");

        assert_eq!(table.lookup(&"close", &"open-door"), Some(&"open"));
        assert_eq!(table.lookup(&"open", &"close-door"), Some(&"close"));
        assert_eq!(table.lookup(&"open", &"open-door"), None);
    }

    #[test]
    fn insert_overwrites_existing_key_in_place() {
        let mut table = ScanTable::new();
        table.insert("close", "open-door", "open");
        table.insert("open", "close-door", "close");
        table.insert("close", "open-door", "ajar");

        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup(&"close", &"open-door"), Some(&"ajar"));

        let rules = table.transitions();
        assert_eq!(rules[0], Transition::new("close", "open-door", "ajar"));
    }

    #[test]
    fn repeated_insert_is_idempotent() {
        let mut table = ScanTable::new();
        for _ in 0..3 {
            table.insert("close", "open-door", "open");
        }

        assert_eq!(table.len(), 1);
    }

    #[test]
    fn lookup_uses_structural_equality() {
        let mut table = ScanTable::new();
        table.insert(door("close"), "open-door", door("open"));

        assert_eq!(table.lookup(&door("close"), &"open-door"), Some(&door("open")));

        let other = DoorState {
            id: "close",
            opened_by: Some("Peter"),
        };
        assert_eq!(table.lookup(&other, &"open-door"), None);
    }

    #[derive(Clone, Debug)]
    struct Tagged {
        id: &'static str,
        revision: u32,
    }

    // Equality looks at `id` only, so two revisions share one key.
    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.id == other.id
        }
    }

    fn tagged(id: &'static str, revision: u32) -> Tagged {
        Tagged { id, revision }
    }

    #[test]
    fn overwrite_replaces_stored_from_state() {
        let mut table = ScanTable::new();
        table.insert(tagged("close", 1), "open-door", tagged("open", 1));
        table.insert(tagged("close", 2), "open-door", tagged("open", 2));

        let rules = table.transitions();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].from.revision, 2);
        assert_eq!(rules[0].to.revision, 2);
    }
}

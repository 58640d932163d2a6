//! Transition records and transition outcomes.

use serde::{Deserialize, Serialize};

/// A registered rule: when in `from` and `event` occurs, move to `to`.
///
/// # Example
///
/// ```rust
/// use switchyard::core::Transition;
///
/// let rule = Transition::new("close", "open-door", "open");
/// assert!(rule.matches(&"close", &"open-door"));
/// assert!(!rule.matches(&"open", &"open-door"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transition<S, E> {
    /// The state the rule applies to
    pub from: S,
    /// The event that triggers the rule
    pub event: E,
    /// The state the machine moves to
    pub to: S,
}

impl<S: PartialEq, E: PartialEq> Transition<S, E> {
    /// Create a rule for `(from, event) -> to`.
    pub fn new(from: S, event: E, to: S) -> Self {
        Self { from, event, to }
    }

    /// Check whether this rule is keyed on `(from, event)`.
    pub fn matches(&self, from: &S, event: &E) -> bool {
        self.from == *from && self.event == *event
    }
}

/// Outcome of a committed transition.
///
/// Both fields are owned snapshots. Changing `previous` afterwards has no
/// effect on the machine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transitioned<S> {
    /// The state held immediately before the commit
    pub previous: S,
    /// The state committed, including any changes made by hooks
    pub current: S,
}

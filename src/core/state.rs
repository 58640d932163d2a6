//! State and event traits for the transition engine.
//!
//! Both traits are blanket-implemented, so any `Clone + PartialEq + Debug`
//! type can be used as a state or an event: string tags, enums, or composite
//! records compared field by field through a derived `PartialEq`.

use std::fmt::Debug;

/// Trait for state machine states.
///
/// The engine never looks inside a state. It clones states to hand out
/// snapshots and compares them with `PartialEq` during lookup.
///
/// # Required Traits
///
/// - `Clone`: the engine returns independent snapshots of states
/// - `PartialEq`: states are matched structurally against the table
/// - `Debug`: states appear in errors and log fields
///
/// # Example
///
/// ```rust
/// use switchyard::core::State;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct DoorState {
///     id: String,
///     opened_by: Option<String>,
/// }
///
/// fn assert_state<S: State>() {}
/// assert_state::<DoorState>();
/// assert_state::<&'static str>();
/// ```
pub trait State: Clone + PartialEq + Debug {}

impl<T> State for T where T: Clone + PartialEq + Debug {}

/// Trait for events that trigger transitions.
///
/// Events are compared by exact value equality.
pub trait Event: Clone + PartialEq + Debug {}

impl<T> Event for T where T: Clone + PartialEq + Debug {}

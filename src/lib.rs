//! Switchyard: a small generic finite-state machine engine.
//!
//! A [`Machine`] holds one current state, a table of `(state, event) -> state`
//! transitions, and at most one enter hook and one exit hook. Calling
//! [`Machine::transition`] looks up the current state and the event, runs the
//! exit hook and then the enter hook, and commits the new state only if both
//! succeed.
//!
//! # Core Concepts
//!
//! - **State**: any `Clone + PartialEq + Debug` value, matched structurally
//! - **Event**: any `Clone + PartialEq + Debug` label, matched exactly
//! - **Table**: last-write-wins storage, list-backed or hash-backed
//! - **Hooks**: single-slot callbacks that may veto a transition
//!
//! The engine is single-threaded and does no locking. Hosts that share a
//! machine must serialize access to it themselves.
//!
//! # Example
//!
//! ```rust
//! use switchyard::Machine;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct DoorState {
//!     id: String,
//!     opened_by: Option<String>,
//! }
//!
//! fn door(id: &str) -> DoorState {
//!     DoorState { id: id.to_string(), opened_by: None }
//! }
//!
//! let mut machine = Machine::new(door("close"));
//! machine.set_transition(door("close"), "open-door", door("open"));
//! machine.set_transition(door("open"), "close-door", door("close"));
//!
//! machine.set_enter_action(|_, next| {
//!     next.opened_by = Some("Peter".to_string());
//!     Ok(())
//! });
//!
//! let outcome = machine.transition("open-door").unwrap();
//! assert_eq!(outcome.previous, door("close"));
//! assert_eq!(machine.state().opened_by.as_deref(), Some("Peter"));
//! ```

pub mod builder;
pub mod core;
pub mod engine;
pub mod table;

// Re-export commonly used types
pub use builder::{BuildError, MachineBuilder};
pub use crate::core::{Event, Hook, HookError, State, Transition, Transitioned};
pub use engine::{Machine, TransitionError};
pub use table::{KeyedTable, ScanTable, TransitionTable};

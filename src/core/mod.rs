//! Value-level vocabulary of the transition engine.
//!
//! This module contains the types the engine passes around:
//! - State and event traits
//! - Transition records and outcomes
//! - Lifecycle hooks and their error type

mod hook;
mod state;
mod transition;

pub use hook::{Hook, HookError};
pub use state::{Event, State};
pub use transition::{Transition, Transitioned};

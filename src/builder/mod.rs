//! Builder API for ergonomic machine construction.
//!
//! This module provides a fluent builder and a registration macro for
//! setting up a machine with its initial state, transitions and hooks.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::MachineBuilder;

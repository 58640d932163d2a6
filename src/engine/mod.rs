//! The transition engine: a machine owning its current state, its table and
//! its hooks.
//!
//! # Transition protocol
//!
//! 1. Look up `(current, event)`; fail with
//!    [`TransitionError::NoTransitionDefined`] if nothing is registered.
//! 2. Run the exit hook with `(current, next)`.
//! 3. Run the enter hook with `(current, next)`.
//! 4. Commit `next` as the current state.
//!
//! A failure in steps 1 to 3 leaves the current state untouched.

mod error;
mod machine;

pub use error::TransitionError;
pub use machine::Machine;

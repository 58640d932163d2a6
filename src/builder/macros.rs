//! Macros for ergonomic transition registration.

/// Register several transitions on a machine.
///
/// Each line reads `from, event => to`. Lines are applied in order, so a
/// repeated `(from, event)` ends up with the last target.
///
/// # Example
///
/// ```
/// use switchyard::{transitions, Machine};
///
/// let mut machine = Machine::new("close");
/// transitions!(machine, {
///     "close", "open-door" => "open";
///     "open", "close-door" => "close";
/// });
///
/// assert!(machine.can_transition(&"open-door"));
/// ```
#[macro_export]
macro_rules! transitions {
    ($machine:expr, { $($from:expr, $event:expr => $to:expr);* $(;)? }) => {{
        let machine = &mut $machine;
        $(
            machine.set_transition($from, $event, $to);
        )*
    }};
}

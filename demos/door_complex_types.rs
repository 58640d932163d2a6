//! Door State Machine with Composite States
//!
//! States are records; lookup compares every field. The enter hook records
//! who opened the door on the state being entered.
//!
//! Run with: RUST_LOG=debug cargo run --example door_complex_types

use switchyard::MachineBuilder;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Clone, PartialEq, Debug)]
struct DoorState {
    id: String,
    opened_by: String,
}

impl DoorState {
    fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            opened_by: String::new(),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut machine = MachineBuilder::new()
        .initial(DoorState::new("close"))
        .transition(DoorState::new("open"), "close-door", DoorState::new("close"))
        .transition(DoorState::new("close"), "open-door", DoorState::new("open"))
        .on_enter(|last, new| {
            info!("Enter '{}' coming from '{}'", new.id, last.id);
            new.opened_by = "Peter".to_string();
            Ok(())
        })
        .on_exit(|current, next| {
            info!("Leaving '{}' going to '{}'", current.id, next.id);
            Ok(())
        })
        .build()?;

    info!(state = ?machine.state(), "current state");

    let outcome = machine.transition("open-door")?;
    info!(previous = ?outcome.previous, current = ?outcome.current, "transitioned");

    Ok(())
}

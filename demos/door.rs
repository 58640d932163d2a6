//! Door State Machine
//!
//! A door with string states. The hooks log every step through `tracing`.
//!
//! Run with: RUST_LOG=debug cargo run --example door

use switchyard::Machine;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut machine = Machine::new("close");
    machine.set_transition("open", "close-door", "close");
    machine.set_transition("close", "open-door", "open");

    machine.set_enter_action(|last, new| {
        info!("Enter '{new}' coming from '{last}'");
        Ok(())
    });

    machine.set_exit_action(|current, next| {
        info!("Leaving '{current}' going to '{next}'");
        Ok(())
    });

    machine.transition("open-door")?;
    info!(state = machine.state(), "door opened");

    if let Err(err) = machine.transition("open-door") {
        info!(%err, "second open rejected");
    }

    Ok(())
}

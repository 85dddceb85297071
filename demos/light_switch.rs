//! Light Switch
//!
//! This example drives a machine loaded from a JSON document and walks
//! through its history with undo and redo.
//!
//! Key concepts:
//! - Configuration parsed and validated once at construction
//! - Event-driven transitions and direct state changes
//! - Undo/redo over visited states
//!
//! Run with: RUST_LOG=rewind=debug cargo run --example light_switch

use rewind::StateMachine;
use tracing_subscriber::EnvFilter;

const CONFIG: &str = r#"{
    "initial": "off",
    "states": {
        "off": { "transitions": { "turnOn": "on" } },
        "on": { "transitions": { "turnOff": "off", "dim": "dimmed" } },
        "dimmed": { "transitions": { "turnOff": "off", "brighten": "on" } }
    }
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Light Switch State Machine ===\n");

    let mut machine: StateMachine = StateMachine::from_json(CONFIG)?;
    println!("Initial state: {}", machine.state());
    println!("States: {:?}", machine.states());
    println!(
        "States that can be turned off: {:?}\n",
        machine.states_with_event(&"turnOff".to_string())
    );

    for event in ["turnOn", "dim", "turnOff"] {
        let state = machine.trigger(&event.to_string())?;
        println!("{event:>8} -> {state}");
    }

    if let Err(error) = machine.trigger(&"dim".to_string()) {
        println!("\nRejected: {error}");
    }

    println!("\nStepping back:");
    while machine.undo() {
        println!("  undo -> {}", machine.state());
    }

    println!("Stepping forward:");
    while machine.redo() {
        println!("  redo -> {}", machine.state());
    }

    println!("\nPath: {:?}", machine.history().get_path());
    for visit in machine.history().visits() {
        println!("  {} at {}", visit.state, visit.timestamp.format("%H:%M:%S%.3f"));
    }
    println!("Time spent since start: {:?}", machine.history().duration());
    println!("Reset -> {}", machine.reset());
    println!("Can undo after reset: {}", machine.can_undo());

    println!("\n=== Example Complete ===");
    Ok(())
}

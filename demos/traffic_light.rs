//! Traffic Light State Machine
//!
//! This example demonstrates a cyclic machine loaded from a JSON table.
//!
//! Key concepts:
//! - Declarative tables with named guards
//! - Closed-set validation through the machine builder
//! - Cyclic transitions (states repeat)
//!
//! Run with: cargo run --example traffic_light

use fsmcell::config::GuardRegistry;
use fsmcell::{label_enum, Machine, TransitionTable};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

label_enum! {
    enum Light {
        Red,
        Green,
        Yellow,
    }
}

label_enum! {
    enum Signal {
        Tick,
    }
}

const TABLE: &str = r#"{
    "Red":    { "Tick": { "target": "Green", "guard": "road_clear" } },
    "Green":  { "Tick": "Yellow" },
    "Yellow": { "Tick": "Red" }
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Traffic Light State Machine ===\n");

    let road_clear = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&road_clear);
    let guards = GuardRegistry::new().with("road_clear", move || flag.load(Ordering::SeqCst));

    let table: TransitionTable<Light, Signal> = TransitionTable::from_json(TABLE, &guards)?;
    let mut machine = Machine::builder()
        .initial(Light::Red)
        .table(table)
        .states([Light::Red, Light::Green, Light::Yellow])
        .build()?;

    println!("Initial state: {:?}", machine.current_state());

    for step in 0..6 {
        if step == 1 {
            println!("(road cleared)");
            road_clear.store(true, Ordering::SeqCst);
        }
        let moved = machine.send(Signal::Tick);
        println!("tick -> {:<5} {:?}", moved, machine.current_state());
    }

    println!("\n=== Example Complete ===");
    Ok(())
}

//! Fetch Flow
//!
//! This example drives the classic data-fetching machine a UI component
//! keeps: idle, loading, success or error, with a guarded retry.
//!
//! Key concepts:
//! - Literal tables with `transitions!`
//! - Guards that read component context at dispatch time
//! - Observers that re-render only when the state actually changed
//!
//! Run with: cargo run --example fetch_flow

use fsmcell::core::guarded;
use fsmcell::reactive::ObservedMachine;
use fsmcell::{label_enum, transitions, Machine};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

label_enum! {
    enum FetchState {
        Idle,
        Loading,
        Success,
        Error,
    }
}

label_enum! {
    enum FetchEvent {
        Fetch,
        Success,
        Error,
        Retry,
        Refresh,
    }
}

const MAX_RETRIES: usize = 2;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Fetch Flow Example ===\n");

    let retries = Arc::new(AtomicUsize::new(0));
    let attempts = Arc::clone(&retries);

    let table = transitions! {
        FetchState::Idle => { FetchEvent::Fetch => FetchState::Loading },
        FetchState::Loading => {
            FetchEvent::Success => FetchState::Success,
            FetchEvent::Error => FetchState::Error,
        },
        FetchState::Error => {
            FetchEvent::Retry => guarded(FetchState::Loading, move || {
                attempts.fetch_add(1, Ordering::SeqCst) < MAX_RETRIES
            }),
        },
        FetchState::Success => { FetchEvent::Refresh => FetchState::Loading },
    };

    let mut component = ObservedMachine::new(Machine::new(FetchState::Idle, table));
    component.subscribe(|record| {
        println!("  render: {} -> {}", record.from.name(), record.to.name());
    });

    let script = [
        FetchEvent::Success,
        FetchEvent::Fetch,
        FetchEvent::Error,
        FetchEvent::Retry,
        FetchEvent::Error,
        FetchEvent::Retry,
        FetchEvent::Error,
        FetchEvent::Retry,
    ];

    for event in script {
        let accepted = component.send(event);
        println!(
            "send({:<7}) -> {:<5} state = {}",
            event.name(),
            accepted,
            component.current_state().name()
        );
    }

    println!("\nRetries attempted: {}", retries.load(Ordering::SeqCst));
    println!("\n=== Example Complete ===");
}

//! Turnstile State Machine
//!
//! A scripted walkthrough of the table-driven kernel on the textbook
//! turnstile: a coin unlocks it, a push locks it again, and pushing while
//! locked just thuds. The "pushing while locked" row shows a self-loop with
//! an action; the history is printed at the end.
//!
//! Run with: cargo run --example turnstile

use cogwork::{state_enum, transition_table, State, StateMachine, StepResult};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

const COIN: u8 = 1;
const PUSH: u8 = 2;

state_enum! {
    enum Turnstile {
        Locked,
        Unlocked,
    }
}

fn main() {
    println!("=== Turnstile State Machine ===\n");

    let input = Arc::new(AtomicU8::new(0));

    let on = |value: u8| {
        let cell = Arc::clone(&input);
        move || cell.load(Ordering::Relaxed) == value
    };

    let table = transition_table![
        (Turnstile::Locked, on(COIN), || println!("  coin accepted, unlocking"), Turnstile::Unlocked),
        (Turnstile::Locked, on(PUSH), || println!("  thud"), Turnstile::Locked),
        (Turnstile::Unlocked, on(PUSH), || println!("  visitor passes, locking"), Turnstile::Locked),
    ];

    let mut machine = StateMachine::new(&table, Turnstile::Locked).expect("turnstile table has rows");

    let script: &[(&str, u8)] = &[
        ("push", PUSH),
        ("coin", COIN),
        ("push", PUSH),
        ("push", PUSH),
        ("kick", 9),
    ];

    for (label, value) in script {
        println!("input: {label}");
        input.store(*value, Ordering::Relaxed);

        match machine.step().expect("turnstile rows all carry guards") {
            StepResult::Transitioned(state) => println!("  -> {}", state.name()),
            StepResult::Idle => println!("  -> ignored, still {}", machine.current_state().name()),
        }
    }

    println!("\nStates traversed:");
    for state in machine.history().get_path() {
        println!("  {}", state.name());
    }

    println!("\n=== Demo Complete ===");
}

//! Console-Driven State Machine
//!
//! The classic table-driven FSM demo: the machine cycles between three
//! stages, driven by event numbers typed on the console. Guards poll a
//! shared event cell; the kernel never touches the console itself.
//!
//! Key concepts:
//! - Caller-owned event signal (an atomic the guards capture)
//! - Driving loop in caller hands: read input, step, display state
//! - Priority rows (two rows for `Stage::Two`)
//!
//! Run with: cargo run --example console_events

use cogwork::{state_enum, transition_table, State, StateMachine, StepResult};
use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

state_enum! {
    enum Stage {
        Zero,
        One,
        Two,
    }
}

fn main() {
    println!("=== Console-Driven State Machine ===\n");

    let event = Arc::new(AtomicI32::new(-1));

    let is_event = |value: i32| {
        let cell = Arc::clone(&event);
        move || cell.load(Ordering::Relaxed) == value
    };

    let table = transition_table![
        (Stage::Zero, is_event(1), || println!("Event 1 received, executing its action"), Stage::One),
        (Stage::One, is_event(2), || println!("Event 2 received, executing its action"), Stage::Two),
        (Stage::Two, is_event(0), || println!("Event 0 received, executing its action"), Stage::Zero),
        (Stage::Two, is_event(1), || println!("Event 1 received, executing its action"), Stage::One),
    ];

    let mut machine = StateMachine::new(&table, Stage::Zero).expect("demo table has rows");

    println!("Current state: {}", machine.current_state().name());

    let stdin = io::stdin();
    loop {
        print!("\nEnter an event [0, 1 or 2], or q to quit: ");
        io::stdout().flush().expect("flush stdout");

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).expect("read stdin") == 0 {
            break;
        }
        let input = line.trim();
        if input == "q" {
            break;
        }

        match input.parse::<i32>() {
            Ok(value) => event.store(value, Ordering::Relaxed),
            Err(_) => {
                println!("Failed to read an integer.");
                continue;
            }
        }

        match machine.step() {
            Ok(StepResult::Transitioned(_)) => {}
            Ok(StepResult::Idle) => println!("No transition for that event."),
            Err(err) => {
                eprintln!("FSM error: {err}");
                std::process::exit(1);
            }
        }

        println!("Current state: {}", machine.current_state().name());
    }

    println!("\n=== Demo Complete ===");
}

//! Cogwork: a minimal table-driven finite state machine kernel
//!
//! Cogwork models a state machine as a flat, caller-owned transition table of
//! (present state, guard, action, next state) rows. The kernel itself is a
//! single scan-and-dispatch routine: on each [`StateMachine::step`] it walks
//! the table top to bottom, evaluates guards for the current state, and on the
//! first satisfied guard runs the row's action and advances to the row's next
//! state. At most one transition fires per step; "nothing fired" is a normal,
//! successful outcome.
//!
//! The kernel owns no table data and performs no I/O. Guards and actions are
//! zero-argument callables that close over whatever external signal the
//! caller chooses (a polled value, a channel, an atomic flag), so the driving
//! loop stays entirely in caller hands.
//!
//! # Core Concepts
//!
//! - **State**: type-safe state representation via the [`State`] trait
//! - **Guard**: a zero-argument predicate gating a transition
//! - **Action**: an optional zero-argument procedure run when a row fires
//! - **Table**: an ordered row sequence; order among same-state rows is
//!   priority, first matching guard wins
//! - **History**: immutable tracking of fired transitions over time
//!
//! # Example
//!
//! ```rust
//! use cogwork::{state_enum, transition_table, StateMachine, StepResult};
//! use std::sync::atomic::{AtomicU8, Ordering};
//! use std::sync::Arc;
//!
//! state_enum! {
//!     enum Door {
//!         Closed,
//!         Open,
//!     }
//! }
//!
//! let signal = Arc::new(AtomicU8::new(0));
//!
//! let pull = Arc::clone(&signal);
//! let push = Arc::clone(&signal);
//! let table = transition_table![
//!     (Door::Closed, move || pull.load(Ordering::Relaxed) == 1, Door::Open),
//!     (Door::Open, move || push.load(Ordering::Relaxed) == 2, Door::Closed),
//! ];
//!
//! let mut machine = StateMachine::new(&table, Door::Closed).unwrap();
//!
//! // No recognized signal yet: the step succeeds without a transition.
//! assert_eq!(machine.step().unwrap(), StepResult::Idle);
//! assert_eq!(machine.current_state(), &Door::Closed);
//!
//! signal.store(1, Ordering::Relaxed);
//! assert_eq!(machine.step().unwrap(), StepResult::Transitioned(Door::Open));
//! ```

pub mod builder;
pub mod core;
pub mod kernel;

// Re-export commonly used types
pub use builder::{BuildError, RowBuilder, TableBuilder};
pub use core::{Action, Guard, State, StateHistory, StateTransition};
pub use kernel::{StateMachine, StepError, StepResult, TableRow, TransitionTable};

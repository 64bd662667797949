//! The table scanning and dispatch kernel.
//!
//! This module holds the only logic in the crate: given a borrowed transition
//! table and a current state, [`StateMachine::step`] finds the first row whose
//! state matches and whose guard passes, runs its action, and advances the
//! state. Everything the kernel dispatches over (states, guards, actions)
//! lives in [`crate::core`]; table construction ergonomics live in
//! [`crate::builder`].

mod machine;
mod table;

pub use machine::{StateMachine, StepError, StepResult};
pub use table::{TableRow, TransitionTable};

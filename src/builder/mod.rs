//! Builder API for ergonomic table construction.
//!
//! This module provides fluent builders, free helper constructors, and macros
//! for declaring transition tables with minimal boilerplate while keeping the
//! table itself plain data.

pub mod error;
pub mod macros;
pub mod row;
pub mod table;

pub use error::BuildError;
pub use row::RowBuilder;
pub use table::TableBuilder;

use crate::core::{Action, Guard, State};
use crate::kernel::TableRow;

/// Create a guarded row with no action.
///
/// # Example
///
/// ```
/// use cogwork::builder::guarded_row;
/// use cogwork::state_enum;
///
/// state_enum! {
///     enum MyState {
///         Start,
///         End,
///     }
///     final: [End]
/// }
///
/// let row = guarded_row(MyState::Start, || true, MyState::End);
/// assert!(row.action.is_none());
/// ```
pub fn guarded_row<S, F>(from: S, when: F, to: S) -> TableRow<S>
where
    S: State,
    F: Fn() -> bool + Send + Sync + 'static,
{
    RowBuilder::new()
        .from(from)
        .when(when)
        .to(to)
        .build()
        .expect("Guarded row should always build")
}

/// Create a guarded row that runs an action when it fires.
///
/// # Example
///
/// ```
/// use cogwork::builder::action_row;
/// use cogwork::state_enum;
///
/// state_enum! {
///     enum MyState {
///         Start,
///         End,
///     }
///     final: [End]
/// }
///
/// let row = action_row(
///     MyState::Start,
///     || true,
///     || println!("fired"),
///     MyState::End,
/// );
/// assert!(row.action.is_some());
/// ```
pub fn action_row<S, F, A>(from: S, when: F, then: A, to: S) -> TableRow<S>
where
    S: State,
    F: Fn() -> bool + Send + Sync + 'static,
    A: Fn() + Send + Sync + 'static,
{
    TableRow {
        present_state: from,
        guard: Some(Guard::new(when)),
        action: Some(Action::new(then)),
        next_state: to,
    }
}

//! Transition table rows and the table itself.

use crate::core::{Action, Guard, State};

/// One row of a transition table.
///
/// A row applies when the machine's current state equals `present_state`.
/// Its guard then decides whether the row fires. Every row for a reachable
/// state must carry a guard; `guard: None` is representable so tables can be
/// assembled incrementally, but stepping onto such a row is a configuration
/// error, not a silent skip.
///
/// Fields are public: a table row is plain data, and rows are immutable once
/// the table is handed to a machine.
///
/// # Example
///
/// ```rust
/// use cogwork::core::{Guard, State};
/// use cogwork::kernel::TableRow;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Lamp {
///     Off,
///     On,
/// }
///
/// impl State for Lamp {
///     fn name(&self) -> &str {
///         match self {
///             Self::Off => "Off",
///             Self::On => "On",
///         }
///     }
/// }
///
/// let row = TableRow {
///     present_state: Lamp::Off,
///     guard: Some(Guard::new(|| true)),
///     action: None,
///     next_state: Lamp::On,
/// };
///
/// assert!(row.matches(&Lamp::Off));
/// assert!(!row.matches(&Lamp::On));
/// ```
#[derive(Debug)]
pub struct TableRow<S: State> {
    /// State this row applies to.
    pub present_state: S,
    /// Predicate that decides whether the row fires. Required for any row
    /// the machine can reach; absence is reported by the kernel as
    /// [`StepError::MissingGuard`](crate::kernel::StepError::MissingGuard).
    pub guard: Option<Guard>,
    /// Procedure run when the row fires. May be `None` for pure moves.
    pub action: Option<Action>,
    /// State the machine moves to if this row fires.
    pub next_state: S,
}

impl<S: State> TableRow<S> {
    /// Check whether this row applies to the given state.
    pub fn matches(&self, current: &S) -> bool {
        self.present_state == *current
    }
}

/// An ordered sequence of transition rows.
///
/// The table is scanned top to bottom on every step, so order among rows
/// sharing a `present_state` establishes priority: the first row whose guard
/// passes wins. The table is read-only once built and is borrowed, never
/// owned, by the machines stepping over it — several machines may share one
/// table.
#[derive(Debug)]
pub struct TransitionTable<S: State> {
    rows: Vec<TableRow<S>>,
}

impl<S: State> TransitionTable<S> {
    /// Create a table from rows, preserving their order.
    pub fn new(rows: Vec<TableRow<S>>) -> Self {
        Self { rows }
    }

    /// The rows in scan order.
    pub fn rows(&self) -> &[TableRow<S>] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<S: State> From<Vec<TableRow<S>>> for TransitionTable<S> {
    fn from(rows: Vec<TableRow<S>>) -> Self {
        Self::new(rows)
    }
}

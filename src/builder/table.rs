//! Builder for constructing transition tables.

use crate::builder::error::BuildError;
use crate::builder::row::RowBuilder;
use crate::core::State;
use crate::kernel::{TableRow, TransitionTable};

/// Builder collecting rows into a transition table.
///
/// Row order is preserved: it is the scan order, and therefore the priority
/// order among rows sharing a present state.
pub struct TableBuilder<S: State> {
    rows: Vec<TableRow<S>>,
}

impl<S: State> TableBuilder<S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Add a row using a builder.
    /// Returns an error if the row builder fails validation.
    pub fn row(mut self, builder: RowBuilder<S>) -> Result<Self, BuildError> {
        let row = builder.build()?;
        self.rows.push(row);
        Ok(self)
    }

    /// Add a pre-built row.
    pub fn add_row(mut self, row: TableRow<S>) -> Self {
        self.rows.push(row);
        self
    }

    /// Add multiple rows at once.
    pub fn rows(mut self, rows: Vec<TableRow<S>>) -> Self {
        self.rows.extend(rows);
        self
    }

    /// Build the table.
    /// Returns an error if no rows were added.
    pub fn build(self) -> Result<TransitionTable<S>, BuildError> {
        if self.rows.is_empty() {
            return Err(BuildError::EmptyTable);
        }

        Ok(TransitionTable::new(self.rows))
    }
}

impl<S: State> Default for TableBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

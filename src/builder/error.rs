//! Build errors for row and table builders.

use thiserror::Error;

/// Errors that can occur when building rows, tables, and machines.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Row present state not specified. Call .from(state) before .build()")]
    MissingPresentState,

    #[error("Row next state not specified. Call .to(state) before .build()")]
    MissingNextState,

    #[error("Transition table has no rows. Add at least one row")]
    EmptyTable,
}

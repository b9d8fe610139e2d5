//! Errors surfaced by a rejected move.

use serde::{Deserialize, Serialize};

/// Reason a placement was refused.
///
/// Both kinds are recoverable: the board and the turn are left untouched
/// and the caller may simply try another cell.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display, derive_more::Error,
)]
pub enum MoveError {
    /// The target cell already holds a token.
    #[display("Cell at row {row}, column {column} is already occupied")]
    InvalidMove {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },

    /// Row or column lies outside the 3x3 grid.
    #[display("Row {row}, column {column} is outside the board")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },
}

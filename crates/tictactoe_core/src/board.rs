//! The 3x3 grid of cells.

use crate::cell::{Cell, CellValue, Token};
use crate::error::MoveError;
use crate::position::{BOARD_SIZE, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Plain 3x3 view of cell values, indexed `[row][column]`.
pub type Snapshot = [[CellValue; BOARD_SIZE]; BOARD_SIZE];

/// Fixed 3x3 tic-tac-toe board.
///
/// Cells are addressed by `[row][column]`. The only mutation path is
/// [`Board::place_token`], which never overwrites an occupied cell.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    grid: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only access to the full grid.
    pub fn grid(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.grid
    }

    /// Value of the cell at `pos`.
    pub fn get(&self, pos: Position) -> CellValue {
        self.grid[pos.row()][pos.column()].value()
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Places `token` at (row, column).
    ///
    /// Mutates exactly one cell on success and nothing on failure.
    #[instrument(skip(self))]
    pub fn place_token(
        &mut self,
        row: usize,
        column: usize,
        token: Token,
    ) -> Result<Position, MoveError> {
        let Some(pos) = Position::from_row_column(row, column) else {
            warn!(row, column, "Placement outside the board");
            return Err(MoveError::OutOfRange { row, column });
        };

        let cell = &mut self.grid[row][column];
        if !cell.value().is_empty() {
            warn!(%pos, existing = ?cell.value(), "Cell already occupied");
            return Err(MoveError::InvalidMove { row, column });
        }

        cell.set_value(token);
        debug!(%pos, ?token, "Token placed");
        Ok(pos)
    }

    /// Copies every cell value into a plain 3x3 array.
    pub fn snapshot(&self) -> Snapshot {
        self.grid.map(|row| row.map(|cell| cell.value()))
    }

    /// Positions that are still empty, in row-major order.
    #[instrument(skip(self))]
    pub fn open_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Number of cells holding `token`.
    pub fn count(&self, token: Token) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|cell| cell.value().token() == Some(token))
            .count()
    }

    /// True if every cell holds a token.
    pub fn is_full(&self) -> bool {
        self.grid.iter().flatten().all(|cell| !cell.value().is_empty())
    }
}

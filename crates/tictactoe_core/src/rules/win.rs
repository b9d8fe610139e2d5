//! Win detection for the player who just moved.

use crate::board::Board;
use crate::cell::{CellValue, Token};
use crate::position::{BOARD_SIZE, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A winning triple of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Line {
    /// All cells of one row.
    #[display("row {_0}")]
    Row(usize),
    /// All cells of one column.
    #[display("column {_0}")]
    Column(usize),
    /// (0,0), (1,1), (2,2).
    #[display("main diagonal")]
    MainDiagonal,
    /// (0,2), (1,1), (2,0).
    #[display("anti-diagonal")]
    AntiDiagonal,
}

impl Line {
    /// The (row, column) coordinates of the three cells on this line.
    pub fn cells(self) -> [(usize, usize); BOARD_SIZE] {
        match self {
            Line::Row(r) => [(r, 0), (r, 1), (r, 2)],
            Line::Column(c) => [(0, c), (1, c), (2, c)],
            Line::MainDiagonal => [(0, 0), (1, 1), (2, 2)],
            Line::AntiDiagonal => [(0, 2), (1, 1), (2, 0)],
        }
    }

    /// The three positions on this line, or `None` for an off-board row or column.
    pub fn positions(self) -> Option<[Position; BOARD_SIZE]> {
        let [a, b, c] = self.cells();
        Some([
            Position::from_row_column(a.0, a.1)?,
            Position::from_row_column(b.0, b.1)?,
            Position::from_row_column(c.0, c.1)?,
        ])
    }
}

/// Finds a line completed by `token`.
///
/// Rows are checked first, then columns, then the two diagonals.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, token: Token) -> Option<Line> {
    let grid = board.snapshot();
    let mine = CellValue::Occupied(token);

    if let Some(r) = (0..BOARD_SIZE).find(|&r| grid[r].iter().all(|&v| v == mine)) {
        return Some(Line::Row(r));
    }

    if let Some(c) = (0..BOARD_SIZE).find(|&c| grid.iter().all(|row| row[c] == mine)) {
        return Some(Line::Column(c));
    }

    if (0..BOARD_SIZE).all(|i| grid[i][i] == mine) {
        return Some(Line::MainDiagonal);
    }

    if (0..BOARD_SIZE).all(|i| grid[i][BOARD_SIZE - 1 - i] == mine) {
        return Some(Line::AntiDiagonal);
    }

    None
}

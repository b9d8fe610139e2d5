//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are kept apart from board storage
//! so the controller and the invariant checks can share them.

pub mod draw;
pub mod win;

pub use draw::is_tie;
pub use win::{Line, winning_line};

use crate::board::Board;
use crate::cell::Token;
use tracing::instrument;

/// Result of evaluating the board after a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// The mover completed a line.
    Win(Line),
    /// The board is full with no line for the mover.
    Tie,
    /// Play goes on.
    Continue,
}

/// Evaluates terminal conditions for the player holding `token`.
///
/// Exactly one of win, tie or continue is returned; a tie is only
/// considered once no line has been completed.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, token: Token) -> Evaluation {
    if let Some(line) = winning_line(board, token) {
        return Evaluation::Win(line);
    }
    if is_tie(board, token) {
        return Evaluation::Tie;
    }
    Evaluation::Continue
}

//! Tie detection.

use super::win::winning_line;
use crate::board::Board;
use crate::cell::Token;
use tracing::instrument;

/// True if the board is full and `token` has not completed a line.
#[instrument(skip(board))]
pub fn is_tie(board: &Board, token: Token) -> bool {
    winning_line(board, token).is_none() && board.is_full()
}

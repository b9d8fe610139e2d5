//! Text rendering of board state.

use crate::config::ScreenConfig;
use tictactoe_core::{BOARD_SIZE, Board, CellValue, Outcome, Player};

const SEPARATOR: &str = "-----+-----+-----";

/// Draws the board as a 3x3 text grid.
///
/// Empty cells show their `row,column` coordinates so the user knows what
/// to type.
pub fn render_board(board: &Board, config: &ScreenConfig) -> String {
    let snapshot = board.snapshot();
    let mut lines = Vec::with_capacity(2 * BOARD_SIZE - 1);

    for (row, cells) in snapshot.iter().enumerate() {
        let rendered: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(column, value)| match value {
                CellValue::Empty => format!(" {},{} ", row, column),
                CellValue::Occupied(token) => format!("  {}  ", config.mark(*token)),
            })
            .collect();
        lines.push(rendered.join("|"));
        if row + 1 < BOARD_SIZE {
            lines.push(SEPARATOR.to_string());
        }
    }

    lines.join("\n")
}

/// Prompt naming the player to move.
pub fn turn_line(player: &Player, config: &ScreenConfig) -> String {
    format!(
        "{}'s turn ({})...",
        player.name(),
        config.mark(*player.token())
    )
}

/// Announcement for a finished game.
pub fn outcome_line(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Victory { line, .. } => format!("{} ({})", outcome, line),
        Outcome::Tie => outcome.to_string(),
    }
}

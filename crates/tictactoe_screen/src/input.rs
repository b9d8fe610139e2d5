//! Turns a line typed at the prompt into a command.

use derive_more::{Display, Error};
use tracing::instrument;

/// A request typed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the active player's token.
    Move {
        /// Target row.
        row: usize,
        /// Target column.
        column: usize,
    },
    /// Redraw the board.
    Board,
    /// Print the accepted inputs.
    Help,
    /// Leave the game.
    Quit,
}

/// Input that could not be understood.
#[derive(Debug, Clone, Display, Error)]
#[display("Input error: {} at {}:{}", message, file, line)]
pub struct InputError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl InputError {
    /// Creates a new input error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Text listing the accepted inputs.
pub const HELP: &str = "Enter a move as \"row column\", \"row,column\" or \"rc\" (e.g. 1 2).\n\
                        Other commands: b (board), h (help), q (quit).";

/// Parses one line of user input.
///
/// Coordinates are not range-checked here; the controller decides.
#[instrument]
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        "b" | "board" => return Ok(Command::Board),
        "h" | "help" | "?" => return Ok(Command::Help),
        "" => return Err(InputError::new("Empty input".to_string())),
        _ => {}
    }

    let parts: Vec<&str> = trimmed
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();

    let (row, column) = match parts.as_slice() {
        [row, column] => (parse_index(row)?, parse_index(column)?),
        [pair] if pair.len() == 2 && pair.chars().all(|c| c.is_ascii_digit()) => {
            let (row, column) = pair.split_at(1);
            (parse_index(row)?, parse_index(column)?)
        }
        _ => {
            return Err(InputError::new(format!(
                "Expected a row and a column, got \"{}\"",
                trimmed
            )));
        }
    };

    Ok(Command::Move { row, column })
}

#[track_caller]
fn parse_index(text: &str) -> Result<usize, InputError> {
    text.parse::<usize>()
        .map_err(|_| InputError::new(format!("\"{}\" is not a row or column number", text)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_space_separated() {
        assert_eq!(
            parse_command("1 2").unwrap(),
            Command::Move { row: 1, column: 2 }
        );
    }

    #[test]
    fn test_parse_comma_and_compact() {
        assert_eq!(
            parse_command(" 2, 0 ").unwrap(),
            Command::Move { row: 2, column: 0 }
        );
        assert_eq!(
            parse_command("02").unwrap(),
            Command::Move { row: 0, column: 2 }
        );
    }

    #[test]
    fn test_out_of_range_is_left_to_controller() {
        assert_eq!(
            parse_command("5 5").unwrap(),
            Command::Move { row: 5, column: 5 }
        );
    }

    #[test]
    fn test_keywords() {
        assert_eq!(parse_command("Q").unwrap(), Command::Quit);
        assert_eq!(parse_command("board").unwrap(), Command::Board);
        assert_eq!(parse_command("?").unwrap(), Command::Help);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse_command("").is_err());
        assert!(parse_command("a b").is_err());
        assert!(parse_command("1 2 3").is_err());
        assert!(parse_command("-1 0").is_err());
        assert!(parse_command("123").is_err());
    }
}

//! Command-line interface for the terminal game.

use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML file with player names and marks
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Display name for Player One
    #[arg(long)]
    pub player_one: Option<String>,

    /// Display name for Player Two
    #[arg(long)]
    pub player_two: Option<String>,

    /// Mark drawn for Player One's tokens
    #[arg(long)]
    pub mark_one: Option<char>,

    /// Mark drawn for Player Two's tokens
    #[arg(long)]
    pub mark_two: Option<char>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_and_marks() {
        let cli = Cli::try_parse_from([
            "tictactoe",
            "--player-one",
            "Ada",
            "--mark-two",
            "@",
        ])
        .unwrap();
        assert_eq!(cli.player_one.as_deref(), Some("Ada"));
        assert_eq!(cli.player_two, None);
        assert_eq!(cli.mark_two, Some('@'));
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_rejects_multi_char_mark() {
        assert!(Cli::try_parse_from(["tictactoe", "--mark-one", "XX"]).is_err());
    }
}

//! What a completed round reports back to the caller.

use crate::cell::Token;
use crate::player::Player;
use crate::rules::Line;
use serde::{Deserialize, Serialize};

/// How a finished game ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a line.
    Victory {
        /// The player who won.
        winner: Player,
        /// The completed line.
        line: Line,
    },
    /// The board filled up without a line.
    Tie,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<&Player> {
        match self {
            Outcome::Victory { winner, .. } => Some(winner),
            Outcome::Tie => None,
        }
    }

    /// Returns true if the game was a tie.
    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tie)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Victory { winner, .. } => write!(f, "{} has won the game!", winner.name()),
            Outcome::Tie => write!(f, "The game has ended in a tie!"),
        }
    }
}

/// Result of a successful round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Round {
    /// No terminal condition; the turn passed to `next`.
    Continue {
        /// Token of the player now to move.
        next: Token,
    },
    /// The game ended and the board has been reset.
    Ended(Outcome),
}

impl Round {
    /// The outcome, if this round ended the game.
    pub fn outcome(&self) -> Option<&Outcome> {
        match self {
            Round::Ended(outcome) => Some(outcome),
            Round::Continue { .. } => None,
        }
    }
}

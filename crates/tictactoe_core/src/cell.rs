//! Tokens and cells: the smallest units of board state.

use serde::{Deserialize, Serialize};

/// A player's mark on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    /// Player One's token (moves first).
    PlayerOne,
    /// Player Two's token.
    PlayerTwo,
}

impl Token {
    /// Returns the other player's token.
    pub fn opponent(self) -> Self {
        match self {
            Token::PlayerOne => Token::PlayerTwo,
            Token::PlayerTwo => Token::PlayerOne,
        }
    }

    /// Numeric code of the token (1 or 2).
    pub fn code(self) -> u8 {
        match self {
            Token::PlayerOne => 1,
            Token::PlayerTwo => 2,
        }
    }
}

/// Occupancy of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellValue {
    /// No token placed.
    #[default]
    Empty,
    /// Cell holds a player's token.
    Occupied(Token),
}

impl CellValue {
    /// Numeric code: 0 for empty, otherwise the token code.
    pub fn code(self) -> u8 {
        match self {
            CellValue::Empty => 0,
            CellValue::Occupied(token) => token.code(),
        }
    }

    /// Returns the token in this cell, if any.
    pub fn token(self) -> Option<Token> {
        match self {
            CellValue::Empty => None,
            CellValue::Occupied(token) => Some(token),
        }
    }

    /// True if no token has been placed.
    pub fn is_empty(self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl From<Token> for CellValue {
    fn from(token: Token) -> Self {
        CellValue::Occupied(token)
    }
}

/// A single grid position.
///
/// Cells are only written through [`crate::Board::place_token`], which checks
/// emptiness first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cell {
    value: CellValue,
}

impl Cell {
    /// Creates an empty cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current occupancy.
    pub fn value(&self) -> CellValue {
        self.value
    }

    /// Places a token. Prior state is not checked.
    pub(crate) fn set_value(&mut self, token: Token) {
        self.value = CellValue::Occupied(token);
    }
}

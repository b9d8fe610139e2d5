//! The two participants of a game.

use crate::cell::Token;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Display name used for Player One when none is given.
pub const DEFAULT_PLAYER_ONE_NAME: &str = "Player One";

/// Display name used for Player Two when none is given.
pub const DEFAULT_PLAYER_TWO_NAME: &str = "Player Two";

/// A named participant holding one token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    name: String,
    /// Token placed by this player.
    token: Token,
}

impl Player {
    /// Creates a player.
    pub fn new(name: impl Into<String>, token: Token) -> Self {
        Self {
            name: name.into(),
            token,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

//! Screen configuration: player names and the marks drawn for each token.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_core::{DEFAULT_PLAYER_ONE_NAME, DEFAULT_PLAYER_TWO_NAME, Token};
use tracing::{debug, info, instrument};

/// Settings for a terminal game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// Display name of Player One.
    #[serde(default = "default_player_one")]
    player_one: String,

    /// Display name of Player Two.
    #[serde(default = "default_player_two")]
    player_two: String,

    /// Mark drawn for Player One's token.
    #[serde(default = "default_mark_one")]
    mark_one: char,

    /// Mark drawn for Player Two's token.
    #[serde(default = "default_mark_two")]
    mark_two: char,
}

fn default_player_one() -> String {
    DEFAULT_PLAYER_ONE_NAME.to_string()
}

fn default_player_two() -> String {
    DEFAULT_PLAYER_TWO_NAME.to_string()
}

fn default_mark_one() -> char {
    'X'
}

fn default_mark_two() -> char {
    'O'
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            player_one: default_player_one(),
            player_two: default_player_two(),
            mark_one: default_mark_one(),
            mark_two: default_mark_two(),
        }
    }
}

impl ScreenConfig {
    /// Loads configuration from a TOML file. Missing keys take defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            player_one = %config.player_one,
            player_two = %config.player_two,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Replaces any setting for which an override is given.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        player_one: Option<String>,
        player_two: Option<String>,
        mark_one: Option<char>,
        mark_two: Option<char>,
    ) -> Self {
        if let Some(name) = player_one {
            self.player_one = name;
        }
        if let Some(name) = player_two {
            self.player_two = name;
        }
        if let Some(mark) = mark_one {
            self.mark_one = mark;
        }
        if let Some(mark) = mark_two {
            self.mark_two = mark;
        }
        self
    }

    /// Rejects blank names and marks that are blank or identical.
    #[instrument(skip(self))]
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.player_one.trim().is_empty() || self.player_two.trim().is_empty() {
            return Err(ConfigError::new("Player names must not be blank".to_string()));
        }
        if self.mark_one.is_whitespace() || self.mark_two.is_whitespace() {
            return Err(ConfigError::new("Marks must be visible characters".to_string()));
        }
        if self.mark_one == self.mark_two {
            return Err(ConfigError::new(format!(
                "Both players use the mark '{}'",
                self.mark_one
            )));
        }
        Ok(self)
    }

    /// Mark drawn for `token`.
    pub fn mark(&self, token: Token) -> char {
        match token {
            Token::PlayerOne => self.mark_one,
            Token::PlayerTwo => self.mark_two,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
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

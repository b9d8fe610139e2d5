//! Minimal terminal presentation layer for `tictactoe_core`.
//!
//! Reads moves as text, forwards them to a [`tictactoe_core::GameController`]
//! and redraws the board after every state change.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod input;
mod render;
mod screen;

pub use config::{ConfigError, ScreenConfig};
pub use input::{Command, HELP, InputError, parse_command};
pub use render::{outcome_line, render_board, turn_line};
pub use screen::{Flow, Screen, Tally};

//! Rules engine and turn controller for two-player tic-tac-toe.
//!
//! # Architecture
//!
//! - **Cell / Board**: a fixed 3x3 grid; tokens are placed once per game
//! - **Rules**: pure win and tie detection over a board
//! - **GameController**: turn order, move validation, terminal checks and
//!   the automatic reset after a finished game
//!
//! Rendering and input capture live outside this crate. A presentation
//! layer owns a [`GameController`], forwards (row, column) moves to it and
//! re-renders from [`GameController::board`] and
//! [`GameController::active_player`].
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameController, Outcome, Round};
//!
//! let mut game = GameController::new();
//! game.on_game_end(|outcome: &Outcome| println!("{outcome}"));
//!
//! for (row, column) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
//!     game.play_round(row, column).unwrap();
//! }
//! let round = game.play_round(0, 2).unwrap();
//! assert!(matches!(round, Round::Ended(Outcome::Victory { .. })));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod cell;
mod controller;
mod error;
mod invariants;
mod outcome;
mod player;
mod position;
pub mod rules;

pub use board::{Board, Snapshot};
pub use cell::{Cell, CellValue, Token};
pub use controller::{GameController, GameEndListener};
pub use error::MoveError;
pub use invariants::{
    ControllerInvariants, Invariant, InvariantSet, InvariantViolation, TokenBalanceInvariant,
    TurnMatchesBoardInvariant,
};
pub use outcome::{Outcome, Round};
pub use player::{DEFAULT_PLAYER_ONE_NAME, DEFAULT_PLAYER_TWO_NAME, Player};
pub use position::{BOARD_SIZE, Position};
pub use rules::{Evaluation, Line};

//! Turn flow: placement, terminal check, turn switch, reset.

use crate::board::Board;
use crate::cell::Token;
use crate::error::MoveError;
use crate::invariants::{ControllerInvariants, InvariantSet};
use crate::outcome::{Outcome, Round};
use crate::player::{DEFAULT_PLAYER_ONE_NAME, DEFAULT_PLAYER_TWO_NAME, Player};
use crate::rules::{self, Evaluation};
use tracing::{debug, info, instrument};

/// Receives the outcome of every finished game, before the board resets.
pub trait GameEndListener {
    /// Called once per finished game.
    fn game_ended(&mut self, outcome: &Outcome);
}

impl<F> GameEndListener for F
where
    F: FnMut(&Outcome),
{
    fn game_ended(&mut self, outcome: &Outcome) {
        self(outcome)
    }
}

/// Owns the board and both players and drives the rounds.
///
/// A game that ends in a victory or a tie is replaced immediately by a
/// fresh one with Player One to move; registered listeners see the outcome
/// first.
pub struct GameController {
    board: Board,
    players: [Player; 2],
    active: Token,
    games_completed: u64,
    listeners: Vec<Box<dyn GameEndListener>>,
}

impl GameController {
    /// Creates a controller with the default player names.
    pub fn new() -> Self {
        Self::with_names(DEFAULT_PLAYER_ONE_NAME, DEFAULT_PLAYER_TWO_NAME)
    }

    /// Creates a controller with custom player names.
    #[instrument(skip(player_one, player_two))]
    pub fn with_names(player_one: impl Into<String>, player_two: impl Into<String>) -> Self {
        let players = [
            Player::new(player_one, Token::PlayerOne),
            Player::new(player_two, Token::PlayerTwo),
        ];
        info!(
            player_one = %players[0].name(),
            player_two = %players[1].name(),
            "New game"
        );
        Self {
            board: Board::new(),
            players,
            active: Token::PlayerOne,
            games_completed: 0,
            listeners: Vec::new(),
        }
    }

    /// Registers a listener for finished games.
    pub fn on_game_end(&mut self, listener: impl GameEndListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// The player whose turn it is.
    pub fn active_player(&self) -> &Player {
        self.player(self.active)
    }

    /// The player holding `token`.
    pub fn player(&self, token: Token) -> &Player {
        match token {
            Token::PlayerOne => &self.players[0],
            Token::PlayerTwo => &self.players[1],
        }
    }

    /// Both players, Player One first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Read-only view of the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of games that have ended in a victory or a tie.
    pub fn games_completed(&self) -> u64 {
        self.games_completed
    }

    /// Plays one round for the active player at (row, column).
    ///
    /// A rejected placement leaves board and turn untouched. A winning or
    /// tying placement notifies listeners and resets the game; any other
    /// placement passes the turn.
    #[instrument(skip(self), fields(player = %self.active_player().name()))]
    pub fn play_round(&mut self, row: usize, column: usize) -> Result<Round, MoveError> {
        let token = self.active;
        self.board.place_token(row, column, token)?;

        let mover = self.player(token).clone();
        info!(
            "Placing {}'s token in row {} and column {}.",
            mover.name(),
            row,
            column
        );

        match rules::evaluate(&self.board, token) {
            Evaluation::Win(line) => {
                info!(%line, "{} has won the game!", mover.name());
                Ok(self.finish(Outcome::Victory {
                    winner: mover,
                    line,
                }))
            }
            Evaluation::Tie => {
                info!("The game has ended in a tie!");
                Ok(self.finish(Outcome::Tie))
            }
            Evaluation::Continue => {
                self.switch_player();
                debug_assert!(
                    ControllerInvariants::check_all(&*self).is_ok(),
                    "Controller invariants violated after round"
                );
                Ok(Round::Continue { next: self.active })
            }
        }
    }

    fn switch_player(&mut self) {
        self.active = self.active.opponent();
        debug!(
            snapshot = ?self.board.snapshot(),
            "{}'s turn.",
            self.active_player().name()
        );
    }

    fn finish(&mut self, outcome: Outcome) -> Round {
        for listener in &mut self.listeners {
            listener.game_ended(&outcome);
        }
        self.games_completed += 1;
        self.reset();
        Round::Ended(outcome)
    }

    fn reset(&mut self) {
        self.board = Board::new();
        self.active = Token::PlayerOne;
        info!(games_completed = self.games_completed, "Board reset");
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GameController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameController")
            .field("board", &self.board)
            .field("players", &self.players)
            .field("active", &self.active)
            .field("games_completed", &self.games_completed)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_new_game_defaults() {
        let game = GameController::new();
        assert_eq!(game.active_player().name(), DEFAULT_PLAYER_ONE_NAME);
        assert_eq!(*game.active_player().token(), Token::PlayerOne);
        assert_eq!(game.players()[1].name(), DEFAULT_PLAYER_TWO_NAME);
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.games_completed(), 0);
    }

    #[test]
    fn test_turn_passes_after_placement() {
        let mut game = GameController::with_names("Ada", "Grace");
        let round = game.play_round(1, 1).unwrap();
        assert_eq!(round, Round::Continue { next: Token::PlayerTwo });
        assert_eq!(game.active_player().name(), "Grace");
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut game = GameController::new();
        game.play_round(0, 0).unwrap();
        let before = game.board().clone();

        assert_eq!(
            game.play_round(0, 0),
            Err(MoveError::InvalidMove { row: 0, column: 0 })
        );
        assert_eq!(
            game.play_round(0, 3),
            Err(MoveError::OutOfRange { row: 0, column: 3 })
        );
        assert_eq!(*game.active_player().token(), Token::PlayerTwo);
        assert_eq!(game.board(), &before);
    }

    #[test]
    fn test_listener_sees_outcome_before_reset() {
        let seen: Rc<RefCell<Vec<Outcome>>> = Rc::default();
        let sink = Rc::clone(&seen);

        let mut game = GameController::new();
        game.on_game_end(move |outcome: &Outcome| sink.borrow_mut().push(outcome.clone()));

        for (row, column) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            game.play_round(row, column).unwrap();
        }

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].winner().map(|p| p.name().as_str()), Some(DEFAULT_PLAYER_ONE_NAME));
        assert_eq!(game.games_completed(), 1);
    }
}

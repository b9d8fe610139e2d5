//! First-class invariants for the turn controller.
//!
//! Invariants are logical properties that must hold between rounds.
//! The controller checks them as postconditions in debug builds; they are
//! also testable on their own.

use crate::cell::Token;
use crate::controller::GameController;
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks every invariant, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: Player One has placed the same number of tokens as Player
/// Two, or exactly one more.
pub struct TokenBalanceInvariant;

impl Invariant<GameController> for TokenBalanceInvariant {
    fn holds(game: &GameController) -> bool {
        let ones = game.board().count(Token::PlayerOne);
        let twos = game.board().count(Token::PlayerTwo);
        let valid = ones == twos || ones == twos + 1;
        if !valid {
            warn!(ones, twos, "Token balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "Player One leads Player Two by zero or one tokens"
    }
}

/// Invariant: the active player is the one the board says should move.
///
/// Equal counts mean Player One is to move, otherwise Player Two.
pub struct TurnMatchesBoardInvariant;

impl Invariant<GameController> for TurnMatchesBoardInvariant {
    fn holds(game: &GameController) -> bool {
        let ones = game.board().count(Token::PlayerOne);
        let twos = game.board().count(Token::PlayerTwo);
        let expected = if ones == twos {
            Token::PlayerOne
        } else {
            Token::PlayerTwo
        };
        *game.active_player().token() == expected
    }

    fn description() -> &'static str {
        "Active player matches the token counts on the board"
    }
}

/// All controller invariants as a composable set.
pub type ControllerInvariants = (TokenBalanceInvariant, TurnMatchesBoardInvariant);

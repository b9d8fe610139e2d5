//! End-to-end rounds through the game controller.

use std::cell::RefCell;
use std::rc::Rc;
use tictactoe_core::{
    Board, CellValue, GameController, Line, MoveError, Outcome, Round, Token,
    DEFAULT_PLAYER_ONE_NAME,
};

/// Plays every move but the last, asserting each one continues, then
/// returns the last round's result.
fn play(game: &mut GameController, moves: &[(usize, usize)]) -> Round {
    let (last, rest) = moves.split_last().expect("at least one move");
    for &(row, column) in rest {
        let round = game.play_round(row, column).expect("valid move");
        assert!(matches!(round, Round::Continue { .. }), "game ended early at ({row}, {column})");
    }
    game.play_round(last.0, last.1).expect("valid move")
}

fn recorded_outcomes(game: &mut GameController) -> Rc<RefCell<Vec<Outcome>>> {
    let seen: Rc<RefCell<Vec<Outcome>>> = Rc::default();
    let sink = Rc::clone(&seen);
    game.on_game_end(move |outcome: &Outcome| sink.borrow_mut().push(outcome.clone()));
    seen
}

fn assert_fresh(game: &GameController) {
    assert_eq!(game.board(), &Board::new());
    assert_eq!(*game.active_player().token(), Token::PlayerOne);
}

#[test]
fn test_row_win() {
    let mut game = GameController::new();
    let seen = recorded_outcomes(&mut game);

    let round = play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

    match round {
        Round::Ended(Outcome::Victory { winner, line }) => {
            assert_eq!(winner.name(), DEFAULT_PLAYER_ONE_NAME);
            assert_eq!(line, Line::Row(0));
        }
        other => panic!("expected victory, got {other:?}"),
    }
    assert_eq!(seen.borrow().len(), 1);
    assert_fresh(&game);
}

#[test]
fn test_column_win() {
    let mut game = GameController::new();
    let round = play(&mut game, &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)]);

    let outcome = round.outcome().expect("game over");
    assert_eq!(outcome.winner().map(|p| *p.token()), Some(Token::PlayerOne));
    assert!(matches!(outcome, Outcome::Victory { line: Line::Column(0), .. }));
    assert_fresh(&game);
}

#[test]
fn test_diagonal_win() {
    let mut game = GameController::new();
    let round = play(&mut game, &[(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)]);

    assert!(matches!(
        round,
        Round::Ended(Outcome::Victory { line: Line::MainDiagonal, .. })
    ));
    assert_fresh(&game);
}

#[test]
fn test_player_two_wins_anti_diagonal() {
    let mut game = GameController::with_names("Ada", "Grace");
    let round = play(
        &mut game,
        &[(0, 0), (0, 2), (0, 1), (1, 1), (2, 2), (2, 0)],
    );

    let outcome = round.outcome().expect("game over");
    assert_eq!(outcome.winner().map(|p| p.name().as_str()), Some("Grace"));
    assert!(matches!(outcome, Outcome::Victory { line: Line::AntiDiagonal, .. }));
    assert_fresh(&game);
}

#[test]
fn test_tie() {
    let mut game = GameController::new();
    let seen = recorded_outcomes(&mut game);

    let round = play(
        &mut game,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (2, 0),
            (1, 2),
            (2, 2),
            (2, 1),
        ],
    );

    assert_eq!(round, Round::Ended(Outcome::Tie));
    assert_eq!(seen.borrow().as_slice(), &[Outcome::Tie]);
    assert_eq!(game.games_completed(), 1);
    assert_fresh(&game);
}

#[test]
fn test_rejected_move() {
    let mut game = GameController::new();
    game.play_round(0, 0).unwrap();
    let board_before = game.board().clone();
    let player_before = game.active_player().clone();

    let result = game.play_round(0, 0);

    assert_eq!(result, Err(MoveError::InvalidMove { row: 0, column: 0 }));
    assert_eq!(game.board(), &board_before);
    assert_eq!(game.active_player(), &player_before);
}

#[test]
fn test_out_of_range_move() {
    let mut game = GameController::new();

    assert_eq!(
        game.play_round(3, 0),
        Err(MoveError::OutOfRange { row: 3, column: 0 })
    );
    assert_eq!(
        game.play_round(1, usize::MAX),
        Err(MoveError::OutOfRange {
            row: 1,
            column: usize::MAX
        })
    );
    assert_fresh(&game);
}

#[test]
fn test_turns_alternate_strictly() {
    let mut game = GameController::new();
    let moves = [(1, 1), (0, 0), (2, 2), (0, 2), (0, 1), (2, 1)];

    let mut expected = Token::PlayerOne;
    for (row, column) in moves {
        assert_eq!(*game.active_player().token(), expected);
        let round = game.play_round(row, column).unwrap();
        expected = expected.opponent();
        assert_eq!(round, Round::Continue { next: expected });
    }
}

#[test]
fn test_cells_only_fill_once_per_game() {
    let mut game = GameController::new();
    let moves = [(1, 1), (0, 0), (2, 2), (0, 2)];

    for (row, column) in moves {
        game.play_round(row, column).unwrap();
    }
    for (row, column) in moves {
        let before = game.board().snapshot();
        assert_eq!(
            game.play_round(row, column),
            Err(MoveError::InvalidMove { row, column })
        );
        assert_eq!(game.board().snapshot(), before);
    }

    let occupied = game
        .board()
        .snapshot()
        .iter()
        .flatten()
        .filter(|v| **v != CellValue::Empty)
        .count();
    assert_eq!(occupied, moves.len());
}

#[test]
fn test_play_continues_after_reset() {
    let mut game = GameController::new();
    play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    assert_fresh(&game);

    // The cells from the finished game are free again.
    let round = game.play_round(0, 0).unwrap();
    assert_eq!(round, Round::Continue { next: Token::PlayerTwo });
    assert_eq!(game.board().snapshot()[0][0], CellValue::Occupied(Token::PlayerOne));
}

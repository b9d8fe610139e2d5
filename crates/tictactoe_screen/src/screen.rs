//! Screen controller: owns the game, reads commands, redraws after each change.

use crate::config::ScreenConfig;
use crate::input::{Command, HELP, parse_command};
use crate::render::{outcome_line, render_board, turn_line};
use anyhow::{Context, Result};
use derive_getters::Getters;
use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;
use tictactoe_core::{GameController, Outcome, Round, Token};
use tracing::{debug, info, instrument, warn};

/// Running score across finished games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct Tally {
    /// Games won by Player One.
    player_one_wins: u32,
    /// Games won by Player Two.
    player_two_wins: u32,
    /// Games ending in a tie.
    ties: u32,
}

impl Tally {
    fn record(&mut self, outcome: &Outcome) {
        match outcome.winner().map(|p| *p.token()) {
            Some(Token::PlayerOne) => self.player_one_wins += 1,
            Some(Token::PlayerTwo) => self.player_two_wins += 1,
            None => self.ties += 1,
        }
    }
}

/// What the caller should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Show this text and keep reading.
    Continue(String),
    /// Stop reading input.
    Quit,
}

/// Terminal presentation of one [`GameController`].
pub struct Screen {
    game: GameController,
    config: ScreenConfig,
    tally: Rc<RefCell<Tally>>,
}

impl Screen {
    /// Creates a screen and its game from `config`.
    #[instrument(skip(config))]
    pub fn new(config: ScreenConfig) -> Self {
        let mut game =
            GameController::with_names(config.player_one().clone(), config.player_two().clone());

        let tally: Rc<RefCell<Tally>> = Rc::default();
        let sink = Rc::clone(&tally);
        game.on_game_end(move |outcome: &Outcome| {
            debug!(%outcome, "Recording finished game");
            sink.borrow_mut().record(outcome);
        });

        Self {
            game,
            config,
            tally,
        }
    }

    /// The game being shown.
    pub fn game(&self) -> &GameController {
        &self.game
    }

    /// Score so far.
    pub fn tally(&self) -> Tally {
        *self.tally.borrow()
    }

    /// Board followed by the turn prompt.
    pub fn render(&self) -> String {
        format!(
            "{}\n{}",
            render_board(self.game.board(), &self.config),
            turn_line(self.game.active_player(), &self.config)
        )
    }

    /// One-line score summary.
    pub fn score_line(&self) -> String {
        let tally = self.tally();
        format!(
            "{} {} - {} {} ({} tied)",
            self.config.player_one(),
            tally.player_one_wins,
            tally.player_two_wins,
            self.config.player_two(),
            tally.ties
        )
    }

    /// Handles one line of input.
    ///
    /// Rejected input and rejected moves produce a message and leave the
    /// game untouched.
    #[instrument(skip(self))]
    pub fn handle_line(&mut self, line: &str) -> Flow {
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(e) => {
                warn!(error = %e, "Unreadable input");
                return Flow::Continue(format!("{}\n{}", e.message, HELP));
            }
        };

        match command {
            Command::Quit => Flow::Quit,
            Command::Help => Flow::Continue(HELP.to_string()),
            Command::Board => Flow::Continue(self.render()),
            Command::Move { row, column } => match self.game.play_round(row, column) {
                Ok(Round::Continue { .. }) => Flow::Continue(self.render()),
                Ok(Round::Ended(outcome)) => Flow::Continue(format!(
                    "{}\n{}\nNew game!\n{}",
                    outcome_line(&outcome),
                    self.score_line(),
                    self.render()
                )),
                Err(e) => Flow::Continue(format!(
                    "{}. Try again.\n{}",
                    e,
                    turn_line(self.game.active_player(), &self.config)
                )),
            },
        }
    }

    /// Reads commands from `input` until it ends or the user quits.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        info!("Screen started");
        writeln!(output, "{}\n{}", HELP, self.render()).context("Failed to write to output")?;

        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            match self.handle_line(&line) {
                Flow::Continue(text) => {
                    writeln!(output, "{}", text).context("Failed to write to output")?;
                }
                Flow::Quit => break,
            }
            output.flush().context("Failed to flush output")?;
        }

        writeln!(output, "{}", self.score_line()).context("Failed to write to output")?;
        info!(games = self.game.games_completed(), "Screen closed");
        Ok(())
    }
}

//! Terminal tic-tac-toe.
//!
//! Two players share one keyboard; moves are typed as row and column.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use tictactoe_screen::{Screen, ScreenConfig};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = load_config(cli)?;
    let mut screen = Screen::new(config);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    screen.run(stdin.lock(), stdout.lock())
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,tictactoe_core=info,tictactoe_screen=info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[instrument(skip(cli), fields(config_path = ?cli.config))]
fn load_config(cli: Cli) -> Result<ScreenConfig> {
    let config = match &cli.config {
        Some(path) => ScreenConfig::from_file(path)?,
        None => {
            info!("No config file given, using defaults");
            ScreenConfig::default()
        }
    };

    let config = config
        .with_overrides(cli.player_one, cli.player_two, cli.mark_one, cli.mark_two)
        .validate()?;
    Ok(config)
}

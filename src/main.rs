//! Tic-tac-toe terminal front end.

#![warn(missing_docs)]

mod cli;
mod console;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use tictactoe_session::GameSession;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = cli.settings()?;
    info!(mode = %settings.mode(), seed = ?settings.seed(), "Starting tic-tac-toe");

    let mut session = GameSession::from_settings(&settings);
    console::run(
        &mut session,
        std::io::stdin().lock(),
        std::io::stdout().lock(),
        cli.json,
    )
}

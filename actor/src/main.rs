//! Actor - self-play runner for the MCTS engine
//!
//! Plays a batch of tic-tac-toe games with the tree search on one or both
//! sides, reusing the search tree from move to move, and logs the results.

use anyhow::Result;
use clap::Parser;
use tracing::info;

mod config;
mod selfplay;

use crate::config::Config;
use crate::selfplay::SelfPlay;

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;

    init_tracing(&config.log_level)?;
    info!(log_level = %config.log_level, "Tracing initialized");

    info!(
        games = config.games,
        opponent = %config.opponent,
        num_simulations = config.num_simulations,
        max_depth = config.max_depth,
        lambda = config.lambda,
        "Starting self-play"
    );

    let mut selfplay = SelfPlay::new(config)?;
    let summary = selfplay.run()?;

    info!(
        games = summary.games,
        mcts_wins = summary.mcts_wins,
        opponent_wins = summary.opponent_wins,
        draws = summary.draws,
        tree_reuses = summary.tree_reuses,
        tree_rebuilds = summary.tree_rebuilds,
        "Self-play finished"
    );
    Ok(())
}

//! Configuration for the Actor binary
//!
//! Configuration is loaded from config.toml with environment variable overrides.
//! CLI arguments take highest priority, followed by env vars, then config.toml.

use anyhow::{anyhow, Result};
use clap::Parser;
use engine_config::{load_config, CentralConfig};
use mcts::MctsConfig;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

use crate::selfplay::Opponent;

// Load central config once at startup
static CENTRAL_CONFIG: Lazy<CentralConfig> = Lazy::new(load_config);

fn default_log_level() -> String {
    CENTRAL_CONFIG.common.log_level.clone()
}

fn default_games() -> u32 {
    CENTRAL_CONFIG.selfplay.games
}

fn default_seed() -> u64 {
    CENTRAL_CONFIG.selfplay.seed
}

fn default_opponent() -> String {
    CENTRAL_CONFIG.selfplay.opponent.clone()
}

fn default_rollout_moves() -> u32 {
    CENTRAL_CONFIG.selfplay.rollout_moves
}

fn default_num_simulations() -> u32 {
    CENTRAL_CONFIG.mcts.num_simulations
}

fn default_max_depth() -> u32 {
    CENTRAL_CONFIG.mcts.max_depth
}

fn default_lambda() -> f32 {
    CENTRAL_CONFIG.mcts.lambda
}

fn default_visit_threshold() -> u32 {
    CENTRAL_CONFIG.mcts.visit_threshold
}

fn default_depth_extension() -> u32 {
    CENTRAL_CONFIG.mcts.depth_extension
}

#[derive(Parser, Debug, Clone, Serialize, Deserialize)]
#[command(name = "actor")]
#[command(about = "Self-play runner for the MCTS engine")]
#[command(
    long_about = "Plays tic-tac-toe games with MCTS against a random mover or against
itself, reusing the search tree between moves.

Configuration is loaded from config.toml with environment variable overrides.
CLI arguments take highest priority."
)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value_t = default_log_level())]
    pub log_level: String,

    /// Number of games to play
    #[arg(long, default_value_t = default_games())]
    pub games: u32,

    /// Base seed for rollouts and the random opponent
    #[arg(long, default_value_t = default_seed())]
    pub seed: u64,

    /// Opponent of the search: "random" or "mcts"
    #[arg(long, default_value_t = default_opponent())]
    pub opponent: String,

    /// Move cap for random rollouts
    #[arg(long, default_value_t = default_rollout_moves())]
    pub rollout_moves: u32,

    /// Number of MCTS simulations per move
    #[arg(long, default_value_t = default_num_simulations())]
    pub num_simulations: u32,

    /// Selection steps per simulation before depth extensions
    #[arg(long, default_value_t = default_max_depth())]
    pub max_depth: u32,

    /// Weight of rollout outcomes against value estimates (0 to 1)
    #[arg(long, default_value_t = default_lambda())]
    pub lambda: f32,

    /// Visits after which the depth budget is extended
    #[arg(long, default_value_t = default_visit_threshold())]
    pub visit_threshold: u32,

    /// Steps added per depth extension
    #[arg(long, default_value_t = default_depth_extension())]
    pub depth_extension: u32,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.games == 0 {
            return Err(anyhow!("games must be greater than 0"));
        }

        if self.num_simulations == 0 {
            return Err(anyhow!("num_simulations must be greater than 0"));
        }

        self.opponent_kind()?;

        self.mcts_config()
            .validate()
            .map_err(|e| anyhow!("invalid search parameters: {}", e))?;

        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(anyhow!(
                "invalid log level '{}', expected one of trace, debug, info, warn, error",
                self.log_level
            ));
        }

        Ok(())
    }

    pub fn opponent_kind(&self) -> Result<Opponent> {
        self.opponent.parse()
    }

    pub fn mcts_config(&self) -> MctsConfig {
        MctsConfig::default()
            .with_simulations(self.num_simulations)
            .with_max_depth(self.max_depth)
            .with_lambda(self.lambda)
            .with_visit_threshold(self.visit_threshold)
            .with_depth_extension(self.depth_extension)
    }
}

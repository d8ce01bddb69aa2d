//! Default configuration values loaded from config.defaults.toml.
//!
//! The shared TOML file is embedded at compile time, so the binary and the
//! documented defaults cannot drift apart.

use once_cell::sync::Lazy;
use serde::Deserialize;

/// The embedded defaults TOML file (loaded at compile time)
const DEFAULTS_TOML: &str = include_str!("../../../config.defaults.toml");

/// Parsed defaults structure (parsed once at first use)
static DEFAULTS: Lazy<DefaultsConfig> = Lazy::new(|| {
    toml::from_str(DEFAULTS_TOML).expect("config.defaults.toml should be valid TOML")
});

// ============================================================================
// Internal structs for parsing config.defaults.toml
// ============================================================================

#[derive(Debug, Deserialize)]
struct DefaultsConfig {
    common: CommonDefaults,
    mcts: MctsDefaults,
    selfplay: SelfPlayDefaults,
}

#[derive(Debug, Deserialize)]
struct CommonDefaults {
    log_level: String,
}

#[derive(Debug, Deserialize)]
struct MctsDefaults {
    num_simulations: u32,
    max_depth: u32,
    lambda: f32,
    visit_threshold: u32,
    depth_extension: u32,
}

#[derive(Debug, Deserialize)]
struct SelfPlayDefaults {
    games: u32,
    seed: u64,
    rollout_moves: u32,
    opponent: String,
}

// ============================================================================
// Public accessor functions
// ============================================================================

// Common
pub fn log_level() -> &'static str {
    &DEFAULTS.common.log_level
}

// MCTS
pub fn num_simulations() -> u32 {
    DEFAULTS.mcts.num_simulations
}
pub fn max_depth() -> u32 {
    DEFAULTS.mcts.max_depth
}
pub fn lambda() -> f32 {
    DEFAULTS.mcts.lambda
}
pub fn visit_threshold() -> u32 {
    DEFAULTS.mcts.visit_threshold
}
pub fn depth_extension() -> u32 {
    DEFAULTS.mcts.depth_extension
}

// Self-play
pub fn games() -> u32 {
    DEFAULTS.selfplay.games
}
pub fn seed() -> u64 {
    DEFAULTS.selfplay.seed
}
pub fn rollout_moves() -> u32 {
    DEFAULTS.selfplay.rollout_moves
}
pub fn opponent() -> &'static str {
    &DEFAULTS.selfplay.opponent
}

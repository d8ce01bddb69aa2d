//! Configuration struct definitions.
//!
//! All config structs with serde deserialization support and default values.

use crate::defaults;
use serde::Deserialize;

// ============================================================================
// Serde default functions (required for #[serde(default = "...")])
// These call the accessor functions from defaults module
// ============================================================================

fn d_log_level() -> String {
    defaults::log_level().into()
}
fn d_num_sims() -> u32 {
    defaults::num_simulations()
}
fn d_max_depth() -> u32 {
    defaults::max_depth()
}
fn d_lambda() -> f32 {
    defaults::lambda()
}
fn d_visit_threshold() -> u32 {
    defaults::visit_threshold()
}
fn d_depth_extension() -> u32 {
    defaults::depth_extension()
}
fn d_games() -> u32 {
    defaults::games()
}
fn d_seed() -> u64 {
    defaults::seed()
}
fn d_rollout_moves() -> u32 {
    defaults::rollout_moves()
}
fn d_opponent() -> String {
    defaults::opponent().into()
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Root configuration structure matching config.toml
#[derive(Debug, Deserialize, Default, Clone)]
pub struct CentralConfig {
    #[serde(default)]
    pub common: CommonConfig,
    #[serde(default)]
    pub mcts: MctsConfig,
    #[serde(default)]
    pub selfplay: SelfPlayConfig,
}

/// Common configuration shared by all components
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CommonConfig {
    #[serde(default = "d_log_level")]
    pub log_level: String,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::log_level().into(),
        }
    }
}

/// Search parameters. Mirrors `mcts::MctsConfig` field for field.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct MctsConfig {
    #[serde(default = "d_num_sims")]
    pub num_simulations: u32,
    #[serde(default = "d_max_depth")]
    pub max_depth: u32,
    #[serde(default = "d_lambda")]
    pub lambda: f32,
    #[serde(default = "d_visit_threshold")]
    pub visit_threshold: u32,
    #[serde(default = "d_depth_extension")]
    pub depth_extension: u32,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            num_simulations: defaults::num_simulations(),
            max_depth: defaults::max_depth(),
            lambda: defaults::lambda(),
            visit_threshold: defaults::visit_threshold(),
            depth_extension: defaults::depth_extension(),
        }
    }
}

/// Self-play runner configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SelfPlayConfig {
    #[serde(default = "d_games")]
    pub games: u32,
    #[serde(default = "d_seed")]
    pub seed: u64,
    /// Move cap for random rollouts
    #[serde(default = "d_rollout_moves")]
    pub rollout_moves: u32,
    /// "random" or "mcts"
    #[serde(default = "d_opponent")]
    pub opponent: String,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            games: defaults::games(),
            seed: defaults::seed(),
            rollout_moves: defaults::rollout_moves(),
            opponent: defaults::opponent().into(),
        }
    }
}

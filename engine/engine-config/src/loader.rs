//! Configuration loading logic.
//!
//! Handles loading config from files and applying environment variable overrides.

use crate::CentralConfig;
use std::path::Path;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Standard locations to search for config.toml
pub const CONFIG_SEARCH_PATHS: &[&str] = &[
    "config.toml",    // Current directory
    "../config.toml", // Parent directory (when running from subdirectory)
];

/// Load the central configuration from config.toml.
///
/// Searches for config.toml in the following order:
/// 1. Path specified by ALPHAGO_CONFIG environment variable
/// 2. Current directory (config.toml)
/// 3. Parent directory (../config.toml)
///
/// After loading, environment variable overrides are applied.
pub fn load_config() -> CentralConfig {
    // Check for explicit config path
    if let Ok(path) = std::env::var("ALPHAGO_CONFIG") {
        let path = PathBuf::from(&path);
        if path.exists() {
            info!("Loading config from ALPHAGO_CONFIG: {}", path.display());
            return load_from_path(&path);
        }
        warn!(
            "ALPHAGO_CONFIG={} not found, searching defaults",
            path.display()
        );
    }

    // Search default locations
    for path_str in CONFIG_SEARCH_PATHS {
        let path = PathBuf::from(path_str);
        if path.exists() {
            info!("Loading config from {}", path.display());
            return load_from_path(&path);
        }
    }

    debug!("No config.toml found, using built-in defaults");
    apply_env_overrides(CentralConfig::default())
}

/// Load configuration from a specific path.
pub fn load_from_path(path: &Path) -> CentralConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => apply_env_overrides(config),
            Err(e) => {
                warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                apply_env_overrides(CentralConfig::default())
            }
        },
        Err(e) => {
            warn!("Failed to read {}: {}, using defaults", path.display(), e);
            apply_env_overrides(CentralConfig::default())
        }
    }
}

/// Macro to reduce env override boilerplate
macro_rules! env_override {
    // String field
    ($config:expr, $section:ident . $field:ident, $key:expr) => {
        if let Ok(v) = std::env::var($key) {
            $config.$section.$field = v;
        }
    };
    // Parseable field (u32, u64, f32, etc.)
    ($config:expr, $section:ident . $field:ident, $key:expr, parse) => {
        if let Ok(v) =
            std::env::var($key).and_then(|s| s.parse().map_err(|_| std::env::VarError::NotPresent))
        {
            $config.$section.$field = v;
        }
    };
}

/// Apply environment variable overrides to a configuration.
///
/// Environment variables follow the pattern: ALPHAGO_<SECTION>_<KEY>.
/// Values that fail to parse are ignored.
pub fn apply_env_overrides(mut config: CentralConfig) -> CentralConfig {
    // Common
    env_override!(config, common.log_level, "ALPHAGO_COMMON_LOG_LEVEL");

    // MCTS
    env_override!(
        config,
        mcts.num_simulations,
        "ALPHAGO_MCTS_NUM_SIMULATIONS",
        parse
    );
    env_override!(config, mcts.max_depth, "ALPHAGO_MCTS_MAX_DEPTH", parse);
    env_override!(config, mcts.lambda, "ALPHAGO_MCTS_LAMBDA", parse);
    env_override!(
        config,
        mcts.visit_threshold,
        "ALPHAGO_MCTS_VISIT_THRESHOLD",
        parse
    );
    env_override!(
        config,
        mcts.depth_extension,
        "ALPHAGO_MCTS_DEPTH_EXTENSION",
        parse
    );

    // Self-play
    env_override!(config, selfplay.games, "ALPHAGO_SELFPLAY_GAMES", parse);
    env_override!(config, selfplay.seed, "ALPHAGO_SELFPLAY_SEED", parse);
    env_override!(
        config,
        selfplay.rollout_moves,
        "ALPHAGO_SELFPLAY_ROLLOUT_MOVES",
        parse
    );
    env_override!(config, selfplay.opponent, "ALPHAGO_SELFPLAY_OPPONENT");

    config
}

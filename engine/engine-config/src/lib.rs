//! Centralized configuration loading from config.toml.
//!
//! This crate provides configuration structs and loading logic shared
//! across the Rust components (the self-play actor and benchmarks).
//!
//! # Configuration Priority
//!
//! Settings are loaded with the following priority (highest to lowest):
//! 1. Environment variables (`ALPHAGO_<SECTION>_<KEY>`)
//! 2. config.toml file
//! 3. Built-in defaults
//!
//! # Environment Variable Override Pattern
//!
//! ```text
//! ALPHAGO_<SECTION>_<KEY>=value
//!
//! Examples:
//!     ALPHAGO_COMMON_LOG_LEVEL=debug
//!     ALPHAGO_MCTS_NUM_SIMULATIONS=1600
//!     ALPHAGO_MCTS_LAMBDA=0.25
//!     ALPHAGO_SELFPLAY_OPPONENT=mcts
//! ```

mod defaults;
mod loader;
mod structs;

pub use defaults::*;
pub use loader::{apply_env_overrides, load_config, load_from_path, CONFIG_SEARCH_PATHS};
pub use structs::*;

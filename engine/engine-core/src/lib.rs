//! Core game abstraction for the search engine.
//!
//! This crate provides the one capability the engine needs from a game:
//! - `GameState`: copyable position with legal-move generation, in-place move
//!   application and terminal outcome

pub mod game;

pub use game::{GameState, Player};

//! Monte Carlo Tree Search (MCTS) in the style of AlphaGo.
//!
//! This crate provides a game-agnostic MCTS implementation that works with any
//! game implementing the `engine-core` GameState trait.
//!
//! # Overview
//!
//! The search grows a tree one simulation at a time. Each simulation:
//!
//! 1. **Selection**: Walks down from the root, choosing the child with the
//!    highest action value Q plus exploration bonus u(P) = P / (1 + N)
//! 2. **Expansion**: Leaves met on the way get one child per action returned
//!    by the policy function
//! 3. **Evaluation**: The final position is scored twice, by a value function
//!    and by a rollout
//! 4. **Backup**: Q is refreshed along the visited path. Leaves blend the mean
//!    value estimate and the mean rollout outcome; internal nodes take the
//!    mean Q of their children
//!
//! Once a node at the end of the depth budget has been visited often enough,
//! the budget is extended so the tree keeps growing below well-explored lines.
//!
//! # Usage
//!
//! ```rust,ignore
//! use mcts::{ConstantValue, MctsConfig, MctsSearch, RandomRollout, UniformPolicy};
//! use games_tictactoe::{State, PLAYER_X};
//!
//! let mut search = MctsSearch::new(
//!     State::new(),
//!     UniformPolicy::new(),
//!     ConstantValue(0.0),
//!     RandomRollout::new(PLAYER_X, 9, 42),
//!     MctsConfig::for_testing(),
//! )
//! .unwrap();
//!
//! let result = search.search().unwrap();
//! println!("Best action: {:?}", result.action);
//!
//! // Keep the chosen subtree for the next move
//! search.commit_move(&result.action).unwrap();
//! ```
//!
//! # Configuration
//!
//! The [`MctsConfig`] struct controls search behavior:
//!
//! - `num_simulations`: Number of simulations per search (default: 800)
//! - `max_depth`: Selection steps per simulation (default: 20)
//! - `lambda`: Weight of the rollout signal against the value signal (default: 0.5)
//! - `visit_threshold`: Visits needed before the depth budget is extended (default: 50)
//! - `depth_extension`: Steps added per extension (default: 2)
//!
//! # Evaluators
//!
//! The search is driven by three strategies, see [`evaluator`]:
//!
//! - [`PolicyFunction`]: priors over legal actions
//! - [`ValueFunction`]: scalar estimate of a position
//! - [`RolloutFunction`]: outcome of a playout
//!
//! Closures work directly as policy and value functions.

pub mod config;
pub mod evaluator;
pub mod node;
pub mod parallel;
pub mod search;
pub mod tree;

#[cfg(test)]
pub(crate) mod test_util;

// Re-export main types
pub use config::MctsConfig;
pub use evaluator::{
    ConstantValue, EvaluatorError, PolicyFunction, RandomPriorPolicy, RandomRollout, RolloutFn,
    RolloutFunction, UniformPolicy, ValueFunction,
};
pub use node::{MctsNode, NodeId};
pub use parallel::ParallelMcts;
pub use search::{run_mcts, MctsSearch, SearchError, SearchResult, SearchStats};
pub use tree::{MctsTree, TreeError, TreeStats};

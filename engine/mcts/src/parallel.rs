//! Placeholder for multi-threaded search.
//!
//! Running simulations concurrently needs a discipline this crate does not
//! have yet: at most one expansion per node, atomic visit counts, and backups
//! that do not lose each other's updates. Until then every entry point fails
//! with `SearchError::Unsupported`.

use engine_core::GameState;

use crate::evaluator::{PolicyFunction, RolloutFunction, ValueFunction};
use crate::search::{MctsSearch, SearchError, SearchStats};

/// Parallel MCTS front-end. Wraps a sequential search without using it.
pub struct ParallelMcts<S, P, V, R>
where
    S: GameState,
{
    search: MctsSearch<S, P, V, R>,
    num_threads: usize,
}

impl<S, P, V, R> ParallelMcts<S, P, V, R>
where
    S: GameState,
    P: PolicyFunction<S>,
    V: ValueFunction<S>,
    R: RolloutFunction<S>,
{
    pub fn new(search: MctsSearch<S, P, V, R>, num_threads: usize) -> Self {
        Self {
            search,
            num_threads,
        }
    }

    pub fn num_threads(&self) -> usize {
        self.num_threads
    }

    /// Always fails: parallel simulation is not implemented.
    pub fn run_simulations(&mut self, _count: u32, _max_depth: u32) -> Result<SearchStats, SearchError> {
        Err(SearchError::Unsupported("parallel search"))
    }

    /// Give back the sequential search, untouched.
    pub fn into_inner(self) -> MctsSearch<S, P, V, R> {
        self.search
    }
}

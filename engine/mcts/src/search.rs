//! MCTS search implementation.
//!
//! Implements the AlphaGo-style search loop:
//! 1. Selection: walk from the root picking the child with the best Q + u,
//!    expanding leaves on the way with policy priors
//! 2. Evaluation: score the final position with the value function and with
//!    a rollout
//! 3. Backup: refresh Q for every node visited, leaf first
//!
//! The engine owns the real game position. Simulations work on copies, and
//! only `commit_move` advances the real position (reusing the chosen subtree).

use engine_core::GameState;
use thiserror::Error;
use tracing::{debug, trace};

use crate::config::MctsConfig;
use crate::evaluator::{EvaluatorError, PolicyFunction, RolloutFunction, ValueFunction};
use crate::node::NodeId;
use crate::tree::{MctsTree, TreeError};

/// Errors that can occur during MCTS search.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Tree error: {0}")]
    TreeError(#[from] TreeError),

    #[error("Evaluator error: {0}")]
    EvaluatorError(#[from] EvaluatorError),

    #[error("No search performed: the root has no children")]
    NoSearchPerformed,

    #[error("Action {0} is not a child of the root")]
    UnknownAction(String),

    #[error("No legal moves available")]
    NoLegalMoves,

    #[error("Cannot evaluate an empty visited path")]
    EmptyPath,

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("{0} is not supported")]
    Unsupported(&'static str),
}

/// Result of an MCTS search.
#[derive(Debug, Clone)]
pub struct SearchResult<A> {
    /// Most visited root action
    pub action: A,

    /// Visit distribution over root actions
    pub policy: Vec<(A, f32)>,

    /// Q of the chosen child
    pub value: f32,

    /// Visit count of the chosen child
    pub visits: u32,

    /// Number of simulations performed
    pub simulations: u32,
}

/// Summary of one batch of simulations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub simulations: u32,
    /// Number of times the depth budget was extended
    pub depth_extensions: u32,
    /// Longest visited path
    pub max_depth_reached: usize,
    /// Arena size after the batch
    pub tree_nodes: usize,
}

/// MCTS search state.
pub struct MctsSearch<S, P, V, R>
where
    S: GameState,
{
    tree: MctsTree<S::Action>,
    state: S,
    policy: P,
    value_fn: V,
    rollout_fn: R,
    config: MctsConfig,
    depth_extensions: u32,
}

impl<S, P, V, R> MctsSearch<S, P, V, R>
where
    S: GameState,
    P: PolicyFunction<S>,
    V: ValueFunction<S>,
    R: RolloutFunction<S>,
{
    /// Create a new MCTS search rooted at the given game state.
    pub fn new(
        state: S,
        policy: P,
        value_fn: V,
        rollout_fn: R,
        config: MctsConfig,
    ) -> Result<Self, SearchError> {
        config.validate().map_err(SearchError::InvalidConfig)?;

        Ok(Self {
            tree: MctsTree::new(),
            state,
            policy,
            value_fn,
            rollout_fn,
            config,
            depth_extensions: 0,
        })
    }

    /// Run `config.num_simulations` simulations at `config.max_depth`, then
    /// pick the most visited root action.
    pub fn search(&mut self) -> Result<SearchResult<S::Action>, SearchError> {
        let stats = self.run_simulations(self.config.num_simulations, self.config.max_depth)?;
        let action = self.choose_move()?;

        let root = self.tree.get(self.tree.root());
        let child = root
            .child(&action)
            .map(|id| self.tree.get(id))
            .ok_or(SearchError::NoSearchPerformed)?;

        Ok(SearchResult {
            value: child.action_value,
            visits: child.visit_count,
            action,
            policy: self.tree.visit_distribution(),
            simulations: stats.simulations,
        })
    }

    /// Run `count` simulations, each selecting `max_depth` steps deep
    /// (plus any depth extensions).
    pub fn run_simulations(&mut self, count: u32, max_depth: u32) -> Result<SearchStats, SearchError> {
        let extensions_before = self.depth_extensions;
        let mut max_depth_reached = 0;

        for _ in 0..count {
            let (leaf_state, visited) = self.run_selection_phase(max_depth)?;
            self.evaluate_with_value_signal(&leaf_state, &visited)?;
            self.evaluate_with_rollout_signal(&leaf_state, &visited)?;

            max_depth_reached = max_depth_reached.max(visited.len());
            trace!(
                depth = visited.len(),
                leaf = visited[0].0,
                leaf_q = self.tree.get(visited[0]).action_value,
                "MCTS simulation complete"
            );
        }

        let stats = SearchStats {
            simulations: count,
            depth_extensions: self.depth_extensions - extensions_before,
            max_depth_reached,
            tree_nodes: self.tree.len(),
        };
        debug!(
            simulations = stats.simulations,
            depth_extensions = stats.depth_extensions,
            max_depth = stats.max_depth_reached,
            tree_nodes = stats.tree_nodes,
            "MCTS simulations finished"
        );
        Ok(stats)
    }

    /// Walk down from the root on a copy of the real state.
    ///
    /// At each step the current node is expanded if it is a leaf, its
    /// children's exploration bonuses are refreshed from the policy priors,
    /// and the best child is selected and visited. When the depth budget is
    /// spent and the last node has been visited more than
    /// `config.visit_threshold` times, the budget grows by
    /// `config.depth_extension` steps, unless the position there is already
    /// terminal. The walk also stops at positions without legal moves.
    ///
    /// A `max_depth` of 0 is rejected with `SearchError::InvalidConfig`.
    ///
    /// Returns the final hypothetical state and the visited nodes, most
    /// recently visited first.
    pub fn run_selection_phase(&mut self, max_depth: u32) -> Result<(S, Vec<NodeId>), SearchError> {
        if max_depth == 0 {
            return Err(SearchError::InvalidConfig(
                "max_depth must be at least 1".to_string(),
            ));
        }

        let mut state = self.state.clone();
        // The walk may end long before `max_depth` at a terminal position
        let mut visited = Vec::new();
        let mut current = self.tree.root();
        let mut remaining = max_depth;

        while remaining > 0 {
            let priors = self.policy.priors(&state)?;
            if priors.is_empty() {
                break;
            }

            if self.tree.get(current).is_leaf() {
                self.tree.expand(current, &priors);
            }
            self.tree.update_exploration_bonus(current, &priors);

            let (action, child) = self.tree.select_best(current)?;
            state.apply_move(&action);
            self.tree.get_mut(child).record_visit();
            visited.push(child);
            current = child;
            remaining -= 1;

            if remaining == 0
                && self.tree.get(child).visit_count > self.config.visit_threshold
                && !state.is_terminal()
            {
                remaining += self.config.depth_extension;
                self.depth_extensions += 1;
                debug!(
                    depth = visited.len(),
                    visits = self.tree.get(child).visit_count,
                    "Extending search depth"
                );
            }
        }

        if visited.is_empty() {
            return Err(SearchError::NoLegalMoves);
        }

        visited.reverse();
        Ok((state, visited))
    }

    /// Score `state` with the value function, record it on the most recently
    /// visited node and back up.
    pub fn evaluate_with_value_signal(&mut self, state: &S, visited: &[NodeId]) -> Result<(), SearchError> {
        let leaf = *visited.first().ok_or(SearchError::EmptyPath)?;
        let value = self.value_fn.value(state)?;
        self.tree.get_mut(leaf).record_value_evaluation(value);
        self.backup(visited)
    }

    /// Score `state` with a rollout, record it on the most recently visited
    /// node and back up.
    pub fn evaluate_with_rollout_signal(&mut self, state: &S, visited: &[NodeId]) -> Result<(), SearchError> {
        let leaf = *visited.first().ok_or(SearchError::EmptyPath)?;
        let outcome = self.rollout_fn.rollout(state)?;
        self.tree.get_mut(leaf).record_rollout_evaluation(outcome);
        self.backup(visited)
    }

    /// Refresh Q for each visited node in list order.
    ///
    /// Internal nodes average their children's current Q, so the list must
    /// run from the leaf towards the root.
    pub fn backup(&mut self, visited: &[NodeId]) -> Result<(), SearchError> {
        for &node_id in visited {
            self.tree.refresh_action_value(node_id, self.config.lambda)?;
        }
        Ok(())
    }

    /// Playing on past the search horizon with the rollout policy.
    /// Not implemented: the rollout function covers it.
    pub fn rollout_phase(&mut self, _state: &S) -> Result<f32, SearchError> {
        Err(SearchError::Unsupported("rollout phase beyond the search horizon"))
    }

    /// Most visited root action. Ties go to the child expanded first.
    pub fn choose_move(&self) -> Result<S::Action, SearchError> {
        self.tree
            .best_action()
            .map(|(action, _)| action)
            .ok_or(SearchError::NoSearchPerformed)
    }

    /// Play `action` on the real position and keep its subtree as the new
    /// tree. The old root and the other subtrees are released.
    pub fn commit_move(&mut self, action: &S::Action) -> Result<(), SearchError> {
        let released = self.tree.promote(action).map_err(|e| match e {
            TreeError::UnknownAction => SearchError::UnknownAction(format!("{:?}", action)),
            other => SearchError::TreeError(other),
        })?;
        self.state.apply_move(action);

        debug!(
            action = ?action,
            released,
            kept = self.tree.len(),
            "Committed move"
        );
        Ok(())
    }

    /// Start over from `state` with an empty tree.
    pub fn reset(&mut self, state: S) {
        self.tree = MctsTree::new();
        self.state = state;
    }

    /// Get the search tree (for inspection/debugging).
    pub fn tree(&self) -> &MctsTree<S::Action> {
        &self.tree
    }

    /// The real game position at the root.
    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn config(&self) -> &MctsConfig {
        &self.config
    }
}

/// Convenience function to run a single MCTS search.
pub fn run_mcts<S, P, V, R>(
    state: S,
    policy: P,
    value_fn: V,
    rollout_fn: R,
    config: MctsConfig,
) -> Result<SearchResult<S::Action>, SearchError>
where
    S: GameState,
    P: PolicyFunction<S>,
    V: ValueFunction<S>,
    R: RolloutFunction<S>,
{
    let mut search = MctsSearch::new(state, policy, value_fn, rollout_fn, config)?;
    search.search()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::{ConstantValue, RandomPriorPolicy, RandomRollout, UniformPolicy};
    use crate::test_util::LineGame;
    use games_tictactoe::{Action, State, PLAYER_X};

    type ConstantSearch<S> = MctsSearch<S, UniformPolicy, ConstantValue, ConstantValue>;

    /// Value function fixed at 0.5, rollouts fixed at 1.0.
    fn constant_search<S: GameState>(state: S, config: MctsConfig) -> ConstantSearch<S> {
        MctsSearch::new(
            state,
            UniformPolicy::new(),
            ConstantValue(0.5),
            ConstantValue(1.0),
            config,
        )
        .unwrap()
    }

    fn subtree_size<A: Clone + PartialEq>(tree: &MctsTree<A>, id: NodeId) -> usize {
        1 + tree
            .get(id)
            .children
            .iter()
            .map(|(_, child)| subtree_size(tree, *child))
            .sum::<usize>()
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let result = MctsSearch::new(
            LineGame::new(2, 5),
            UniformPolicy::new(),
            ConstantValue(0.0),
            ConstantValue(0.0),
            MctsConfig::default().with_lambda(2.0),
        );
        assert!(matches!(result, Err(SearchError::InvalidConfig(_))));
    }

    #[test]
    fn test_first_selection_follows_highest_prior() {
        let policy = |s: &LineGame| -> Vec<(u8, f32)> {
            if s.legal_moves().is_empty() {
                Vec::new()
            } else {
                vec![(0, 0.1), (1, 0.9)]
            }
        };
        let mut search = MctsSearch::new(
            LineGame::new(2, 10),
            policy,
            ConstantValue(0.0),
            ConstantValue(0.0),
            MctsConfig::default(),
        )
        .unwrap();

        let (state, visited) = search.run_selection_phase(1).unwrap();
        assert_eq!(state.moves, vec![1]);
        assert_eq!(visited.len(), 1);
        assert_eq!(search.tree().get(search.tree().root()).child(&1), Some(visited[0]));
    }

    #[test]
    fn test_selection_phase_visits_one_node_per_depth() {
        let mut search = MctsSearch::new(
            LineGame::new(3, 100),
            RandomPriorPolicy::new(42),
            ConstantValue(0.0),
            ConstantValue(0.0),
            MctsConfig::default(),
        )
        .unwrap();

        let (state, visited) = search.run_selection_phase(20).unwrap();

        assert_eq!(state.moves.len(), 20);
        assert_eq!(visited.len(), 20);
        for id in &visited {
            assert_eq!(search.tree().get(*id).visit_count, 1);
        }
        let mut distinct = visited.clone();
        distinct.sort_by_key(|id| id.0);
        distinct.dedup();
        assert_eq!(distinct.len(), 20);

        // Most recent first: the last node has no children yet, the first
        // selected node is a child of the root.
        assert!(search.tree().get(visited[0]).is_leaf());
        let root = search.tree().get(search.tree().root());
        assert!(root.children.iter().any(|(_, id)| *id == visited[19]));
    }

    #[test]
    fn test_selection_phase_leaves_real_state_untouched() {
        let mut search = constant_search(LineGame::new(2, 10), MctsConfig::default());
        search.run_selection_phase(5).unwrap();
        assert!(search.state().moves.is_empty());
    }

    #[test]
    fn test_selection_phase_stops_at_terminal_position() {
        let mut search = constant_search(LineGame::new(2, 3), MctsConfig::default());
        let (state, visited) = search.run_selection_phase(10).unwrap();

        assert_eq!(state.moves.len(), 3);
        assert_eq!(visited.len(), 3);
    }

    #[test]
    fn test_selection_phase_without_legal_moves() {
        let finished = State::from_moves(&[0, 3, 1, 4, 2]);
        let mut search = constant_search(finished, MctsConfig::default());

        assert!(matches!(
            search.run_selection_phase(5),
            Err(SearchError::NoLegalMoves)
        ));
    }

    #[test]
    fn test_depth_extension_after_threshold() {
        let config = MctsConfig::default().with_visit_threshold(2);
        let mut search = constant_search(LineGame::new(1, 100), config);

        let depths: Vec<usize> = (0..3)
            .map(|_| search.run_selection_phase(1).unwrap().1.len())
            .collect();

        // Third visit of the single root child exceeds the threshold
        assert_eq!(depths, vec![1, 1, 3]);
    }

    #[test]
    fn test_depth_extension_stats() {
        let config = MctsConfig::default().with_visit_threshold(2);
        let mut search = constant_search(LineGame::new(1, 100), config);

        let stats = search.run_simulations(5, 1).unwrap();

        assert_eq!(stats.simulations, 5);
        assert_eq!(stats.depth_extensions, 4);
        assert_eq!(stats.max_depth_reached, 5);
        assert_eq!(stats.tree_nodes, 6);
    }

    #[test]
    fn test_extension_boundary_with_default_threshold() {
        let mut search = constant_search(LineGame::new(1, 200), MctsConfig::default());

        // Visits 1 through 50 of the root child stay within the threshold
        for _ in 0..50 {
            assert_eq!(search.run_selection_phase(1).unwrap().1.len(), 1);
        }
        let root = search.tree().get(search.tree().root());
        assert_eq!(search.tree().get(root.children[0].1).visit_count, 50);

        // The 51st visit extends the walk by two steps
        let (state, visited) = search.run_selection_phase(1).unwrap();
        assert_eq!(visited.len(), 3);
        assert_eq!(state.moves.len(), 3);
        assert_eq!(search.tree().get(visited[2]).visit_count, 51);
    }

    #[test]
    fn test_no_extension_at_terminal_position() {
        let config = MctsConfig::default().with_visit_threshold(1);
        let mut search = constant_search(LineGame::new(1, 2), config);

        let stats = search.run_simulations(5, 2).unwrap();

        assert_eq!(stats.depth_extensions, 0);
        assert_eq!(stats.max_depth_reached, 2);
    }

    #[test]
    fn test_unbounded_depth_stops_at_terminal_position() {
        let mut search = constant_search(LineGame::new(2, 3), MctsConfig::default());

        let stats = search.run_simulations(1, u32::MAX).unwrap();

        assert_eq!(stats.max_depth_reached, 3);
        assert_eq!(stats.depth_extensions, 0);
    }

    #[test]
    fn test_zero_depth_is_rejected() {
        let mut search = constant_search(LineGame::new(2, 5), MctsConfig::default());

        assert!(matches!(
            search.run_selection_phase(0),
            Err(SearchError::InvalidConfig(_))
        ));
        assert!(matches!(
            search.run_simulations(3, 0),
            Err(SearchError::InvalidConfig(_))
        ));
        assert_eq!(search.tree().len(), 1);
    }

    #[test]
    fn test_no_extension_below_threshold() {
        let mut search = constant_search(LineGame::new(3, 100), MctsConfig::default());
        let stats = search.run_simulations(20, 4).unwrap();

        assert_eq!(stats.depth_extensions, 0);
        assert_eq!(stats.max_depth_reached, 4);
    }

    #[test]
    fn test_blended_leaf_value() {
        let mut search = constant_search(LineGame::new(2, 10), MctsConfig::default());
        search.run_simulations(1, 1).unwrap();

        let root = search.tree().get(search.tree().root());
        let leaf = search.tree().get(root.children[0].1);
        assert_eq!(leaf.visit_count, 1);
        // (1 - 0.5) * 0.5 / 1 + 0.5 * 1 / 1
        assert!((leaf.action_value - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_value_and_rollout_backups() {
        let mut search = constant_search(LineGame::new(2, 10), MctsConfig::default());
        let (state, visited) = search.run_selection_phase(2).unwrap();
        let (leaf, parent) = (visited[0], visited[1]);

        search.evaluate_with_value_signal(&state, &visited).unwrap();
        // leaf: 0.5 * 0.5 + 0.5 * 0, parent: mean(0.25, 0)
        assert!((search.tree().get(leaf).action_value - 0.25).abs() < 1e-6);
        assert!((search.tree().get(parent).action_value - 0.125).abs() < 1e-6);

        search.evaluate_with_rollout_signal(&state, &visited).unwrap();
        assert!((search.tree().get(leaf).action_value - 0.75).abs() < 1e-6);
        assert!((search.tree().get(parent).action_value - 0.375).abs() < 1e-6);

        // Only the leaf accumulates evaluations
        assert!(search.tree().get(parent).value_sum.abs() < 1e-6);
        assert!(search.tree().get(parent).rollout_sum.abs() < 1e-6);
    }

    #[test]
    fn test_evaluate_empty_path() {
        let mut search = constant_search(LineGame::new(2, 10), MctsConfig::default());
        let state = LineGame::new(2, 10);

        assert!(matches!(
            search.evaluate_with_value_signal(&state, &[]),
            Err(SearchError::EmptyPath)
        ));
        assert!(matches!(
            search.evaluate_with_rollout_signal(&state, &[]),
            Err(SearchError::EmptyPath)
        ));
    }

    #[test]
    fn test_backup_unvisited_leaf_fails() {
        let mut search = constant_search(LineGame::new(2, 10), MctsConfig::default());
        let root = search.tree().root();

        assert!(matches!(
            search.backup(&[root]),
            Err(SearchError::TreeError(TreeError::UnvisitedLeaf(_)))
        ));
    }

    #[test]
    fn test_root_children_visits_sum_to_simulations() {
        let mut search = MctsSearch::new(
            LineGame::new(3, 50),
            RandomPriorPolicy::new(3),
            ConstantValue(0.0),
            RandomRollout::new(1, 50, 3),
            MctsConfig::default(),
        )
        .unwrap();

        search.run_simulations(30, 3).unwrap();

        let stats = search.tree().stats();
        assert_eq!(stats.root_visits, 30);
    }

    #[test]
    fn test_choose_move_before_search_fails() {
        let search = constant_search(LineGame::new(2, 10), MctsConfig::default());
        assert!(matches!(
            search.choose_move(),
            Err(SearchError::NoSearchPerformed)
        ));
    }

    #[test]
    fn test_choose_move_is_a_root_child() {
        let mut search = constant_search(LineGame::new(4, 10), MctsConfig::default());
        search.run_simulations(25, 3).unwrap();

        let action = search.choose_move().unwrap();
        let root = search.tree().get(search.tree().root());
        assert!(root.child(&action).is_some());
    }

    #[test]
    fn test_commit_move_reuses_subtree() {
        let mut search = MctsSearch::new(
            LineGame::new(3, 20),
            RandomPriorPolicy::new(11),
            ConstantValue(0.0),
            RandomRollout::new(1, 20, 11),
            MctsConfig::default(),
        )
        .unwrap();
        search.run_simulations(40, 3).unwrap();

        let action = search.choose_move().unwrap();
        let child = search
            .tree()
            .get(search.tree().root())
            .child(&action)
            .unwrap();
        let kept = subtree_size(search.tree(), child);
        let child_visits = search.tree().get(child).visit_count;
        let mut expected = search.state().clone();
        expected.apply_move(&action);

        search.commit_move(&action).unwrap();

        assert_eq!(search.state(), &expected);
        assert_eq!(search.tree().len(), kept);
        assert_eq!(search.tree().get(search.tree().root()).visit_count, child_visits);

        // Search continues from the new root
        search.run_simulations(10, 3).unwrap();
        assert!(search.choose_move().is_ok());
    }

    #[test]
    fn test_commit_unknown_move() {
        let mut search = constant_search(LineGame::new(2, 10), MctsConfig::default());
        search.run_simulations(5, 2).unwrap();

        assert!(matches!(
            search.commit_move(&7),
            Err(SearchError::UnknownAction(_))
        ));
        assert!(search.state().moves.is_empty());
    }

    #[test]
    fn test_commit_before_search_fails() {
        let mut search = constant_search(LineGame::new(2, 10), MctsConfig::default());
        assert!(matches!(
            search.commit_move(&0),
            Err(SearchError::UnknownAction(_))
        ));
    }

    #[test]
    fn test_rollout_phase_unsupported() {
        let mut search = constant_search(LineGame::new(2, 10), MctsConfig::default());
        let state = LineGame::new(2, 10);
        assert!(matches!(
            search.rollout_phase(&state),
            Err(SearchError::Unsupported(_))
        ));
    }

    #[test]
    fn test_reset() {
        let mut search = constant_search(LineGame::new(2, 10), MctsConfig::default());
        search.run_simulations(5, 2).unwrap();

        let mut other = LineGame::new(2, 10);
        other.apply_move(&1);
        search.reset(other.clone());

        assert_eq!(search.state(), &other);
        assert_eq!(search.tree().len(), 1);
    }

    #[test]
    fn test_evaluator_error_propagates() {
        let mut search = MctsSearch::new(
            LineGame::new(2, 10),
            UniformPolicy::new(),
            |_: &LineGame| -> f32 { 0.0 },
            FailingRollout,
            MctsConfig::default(),
        )
        .unwrap();

        assert!(matches!(
            search.run_simulations(1, 1),
            Err(SearchError::EvaluatorError(_))
        ));
    }

    struct FailingRollout;

    impl RolloutFunction<LineGame> for FailingRollout {
        fn rollout(&mut self, _state: &LineGame) -> Result<f32, EvaluatorError> {
            Err(EvaluatorError::EvaluationFailed("rollout crashed".to_string()))
        }
    }

    #[test]
    fn test_tictactoe_basic_search() {
        let config = MctsConfig::for_testing();
        let result = run_mcts(
            State::new(),
            RandomPriorPolicy::new(42),
            ConstantValue(0.5),
            RandomRollout::new(PLAYER_X, 9, 42),
            config,
        )
        .unwrap();

        assert!(result.action.position() < 9);
        assert_eq!(result.simulations, 50);

        // Policy should sum to ~1.0
        let sum: f32 = result.policy.iter().map(|(_, p)| p).sum();
        assert!((sum - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_tictactoe_finds_winning_move() {
        // _ | _ | _
        // O | O | _
        // X | X | _
        //
        // X should play position 8 to win; it is the last legal move, so
        // tie-breaking alone cannot pick it
        let state = State::from_moves(&[6, 3, 7, 4]);
        let config = MctsConfig::default().with_simulations(200).with_max_depth(1);

        let mut search = MctsSearch::new(
            state,
            UniformPolicy::new(),
            ConstantValue(0.0),
            RandomRollout::new(PLAYER_X, 9, 42),
            config,
        )
        .unwrap();
        let result = search.search().unwrap();

        assert_eq!(result.action, Action::Place(8));
        assert!((result.value - 0.5).abs() < 1e-6);

        search.commit_move(&result.action).unwrap();
        assert!(search.state().is_terminal());
        assert_eq!(search.state().terminal_value(PLAYER_X), Some(1.0));
    }
}

//! MCTS tree node representation.
//!
//! Each node stands for the position reached by taking an action from its
//! parent. It carries the statistics used during selection: visit count,
//! the transient exploration bonus u(P), the combined action value Q, and the
//! running sums of the two leaf evaluation signals.

/// Index into the node arena. Using a newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// A node in the MCTS tree.
#[derive(Debug, Clone)]
pub struct MctsNode<A> {
    /// Number of times this node was reached during selection
    pub visit_count: u32,

    /// Exploration bonus u(P) = P / (1 + N).
    /// Recomputed by the parent before every selection.
    pub exploration_bonus: f32,

    /// Combined action value Q.
    pub action_value: f32,

    /// Sum of value function estimates recorded at this node.
    pub value_sum: f32,

    /// Sum of rollout outcomes recorded at this node.
    pub rollout_sum: f32,

    /// Children in expansion order: (action, NodeId) pairs.
    /// Empty until node is expanded.
    pub children: Vec<(A, NodeId)>,
}

impl<A> MctsNode<A> {
    /// Create an unvisited, unexpanded node.
    pub fn new() -> Self {
        Self {
            visit_count: 0,
            exploration_bonus: 0.0,
            action_value: 0.0,
            value_sum: 0.0,
            rollout_sum: 0.0,
            children: Vec::new(),
        }
    }

    /// Check if this is a leaf node (no expanded children).
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Selection score: Q + u.
    #[inline]
    pub fn score(&self) -> f32 {
        self.action_value + self.exploration_bonus
    }

    /// Set u from the prior supplied by the policy function.
    /// Decays towards zero as the node accumulates visits.
    #[inline]
    pub fn set_exploration_bonus(&mut self, prior: f32) {
        self.exploration_bonus = prior / (1.0 + self.visit_count as f32);
    }

    /// Count one more selection of this node.
    #[inline]
    pub fn record_visit(&mut self) {
        self.visit_count += 1;
    }

    /// Accumulate a value function estimate.
    #[inline]
    pub fn record_value_evaluation(&mut self, value: f32) {
        self.value_sum += value;
    }

    /// Accumulate a rollout outcome.
    #[inline]
    pub fn record_rollout_evaluation(&mut self, outcome: f32) {
        self.rollout_sum += outcome;
    }

    /// Blend the mean value estimate and the mean rollout outcome:
    /// `(1 - lambda) * value_sum / N + lambda * rollout_sum / N`.
    ///
    /// Returns `None` for an unvisited node, where both means are undefined.
    pub fn blended_value(&self, lambda: f32) -> Option<f32> {
        if self.visit_count == 0 {
            return None;
        }
        let n = self.visit_count as f32;
        Some((1.0 - lambda) * (self.value_sum / n) + lambda * (self.rollout_sum / n))
    }

    /// Find the child reached by `action`.
    pub fn child(&self, action: &A) -> Option<NodeId>
    where
        A: PartialEq,
    {
        self.children
            .iter()
            .find(|(a, _)| a == action)
            .map(|(_, id)| *id)
    }
}

impl<A> Default for MctsNode<A> {
    fn default() -> Self {
        Self::new()
    }
}

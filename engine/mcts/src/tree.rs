//! MCTS tree structure with arena allocation.
//!
//! The tree uses arena allocation for node storage. Nodes are stored in a
//! contiguous Vec and referenced by NodeId indices. The tree exclusively owns
//! every node: promoting a child to root rebuilds the arena from that child's
//! subtree, which releases the old root and all of its other descendants.

use thiserror::Error;

use crate::node::{MctsNode, NodeId};

/// Errors raised by tree operations whose preconditions do not hold.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("Cannot select a child of leaf node {0:?}")]
    SelectOnLeaf(NodeId),

    #[error("Cannot compute the action value of unvisited leaf node {0:?}")]
    UnvisitedLeaf(NodeId),

    #[error("Action is not a child of the root")]
    UnknownAction,
}

/// MCTS tree with arena-based node storage.
#[derive(Debug)]
pub struct MctsTree<A> {
    /// Arena storing all nodes
    nodes: Vec<MctsNode<A>>,

    /// Root node index (always 0: promotion compacts the arena)
    root: NodeId,
}

impl<A: Clone + PartialEq> MctsTree<A> {
    /// Create a tree holding a single unexpanded root.
    pub fn new() -> Self {
        Self {
            nodes: vec![MctsNode::new()],
            root: NodeId(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a reference to a node by ID.
    #[inline]
    pub fn get(&self, id: NodeId) -> &MctsNode<A> {
        &self.nodes[id.index()]
    }

    /// Get a mutable reference to a node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MctsNode<A> {
        &mut self.nodes[id.index()]
    }

    /// Allocate a new node and return its ID.
    pub fn allocate(&mut self, node: MctsNode<A>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Get the total number of nodes in the arena.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty (should never be true after construction).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the arena slice for read access.
    #[inline]
    pub fn arena(&self) -> &[MctsNode<A>] {
        &self.nodes
    }

    /// Create one child per `(action, prior)` pair, in order.
    ///
    /// Replaces any existing children; callers check `is_leaf` first. The
    /// replaced subtrees stay in the arena until the next `promote`.
    pub fn expand(&mut self, node_id: NodeId, priors: &[(A, f32)]) {
        let children = priors
            .iter()
            .map(|(action, _)| (action.clone(), self.allocate(MctsNode::new())))
            .collect();
        self.get_mut(node_id).children = children;
    }

    /// Refresh u(P) = P / (1 + N) on every child named in `priors`.
    /// Actions without a matching child are skipped.
    ///
    /// Priors normally arrive in expansion order, so the child at the same
    /// position is tried before searching all children.
    pub fn update_exploration_bonus(&mut self, node_id: NodeId, priors: &[(A, f32)]) {
        for (i, (action, prior)) in priors.iter().enumerate() {
            let node = self.get(node_id);
            let child_id = match node.children.get(i) {
                Some((child_action, id)) if child_action == action => Some(*id),
                _ => node.child(action),
            };
            if let Some(child_id) = child_id {
                self.get_mut(child_id).set_exploration_bonus(*prior);
            }
        }
    }

    /// Select the child maximizing Q + u.
    /// Ties go to the child expanded first.
    pub fn select_best(&self, node_id: NodeId) -> Result<(A, NodeId), TreeError> {
        let node = self.get(node_id);
        let mut best: Option<(&A, NodeId, f32)> = None;

        for (action, child_id) in &node.children {
            let score = self.get(*child_id).score();
            match best {
                Some((_, _, best_score)) if score <= best_score => {}
                _ => best = Some((action, *child_id, score)),
            }
        }

        best.map(|(action, id, _)| (action.clone(), id))
            .ok_or(TreeError::SelectOnLeaf(node_id))
    }

    /// Recompute Q for a node and return it.
    ///
    /// A leaf blends its two evaluation signals with weight `lambda` on the
    /// rollout mean and requires at least one visit. An internal node takes
    /// the plain mean of its children's current Q, without visit weighting.
    pub fn refresh_action_value(&mut self, node_id: NodeId, lambda: f32) -> Result<f32, TreeError> {
        let node = self.get(node_id);
        let q = if node.is_leaf() {
            node.blended_value(lambda)
                .ok_or(TreeError::UnvisitedLeaf(node_id))?
        } else {
            let total: f32 = node
                .children
                .iter()
                .map(|(_, id)| self.get(*id).action_value)
                .sum();
            total / node.children.len() as f32
        };

        self.get_mut(node_id).action_value = q;
        Ok(q)
    }

    /// Get the most visited root action.
    /// Returns (action, visit_count) or None if the root has no children.
    /// Ties go to the child expanded first.
    pub fn best_action(&self) -> Option<(A, u32)> {
        let root = self.get(self.root);
        let mut best: Option<(&A, u32)> = None;

        for (action, id) in &root.children {
            let visits = self.get(*id).visit_count;
            match best {
                Some((_, best_visits)) if visits <= best_visits => {}
                _ => best = Some((action, visits)),
            }
        }

        best.map(|(action, visits)| (action.clone(), visits))
    }

    /// Get visit count distribution over root children (for training targets).
    /// Returns (action, visit_fraction) pairs, or an empty Vec before any visit.
    pub fn visit_distribution(&self) -> Vec<(A, f32)> {
        let root = self.get(self.root);
        let total_visits: u32 = root
            .children
            .iter()
            .map(|(_, id)| self.get(*id).visit_count)
            .sum();

        if total_visits == 0 {
            return Vec::new();
        }

        root.children
            .iter()
            .map(|(action, id)| {
                let visits = self.get(*id).visit_count;
                (action.clone(), visits as f32 / total_visits as f32)
            })
            .collect()
    }

    /// Make the root child reached by `action` the new root.
    ///
    /// The arena is rebuilt breadth-first from the promoted subtree, so every
    /// other node (old root, sibling subtrees, orphans) is dropped and all
    /// previously issued `NodeId`s become invalid. Returns the number of
    /// nodes released.
    pub fn promote(&mut self, action: &A) -> Result<usize, TreeError> {
        let new_root = self
            .get(self.root)
            .child(action)
            .ok_or(TreeError::UnknownAction)?;

        let mut old = std::mem::take(&mut self.nodes);
        let mut nodes = vec![std::mem::take(&mut old[new_root.index()])];

        // `nodes` doubles as the BFS queue: ids are assigned in push order
        let mut next = 0;
        while next < nodes.len() {
            let children = std::mem::take(&mut nodes[next].children);
            let mut remapped = Vec::with_capacity(children.len());
            for (child_action, old_id) in children {
                let id = NodeId(nodes.len() as u32);
                nodes.push(std::mem::take(&mut old[old_id.index()]));
                remapped.push((child_action, id));
            }
            nodes[next].children = remapped;
            next += 1;
        }

        let released = old.len() - nodes.len();
        self.nodes = nodes;
        self.root = NodeId(0);
        Ok(released)
    }

    /// Get statistics about the tree for debugging.
    pub fn stats(&self) -> TreeStats {
        let root = self.get(self.root);
        TreeStats {
            total_nodes: self.nodes.len(),
            root_visits: root
                .children
                .iter()
                .map(|(_, id)| self.get(*id).visit_count)
                .sum(),
            root_value: root.action_value,
            max_depth: self.compute_max_depth(self.root, 0),
        }
    }

    fn compute_max_depth(&self, node_id: NodeId, current_depth: u32) -> u32 {
        let node = self.get(node_id);
        if node.children.is_empty() {
            return current_depth;
        }

        node.children
            .iter()
            .map(|(_, id)| self.compute_max_depth(*id, current_depth + 1))
            .max()
            .unwrap_or(current_depth)
    }
}

impl<A: Clone + PartialEq> Default for MctsTree<A> {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics about an MCTS tree.
#[derive(Debug, Clone)]
pub struct TreeStats {
    pub total_nodes: usize,
    /// Sum of the root children's visit counts (the root itself is never selected)
    pub root_visits: u32,
    pub root_value: f32,
    pub max_depth: u32,
}

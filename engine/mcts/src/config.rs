//! MCTS configuration parameters.

/// Configuration for Monte Carlo Tree Search.
#[derive(Debug, Clone, PartialEq)]
pub struct MctsConfig {
    /// Number of simulations to run per search.
    pub num_simulations: u32,

    /// Nominal number of selection steps per simulation (L).
    pub max_depth: u32,

    /// Mixing weight between the two leaf evaluation signals.
    /// 0.0 = value function only, 1.0 = rollouts only. AlphaGo uses 0.5.
    pub lambda: f32,

    /// Visit count above which the last selected node is searched deeper
    /// instead of being evaluated when the depth budget runs out.
    pub visit_threshold: u32,

    /// Extra selection steps granted each time the threshold is crossed.
    pub depth_extension: u32,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            num_simulations: 800,
            max_depth: 20,
            lambda: 0.5,
            visit_threshold: 50,
            depth_extension: 2,
        }
    }
}

impl MctsConfig {
    /// Create config for evaluation/inference.
    pub fn for_evaluation() -> Self {
        Self {
            num_simulations: 1600,
            ..Self::default()
        }
    }

    /// Create a fast config for testing.
    pub fn for_testing() -> Self {
        Self {
            num_simulations: 50,
            max_depth: 5,
            ..Self::default()
        }
    }

    /// Builder pattern: set number of simulations.
    pub fn with_simulations(mut self, n: u32) -> Self {
        self.num_simulations = n;
        self
    }

    /// Builder pattern: set nominal search depth.
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    /// Builder pattern: set the value/rollout mixing weight.
    pub fn with_lambda(mut self, lambda: f32) -> Self {
        self.lambda = lambda;
        self
    }

    /// Builder pattern: set the depth extension visit threshold.
    pub fn with_visit_threshold(mut self, threshold: u32) -> Self {
        self.visit_threshold = threshold;
        self
    }

    /// Builder pattern: set the number of steps added per extension.
    pub fn with_depth_extension(mut self, steps: u32) -> Self {
        self.depth_extension = steps;
        self
    }

    /// Check parameter ranges. Returns a description of the first problem.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.lambda) {
            return Err(format!("lambda must be within [0, 1], got {}", self.lambda));
        }
        if self.max_depth == 0 {
            return Err("max_depth must be at least 1".to_string());
        }
        Ok(())
    }
}

//! Evaluator traits for position evaluation.
//!
//! The search consumes three independent strategies:
//! - a policy function giving a prior for every legal action,
//! - a value function giving a scalar estimate of a position,
//! - a rollout function playing the position out and returning the outcome.
//!
//! In AlphaGo these are neural networks and a fast rollout policy. Each trait
//! is implemented for plain closures, and a few simple strategies are
//! provided for testing and for the self-play runner.

use engine_core::{GameState, Player};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use thiserror::Error;

/// Errors that can occur during evaluation.
#[derive(Debug, Error)]
pub enum EvaluatorError {
    #[error("Evaluation failed: {0}")]
    EvaluationFailed(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Prior probabilities over the legal actions of a position.
///
/// The returned pairs must cover exactly the legal actions, in a stable
/// order. Priors lie in [0, 1] but need not sum to 1.
pub trait PolicyFunction<S: GameState> {
    fn priors(&mut self, state: &S) -> Result<Vec<(S::Action, f32)>, EvaluatorError>;
}

/// Scalar estimate of a position, from the perspective baked into the state.
pub trait ValueFunction<S: GameState> {
    fn value(&mut self, state: &S) -> Result<f32, EvaluatorError>;
}

/// Outcome of playing a position out, same perspective as `ValueFunction`.
pub trait RolloutFunction<S: GameState> {
    fn rollout(&mut self, state: &S) -> Result<f32, EvaluatorError>;
}

impl<S, F> PolicyFunction<S> for F
where
    S: GameState,
    F: FnMut(&S) -> Vec<(S::Action, f32)>,
{
    fn priors(&mut self, state: &S) -> Result<Vec<(S::Action, f32)>, EvaluatorError> {
        Ok(self(state))
    }
}

impl<S, F> ValueFunction<S> for F
where
    S: GameState,
    F: FnMut(&S) -> f32,
{
    fn value(&mut self, state: &S) -> Result<f32, EvaluatorError> {
        Ok(self(state))
    }
}

/// Wraps a closure as a rollout strategy.
///
/// Rollouts and value estimates share the signature `FnMut(&S) -> f32`, so a
/// closure can only get one of the two blanket impls; this newtype provides
/// the rollout one.
pub struct RolloutFn<F>(pub F);

impl<S, F> RolloutFunction<S> for RolloutFn<F>
where
    S: GameState,
    F: FnMut(&S) -> f32,
{
    fn rollout(&mut self, state: &S) -> Result<f32, EvaluatorError> {
        Ok((self.0)(state))
    }
}

/// Uniform policy that assigns equal probability to all legal moves.
#[derive(Debug, Clone, Default)]
pub struct UniformPolicy;

impl UniformPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl<S: GameState> PolicyFunction<S> for UniformPolicy {
    fn priors(&mut self, state: &S) -> Result<Vec<(S::Action, f32)>, EvaluatorError> {
        let moves = state.legal_moves();
        if moves.is_empty() {
            return Ok(Vec::new());
        }

        let prob = 1.0 / moves.len() as f32;
        Ok(moves.into_iter().map(|m| (m, prob)).collect())
    }
}

/// Policy that draws an independent uniform prior in [0, 1) per legal move.
/// Stands in for an untrained network; seeded for reproducibility.
#[derive(Debug, Clone)]
pub struct RandomPriorPolicy {
    rng: ChaCha20Rng,
}

impl RandomPriorPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl<S: GameState> PolicyFunction<S> for RandomPriorPolicy {
    fn priors(&mut self, state: &S) -> Result<Vec<(S::Action, f32)>, EvaluatorError> {
        Ok(state
            .legal_moves()
            .into_iter()
            .map(|m| (m, self.rng.gen::<f32>()))
            .collect())
    }
}

/// Value function returning the same estimate for every position.
#[derive(Debug, Clone, Copy)]
pub struct ConstantValue(pub f32);

impl<S: GameState> ValueFunction<S> for ConstantValue {
    fn value(&mut self, _state: &S) -> Result<f32, EvaluatorError> {
        Ok(self.0)
    }
}

impl<S: GameState> RolloutFunction<S> for ConstantValue {
    fn rollout(&mut self, _state: &S) -> Result<f32, EvaluatorError> {
        Ok(self.0)
    }
}

/// Random rollout that plays uniformly random legal moves to a terminal state.
///
/// Scores the final position for a fixed `perspective` player, normally the
/// player running the search, since the search maximizes Q at every depth.
/// Returns 0.0 when `max_moves` is reached first.
#[derive(Debug, Clone)]
pub struct RandomRollout {
    /// Player the outcome is reported for
    pub perspective: Player,
    /// Maximum rollout length to prevent endless games
    pub max_moves: u32,
    rng: ChaCha20Rng,
}

impl RandomRollout {
    pub fn new(perspective: Player, max_moves: u32, seed: u64) -> Self {
        Self {
            perspective,
            max_moves,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl<S: GameState> RolloutFunction<S> for RandomRollout {
    fn rollout(&mut self, state: &S) -> Result<f32, EvaluatorError> {
        let mut playout = state.clone();

        for _ in 0..self.max_moves {
            if let Some(outcome) = playout.terminal_value(self.perspective) {
                return Ok(outcome);
            }
            let moves = playout.legal_moves();
            if moves.is_empty() {
                return Err(EvaluatorError::InvalidState(
                    "non-terminal position without legal moves".to_string(),
                ));
            }
            let pick = self.rng.gen_range(0..moves.len());
            playout.apply_move(&moves[pick]);
        }

        Ok(playout.terminal_value(self.perspective).unwrap_or(0.0))
    }
}

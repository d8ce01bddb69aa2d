//! Self-play loop.
//!
//! The search side keeps one `MctsSearch` per game and carries its tree from
//! move to move with `commit_move`. When a move is missing from the tree (the
//! search has not looked at it yet) the engine is rebuilt from the current
//! position instead.

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use engine_core::{GameState, Player};
use games_tictactoe::{opponent, Action, State, PLAYER_O, PLAYER_X};
use mcts::{ConstantValue, MctsSearch, RandomRollout, SearchError, UniformPolicy};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info};

use crate::config::Config;

type Engine = MctsSearch<State, UniformPolicy, ConstantValue, RandomRollout>;

/// Who plays against the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opponent {
    /// Uniformly random legal moves
    Random,
    /// A second, independent search
    Mcts,
}

impl FromStr for Opponent {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(Opponent::Random),
            "mcts" => Ok(Opponent::Mcts),
            other => Err(anyhow!(
                "unknown opponent '{}', expected random or mcts",
                other
            )),
        }
    }
}

impl fmt::Display for Opponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Opponent::Random => write!(f, "random"),
            Opponent::Mcts => write!(f, "mcts"),
        }
    }
}

/// Result of a finished game, seen from the search side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
    Draw,
}

/// One played game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    /// Player the search side controlled
    pub mcts_player: Player,
    pub moves: Vec<Action>,
    pub outcome: Outcome,
    /// Moves absorbed into an existing tree
    pub tree_reuses: u32,
    /// Moves that forced an engine rebuild
    pub tree_rebuilds: u32,
    pub depth_extensions: u32,
}

/// Totals over a self-play run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub games: u32,
    pub mcts_wins: u32,
    pub opponent_wins: u32,
    pub draws: u32,
    pub tree_reuses: u32,
    pub tree_rebuilds: u32,
}

impl Summary {
    fn record(&mut self, game: &GameRecord) {
        self.games += 1;
        match game.outcome {
            Outcome::Win => self.mcts_wins += 1,
            Outcome::Loss => self.opponent_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
        self.tree_reuses += game.tree_reuses;
        self.tree_rebuilds += game.tree_rebuilds;
    }
}

/// Runs games according to a validated [`Config`].
pub struct SelfPlay {
    config: Config,
    opponent: Opponent,
    rng: ChaCha20Rng,
}

/// One side of a game.
enum Side {
    Search(Engine),
    Random,
}

impl SelfPlay {
    pub fn new(config: Config) -> Result<Self> {
        let opponent = config.opponent_kind()?;
        let rng = ChaCha20Rng::seed_from_u64(config.seed);
        Ok(Self {
            config,
            opponent,
            rng,
        })
    }

    /// Play `config.games` games. The search side alternates between X and O.
    pub fn run(&mut self) -> Result<Summary> {
        let mut summary = Summary::default();

        for game_idx in 0..self.config.games {
            let record = self.play_game(game_idx)?;
            info!(
                game = game_idx + 1,
                mcts_player = record.mcts_player,
                outcome = ?record.outcome,
                moves = record.moves.len(),
                tree_reuses = record.tree_reuses,
                tree_rebuilds = record.tree_rebuilds,
                depth_extensions = record.depth_extensions,
                "Game finished"
            );
            summary.record(&record);
        }

        Ok(summary)
    }

    /// Play a single game from the empty board.
    pub fn play_game(&mut self, game_idx: u32) -> Result<GameRecord> {
        let mcts_player = if game_idx % 2 == 0 { PLAYER_X } else { PLAYER_O };
        let base_seed = self
            .config
            .seed
            .wrapping_add(u64::from(game_idx).wrapping_mul(2));

        let mut state = State::new();
        let mut sides = [
            (mcts_player, Side::Search(self.new_engine(state, mcts_player, base_seed)?)),
            (
                opponent(mcts_player),
                match self.opponent {
                    Opponent::Random => Side::Random,
                    Opponent::Mcts => Side::Search(self.new_engine(
                        state,
                        opponent(mcts_player),
                        base_seed.wrapping_add(1),
                    )?),
                },
            ),
        ];

        let mut moves = Vec::with_capacity(9);
        let mut tree_reuses = 0;
        let mut tree_rebuilds = 0;
        let mut depth_extensions = 0;

        while !state.is_done() {
            let to_move = state.current_player();
            let action = {
                let (_, side) = sides
                    .iter_mut()
                    .find(|(player, _)| *player == to_move)
                    .ok_or_else(|| anyhow!("no side plays as player {}", to_move))?;
                match side {
                    Side::Search(engine) => {
                        let stats = engine.run_simulations(
                            self.config.num_simulations,
                            self.config.max_depth,
                        )?;
                        depth_extensions += stats.depth_extensions;
                        engine.choose_move()?
                    }
                    Side::Random => self.random_move(&state)?,
                }
            };

            state.apply_move(&action);
            moves.push(action);
            debug!(game = game_idx + 1, player = to_move, action = ?action, "Move played");

            for (_, side) in sides.iter_mut() {
                if let Side::Search(engine) = side {
                    if advance(engine, &action, &state)? {
                        tree_reuses += 1;
                    } else {
                        tree_rebuilds += 1;
                    }
                }
            }
        }

        let outcome = match state.terminal_value(mcts_player) {
            Some(v) if v > 0.0 => Outcome::Win,
            Some(v) if v < 0.0 => Outcome::Loss,
            _ => Outcome::Draw,
        };

        Ok(GameRecord {
            mcts_player,
            moves,
            outcome,
            tree_reuses,
            tree_rebuilds,
            depth_extensions,
        })
    }

    fn new_engine(&self, state: State, player: Player, seed: u64) -> Result<Engine> {
        let engine = MctsSearch::new(
            state,
            UniformPolicy::new(),
            ConstantValue(0.0),
            RandomRollout::new(player, self.config.rollout_moves, seed),
            self.config.mcts_config(),
        )?;
        Ok(engine)
    }

    fn random_move(&mut self, state: &State) -> Result<Action> {
        let moves = state.legal_moves();
        if moves.is_empty() {
            return Err(anyhow!("no legal moves in a running game"));
        }
        Ok(moves[self.rng.gen_range(0..moves.len())])
    }
}

/// Move `engine` past `action`. Returns true when the existing subtree was
/// kept, false when the engine had to start over from `state`.
fn advance(engine: &mut Engine, action: &Action, state: &State) -> Result<bool> {
    match engine.commit_move(action) {
        Ok(()) => Ok(true),
        Err(SearchError::UnknownAction(_)) => {
            engine.reset(*state);
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}

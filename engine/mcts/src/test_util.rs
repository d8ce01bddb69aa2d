//! Test helpers: a deterministic game with configurable width and length.

use engine_core::{GameState, Player};

/// Players alternate picking a number in `0..branching` until `horizon`
/// moves have been played. Player 1 wins if the sum is even, player 2 if odd.
///
/// Unlike tic-tac-toe the game can be made arbitrarily long, which the
/// depth tests need.
#[derive(Debug, Clone, PartialEq)]
pub struct LineGame {
    pub branching: u8,
    pub horizon: usize,
    pub moves: Vec<u8>,
}

impl LineGame {
    pub fn new(branching: u8, horizon: usize) -> Self {
        Self {
            branching,
            horizon,
            moves: Vec::new(),
        }
    }
}

impl GameState for LineGame {
    type Action = u8;

    fn legal_moves(&self) -> Vec<u8> {
        if self.moves.len() >= self.horizon {
            return Vec::new();
        }
        (0..self.branching).collect()
    }

    fn apply_move(&mut self, action: &u8) {
        self.moves.push(*action);
    }

    fn current_player(&self) -> Player {
        1 + (self.moves.len() % 2) as Player
    }

    fn terminal_value(&self, player: Player) -> Option<f32> {
        if self.moves.len() < self.horizon {
            return None;
        }
        let sum: u32 = self.moves.iter().map(|&m| m as u32).sum();
        let winner = if sum % 2 == 0 { 1 } else { 2 };
        Some(if player == winner { 1.0 } else { -1.0 })
    }
}

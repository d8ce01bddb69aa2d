//! TicTacToe game implementation for the search engine
//!
//! This crate provides a small, complete `GameState` implementation used by
//! the engine's tests, benchmarks and the self-play runner.
//!
//! # Usage
//!
//! ```rust
//! use engine_core::GameState;
//! use games_tictactoe::{Action, State};
//!
//! let mut state = State::new();
//! state.apply_move(&Action::Place(4));
//! assert_eq!(state.legal_moves().len(), 8);
//! ```

use std::fmt;

use engine_core::{GameState, Player};

/// Player X moves first.
pub const PLAYER_X: Player = 1;
/// Player O moves second.
pub const PLAYER_O: Player = 2;

/// Winning positions (rows, columns, diagonals)
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// TicTacToe game state
///
/// Represents the complete state of a TicTacToe game including the board,
/// current player, and winner information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    /// Board representation: 0=empty, 1=X, 2=O
    board: [u8; 9],
    /// Current player: 1=X, 2=O
    current_player: u8,
    /// Winner: 0=none/ongoing, 1=X, 2=O, 3=draw
    winner: u8,
}

impl State {
    /// Create a new initial game state
    pub fn new() -> Self {
        Self {
            board: [0; 9],
            current_player: PLAYER_X,
            winner: 0,
        }
    }

    /// Build a position by playing `positions` in order from the empty board.
    pub fn from_moves(positions: &[u8]) -> Self {
        positions
            .iter()
            .fold(Self::new(), |state, &pos| state.make_move(pos))
    }

    /// Check if the game is over
    pub fn is_done(&self) -> bool {
        self.winner != 0
    }

    /// Winner: 0=none/ongoing, 1=X, 2=O, 3=draw
    pub fn winner(&self) -> u8 {
        self.winner
    }

    /// Cell contents: 0=empty, 1=X, 2=O
    pub fn cell(&self, position: u8) -> u8 {
        self.board[position as usize]
    }

    /// Bit-mask representation of legal moves.
    ///
    /// Bits 0-8 correspond to board positions 0-8. A bit set to 1 indicates the
    /// position is currently legal. When the game is finished the mask is zeroed.
    pub fn legal_moves_mask(&self) -> u16 {
        if self.is_done() {
            return 0;
        }

        self.board
            .iter()
            .enumerate()
            .fold(0u16, |mask, (idx, cell)| {
                if *cell == 0 {
                    mask | (1u16 << idx)
                } else {
                    mask
                }
            })
    }

    /// Make a move and return the new state
    pub fn make_move(&self, position: u8) -> State {
        if self.is_done() || position >= 9 || self.board[position as usize] != 0 {
            return *self; // Invalid move, return unchanged state
        }

        let mut new_state = *self;
        new_state.board[position as usize] = self.current_player;
        new_state.winner = Self::check_winner(&new_state.board);

        if new_state.winner == 0 {
            new_state.current_player = opponent(self.current_player);
        }

        new_state
    }

    fn check_winner(board: &[u8; 9]) -> u8 {
        for line in &LINES {
            let [a, b, c] = *line;
            if board[a] != 0 && board[a] == board[b] && board[b] == board[c] {
                return board[a];
            }
        }

        if board.iter().all(|&cell| cell != 0) {
            return 3; // Draw
        }

        0
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.board.chunks(3) {
            let line: String = row
                .iter()
                .map(|cell| match cell {
                    1 => 'X',
                    2 => 'O',
                    _ => '.',
                })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// The other player.
pub fn opponent(player: Player) -> Player {
    if player == PLAYER_X {
        PLAYER_O
    } else {
        PLAYER_X
    }
}

/// TicTacToe action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Place a piece at the given position (0-8)
    Place(u8),
}

impl Action {
    /// Get the position for this action
    pub fn position(&self) -> u8 {
        match self {
            Action::Place(pos) => *pos,
        }
    }
}

impl GameState for State {
    type Action = Action;

    fn legal_moves(&self) -> Vec<Action> {
        if self.is_done() {
            return Vec::new();
        }

        (0..9u8)
            .filter(|&pos| self.board[pos as usize] == 0)
            .map(Action::Place)
            .collect()
    }

    fn apply_move(&mut self, action: &Action) {
        *self = self.make_move(action.position());
    }

    fn current_player(&self) -> Player {
        self.current_player
    }

    fn terminal_value(&self, player: Player) -> Option<f32> {
        match self.winner {
            0 => None,
            3 => Some(0.0),
            winner if winner == player => Some(1.0),
            _ => Some(-1.0),
        }
    }
}

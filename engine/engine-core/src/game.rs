//! Game state trait consumed by the search engine.
//!
//! The search never looks inside a position. It only copies it, applies moves
//! to the copy, asks for the legal moves and, at the end of a playout, asks
//! who won. Everything else (board layout, captures, scoring) stays behind
//! this trait.

use std::fmt::Debug;

/// Player identifier. Games number their players from 1.
pub type Player = u8;

/// A mutable game position.
///
/// `Clone` is the copy operation: a clone must be fully independent of the
/// original so that hypothetical moves never leak into the real game.
///
/// # Example
///
/// ```rust
/// use engine_core::{GameState, Player};
///
/// #[derive(Debug, Clone)]
/// struct Countdown {
///     left: u8,
///     to_play: Player,
/// }
///
/// impl GameState for Countdown {
///     type Action = u8;
///
///     fn legal_moves(&self) -> Vec<u8> {
///         (1..=self.left.min(2)).collect()
///     }
///
///     fn apply_move(&mut self, action: &u8) {
///         self.left -= *action;
///         self.to_play = 3 - self.to_play;
///     }
///
///     fn current_player(&self) -> Player {
///         self.to_play
///     }
///
///     fn terminal_value(&self, player: Player) -> Option<f32> {
///         // The player who took the last stone won.
///         (self.left == 0).then(|| if player == self.to_play { -1.0 } else { 1.0 })
///     }
/// }
///
/// let mut game = Countdown { left: 3, to_play: 1 };
/// game.apply_move(&2);
/// assert_eq!(game.legal_moves(), vec![1]);
/// assert!(!game.is_terminal());
/// ```
pub trait GameState: Clone + Debug {
    /// Move type. Compared by equality when the search looks up a child.
    type Action: Clone + PartialEq + Debug;

    /// Legal moves in a stable order. Empty once the game is over.
    fn legal_moves(&self) -> Vec<Self::Action>;

    /// Apply a move in place.
    ///
    /// Callers only pass moves previously returned by `legal_moves`.
    fn apply_move(&mut self, action: &Self::Action);

    /// Player whose turn it is.
    fn current_player(&self) -> Player;

    /// Final result from `player`'s perspective (+1 win, -1 loss, 0 draw),
    /// or `None` while the game is still running.
    fn terminal_value(&self, player: Player) -> Option<f32>;

    /// Whether the game has finished.
    fn is_terminal(&self) -> bool {
        self.terminal_value(self.current_player()).is_some()
    }
}

//! Error types shared by the board and the game state machine.

use thiserror::Error;

/// Errors produced by board construction and round processing.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The requested dimensions and mine count cannot form a playable board.
    #[error("invalid board configuration: {width}x{height} with {mines} mines")]
    InvalidConfiguration {
        width: usize,
        height: usize,
        mines: usize,
    },

    /// A decision referenced a cell outside the grid. The whole decision is
    /// rejected and the game state is unchanged.
    #[error("position ({x}, {y}) is outside the board")]
    OutOfBounds { x: usize, y: usize },

    /// `play_round` was called after the game reached a terminal outcome.
    #[error("game is already finished")]
    GameFinished,
}

pub type Result<T> = std::result::Result<T, GameError>;

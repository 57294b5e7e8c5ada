//! Error types for the tic-tac-toe crate

use thiserror::Error;

/// Main error type for the crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("game already over: no legal move to choose")]
    GameOver,

    #[error("AI and human cannot play the same mark")]
    SameSide,

    #[error("not your turn")]
    NotYourTurn,

    #[error("invalid move: cell index {index} is already occupied")]
    CellOccupied { index: usize },

    #[error("invalid move: cell index {index} is outside the board (expected 0-8)")]
    CellOutOfRange { index: usize },

    #[error("invalid move: position {number} is outside 1-9")]
    MoveOutOfRange { number: i64 },

    #[error("'{input}' is not a number, enter 1-9")]
    NotANumber { input: String },

    #[error("board string has {got} cells, expected {expected}")]
    InvalidBoardLength { expected: usize, got: usize },

    #[error("invalid character '{character}' at position {position} in board string")]
    InvalidCellCharacter { character: char, position: usize },

    #[error("unknown search type '{name}' (expected 'minimax' or 'alphabeta')")]
    UnknownSearchType { name: String },

    #[error("unknown player '{name}' (expected 'X' or 'O')")]
    UnknownPlayer { name: String },

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, Error>;

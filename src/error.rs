//! Error types for input handling and the turn loop.
//!
//! The search core never fails on valid input; these errors belong to the
//! glue that validates moves and parses text before it reaches the core.

use thiserror::Error;

use crate::board::Player;

/// Main error type for the crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("'{input}' is not a cell (use a letter from a to i)")]
    InvalidCell { input: String },

    #[error("cell index {index} is off the board")]
    OutOfRange { index: usize },

    #[error("cell {index} is already taken")]
    Occupied { index: usize },

    #[error("it is not {player}'s turn")]
    OutOfTurn { player: Player },

    #[error("game already over")]
    GameOver,

    #[error("board string has {got} cells, expected {expected} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            operation: operation.into(),
            source,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

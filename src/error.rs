//! Error types for the noughts crate

use std::fmt;

use thiserror::Error;

/// Why a move was refused by the rules engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    /// Index outside 0-8
    OutOfRange,
    /// Target cell already holds a mark
    Occupied,
    /// The board already has a winner or is full
    GameOver,
}

impl fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            IllegalMoveReason::OutOfRange => "is out of bounds (must be 0-8)",
            IllegalMoveReason::Occupied => "is already occupied",
            IllegalMoveReason::GameOver => "cannot be played because the game is over",
        };
        f.write_str(text)
    }
}

/// Main error type for the noughts crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("illegal move: position {position} {reason}")]
    IllegalMove {
        position: usize,
        reason: IllegalMoveReason,
    },

    #[error("search requested on a finished game:\n{board}")]
    SearchOnFinishedGame { board: String },

    #[error("move not accepted while the session is {phase}")]
    WrongPhase { phase: String },

    #[error("no valid moves available")]
    NoValidMoves,

    #[error("game result recorded before the game finished: {context}")]
    GameNotFinished { context: String },

    #[error("board string has wrong length: expected {expected} cells, got {got} in '{context}'")]
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

    #[error("invalid piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

//! Rules engine: win/draw detection, move legality and move application.
//!
//! Everything here is a pure function of the board passed in. `Outcome` is
//! never stored anywhere; callers recompute it from the board after every
//! move.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{
    board::{Board, Mark},
    lines::LineAnalyzer,
};
use crate::error::IllegalMoveReason;

/// Classification of a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Win(Mark),
    Draw,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Terminal score from O's point of view: +1 O won, -1 X won, 0 draw.
    pub fn score(self) -> Option<i8> {
        match self {
            Outcome::Win(Mark::O) => Some(1),
            Outcome::Win(Mark::X) => Some(-1),
            Outcome::Draw => Some(0),
            Outcome::InProgress => None,
        }
    }

    /// End-of-game banner shown to the player
    pub fn message(self) -> Option<&'static str> {
        match self {
            Outcome::Win(Mark::X) => Some("X Wins!"),
            Outcome::Win(Mark::O) => Some("O Wins!"),
            Outcome::Draw => Some("It's a Draw!"),
            Outcome::InProgress => None,
        }
    }
}

/// Classify the board.
///
/// Lines are checked in `WINNING_LINES` order and the first complete one
/// decides the winner. A full board without a line is a draw.
pub fn winner(board: &Board) -> Outcome {
    if let Some((_, mark)) = LineAnalyzer::completed_line(&board.cells) {
        Outcome::Win(mark)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

/// Why `index` cannot be played on `board`, or `None` if it can
fn illegal_reason(board: &Board, index: usize) -> Option<IllegalMoveReason> {
    if index >= Board::SIZE {
        Some(IllegalMoveReason::OutOfRange)
    } else if !board.is_empty(index) {
        Some(IllegalMoveReason::Occupied)
    } else if winner(board).is_terminal() {
        Some(IllegalMoveReason::GameOver)
    } else {
        None
    }
}

/// True iff `index` is on the board, empty, and the game is still running
pub fn is_legal_move(board: &Board, index: usize) -> bool {
    illegal_reason(board, index).is_none()
}

/// Return a new board with `mark` placed at `index`.
///
/// The input board is never modified.
///
/// # Errors
///
/// Returns [`crate::Error::IllegalMove`] when the index is out of range, the
/// cell is occupied, or the game has already ended.
#[instrument(level = "trace", skip(board), fields(board = %board.encode()))]
pub fn apply_move(board: &Board, index: usize, mark: Mark) -> crate::Result<Board> {
    if let Some(reason) = illegal_reason(board, index) {
        return Err(crate::Error::IllegalMove {
            position: index,
            reason,
        });
    }
    Ok(board.with_mark(index, mark))
}

impl Board {
    /// Classify this board; see [`winner`]
    pub fn outcome(&self) -> Outcome {
        winner(self)
    }

    pub fn is_terminal(&self) -> bool {
        winner(self).is_terminal()
    }

    /// Legal moves in ascending order (empty once the game is over)
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.empty_positions()
    }
}

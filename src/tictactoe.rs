//! Tic-Tac-Toe board model and rules engine

pub mod board;
pub mod lines;
pub mod rules;
pub mod validation;

pub use board::{Board, Cell, Mark};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use rules::{Outcome, apply_move, is_legal_move, winner};

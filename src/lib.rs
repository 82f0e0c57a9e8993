//! Unbeatable tic-tac-toe
//!
//! This crate provides:
//! - The rules engine: win/draw detection, move legality, move application
//! - An exhaustive minimax search that never loses as O
//! - An explicit game session driving human (X) versus engine (O) play
//! - Automated opponents, match running and brute-force verification
//! - A terminal front end (`noughts` binary)

pub mod app;
pub mod cli;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod search;
pub mod session;
pub mod tictactoe;

pub use error::{Error, IllegalMoveReason, Result};
pub use search::{Move, best_move};
pub use session::{GameSession, Phase};
pub use tictactoe::{Board, Cell, Mark, Outcome, apply_move, is_legal_move, winner};

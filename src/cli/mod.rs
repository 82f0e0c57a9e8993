//! CLI infrastructure for the noughts binary
//!
//! The terminal front end is the presentation layer: it renders the board,
//! reads moves, paces the engine's reply and prints end-of-game text. All
//! game decisions go through `GameSession`.

pub mod commands;
pub mod output;

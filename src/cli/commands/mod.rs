//! Subcommands of the `noughts` binary

pub mod best_move;
pub mod play;
pub mod simulate;
pub mod verify;

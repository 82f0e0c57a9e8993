//! Strategy port - anything that can choose a move for a side
//!
//! The engine's own search is one implementation; automated stand-ins for
//! the human (random play, scripted play) are others. Matches and
//! verification runs are written against this trait so they do not care
//! which is plugged in.

use crate::{
    Result,
    tictactoe::{Board, Mark},
};

/// A move-selection policy
///
/// # Examples
///
/// ```
/// use noughts::{
///     ports::Strategy,
///     tictactoe::{Board, Mark},
/// };
///
/// struct Centre;
///
/// impl Strategy for Centre {
///     fn select_move(&mut self, board: &Board, _mark: Mark) -> noughts::Result<usize> {
///         board
///             .legal_moves()
///             .into_iter()
///             .find(|&i| i == 4)
///             .ok_or(noughts::Error::NoValidMoves)
///     }
///
///     fn name(&self) -> &str {
///         "centre"
///     }
/// }
///
/// let mut centre = Centre;
/// assert_eq!(centre.select_move(&Board::new(), Mark::X).unwrap(), 4);
/// ```
pub trait Strategy: Send {
    /// Pick a cell (0-8) for `mark` to play on `board`.
    ///
    /// # Errors
    ///
    /// Returns an error if no legal move exists.
    fn select_move(&mut self, board: &Board, mark: Mark) -> Result<usize>;

    /// Human-readable name for reports
    fn name(&self) -> &str;

    /// Reseed any internal randomness. Deterministic strategies ignore this.
    fn set_rng_seed(&mut self, _seed: u64) {}
}

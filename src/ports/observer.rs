//! Observer port - abstraction for watching matches
//!
//! Observers receive match events without the match runner knowing what
//! they do with them: draw a progress bar, tally results, emit log lines.

use crate::{
    Result,
    tictactoe::{Board, Mark, Outcome},
};

/// Observer trait for monitoring a series of games
///
/// # Event Sequence
///
/// 1. `on_match_start(total_games)` - once
/// 2. For each game:
///    - `on_game_start(game_num)`
///    - `on_move(...)` - for every accepted move
///    - `on_game_end(game_num, outcome)`
/// 3. `on_match_end()` - once
///
/// Every method defaults to doing nothing.
///
/// # Examples
///
/// ```no_run
/// use noughts::{ports::MatchObserver, tictactoe::Outcome};
///
/// struct CountDraws {
///     draws: usize,
/// }
///
/// impl MatchObserver for CountDraws {
///     fn on_game_end(&mut self, _game_num: usize, outcome: Outcome) -> noughts::Result<()> {
///         if outcome == Outcome::Draw {
///             self.draws += 1;
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait MatchObserver: Send {
    fn on_match_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    fn on_game_start(&mut self, _game_num: usize) -> Result<()> {
        Ok(())
    }

    /// Called after a move is applied.
    ///
    /// # Parameters
    ///
    /// * `game_num` - index of the current game (0-based)
    /// * `ply` - move number within the game (0-based)
    /// * `mark` - side that moved
    /// * `index` - cell played
    /// * `board` - board after the move
    fn on_move(
        &mut self,
        _game_num: usize,
        _ply: usize,
        _mark: Mark,
        _index: usize,
        _board: &Board,
    ) -> Result<()> {
        Ok(())
    }

    fn on_game_end(&mut self, _game_num: usize, _outcome: Outcome) -> Result<()> {
        Ok(())
    }

    fn on_match_end(&mut self) -> Result<()> {
        Ok(())
    }
}

//! Board consistency checks

use super::board::{Board, Mark};

impl Board {
    /// Check that the board could arise from alternating play with X first.
    ///
    /// Requires X-count minus O-count to be 0 or 1, at most one side holding
    /// a line, and the winner (if any) to have made the last move.
    pub fn is_consistent(&self) -> bool {
        let count = self.count_pieces();
        if !(count.x == count.o || count.x == count.o + 1) {
            return false;
        }

        let x_wins = self.has_won(Mark::X);
        let o_wins = self.has_won(Mark::O);

        if x_wins && o_wins {
            return false;
        }
        // X moved last
        if x_wins && count.x != count.o + 1 {
            return false;
        }
        // O moved last
        if o_wins && count.x != count.o {
            return false;
        }

        true
    }

    /// Check if a mark has three in a row
    pub fn has_won(&self, mark: Mark) -> bool {
        super::lines::LineAnalyzer::has_won(&self.cells, mark)
    }
}

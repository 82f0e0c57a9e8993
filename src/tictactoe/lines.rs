//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Mark};

/// Winning line indices on the 3x3 board, in the order they are checked
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// First line (in `WINNING_LINES` order) holding three identical marks
    pub fn completed_line(cells: &[Cell; 9]) -> Option<([usize; 3], Mark)> {
        WINNING_LINES.iter().find_map(|&line| {
            let [a, b, c] = line;
            let mark = cells[a].mark()?;
            (cells[a] == cells[b] && cells[a] == cells[c]).then_some((line, mark))
        })
    }

    /// Check if a mark has three in a row anywhere
    pub fn has_won(cells: &[Cell; 9], mark: Mark) -> bool {
        let target = mark.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }
}

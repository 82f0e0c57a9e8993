//! Exhaustive minimax search.
//!
//! Scores are always from O's point of view: +1 means O wins with best play,
//! -1 means X wins, 0 means a forced draw. Terminal scores do not depend on
//! depth, so a slow forced win ties with a fast one and the lower index is
//! kept. No pruning and no memoization; the 3x3 tree is small enough to walk
//! in full on every call.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    Result,
    tictactoe::{Board, Mark, winner},
};

/// A candidate move together with its minimax score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub index: usize,
    pub score: i8,
}

/// Counters collected during one top-level search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Boards generated (every successor, terminal or not)
    pub nodes: u64,
    /// Successors that ended the game
    pub terminal_nodes: u64,
}

/// Does `candidate` beat `incumbent` for the side choosing?
///
/// Strict comparison keeps the first-encountered move on ties.
fn improves(chooser: Mark, candidate: i8, incumbent: i8) -> bool {
    match chooser {
        Mark::O => candidate > incumbent,
        Mark::X => candidate < incumbent,
    }
}

fn ensure_in_progress(board: &Board) -> Result<()> {
    if winner(board).is_terminal() {
        return Err(crate::Error::SearchOnFinishedGame {
            board: board.to_string(),
        });
    }
    Ok(())
}

/// Score of the successor reached by `mark` playing `index`
fn score_successor(board: &Board, index: usize, mark: Mark, stats: &mut SearchStats) -> i8 {
    let child = board.with_mark(index, mark);
    stats.nodes += 1;
    match winner(&child).score() {
        Some(score) => {
            stats.terminal_nodes += 1;
            score
        }
        None => minimax(&child, mark.opponent(), stats),
    }
}

/// Value of a non-terminal board with `to_move` to play
fn minimax(board: &Board, to_move: Mark, stats: &mut SearchStats) -> i8 {
    let mut best: Option<i8> = None;
    for index in 0..Board::SIZE {
        if !board.is_empty(index) {
            continue;
        }
        let score = score_successor(board, index, to_move, stats);
        match best {
            Some(current) if !improves(to_move, score, current) => {}
            _ => best = Some(score),
        }
    }
    // A non-terminal board always has an empty cell
    best.unwrap_or(0)
}

fn score_moves_with_stats(board: &Board, mark: Mark, stats: &mut SearchStats) -> Vec<Move> {
    board
        .empty_positions()
        .into_iter()
        .map(|index| Move {
            index,
            score: score_successor(board, index, mark, stats),
        })
        .collect()
}

/// Minimax score of every legal move for `mark`, in ascending index order.
///
/// # Errors
///
/// Returns [`crate::Error::SearchOnFinishedGame`] if the board already has a
/// winner or is full.
pub fn score_moves(board: &Board, mark: Mark) -> Result<Vec<Move>> {
    ensure_in_progress(board)?;
    let mut stats = SearchStats::default();
    Ok(score_moves_with_stats(board, mark, &mut stats))
}

/// Choose the optimal move for `mark` on `board`.
///
/// O maximizes and X minimizes; among equally scored moves the lowest index
/// wins. The caller's board is only read; every ply works on its own copy.
///
/// # Errors
///
/// Returns [`crate::Error::SearchOnFinishedGame`] if the board already has a
/// winner or is full. The session never asks for a move in that state, so
/// this indicates a caller bug.
pub fn best_move(board: &Board, mark: Mark) -> Result<Move> {
    best_move_with_stats(board, mark).map(|(mv, _)| mv)
}

/// [`best_move`] plus the search counters
pub fn best_move_with_stats(board: &Board, mark: Mark) -> Result<(Move, SearchStats)> {
    analyze(board, mark).map(|analysis| (analysis.best, analysis.stats))
}

/// Everything one full search learns about a position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub best: Move,
    /// Every legal move in ascending index order
    pub scores: Vec<Move>,
    pub stats: SearchStats,
}

/// Score every legal move for `mark` and pick the best one in a single walk
/// of the game tree.
///
/// # Errors
///
/// Returns [`crate::Error::SearchOnFinishedGame`] if the board already has a
/// winner or is full.
pub fn analyze(board: &Board, mark: Mark) -> Result<Analysis> {
    ensure_in_progress(board)?;

    let mut stats = SearchStats::default();
    let scores = score_moves_with_stats(board, mark, &mut stats);

    let mut best: Option<Move> = None;
    for &candidate in &scores {
        match best {
            Some(current) if !improves(mark, candidate.score, current.score) => {}
            _ => best = Some(candidate),
        }
    }
    let best = best.ok_or(crate::Error::NoValidMoves)?;

    debug!(
        board = %board.encode(),
        mark = %mark,
        index = best.index,
        score = best.score,
        nodes = stats.nodes,
        terminal_nodes = stats.terminal_nodes,
        "minimax search complete"
    );
    Ok(Analysis { best, scores, stats })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Cell;

    #[test]
    fn test_takes_immediate_win() {
        let board = Board::from_string("OO.XX.X..").unwrap();
        let mv = best_move(&board, Mark::O).unwrap();
        assert_eq!(mv, Move { index: 2, score: 1 });
    }

    #[test]
    fn test_blocks_immediate_loss() {
        // XX.
        // .O.
        // ...
        let board = Board::from_string("XX..O....").unwrap();
        let mv = best_move(&board, Mark::O).unwrap();
        assert_eq!(mv.index, 2);
        assert_eq!(mv.score, 0);
    }

    #[test]
    fn test_x_minimizes() {
        // X can complete the top row
        let board = Board::from_string("XX.OO....").unwrap();
        let mv = best_move(&board, Mark::X).unwrap();
        assert_eq!(mv, Move { index: 2, score: -1 });
    }

    #[test]
    fn test_tie_break_keeps_lowest_index() {
        // Every reply draws, so the first empty cell must be chosen
        let board = Board::from_string("X...O....").unwrap();
        let scores = score_moves(&board, Mark::X).unwrap();
        assert_eq!(scores.len(), 7);
        assert!(scores.iter().all(|m| m.score == 0));
        assert_eq!(best_move(&board, Mark::X).unwrap(), Move { index: 1, score: 0 });
    }

    #[test]
    fn test_maximizer_prefers_draw_over_loss() {
        let board = Board::from_string("XOXXOO.X.").unwrap();
        let scores = score_moves(&board, Mark::O).unwrap();
        assert_eq!(
            scores,
            vec![Move { index: 6, score: 0 }, Move { index: 8, score: -1 }]
        );
    }

    #[test]
    fn test_rejects_finished_game() {
        let board = Board::from_string("XXXOO....").unwrap();
        assert!(matches!(
            best_move(&board, Mark::O),
            Err(crate::Error::SearchOnFinishedGame { .. })
        ));
    }

    #[test]
    fn test_does_not_touch_caller_board() {
        let board = Board::from_string("X...O....").unwrap();
        let before = board;
        let _ = best_move(&board, Mark::X).unwrap();
        assert_eq!(board, before);
        assert_eq!(board.get(1), Some(Cell::Empty));
    }

    #[test]
    fn test_stats_count_last_move() {
        // Single empty cell: one successor, and it is terminal
        let board = Board::from_string("XOXXOOOX.").unwrap();
        let (mv, stats) = best_move_with_stats(&board, Mark::X).unwrap();
        assert_eq!(mv.index, 8);
        assert_eq!(stats.nodes, 1);
        assert_eq!(stats.terminal_nodes, 1);
    }

    #[test]
    fn test_analysis_matches_separate_searches() {
        let board = Board::from_string("X...O....").unwrap();
        let analysis = analyze(&board, Mark::X).unwrap();
        assert_eq!(analysis.scores, score_moves(&board, Mark::X).unwrap());
        assert_eq!(
            (analysis.best, analysis.stats),
            best_move_with_stats(&board, Mark::X).unwrap()
        );
    }
}

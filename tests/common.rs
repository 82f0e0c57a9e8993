//! Common test utilities for the noughts test suite.
//!
//! Board construction without count validation and enumeration of every
//! board reachable by legal play.

#![allow(dead_code)]

use std::collections::HashSet;

use noughts::{Board, Cell, Mark, apply_move};

/// Build a board from 9 characters, skipping piece-count validation.
pub fn raw_board(s: &str) -> Board {
    let mut cells = [Cell::Empty; 9];
    for (cell, c) in cells.iter_mut().zip(s.chars()) {
        *cell = Cell::from_char(c).unwrap_or_else(|| panic!("bad cell char {c:?} in {s}"));
    }
    Board::from_cells(cells)
}

/// Every board reachable from the empty board by alternating legal moves,
/// X first, stopping at terminal boards.
pub fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![(Board::new(), Mark::X)];
    let mut boards = Vec::new();

    while let Some((board, to_move)) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        boards.push(board);
        for index in board.legal_moves() {
            let next = apply_move(&board, index, to_move).expect("legal move");
            stack.push((next, to_move.opponent()));
        }
    }

    boards
}

//! Search engine tests: optimality, determinism and the never-lose guarantee

mod common;

use common::{raw_board, reachable_boards};
use noughts::{
    Board, Error, Mark, Move, Outcome, apply_move, best_move,
    pipeline::verify_never_loses,
    search::{best_move_with_stats, score_moves},
    winner,
};

#[test]
fn completes_own_winning_line() {
    // OO.
    // XX.
    // ...
    let board = raw_board("OO.XX....");
    assert_eq!(best_move(&board, Mark::O).unwrap(), Move { index: 2, score: 1 });
}

#[test]
fn optimal_play_from_corner_and_centre_is_a_draw() {
    let mut board = raw_board("X...O....");
    let mut to_move = Mark::X;
    let mut played = Vec::new();

    while !winner(&board).is_terminal() {
        let mv = best_move(&board, to_move).unwrap();
        assert_eq!(mv.score, 0, "a drawn position never changes value");
        board = apply_move(&board, mv.index, to_move).unwrap();
        played.push(mv.index);
        to_move = to_move.opponent();
    }

    assert_eq!(winner(&board), Outcome::Draw);
    assert_eq!(played, vec![1, 2, 6, 3, 5, 7, 8]);
}

#[test]
fn perfect_play_from_empty_board_is_a_draw() {
    let (mv, stats) = best_move_with_stats(&Board::new(), Mark::X).unwrap();
    assert_eq!(mv, Move { index: 0, score: 0 });
    // Full game tree below the empty board
    assert_eq!(stats.nodes, 549_945);
}

#[test]
fn never_picks_an_occupied_cell() {
    for board in reachable_boards() {
        if winner(&board).is_terminal() {
            continue;
        }
        let mark = board.next_to_move();
        let mv = best_move(&board, mark).unwrap();
        assert!(board.is_empty(mv.index), "picked {} on\n{board}", mv.index);
        assert!((-1..=1).contains(&mv.score));
    }
}

#[test]
fn best_move_matches_best_score() {
    for board in reachable_boards().into_iter().filter(|b| b.occupied_count() >= 4) {
        if winner(&board).is_terminal() {
            continue;
        }
        let mark = board.next_to_move();
        let scores = score_moves(&board, mark).unwrap();
        let target = match mark {
            Mark::O => scores.iter().map(|m| m.score).max(),
            Mark::X => scores.iter().map(|m| m.score).min(),
        }
        .unwrap();
        let first = scores.iter().find(|m| m.score == target).copied().unwrap();
        assert_eq!(best_move(&board, mark).unwrap(), first);
    }
}

#[test]
fn deterministic() {
    let board = raw_board("X.......O");
    let first = best_move(&board, Mark::X).unwrap();
    for _ in 0..5 {
        assert_eq!(best_move(&board, Mark::X).unwrap(), first);
    }
}

#[test]
fn refuses_terminal_boards() {
    for text in ["XXXOO....", "XOXOXOOXO", "OOOXX.X.X"] {
        let board = raw_board(text);
        assert!(matches!(
            best_move(&board, Mark::O),
            Err(Error::SearchOnFinishedGame { .. })
        ));
    }
}

/// Every X move sequence, engine replying as O, collecting final outcomes
fn play_all_x_lines(board: Board, outcomes: &mut Vec<Outcome>) {
    for index in board.legal_moves() {
        let after_x = apply_move(&board, index, Mark::X).unwrap();
        if winner(&after_x).is_terminal() {
            outcomes.push(winner(&after_x));
            continue;
        }
        let reply = best_move(&after_x, Mark::O).unwrap();
        let after_o = apply_move(&after_x, reply.index, Mark::O).unwrap();
        if winner(&after_o).is_terminal() {
            outcomes.push(winner(&after_o));
        } else {
            play_all_x_lines(after_o, outcomes);
        }
    }
}

#[test]
fn engine_never_loses_to_any_x_strategy() {
    let mut outcomes = Vec::new();
    play_all_x_lines(Board::new(), &mut outcomes);

    assert!(!outcomes.is_empty());
    assert!(
        outcomes
            .iter()
            .all(|o| matches!(o, Outcome::Draw | Outcome::Win(Mark::O)))
    );
}

#[test]
fn verification_report_agrees() {
    let report = verify_never_loses().unwrap();
    assert!(report.passed());
    assert_eq!(report.x_wins, 0);
    assert_eq!(report.games, 681);
    assert_eq!(report.o_wins, 498);
    assert_eq!(report.draws, 183);
}

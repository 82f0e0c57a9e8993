//! Exhaustive check that the engine never loses as O.
//!
//! Every possible sequence of X moves is tried; the engine answers each one
//! with its deterministic best move, so the tree of games is exactly the set
//! of games a human could ever play against it.

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    session::{GameSession, Phase},
    tictactoe::{Mark, Outcome},
};

/// Tally of every game reachable against the engine
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationReport {
    pub games: usize,
    pub o_wins: usize,
    pub draws: usize,
    pub x_wins: usize,
    /// Move sequences (both sides) that ended in an X win
    pub losing_lines: Vec<Vec<usize>>,
}

impl VerificationReport {
    /// True when X never won
    pub fn passed(&self) -> bool {
        self.x_wins == 0
    }
}

/// Play out every X move sequence from an empty board
pub fn verify_never_loses() -> Result<VerificationReport> {
    verify_from(&GameSession::new())
}

/// Play out every X move sequence from the given session's position.
///
/// The session must be waiting for the human or the computer; a finished
/// session yields a report with a single game.
pub fn verify_from(session: &GameSession) -> Result<VerificationReport> {
    let mut report = VerificationReport::default();
    let mut start = session.clone();
    if start.phase() == Phase::ComputerThinking {
        start.play_computer()?;
    }
    explore(&start, &mut report)?;
    Ok(report)
}

fn record(session: &GameSession, report: &mut VerificationReport) -> Result<()> {
    match session.outcome() {
        Outcome::Win(Mark::O) => report.o_wins += 1,
        Outcome::Win(Mark::X) => {
            report.x_wins += 1;
            report
                .losing_lines
                .push(session.moves().iter().map(|m| m.index).collect());
        }
        Outcome::Draw => report.draws += 1,
        Outcome::InProgress => {
            return Err(crate::Error::GameNotFinished {
                context: session.board().encode(),
            });
        }
    }
    report.games += 1;
    Ok(())
}

fn explore(session: &GameSession, report: &mut VerificationReport) -> Result<()> {
    if session.phase() == Phase::GameOver {
        return record(session, report);
    }

    for index in session.board().legal_moves() {
        let mut next = session.clone();
        if next.play_human(index)? == Phase::ComputerThinking {
            next.play_computer()?;
        }
        explore(&next, report)?;
    }
    Ok(())
}

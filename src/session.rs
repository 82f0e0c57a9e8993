//! Game session: the owned state one human-vs-computer game runs on.
//!
//! A session holds the board, whose turn it is and where the game is in its
//! lifecycle. Nothing here is global; callers create as many sessions as
//! they like and pass them around by reference.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    Result,
    search::{self, Move},
    tictactoe::{Board, Mark, Outcome, apply_move, winner},
};

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    AwaitingHumanMove,
    ComputerThinking,
    GameOver,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Phase::AwaitingHumanMove => "awaiting the human move",
            Phase::ComputerThinking => "waiting for the computer",
            Phase::GameOver => "over",
        };
        f.write_str(text)
    }
}

/// A move accepted into the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayedMove {
    pub mark: Mark,
    pub index: usize,
}

/// One game between the human (X) and the engine (O)
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    to_move: Mark,
    phase: Phase,
    moves: Vec<PlayedMove>,
    games_started: usize,
}

impl GameSession {
    /// Fresh session: empty board, X to move
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::HUMAN,
            phase: Phase::AwaitingHumanMove,
            moves: Vec::with_capacity(Board::SIZE),
            games_started: 1,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Outcome recomputed from the current board
    pub fn outcome(&self) -> Outcome {
        winner(&self.board)
    }

    /// Moves played since the last reset, oldest first
    pub fn moves(&self) -> &[PlayedMove] {
        &self.moves
    }

    /// Number of games begun in this session, counting the current one
    pub fn games_started(&self) -> usize {
        self.games_started
    }

    fn expect_phase(&self, expected: Phase) -> Result<()> {
        if self.phase != expected {
            return Err(crate::Error::WrongPhase {
                phase: self.phase.to_string(),
            });
        }
        Ok(())
    }

    /// Commit an already validated board and move to the session
    fn commit(&mut self, board: Board, played: PlayedMove, next_phase: Phase) -> Phase {
        self.board = board;
        self.moves.push(played);
        self.to_move = played.mark.opponent();

        let outcome = winner(&self.board);
        self.phase = if outcome.is_terminal() {
            info!(
                game = self.games_started,
                outcome = ?outcome,
                moves = self.moves.len(),
                "game over"
            );
            Phase::GameOver
        } else {
            next_phase
        };
        self.phase
    }

    /// Apply the human's move at `index`.
    ///
    /// Returns the phase the session moved to.
    ///
    /// # Errors
    ///
    /// - [`crate::Error::WrongPhase`] unless the session awaits the human
    /// - [`crate::Error::IllegalMove`] for occupied or out-of-range cells
    ///
    /// The session is unchanged on error.
    pub fn play_human(&mut self, index: usize) -> Result<Phase> {
        self.expect_phase(Phase::AwaitingHumanMove)?;
        let board = apply_move(&self.board, index, Mark::HUMAN)?;
        debug!(index, "human move accepted");
        Ok(self.commit(
            board,
            PlayedMove {
                mark: Mark::HUMAN,
                index,
            },
            Phase::ComputerThinking,
        ))
    }

    /// Let the engine choose and play O's reply.
    ///
    /// # Errors
    ///
    /// [`crate::Error::WrongPhase`] unless the session is waiting for the
    /// computer. The session is unchanged on error.
    pub fn play_computer(&mut self) -> Result<Move> {
        self.expect_phase(Phase::ComputerThinking)?;
        let mv = search::best_move(&self.board, Mark::COMPUTER)?;
        let board = apply_move(&self.board, mv.index, Mark::COMPUTER)?;
        debug!(index = mv.index, score = mv.score, "computer move played");
        self.commit(
            board,
            PlayedMove {
                mark: Mark::COMPUTER,
                index: mv.index,
            },
            Phase::AwaitingHumanMove,
        );
        Ok(mv)
    }

    /// Clear the board and hand the first move back to X. Allowed in any phase.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.to_move = Mark::HUMAN;
        self.phase = Phase::AwaitingHumanMove;
        self.moves.clear();
        self.games_started += 1;
        info!(game = self.games_started, "new game");
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let session = GameSession::new();
        assert_eq!(session.phase(), Phase::AwaitingHumanMove);
        assert_eq!(session.to_move(), Mark::X);
        assert_eq!(session.outcome(), Outcome::InProgress);
        assert!(session.moves().is_empty());
    }

    #[test]
    fn test_turn_alternation() {
        let mut session = GameSession::new();
        assert_eq!(session.play_human(0).unwrap(), Phase::ComputerThinking);
        assert_eq!(session.to_move(), Mark::O);

        let reply = session.play_computer().unwrap();
        assert_eq!(session.phase(), Phase::AwaitingHumanMove);
        assert_eq!(session.to_move(), Mark::X);
        assert_eq!(session.board().get(reply.index), Some(crate::tictactoe::Cell::O));
        assert_eq!(session.moves().len(), 2);
    }

    #[test]
    fn test_computer_cannot_move_out_of_turn() {
        let mut session = GameSession::new();
        let err = session.play_computer().unwrap_err();
        assert!(matches!(err, crate::Error::WrongPhase { .. }));
        assert_eq!(session.board(), &Board::new());
    }

    #[test]
    fn test_human_cannot_move_twice() {
        let mut session = GameSession::new();
        session.play_human(4).unwrap();
        assert!(matches!(
            session.play_human(0),
            Err(crate::Error::WrongPhase { .. })
        ));
        assert_eq!(session.moves().len(), 1);
    }

    #[test]
    fn test_illegal_move_leaves_session_unchanged() {
        let mut session = GameSession::new();
        session.play_human(4).unwrap();
        let reply = session.play_computer().unwrap();

        let before = session.clone();
        assert!(session.play_human(reply.index).is_err());
        assert!(session.play_human(42).is_err());
        assert_eq!(session.board(), before.board());
        assert_eq!(session.phase(), before.phase());
        assert_eq!(session.moves(), before.moves());
    }

    #[test]
    fn test_reset_clears_board() {
        let mut session = GameSession::new();
        session.play_human(4).unwrap();
        session.reset();
        assert_eq!(session.board(), &Board::new());
        assert_eq!(session.phase(), Phase::AwaitingHumanMove);
        assert_eq!(session.to_move(), Mark::X);
        assert_eq!(session.games_started(), 2);
    }
}

//! Built-in strategies (adapters for the `Strategy` port)

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    Result,
    ports::Strategy,
    search,
    tictactoe::{Board, Mark},
};

/// Uniformly random legal moves
pub struct RandomStrategy {
    name: String,
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new(name: String) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a random strategy with a deterministic seed
    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Strategy for RandomStrategy {
    fn select_move(&mut self, board: &Board, _mark: Mark) -> Result<usize> {
        let moves = board.legal_moves();
        if moves.is_empty() {
            return Err(crate::Error::NoValidMoves);
        }
        let index = self.rng.random_range(0..moves.len());
        Ok(moves[index])
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}

/// Full minimax for whichever side it is asked to play
pub struct MinimaxStrategy {
    name: String,
}

impl MinimaxStrategy {
    pub fn new(name: String) -> Self {
        Self { name }
    }
}

impl Strategy for MinimaxStrategy {
    fn select_move(&mut self, board: &Board, mark: Mark) -> Result<usize> {
        if board.legal_moves().is_empty() {
            return Err(crate::Error::NoValidMoves);
        }
        Ok(search::best_move(board, mark)?.index)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Always takes the lowest empty cell
pub struct FirstEmptyStrategy {
    name: String,
}

impl FirstEmptyStrategy {
    pub fn new(name: String) -> Self {
        Self { name }
    }
}

impl Strategy for FirstEmptyStrategy {
    fn select_move(&mut self, board: &Board, _mark: Mark) -> Result<usize> {
        board
            .legal_moves()
            .first()
            .copied()
            .ok_or(crate::Error::NoValidMoves)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

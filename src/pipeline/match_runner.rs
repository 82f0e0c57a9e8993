//! Match runner: a strategy plays X against the engine for many games

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    ports::{MatchObserver, Strategy},
    session::{GameSession, Phase},
    tictactoe::{Mark, Outcome},
};

/// Match configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: usize,

    /// Seed handed to the X strategy before the first game
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 100,
            seed: None,
        }
    }
}

/// Result of a match, counted per winning mark
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub total_games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
    /// Mean number of moves per game
    pub avg_game_length: f64,
}

impl MatchSummary {
    fn rate(&self, count: usize) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            count as f64 / self.total_games as f64
        }
    }

    pub fn x_win_rate(&self) -> f64 {
        self.rate(self.x_wins)
    }

    pub fn o_win_rate(&self) -> f64 {
        self.rate(self.o_wins)
    }

    pub fn draw_rate(&self) -> f64 {
        self.rate(self.draws)
    }
}

/// Plays a series of sessions and reports the results
pub struct MatchRunner {
    config: MatchConfig,
    observers: Vec<Box<dyn MatchObserver>>,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the runner
    pub fn with_observer(mut self, observer: Box<dyn MatchObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Run all games with `human` choosing X's moves
    pub fn run(&mut self, human: &mut dyn Strategy) -> Result<MatchSummary> {
        if let Some(seed) = self.config.seed {
            human.set_rng_seed(seed);
        }

        for observer in &mut self.observers {
            observer.on_match_start(self.config.num_games)?;
        }

        let mut x_wins = 0;
        let mut o_wins = 0;
        let mut draws = 0;
        let mut total_moves = 0;

        for game_num in 0..self.config.num_games {
            let (outcome, moves) = self.play_game(game_num, human)?;
            match outcome {
                Outcome::Win(Mark::X) => x_wins += 1,
                Outcome::Win(Mark::O) => o_wins += 1,
                _ => draws += 1,
            }
            total_moves += moves;

            for observer in &mut self.observers {
                observer.on_game_end(game_num, outcome)?;
            }
        }

        for observer in &mut self.observers {
            observer.on_match_end()?;
        }

        let total_games = self.config.num_games;
        Ok(MatchSummary {
            total_games,
            x_wins,
            o_wins,
            draws,
            avg_game_length: if total_games == 0 {
                0.0
            } else {
                total_moves as f64 / total_games as f64
            },
        })
    }

    /// Play one game to completion, returning its outcome and length
    fn play_game(
        &mut self,
        game_num: usize,
        human: &mut dyn Strategy,
    ) -> Result<(Outcome, usize)> {
        for observer in &mut self.observers {
            observer.on_game_start(game_num)?;
        }

        let mut session = GameSession::new();
        while session.phase() != Phase::GameOver {
            let (mark, index) = match session.phase() {
                Phase::AwaitingHumanMove => {
                    let index = human.select_move(session.board(), Mark::HUMAN)?;
                    session.play_human(index)?;
                    (Mark::HUMAN, index)
                }
                Phase::ComputerThinking => (Mark::COMPUTER, session.play_computer()?.index),
                Phase::GameOver => break,
            };

            let ply = session.moves().len() - 1;
            for observer in &mut self.observers {
                observer.on_move(game_num, ply, mark, index, session.board())?;
            }
        }

        Ok((session.outcome(), session.moves().len()))
    }
}

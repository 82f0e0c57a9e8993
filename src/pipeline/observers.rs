//! Observer implementations for match runs

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::{
    Result,
    ports::MatchObserver,
    tictactoe::{Board, Mark, Outcome},
};

/// Progress bar observer - shows match progress with a running tally
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    x_wins: usize,
    draws: usize,
    o_wins: usize,
}

impl ProgressObserver {
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            x_wins: 0,
            draws: 0,
            o_wins: 0,
        }
    }

    fn tally(&self) -> String {
        format!("X:{} D:{} O:{}", self.x_wins, self.draws, self.o_wins)
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchObserver for ProgressObserver {
    fn on_match_start(&mut self, total_games: usize) -> Result<()> {
        let pb = ProgressBar::new(total_games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, outcome: Outcome) -> Result<()> {
        match outcome {
            Outcome::Win(Mark::X) => self.x_wins += 1,
            Outcome::Win(Mark::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {
                return Err(crate::Error::GameNotFinished {
                    context: format!("game {game_num}"),
                });
            }
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position(game_num as u64 + 1);
            pb.set_message(self.tally());
        }
        Ok(())
    }

    fn on_match_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.tally());
        }
        Ok(())
    }
}

/// Emits match events as `tracing` records
#[derive(Debug, Default)]
pub struct TracingObserver;

impl MatchObserver for TracingObserver {
    fn on_match_start(&mut self, total_games: usize) -> Result<()> {
        info!(total_games, "match started");
        Ok(())
    }

    fn on_move(
        &mut self,
        game_num: usize,
        ply: usize,
        mark: Mark,
        index: usize,
        board: &Board,
    ) -> Result<()> {
        debug!(game_num, ply, mark = %mark, index, board = %board.encode(), "move");
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, outcome: Outcome) -> Result<()> {
        info!(game_num, outcome = ?outcome, "game finished");
        Ok(())
    }

    fn on_match_end(&mut self) -> Result<()> {
        info!("match finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_counts_each_outcome() {
        let mut observer = ProgressObserver::new();
        observer.on_game_end(0, Outcome::Win(Mark::O)).unwrap();
        observer.on_game_end(1, Outcome::Draw).unwrap();
        observer.on_game_end(2, Outcome::Draw).unwrap();
        assert_eq!(observer.tally(), "X:0 D:2 O:1");
    }

    #[test]
    fn unfinished_game_is_rejected() {
        let mut observer = ProgressObserver::new();
        assert!(matches!(
            observer.on_game_end(0, Outcome::InProgress),
            Err(crate::Error::GameNotFinished { .. })
        ));
        assert_eq!(observer.tally(), "X:0 D:0 O:0");
    }
}

//! Simulate command - automated opponents play X against the engine

use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::{
    cli::output::{print_kv, print_section},
    pipeline::{
        FirstEmptyStrategy, MatchConfig, MatchRunner, MinimaxStrategy, ProgressObserver,
        RandomStrategy, Strategy, TracingObserver,
    },
};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OpponentKind {
    /// Uniformly random legal moves
    Random,
    /// The same minimax search the engine uses
    Minimax,
    /// Always the lowest empty cell
    FirstEmpty,
}

#[derive(Parser, Debug)]
#[command(about = "Play many games against the engine with an automated X")]
pub struct SimulateArgs {
    /// Number of games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Strategy playing X
    #[arg(long, short = 'o', value_enum, default_value = "random")]
    pub opponent: OpponentKind,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Hide the progress bar
    #[arg(long)]
    pub quiet: bool,
}

pub fn execute(args: SimulateArgs) -> Result<()> {
    let mut opponent: Box<dyn Strategy> = match args.opponent {
        OpponentKind::Random => Box::new(RandomStrategy::new("Random".to_string())),
        OpponentKind::Minimax => Box::new(MinimaxStrategy::new("Minimax".to_string())),
        OpponentKind::FirstEmpty => Box::new(FirstEmptyStrategy::new("FirstEmpty".to_string())),
    };

    println!("Opponent: {}", opponent.name());
    println!("Games: {}", args.games);
    if let Some(seed) = args.seed {
        println!("Seed: {seed}");
    }

    let config = MatchConfig {
        num_games: args.games,
        seed: args.seed,
    };
    let mut runner = MatchRunner::new(config).with_observer(Box::new(TracingObserver));
    if !args.quiet {
        runner = runner.with_observer(Box::new(ProgressObserver::new()));
    }

    let summary = runner.run(opponent.as_mut())?;

    print_section("Results");
    print_kv("Total games", &summary.total_games.to_string());
    print_kv(
        "Engine wins",
        &format!("{} ({:.1}%)", summary.o_wins, summary.o_win_rate() * 100.0),
    );
    print_kv(
        "Draws",
        &format!("{} ({:.1}%)", summary.draws, summary.draw_rate() * 100.0),
    );
    print_kv(
        "Human wins",
        &format!("{} ({:.1}%)", summary.x_wins, summary.x_win_rate() * 100.0),
    );
    print_kv("Avg length", &format!("{:.2}", summary.avg_game_length));
    Ok(())
}

//! noughts CLI - play against, query and verify the unbeatable engine

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Unbeatable tic-tac-toe", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play X against the engine in the terminal
    Play(noughts::cli::commands::play::PlayArgs),

    /// Show the engine's move for a given board
    BestMove(noughts::cli::commands::best_move::BestMoveArgs),

    /// Check every possible game to confirm the engine never loses
    Verify(noughts::cli::commands::verify::VerifyArgs),

    /// Play many games with an automated X
    Simulate(noughts::cli::commands::simulate::SimulateArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => noughts::cli::commands::play::execute(args),
        Commands::BestMove(args) => noughts::cli::commands::best_move::execute(args),
        Commands::Verify(args) => noughts::cli::commands::verify::execute(args),
        Commands::Simulate(args) => noughts::cli::commands::simulate::execute(args),
    }
}

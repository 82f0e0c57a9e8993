//! Best-move command - ask the engine about a single position

use anyhow::{Result, anyhow};
use clap::Parser;
use serde_json::json;

use crate::{
    cli::output::{print_kv, print_section},
    search,
    tictactoe::{Board, Mark},
};

#[derive(Parser, Debug)]
#[command(about = "Print the engine's move for a board")]
pub struct BestMoveArgs {
    /// Board as 9 cells, row-major: X, O and . (or _) for empty, e.g. "X...O...."
    pub board: String,

    /// Side to move (`x` or `o`); inferred from the piece counts when omitted
    #[arg(long, short = 'm')]
    pub mark: Option<String>,

    /// Print machine-readable JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub(crate) fn parse_mark_token(value: &str, flag: &str) -> Result<Mark> {
    match value.trim().to_ascii_lowercase().as_str() {
        "x" | "human" => Ok(Mark::X),
        "o" | "computer" => Ok(Mark::O),
        other => Err(anyhow!(
            "Invalid value '{other}' for {flag} (expected 'x' or 'o')"
        )),
    }
}

pub fn execute(args: BestMoveArgs) -> Result<()> {
    let board = Board::from_string(&args.board)?;
    let mark = match &args.mark {
        Some(value) => parse_mark_token(value, "--mark")?,
        None => board.next_to_move(),
    };

    let search::Analysis {
        best,
        scores,
        stats,
    } = search::analyze(&board, mark)?;

    if args.json {
        let report = json!({
            "board": board.encode(),
            "mark": mark.to_string(),
            "index": best.index,
            "score": best.score,
            "scores": scores,
            "nodes": stats.nodes,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_section("Position");
    println!("{board}");
    print_section("Engine");
    print_kv("To move", &mark.to_string());
    print_kv("Best cell", &best.index.to_string());
    print_kv("Score", &best.score.to_string());
    print_kv("Nodes searched", &stats.nodes.to_string());
    let all: Vec<String> = scores
        .iter()
        .map(|mv| format!("{}:{:+}", mv.index, mv.score))
        .collect();
    print_kv("All moves", &all.join(" "));
    Ok(())
}

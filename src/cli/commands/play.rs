//! Play command - interactive game in the terminal

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    thread,
    time::Duration,
};

use anyhow::Result;
use clap::Parser;
use tracing::warn;

use crate::{
    app::PlayConfig,
    search,
    session::{GameSession, Phase},
    tictactoe::Mark,
};

#[derive(Parser, Debug)]
#[command(about = "Play X against the unbeatable engine")]
pub struct PlayArgs {
    /// JSON config file (reply_delay_ms, show_hints, empty_glyph)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Pause before the engine replies, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Show the score of every empty cell before each move
    #[arg(long)]
    pub hints: bool,
}

/// What the player typed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Move(usize),
    Reset,
    Quit,
    Unknown,
}

fn parse_command(line: &str) -> Command {
    match line.trim().to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => Command::Quit,
        "r" | "reset" | "new" => Command::Reset,
        other => other
            .parse::<usize>()
            .map(Command::Move)
            .unwrap_or(Command::Unknown),
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => PlayConfig::from_json_file(path)?,
        None => PlayConfig::default(),
    };
    if let Some(delay) = args.delay_ms {
        config.reply_delay_ms = delay;
    }
    if args.hints {
        config.show_hints = true;
    }
    config.validate()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_game_loop(&config, stdin.lock(), stdout.lock())?;
    Ok(())
}

fn render<W: Write>(out: &mut W, session: &GameSession, config: &PlayConfig) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", session.board().render(config.empty_glyph))?;
    Ok(())
}

fn print_hints<W: Write>(out: &mut W, session: &GameSession) -> Result<()> {
    let scores = search::score_moves(session.board(), Mark::HUMAN)?;
    let hints: Vec<String> = scores
        .iter()
        .map(|mv| {
            let verdict = match mv.score {
                -1 => "win",
                0 => "draw",
                _ => "loss",
            };
            format!("{}={verdict}", mv.index)
        })
        .collect();
    writeln!(out, "Hints: {}", hints.join(" "))?;
    Ok(())
}

/// Drive one terminal session until the input ends or the player quits.
///
/// Returns the session as it stood when the loop stopped.
pub fn run_game_loop<R: BufRead, W: Write>(
    config: &PlayConfig,
    input: R,
    mut out: W,
) -> Result<GameSession> {
    let mut session = GameSession::new();
    let delay = Duration::from_millis(config.reply_delay_ms);
    let mut lines = input.lines();

    writeln!(out, "You are X. Cells are numbered 0-8, left to right, top to bottom.")?;
    render(&mut out, &session, config)?;

    loop {
        match session.phase() {
            Phase::GameOver => {
                if let Some(message) = session.outcome().message() {
                    writeln!(out, "{message}")?;
                }
                write!(out, "Enter r to play again or q to quit: ")?;
            }
            _ => {
                if config.show_hints {
                    print_hints(&mut out, &session)?;
                }
                write!(out, "Your move (0-8, r=reset, q=quit): ")?;
            }
        }
        out.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        match parse_command(&line?) {
            Command::Quit => break,
            Command::Reset => {
                session.reset();
                render(&mut out, &session, config)?;
            }
            Command::Move(index) => match session.play_human(index) {
                Ok(phase) => {
                    render(&mut out, &session, config)?;
                    if phase == Phase::ComputerThinking {
                        if !delay.is_zero() {
                            thread::sleep(delay);
                        }
                        let reply = session.play_computer()?;
                        writeln!(out, "Computer plays {}", reply.index)?;
                        render(&mut out, &session, config)?;
                    }
                }
                Err(e @ (crate::Error::IllegalMove { .. } | crate::Error::WrongPhase { .. })) => {
                    warn!(index, error = %e, "move ignored");
                    writeln!(out, "Cell {index} is not available.")?;
                }
                Err(e) => return Err(e.into()),
            },
            Command::Unknown => {
                writeln!(out, "Enter a cell number from 0 to 8.")?;
            }
        }
    }

    writeln!(out)?;
    Ok(session)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::tictactoe::{Cell, Outcome};

    fn fast_config() -> PlayConfig {
        PlayConfig::default().with_reply_delay_ms(0)
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command(" 4 "), Command::Move(4));
        assert_eq!(parse_command("Q"), Command::Quit);
        assert_eq!(parse_command("reset"), Command::Reset);
        assert_eq!(parse_command("four"), Command::Unknown);
    }

    #[test]
    fn human_move_gets_a_reply() {
        let mut output = Vec::new();
        let session = run_game_loop(&fast_config(), Cursor::new("4\nq\n"), &mut output).unwrap();

        assert_eq!(session.moves().len(), 2);
        assert_eq!(session.board().get(4), Some(Cell::X));
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Computer plays"));
    }

    #[test]
    fn occupied_cell_is_ignored() {
        let mut output = Vec::new();
        let session =
            run_game_loop(&fast_config(), Cursor::new("4\n4\n"), &mut output).unwrap();

        assert_eq!(session.moves().len(), 2);
        assert_eq!(session.phase(), Phase::AwaitingHumanMove);
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Cell 4 is not available."));
    }

    #[test]
    fn full_game_ends_with_banner() {
        let mut output = Vec::new();
        // Keep offering every cell in order; illegal ones are skipped
        let input = "0\n1\n2\n3\n4\n5\n6\n7\n8\n".repeat(2);
        let session = run_game_loop(&fast_config(), Cursor::new(input), &mut output).unwrap();

        assert_eq!(session.phase(), Phase::GameOver);
        assert_ne!(session.outcome(), Outcome::Win(Mark::X));
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("O Wins!") || text.contains("It's a Draw!"));
    }

    #[test]
    fn reset_starts_over() {
        let mut output = Vec::new();
        let session =
            run_game_loop(&fast_config(), Cursor::new("4\nr\n"), &mut output).unwrap();
        assert!(session.moves().is_empty());
        assert_eq!(session.games_started(), 2);
    }
}

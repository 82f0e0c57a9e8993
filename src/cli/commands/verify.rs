//! Verify command - prove by brute force that the engine never loses

use anyhow::{Result, bail};
use clap::Parser;

use crate::{
    cli::output::{create_spinner, format_number, print_section, print_stats_table},
    pipeline::verify_never_loses,
};

#[derive(Parser, Debug)]
#[command(about = "Play every possible X strategy against the engine")]
pub struct VerifyArgs {
    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: VerifyArgs) -> Result<()> {
    let spinner = create_spinner("Enumerating every game against the engine...")?;
    let report = verify_never_loses()?;
    spinner.finish_and_clear();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_section("Verification");
        let games = format_number(report.games);
        let o_wins = format_number(report.o_wins);
        let draws = format_number(report.draws);
        let x_wins = format_number(report.x_wins);
        print_stats_table(&[
            ("Games", games.as_str()),
            ("Engine wins", o_wins.as_str()),
            ("Draws", draws.as_str()),
            ("Human wins", x_wins.as_str()),
        ]);
    }

    if !report.passed() {
        bail!(
            "engine lost {} game(s); first losing line: {:?}",
            report.x_wins,
            report.losing_lines.first()
        );
    }
    if !args.json {
        println!("\n✓ The engine never loses");
    }
    Ok(())
}

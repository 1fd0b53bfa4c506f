use std::io::{self, BufRead, Write};

use clap::{ArgAction, Parser};
use log::{debug, info, LevelFilter};
use serde::Serialize;

use crate::display::{print_error, section_title, standings_table, winner_line};
use crate::error::{PokerError, PokerResult};
use crate::hand_evaluator::{evaluate_hands, standings, Standing};

#[derive(Parser)]
#[command(name = "besthand", version = "1.0.0", about = "Pick the winning five-card poker hand(s).")]
struct Cli {
    /// Hands to compare, each quoted (e.g. "4D 5S 6S 8D 3C"); read from stdin if omitted
    hands: Vec<String>,
    /// Print a standings table of every hand
    #[arg(short, long)]
    standings: bool,
    /// Print a JSON report instead of text
    #[arg(short, long)]
    json: bool,
    /// Evaluate hands on the rayon thread pool
    #[arg(short, long)]
    parallel: bool,
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize)]
struct Report<'a> {
    winners: Vec<&'a str>,
    standings: Vec<Standing<'a>>,
}

pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if let Err(e) = dispatch(cli) {
        print_error(&error_message(&e));
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();
}

fn error_message(e: &PokerError) -> String {
    if e.is_parse_error() {
        format!("{e} (hands look like \"4D 5S 6S 8D 3C\")")
    } else {
        e.to_string()
    }
}

fn read_hands<R: BufRead>(reader: R) -> PokerResult<Vec<String>> {
    let mut hands = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            hands.push(line.to_string());
        }
    }
    Ok(hands)
}

fn build_report<'a>(hands: &[&'a str], parallel: bool) -> PokerResult<Report<'a>> {
    let standings = standings(evaluate_hands(hands, parallel)?);
    let winners: Vec<&'a str> = standings
        .iter()
        .take_while(|s| s.place == 1)
        .map(|s| s.hand)
        .collect();
    info!("{} of {} hands share the best rank", winners.len(), hands.len());
    Ok(Report { winners, standings })
}

fn write_report<W: Write>(
    out: &mut W,
    report: &Report<'_>,
    json: bool,
    table: bool,
) -> PokerResult<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, report)?;
        writeln!(out)?;
        return Ok(());
    }

    if table {
        writeln!(out, "{}", section_title("Winners"))?;
    }
    for s in report.standings.iter().take_while(|s| s.place == 1) {
        writeln!(out, "{}", winner_line(s))?;
    }

    if table {
        writeln!(out, "{}", section_title("Standings"))?;
        writeln!(out, "{}", standings_table(&report.standings))?;
    }
    Ok(())
}

fn dispatch(cli: Cli) -> PokerResult<()> {
    let lines = if cli.hands.is_empty() {
        read_hands(io::stdin().lock())?
    } else {
        cli.hands
    };
    debug!("comparing {} hands", lines.len());
    let hands: Vec<&str> = lines.iter().map(String::as_str).collect();

    let report = build_report(&hands, cli.parallel)?;
    if cli.json {
        colored::control::set_override(false);
    }
    write_report(&mut io::stdout().lock(), &report, cli.json, cli.standings)
}

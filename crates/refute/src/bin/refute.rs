// The refute CLI.
// Checks a propositional argument given as clauses: from a file, from the
// command line, or entered interactively.

use clap::Parser;
use refute::report::{write_outcome, write_premises};
use refute::{
    parse_clause_file, parse_clause_line, read_clauses, Interner, ParsedClauses, RefuteError,
    SaturationConfig, SaturationState, SessionJson,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[clap(
    name = "refute",
    about = "Check a propositional argument by resolution refutation",
    long_about = "Check a propositional argument by resolution refutation.\n\nGive the premises and the negated conclusion as clauses, one per line,\nwith comma-separated literals such as `P, ~Q, R`. Without a file or\n--clause arguments an interactive prompt is started.",
    version = env!("CARGO_PKG_VERSION")
)]
struct Args {
    /// Clause file, one clause per line
    #[clap(value_name = "FILE")]
    file: Option<PathBuf>,

    /// A clause given inline (repeat for each clause)
    #[clap(short = 'c', long = "clause", value_name = "CLAUSE")]
    clauses: Vec<String>,

    /// Print the session as JSON instead of a numbered transcript
    #[clap(long)]
    json: bool,

    /// Stop after this many distinct clauses (0 = no limit)
    #[clap(long, default_value_t = 0, value_name = "N")]
    max_clauses: usize,

    /// Stop after exploring this many clauses (0 = no limit)
    #[clap(long, default_value_t = 0, value_name = "N")]
    max_iterations: usize,

    /// Collect search statistics (included in --json output, logged otherwise)
    #[clap(long)]
    profile: bool,

    /// Log search progress to stderr
    #[clap(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_ansi(false).without_time())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .init();

    let config = SaturationConfig {
        max_clauses: args.max_clauses,
        max_iterations: args.max_iterations,
        enable_profiling: args.profile,
    };

    let result = if let Some(path) = &args.file {
        parse_clause_file(path).and_then(|parsed| run_session(parsed, &config, args.json))
    } else if !args.clauses.is_empty() {
        parse_inline(&args.clauses).and_then(|parsed| run_session(parsed, &config, args.json))
    } else {
        interactive(&config, args.json)
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn parse_inline(lines: &[String]) -> refute::Result<ParsedClauses> {
    let mut interner = Interner::new();
    let clauses = lines
        .iter()
        .enumerate()
        .map(|(i, line)| parse_clause_line(line, i + 1, &mut interner))
        .collect::<refute::Result<Vec<_>>>()?;
    Ok(ParsedClauses { clauses, interner })
}

fn run_session(parsed: ParsedClauses, config: &SaturationConfig, json: bool) -> refute::Result<()> {
    let mut state = SaturationState::new(parsed.clauses, config.clone(), parsed.interner);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if json {
        let outcome = state.run();
        serde_json::to_writer_pretty(&mut out, &SessionJson::from_session(&state, &outcome))?;
        writeln!(out)?;
        return Ok(());
    }

    write_premises(&mut out, &state)?;
    let outcome = state.run();
    write_outcome(&mut out, &state, &outcome)?;
    if let Some(profile) = state.profile() {
        tracing::info!(profile = %serde_json::to_string(profile)?, "search statistics");
    }
    Ok(())
}

/// The menu loop: `f` reads a file, `i` reads clauses from the prompt, `q` quits.
fn interactive(config: &SaturationConfig, json: bool) -> refute::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        println!("Enter 'f' to read input from a file.");
        println!("Enter 'i' to enter your own input directly.");
        println!("Enter 'q' to quit.");

        let Some(command) = prompt_line(&mut input, None)? else {
            return Ok(());
        };

        let parsed = match command.as_str() {
            "f" => {
                let Some(file_name) = prompt_line(&mut input, Some("Enter the filename: "))? else {
                    return Ok(());
                };
                parse_clause_file(&file_name)
            }
            "i" => {
                let Some(count) = prompt_line(&mut input, Some("Enter the number of clauses: "))? else {
                    return Ok(());
                };
                match count.parse::<usize>() {
                    Ok(count) => {
                        println!("Now input the clauses, hitting the 'Enter' key after each one");
                        read_clauses(&mut input, count)
                    }
                    Err(_) => Err(RefuteError::InvalidInput(format!(
                        "'{}' is not a clause count",
                        count
                    ))),
                }
            }
            "q" => return Ok(()),
            _ => {
                println!("Command unrecognized\n");
                continue;
            }
        };

        // Bad input goes back to the menu rather than ending the session
        match parsed {
            Ok(parsed) => run_session(parsed, config, json)?,
            Err(RefuteError::IoError(e)) if e.kind() != io::ErrorKind::NotFound => {
                return Err(RefuteError::IoError(e))
            }
            Err(e) => println!("Incorrect input: {}\n", e),
        }
    }
}

/// Print an optional prompt and read one trimmed line; None at end of input.
fn prompt_line<R: BufRead>(input: &mut R, prompt: Option<&str>) -> io::Result<Option<String>> {
    if let Some(prompt) = prompt {
        print!("{}", prompt);
        io::stdout().flush()?;
    }
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

//! CLI entry point for the puzzle solver.
//!
//! Usage:
//!   puzzle-solver clock <hours> <start> <end>
//!   puzzle-solver water <amount> <capacity>...
//!   puzzle-solver tipover <board-file>
//!   puzzle-solver play [board-file]
//!
//! Options:
//!   --json               Print the solution as JSON
//!   -v, --verbose        Debug logging on stderr
//!   --log-level <filter> Explicit tracing filter (overrides --verbose)

use std::fmt::Display;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, error};

use puzzle_solver::logging::init_tracing;
use puzzle_solver::{
    solve, ClockPuzzle, PuzzleError, SearchStats, SearchState, Shell, TipOverGame, TipOverPuzzle,
    WaterPuzzle,
};

#[derive(Parser)]
#[command(name = "puzzle-solver")]
#[command(about = "Breadth-first shortest-path solver for clock, water bucket and TipOver puzzles")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print the result as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Tracing filter, e.g. "debug" or "puzzle_solver=trace"
    #[arg(long, global = true, value_name = "FILTER")]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Turn a clock hand from one hour to another
    Clock {
        /// Number of hours on the clock
        hours: u32,
        /// Starting hour
        start: u32,
        /// Hour to reach
        end: u32,
    },

    /// Measure an amount of water using buckets
    Water {
        /// Amount some bucket must end up holding
        amount: u32,
        /// Bucket capacities
        #[arg(required = true, value_name = "CAPACITY")]
        buckets: Vec<u32>,
    },

    /// Solve a TipOver board file
    Tipover {
        /// Path to the board file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Play a TipOver board interactively
    Play {
        /// Board file to start with
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
}

/// JSON report for one solve
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput<'a, P, S> {
    puzzle: &'a P,
    solved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    moves: Option<usize>,
    #[serde(flatten)]
    stats: SearchStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<Vec<S>>,
}

/// Exit codes: solved, no solution, bad input
const EXIT_SOLVED: u8 = 0;
const EXIT_NO_SOLUTION: u8 = 1;
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.verbose, cli.log_level.as_deref()) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            error!(error = %e, "command failed");
            eprintln!("error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(cli: &Cli) -> Result<u8, PuzzleError> {
    match &cli.command {
        Commands::Clock { hours, start, end } => {
            let puzzle = Arc::new(ClockPuzzle::new(*hours, *start, *end)?);
            let header = format!("Hours: {}, Start: {}, End: {}", hours, start, end);
            Ok(report(cli.json, &header, &*puzzle, puzzle.start_state(), false))
        }

        Commands::Water { amount, buckets } => {
            let puzzle = Arc::new(WaterPuzzle::new(*amount, buckets.clone())?);
            let header = format!("Amount: {}, Buckets: {:?}", amount, buckets);
            Ok(report(cli.json, &header, &*puzzle, puzzle.start_state(), false))
        }

        Commands::Tipover { file } => {
            let puzzle = Arc::new(TipOverPuzzle::load(file)?);
            let header = format!(
                "Board: {}x{}, Start: {}, Goal: {}",
                puzzle.rows, puzzle.cols, puzzle.start, puzzle.goal
            );
            Ok(report(cli.json, &header, &*puzzle, puzzle.start_state(), true))
        }

        Commands::Play { file } => {
            let game = file.as_ref().map(|path| TipOverGame::load(path)).transpose()?;
            let stdin = io::stdin();
            Shell::new(game, stdin.lock(), io::stdout())
                .run()
                .map_err(PuzzleError::Console)?;
            Ok(EXIT_SOLVED)
        }
    }
}

/// Solve from `start` and print the outcome. Returns the exit code.
fn report<P, S>(json: bool, header: &str, puzzle: &P, start: S, multiline: bool) -> u8
where
    P: Serialize,
    S: SearchState + Serialize + Display,
{
    let result = solve(start);
    debug!(solved = result.is_solved(), "search finished");
    let code = if result.is_solved() {
        EXIT_SOLVED
    } else {
        EXIT_NO_SOLUTION
    };

    if json {
        let output = SolveOutput {
            puzzle,
            solved: result.is_solved(),
            moves: result.moves(),
            stats: result.stats,
            path: result.path,
        };
        match serde_json::to_string_pretty(&output) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("error: failed to encode result: {}", e);
                return EXIT_ERROR;
            }
        }
        return code;
    }

    println!("{}", header);
    println!("Total configs: {}", result.stats.total_configs);
    println!("Unique configs: {}", result.stats.unique_configs);
    match result.path {
        None => println!("No Solution"),
        Some(path) => {
            let separator = if multiline { "\n" } else { "" };
            for (step, state) in path.iter().enumerate() {
                println!("Step {}: {}{}", step, separator, state);
            }
        }
    }
    code
}

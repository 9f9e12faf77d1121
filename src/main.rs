//! CLI driver for the bridge crossing puzzle.
//!
//! Usage:
//!   bridge-puzzle play [scenario.json]
//!   bridge-puzzle demo [scenario.json] [--json]
//!   bridge-puzzle moves [scenario.json]
//!
//! With no file, every command uses the classic setup: You (1 min),
//! Lab Assistant (2 min), Worker (5 min), Scientist (10 min), a
//! two-person bridge, and a 17-minute limit.

mod actor;
mod bridge;
mod error;
mod light;
mod moves;
mod scenario;
mod state;

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::moves::{Direction, Move};
use crate::scenario::Scenario;
use crate::state::{PuzzleState, PuzzleStatus};

#[derive(Parser)]
#[command(name = "bridge-puzzle")]
#[command(about = "Bridge-and-flashlight crossing puzzle")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the puzzle interactively
    Play {
        /// Path to a scenario JSON file (default: the classic setup)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Replay the scenario's canned solution step by step
    Demo {
        /// Path to a scenario JSON file (default: the classic setup)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Emit a machine-readable replay report instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the legal moves from the initial state as JSON
    Moves {
        /// Path to a scenario JSON file (default: the classic setup)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
}

/// One move in machine-readable output.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MoveOutput {
    group: Vec<String>,
    direction: Direction,
    minutes: u32,
}

/// Replay report for `demo --json`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReplayOutput {
    won: bool,
    elapsed_minutes: u32,
    time_limit: u32,
    moves: Vec<MoveOutput>,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { file } => {
            let scenario = load_scenario(file);
            let mut state = build_state(&scenario);
            play(&mut state);
        }
        Commands::Demo { file, json } => {
            let scenario = load_scenario(file);
            let mut state = build_state(&scenario);
            demo(&scenario, &mut state, json);
        }
        Commands::Moves { file } => {
            let scenario = load_scenario(file);
            let state = build_state(&scenario);
            let moves: Vec<MoveOutput> = state
                .valid_moves()
                .iter()
                .map(|m| move_output(m, &state))
                .collect();
            println!("{}", serde_json::to_string_pretty(&moves).unwrap());
        }
    }
}

fn load_scenario(file: Option<PathBuf>) -> Scenario {
    match file {
        Some(path) => {
            let json = fs::read_to_string(&path)
                .unwrap_or_else(|e| panic!("Failed to read file {:?}: {}", path, e));
            match Scenario::from_json(&json) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Error parsing scenario JSON: {}", e);
                    std::process::exit(1);
                }
            }
        }
        None => Scenario::classic(),
    }
}

fn build_state(scenario: &Scenario) -> PuzzleState {
    match scenario.build() {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Invalid scenario: {}", e);
            std::process::exit(1);
        }
    }
}

fn move_output(mv: &Move, state: &PuzzleState) -> MoveOutput {
    MoveOutput {
        group: mv
            .group()
            .iter()
            .map(|&id| state.roster().get(id).name().to_string())
            .collect(),
        direction: mv.direction(),
        minutes: mv.duration(state.bridge(), state.roster()),
    }
}

fn report_outcome(state: &PuzzleState) {
    match state.status() {
        PuzzleStatus::Won => println!(
            "Everyone crossed in {} minutes (limit {}). You win!",
            state.elapsed_time(),
            state.bridge().time_limit()
        ),
        PuzzleStatus::Lost => println!(
            "Time ran out at {} minutes with actors still on the left bank.",
            state.elapsed_time()
        ),
        PuzzleStatus::InProgress => println!("Game abandoned at {}", state.describe()),
    }
}

/// Interactive loop: show the state, list the legal moves numbered from 1,
/// read a selection or 'q'.
fn play(state: &mut PuzzleState) {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !state.is_over() {
        println!("\n{}", state.describe());

        let moves = state.valid_moves();
        if moves.is_empty() {
            println!("No legal moves remain.");
            break;
        }
        for (i, mv) in moves.iter().enumerate() {
            let minutes = mv.duration(state.bridge(), state.roster());
            println!("  {}. {} ({} min)", i + 1, mv.label(state.roster()), minutes);
        }

        print!("Choose a move (1-{}) or q to quit: ", moves.len());
        io::stdout().flush().expect("Failed to flush stdout");

        let line = match lines.next() {
            Some(Ok(line)) => line,
            _ => break,
        };
        let input = line.trim();
        if input.eq_ignore_ascii_case("q") {
            break;
        }

        let choice = match input.parse::<usize>() {
            Ok(n) if (1..=moves.len()).contains(&n) => n - 1,
            _ => {
                println!("Not a valid choice.");
                continue;
            }
        };

        let mv = moves[choice].clone();
        if state.apply_move(mv) {
            let last = state.history().last().unwrap();
            println!("Crossed: {}", last.label(state.roster()));
        } else {
            println!("That move is not legal.");
        }
    }

    println!();
    report_outcome(state);
}

/// Replay the scenario's embedded solution, printing each step (or a JSON
/// report with --json). Exits non-zero if the replay fails or loses.
fn demo(scenario: &Scenario, state: &mut PuzzleState, json: bool) {
    let solution = match &scenario.solution {
        Some(s) => s,
        None => {
            eprintln!("Scenario has no embedded solution to replay.");
            std::process::exit(1);
        }
    };

    if !json {
        println!("{}", state.bridge());
        println!("Start: {}", state.describe());
    }

    let mut executed = Vec::new();
    for (i, spec) in solution.iter().enumerate() {
        let mv = match Scenario::resolve_move(spec, state.roster()) {
            Ok(mv) => mv,
            Err(e) => {
                eprintln!("Bad move {} in solution: {}", i + 1, e);
                std::process::exit(1);
            }
        };
        if !state.apply_move(mv) {
            eprintln!("Move {} of the solution is not legal from this state", i + 1);
            std::process::exit(1);
        }
        let last = state.history().last().unwrap();
        executed.push(move_output(last, state));
        if !json {
            println!("Move {}: {}", i + 1, last.label(state.roster()));
            println!("        {}", state.describe());
        }
    }

    if json {
        let report = ReplayOutput {
            won: state.is_won(),
            elapsed_minutes: state.elapsed_time(),
            time_limit: state.bridge().time_limit(),
            moves: executed,
        };
        println!("{}", serde_json::to_string_pretty(&report).unwrap());
    } else {
        println!();
        report_outcome(state);
    }

    if !state.is_won() {
        std::process::exit(1);
    }
}

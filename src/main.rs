use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use crossterm::style::Stylize;
use eight_puzzle::{
    is_solvable, shuffle, shuffle_seeded, Algorithm, Board, PuzzleError, SearchBudget, Solution,
};
use itertools::Itertools;
use log::info;

/// Solve the 8-puzzle with A* and breadth-first search.
#[derive(Parser, Debug)]
#[command(name = "eight-puzzle")]
struct Args {
    /// Start board as nine integers in row-major order, 0 for the blank
    #[arg(short, long)]
    board: Option<Board>,

    /// Solver to run
    #[arg(short, long, value_enum, default_value_t = AlgorithmArg::Both)]
    algorithm: AlgorithmArg,

    /// Seed for the shuffled start board
    #[arg(long)]
    seed: Option<u64>,

    /// Stop a search after this many expansions
    #[arg(long)]
    max_expansions: Option<usize>,

    /// Print every board along the solution
    #[arg(long)]
    show_path: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum AlgorithmArg {
    Astar,
    Bfs,
    Both,
}

impl AlgorithmArg {
    fn algorithms(&self) -> Vec<Algorithm> {
        match self {
            AlgorithmArg::Astar => vec![Algorithm::AStar],
            AlgorithmArg::Bfs => vec![Algorithm::Bfs],
            AlgorithmArg::Both => Algorithm::ALL.to_vec(),
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", format!("{err}").red());
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), PuzzleError> {
    let start = match (args.board, args.seed) {
        (Some(board), _) => board,
        (None, Some(seed)) => shuffle_seeded(seed)?,
        (None, None) => shuffle()?,
    };
    if !is_solvable(&start) {
        info!("start board has the wrong inversion parity, searches will exhaust");
    }
    println!("Start board:\n{start}");

    let budget = match args.max_expansions {
        Some(max) => SearchBudget::with_max_expansions(max),
        None => SearchBudget::unlimited(),
    };

    for algorithm in args.algorithm.algorithms() {
        let solution = algorithm.solve_with_budget(start, &budget);
        report(algorithm, &solution, args.show_path);
    }
    Ok(())
}

fn report(algorithm: Algorithm, solution: &Solution, show_path: bool) {
    let stats = format!(
        "{} nodes expanded in {:.4}s",
        solution.expanded,
        solution.elapsed_secs()
    );
    match &solution.path {
        Some(path) => {
            let moves = path.len() - 1;
            println!("{}", format!("{algorithm}: {moves} moves, {stats}").green());
            if let Some(moves) = solution.moves() {
                println!("  {}", moves.iter().join(" "));
            }
            if show_path {
                for (step, board) in path.iter().enumerate() {
                    println!("Step {step}:\n{board}");
                }
            }
        }
        None if solution.budget_exhausted => {
            println!("{}", format!("{algorithm}: budget exhausted, {stats}").yellow());
        }
        None => {
            println!("{}", format!("{algorithm}: no solution, {stats}").red());
        }
    }
}

use clap::{Parser, ValueEnum};
use eight_puzzle_solver::heuristics::Heuristic;
use eight_puzzle_solver::solver::{solve, Strategy};
use eight_puzzle_solver::utils::{format_path, state_from_tiles};
use std::process;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyArg {
    DepthFirst,
    BreadthFirst,
    BestFirst,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum HeuristicArg {
    MisplacedTiles,
    ManhattanDistance,
    CompositeH,
}

impl From<HeuristicArg> for Heuristic {
    fn from(arg: HeuristicArg) -> Self {
        match arg {
            HeuristicArg::MisplacedTiles => Heuristic::MisplacedTiles,
            HeuristicArg::ManhattanDistance => Heuristic::ManhattanDistance,
            HeuristicArg::CompositeH => Heuristic::CompositeH,
        }
    }
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Search strategy to run
    #[clap(short, long, value_enum, default_value_t = StrategyArg::BreadthFirst)]
    strategy: StrategyArg,

    /// Heuristic guiding best-first search (ignored by the other strategies)
    #[clap(long, value_enum, default_value_t = HeuristicArg::CompositeH)]
    heuristic: HeuristicArg,

    /// Starting board: nine tiles in row-major order, 0 for the blank
    #[clap(value_name = "TILE", num_args = 9, required = true)]
    tiles: Vec<u8>,
}

fn main() {
    let args = Args::parse();

    let start = match state_from_tiles(&args.tiles) {
        Ok(state) => state,
        Err(message) => {
            eprintln!("Invalid board: {}", message);
            process::exit(1);
        }
    };

    if !start.is_solvable() {
        eprintln!("The given board cannot reach the goal (odd inversion parity).");
        process::exit(1);
    }

    let strategy = match args.strategy {
        StrategyArg::DepthFirst => Strategy::DepthFirst,
        StrategyArg::BreadthFirst => Strategy::BreadthFirst,
        StrategyArg::BestFirst => Strategy::BestFirst(args.heuristic.into()),
    };

    println!("Starting state:\n{}\n", start);
    println!("Solving with {:?}...\n", strategy);

    let path = solve(strategy, &start);

    if path.is_empty() {
        // Unreachable after the solvability gate, but handled all the same.
        println!("No solution found.");
        process::exit(1);
    }

    println!("Number of states on the path: {}", path.len());
    println!("Path from the starting state to the goal:");
    print!("{}", format_path(&path));
}

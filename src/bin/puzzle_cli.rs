use eight_puzzle_solver::engine::State;
use eight_puzzle_solver::heuristics::Heuristic;
use eight_puzzle_solver::solver::{best_first_search, breadth_first_search, depth_first_search};
use eight_puzzle_solver::utils::{format_path, state_from_str};
use std::io::{self, Write};

fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?; // Ensure the prompt is shown before input

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() || input.is_empty() {
        return None; // Read error or end of input
    }
    Some(input.trim().to_string())
}

fn read_start_state() -> Option<State> {
    loop {
        let line = read_line("Please enter your 8-puzzle: ")?;
        match state_from_str(&line) {
            Ok(state) => {
                if state.is_solvable() {
                    return Some(state);
                }
                println!("That puzzle is not solvable. Please try again.");
            }
            Err(message) => println!("Invalid input: {}. Please try again.", message),
        }
    }
}

fn print_path(path: &[State]) {
    println!("Number of states: {}", path.len());
    println!("Path from the starting state to the goal:");
    print!("{}", format_path(path));
}

fn run_best_first(start: &State) {
    loop {
        println!("\nPlease select a heuristic:");
        println!("1. Number of misplaced tiles");
        println!("2. Manhattan distance");
        println!("3. The heuristic H (H = totdist + 3*seq)");
        println!("4. Go back");

        let choice = match read_line("Enter your choice using a number: ") {
            Some(line) => line,
            None => return,
        };

        let heuristic = match choice.as_str() {
            "1" => Heuristic::MisplacedTiles,
            "2" => Heuristic::ManhattanDistance,
            "3" => Heuristic::CompositeH,
            "4" => return,
            _ => {
                println!("Invalid input. Please try again.");
                continue;
            }
        };

        println!("Solving with best-first search, {:?}...", heuristic);
        print_path(&best_first_search(start, heuristic));
    }
}

fn main() {
    println!("\nWelcome to the 8-puzzle solver!");
    println!("A completed 8-puzzle looks like this:");
    println!("{}", State::goal());
    println!("Enter your own puzzle as nine numbers from left to right, top to");
    println!("bottom, separated by spaces, with 0 for the blank.");
    println!("The board above would be entered as: 1 2 3 8 0 4 7 6 5\n");

    let start = match read_start_state() {
        Some(state) => state,
        None => return,
    };

    println!("\nStarting state:\n{}", start);

    loop {
        println!("\nPlease choose from the options below:");
        println!("1. Depth-first search");
        println!("2. Breadth-first search");
        println!("3. Best-first search");
        println!("4. End program");

        let choice = match read_line("Enter your choice using a number: ") {
            Some(line) => line,
            None => break,
        };

        match choice.as_str() {
            "1" => {
                println!("Solving with depth-first search...");
                print_path(&depth_first_search(&start));
            }
            "2" => {
                println!("Solving with breadth-first search...");
                print_path(&breadth_first_search(&start));
            }
            "3" => run_best_first(&start),
            "4" => {
                println!("Goodbye!");
                break;
            }
            _ => println!("Invalid input. Please try again."),
        }
    }
}

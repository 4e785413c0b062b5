use eight_puzzle_solver::engine::State;
use eight_puzzle_solver::heuristics::Heuristic;
use eight_puzzle_solver::solver::{best_first_search, breadth_first_search};
use std::collections::HashMap;

const NUM_SCRAMBLES: usize = 20;
const START_SEED: u64 = 0;

fn main() {
    let heuristics = [
        ("MisplacedTiles", Heuristic::MisplacedTiles),
        ("ManhattanDistance", Heuristic::ManhattanDistance),
        ("CompositeH", Heuristic::CompositeH),
    ];

    let mut all_lengths: HashMap<&str, Vec<usize>> = HashMap::new();
    for (name, _) in &heuristics {
        all_lengths.insert(*name, Vec::new());
    }
    let mut optimal_lengths: Vec<usize> = Vec::new();

    println!("Benchmarking best-first heuristics on {} scrambles...", NUM_SCRAMBLES);

    for scramble_idx in 0..NUM_SCRAMBLES {
        let seed = START_SEED + scramble_idx as u64;
        let start = State::random_solvable_with_seed(seed);

        // Breadth-first gives the true minimum move count as a baseline.
        let optimal = breadth_first_search(&start).len();
        optimal_lengths.push(optimal);

        println!("\nScramble {} (seed {}), optimal path length {}:", scramble_idx, seed, optimal);

        for (name, heuristic) in &heuristics {
            let path = best_first_search(&start, *heuristic);
            if path.is_empty() {
                eprintln!(
                    "Warning: {} found no path for seed {}, which should be impossible for a solvable scramble.",
                    name, seed
                );
                continue;
            }
            println!("  Heuristic: {:<18} Path length: {}", name, path.len());
            all_lengths.get_mut(name).expect("heuristic registered above").push(path.len());
        }
    }

    println!("\n--- Benchmark complete ---");
    println!("Scrambles evaluated: {}", NUM_SCRAMBLES);

    let optimal_avg =
        optimal_lengths.iter().sum::<usize>() as f64 / optimal_lengths.len() as f64;
    println!("\n--- Average path lengths (lower is better) ---");
    println!("{:<18}: {:.2} (breadth-first baseline)", "Optimal", optimal_avg);

    let mut averages: Vec<(&str, f64)> = all_lengths
        .iter()
        .filter(|(_, lengths)| !lengths.is_empty())
        .map(|(name, lengths)| {
            let avg = lengths.iter().sum::<usize>() as f64 / lengths.len() as f64;
            (*name, avg)
        })
        .collect();

    // Best (shortest average path) first.
    averages.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    for (name, avg) in averages {
        println!("{:<18}: {:.2}", name, avg);
    }
}

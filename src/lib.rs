//! # 8-Puzzle Solver Library
//!
//! This library explores the state space of the 8-puzzle (a 3x3 sliding-tile
//! board with one blank cell) to find a path from a starting configuration to
//! the fixed goal configuration `1 2 3 / 8 0 4 / 7 6 5`.
//!
//! It is used by three binaries:
//! - `solve`: Takes a board and a strategy on the command line and prints the
//!   discovered path.
//! - `puzzle_cli`: Interactive menu-driven solver.
//! - `heuristic_benchmark`: Compares the best-first heuristics over seeded
//!   random scrambles.
//!
//! ## Modules
//! - `engine`: The board state representation (`State`), the goal constant,
//!   move generation, the solvability pre-check, and scramble generation.
//! - `heuristics`: The three heuristic evaluators (misplaced tiles, Manhattan
//!   distance, and the composite H score) behind the `Heuristic` enum.
//! - `solver`: The three search strategies (depth-first, breadth-first, and
//!   best-first) behind the `Strategy` enum.
//! - `utils`: Input validation for user-supplied boards and text rendering of
//!   solution paths.

pub mod engine;
pub mod heuristics;
pub mod solver;
pub mod utils;

// Items from sub-modules, if public, should be accessed via their full path,
// e.g. `eight_puzzle_solver::solver::solve`. This keeps the top-level library
// namespace cleaner.

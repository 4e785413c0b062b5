//! Core state representation for the 8-puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `State`: an immutable 3x3 board value with the blank encoded as 0.
//! - `GOAL`: the fixed goal configuration every search drives toward.
//! - Move generation (`State::successors`), the inversion-parity solvability
//!   check (`State::is_solvable`), and seeded scramble generation.
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fmt;

/// The goal configuration of the 8-puzzle, row-major. 0 is the blank.
///
/// ```text
/// 1 2 3
/// 8 0 4
/// 7 6 5
/// ```
pub const GOAL: [u8; 9] = [1, 2, 3, 8, 0, 4, 7, 6, 5];

// Lookup from tile value to its index in GOAL, so solvability and Manhattan
// distance never rescan the goal board. GOAL_INDEX[t] == position of t in GOAL.
const GOAL_INDEX: [usize; 9] = [4, 0, 1, 2, 5, 8, 7, 6, 3];

/// Returns the index of `tile` in the goal board.
///
/// Callers must pass a value in `0..=8`; anything else is not a tile.
pub fn goal_index(tile: u8) -> usize {
    GOAL_INDEX[tile as usize]
}

/// A single configuration of the 8-puzzle.
///
/// The board is a row-major permutation of `0..=8`, with 0 denoting the blank
/// cell. `State` is a plain value: creating a successor copies the board and
/// swaps two cells, and nothing is ever mutated in place. Equality, hashing,
/// and ordering all derive from the board alone, so a `State` can serve
/// directly as a set or map key.
///
/// Search bookkeeping such as depth or heuristic estimates is deliberately
/// not stored here; the solver attaches it to its frontier entries instead,
/// so the same board value reused across branches can never carry a stale
/// annotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State {
    board: [u8; 9],
}

impl State {
    /// Creates a state from a row-major board.
    ///
    /// The board is assumed to be a permutation of `0..=8`; use
    /// [`crate::utils::state_from_tiles`] to validate untrusted input first.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::{State, GOAL};
    /// let state = State::new(GOAL);
    /// assert!(state.is_goal());
    /// ```
    pub fn new(board: [u8; 9]) -> Self {
        State { board }
    }

    /// Returns the goal state.
    pub fn goal() -> Self {
        State { board: GOAL }
    }

    /// Returns the row-major board.
    pub fn board(&self) -> &[u8; 9] {
        &self.board
    }

    /// Returns the index of the blank cell.
    ///
    /// Always recomputed by scanning the board so it cannot drift out of sync
    /// with the cells.
    ///
    /// # Panics
    /// Panics if the board holds no blank, which cannot happen for a
    /// permutation of `0..=8`.
    pub fn blank_index(&self) -> usize {
        self.board
            .iter()
            .position(|&tile| tile == 0)
            .expect("board holds no blank tile")
    }

    /// Returns `true` if this state is the goal configuration.
    pub fn is_goal(&self) -> bool {
        self.board == GOAL
    }

    /// Checks whether the goal is reachable from this state.
    ///
    /// Counts inversions: pairs of non-blank tiles whose order in this board
    /// is the reverse of their order in the goal board. A single blank move
    /// preserves inversion parity, so the goal is reachable iff the count is
    /// even.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::State;
    /// assert!(State::goal().is_solvable());
    /// // Swapping two non-blank tiles of the goal flips the parity.
    /// assert!(!State::new([2, 1, 3, 8, 0, 4, 7, 6, 5]).is_solvable());
    /// ```
    pub fn is_solvable(&self) -> bool {
        let mut inversions = 0;
        for i in 0..9 {
            for j in (i + 1)..9 {
                let (a, b) = (self.board[i], self.board[j]);
                if a != 0 && b != 0 && goal_index(a) > goal_index(b) {
                    inversions += 1;
                }
            }
        }
        inversions % 2 == 0
    }

    /// Generates every state reachable by sliding one tile into the blank.
    ///
    /// The blank may move up, down, left, or right (linear-index offsets -3,
    /// +3, -1, +1). A move is legal iff the target index stays within the
    /// board and a horizontal move does not wrap across a row boundary.
    /// Corners therefore yield 2 successors, edges 3, and the center 4.
    ///
    /// The input state is not modified; each successor is a fresh copy with
    /// the blank and one neighbor swapped.
    pub fn successors(&self) -> Vec<State> {
        let blank = self.blank_index();
        let mut moves = Vec::with_capacity(4);

        for offset in [-3i32, 3, -1, 1] {
            let target = blank as i32 + offset;

            if !(0..9).contains(&target) {
                continue;
            }
            // Horizontal moves must stay within the blank's row.
            if (offset == -1 && blank % 3 == 0) || (offset == 1 && blank % 3 == 2) {
                continue;
            }

            let mut board = self.board;
            board.swap(blank, target as usize);
            moves.push(State { board });
        }

        moves
    }

    /// Generates a random solvable state from the given seed.
    ///
    /// Shuffles the nine tiles with a seeded `SmallRng` and retries until the
    /// parity check passes, so roughly half of all shuffles are kept. The
    /// same seed always produces the same state, which makes benchmark runs
    /// and tests reproducible.
    pub fn random_solvable_with_seed(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board: [u8; 9] = [0, 1, 2, 3, 4, 5, 6, 7, 8];

        loop {
            board.shuffle(&mut rng);
            let state = State { board };
            if state.is_solvable() {
                return state;
            }
        }
    }
}

impl fmt::Display for State {
    /// Formats the board as a bordered 3x3 grid.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---------")?;
        for row in 0..3 {
            writeln!(
                f,
                "| {} {} {} |",
                self.board[row * 3],
                self.board[row * 3 + 1],
                self.board[row * 3 + 2]
            )?;
        }
        write!(f, "---------")
    }
}

//! The three search strategies over the 8-puzzle state space.
//!
//! All strategies share the same skeleton: pop a state from the frontier per
//! the strategy's removal policy, stop when it is the goal, skip it when it
//! was already expanded, and otherwise expand it through
//! [`State::successors`]. Stale duplicate frontier entries are tolerated and
//! discarded at pop time rather than prevented at insertion.
//!
//! Every search returns the full path from the start state to the goal,
//! inclusive of both endpoints, or an empty vector once the frontier is
//! exhausted. Callers are expected to gate on [`State::is_solvable`] first;
//! the empty return then only covers the defensive case.
use crate::engine::State;
use crate::heuristics::Heuristic;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

/// The traversal strategies the solver can run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Stack-based (LIFO) traversal. Terminates but makes no promise about
    /// path length.
    DepthFirst,
    /// Queue-based (FIFO) traversal. Returns a path with the minimum number
    /// of moves.
    BreadthFirst,
    /// Priority-based traversal ordered by depth plus the chosen heuristic.
    BestFirst(Heuristic),
}

/// Runs the chosen strategy from `start` and returns the discovered path.
pub fn solve(strategy: Strategy, start: &State) -> Vec<State> {
    match strategy {
        Strategy::DepthFirst => depth_first_search(start),
        Strategy::BreadthFirst => breadth_first_search(start),
        Strategy::BestFirst(heuristic) => best_first_search(start, heuristic),
    }
}

/// Explores the state space depth-first.
///
/// Uses a stack frontier with a visited set and a child-to-parent map for
/// path reconstruction. The returned path ends at the goal but may be far
/// longer than optimal.
pub fn depth_first_search(start: &State) -> Vec<State> {
    let mut frontier = vec![*start];
    let mut visited: HashSet<State> = HashSet::new();
    let mut came_from: HashMap<State, State> = HashMap::new();

    while let Some(current) = frontier.pop() {
        if current.is_goal() {
            return reconstruct_path(&came_from, start, current);
        }

        // A state can sit in the frontier several times; expand it once.
        if !visited.insert(current) {
            continue;
        }

        for child in current.successors() {
            if !visited.contains(&child) {
                came_from.insert(child, current);
                frontier.push(child);
            }
        }
    }

    Vec::new()
}

/// Explores the state space breadth-first.
///
/// Identical bookkeeping to [`depth_first_search`] with a FIFO frontier, so
/// all states at depth `d` are expanded before any state at depth `d + 1`
/// and the returned path has the minimum number of moves.
pub fn breadth_first_search(start: &State) -> Vec<State> {
    let mut frontier = VecDeque::from([*start]);
    let mut visited: HashSet<State> = HashSet::new();
    let mut came_from: HashMap<State, State> = HashMap::new();

    while let Some(current) = frontier.pop_front() {
        if current.is_goal() {
            return reconstruct_path(&came_from, start, current);
        }

        if !visited.insert(current) {
            continue;
        }

        for child in current.successors() {
            if !visited.contains(&child) {
                came_from.insert(child, current);
                frontier.push_back(child);
            }
        }
    }

    Vec::new()
}

// A frontier entry for best-first search. The entry owns the entire path by
// which its state was reached, so the result is available the moment the
// goal is popped, with no separate backtrace pass.
struct FrontierEntry {
    heuristic: Heuristic,
    path: Vec<State>,
}

impl FrontierEntry {
    fn state(&self) -> &State {
        self.path.last().expect("frontier entry holds a non-empty path")
    }

    // Evaluation function f = g + h, where g is the depth along this entry's
    // own path. Recomputed on every comparison rather than cached, so the
    // ordering can never observe a stale annotation.
    fn priority(&self) -> u32 {
        let g = (self.path.len() - 1) as u32;
        g + self.heuristic.evaluate(self.state())
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.priority() == other.priority()
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap pops the maximum; flip the comparison so the entry with
        // the lowest f comes out first. Ties fall to heap order.
        other.priority().cmp(&self.priority())
    }
}

/// Explores the state space best-first, guided by `heuristic`.
///
/// Frontier entries are ordered by ascending `g + h`, where `g` is the depth
/// of the entry along the particular path by which its state was reached —
/// not a verified shortest distance to that board. Combined with the
/// tolerated stale duplicates this makes the search a greedy
/// evaluation-function search rather than strict A*: it terminates on the
/// goal quickly but the path it returns is not guaranteed minimal.
pub fn best_first_search(start: &State, heuristic: Heuristic) -> Vec<State> {
    let mut frontier = BinaryHeap::new();
    let mut visited: HashSet<State> = HashSet::new();

    frontier.push(FrontierEntry {
        heuristic,
        path: vec![*start],
    });

    while let Some(entry) = frontier.pop() {
        let current = *entry.state();

        if current.is_goal() {
            return entry.path;
        }

        if !visited.insert(current) {
            continue;
        }

        for child in current.successors() {
            if !visited.contains(&child) {
                let mut path = entry.path.clone();
                path.push(child);
                frontier.push(FrontierEntry { heuristic, path });
            }
        }
    }

    Vec::new()
}

// Walks the child-to-parent map from the goal back to the start, then
// reverses. Every state on the chain was expanded before its children were
// recorded, so the walk cannot cycle; the defensive break covers a goal that
// was never recorded, which post-gate should not occur.
fn reconstruct_path(came_from: &HashMap<State, State>, start: &State, goal: State) -> Vec<State> {
    let mut path = vec![goal];
    let mut current = goal;

    while current != *start {
        match came_from.get(&current) {
            Some(&parent) => {
                path.push(parent);
                current = parent;
            }
            None => break,
        }
    }

    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::GOAL;

    // A solvable scramble a handful of moves from the goal.
    const SCRAMBLED: [u8; 9] = [2, 8, 1, 0, 4, 3, 7, 6, 5];

    const ALL_STRATEGIES: [Strategy; 5] = [
        Strategy::DepthFirst,
        Strategy::BreadthFirst,
        Strategy::BestFirst(Heuristic::MisplacedTiles),
        Strategy::BestFirst(Heuristic::ManhattanDistance),
        Strategy::BestFirst(Heuristic::CompositeH),
    ];

    // Asserts the path is a legal walk: non-empty, correct endpoints, and
    // every consecutive pair differs by exactly one adjacent blank swap.
    fn assert_valid_path(path: &[State], start: &State) {
        assert!(!path.is_empty(), "expected a non-empty path");
        assert_eq!(path.first(), Some(start), "path must begin at the start");
        assert!(path.last().unwrap().is_goal(), "path must end at the goal");

        for window in path.windows(2) {
            let (parent, child) = (&window[0], &window[1]);
            assert!(
                parent.successors().contains(child),
                "{}\nis not one legal move from\n{}",
                child,
                parent
            );
        }
    }

    #[test]
    fn test_goal_start_needs_no_expansion() {
        let goal = State::goal();
        for strategy in ALL_STRATEGIES {
            let path = solve(strategy, &goal);
            assert_eq!(path, vec![goal], "strategy {:?}", strategy);
        }
    }

    #[test]
    fn test_breadth_first_is_minimal_one_move_out() {
        // Every successor of the goal is exactly one move away, so the
        // minimum path holds two states.
        for start in State::goal().successors() {
            let path = breadth_first_search(&start);
            assert_eq!(path.len(), 2);
            assert_valid_path(&path, &start);
        }
    }

    #[test]
    fn test_breadth_first_respects_manhattan_lower_bound() {
        let start = State::new(SCRAMBLED);
        let path = breadth_first_search(&start);
        assert_valid_path(&path, &start);
        // Each move changes one tile's distance by at most one, so no path
        // can be shorter than the total Manhattan distance.
        let moves = (path.len() - 1) as u32;
        assert!(moves >= crate::heuristics::manhattan_distance(&start));
    }

    #[test]
    fn test_all_strategies_reach_goal_on_scramble() {
        let start = State::new(SCRAMBLED);
        for strategy in ALL_STRATEGIES {
            let path = solve(strategy, &start);
            assert_valid_path(&path, &start);
        }
    }

    #[test]
    fn test_breadth_first_never_longer_than_depth_first() {
        let start = State::new(SCRAMBLED);
        let bfs_path = breadth_first_search(&start);
        let dfs_path = depth_first_search(&start);
        assert_valid_path(&bfs_path, &start);
        assert_valid_path(&dfs_path, &start);
        assert!(bfs_path.len() <= dfs_path.len());
    }

    #[test]
    fn test_breadth_first_never_longer_than_best_first() {
        let start = State::random_solvable_with_seed(7);
        let optimal = breadth_first_search(&start).len();
        assert!(optimal > 0);
        for heuristic in [
            Heuristic::MisplacedTiles,
            Heuristic::ManhattanDistance,
            Heuristic::CompositeH,
        ] {
            let path = best_first_search(&start, heuristic);
            assert_valid_path(&path, &start);
            assert!(optimal <= path.len());
        }
    }

    #[test]
    fn test_exhausted_frontier_returns_empty_path() {
        // Odd parity: the goal's connected component is never entered, so
        // the search drains the other half of the state space and gives up.
        let unsolvable = State::new([2, 1, 3, 8, 0, 4, 7, 6, 5]);
        assert!(!unsolvable.is_solvable());
        assert!(breadth_first_search(&unsolvable).is_empty());
    }

    #[test]
    fn test_best_first_path_carries_both_endpoints() {
        let start = State::new(SCRAMBLED);
        let path = best_first_search(&start, Heuristic::CompositeH);
        assert_eq!(path.first(), Some(&start));
        assert_eq!(*path.last().unwrap().board(), GOAL);
        // The goal appears exactly once, at the end.
        assert_eq!(path.iter().filter(|state| state.is_goal()).count(), 1);
    }
}

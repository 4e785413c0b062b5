//! Heuristic evaluators for guiding best-first search.
//!
//! Each evaluator is a pure, stateless function of a `State`: nothing is
//! cached between calls, and the goal board scores 0 under all of them.
use crate::engine::{goal_index, State, GOAL};

/// The closed set of heuristics the best-first search can be guided by.
///
/// Passing the variant explicitly (rather than an integer code) keeps the
/// dispatch exhaustive: adding a heuristic forces every match site to handle
/// it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heuristic {
    /// Number of non-blank tiles not on their goal cell.
    MisplacedTiles,
    /// Total Manhattan distance of the non-blank tiles to their goal cells.
    ManhattanDistance,
    /// `manhattan_distance + 3 * sequence_score`, rewarding boards whose
    /// perimeter ring already follows the goal's clockwise tile order.
    CompositeH,
}

impl Heuristic {
    /// Evaluates this heuristic on `state`.
    pub fn evaluate(&self, state: &State) -> u32 {
        match self {
            Heuristic::MisplacedTiles => misplaced_tiles(state),
            Heuristic::ManhattanDistance => manhattan_distance(state),
            Heuristic::CompositeH => composite_h(state),
        }
    }
}

/// Counts the non-blank tiles that differ from the goal cell at the same
/// index.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::engine::State;
/// use eight_puzzle_solver::heuristics::misplaced_tiles;
/// assert_eq!(misplaced_tiles(&State::goal()), 0);
/// assert_eq!(misplaced_tiles(&State::new([2, 1, 3, 8, 0, 4, 7, 6, 5])), 2);
/// ```
pub fn misplaced_tiles(state: &State) -> u32 {
    let mut count = 0;
    for (index, &tile) in state.board().iter().enumerate() {
        if tile != 0 && tile != GOAL[index] {
            count += 1;
        }
    }
    count
}

/// Sums, over the non-blank tiles, the row and column distance between each
/// tile's current cell and its goal cell.
///
/// Goal positions come from the precomputed goal lookup, so each call is a
/// single pass over the board.
pub fn manhattan_distance(state: &State) -> u32 {
    let mut total = 0;
    for (index, &tile) in state.board().iter().enumerate() {
        if tile == 0 {
            continue;
        }
        let goal = goal_index(tile);
        let row_distance = (index / 3).abs_diff(goal / 3);
        let col_distance = (index % 3).abs_diff(goal % 3);
        total += (row_distance + col_distance) as u32;
    }
    total
}

// Perimeter cells in clockwise order starting at the top-left corner. The
// goal's tiles 1..=8 follow exactly this ring.
const CLOCKWISE_RING: [usize; 8] = [0, 1, 2, 5, 8, 7, 6, 3];

/// Scores how far the board's ring ordering is from the goal's clockwise
/// tile cycle.
///
/// Adds 1 if the center cell is occupied by a tile, then walks the perimeter
/// clockwise from the top-left corner: each non-blank tile contributes 2
/// unless its clockwise neighbor is the tile's required successor (tile + 1,
/// wrapping 8 back to 1). The score is independent of where on the ring the
/// sequence sits, which is what makes it useful as a directedness signal on
/// top of plain distance.
pub fn sequence_score(state: &State) -> u32 {
    let board = state.board();
    let mut score = 0;

    if board[4] != 0 {
        score += 1;
    }

    for position in 0..8 {
        let tile = board[CLOCKWISE_RING[position]];
        if tile == 0 {
            continue;
        }
        let required_successor = if tile == 8 { 1 } else { tile + 1 };
        let neighbor = board[CLOCKWISE_RING[(position + 1) % 8]];
        if neighbor != required_successor {
            score += 2;
        }
    }

    score
}

/// The composite heuristic `H = manhattan_distance + 3 * sequence_score`.
pub fn composite_h(state: &State) -> u32 {
    manhattan_distance(state) + 3 * sequence_score(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_scores_zero_under_every_heuristic() {
        let goal = State::goal();
        assert_eq!(misplaced_tiles(&goal), 0);
        assert_eq!(manhattan_distance(&goal), 0);
        assert_eq!(sequence_score(&goal), 0);
        assert_eq!(composite_h(&goal), 0);
    }

    #[test]
    fn test_misplaced_tiles_ignores_blank() {
        // Blank moved off its goal cell, tile 4 sits on it: only the tile
        // counts.
        let state = State::new([1, 2, 3, 8, 4, 0, 7, 6, 5]);
        assert_eq!(misplaced_tiles(&state), 1);
    }

    #[test]
    fn test_misplaced_tiles_counts_swapped_pair() {
        let state = State::new([2, 1, 3, 8, 0, 4, 7, 6, 5]);
        assert_eq!(misplaced_tiles(&state), 2);
    }

    #[test]
    fn test_manhattan_distance_examples() {
        // Tiles 1 and 2 are each one cell from home.
        assert_eq!(manhattan_distance(&State::new([2, 1, 3, 8, 0, 4, 7, 6, 5])), 2);
        // Tile 4 is one cell from home; the blank contributes nothing.
        assert_eq!(manhattan_distance(&State::new([1, 2, 3, 8, 4, 0, 7, 6, 5])), 1);
        // 2:1 + 8:2 + 1:2 + 4:1 + 3:1, bottom row in place.
        assert_eq!(manhattan_distance(&State::new([2, 8, 1, 0, 4, 3, 7, 6, 5])), 7);
    }

    #[test]
    fn test_sequence_score_penalizes_occupied_center() {
        // Ring is the goal ring but tile 4 occupies the center.
        let one_move = State::new([1, 2, 3, 8, 4, 0, 7, 6, 5]);
        // +1 for the center, +2 for tile 3 whose clockwise neighbor is now
        // the blank instead of 4.
        assert_eq!(sequence_score(&one_move), 3);
    }

    #[test]
    fn test_sequence_score_on_scrambled_ring() {
        // Ring reads 2, 8, 1, 3, 5, 6, 7, blank; center holds 4.
        let state = State::new([2, 8, 1, 0, 4, 3, 7, 6, 5]);
        // Center occupied (+1); tiles 2, 1, 3, and 7 each lack their
        // successor (+2 apiece); 8 -> 1, 5 -> 6, and 6 -> 7 are in sequence.
        assert_eq!(sequence_score(&state), 9);
    }

    #[test]
    fn test_composite_h_combines_distance_and_sequence() {
        let state = State::new([2, 8, 1, 0, 4, 3, 7, 6, 5]);
        assert_eq!(composite_h(&state), 7 + 3 * 9);

        let one_move = State::new([1, 2, 3, 8, 4, 0, 7, 6, 5]);
        assert_eq!(composite_h(&one_move), 1 + 3 * 3);
    }

    #[test]
    fn test_enum_dispatch_matches_free_functions() {
        let state = State::new([2, 8, 1, 0, 4, 3, 7, 6, 5]);
        assert_eq!(Heuristic::MisplacedTiles.evaluate(&state), misplaced_tiles(&state));
        assert_eq!(
            Heuristic::ManhattanDistance.evaluate(&state),
            manhattan_distance(&state)
        );
        assert_eq!(Heuristic::CompositeH.evaluate(&state), composite_h(&state));
    }
}

//! Boundary helpers: validating user-supplied boards and rendering paths.
//!
//! The search core assumes well-formed boards, so everything arriving from
//! the outside goes through [`state_from_tiles`] (or [`state_from_str`])
//! first. Rendering keeps the core print-free: searches return plain state
//! sequences and the helpers here turn them into bordered text grids.
use crate::engine::State;

/// Validates nine tile values and builds a `State` from them.
///
/// The input must be exactly the multiset `{0, ..., 8}` in row-major order:
/// nine values, each in range, none repeated. This is the validation the
/// search core itself does not perform.
///
/// # Arguments
/// * `tiles`: The candidate board, top-left to bottom-right.
///
/// # Returns
/// * `Ok(State)` if `tiles` is a permutation of `0..=8`.
/// * `Err(String)` describing the first problem found otherwise.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::utils::state_from_tiles;
///
/// assert!(state_from_tiles(&[1, 2, 3, 8, 0, 4, 7, 6, 5]).is_ok());
/// assert!(state_from_tiles(&[1, 2, 3]).is_err());          // wrong count
/// assert!(state_from_tiles(&[1, 2, 3, 9, 0, 4, 7, 6, 5]).is_err()); // out of range
/// assert!(state_from_tiles(&[1, 1, 3, 8, 0, 4, 7, 6, 5]).is_err()); // duplicate
/// ```
pub fn state_from_tiles(tiles: &[u8]) -> Result<State, String> {
    if tiles.len() != 9 {
        return Err(format!("Expected 9 tiles, found {}", tiles.len()));
    }

    let mut board = [0u8; 9];
    let mut seen = [false; 9];

    for (index, &tile) in tiles.iter().enumerate() {
        if tile > 8 {
            return Err(format!("Tile value {} is out of range 0-8", tile));
        }
        if seen[tile as usize] {
            return Err(format!("Tile value {} appears more than once", tile));
        }
        seen[tile as usize] = true;
        board[index] = tile;
    }

    Ok(State::new(board))
}

/// Parses a board from whitespace-separated integers.
///
/// Accepts the input format of the interactive solver: nine numbers from
/// left to right, top to bottom, with 0 for the blank, e.g.
/// `"1 2 3 8 0 4 7 6 5"`. Delegates the permutation check to
/// [`state_from_tiles`].
pub fn state_from_str(input: &str) -> Result<State, String> {
    let tiles = input
        .split_whitespace()
        .map(|token| {
            token
                .parse::<u8>()
                .map_err(|_| format!("'{}' is not a number between 0 and 8", token))
        })
        .collect::<Result<Vec<u8>, String>>()?;

    state_from_tiles(&tiles)
}

/// Renders a batch of states side by side as bordered grids.
///
/// Produces five text lines per batch (border, three tile rows, border),
/// with two spaces between neighboring boards. Intended for short batches;
/// [`format_path`] handles the chunking.
pub fn format_states(states: &[State]) -> String {
    let mut lines = vec![String::new(); 5];

    for state in states {
        lines[0].push_str("---------  ");
        for row in 0..3 {
            let board = state.board();
            lines[row + 1].push_str(&format!(
                "| {} {} {} |  ",
                board[row * 3],
                board[row * 3 + 1],
                board[row * 3 + 2]
            ));
        }
        lines[4].push_str("---------  ");
    }

    let mut output = String::new();
    for line in &lines {
        output.push_str(line.trim_end());
        output.push('\n');
    }
    output
}

/// Renders a whole solution path, at most 10 boards per row of grids.
pub fn format_path(path: &[State]) -> String {
    let mut output = String::new();
    for chunk in path.chunks(10) {
        output.push_str(&format_states(chunk));
    }
    output
}

//! Empty-cell queries and draw detection.

use crate::types::{Board, Square};

/// Indices of all empty cells, ascending.
pub fn empty_indices(board: &Board) -> Vec<usize> {
    board
        .squares()
        .iter()
        .enumerate()
        .filter(|(_, s)| **s == Square::Empty)
        .map(|(i, _)| i)
        .collect()
}

/// Checks if every cell is occupied.
///
/// A full board with no winner is a draw.
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

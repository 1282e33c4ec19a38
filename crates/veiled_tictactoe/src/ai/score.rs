//! Heuristic score for a single candidate cell.

use crate::coords::is_center_zone;
use crate::rules::count_lines_with_exactly;
use crate::types::{Board, Mark};
use tracing::trace;

/// Per open line holding two of the mover's marks after the move.
pub const NEAR_WIN_WEIGHT: i32 = 100;

/// Per opponent two-mark line that the move shuts.
pub const BLOCK_WEIGHT: i32 = 80;

/// Per open line holding one of the mover's marks after the move.
pub const SINGLE_WEIGHT: i32 = 10;

/// Flat bonus for center-region cells.
pub const CENTER_BONUS: i32 = 3;

/// Score of a cell that is already taken.
pub const OCCUPIED_SENTINEL: i32 = -1_000_000;

/// Scores placing `mover` at `index`.
///
/// `blocks` is the drop in opponent two-mark lines across the whole board,
/// not a check that `index` is the missing cell of a particular line.
/// The board is unchanged on return.
pub fn score_move(board: &mut Board, index: usize, mover: Mark, opponent: Mark) -> i32 {
    if !board.is_empty(index) {
        return OCCUPIED_SENTINEL;
    }

    let (my_two, my_one) = {
        let placed = board.speculate(index, mover);
        (
            count_lines_with_exactly(&placed, mover, 2),
            count_lines_with_exactly(&placed, mover, 1),
        )
    };

    let opp_two_before = count_lines_with_exactly(board, opponent, 2);
    let opp_two_after = {
        let placed = board.speculate(index, mover);
        count_lines_with_exactly(&placed, opponent, 2)
    };
    let blocks = opp_two_before.saturating_sub(opp_two_after);

    let center = if is_center_zone(index) { CENTER_BONUS } else { 0 };
    let score = my_two as i32 * NEAR_WIN_WEIGHT
        + blocks as i32 * BLOCK_WEIGHT
        + my_one as i32 * SINGLE_WEIGHT
        + center;

    trace!(index, my_two, my_one, blocks, score, "Scored cell");
    score
}

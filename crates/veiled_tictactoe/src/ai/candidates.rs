//! Which empty cells the selector may consider on a given turn.

use crate::consts::PREFER_CENTER_THROUGH_TURN;
use crate::coords::is_center_zone;
use crate::rules::empty_indices;
use crate::types::Board;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Turn-based limits on where the selector looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
pub struct SelectorPolicy {
    /// Last turn (inclusive) on which only center cells are considered.
    prefer_center_through_turn: u32,
}

impl Default for SelectorPolicy {
    fn default() -> Self {
        Self {
            prefer_center_through_turn: PREFER_CENTER_THROUGH_TURN,
        }
    }
}

/// How a candidate set was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateMode {
    /// Early turns: center cells only, outer threats not looked at.
    CenterPreferred,
    /// Outer cells allowed by the caller.
    Full,
    /// Outer cells not allowed: center cells, or every empty cell once the
    /// center is full.
    CenterFallback,
}

/// Cells the selector may play, in ascending index order.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct CandidateSet {
    /// Candidate indices.
    indices: Vec<usize>,
    /// Rule that produced them.
    mode: CandidateMode,
}

/// Builds the candidate set for a turn.
///
/// Never empty while the board has an empty cell.
#[instrument(level = "debug", skip(board, policy), fields(through = policy.prefer_center_through_turn))]
pub fn candidate_set(
    board: &Board,
    turn_number: u32,
    allow_outer: bool,
    policy: &SelectorPolicy,
) -> CandidateSet {
    let empties = empty_indices(board);
    let center: Vec<usize> = empties
        .iter()
        .copied()
        .filter(|&i| is_center_zone(i))
        .collect();

    let (indices, mode) = if turn_number <= policy.prefer_center_through_turn && !center.is_empty()
    {
        (center, CandidateMode::CenterPreferred)
    } else if allow_outer {
        (empties, CandidateMode::Full)
    } else if !center.is_empty() {
        (center, CandidateMode::CenterFallback)
    } else {
        (empties, CandidateMode::CenterFallback)
    };

    trace!(?mode, count = indices.len(), "Candidate set built");
    CandidateSet { indices, mode }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::CELL_COUNT;
    use crate::coords::center_indices;
    use crate::types::Mark;

    fn fill_center(board: &mut Board) {
        for (n, i) in center_indices().enumerate() {
            let mark = if n % 2 == 0 { Mark::Circle } else { Mark::Cross };
            board.place(i, mark);
        }
    }

    #[test]
    fn test_early_turns_use_center_only() {
        let board = Board::new();
        let set = candidate_set(&board, 1, true, &SelectorPolicy::default());
        assert_eq!(*set.mode(), CandidateMode::CenterPreferred);
        assert_eq!(set.indices(), &center_indices().collect::<Vec<_>>());
    }

    #[test]
    fn test_allow_outer_is_ignored_during_center_phase() {
        let board = Board::new();
        let set = candidate_set(&board, 8, true, &SelectorPolicy::default());
        assert_eq!(*set.mode(), CandidateMode::CenterPreferred);
        assert_eq!(set.indices().len(), 9);
    }

    #[test]
    fn test_late_turn_with_outer_allowed_uses_everything() {
        let board = Board::new();
        let set = candidate_set(&board, 10, true, &SelectorPolicy::default());
        assert_eq!(*set.mode(), CandidateMode::Full);
        assert_eq!(set.indices().len(), CELL_COUNT);
    }

    #[test]
    fn test_late_turn_without_outer_stays_in_center() {
        let board = Board::new();
        let set = candidate_set(&board, 10, false, &SelectorPolicy::default());
        assert_eq!(*set.mode(), CandidateMode::CenterFallback);
        assert!(set.indices().iter().all(|&i| is_center_zone(i)));
    }

    #[test]
    fn test_full_center_falls_back_to_all_empties() {
        let mut board = Board::new();
        fill_center(&mut board);
        for turn in [3, 12] {
            let set = candidate_set(&board, turn, false, &SelectorPolicy::default());
            assert_eq!(*set.mode(), CandidateMode::CenterFallback);
            assert_eq!(set.indices().len(), 16);
        }
    }

    #[test]
    fn test_custom_cutoff() {
        let board = Board::new();
        let policy = SelectorPolicy::new(2);
        let set = candidate_set(&board, 3, true, &policy);
        assert_eq!(*set.mode(), CandidateMode::Full);
    }
}

//! Heuristic CPU player.
//!
//! The selector looks for an immediate win, then an immediate block, then
//! falls back to scoring each candidate cell. Which cells count as
//! candidates depends on the turn number: early on only the center region
//! is considered, and outer threats are ignored entirely.

mod candidates;
mod score;
mod selector;
mod tie_break;

pub use candidates::{CandidateMode, CandidateSet, SelectorPolicy, candidate_set};
pub use score::{
    BLOCK_WEIGHT, CENTER_BONUS, NEAR_WIN_WEIGHT, OCCUPIED_SENTINEL, SINGLE_WEIGHT, score_move,
};
pub use selector::{
    Decision, DecisionReason, MoveContext, MoveSelector, choose_move, find_immediate_win,
};
pub use tie_break::{FirstTie, FixedTie, RandomTie, TieBreaker};

//! Move selection: immediate win, immediate block, then heuristic scoring.

use super::candidates::{CandidateMode, SelectorPolicy, candidate_set};
use super::score::score_move;
use super::tie_break::{RandomTie, TieBreaker};
use crate::coords::Coord;
use crate::rules::evaluate;
use crate::types::{Board, Mark};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Everything the selector needs for one decision.
///
/// The board is borrowed mutably for speculative placements; it is
/// unchanged when the selector returns.
#[derive(Debug)]
pub struct MoveContext<'a> {
    /// Board to move on.
    pub board: &'a mut Board,
    /// Mark the selector plays.
    pub cpu_mark: Mark,
    /// Mark of the other side.
    pub opponent_mark: Mark,
    /// 1-based turn number of the move being chosen.
    pub turn_number: u32,
    /// Whether the caller permits outer cells this turn.
    pub allow_outer: bool,
}

/// Why a cell was picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DecisionReason {
    /// Completes a line for the mover.
    ImmediateWin,
    /// Takes the cell the opponent would win on.
    ImmediateBlock,
    /// Highest heuristic score.
    Heuristic {
        /// Winning score.
        score: i32,
    },
}

/// A chosen cell and the reason for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct Decision {
    /// Chosen cell index.
    pub index: usize,
    /// Why it was chosen.
    pub reason: DecisionReason,
    /// Candidate rule in force.
    pub mode: CandidateMode,
}

impl Decision {
    /// Row/column of the chosen cell.
    pub fn coord(&self) -> Option<Coord> {
        Coord::from_index(self.index)
    }
}

/// Returns the first candidate where `mark` would complete a line.
///
/// Occupied candidates are skipped. The board is unchanged on return.
pub fn find_immediate_win(board: &mut Board, mark: Mark, candidates: &[usize]) -> Option<usize> {
    candidates.iter().copied().find(|&index| {
        if !board.is_empty(index) {
            return false;
        }
        let placed = board.speculate(index, mark);
        evaluate(&placed).winner() == Some(mark)
    })
}

/// Heuristic CPU player.
///
/// Holds no game state between calls; only the tie-breaker carries state.
#[derive(Debug, Clone)]
pub struct MoveSelector<T> {
    policy: SelectorPolicy,
    tie_breaker: T,
}

impl MoveSelector<RandomTie<StdRng>> {
    /// Selector with OS-seeded random tie-breaking.
    pub fn from_entropy(policy: SelectorPolicy) -> Self {
        Self::new(policy, RandomTie::new(StdRng::from_os_rng()))
    }

    /// Selector whose tie-breaking is reproducible for a given seed.
    pub fn seeded(policy: SelectorPolicy, seed: u64) -> Self {
        Self::new(policy, RandomTie::new(StdRng::seed_from_u64(seed)))
    }
}

impl<T: TieBreaker> MoveSelector<T> {
    /// Creates a selector.
    pub fn new(policy: SelectorPolicy, tie_breaker: T) -> Self {
        Self {
            policy,
            tie_breaker,
        }
    }

    /// Candidate policy in use.
    pub fn policy(&self) -> &SelectorPolicy {
        &self.policy
    }

    /// Picks a cell and explains the choice.
    ///
    /// Returns `None` only when the board has no empty cell.
    #[instrument(
        skip(self, ctx),
        fields(
            mover = %ctx.cpu_mark,
            turn = ctx.turn_number,
            allow_outer = ctx.allow_outer,
        )
    )]
    pub fn decide(&mut self, ctx: MoveContext<'_>) -> Option<Decision> {
        let MoveContext {
            board,
            cpu_mark,
            opponent_mark,
            turn_number,
            allow_outer,
        } = ctx;

        let candidates = candidate_set(board, turn_number, allow_outer, &self.policy);
        let mode = *candidates.mode();
        let indices = candidates.indices();

        if let Some(index) = find_immediate_win(board, cpu_mark, indices) {
            debug!(index, ?mode, "Taking immediate win");
            return Some(Decision::new(index, DecisionReason::ImmediateWin, mode));
        }

        if let Some(index) = find_immediate_win(board, opponent_mark, indices) {
            debug!(index, ?mode, "Blocking immediate loss");
            return Some(Decision::new(index, DecisionReason::ImmediateBlock, mode));
        }

        let scored: Vec<(usize, i32)> = indices
            .iter()
            .map(|&index| (index, score_move(board, index, cpu_mark, opponent_mark)))
            .collect();
        let best_score = scored.iter().map(|&(_, score)| score).max()?;
        let best: Vec<usize> = scored
            .iter()
            .filter(|&&(_, score)| score == best_score)
            .map(|&(index, _)| index)
            .collect();

        let index = best[self.tie_breaker.pick(best.len())];
        debug!(index, score = best_score, ties = best.len(), ?mode, "Picked by score");
        Some(Decision::new(
            index,
            DecisionReason::Heuristic { score: best_score },
            mode,
        ))
    }

    /// Picks a cell. Returns `None` only when the board has no empty cell.
    pub fn choose_move(&mut self, ctx: MoveContext<'_>) -> Option<usize> {
        self.decide(ctx).map(|decision| decision.index)
    }
}

/// Picks a cell with the default policy and thread-local randomness.
pub fn choose_move(ctx: MoveContext<'_>) -> Option<usize> {
    MoveSelector::new(SelectorPolicy::default(), RandomTie::new(rand::rng())).choose_move(ctx)
}

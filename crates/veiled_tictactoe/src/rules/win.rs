//! Win and draw evaluation.

use super::draw::is_full;
use super::lines::{Line, all_lines};
use crate::types::{Board, Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Outcome of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EvalResult {
    /// No winner yet and at least one empty cell.
    Ongoing,
    /// `mark` completed `line`.
    Won {
        /// The winning mark.
        mark: Mark,
        /// The completed line.
        line: Line,
    },
    /// Board full without a winner.
    Draw,
}

impl EvalResult {
    /// Whether the game is over.
    pub fn is_done(&self) -> bool {
        !matches!(self, EvalResult::Ongoing)
    }

    /// The winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            EvalResult::Won { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// The completed line, if any.
    pub fn line(&self) -> Option<&Line> {
        match self {
            EvalResult::Won { line, .. } => Some(line),
            _ => None,
        }
    }
}

/// Evaluates the board.
///
/// Returns the first completed line in catalog order, so when one placement
/// completes several lines the earliest catalog entry wins.
#[instrument(level = "debug", skip(board), ret)]
pub fn evaluate(board: &Board) -> EvalResult {
    for line in all_lines() {
        let [a, b, c] = line.cells();
        let sq = board.get(a);
        if let Some(Square::Occupied(mark)) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            return EvalResult::Won { mark, line: *line };
        }
    }

    if is_full(board) {
        EvalResult::Draw
    } else {
        EvalResult::Ongoing
    }
}

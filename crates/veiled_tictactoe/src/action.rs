//! Placement records and move errors.

use crate::rules::EvalResult;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// A mark that has been put on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct Placement {
    /// Cell index.
    pub index: usize,
    /// Mark placed.
    pub mark: Mark,
    /// Turn on which it was placed (1-based).
    pub turn_number: u32,
    /// Whether this placement uncovered the outer grid.
    pub revealed_grid: bool,
    /// Board status after the placement.
    pub status: EvalResult,
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the index is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(usize),

    /// Index past the last cell.
    #[display("Position {} is off the board", _0)]
    OutOfBounds(usize),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's not this side's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Mark),

    /// The selector found no empty cell.
    #[display("No move available")]
    NoMoveAvailable,
}

impl std::error::Error for MoveError {}

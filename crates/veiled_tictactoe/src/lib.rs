//! Veiled tic-tac-toe - rules and CPU player
//!
//! Tic-tac-toe on a 5x5 board where only the middle 3x3 is shown at first.
//! Three in a row anywhere on the full board wins, outer cells included.
//!
//! # Architecture
//!
//! - **Rules**: catalog of the 48 winning lines, board evaluation
//! - **Coords**: index/row-column conversion, center vs outer zone
//! - **AI**: immediate win, immediate block, heuristic scoring, with a
//!   turn-based policy that keeps early play in the center
//! - **Game**: headless turn flow and outer-grid reveal state
//!
//! # Example
//!
//! ```
//! use veiled_tictactoe::{Board, Mark, MoveContext, choose_move, is_center_zone};
//!
//! let mut board = Board::new();
//! board.place(12, Mark::Circle);
//!
//! let index = choose_move(MoveContext {
//!     board: &mut board,
//!     cpu_mark: Mark::Cross,
//!     opponent_mark: Mark::Circle,
//!     turn_number: 2,
//!     allow_outer: false,
//! })
//! .expect("board has empty cells");
//! assert!(is_center_zone(index));
//! assert!(board.is_empty(index));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod ai;
mod consts;
mod coords;
mod game;
mod rules;
mod types;

// Crate-level exports - Board types
pub use types::{Board, BoardParseError, Mark, Speculation, Square};

// Crate-level exports - Geometry
pub use consts::{
    BOARD_SIZE, CELL_COUNT, CENTER_OFFSET, CPU_GRID_REVEAL_FROM_TURN, OUTER_REVEAL_TURNS,
    PREFER_CENTER_THROUGH_TURN, VISIBLE_SIZE, WIN_LENGTH,
};
pub use coords::{
    Coord, CoordParseError, center_indices, is_center_zone, is_outer_zone, to_index, to_row_col,
};

// Crate-level exports - Rules
pub use rules::{
    Direction, EvalResult, Line, all_lines, build_all_lines, count_lines_with_exactly,
    empty_indices, evaluate, is_full,
};

// Crate-level exports - AI
pub use ai::{
    BLOCK_WEIGHT, CENTER_BONUS, CandidateMode, CandidateSet, Decision, DecisionReason, FirstTie,
    FixedTie, MoveContext, MoveSelector, NEAR_WIN_WEIGHT, OCCUPIED_SENTINEL, RandomTie,
    SINGLE_WEIGHT, SelectorPolicy, TieBreaker, candidate_set, choose_move, find_immediate_win,
    score_move,
};

// Crate-level exports - Game session
pub use action::{MoveError, Placement};
pub use game::{CpuPause, CpuPlan, Game, RevealPolicy};

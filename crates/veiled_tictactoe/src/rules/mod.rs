//! Game rules for veiled tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board): the catalog of winning
//! lines, win/draw evaluation and the line counts the AI scores with.
//! Rules are kept apart from board storage so the AI and the session can
//! share them.

pub mod draw;
pub mod lines;
pub mod win;

pub use draw::{empty_indices, is_full};
pub use lines::{Direction, Line, all_lines, build_all_lines, count_lines_with_exactly};
pub use win::{EvalResult, evaluate};

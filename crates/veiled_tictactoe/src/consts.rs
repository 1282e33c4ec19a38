//! Board geometry and turn-policy constants.

/// Side length of the full board.
pub const BOARD_SIZE: usize = 5;

/// Number of cells on the full board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Marks in a row needed to win.
pub const WIN_LENGTH: usize = 3;

/// Side length of the center region shown to the player at first.
pub const VISIBLE_SIZE: usize = 3;

/// First row/column of the center region.
pub const CENTER_OFFSET: usize = (BOARD_SIZE - VISIBLE_SIZE) / 2;

/// Last turn (1-based, inclusive) on which the AI keeps to the center region.
pub const PREFER_CENTER_THROUGH_TURN: u32 = 9;

/// Turns on which the AI may place outside the center region.
pub const OUTER_REVEAL_TURNS: [u32; 2] = [8, 9];

/// First turn on which an outer CPU placement uncovers the outer grid.
pub const CPU_GRID_REVEAL_FROM_TURN: u32 = 9;

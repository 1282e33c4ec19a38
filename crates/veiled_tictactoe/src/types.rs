//! Core domain types for veiled tic-tac-toe.

use crate::consts::{BOARD_SIZE, CELL_COUNT};
use crate::coords::is_center_zone;
use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::str::FromStr;

/// A mark placed by one of the two sides.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Circle, the human's mark by default.
    #[strum(to_string = "O", serialize = "circle")]
    Circle,
    /// Cross, the CPU's mark by default.
    #[strum(to_string = "X", serialize = "cross")]
    Cross,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Circle => Mark::Cross,
            Mark::Cross => Mark::Circle,
        }
    }
}

/// A single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// 5x5 board in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; CELL_COUNT],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELL_COUNT],
        }
    }

    /// Gets the square at `index`, or `None` when out of bounds.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Sets the square at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= CELL_COUNT`.
    pub fn set(&mut self, index: usize, square: Square) {
        self.squares[index] = square;
    }

    /// Places `mark` at `index`.
    pub fn place(&mut self, index: usize, mark: Mark) {
        self.set(index, Square::Occupied(mark));
    }

    /// Checks whether the square at `index` is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; CELL_COUNT] {
        &self.squares
    }

    /// Temporarily places `mark` at `index`.
    ///
    /// The previous square comes back when the returned guard is dropped,
    /// so a hypothetical move can never outlive the evaluation that needed it.
    ///
    /// # Panics
    ///
    /// Panics if `index >= CELL_COUNT`.
    pub fn speculate(&mut self, index: usize, mark: Mark) -> Speculation<'_> {
        let previous = self.squares[index];
        self.squares[index] = Square::Occupied(mark);
        Speculation {
            board: self,
            index,
            previous,
        }
    }

    /// Formats the full board with `.` for empty cells and the center
    /// region framed by brackets.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let index = row * BOARD_SIZE + col;
                let symbol = match self.squares[index] {
                    Square::Empty => ".".to_string(),
                    Square::Occupied(mark) => mark.to_string(),
                };
                if is_center_zone(index) {
                    result.push_str(&format!("[{symbol}]"));
                } else {
                    result.push_str(&format!(" {symbol} "));
                }
            }
            if row + 1 < BOARD_SIZE {
                result.push('\n');
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Scoped hypothetical placement created by [`Board::speculate`].
///
/// Derefs to the board with the hypothetical mark in place and restores the
/// original square on drop.
#[derive(Debug)]
pub struct Speculation<'a> {
    board: &'a mut Board,
    index: usize,
    previous: Square,
}

impl Speculation<'_> {
    /// Index of the speculatively filled cell.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl Deref for Speculation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl Drop for Speculation<'_> {
    fn drop(&mut self) {
        self.board.squares[self.index] = self.previous;
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// Input did not contain exactly one symbol per cell.
    #[display("Expected {} cells, found {}", CELL_COUNT, _0)]
    WrongCellCount(usize),

    /// A character that is neither a mark nor an empty-cell symbol.
    #[display("Unknown cell symbol {:?}", _0)]
    UnknownSymbol(char),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses `.`/`_` as empty, `O`/`o` as circle and `X`/`x` as cross.
    /// Whitespace and `|` separators are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(CELL_COUNT);
        for ch in s.chars() {
            let square = match ch {
                c if c.is_whitespace() || c == '|' => continue,
                '.' | '_' => Square::Empty,
                'O' | 'o' => Square::Occupied(Mark::Circle),
                'X' | 'x' => Square::Occupied(Mark::Cross),
                other => return Err(BoardParseError::UnknownSymbol(other)),
            };
            cells.push(square);
        }

        let squares: [Square; CELL_COUNT] = cells
            .try_into()
            .map_err(|cells: Vec<Square>| BoardParseError::WrongCellCount(cells.len()))?;
        Ok(Self { squares })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.squares().iter().all(|s| *s == Square::Empty));
        assert!(board.get(CELL_COUNT).is_none());
    }

    #[test]
    fn test_speculation_restores_empty_square() {
        let mut board = Board::new();
        {
            let hypothetical = board.speculate(12, Mark::Cross);
            assert_eq!(hypothetical.get(12), Some(Square::Occupied(Mark::Cross)));
            assert_eq!(hypothetical.index(), 12);
        }
        assert!(board.is_empty(12));
    }

    #[test]
    fn test_speculation_restores_occupied_square() {
        let mut board = Board::new();
        board.place(3, Mark::Circle);
        drop(board.speculate(3, Mark::Cross));
        assert_eq!(board.get(3), Some(Square::Occupied(Mark::Circle)));
    }

    #[test]
    fn test_parse_board() {
        let board: Board = "O.... .X... ..... ..... ....x".parse().unwrap();
        assert_eq!(board.get(0), Some(Square::Occupied(Mark::Circle)));
        assert_eq!(board.get(6), Some(Square::Occupied(Mark::Cross)));
        assert_eq!(board.get(24), Some(Square::Occupied(Mark::Cross)));
        assert!(board.is_empty(1));
    }

    #[test]
    fn test_parse_board_errors() {
        assert_eq!(
            "....".parse::<Board>(),
            Err(BoardParseError::WrongCellCount(4))
        );
        assert_eq!(
            "....?".parse::<Board>(),
            Err(BoardParseError::UnknownSymbol('?'))
        );
    }

    #[test]
    fn test_display_frames_center() {
        let mut board = Board::new();
        board.place(12, Mark::Circle);
        let lines: Vec<_> = board.display().lines().map(str::to_owned).collect();
        assert_eq!(lines.len(), BOARD_SIZE);
        assert_eq!(lines[0], " .  .  .  .  . ");
        assert_eq!(lines[2], " . [.][O][.] . ");
    }

    #[test]
    fn test_mark_parse_and_display() {
        assert_eq!("x".parse::<Mark>(), Ok(Mark::Cross));
        assert_eq!("Circle".parse::<Mark>(), Ok(Mark::Circle));
        assert_eq!(Mark::Cross.to_string(), "X");
        assert_eq!(Mark::Circle.opponent(), Mark::Cross);
    }
}

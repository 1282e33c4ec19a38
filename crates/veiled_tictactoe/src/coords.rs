//! Flat index <-> row/column conversion and center/outer zone classification.

use crate::consts::{BOARD_SIZE, CELL_COUNT, CENTER_OFFSET, VISIBLE_SIZE};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Row/column position on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Zero-based row, top to bottom.
    pub row: usize,
    /// Zero-based column, left to right.
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate. Returns `None` when off the board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < BOARD_SIZE && col < BOARD_SIZE).then_some(Self { row, col })
    }

    /// Converts a flat index. Returns `None` when out of bounds.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < CELL_COUNT).then(|| {
            let (row, col) = to_row_col(index);
            Self { row, col }
        })
    }

    /// Flat row-major index.
    pub fn to_index(self) -> usize {
        to_index(self.row, self.col)
    }

    /// Whether this cell lies in the center region.
    pub fn is_center_zone(self) -> bool {
        in_center_span(self.row) && in_center_span(self.col)
    }

    /// Whether this cell lies outside the center region.
    pub fn is_outer_zone(self) -> bool {
        !self.is_center_zone()
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Splits a flat index into `(row, col)`.
pub fn to_row_col(index: usize) -> (usize, usize) {
    (index / BOARD_SIZE, index % BOARD_SIZE)
}

/// Joins `(row, col)` into a flat index.
pub fn to_index(row: usize, col: usize) -> usize {
    row * BOARD_SIZE + col
}

fn in_center_span(v: usize) -> bool {
    (CENTER_OFFSET..CENTER_OFFSET + VISIBLE_SIZE).contains(&v)
}

/// True iff the cell is in the middle 3x3 block.
pub fn is_center_zone(index: usize) -> bool {
    let (row, col) = to_row_col(index);
    in_center_span(row) && in_center_span(col)
}

/// True iff the cell is one of the 16 cells around the middle block.
pub fn is_outer_zone(index: usize) -> bool {
    !is_center_zone(index)
}

/// Indices of the center region in ascending order.
pub fn center_indices() -> impl Iterator<Item = usize> {
    (0..CELL_COUNT).filter(|&i| is_center_zone(i))
}

/// Error parsing a cell reference typed by a player.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CoordParseError {
    /// Not a number or a `row col` pair.
    #[display("Could not read a cell from {:?}", _0)]
    Malformed(String),

    /// Parsed fine but lies off the board.
    #[display("Cell {} is off the board", _0)]
    OutOfRange(String),
}

impl std::error::Error for CoordParseError {}

impl FromStr for Coord {
    type Err = CoordParseError;

    /// Accepts a flat index (`"12"`) or a row/column pair (`"2 3"`, `"2,3"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || CoordParseError::Malformed(s.to_string());
        let out_of_range = || CoordParseError::OutOfRange(s.trim().to_string());

        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();

        match parts.as_slice() {
            [index] => {
                let index: usize = index.parse().map_err(|_| malformed())?;
                Coord::from_index(index).ok_or_else(out_of_range)
            }
            [row, col] => {
                let row: usize = row.parse().map_err(|_| malformed())?;
                let col: usize = col.parse().map_err(|_| malformed())?;
                Coord::new(row, col).ok_or_else(out_of_range)
            }
            _ => Err(malformed()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_col_bijection() {
        for index in 0..CELL_COUNT {
            let (row, col) = to_row_col(index);
            assert_eq!(to_index(row, col), index);
        }
        assert_eq!(to_row_col(13), (2, 3));
    }

    #[test]
    fn test_center_zone_is_middle_block() {
        let center: Vec<usize> = center_indices().collect();
        assert_eq!(center, vec![6, 7, 8, 11, 12, 13, 16, 17, 18]);
        assert_eq!((0..CELL_COUNT).filter(|&i| is_outer_zone(i)).count(), 16);
    }

    #[test]
    fn test_corners_and_edges_are_outer() {
        for index in [0, 4, 20, 24, 2, 10, 14, 22] {
            assert!(is_outer_zone(index), "{index} should be outer");
        }
    }

    #[test]
    fn test_coord_zone_matches_index_zone() {
        for index in 0..CELL_COUNT {
            let coord = Coord::from_index(index).unwrap();
            assert_eq!(coord.is_center_zone(), is_center_zone(index));
            assert_eq!(coord.to_index(), index);
        }
        assert!(Coord::from_index(CELL_COUNT).is_none());
        assert!(Coord::new(5, 0).is_none());
    }

    #[test]
    fn test_parse_coord() {
        assert_eq!("12".parse::<Coord>(), Ok(Coord { row: 2, col: 2 }));
        assert_eq!("1 3".parse::<Coord>(), Ok(Coord { row: 1, col: 3 }));
        assert_eq!(" 4,0 ".parse::<Coord>(), Ok(Coord { row: 4, col: 0 }));
        assert!(matches!(
            "25".parse::<Coord>(),
            Err(CoordParseError::OutOfRange(_))
        ));
        assert!(matches!(
            "a b".parse::<Coord>(),
            Err(CoordParseError::Malformed(_))
        ));
        assert!(matches!(
            "1 2 3".parse::<Coord>(),
            Err(CoordParseError::Malformed(_))
        ));
    }
}

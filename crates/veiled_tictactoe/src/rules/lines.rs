//! Catalog of every three-in-a-row on the board.

use crate::consts::{BOARD_SIZE, WIN_LENGTH};
use crate::coords::to_index;
use crate::types::{Board, Mark, Square};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Direction a line runs in, in catalog order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Direction {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
    /// Down and to the right.
    DiagonalDown,
    /// Up and to the right.
    DiagonalUp,
}

impl Direction {
    /// Start cells `(row, col)` in enumeration order.
    fn starts(self) -> Vec<(usize, usize)> {
        let span = BOARD_SIZE - WIN_LENGTH;
        match self {
            Direction::Horizontal => (0..BOARD_SIZE)
                .flat_map(|r| (0..=span).map(move |c| (r, c)))
                .collect(),
            Direction::Vertical => (0..BOARD_SIZE)
                .flat_map(|c| (0..=span).map(move |r| (r, c)))
                .collect(),
            Direction::DiagonalDown => (0..=span)
                .flat_map(|r| (0..=span).map(move |c| (r, c)))
                .collect(),
            Direction::DiagonalUp => (WIN_LENGTH - 1..BOARD_SIZE)
                .flat_map(|r| (0..=span).map(move |c| (r, c)))
                .collect(),
        }
    }

    /// Cell `k` steps from `(row, col)`.
    fn step(self, (row, col): (usize, usize), k: usize) -> usize {
        match self {
            Direction::Horizontal => to_index(row, col + k),
            Direction::Vertical => to_index(row + k, col),
            Direction::DiagonalDown => to_index(row + k, col + k),
            Direction::DiagonalUp => to_index(row - k, col + k),
        }
    }
}

/// Three cells that win when they all hold the same mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    cells: [usize; WIN_LENGTH],
    direction: Direction,
}

impl Line {
    /// Cell indices from the start cell outward.
    pub fn cells(&self) -> [usize; WIN_LENGTH] {
        self.cells
    }

    /// Which way the line runs.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether `index` is one of the line's cells.
    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}

/// Enumerates every run of three: rows, then columns, then down-right
/// diagonals, then up-right diagonals.
#[instrument]
pub fn build_all_lines() -> Vec<Line> {
    let lines: Vec<Line> = Direction::iter()
        .flat_map(|direction| {
            direction.starts().into_iter().map(move |start| Line {
                cells: std::array::from_fn(|k| direction.step(start, k)),
                direction,
            })
        })
        .collect();
    debug!(count = lines.len(), "Built line catalog");
    lines
}

static ALL_LINES: LazyLock<Vec<Line>> = LazyLock::new(build_all_lines);

/// The shared line catalog, built on first use.
pub fn all_lines() -> &'static [Line] {
    &ALL_LINES
}

/// Counts lines holding exactly `k` of `mark` and none of the other mark.
pub fn count_lines_with_exactly(board: &Board, mark: Mark, k: usize) -> usize {
    all_lines()
        .iter()
        .filter(|line| {
            let mut mine = 0;
            for &index in &line.cells {
                match board.get(index) {
                    Some(Square::Occupied(m)) if m == mark => mine += 1,
                    Some(Square::Occupied(_)) => return false,
                    _ => {}
                }
            }
            mine == k
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::CELL_COUNT;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_48_lines() {
        let lines = build_all_lines();
        assert_eq!(lines.len(), 48);
        let count = |d| lines.iter().filter(|l| l.direction() == d).count();
        assert_eq!(count(Direction::Horizontal), 15);
        assert_eq!(count(Direction::Vertical), 15);
        assert_eq!(count(Direction::DiagonalDown), 9);
        assert_eq!(count(Direction::DiagonalUp), 9);
    }

    #[test]
    fn test_catalog_order() {
        let lines = all_lines();
        assert_eq!(lines[0].cells(), [0, 1, 2]);
        assert_eq!(lines[1].cells(), [1, 2, 3]);
        assert_eq!(lines[3].cells(), [5, 6, 7]);
        assert_eq!(lines[15].cells(), [0, 5, 10]);
        assert_eq!(lines[16].cells(), [5, 10, 15]);
        assert_eq!(lines[30].cells(), [0, 6, 12]);
        assert_eq!(lines[39].cells(), [10, 6, 2]);
        assert_eq!(lines[47].cells(), [22, 18, 14]);
    }

    #[test]
    fn test_lines_are_distinct_and_in_bounds() {
        let lines = all_lines();
        let unique: HashSet<_> = lines
            .iter()
            .map(|l| {
                let mut cells = l.cells();
                cells.sort_unstable();
                cells
            })
            .collect();
        assert_eq!(unique.len(), lines.len());
        for line in lines {
            let cells = line.cells();
            assert!(cells.iter().all(|&i| i < CELL_COUNT));
            assert!(cells[0] != cells[1] && cells[1] != cells[2] && cells[0] != cells[2]);
        }
    }

    #[test]
    fn test_count_on_empty_board() {
        let board = Board::new();
        assert_eq!(count_lines_with_exactly(&board, Mark::Cross, 0), 48);
        assert_eq!(count_lines_with_exactly(&board, Mark::Cross, 1), 0);
    }

    #[test]
    fn test_count_excludes_lines_with_opponent() {
        let mut board = Board::new();
        board.place(0, Mark::Cross);
        board.place(1, Mark::Cross);
        // Open: [0,1,2]. Blocked once circle sits on 2.
        assert_eq!(count_lines_with_exactly(&board, Mark::Cross, 2), 1);
        board.place(2, Mark::Circle);
        assert_eq!(count_lines_with_exactly(&board, Mark::Cross, 2), 0);
    }

    #[test]
    fn test_center_cell_lies_on_most_lines() {
        let through_center = all_lines().iter().filter(|l| l.contains(12)).count();
        // 3 per direction.
        assert_eq!(through_center, 12);
    }
}

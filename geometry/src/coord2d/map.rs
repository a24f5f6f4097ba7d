//! Grid mazes suitable for pathfinding
//! on a 2D coordinate grid.
use std::convert::TryFrom;
use std::str::FromStr;

use itertools::iproduct;
use searcher::StateSpace;
use thiserror::Error;

use super::Point;
use crate::Position;

/// Cell value marking an impassable square. Every other
/// value is open floor.
pub const WALL: u8 = 1;

/// Error returned for grids which can not form a maze.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    #[error("Maze has no cells")]
    Empty,

    #[error("Row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Unexpected map character at {row},{col}: {found}")]
    InvalidCell {
        row: usize,
        col: usize,
        found: String,
    },
}

/// A rectangular grid of cells, traversed one square at a time
/// in the four orthogonal directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    cells: Vec<Vec<u8>>,
    cols: Position,
}

impl Maze {
    /// Build a maze from rows of cells. All rows must be the same
    /// length, and there must be at least one cell.
    pub fn new(cells: Vec<Vec<u8>>) -> Result<Self, MazeError> {
        let cols = cells.first().map(|r| r.len()).unwrap_or(0);
        if cols == 0 {
            return Err(MazeError::Empty);
        }
        for (row, line) in cells.iter().enumerate() {
            if line.len() != cols {
                return Err(MazeError::Ragged {
                    row,
                    expected: cols,
                    found: line.len(),
                });
            }
        }
        Ok(Maze { cells, cols })
    }

    pub fn rows(&self) -> Position {
        self.cells.len()
    }

    pub fn cols(&self) -> Position {
        self.cols
    }

    /// Value of the cell at `location`, if it is on the grid.
    pub fn get(&self, location: Point) -> Option<u8> {
        self.cells
            .get(location.row)
            .and_then(|r| r.get(location.col))
            .copied()
    }

    /// Is `location` on the grid?
    pub fn in_bounds(&self, location: Point) -> bool {
        location.row < self.rows() && location.col < self.cols()
    }

    /// Can the sprite step on this location on the path?
    pub fn is_traversable(&self, location: Point) -> bool {
        matches!(self.get(location), Some(cell) if cell != WALL)
    }

    /// Every open cell, in reading order.
    pub fn open_cells(&self) -> impl Iterator<Item = Point> + '_ {
        iproduct!(0..self.rows(), 0..self.cols())
            .map(|(row, col)| Point::new(row, col))
            .filter(move |p| self.is_traversable(*p))
    }
}

impl TryFrom<Vec<Vec<u8>>> for Maze {
    type Error = MazeError;

    fn try_from(cells: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        Maze::new(cells)
    }
}

fn parse_cell(token: &str, row: usize, col: usize) -> Result<u8, MazeError> {
    match token {
        "#" => Ok(WALL),
        "." => Ok(0),
        t => t.parse().map_err(|_| MazeError::InvalidCell {
            row,
            col,
            found: t.to_string(),
        }),
    }
}

impl FromStr for Maze {
    type Err = MazeError;

    /// Parse one row per line. Cells are either separated by
    /// whitespace, or written one character each. `#` is a wall and
    /// `.` is open floor; numbers are taken as cell values.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::new();
        for (row, line) in s.lines().map(str::trim).filter(|l| !l.is_empty()).enumerate() {
            let parsed = if line.contains(char::is_whitespace) {
                line.split_whitespace()
                    .enumerate()
                    .map(|(col, t)| parse_cell(t, row, col))
                    .collect::<Result<Vec<_>, _>>()?
            } else {
                line.chars()
                    .enumerate()
                    .map(|(col, c)| parse_cell(c.encode_utf8(&mut [0; 4]), row, col))
                    .collect::<Result<Vec<_>, _>>()?
            };
            cells.push(parsed);
        }
        Maze::new(cells)
    }
}

impl StateSpace for Maze {
    type State = Point;
    type Cost = usize;

    fn neighbors(&self, state: &Point) -> Vec<(usize, Point)> {
        state
            .adjacent()
            .filter(|p| self.is_traversable(*p))
            .map(|p| (1, p))
            .collect()
    }

    fn contains(&self, state: &Point) -> bool {
        self.in_bounds(*state)
    }
}

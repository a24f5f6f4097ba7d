//! Coordinate work on a two dimensional grid.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::Position;

pub mod map;

/// A movement direction on the grid.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

const DIRECTIONS: [Direction; 4] = [
    Direction::Right,
    Direction::Left,
    Direction::Down,
    Direction::Up,
];

impl Direction {
    /// Enumerates all directions of movement in the order
    /// successors are generated: column +1, column -1, row +1, row -1.
    pub fn all() -> impl Iterator<Item = Self> {
        DIRECTIONS.iter().cloned()
    }
}

/// A cell on the grid, addressed by row then column.
///
/// Rows grow downward and columns grow to the right, with the
/// origin in the top left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub row: Position,
    pub col: Position,
}

impl Point {
    /// Build a new point from coordinates.
    pub fn new(row: Position, col: Position) -> Self {
        Self { row, col }
    }

    /// Step in a given direction.
    ///
    /// Returns `None` when the step would leave the grid
    /// through the top or left edge.
    pub fn step(self, direction: Direction) -> Option<Self> {
        match direction {
            Direction::Up => self.row.checked_sub(1).map(|row| Point { row, ..self }),
            Direction::Down => self.row.checked_add(1).map(|row| Point { row, ..self }),
            Direction::Left => self.col.checked_sub(1).map(|col| Point { col, ..self }),
            Direction::Right => self.col.checked_add(1).map(|col| Point { col, ..self }),
        }
    }

    /// Iterate over all adjacent points, in successor order.
    pub fn adjacent(self) -> impl Iterator<Item = Self> {
        Direction::all().filter_map(move |d| self.step(d))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl From<(Position, Position)> for Point {
    fn from(coordinates: (Position, Position)) -> Self {
        Self {
            row: coordinates.0,
            col: coordinates.1,
        }
    }
}

/// Error when parsing a point from string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParsePointError {
    #[error("Invalid Point: {}", _0)]
    InvalidLiteral(String),

    #[error("Invalid Number Literal")]
    InvalidNumber,
}

impl From<::std::num::ParseIntError> for ParsePointError {
    fn from(_: ::std::num::ParseIntError) -> Self {
        ParsePointError::InvalidNumber
    }
}

impl FromStr for Point {
    type Err = ParsePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref RE: Regex =
                Regex::new(r"^\s*\(?\s*(?P<row>\d+)\s*,\s*(?P<col>\d+)\s*\)?\s*$").unwrap();
        };

        let cap = match RE.captures(s) {
            None => return Err(ParsePointError::InvalidLiteral(s.to_string())),
            Some(c) => c,
        };

        Ok(Self::new(cap["row"].parse()?, cap["col"].parse()?))
    }
}

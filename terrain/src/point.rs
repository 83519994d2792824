//! Coordinates in two dimensions.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::Position;

/// A movement direction in two dimensions.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Left,
    Direction::Right,
    Direction::Down,
];

impl Direction {
    /// Directions ordered so that stepping from a point visits its
    /// neighbors top to bottom, left to right.
    pub fn all() -> impl Iterator<Item = Self> {
        DIRECTIONS.iter().cloned()
    }
}

/// A location on a grid.
///
/// `y` grows downwards, so that rows of text map directly
/// onto rows of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: Position,
    pub y: Position,
}

impl Point {
    /// Build a new point from coordinates.
    pub fn new(x: Position, y: Position) -> Self {
        Self { x, y }
    }

    /// Step in a given direction.
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Left => Self::new(self.x - 1, self.y),
            Direction::Right => Self::new(self.x + 1, self.y),
            Direction::Up => Self::new(self.x, self.y - 1),
            Direction::Down => Self::new(self.x, self.y + 1),
        }
    }

    /// The four neighbors of this point, in the order of [Direction::all].
    pub fn adjacent(self) -> impl Iterator<Item = Self> {
        Direction::all().map(move |d| self.step(d))
    }

    /// Number of single steps between two points, ignoring obstacles.
    pub fn manhattan_distance(self, other: Point) -> Position {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Straight line distance between two points.
    pub fn euclidean_distance(self, other: Point) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        dx.hypot(dy)
    }

    /// The step leading from this point to `other`, when they are adjacent.
    pub fn direction(self, other: Point) -> Option<Direction> {
        Direction::all().find(|d| self.step(*d) == other)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Error when parsing a point from string.
#[derive(Debug, Error)]
pub enum ParsePointError {
    #[error("Invalid Point: {}", _0)]
    InvalidLiteral(String),

    #[error("Invalid Number Literal")]
    InvalidNumber(#[from] ::std::num::ParseIntError),
}

impl FromStr for Point {
    type Err = ParsePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref RE: Regex = Regex::new(r"^\s*(?P<x>\d+)\s*,\s*(?P<y>\d+)\s*$").unwrap();
        };

        let cap = match RE.captures(s) {
            None => return Err(ParsePointError::InvalidLiteral(s.to_string())),
            Some(c) => c,
        };

        Ok(Self::new(cap["x"].parse()?, cap["y"].parse()?))
    }
}

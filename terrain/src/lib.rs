//! Two-dimensional worlds to search: mazes and height maps.
//!
//! A [Grid] is a rectangle of cells which can be searched with any
//! of the algorithms in [searcher], using the heuristics in [heuristic].

#![deny(clippy::all)]

pub mod grid;
pub mod heuristic;
pub mod point;

pub use grid::{Cell, Grid, ParseGridError};
pub use heuristic::{Euclidean, Manhattan};
pub use point::{Direction, ParsePointError, Point};

/// Data type used for coordinates
pub type Position = i32;

//! Distance estimates for A* searches on a [Grid].
//!
//! Every step on a grid costs at least one, so both estimates here
//! never exceed the true remaining cost.

use searcher::{Heuristic, VertexId};

use crate::grid::Grid;

/// Estimates the remaining cost as the number of steps
/// needed with no walls in the way.
#[derive(Debug, Clone, Copy)]
pub struct Manhattan<'g> {
    grid: &'g Grid,
}

impl<'g> Manhattan<'g> {
    pub fn new(grid: &'g Grid) -> Self {
        Self { grid }
    }
}

impl<'g> Heuristic for Manhattan<'g> {
    fn estimate(&self, from: VertexId, to: VertexId) -> f64 {
        match (self.grid.point(from), self.grid.point(to)) {
            (Some(a), Some(b)) => f64::from(a.manhattan_distance(b)),
            _ => 0.0,
        }
    }
}

/// Estimates the remaining cost as the straight line distance.
///
/// Less informed than [Manhattan], since movement is never diagonal.
#[derive(Debug, Clone, Copy)]
pub struct Euclidean<'g> {
    grid: &'g Grid,
}

impl<'g> Euclidean<'g> {
    pub fn new(grid: &'g Grid) -> Self {
        Self { grid }
    }
}

impl<'g> Heuristic for Euclidean<'g> {
    fn estimate(&self, from: VertexId, to: VertexId) -> f64 {
        match (self.grid.point(from), self.grid.point(to)) {
            (Some(a), Some(b)) => a.euclidean_distance(b),
            _ => 0.0,
        }
    }
}

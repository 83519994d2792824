use crate::graph::VertexId;

/// An estimate of the remaining cost between two vertices, used by A*.
///
/// The estimate must never exceed the true remaining cost (it must be
/// admissible) for A* to return the cheapest path. This is not checked.
pub trait Heuristic {
    fn estimate(&self, from: VertexId, to: VertexId) -> f64;
}

impl<F> Heuristic for F
where
    F: Fn(VertexId, VertexId) -> f64,
{
    fn estimate(&self, from: VertexId, to: VertexId) -> f64 {
        self(from, to)
    }
}

/// A heuristic which always guesses zero.
///
/// With this heuristic A* explores exactly like Dijkstra's algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn estimate(&self, _from: VertexId, _to: VertexId) -> f64 {
        0.0
    }
}

use std::fmt;

use super::VertexId;

/// A weighted connection from one vertex to another.
///
/// In an undirected graph each edge is stored once, but is
/// reachable from both of its endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub(crate) from: VertexId,
    pub(crate) to: VertexId,
    pub(crate) cost: f64,
}

impl Edge {
    pub fn new(from: VertexId, to: VertexId, cost: f64) -> Self {
        Self { from, to, cost }
    }

    pub fn from(&self) -> VertexId {
        self.from
    }

    pub fn to(&self) -> VertexId {
        self.to
    }

    /// Weight of this edge. Searches assume it is non-negative.
    pub fn cost(&self) -> f64 {
        self.cost
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} -({})-> {}", self.from, self.cost, self.to)
    }
}

use std::ops::Range;

use super::VertexId;
use crate::errors::Result;

/// The view of a graph which the search algorithms need.
///
/// Vertices are identified by dense indices, `0..vertex_count()`,
/// so that per-search state can live in a plain vector
/// (see [crate::Traversal]).
pub trait Graphable {
    /// Number of vertices in the graph.
    fn vertex_count(&self) -> usize;

    /// Vertices directly reachable from `vertex` over one edge.
    ///
    /// The order must be stable for a given graph, as it decides
    /// which of several equally good paths a search returns.
    fn neighbors(&self, vertex: VertexId) -> Vec<VertexId>;

    /// Weight of the edge from `from` to `to`.
    ///
    /// Fails with [crate::SearchError::MissingEdge] when there is
    /// no such edge.
    fn edge_cost(&self, from: VertexId, to: VertexId) -> Result<f64>;

    /// Every vertex of the graph, in ascending order.
    fn vertices(&self) -> Vertices {
        Vertices {
            range: 0..self.vertex_count(),
        }
    }

    /// Is this vertex part of the graph?
    fn contains(&self, vertex: VertexId) -> bool {
        vertex.index() < self.vertex_count()
    }
}

/// Iterator over the vertices of a [Graphable].
#[derive(Debug, Clone)]
pub struct Vertices {
    range: Range<usize>,
}

impl Iterator for Vertices {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().map(VertexId::new)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl ExactSizeIterator for Vertices {}

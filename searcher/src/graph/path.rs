use std::slice;

use tracing::warn;

use super::traits::Graphable;
use super::VertexId;
use crate::errors::Result;
use crate::traversal::Traversal;

/// An ordered sequence of vertices from the start of a search
/// to its destination, both inclusive.
///
/// An empty path means no path was found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    vertices: Vec<VertexId>,
}

impl Path {
    /// A path which found nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Rebuild the path to `end` by following predecessor links
    /// recorded in the traversal back to `start`.
    ///
    /// Returns an empty path if the predecessor chain never reaches
    /// `start`, or if it is longer than the number of vertices in the
    /// traversal (in which case the links must contain a cycle).
    /// Vertices the traversal doesn't track have no predecessor.
    pub fn reconstruct(traversal: &Traversal, start: VertexId, end: VertexId) -> Self {
        if traversal.get(end).is_none() {
            return Self::empty();
        }

        let mut vertices = vec![end];
        let mut current = end;

        while current != start {
            match traversal.get(current).and_then(|state| state.previous) {
                Some(previous) => {
                    vertices.push(previous);
                    current = previous;
                }
                None => return Self::empty(),
            }

            if vertices.len() > traversal.len() {
                warn!(?start, ?end, "predecessor chain does not terminate");
                return Self::empty();
            }
        }

        vertices.reverse();
        Self { vertices }
    }

    /// Number of vertices on the path.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of edges traversed along the path.
    pub fn edge_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    pub fn origin(&self) -> Option<VertexId> {
        self.vertices.first().copied()
    }

    pub fn destination(&self) -> Option<VertexId> {
        self.vertices.last().copied()
    }

    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub fn iter(&self) -> slice::Iter<'_, VertexId> {
        self.vertices.iter()
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        self.vertices.contains(&vertex)
    }

    /// Total weight of the edges along this path in `graph`.
    ///
    /// Fails if two consecutive vertices are not joined by an edge.
    pub fn cost<G>(&self, graph: &G) -> Result<f64>
    where
        G: Graphable + ?Sized,
    {
        self.vertices
            .windows(2)
            .map(|pair| graph.edge_cost(pair[0], pair[1]))
            .sum()
    }
}

impl From<Vec<VertexId>> for Path {
    fn from(vertices: Vec<VertexId>) -> Self {
        Self { vertices }
    }
}

impl<'p> IntoIterator for &'p Path {
    type Item = &'p VertexId;
    type IntoIter = slice::Iter<'p, VertexId>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::traversal::Color;

    fn ids(raw: &[usize]) -> Vec<VertexId> {
        raw.iter().copied().map(VertexId::new).collect()
    }

    #[test]
    fn reconstruct_follows_predecessors() {
        let mut traversal = Traversal::new(4);
        traversal.discover(VertexId::new(1), VertexId::new(0), 1.0);
        traversal.discover(VertexId::new(3), VertexId::new(1), 2.0);

        let path = Path::reconstruct(&traversal, VertexId::new(0), VertexId::new(3));
        assert_eq!(path.vertices(), &ids(&[0, 1, 3])[..]);
        assert_eq!(path.origin(), Some(VertexId::new(0)));
        assert_eq!(path.destination(), Some(VertexId::new(3)));
        assert_eq!(path.edge_count(), 2);
    }

    #[test]
    fn reconstruct_start_is_end() {
        let traversal = Traversal::new(2);
        let path = Path::reconstruct(&traversal, VertexId::new(1), VertexId::new(1));
        assert_eq!(path.vertices(), &ids(&[1])[..]);
        assert_eq!(path.edge_count(), 0);
    }

    #[test]
    fn reconstruct_broken_chain() {
        let mut traversal = Traversal::new(3);
        traversal.discover(VertexId::new(2), VertexId::new(1), 1.0);

        let path = Path::reconstruct(&traversal, VertexId::new(0), VertexId::new(2));
        assert!(path.is_empty());
    }

    #[test]
    fn reconstruct_untracked_vertex() {
        let traversal = Traversal::new(2);
        let path = Path::reconstruct(&traversal, VertexId::new(0), VertexId::new(5));
        assert!(path.is_empty());

        let path = Path::reconstruct(&traversal, VertexId::new(5), VertexId::new(5));
        assert!(path.is_empty());

        // A predecessor outside the traversal ends the chain.
        let mut traversal = Traversal::new(3);
        traversal.discover(VertexId::new(2), VertexId::new(7), 1.0);
        let path = Path::reconstruct(&traversal, VertexId::new(0), VertexId::new(2));
        assert!(path.is_empty());
    }

    #[test]
    fn reconstruct_cycle() {
        let mut traversal = Traversal::new(3);
        traversal.discover(VertexId::new(1), VertexId::new(2), 1.0);
        traversal.discover(VertexId::new(2), VertexId::new(1), 1.0);
        assert_eq!(traversal.color(VertexId::new(1)), Color::Discovered);

        let path = Path::reconstruct(&traversal, VertexId::new(0), VertexId::new(2));
        assert!(path.is_empty());
    }
}

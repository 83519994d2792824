//! Dijkstra's Algorithm

use super::best_first;
use crate::errors::Result;
use crate::graph::{Graphable, Path, VertexId};
use crate::traits::ZeroHeuristic;
use crate::traversal::Traversal;

/// Perform a search using Dijkstra's algorithm.
///
/// Dijkstra's algorithm behaves like a breadth first search, but always
/// expands the vertex with the cheapest known path next, so the path
/// returned has the lowest total weight. Edge weights must be
/// non-negative; this is not checked.
pub fn dijkstra<G>(graph: &G, start: VertexId, end: VertexId) -> Result<Path>
where
    G: Graphable + ?Sized,
{
    let mut traversal = Traversal::for_graph(graph);
    dijkstra_with(graph, &mut traversal, start, end)
}

/// Dijkstra's algorithm, leaving the final search state in `traversal`.
pub fn dijkstra_with<G>(
    graph: &G,
    traversal: &mut Traversal,
    start: VertexId,
    end: VertexId,
) -> Result<Path>
where
    G: Graphable + ?Sized,
{
    best_first(graph, traversal, start, end, &ZeroHeuristic)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithm::fixtures::*;
    use crate::errors::SearchError;
    use crate::traversal::Color;

    #[test]
    fn square_short_diagonal() {
        let graph = square(1.5);
        let path = dijkstra(&graph, id(&graph, "A"), id(&graph, "C")).unwrap();

        assert_eq!(labels(&graph, &path), vec!["A", "C"]);
        assert_eq!(path.cost(&graph), Ok(1.5));
    }

    #[test]
    fn square_long_diagonal() {
        let graph = square(2.5);
        let path = dijkstra(&graph, id(&graph, "A"), id(&graph, "C")).unwrap();

        assert_eq!(labels(&graph, &path), vec!["A", "B", "C"]);
        assert_eq!(path.cost(&graph), Ok(2.0));
    }

    #[test]
    fn records_costs() {
        let graph = square(1.5);
        let mut traversal = Traversal::default();
        let a = id(&graph, "A");
        let c = id(&graph, "C");

        dijkstra_with(&graph, &mut traversal, a, c).unwrap();
        assert_eq!(traversal.cost(a), 0.0);
        assert_eq!(traversal.cost(id(&graph, "B")), 1.0);
        assert_eq!(traversal.cost(c), 1.5);
        assert_eq!(traversal.previous(c), Some(a));
        assert_eq!(traversal.color(c), Color::Finalized);
        assert_eq!(traversal.color(id(&graph, "E")), Color::Unvisited);
    }

    #[test]
    fn unreachable() {
        let graph = square(1.5);
        let path = dijkstra(&graph, id(&graph, "E"), id(&graph, "A")).unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn missing_edge_is_fatal() {
        /// Claims a neighbor it has no edge to.
        struct Liar;

        impl Graphable for Liar {
            fn vertex_count(&self) -> usize {
                2
            }

            fn neighbors(&self, vertex: VertexId) -> Vec<VertexId> {
                if vertex.index() == 0 {
                    vec![VertexId::new(1)]
                } else {
                    Vec::new()
                }
            }

            fn edge_cost(&self, from: VertexId, to: VertexId) -> Result<f64> {
                Err(SearchError::MissingEdge(from, to))
            }
        }

        let result = dijkstra(&Liar, VertexId::new(0), VertexId::new(1));
        assert_eq!(
            result,
            Err(SearchError::MissingEdge(VertexId::new(0), VertexId::new(1)))
        );
    }

    #[test]
    fn repeated_searches_agree() {
        let graph = square(2.5);
        let mut traversal = Traversal::default();
        let a = id(&graph, "A");
        let c = id(&graph, "C");

        let first = dijkstra_with(&graph, &mut traversal, a, c).unwrap();
        let second = dijkstra_with(&graph, &mut traversal, a, c).unwrap();
        assert_eq!(first, second);
    }
}

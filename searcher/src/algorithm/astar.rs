use super::best_first;
use crate::errors::Result;
use crate::graph::{Graphable, Path, VertexId};
use crate::traits::Heuristic;
use crate::traversal::Traversal;

/// Perform an A* search, guided by `heuristic`.
///
/// Like Dijkstra's algorithm, but vertices are expanded in order of
/// their known cost plus the heuristic's estimate of the cost remaining
/// to `end`. The result is the cheapest path as long as the heuristic
/// never overestimates.
pub fn astar<G, H>(graph: &G, start: VertexId, end: VertexId, heuristic: &H) -> Result<Path>
where
    G: Graphable + ?Sized,
    H: Heuristic + ?Sized,
{
    let mut traversal = Traversal::for_graph(graph);
    astar_with(graph, &mut traversal, start, end, heuristic)
}

/// A* search, leaving the final search state in `traversal`.
///
/// The cost recorded for each vertex is the true cost from `start`;
/// heuristic estimates only affect the order of expansion.
pub fn astar_with<G, H>(
    graph: &G,
    traversal: &mut Traversal,
    start: VertexId,
    end: VertexId,
    heuristic: &H,
) -> Result<Path>
where
    G: Graphable + ?Sized,
    H: Heuristic + ?Sized,
{
    best_first(graph, traversal, start, end, heuristic)
}

pub use bfs::{bfs, bfs_with};
pub use dfs::{dfs, dfs_with};

mod bfs {
    use std::collections::VecDeque;

    use tracing::{debug, trace};

    use crate::algorithm::prepare;
    use crate::errors::Result;
    use crate::graph::{Graphable, Path, VertexId};
    use crate::traversal::{Color, Traversal};

    /// Breadth-first search, which finds the path with the fewest edges.
    ///
    /// Edge weights are ignored. Among equally short paths, the one
    /// found first in [Graphable::neighbors] order is returned.
    pub fn bfs<G>(graph: &G, start: VertexId, end: VertexId) -> Result<Path>
    where
        G: Graphable + ?Sized,
    {
        let mut traversal = Traversal::for_graph(graph);
        bfs_with(graph, &mut traversal, start, end)
    }

    /// Breadth-first search, leaving the final search state in `traversal`.
    ///
    /// The cost recorded for each vertex is its distance from `start`
    /// in edges.
    pub fn bfs_with<G>(
        graph: &G,
        traversal: &mut Traversal,
        start: VertexId,
        end: VertexId,
    ) -> Result<Path>
    where
        G: Graphable + ?Sized,
    {
        prepare(graph, traversal, start, end)?;

        let mut queue = VecDeque::new();
        traversal.set_origin(start, 0.0);
        traversal.mark_visited(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            traversal.finalize(current);
            trace!(%current, "expanding");

            // Reached the destination
            if current == end {
                debug!(
                    %start,
                    %end,
                    edges = traversal.cost(end),
                    finalized = traversal.count(Color::Finalized),
                    "found path"
                );
                return Ok(Path::reconstruct(traversal, start, end));
            }

            let depth = traversal.cost(current) + 1.0;
            for successor in graph.neighbors(current) {
                // Vertices are marked when queued, so each is queued once.
                if !traversal.visited(successor) {
                    traversal.discover(successor, current, depth);
                    traversal.mark_visited(successor);
                    queue.push_back(successor);
                }
            }
        }

        debug!(%start, %end, "no path");
        Ok(Path::empty())
    }
}

mod dfs {
    use tracing::{debug, trace};

    use crate::algorithm::prepare;
    use crate::errors::Result;
    use crate::graph::{Graphable, Path, VertexId};
    use crate::traversal::{Color, Traversal};

    /// A vertex being explored, and how far through its
    /// neighbors the search has got.
    #[derive(Debug)]
    struct Frame {
        vertex: VertexId,
        neighbors: Vec<VertexId>,
        next: usize,
    }

    impl Frame {
        fn enter<G>(graph: &G, vertex: VertexId) -> Self
        where
            G: Graphable + ?Sized,
        {
            Self {
                vertex,
                neighbors: graph.neighbors(vertex),
                next: 0,
            }
        }
    }

    /// Depth-first search, which finds some path from `start` to `end`.
    ///
    /// Edge weights are ignored, and the path need not be the shortest.
    /// Neighbors are explored in [Graphable::neighbors] order.
    pub fn dfs<G>(graph: &G, start: VertexId, end: VertexId) -> Result<Path>
    where
        G: Graphable + ?Sized,
    {
        let mut traversal = Traversal::for_graph(graph);
        dfs_with(graph, &mut traversal, start, end)
    }

    /// Depth-first search, leaving the final search state in `traversal`.
    ///
    /// Uses an explicit stack rather than recursion, visiting vertices in
    /// the same order a recursive search would. Vertices on dead-end
    /// branches are marked [Color::Abandoned] and lose their predecessor,
    /// so on success the only predecessor links left are along the path.
    /// The cost recorded for each vertex is its depth in the search tree.
    pub fn dfs_with<G>(
        graph: &G,
        traversal: &mut Traversal,
        start: VertexId,
        end: VertexId,
    ) -> Result<Path>
    where
        G: Graphable + ?Sized,
    {
        prepare(graph, traversal, start, end)?;

        traversal.set_origin(start, 0.0);
        traversal.finalize(start);
        if start == end {
            return Ok(Path::reconstruct(traversal, start, end));
        }

        let mut stack = vec![Frame::enter(graph, start)];
        while let Some(frame) = stack.last_mut() {
            let current = frame.vertex;
            let successor = frame.neighbors.get(frame.next).copied();
            frame.next += 1;

            let successor = match successor {
                Some(successor) => successor,
                None => {
                    // Dead end, back up.
                    stack.pop();
                    traversal.abandon(current);
                    trace!(%current, "abandoned");
                    continue;
                }
            };

            if traversal.visited(successor) {
                continue;
            }

            let depth = traversal.cost(current) + 1.0;
            traversal.discover(successor, current, depth);
            traversal.finalize(successor);
            trace!(%successor, %current, "descending");

            // Reached the destination
            if successor == end {
                debug!(
                    %start,
                    %end,
                    depth,
                    finalized = traversal.count(Color::Finalized),
                    abandoned = traversal.count(Color::Abandoned),
                    "found path"
                );
                return Ok(Path::reconstruct(traversal, start, end));
            }
            stack.push(Frame::enter(graph, successor));
        }

        debug!(%start, %end, "no path");
        Ok(Path::empty())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithm::fixtures::*;
    use crate::graph::{GraphBuilder, Graphable, VertexId};
    use crate::traversal::{Color, Traversal};

    #[test]
    fn bfs_fewest_edges() {
        // The diagonal is expensive, but breadth-first search doesn't care.
        let graph = square(10.0);
        let path = bfs(&graph, id(&graph, "A"), id(&graph, "C")).unwrap();
        assert_eq!(labels(&graph, &path), vec!["A", "C"]);
    }

    #[test]
    fn bfs_neighbor_order_breaks_ties() {
        let graph = square(1.5);
        let path = bfs(&graph, id(&graph, "B"), id(&graph, "D")).unwrap();
        assert_eq!(labels(&graph, &path), vec!["B", "A", "D"]);
    }

    #[test]
    fn bfs_records_hop_counts() {
        let mut builder = GraphBuilder::directed();
        builder.edge(0, 1, 5.0);
        builder.edge(1, 2, 5.0);
        builder.edge(2, 3, 5.0);
        builder.edge(0, 3, 50.0);
        builder.vertex(4);
        let graph = builder.build();

        let mut traversal = Traversal::default();
        let path = bfs_with(&graph, &mut traversal, VertexId::new(0), VertexId::new(3)).unwrap();
        assert_eq!(path.vertices(), &[VertexId::new(0), VertexId::new(3)]);
        assert_eq!(traversal.cost(VertexId::new(1)), 1.0);
        assert_eq!(traversal.cost(VertexId::new(3)), 1.0);
        assert_eq!(traversal.color(VertexId::new(4)), Color::Unvisited);
    }

    #[test]
    fn bfs_never_links_back_to_start() {
        let graph = square(1.5);
        let mut traversal = Traversal::default();
        let a = id(&graph, "A");

        let path = bfs_with(&graph, &mut traversal, a, id(&graph, "E")).unwrap();
        assert!(path.is_empty());
        assert_eq!(traversal.previous(a), None);
        assert_eq!(traversal.count(Color::Finalized), 4);
    }

    #[test]
    fn dfs_follows_first_neighbor() {
        let graph = square(1.5);
        let path = dfs(&graph, id(&graph, "A"), id(&graph, "D")).unwrap();
        // A's first neighbor is B, whose next unvisited neighbor is C.
        assert_eq!(labels(&graph, &path), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn dfs_terminates_on_cycles() {
        let mut builder = GraphBuilder::directed();
        builder.edge("a", "b", 1.0);
        builder.edge("b", "c", 1.0);
        builder.edge("c", "a", 1.0);
        builder.vertex("z");
        let graph = builder.build();

        let a = graph.vertex_id(&"a").unwrap();
        let z = graph.vertex_id(&"z").unwrap();
        let mut traversal = Traversal::default();

        let path = dfs_with(&graph, &mut traversal, a, z).unwrap();
        assert!(path.is_empty());
        assert_eq!(traversal.count(Color::Abandoned), 3);
        assert_eq!(traversal.visited_count(), 3);
    }

    #[test]
    fn dfs_clears_dead_branches() {
        // a -> b -> dead, a -> c -> goal
        let mut builder = GraphBuilder::directed();
        builder.edge("a", "b", 1.0);
        builder.edge("b", "dead", 1.0);
        builder.edge("a", "c", 1.0);
        builder.edge("c", "goal", 1.0);
        let graph = builder.build();

        let a = graph.vertex_id(&"a").unwrap();
        let goal = graph.vertex_id(&"goal").unwrap();
        let mut traversal = Traversal::default();

        let path = dfs_with(&graph, &mut traversal, a, goal).unwrap();
        assert_eq!(graph.labels(&path), vec![&"a", &"c", &"goal"]);

        for vertex in graph.vertices() {
            if path.contains(vertex) {
                assert_ne!(traversal.color(vertex), Color::Abandoned);
            } else {
                assert_eq!(traversal.color(vertex), Color::Abandoned);
                assert_eq!(traversal.previous(vertex), None);
            }
        }
    }

    #[test]
    fn dfs_deep_chain() {
        // Deep enough to overflow a naive recursive search.
        let mut builder = GraphBuilder::directed();
        let length = 200_000;
        for i in 0..length {
            builder.edge(i, i + 1, 1.0);
        }
        let graph = builder.build();

        let path = dfs(&graph, VertexId::new(0), VertexId::new(length)).unwrap();
        assert_eq!(path.len(), length + 1);
    }

    #[test]
    fn repeated_searches_agree() {
        let graph = square(1.5);
        let mut traversal = Traversal::default();
        let b = id(&graph, "B");
        let d = id(&graph, "D");

        let first = dfs_with(&graph, &mut traversal, b, d).unwrap();
        let second = dfs_with(&graph, &mut traversal, b, d).unwrap();
        assert_eq!(first, second);

        let first = bfs_with(&graph, &mut traversal, b, d).unwrap();
        let second = bfs_with(&graph, &mut traversal, b, d).unwrap();
        assert_eq!(first, second);
    }
}

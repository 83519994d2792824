//! Graph search algorithms: depth-first, breadth-first,
//! Dijkstra's algorithm and A*.
//!
//! To search a graph, implement [Graphable] for it (or build a [Graph])
//! and call one of [dfs], [bfs], [dijkstra] or [astar]. Each returns the
//! [Path] found, which is empty when the destination can't be reached.
//!
//! The graph is never modified by a search. The per-vertex state of a
//! search lives in a [Traversal]; the `*_with` variants of each search
//! accept one so that it can be inspected afterwards.

pub mod algorithm;
mod errors;
pub mod frontier;
pub mod graph;
mod traits;
mod traversal;

pub use errors::Result as SearchResult;
pub use errors::SearchError;
pub use traits::Heuristic;
pub use traits::ZeroHeuristic;
pub use traversal::{Color, Traversal, VertexState};

pub use frontier::PriorityFrontier;
pub use graph::{Edge, Graph, GraphBuilder, Graphable, Orientation, Path, Vertex, VertexId};

pub use algorithm::astar::{astar, astar_with};
pub use algorithm::basic::{bfs, bfs_with, dfs, dfs_with};
pub use algorithm::dijkstra::{dijkstra, dijkstra_with};
pub use algorithm::{Algorithm, ParseAlgorithmError};

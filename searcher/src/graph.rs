//! Graph datastructures.
//!
//! Vertices live in an arena and are referred to by [VertexId],
//! a dense index. Searches never change a graph: see
//! [crate::Traversal] for the per-search state.

use std::collections::HashMap;
use std::fmt::{self, Debug};
use std::hash::Hash;

use tracing::trace;

mod edge;
mod path;
mod traits;

pub use edge::Edge;
pub use path::Path;
pub use traits::{Graphable, Vertices};

use crate::errors::{Result, SearchError};

/// Stable identifier for a vertex within one graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(usize);

impl VertexId {
    pub fn new(index: usize) -> Self {
        VertexId(index)
    }

    /// Position of this vertex in the graph's arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<usize> for VertexId {
    fn from(index: usize) -> Self {
        VertexId(index)
    }
}

/// Whether edges may be followed in one direction or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Directed,
    Undirected,
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation::Undirected
    }
}

/// A labeled vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex<N> {
    id: VertexId,
    label: N,
}

impl<N> Vertex<N> {
    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn label(&self) -> &N {
        &self.label
    }
}

/// Outgoing connection stored in the adjacency list.
#[derive(Debug, Clone, Copy)]
struct Link {
    target: VertexId,
    edge: usize,
}

/// Incrementally constructs a [Graph].
#[derive(Debug)]
pub struct GraphBuilder<N>
where
    N: Debug + Clone + Hash + Eq,
{
    orientation: Orientation,
    vertices: Vec<Vertex<N>>,
    index: HashMap<N, VertexId>,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<Link>>,
}

impl<N> GraphBuilder<N>
where
    N: Debug + Clone + Hash + Eq,
{
    /// Create an empty graph builder
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            vertices: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
            adjacency: Vec::new(),
        }
    }

    pub fn directed() -> Self {
        Self::new(Orientation::Directed)
    }

    pub fn undirected() -> Self {
        Self::new(Orientation::Undirected)
    }

    /// Add a vertex with this label, if it isn't already present.
    pub fn vertex(&mut self, label: N) -> VertexId {
        if let Some(id) = self.index.get(&label) {
            return *id;
        }

        let id = VertexId::new(self.vertices.len());
        self.index.insert(label.clone(), id);
        self.vertices.push(Vertex { id, label });
        self.adjacency.push(Vec::new());
        id
    }

    /// Connect two labeled vertices, adding them if necessary.
    ///
    /// Only one edge is kept between an ordered pair of vertices: when
    /// inserting a second one, the cheaper cost wins. Self-loops are
    /// ignored, and return false.
    pub fn edge(&mut self, from: N, to: N, cost: f64) -> bool {
        let from = self.vertex(from);
        let to = self.vertex(to);
        if from == to {
            return false;
        }

        if let Some(link) = self.adjacency[from.index()]
            .iter()
            .find(|link| link.target == to)
        {
            let existing = &mut self.edges[link.edge];
            if cost < existing.cost {
                trace!(%from, %to, cost, "replacing parallel edge");
                existing.cost = cost;
            }
            return true;
        }

        let edge = self.edges.len();
        self.edges.push(Edge::new(from, to, cost));

        // Left to right
        self.adjacency[from.index()].push(Link { target: to, edge });

        // Right to left
        if self.orientation == Orientation::Undirected {
            self.adjacency[to.index()].push(Link { target: from, edge });
        }
        true
    }

    pub fn build(self) -> Graph<N> {
        Graph {
            orientation: self.orientation,
            vertices: self.vertices,
            index: self.index,
            edges: self.edges,
            adjacency: self.adjacency,
        }
    }
}

/// A weighted graph with labeled vertices.
#[derive(Debug, Clone)]
pub struct Graph<N>
where
    N: Debug + Clone + Hash + Eq,
{
    orientation: Orientation,
    vertices: Vec<Vertex<N>>,
    index: HashMap<N, VertexId>,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<Link>>,
}

impl<N> Graph<N>
where
    N: Debug + Clone + Hash + Eq,
{
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<N>> {
        self.vertices.get(id.index())
    }

    /// Find a vertex by its label.
    pub fn vertex_id(&self, label: &N) -> Option<VertexId> {
        self.index.get(label).copied()
    }

    pub fn label(&self, id: VertexId) -> Option<&N> {
        self.vertex(id).map(|v| &v.label)
    }

    /// Labels of the vertices along a path.
    pub fn labels(&self, path: &Path) -> Vec<&N> {
        path.iter().filter_map(|v| self.label(*v)).collect()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    fn link(&self, from: VertexId, to: VertexId) -> Option<&Link> {
        self.adjacency
            .get(from.index())?
            .iter()
            .find(|link| link.target == to)
    }
}

impl<N> Graphable for Graph<N>
where
    N: Debug + Clone + Hash + Eq,
{
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn neighbors(&self, vertex: VertexId) -> Vec<VertexId> {
        self.adjacency
            .get(vertex.index())
            .map(|links| links.iter().map(|link| link.target).collect())
            .unwrap_or_default()
    }

    fn edge_cost(&self, from: VertexId, to: VertexId) -> Result<f64> {
        self.link(from, to)
            .map(|link| self.edges[link.edge].cost)
            .ok_or(SearchError::MissingEdge(from, to))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn undirected_neighbors_are_symmetric() {
        let mut builder = GraphBuilder::undirected();
        builder.edge("a", "b", 1.0);
        builder.edge("b", "c", 2.0);
        let graph = builder.build();

        let a = graph.vertex_id(&"a").unwrap();
        let b = graph.vertex_id(&"b").unwrap();
        let c = graph.vertex_id(&"c").unwrap();

        assert_eq!(graph.neighbors(b), vec![a, c]);
        assert_eq!(graph.neighbors(c), vec![b]);
        assert_eq!(graph.edge_cost(c, b), Ok(2.0));
        assert_eq!(graph.edge_cost(a, b), Ok(1.0));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn directed_edges() {
        let mut builder = GraphBuilder::directed();
        builder.edge("a", "b", 1.0);
        let graph = builder.build();

        let a = graph.vertex_id(&"a").unwrap();
        let b = graph.vertex_id(&"b").unwrap();

        assert_eq!(graph.neighbors(a), vec![b]);
        assert!(graph.neighbors(b).is_empty());
        assert_eq!(graph.edge_cost(b, a), Err(SearchError::MissingEdge(b, a)));
    }

    #[test]
    fn parallel_edges_keep_cheapest() {
        let mut builder = GraphBuilder::undirected();
        assert!(builder.edge("a", "b", 3.0));
        assert!(builder.edge("b", "a", 1.0));
        assert!(builder.edge("a", "b", 2.0));
        let graph = builder.build();

        let a = graph.vertex_id(&"a").unwrap();
        let b = graph.vertex_id(&"b").unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edge_cost(a, b), Ok(1.0));
        assert_eq!(graph.neighbors(a), vec![b]);
    }

    #[test]
    fn self_loops_are_ignored() {
        let mut builder = GraphBuilder::undirected();
        assert!(!builder.edge("a", "a", 1.0));
        let graph = builder.build();

        assert_eq!(graph.len(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn vertices_and_labels() {
        let mut builder = GraphBuilder::undirected();
        let e = builder.vertex("e");
        assert_eq!(builder.vertex("e"), e);
        builder.edge("a", "b", 1.0);
        let graph = builder.build();

        assert_eq!(graph.vertices().collect::<Vec<_>>().len(), 3);
        assert_eq!(graph.label(e), Some(&"e"));
        assert!(graph.contains(e));
        assert!(!graph.contains(VertexId::new(3)));
        assert!(graph.neighbors(VertexId::new(7)).is_empty());

        let path: Path = vec![VertexId::new(1), VertexId::new(2)].into();
        assert_eq!(graph.labels(&path), vec![&"a", &"b"]);
        assert_eq!(path.cost(&graph), Ok(1.0));
        let edge = graph.edges().next().unwrap();
        assert_eq!(edge.from(), VertexId::new(1));
        assert_eq!(edge.to(), VertexId::new(2));
        assert_eq!(edge.cost(), 1.0);
    }
}

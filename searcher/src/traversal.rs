//! Per-search bookkeeping for each vertex of a graph.
//!
//! The graph itself is never modified by a search. Instead every
//! search records visitation, cost and predecessor links in a
//! [Traversal], which is reset at the start of each search.

use crate::graph::{Graphable, VertexId};

/// Stage of a vertex within a search.
///
/// Colors are only recorded for inspection and rendering,
/// the algorithms never consult them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    /// Not yet seen by the search.
    Unvisited,

    /// Placed on the frontier, but not yet expanded.
    Discovered,

    /// Expanded by the search.
    Finalized,

    /// Expanded by depth-first search, but a dead end.
    Abandoned,
}

impl Default for Color {
    fn default() -> Self {
        Color::Unvisited
    }
}

/// The state of a single vertex during a search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexState {
    pub visited: bool,

    /// Cost of the best known path from the start vertex.
    pub cost: f64,

    /// Predecessor of this vertex on the best known path.
    pub previous: Option<VertexId>,

    pub color: Color,
}

impl Default for VertexState {
    fn default() -> Self {
        Self {
            visited: false,
            cost: f64::INFINITY,
            previous: None,
            color: Color::Unvisited,
        }
    }
}

/// Search state for every vertex in a graph, indexed by [VertexId].
#[derive(Debug, Clone, Default)]
pub struct Traversal {
    states: Vec<VertexState>,
}

impl Traversal {
    /// A traversal for a graph with `vertex_count` vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            states: vec![VertexState::default(); vertex_count],
        }
    }

    /// A traversal sized for `graph`.
    pub fn for_graph<G>(graph: &G) -> Self
    where
        G: Graphable + ?Sized,
    {
        Self::new(graph.vertex_count())
    }

    /// Forget everything recorded by a previous search, and resize
    /// to hold `vertex_count` vertices.
    pub fn reset(&mut self, vertex_count: usize) {
        self.states.clear();
        self.states.resize(vertex_count, VertexState::default());
    }

    /// Number of vertices tracked.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn get(&self, vertex: VertexId) -> Option<&VertexState> {
        self.states.get(vertex.index())
    }

    /// State of a vertex.
    ///
    /// # Panics
    ///
    /// Panics if the vertex is not tracked by this traversal.
    pub fn state(&self, vertex: VertexId) -> &VertexState {
        &self.states[vertex.index()]
    }

    pub fn visited(&self, vertex: VertexId) -> bool {
        self.state(vertex).visited
    }

    pub fn cost(&self, vertex: VertexId) -> f64 {
        self.state(vertex).cost
    }

    pub fn previous(&self, vertex: VertexId) -> Option<VertexId> {
        self.state(vertex).previous
    }

    pub fn color(&self, vertex: VertexId) -> Color {
        self.state(vertex).color
    }

    /// Iterate over every vertex and its state.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &VertexState)> {
        self.states
            .iter()
            .enumerate()
            .map(|(i, s)| (VertexId::new(i), s))
    }

    /// Number of vertices currently in the given stage.
    pub fn count(&self, color: Color) -> usize {
        self.states.iter().filter(|s| s.color == color).count()
    }

    /// Number of vertices marked as visited.
    pub fn visited_count(&self) -> usize {
        self.states.iter().filter(|s| s.visited).count()
    }

    fn state_mut(&mut self, vertex: VertexId) -> &mut VertexState {
        &mut self.states[vertex.index()]
    }

    /// Record the start of the search at `vertex`, with its initial cost.
    pub(crate) fn set_origin(&mut self, vertex: VertexId, cost: f64) {
        let state = self.state_mut(vertex);
        state.cost = cost;
        state.color = Color::Discovered;
    }

    /// Record a (better) path to `vertex` through `previous`.
    pub(crate) fn discover(&mut self, vertex: VertexId, previous: VertexId, cost: f64) {
        let state = self.state_mut(vertex);
        state.previous = Some(previous);
        state.cost = cost;
        state.color = Color::Discovered;
    }

    /// Mark a vertex as seen, so it won't be entered again.
    pub(crate) fn mark_visited(&mut self, vertex: VertexId) {
        self.state_mut(vertex).visited = true;
    }

    /// Mark a vertex as expanded.
    pub(crate) fn finalize(&mut self, vertex: VertexId) {
        let state = self.state_mut(vertex);
        state.visited = true;
        state.color = Color::Finalized;
    }

    /// Mark a vertex as a dead end. Its predecessor link is dropped,
    /// so that only links along live paths remain.
    pub(crate) fn abandon(&mut self, vertex: VertexId) {
        let state = self.state_mut(vertex);
        state.previous = None;
        state.color = Color::Abandoned;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reset() {
        let mut traversal = Traversal::new(2);
        let a = VertexId::new(0);
        let b = VertexId::new(1);

        traversal.set_origin(a, 0.0);
        traversal.finalize(a);
        traversal.discover(b, a, 3.0);
        assert!(traversal.visited(a));
        assert_eq!(traversal.cost(b), 3.0);
        assert_eq!(traversal.previous(b), Some(a));
        assert_eq!(traversal.count(Color::Discovered), 1);

        traversal.reset(3);
        assert_eq!(traversal.len(), 3);
        for (_, state) in traversal.iter() {
            assert_eq!(state, &VertexState::default());
        }
        assert!(traversal.cost(b).is_infinite());
        assert_eq!(traversal.visited_count(), 0);
    }

    #[test]
    fn abandon_clears_predecessor() {
        let mut traversal = Traversal::new(2);
        let a = VertexId::new(0);
        let b = VertexId::new(1);

        traversal.discover(b, a, 1.0);
        traversal.finalize(b);
        traversal.abandon(b);

        assert_eq!(traversal.previous(b), None);
        assert_eq!(traversal.color(b), Color::Abandoned);
        assert!(traversal.visited(b));
    }

    #[test]
    fn colors_are_ordered() {
        assert!(Color::Unvisited < Color::Discovered);
        assert!(Color::Discovered < Color::Finalized);
        assert_eq!(Color::default(), Color::Unvisited);
    }

    #[test]
    fn out_of_range() {
        let traversal = Traversal::new(1);
        assert!(traversal.get(VertexId::new(1)).is_none());
        assert!(!traversal.is_empty());
    }
}

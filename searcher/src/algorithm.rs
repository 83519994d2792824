//! Provides the building blocks for search algorithms

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::{debug, trace};

use crate::errors::{Result, SearchError};
use crate::frontier::PriorityFrontier;
use crate::graph::{Graphable, Path, VertexId};
use crate::traits::Heuristic;
use crate::traversal::{Color, Traversal};

pub(crate) mod astar;
pub(crate) mod basic;
pub(crate) mod dijkstra;

/// The search strategies provided by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    DepthFirst,
    BreadthFirst,
    Dijkstra,
    AStar,
}

const ALGORITHMS: [Algorithm; 4] = [
    Algorithm::DepthFirst,
    Algorithm::BreadthFirst,
    Algorithm::Dijkstra,
    Algorithm::AStar,
];

impl Algorithm {
    pub fn all() -> impl Iterator<Item = Self> {
        ALGORITHMS.iter().cloned()
    }

    /// Short name, as accepted by [Algorithm::from_str].
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::DepthFirst => "dfs",
            Algorithm::BreadthFirst => "bfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "astar",
        }
    }

    /// Does this strategy account for edge weights?
    pub fn is_weighted(self) -> bool {
        matches!(self, Algorithm::Dijkstra | Algorithm::AStar)
    }

    /// Run this search from `start` to `end`, recording state in
    /// `traversal`. The heuristic is only consulted by A*.
    pub fn search<G, H>(
        self,
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
        match self {
            Algorithm::DepthFirst => basic::dfs_with(graph, traversal, start, end),
            Algorithm::BreadthFirst => basic::bfs_with(graph, traversal, start, end),
            Algorithm::Dijkstra => dijkstra::dijkstra_with(graph, traversal, start, end),
            Algorithm::AStar => astar::astar_with(graph, traversal, start, end, heuristic),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error when parsing an algorithm name.
#[derive(Debug, Error)]
#[error("Unknown search algorithm: {0}")]
pub struct ParseAlgorithmError(String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dfs" | "depth-first" => Ok(Algorithm::DepthFirst),
            "bfs" | "breadth-first" => Ok(Algorithm::BreadthFirst),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" | "a*" => Ok(Algorithm::AStar),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

/// Check that both ends of a search are in the graph, and
/// prepare the traversal for a fresh search.
pub(crate) fn prepare<G>(
    graph: &G,
    traversal: &mut Traversal,
    start: VertexId,
    end: VertexId,
) -> Result<()>
where
    G: Graphable + ?Sized,
{
    for vertex in [start, end].iter() {
        if !graph.contains(*vertex) {
            return Err(SearchError::UnknownVertex(*vertex));
        }
    }
    traversal.reset(graph.vertex_count());
    Ok(())
}

/// Best-first search over a priority frontier, shared by
/// Dijkstra's algorithm and A*.
///
/// Vertices are ordered by their cost from `start` plus the heuristic's
/// estimate of the remaining cost to `end`. With [crate::ZeroHeuristic]
/// this is exactly Dijkstra's algorithm.
pub(crate) fn best_first<G, H>(
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
    prepare(graph, traversal, start, end)?;

    let mut frontier = PriorityFrontier::new();
    let origin = heuristic.estimate(start, end);
    traversal.set_origin(start, origin);
    frontier.insert(start, origin);
    for vertex in graph.vertices() {
        frontier.insert(vertex, f64::INFINITY);
    }

    while let Some((current, priority)) = frontier.extract_min() {
        if priority.is_infinite() {
            // Everything left in the frontier is unreachable.
            break;
        }

        traversal.finalize(current);
        trace!(%current, priority, "expanding");

        if current == end {
            let path = Path::reconstruct(traversal, start, end);
            debug!(
                %start,
                %end,
                cost = traversal.cost(end),
                finalized = traversal.count(Color::Finalized),
                "found path"
            );
            return Ok(path);
        }

        for neighbor in graph.neighbors(current) {
            if traversal.visited(neighbor) {
                continue;
            }

            let cost = traversal.cost(current) + graph.edge_cost(current, neighbor)?;
            if cost < traversal.cost(neighbor) {
                // Better value
                trace!(%neighbor, %current, cost, "relaxing");
                traversal.discover(neighbor, current, cost);
                frontier.decrease_priority(neighbor, cost + heuristic.estimate(neighbor, end));
            }
        }
    }

    debug!(
        %start,
        %end,
        finalized = traversal.count(Color::Finalized),
        "no path"
    );
    Ok(Path::empty())
}

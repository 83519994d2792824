use thiserror::Error;

use crate::graph::VertexId;

/// Error produced when a search fails.
///
/// An unreachable destination is not an error: searches
/// report it with an empty [crate::Path].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    #[error("Vertex {0} is not part of the graph")]
    UnknownVertex(VertexId),

    #[error("No edge from {0} to {1}")]
    MissingEdge(VertexId, VertexId),
}

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;

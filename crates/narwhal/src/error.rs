//! Error taxonomy shared by every graph operation.

pub type Result<T> = std::result::Result<T, GraphError>;

/// Broad classification of a [`GraphError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller passed something the graph cannot accept (unknown vertex, foreign edge,
    /// forbidden loop, ...).
    InvalidArgument,
    /// The operation does not apply to this graph (wrong topology, read-only view, ...).
    Unsupported,
    /// An exhausted iterator was asked for another element.
    NoSuchElement,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    #[error("no such vertex in graph: {vertex}")]
    VertexNotFound { vertex: String },

    #[error("no such edge in graph: {edge}")]
    EdgeNotFound { edge: String },

    #[error("loops not allowed: {vertex}")]
    LoopsNotAllowed { vertex: String },

    #[error("edge {edge} is not compatible with this graph's edge factory")]
    IncompatibleEdge { edge: String },

    #[error("negative edge weight {weight} on {edge}")]
    NegativeEdgeWeight { edge: String, weight: f64 },

    #[error("negative cycle reachable from {vertex}")]
    NegativeCycle { vertex: String },

    #[error("base graph has been dropped")]
    BaseGraphDropped,

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("unsupported operation: {operation}")]
    Unsupported { operation: &'static str },

    #[error("no such element")]
    NoSuchElement,
}

impl GraphError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GraphError::Unsupported { .. } => ErrorKind::Unsupported,
            GraphError::NoSuchElement => ErrorKind::NoSuchElement,
            GraphError::VertexNotFound { .. }
            | GraphError::EdgeNotFound { .. }
            | GraphError::LoopsNotAllowed { .. }
            | GraphError::IncompatibleEdge { .. }
            | GraphError::NegativeEdgeWeight { .. }
            | GraphError::NegativeCycle { .. }
            | GraphError::BaseGraphDropped
            | GraphError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
        }
    }

    pub fn is_unsupported(&self) -> bool {
        self.kind() == ErrorKind::Unsupported
    }

    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }

    pub(crate) fn vertex_not_found(vertex: &impl std::fmt::Debug) -> Self {
        GraphError::VertexNotFound {
            vertex: format!("{vertex:?}"),
        }
    }

    pub(crate) fn edge_not_found(edge: &impl std::fmt::Debug) -> Self {
        GraphError::EdgeNotFound {
            edge: format!("{edge:?}"),
        }
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        GraphError::InvalidArgument {
            message: message.into(),
        }
    }

    pub(crate) fn unsupported(operation: &'static str) -> Self {
        GraphError::Unsupported { operation }
    }
}

//! The traits and types most programs need, for glob import.

pub use crate::alg::{
    BellmanFordShortestPath, ConnectivityInspector, CycleDetector, DijkstraShortestPath,
    FloydWarshallShortestPaths, GraphPath, KShortestPaths, StrongConnectivityInspector,
};
pub use crate::edge::{DefaultEdge, GraphEdge, VertexId};
pub use crate::error::{GraphError, Result};
pub use crate::graph::{BaseGraph, Graph, GraphMut, GraphOptions};
pub use crate::listen::{GraphListener, ListenableGraph, VertexSetListener};
pub use crate::traverse::{BreadthFirstIterator, DepthFirstIterator, TraversalListener};
pub use crate::view::{AsUndirected, EdgeReversed, Subgraph, UnmodifiableGraph};

//! Graph algorithms.
//!
//! Shortest paths ([`DijkstraShortestPath`], [`BellmanFordShortestPath`],
//! [`KShortestPaths`], [`FloydWarshallShortestPaths`]) return [`GraphPath`] values.
//! Connectivity and cycle queries return [`VertexSet`](crate::VertexSet)s.
//!
//! Every algorithm reads the graph through [`Graph`](crate::Graph), so it runs unchanged
//! over views such as [`EdgeReversed`](crate::view::EdgeReversed) or
//! [`Subgraph`](crate::view::Subgraph).

pub mod bellman_ford;
pub mod connectivity;
pub mod cycle;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod k_shortest;
pub mod path;
pub mod strong;

pub use bellman_ford::BellmanFordShortestPath;
pub use connectivity::ConnectivityInspector;
pub use cycle::CycleDetector;
pub use dijkstra::DijkstraShortestPath;
pub use floyd_warshall::FloydWarshallShortestPaths;
pub use k_shortest::KShortestPaths;
pub use path::GraphPath;
pub use strong::{StrongConnectivityInspector, tarjan_components};

#![forbid(unsafe_code)]

//! In-memory graph structures and algorithms.
//!
//! [`BaseGraph`] stores directed or undirected graphs, with or without self-loops and
//! parallel edges, as configured by [`GraphOptions`]. Everything else is written against
//! the [`Graph`] / [`GraphMut`] traits: views ([`view`]), change notification
//! ([`listen`]), neighbor indices ([`index`]), traversal iterators ([`traverse`]) and the
//! algorithms in [`alg`].
//!
//! ```
//! use narwhal::prelude::*;
//!
//! let mut g: BaseGraph<&str> = BaseGraph::new(GraphOptions::simple_directed().weighted());
//! for v in ["a", "b", "c"] {
//!     g.add_vertex(v).unwrap();
//! }
//! let ab = g.add_edge(&"a", &"b").unwrap().unwrap();
//! g.add_edge(&"b", &"c").unwrap();
//! g.set_edge_weight(&ab, 2.5).unwrap();
//!
//! let path = DijkstraShortestPath::find_path_between(&g, &"a", &"c").unwrap().unwrap();
//! assert_eq!(path.weight(), 3.5);
//! ```

pub mod alg;
pub mod edge;
pub mod error;
pub mod graph;
pub mod index;
pub mod listen;
pub mod prelude;
pub mod traverse;
pub mod util;
pub mod view;

pub use edge::{DefaultEdge, DefaultEdgeFactory, EdgeFactory, EdgeKind, GraphEdge, VertexId};
pub use error::{ErrorKind, GraphError, Result};
pub use graph::{BaseGraph, EdgeListKind, Graph, GraphMut, GraphOptions};

use rustc_hash::FxBuildHasher;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;
type HashSet<T> = hashbrown::HashSet<T, FxBuildHasher>;

/// Insertion-ordered vertex set returned by connectivity and cycle queries.
pub type VertexSet<V> = indexmap::IndexSet<V, FxBuildHasher>;

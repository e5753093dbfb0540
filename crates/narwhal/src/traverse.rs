//! Graph traversal iterators.
//!
//! [`CrossComponentIterator`] drives a traversal over a [`Frontier`]: a FIFO queue gives
//! [`BreadthFirstIterator`], a LIFO stack gives [`DepthFirstIterator`]. Directed graphs
//! follow outgoing edges, undirected graphs follow every incident edge. When one connected
//! component is exhausted the iterator seeds the next unseen vertex in vertex-set order,
//! unless cross-component traversal has been switched off.

mod bfs;
mod cross_component;
mod dfs;

pub use bfs::{BreadthFirstIterator, Fifo};
pub use cross_component::{CrossComponentIterator, Frontier, Step, TraversalListener};
pub use dfs::{DepthFirstIterator, Lifo};

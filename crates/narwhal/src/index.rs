//! Cached neighbor lookups.
//!
//! An index snapshots the neighbors of a vertex on first query. Registered as a listener on
//! the graph it indexes, it keeps the cached entries current; unregistered, it keeps
//! serving the snapshot.

mod neighbor;

pub use neighbor::{DirectedNeighborIndex, NeighborIndex, Neighbors};

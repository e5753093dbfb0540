//! Graphs backed by another graph.
//!
//! - [`GraphDelegator`] forwards everything unchanged.
//! - [`UnmodifiableGraph`] forwards reads and rejects every mutation.
//! - [`AsUndirected`] reads a directed graph as if it were undirected.
//! - [`EdgeReversed`] reads a directed graph with every edge turned around.
//! - [`Subgraph`] holds explicit vertex/edge subsets of a shared base graph and, when the
//!   base is listenable, follows its removals.

/// Expands to the read methods of [`crate::graph::Graph`] forwarding to `self.$inner`.
macro_rules! forward_graph_reads {
    ($inner:ident) => {
        fn is_directed(&self) -> bool {
            self.$inner.is_directed()
        }

        fn vertices(&self) -> impl Iterator<Item = Self::Vertex> + '_ {
            self.$inner.vertices()
        }

        fn edges(&self) -> impl Iterator<Item = Self::Edge> + '_ {
            self.$inner.edges()
        }

        fn vertex_count(&self) -> usize {
            self.$inner.vertex_count()
        }

        fn edge_count(&self) -> usize {
            self.$inner.edge_count()
        }

        fn contains_vertex(&self, v: &Self::Vertex) -> bool {
            self.$inner.contains_vertex(v)
        }

        fn contains_edge(&self, e: &Self::Edge) -> bool {
            self.$inner.contains_edge(e)
        }

        fn get_edge(&self, source: &Self::Vertex, target: &Self::Vertex) -> Option<Self::Edge> {
            self.$inner.get_edge(source, target)
        }

        fn get_all_edges(&self, source: &Self::Vertex, target: &Self::Vertex) -> Vec<Self::Edge> {
            self.$inner.get_all_edges(source, target)
        }

        fn edges_of(&self, v: &Self::Vertex) -> $crate::error::Result<Vec<Self::Edge>> {
            self.$inner.edges_of(v)
        }

        fn degree_of(&self, v: &Self::Vertex) -> $crate::error::Result<usize> {
            self.$inner.degree_of(v)
        }

        fn in_degree_of(&self, v: &Self::Vertex) -> $crate::error::Result<usize> {
            self.$inner.in_degree_of(v)
        }

        fn out_degree_of(&self, v: &Self::Vertex) -> $crate::error::Result<usize> {
            self.$inner.out_degree_of(v)
        }

        fn incoming_edges_of(&self, v: &Self::Vertex) -> $crate::error::Result<Vec<Self::Edge>> {
            self.$inner.incoming_edges_of(v)
        }

        fn outgoing_edges_of(&self, v: &Self::Vertex) -> $crate::error::Result<Vec<Self::Edge>> {
            self.$inner.outgoing_edges_of(v)
        }

        fn edge_source(&self, e: &Self::Edge) -> Self::Vertex {
            self.$inner.edge_source(e)
        }

        fn edge_target(&self, e: &Self::Edge) -> Self::Vertex {
            self.$inner.edge_target(e)
        }

        fn edge_weight(&self, e: &Self::Edge) -> f64 {
            self.$inner.edge_weight(e)
        }
    };
}

mod as_undirected;
mod delegator;
mod reversed;
mod subgraph;
mod unmodifiable;

pub use as_undirected::AsUndirected;
pub use delegator::GraphDelegator;
pub use reversed::EdgeReversed;
pub use subgraph::Subgraph;
pub use unmodifiable::UnmodifiableGraph;

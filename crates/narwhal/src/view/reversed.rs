use crate::error::{GraphError, Result};
use crate::graph::Graph;

/// Read-only view of a directed graph with every edge pointing the other way.
///
/// Only [`Graph::edge_source`] and [`Graph::edge_target`] see the reversal; the edge values
/// themselves are shared with the backing graph and still report their stored endpoints.
#[derive(Debug, Clone)]
pub struct EdgeReversed<G> {
    inner: G,
}

impl<G: Graph> EdgeReversed<G> {
    pub fn new(graph: G) -> Result<Self> {
        if !graph.is_directed() {
            return Err(GraphError::invalid("EdgeReversed requires a directed graph"));
        }
        Ok(Self { inner: graph })
    }

    pub fn inner(&self) -> &G {
        &self.inner
    }
}

impl<G: Graph> Graph for EdgeReversed<G> {
    type Vertex = G::Vertex;
    type Edge = G::Edge;

    fn is_directed(&self) -> bool {
        true
    }

    fn vertices(&self) -> impl Iterator<Item = Self::Vertex> + '_ {
        self.inner.vertices()
    }

    fn edges(&self) -> impl Iterator<Item = Self::Edge> + '_ {
        self.inner.edges()
    }

    fn vertex_count(&self) -> usize {
        self.inner.vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    fn contains_vertex(&self, v: &Self::Vertex) -> bool {
        self.inner.contains_vertex(v)
    }

    fn contains_edge(&self, e: &Self::Edge) -> bool {
        self.inner.contains_edge(e)
    }

    fn get_edge(&self, source: &Self::Vertex, target: &Self::Vertex) -> Option<Self::Edge> {
        self.inner.get_edge(target, source)
    }

    fn get_all_edges(&self, source: &Self::Vertex, target: &Self::Vertex) -> Vec<Self::Edge> {
        self.inner.get_all_edges(target, source)
    }

    fn edges_of(&self, v: &Self::Vertex) -> Result<Vec<Self::Edge>> {
        self.inner.edges_of(v)
    }

    fn degree_of(&self, v: &Self::Vertex) -> Result<usize> {
        self.inner.degree_of(v)
    }

    fn in_degree_of(&self, v: &Self::Vertex) -> Result<usize> {
        self.inner.out_degree_of(v)
    }

    fn out_degree_of(&self, v: &Self::Vertex) -> Result<usize> {
        self.inner.in_degree_of(v)
    }

    fn incoming_edges_of(&self, v: &Self::Vertex) -> Result<Vec<Self::Edge>> {
        self.inner.outgoing_edges_of(v)
    }

    fn outgoing_edges_of(&self, v: &Self::Vertex) -> Result<Vec<Self::Edge>> {
        self.inner.incoming_edges_of(v)
    }

    fn edge_source(&self, e: &Self::Edge) -> Self::Vertex {
        self.inner.edge_target(e)
    }

    fn edge_target(&self, e: &Self::Edge) -> Self::Vertex {
        self.inner.edge_source(e)
    }

    fn edge_weight(&self, e: &Self::Edge) -> f64 {
        self.inner.edge_weight(e)
    }
}

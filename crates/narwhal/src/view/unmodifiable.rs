use super::GraphDelegator;
use crate::error::{GraphError, Result};
use crate::graph::{Graph, GraphMut};

const UNMODIFIABLE: &str = "mutation of an unmodifiable graph";

/// Read-only view: every mutating call fails with an unsupported-operation error.
#[derive(Debug, Clone)]
pub struct UnmodifiableGraph<G> {
    inner: GraphDelegator<G>,
}

impl<G: Graph> UnmodifiableGraph<G> {
    pub fn new(graph: G) -> Self {
        Self {
            inner: GraphDelegator::new(graph),
        }
    }

    pub fn into_inner(self) -> G {
        self.inner.into_inner()
    }
}

impl<G: Graph> Graph for UnmodifiableGraph<G> {
    type Vertex = G::Vertex;
    type Edge = G::Edge;

    forward_graph_reads!(inner);
}

impl<G: Graph> GraphMut for UnmodifiableGraph<G> {
    fn add_vertex(&mut self, _v: Self::Vertex) -> Result<bool> {
        Err(GraphError::unsupported(UNMODIFIABLE))
    }

    fn add_edge(
        &mut self,
        _source: &Self::Vertex,
        _target: &Self::Vertex,
    ) -> Result<Option<Self::Edge>> {
        Err(GraphError::unsupported(UNMODIFIABLE))
    }

    fn add_edge_value(&mut self, _e: Self::Edge) -> Result<bool> {
        Err(GraphError::unsupported(UNMODIFIABLE))
    }

    fn remove_vertex(&mut self, _v: &Self::Vertex) -> Result<bool> {
        Err(GraphError::unsupported(UNMODIFIABLE))
    }

    fn remove_edge(&mut self, _e: &Self::Edge) -> Result<bool> {
        Err(GraphError::unsupported(UNMODIFIABLE))
    }

    fn remove_edge_between(
        &mut self,
        _source: &Self::Vertex,
        _target: &Self::Vertex,
    ) -> Result<Option<Self::Edge>> {
        Err(GraphError::unsupported(UNMODIFIABLE))
    }

    fn set_edge_weight(&mut self, _e: &Self::Edge, _weight: f64) -> Result<()> {
        Err(GraphError::unsupported(UNMODIFIABLE))
    }

    fn remove_all_edges(&mut self, _edges: &[Self::Edge]) -> Result<bool> {
        Err(GraphError::unsupported(UNMODIFIABLE))
    }

    fn remove_all_edges_between(
        &mut self,
        _source: &Self::Vertex,
        _target: &Self::Vertex,
    ) -> Result<Vec<Self::Edge>> {
        Err(GraphError::unsupported(UNMODIFIABLE))
    }

    fn remove_all_vertices(&mut self, _vertices: &[Self::Vertex]) -> Result<bool> {
        Err(GraphError::unsupported(UNMODIFIABLE))
    }
}

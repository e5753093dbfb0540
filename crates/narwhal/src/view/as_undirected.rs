use crate::error::{GraphError, Result};
use crate::graph::{Graph, GraphMut};
use crate::listen::Listenable;

/// Reads a directed graph as an undirected one.
///
/// Edges keep their direction in the backing graph; lookups between two vertices match in
/// either direction and the degree of a vertex is its in-degree plus its out-degree, so a
/// self-loop counts twice. Edges cannot be added through the view. Vertex additions and
/// all removals are forwarded.
#[derive(Debug, Clone)]
pub struct AsUndirected<G> {
    inner: G,
}

impl<G: Graph> AsUndirected<G> {
    pub fn new(graph: G) -> Result<Self> {
        if !graph.is_directed() {
            return Err(GraphError::invalid(
                "AsUndirected requires a directed backing graph",
            ));
        }
        tracing::trace!(vertices = graph.vertex_count(), "undirected view created");
        Ok(Self { inner: graph })
    }

    pub fn inner(&self) -> &G {
        &self.inner
    }

    pub fn into_inner(self) -> G {
        self.inner
    }
}

impl<G: Graph> Graph for AsUndirected<G> {
    type Vertex = G::Vertex;
    type Edge = G::Edge;

    fn is_directed(&self) -> bool {
        false
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
        self.inner
            .get_edge(source, target)
            .or_else(|| self.inner.get_edge(target, source))
    }

    fn get_all_edges(&self, source: &Self::Vertex, target: &Self::Vertex) -> Vec<Self::Edge> {
        let mut out = self.inner.get_all_edges(source, target);
        if source != target {
            out.extend(self.inner.get_all_edges(target, source));
        }
        out
    }

    fn edges_of(&self, v: &Self::Vertex) -> Result<Vec<Self::Edge>> {
        self.inner.edges_of(v)
    }

    fn degree_of(&self, v: &Self::Vertex) -> Result<usize> {
        Ok(self.inner.in_degree_of(v)? + self.inner.out_degree_of(v)?)
    }

    fn in_degree_of(&self, _v: &Self::Vertex) -> Result<usize> {
        Err(GraphError::unsupported("in_degree_of on an undirected view"))
    }

    fn out_degree_of(&self, _v: &Self::Vertex) -> Result<usize> {
        Err(GraphError::unsupported("out_degree_of on an undirected view"))
    }

    fn incoming_edges_of(&self, _v: &Self::Vertex) -> Result<Vec<Self::Edge>> {
        Err(GraphError::unsupported("incoming_edges_of on an undirected view"))
    }

    fn outgoing_edges_of(&self, _v: &Self::Vertex) -> Result<Vec<Self::Edge>> {
        Err(GraphError::unsupported("outgoing_edges_of on an undirected view"))
    }

    fn edge_source(&self, e: &Self::Edge) -> Self::Vertex {
        self.inner.edge_source(e)
    }

    fn edge_target(&self, e: &Self::Edge) -> Self::Vertex {
        self.inner.edge_target(e)
    }

    fn edge_weight(&self, e: &Self::Edge) -> f64 {
        self.inner.edge_weight(e)
    }

    fn as_listenable(&mut self) -> Option<&mut dyn Listenable<Self::Vertex, Self::Edge>> {
        self.inner.as_listenable()
    }
}

impl<G: GraphMut> GraphMut for AsUndirected<G> {
    fn add_vertex(&mut self, v: Self::Vertex) -> Result<bool> {
        self.inner.add_vertex(v)
    }

    fn add_edge(
        &mut self,
        _source: &Self::Vertex,
        _target: &Self::Vertex,
    ) -> Result<Option<Self::Edge>> {
        Err(GraphError::unsupported("add_edge on an undirected view"))
    }

    fn add_edge_value(&mut self, _e: Self::Edge) -> Result<bool> {
        Err(GraphError::unsupported("add_edge on an undirected view"))
    }

    fn remove_vertex(&mut self, v: &Self::Vertex) -> Result<bool> {
        self.inner.remove_vertex(v)
    }

    fn remove_edge(&mut self, e: &Self::Edge) -> Result<bool> {
        self.inner.remove_edge(e)
    }

    fn remove_edge_between(
        &mut self,
        source: &Self::Vertex,
        target: &Self::Vertex,
    ) -> Result<Option<Self::Edge>> {
        if let Some(e) = self.inner.remove_edge_between(source, target)? {
            return Ok(Some(e));
        }
        self.inner.remove_edge_between(target, source)
    }

    fn set_edge_weight(&mut self, e: &Self::Edge, weight: f64) -> Result<()> {
        self.inner.set_edge_weight(e, weight)
    }
}

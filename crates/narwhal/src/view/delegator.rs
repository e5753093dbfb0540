use crate::error::Result;
use crate::graph::{Graph, GraphMut};
use crate::listen::Listenable;

/// Forwards every operation to the wrapped graph.
///
/// Wrap a `&G` for a read-only pass-through, a `&mut G` or an owned `G` to forward
/// mutations as well. A delegator over a listenable graph is itself listenable.
#[derive(Debug, Clone)]
pub struct GraphDelegator<G> {
    inner: G,
}

impl<G> GraphDelegator<G> {
    pub fn new(inner: G) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &G {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut G {
        &mut self.inner
    }

    pub fn into_inner(self) -> G {
        self.inner
    }
}

impl<G: Graph> Graph for GraphDelegator<G> {
    type Vertex = G::Vertex;
    type Edge = G::Edge;

    forward_graph_reads!(inner);

    fn as_listenable(&mut self) -> Option<&mut dyn Listenable<Self::Vertex, Self::Edge>> {
        self.inner.as_listenable()
    }
}

impl<G: GraphMut> GraphMut for GraphDelegator<G> {
    fn add_vertex(&mut self, v: Self::Vertex) -> Result<bool> {
        self.inner.add_vertex(v)
    }

    fn add_edge(
        &mut self,
        source: &Self::Vertex,
        target: &Self::Vertex,
    ) -> Result<Option<Self::Edge>> {
        self.inner.add_edge(source, target)
    }

    fn add_edge_value(&mut self, e: Self::Edge) -> Result<bool> {
        self.inner.add_edge_value(e)
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
        self.inner.remove_edge_between(source, target)
    }

    fn set_edge_weight(&mut self, e: &Self::Edge, weight: f64) -> Result<()> {
        self.inner.set_edge_weight(e, weight)
    }
}

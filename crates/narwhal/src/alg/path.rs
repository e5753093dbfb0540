//! Path results.

use crate::edge::{GraphEdge, VertexId};
use crate::graph::Graph;
use crate::util::opposite_vertex;

/// A walk through a graph: its endpoints, its edges in order, the vertices they pass
/// through, and the total edge weight.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphPath<V, E> {
    start: V,
    end: V,
    edges: Vec<E>,
    vertices: Vec<V>,
    weight: f64,
}

impl<V: VertexId, E: GraphEdge<V>> GraphPath<V, E> {
    /// Builds the path leaving `start` along `edges`, reading endpoints and weights
    /// through `g`.
    pub fn from_edges<G>(g: &G, start: V, edges: Vec<E>) -> Self
    where
        G: Graph<Vertex = V, Edge = E> + ?Sized,
    {
        let mut vertices = Vec::with_capacity(edges.len() + 1);
        let mut weight = 0.0;
        let mut at = start.clone();
        vertices.push(at.clone());
        for e in &edges {
            at = opposite_vertex(g, e, &at);
            vertices.push(at.clone());
            weight += g.edge_weight(e);
        }
        Self {
            start,
            end: at,
            edges,
            vertices,
            weight,
        }
    }

    /// The path of length zero at `v`.
    pub fn singleton(v: V) -> Self {
        Self {
            start: v.clone(),
            end: v.clone(),
            edges: Vec::new(),
            vertices: vec![v],
            weight: 0.0,
        }
    }

    pub fn start_vertex(&self) -> &V {
        &self.start
    }

    pub fn end_vertex(&self) -> &V {
        &self.end
    }

    pub fn edge_list(&self) -> &[E] {
        &self.edges
    }

    pub fn vertex_list(&self) -> &[V] {
        &self.vertices
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn into_edge_list(self) -> Vec<E> {
        self.edges
    }
}

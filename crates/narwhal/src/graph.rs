//! Graph traits and the storage core.
//!
//! [`Graph`] is the read surface every algorithm and view is written against;
//! [`GraphMut`] adds structural mutation. [`BaseGraph`] is the storage core; the view
//! types in [`crate::view`] and [`crate::listen::ListenableGraph`] implement the same
//! traits on top of another graph.

mod adjacency;
mod base;
mod options;
mod specifics;

pub use base::BaseGraph;
pub use options::{EdgeListKind, GraphOptions};

use crate::edge::{GraphEdge, VertexId};
use crate::error::{GraphError, Result};
use crate::listen::Listenable;

/// Read access to a graph.
///
/// Vertex and edge handles are returned by value; both are expected to be cheap to clone.
/// Vertex sets and edge sets iterate in insertion order.
pub trait Graph {
    type Vertex: VertexId;
    type Edge: GraphEdge<Self::Vertex>;

    fn is_directed(&self) -> bool;

    fn vertices(&self) -> impl Iterator<Item = Self::Vertex> + '_;

    fn edges(&self) -> impl Iterator<Item = Self::Edge> + '_;

    fn vertex_count(&self) -> usize;

    fn edge_count(&self) -> usize;

    fn contains_vertex(&self, v: &Self::Vertex) -> bool;

    fn contains_edge(&self, e: &Self::Edge) -> bool;

    fn contains_edge_between(&self, source: &Self::Vertex, target: &Self::Vertex) -> bool {
        self.get_edge(source, target).is_some()
    }

    /// Some edge connecting `source` to `target`, if any. `None` when either vertex is
    /// missing.
    fn get_edge(&self, source: &Self::Vertex, target: &Self::Vertex) -> Option<Self::Edge>;

    /// Every edge connecting `source` to `target`; empty when either vertex is missing.
    fn get_all_edges(&self, source: &Self::Vertex, target: &Self::Vertex) -> Vec<Self::Edge>;

    /// Edges touching `v`; a self-loop is listed once.
    fn edges_of(&self, v: &Self::Vertex) -> Result<Vec<Self::Edge>>;

    /// Undirected degree. Self-loops count twice.
    fn degree_of(&self, v: &Self::Vertex) -> Result<usize>;

    fn in_degree_of(&self, v: &Self::Vertex) -> Result<usize>;

    fn out_degree_of(&self, v: &Self::Vertex) -> Result<usize>;

    fn incoming_edges_of(&self, v: &Self::Vertex) -> Result<Vec<Self::Edge>>;

    fn outgoing_edges_of(&self, v: &Self::Vertex) -> Result<Vec<Self::Edge>>;

    fn edge_source(&self, e: &Self::Edge) -> Self::Vertex {
        e.source().clone()
    }

    fn edge_target(&self, e: &Self::Edge) -> Self::Vertex {
        e.target().clone()
    }

    fn edge_weight(&self, e: &Self::Edge) -> f64 {
        e.weight()
    }

    /// The listener registry of this graph, if it has one.
    fn as_listenable(&mut self) -> Option<&mut dyn Listenable<Self::Vertex, Self::Edge>> {
        None
    }
}

/// Structural mutation.
///
/// No-op outcomes (vertex already present, duplicate edge) are reported through the
/// `bool`/`Option` results; errors are reserved for misuse. A rejected call leaves the
/// graph unchanged.
pub trait GraphMut: Graph {
    fn add_vertex(&mut self, v: Self::Vertex) -> Result<bool>;

    fn add_edge(
        &mut self,
        source: &Self::Vertex,
        target: &Self::Vertex,
    ) -> Result<Option<Self::Edge>>;

    /// Adds an edge built elsewhere (view replay, reversed copies).
    fn add_edge_value(&mut self, e: Self::Edge) -> Result<bool>;

    fn remove_vertex(&mut self, v: &Self::Vertex) -> Result<bool>;

    fn remove_edge(&mut self, e: &Self::Edge) -> Result<bool>;

    fn remove_edge_between(
        &mut self,
        source: &Self::Vertex,
        target: &Self::Vertex,
    ) -> Result<Option<Self::Edge>>;

    fn set_edge_weight(&mut self, e: &Self::Edge, weight: f64) -> Result<()> {
        if !self.contains_edge(e) {
            return Err(GraphError::edge_not_found(e));
        }
        e.set_weight(weight)
    }

    fn remove_all_edges(&mut self, edges: &[Self::Edge]) -> Result<bool> {
        let mut modified = false;
        for e in edges {
            modified |= self.remove_edge(e)?;
        }
        Ok(modified)
    }

    fn remove_all_edges_between(
        &mut self,
        source: &Self::Vertex,
        target: &Self::Vertex,
    ) -> Result<Vec<Self::Edge>> {
        let edges = self.get_all_edges(source, target);
        self.remove_all_edges(&edges)?;
        Ok(edges)
    }

    fn remove_all_vertices(&mut self, vertices: &[Self::Vertex]) -> Result<bool> {
        let mut modified = false;
        for v in vertices {
            modified |= self.remove_vertex(v)?;
        }
        Ok(modified)
    }
}

impl<G: Graph + ?Sized> Graph for &G {
    type Vertex = G::Vertex;
    type Edge = G::Edge;

    fn is_directed(&self) -> bool {
        (**self).is_directed()
    }

    fn vertices(&self) -> impl Iterator<Item = Self::Vertex> + '_ {
        (**self).vertices()
    }

    fn edges(&self) -> impl Iterator<Item = Self::Edge> + '_ {
        (**self).edges()
    }

    fn vertex_count(&self) -> usize {
        (**self).vertex_count()
    }

    fn edge_count(&self) -> usize {
        (**self).edge_count()
    }

    fn contains_vertex(&self, v: &Self::Vertex) -> bool {
        (**self).contains_vertex(v)
    }

    fn contains_edge(&self, e: &Self::Edge) -> bool {
        (**self).contains_edge(e)
    }

    fn get_edge(&self, source: &Self::Vertex, target: &Self::Vertex) -> Option<Self::Edge> {
        (**self).get_edge(source, target)
    }

    fn get_all_edges(&self, source: &Self::Vertex, target: &Self::Vertex) -> Vec<Self::Edge> {
        (**self).get_all_edges(source, target)
    }

    fn edges_of(&self, v: &Self::Vertex) -> Result<Vec<Self::Edge>> {
        (**self).edges_of(v)
    }

    fn degree_of(&self, v: &Self::Vertex) -> Result<usize> {
        (**self).degree_of(v)
    }

    fn in_degree_of(&self, v: &Self::Vertex) -> Result<usize> {
        (**self).in_degree_of(v)
    }

    fn out_degree_of(&self, v: &Self::Vertex) -> Result<usize> {
        (**self).out_degree_of(v)
    }

    fn incoming_edges_of(&self, v: &Self::Vertex) -> Result<Vec<Self::Edge>> {
        (**self).incoming_edges_of(v)
    }

    fn outgoing_edges_of(&self, v: &Self::Vertex) -> Result<Vec<Self::Edge>> {
        (**self).outgoing_edges_of(v)
    }

    fn edge_source(&self, e: &Self::Edge) -> Self::Vertex {
        (**self).edge_source(e)
    }

    fn edge_target(&self, e: &Self::Edge) -> Self::Vertex {
        (**self).edge_target(e)
    }

    fn edge_weight(&self, e: &Self::Edge) -> f64 {
        (**self).edge_weight(e)
    }
}

impl<G: Graph + ?Sized> Graph for &mut G {
    type Vertex = G::Vertex;
    type Edge = G::Edge;

    fn is_directed(&self) -> bool {
        (**self).is_directed()
    }

    fn vertices(&self) -> impl Iterator<Item = Self::Vertex> + '_ {
        (**self).vertices()
    }

    fn edges(&self) -> impl Iterator<Item = Self::Edge> + '_ {
        (**self).edges()
    }

    fn vertex_count(&self) -> usize {
        (**self).vertex_count()
    }

    fn edge_count(&self) -> usize {
        (**self).edge_count()
    }

    fn contains_vertex(&self, v: &Self::Vertex) -> bool {
        (**self).contains_vertex(v)
    }

    fn contains_edge(&self, e: &Self::Edge) -> bool {
        (**self).contains_edge(e)
    }

    fn get_edge(&self, source: &Self::Vertex, target: &Self::Vertex) -> Option<Self::Edge> {
        (**self).get_edge(source, target)
    }

    fn get_all_edges(&self, source: &Self::Vertex, target: &Self::Vertex) -> Vec<Self::Edge> {
        (**self).get_all_edges(source, target)
    }

    fn edges_of(&self, v: &Self::Vertex) -> Result<Vec<Self::Edge>> {
        (**self).edges_of(v)
    }

    fn degree_of(&self, v: &Self::Vertex) -> Result<usize> {
        (**self).degree_of(v)
    }

    fn in_degree_of(&self, v: &Self::Vertex) -> Result<usize> {
        (**self).in_degree_of(v)
    }

    fn out_degree_of(&self, v: &Self::Vertex) -> Result<usize> {
        (**self).out_degree_of(v)
    }

    fn incoming_edges_of(&self, v: &Self::Vertex) -> Result<Vec<Self::Edge>> {
        (**self).incoming_edges_of(v)
    }

    fn outgoing_edges_of(&self, v: &Self::Vertex) -> Result<Vec<Self::Edge>> {
        (**self).outgoing_edges_of(v)
    }

    fn edge_source(&self, e: &Self::Edge) -> Self::Vertex {
        (**self).edge_source(e)
    }

    fn edge_target(&self, e: &Self::Edge) -> Self::Vertex {
        (**self).edge_target(e)
    }

    fn edge_weight(&self, e: &Self::Edge) -> f64 {
        (**self).edge_weight(e)
    }

    fn as_listenable(&mut self) -> Option<&mut dyn Listenable<Self::Vertex, Self::Edge>> {
        (**self).as_listenable()
    }
}

impl<G: GraphMut + ?Sized> GraphMut for &mut G {
    fn add_vertex(&mut self, v: Self::Vertex) -> Result<bool> {
        (**self).add_vertex(v)
    }

    fn add_edge(
        &mut self,
        source: &Self::Vertex,
        target: &Self::Vertex,
    ) -> Result<Option<Self::Edge>> {
        (**self).add_edge(source, target)
    }

    fn add_edge_value(&mut self, e: Self::Edge) -> Result<bool> {
        (**self).add_edge_value(e)
    }

    fn remove_vertex(&mut self, v: &Self::Vertex) -> Result<bool> {
        (**self).remove_vertex(v)
    }

    fn remove_edge(&mut self, e: &Self::Edge) -> Result<bool> {
        (**self).remove_edge(e)
    }

    fn remove_edge_between(
        &mut self,
        source: &Self::Vertex,
        target: &Self::Vertex,
    ) -> Result<Option<Self::Edge>> {
        (**self).remove_edge_between(source, target)
    }

    fn set_edge_weight(&mut self, e: &Self::Edge, weight: f64) -> Result<()> {
        (**self).set_edge_weight(e, weight)
    }
}

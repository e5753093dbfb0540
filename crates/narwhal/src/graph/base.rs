//! The storage core.

use super::options::GraphOptions;
use super::specifics::Specifics;
use super::{Graph, GraphMut};
use crate::edge::{DefaultEdge, DefaultEdgeFactory, EdgeFactory, EdgeKind, GraphEdge, VertexId};
use crate::error::{GraphError, Result};
use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;
use std::fmt;

/// Owns the vertex set, the edge set and the per-vertex adjacency containers.
///
/// The policies in [`GraphOptions`] (topology, loops, parallel edges) are fixed at
/// construction. Vertices and edges iterate in insertion order.
pub struct BaseGraph<V, E = DefaultEdge<V>> {
    options: GraphOptions,
    edge_factory: Option<Box<dyn EdgeFactory<V, E>>>,
    edges: IndexSet<E, FxBuildHasher>,
    specifics: Specifics<V, E>,
}

impl<V: VertexId> BaseGraph<V, DefaultEdge<V>> {
    /// A graph producing [`DefaultEdge`]s whose kind follows `options`.
    pub fn new(options: GraphOptions) -> Self {
        let kind = EdgeKind::new(options.directed, options.weighted);
        Self::with_factory(options, DefaultEdgeFactory::new(kind))
    }
}

impl<V: VertexId, E: GraphEdge<V>> BaseGraph<V, E> {
    pub fn with_factory<F>(options: GraphOptions, edge_factory: F) -> Self
    where
        F: EdgeFactory<V, E> + 'static,
    {
        Self {
            options,
            edge_factory: Some(Box::new(edge_factory)),
            edges: IndexSet::default(),
            specifics: Specifics::new(options.directed, options.edge_list),
        }
    }

    /// Storage that only accepts edges built elsewhere. Used by subgraphs, whose edges
    /// always come from their base.
    pub(crate) fn without_factory(options: GraphOptions) -> Self {
        Self {
            options,
            edge_factory: None,
            edges: IndexSet::default(),
            specifics: Specifics::new(options.directed, options.edge_list),
        }
    }

    pub fn options(&self) -> GraphOptions {
        self.options
    }

    pub fn allows_loops(&self) -> bool {
        self.options.allow_loops
    }

    pub fn allows_multiple_edges(&self) -> bool {
        self.options.allow_multiple_edges
    }

    pub fn is_weighted(&self) -> bool {
        self.options.weighted
    }

    pub fn edge_factory(&self) -> Option<&dyn EdgeFactory<V, E>> {
        self.edge_factory.as_deref()
    }

    fn assert_vertex_exist(&self, v: &V) -> Result<()> {
        if self.specifics.contains_vertex(v) {
            Ok(())
        } else {
            Err(GraphError::vertex_not_found(v))
        }
    }

    fn check_edge_policy(&self, source: &V, target: &V) -> Result<bool> {
        self.assert_vertex_exist(source)?;
        self.assert_vertex_exist(target)?;

        if !self.options.allow_multiple_edges && self.specifics.get_edge(source, target).is_some()
        {
            return Ok(false);
        }
        if !self.options.allow_loops && source == target {
            return Err(GraphError::LoopsNotAllowed {
                vertex: format!("{source:?}"),
            });
        }
        Ok(true)
    }

    fn insert_edge(&mut self, e: E) {
        self.edges.insert(e.clone());
        self.specifics.add_edge_to_touching_vertices(&e);
        tracing::trace!(edge = ?e, "edge added");
    }
}

impl<V: VertexId, E: GraphEdge<V>> Graph for BaseGraph<V, E> {
    type Vertex = V;
    type Edge = E;

    fn is_directed(&self) -> bool {
        self.specifics.is_directed()
    }

    fn vertices(&self) -> impl Iterator<Item = V> + '_ {
        self.specifics.vertices().cloned()
    }

    fn edges(&self) -> impl Iterator<Item = E> + '_ {
        self.edges.iter().cloned()
    }

    fn vertex_count(&self) -> usize {
        self.specifics.vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn contains_vertex(&self, v: &V) -> bool {
        self.specifics.contains_vertex(v)
    }

    fn contains_edge(&self, e: &E) -> bool {
        self.edges.contains(e)
    }

    fn get_edge(&self, source: &V, target: &V) -> Option<E> {
        if !self.contains_vertex(source) || !self.contains_vertex(target) {
            return None;
        }
        self.specifics.get_edge(source, target)
    }

    fn get_all_edges(&self, source: &V, target: &V) -> Vec<E> {
        if !self.contains_vertex(source) || !self.contains_vertex(target) {
            return Vec::new();
        }
        self.specifics.get_all_edges(source, target)
    }

    fn edges_of(&self, v: &V) -> Result<Vec<E>> {
        self.assert_vertex_exist(v)?;
        Ok(self.specifics.edges_of(v))
    }

    fn degree_of(&self, v: &V) -> Result<usize> {
        self.assert_vertex_exist(v)?;
        self.specifics.degree_of(v)
    }

    fn in_degree_of(&self, v: &V) -> Result<usize> {
        self.assert_vertex_exist(v)?;
        self.specifics.in_degree_of(v)
    }

    fn out_degree_of(&self, v: &V) -> Result<usize> {
        self.assert_vertex_exist(v)?;
        self.specifics.out_degree_of(v)
    }

    fn incoming_edges_of(&self, v: &V) -> Result<Vec<E>> {
        self.assert_vertex_exist(v)?;
        self.specifics.incoming_edges_of(v)
    }

    fn outgoing_edges_of(&self, v: &V) -> Result<Vec<E>> {
        self.assert_vertex_exist(v)?;
        self.specifics.outgoing_edges_of(v)
    }
}

impl<V: VertexId, E: GraphEdge<V>> GraphMut for BaseGraph<V, E> {
    fn add_vertex(&mut self, v: V) -> Result<bool> {
        if !self.specifics.add_vertex(v.clone()) {
            return Ok(false);
        }
        tracing::trace!(vertex = ?v, "vertex added");
        Ok(true)
    }

    fn add_edge(&mut self, source: &V, target: &V) -> Result<Option<E>> {
        if !self.check_edge_policy(source, target)? {
            return Ok(None);
        }
        let Some(factory) = self.edge_factory.as_deref() else {
            return Err(GraphError::unsupported("add_edge on a graph without an edge factory"));
        };
        let e = factory.create_edge(source.clone(), target.clone());
        if self.edges.contains(&e) {
            return Ok(None);
        }
        self.insert_edge(e.clone());
        Ok(Some(e))
    }

    fn add_edge_value(&mut self, e: E) -> Result<bool> {
        if self.edges.contains(&e) {
            return Ok(false);
        }
        if let Some(factory) = self.edge_factory.as_deref() {
            if !factory.accepts(&e) {
                return Err(GraphError::IncompatibleEdge {
                    edge: format!("{e:?}"),
                });
            }
        }
        if !self.check_edge_policy(e.source(), e.target())? {
            return Ok(false);
        }
        self.insert_edge(e);
        Ok(true)
    }

    fn remove_vertex(&mut self, v: &V) -> Result<bool> {
        if !self.contains_vertex(v) {
            return Ok(false);
        }
        // Snapshot first: removing edges mutates the containers being read.
        let touching = self.specifics.edges_of(v);
        for e in &touching {
            self.remove_edge(e)?;
        }
        self.specifics.remove_vertex(v);
        tracing::trace!(vertex = ?v, removed_edges = touching.len(), "vertex removed");
        Ok(true)
    }

    fn remove_edge(&mut self, e: &E) -> Result<bool> {
        if !self.edges.shift_remove(e) {
            return Ok(false);
        }
        self.specifics.remove_edge_from_touching_vertices(e);
        tracing::trace!(edge = ?e, "edge removed");
        Ok(true)
    }

    fn remove_edge_between(&mut self, source: &V, target: &V) -> Result<Option<E>> {
        let Some(e) = self.get_edge(source, target) else {
            return Ok(None);
        };
        self.remove_edge(&e)?;
        Ok(Some(e))
    }
}

impl<V: VertexId, E: GraphEdge<V>> fmt::Debug for BaseGraph<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseGraph")
            .field("options", &self.options)
            .field("vertices", &self.specifics.vertices().collect::<Vec<_>>())
            .field("edges", &self.edges)
            .finish()
    }
}

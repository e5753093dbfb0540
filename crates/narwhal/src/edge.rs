//! Edge values and edge factories.
//!
//! An edge knows its two endpoints and a weight. Endpoints are fixed at construction;
//! adjacency containers are keyed on them, so they never change while the edge is in a
//! graph.

use crate::error::{GraphError, Result};
use std::cell::Cell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// Weight reported by edges that carry none.
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

/// Marker for types usable as vertices.
pub trait VertexId: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> VertexId for T {}

pub trait GraphEdge<V>: Clone + Eq + Hash + fmt::Debug {
    fn source(&self) -> &V;

    fn target(&self) -> &V;

    fn weight(&self) -> f64 {
        DEFAULT_EDGE_WEIGHT
    }

    /// Unweighted edge kinds reject weight updates.
    fn set_weight(&self, weight: f64) -> Result<()> {
        let _ = weight;
        Err(GraphError::unsupported("set_weight on an unweighted edge"))
    }
}

/// Returns the endpoint of `edge` that is not `vertex`, or `None` when `vertex` does not
/// touch the edge. For a self-loop the vertex itself is returned.
pub fn opposite<'e, V, E>(edge: &'e E, vertex: &V) -> Option<&'e V>
where
    V: PartialEq,
    E: GraphEdge<V>,
{
    if edge.source() == vertex {
        Some(edge.target())
    } else if edge.target() == vertex {
        Some(edge.source())
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    Directed,
    Undirected,
    DirectedWeighted,
    UndirectedWeighted,
}

impl EdgeKind {
    pub fn new(directed: bool, weighted: bool) -> Self {
        match (directed, weighted) {
            (true, false) => EdgeKind::Directed,
            (false, false) => EdgeKind::Undirected,
            (true, true) => EdgeKind::DirectedWeighted,
            (false, true) => EdgeKind::UndirectedWeighted,
        }
    }

    pub fn is_directed(self) -> bool {
        matches!(self, EdgeKind::Directed | EdgeKind::DirectedWeighted)
    }

    pub fn is_weighted(self) -> bool {
        matches!(self, EdgeKind::DirectedWeighted | EdgeKind::UndirectedWeighted)
    }
}

struct EdgeCell<V> {
    source: V,
    target: V,
    kind: EdgeKind,
    weight: Cell<f64>,
}

/// Shared edge handle.
///
/// Clones point at the same edge: equality and hashing are by handle identity, which lets
/// multigraphs hold several edges between the same pair of vertices and lets every view of
/// a graph observe the same weight.
pub struct DefaultEdge<V> {
    cell: Rc<EdgeCell<V>>,
}

impl<V> DefaultEdge<V> {
    pub fn new(source: V, target: V, kind: EdgeKind) -> Self {
        Self {
            cell: Rc::new(EdgeCell {
                source,
                target,
                kind,
                weight: Cell::new(DEFAULT_EDGE_WEIGHT),
            }),
        }
    }

    /// Unweighted kinds reject the weight, as [`GraphEdge::set_weight`] does.
    pub fn with_weight(source: V, target: V, kind: EdgeKind, weight: f64) -> Result<Self> {
        if !kind.is_weighted() {
            return Err(GraphError::unsupported("weight on an unweighted edge"));
        }
        let edge = Self::new(source, target, kind);
        edge.cell.weight.set(weight);
        Ok(edge)
    }

    pub fn kind(&self) -> EdgeKind {
        self.cell.kind
    }
}

impl<V> Clone for DefaultEdge<V> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<V> PartialEq for DefaultEdge<V> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.cell, &other.cell)
    }
}

impl<V> Eq for DefaultEdge<V> {}

impl<V> Hash for DefaultEdge<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(Rc::as_ptr(&self.cell), state);
    }
}

impl<V: fmt::Debug> fmt::Debug for DefaultEdge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = if self.cell.kind.is_directed() { "->" } else { "--" };
        write!(f, "({:?} {arrow} {:?}", self.cell.source, self.cell.target)?;
        if self.cell.kind.is_weighted() {
            write!(f, " w={}", self.cell.weight.get())?;
        }
        write!(f, ")")
    }
}

impl<V: VertexId> GraphEdge<V> for DefaultEdge<V> {
    fn source(&self) -> &V {
        &self.cell.source
    }

    fn target(&self) -> &V {
        &self.cell.target
    }

    fn weight(&self) -> f64 {
        self.cell.weight.get()
    }

    fn set_weight(&self, weight: f64) -> Result<()> {
        if !self.cell.kind.is_weighted() {
            return Err(GraphError::unsupported("set_weight on an unweighted edge"));
        }
        self.cell.weight.set(weight);
        Ok(())
    }
}

/// Builds edges for a graph.
pub trait EdgeFactory<V, E> {
    fn create_edge(&self, source: V, target: V) -> E;

    /// Whether an externally built edge fits this factory's edge kind.
    fn accepts(&self, edge: &E) -> bool {
        let _ = edge;
        true
    }
}

impl<V, E, F> EdgeFactory<V, E> for F
where
    F: Fn(V, V) -> E,
{
    fn create_edge(&self, source: V, target: V) -> E {
        self(source, target)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultEdgeFactory {
    kind: EdgeKind,
}

impl DefaultEdgeFactory {
    pub fn new(kind: EdgeKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> EdgeKind {
        self.kind
    }
}

impl<V> EdgeFactory<V, DefaultEdge<V>> for DefaultEdgeFactory {
    fn create_edge(&self, source: V, target: V) -> DefaultEdge<V> {
        DefaultEdge::new(source, target, self.kind)
    }

    fn accepts(&self, edge: &DefaultEdge<V>) -> bool {
        edge.kind().is_directed() == self.kind.is_directed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_edges_compare_by_identity() {
        let a = DefaultEdge::new("a", "b", EdgeKind::Directed);
        let b = DefaultEdge::new("a", "b", EdgeKind::Directed);
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn unweighted_edges_reject_weight_updates() {
        let e = DefaultEdge::new(1, 2, EdgeKind::Undirected);
        let err = e.set_weight(3.0).unwrap_err();
        assert!(err.is_unsupported());
        assert_eq!(e.weight(), DEFAULT_EDGE_WEIGHT);

        let w = DefaultEdge::new(1, 2, EdgeKind::UndirectedWeighted);
        w.set_weight(3.0).unwrap();
        assert_eq!(w.clone().weight(), 3.0);
    }

    #[test]
    fn factory_accepts_matching_direction_only() {
        let f = DefaultEdgeFactory::new(EdgeKind::DirectedWeighted);
        assert!(f.accepts(&DefaultEdge::new(1, 2, EdgeKind::Directed)));
        assert!(!f.accepts(&DefaultEdge::new(1, 2, EdgeKind::Undirected)));
    }

    #[test]
    fn opposite_handles_loops_and_foreign_vertices() {
        let e = DefaultEdge::new(1, 2, EdgeKind::Undirected);
        assert_eq!(opposite(&e, &1), Some(&2));
        assert_eq!(opposite(&e, &2), Some(&1));
        assert_eq!(opposite(&e, &3), None);
        let l = DefaultEdge::new(4, 4, EdgeKind::Undirected);
        assert_eq!(opposite(&l, &4), Some(&4));
    }
}

//! Change events and listener traits.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies the graph that fired an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GraphId(u64);

impl GraphId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        GraphId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    Added,
    Removed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphVertexChangeEvent<V> {
    pub source: GraphId,
    pub kind: ChangeKind,
    pub vertex: V,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphEdgeChangeEvent<E> {
    pub source: GraphId,
    pub kind: ChangeKind,
    pub edge: E,
}

/// Observes vertex additions and removals.
pub trait VertexSetListener<V> {
    fn vertex_added(&mut self, event: &GraphVertexChangeEvent<V>);

    fn vertex_removed(&mut self, event: &GraphVertexChangeEvent<V>);
}

/// Observes every structural change of a graph.
///
/// Callbacks run synchronously inside the mutating call. They must not mutate the graph
/// that fired them.
pub trait GraphListener<V, E>: VertexSetListener<V> {
    fn edge_added(&mut self, event: &GraphEdgeChangeEvent<E>);

    fn edge_removed(&mut self, event: &GraphEdgeChangeEvent<E>);
}

pub type SharedGraphListener<V, E> = Rc<RefCell<dyn GraphListener<V, E>>>;

pub type SharedVertexSetListener<V> = Rc<RefCell<dyn VertexSetListener<V>>>;

/// Returned by listener registration; pass it back to cancel the registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerHandle(pub(crate) u64);

/// Registration surface of a listenable graph.
pub trait Listenable<V, E> {
    fn add_graph_listener(&mut self, listener: SharedGraphListener<V, E>) -> ListenerHandle;

    fn remove_graph_listener(&mut self, handle: ListenerHandle) -> bool;

    fn add_vertex_set_listener(&mut self, listener: SharedVertexSetListener<V>) -> ListenerHandle;

    fn remove_vertex_set_listener(&mut self, handle: ListenerHandle) -> bool;
}

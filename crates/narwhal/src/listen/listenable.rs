use super::event::{
    ChangeKind, GraphEdgeChangeEvent, GraphId, GraphVertexChangeEvent, Listenable,
    ListenerHandle, SharedGraphListener, SharedVertexSetListener,
};
use crate::graph::{Graph, GraphMut};
use crate::error::Result;
use std::rc::Rc;

/// A graph that notifies registered listeners of every structural change.
///
/// Listeners run in registration order, synchronously, before the mutating call returns.
/// Removing a vertex reports each incident edge removal first, then the vertex removal.
///
/// With [`set_reuse_events`](Self::set_reuse_events) one event value per kind is kept and
/// overwritten for each dispatch instead of building a fresh one. Listeners only ever see
/// events by reference, so holding on to one means cloning it.
pub struct ListenableGraph<G: Graph> {
    graph: G,
    id: GraphId,
    next_handle: u64,
    graph_listeners: Vec<(ListenerHandle, SharedGraphListener<G::Vertex, G::Edge>)>,
    vertex_set_listeners: Vec<(ListenerHandle, SharedVertexSetListener<G::Vertex>)>,
    reuse_events: bool,
    vertex_event: Option<GraphVertexChangeEvent<G::Vertex>>,
    edge_event: Option<GraphEdgeChangeEvent<G::Edge>>,
}

impl<G: Graph> ListenableGraph<G> {
    pub fn new(graph: G) -> Self {
        Self {
            graph,
            id: GraphId::next(),
            next_handle: 0,
            graph_listeners: Vec::new(),
            vertex_set_listeners: Vec::new(),
            reuse_events: false,
            vertex_event: None,
            edge_event: None,
        }
    }

    pub fn id(&self) -> GraphId {
        self.id
    }

    /// Read-only access to the wrapped graph. Mutation has to go through the listenable
    /// graph so that listeners stay in sync.
    pub fn inner(&self) -> &G {
        &self.graph
    }

    pub fn into_inner(self) -> G {
        self.graph
    }

    pub fn set_reuse_events(&mut self, reuse: bool) {
        self.reuse_events = reuse;
        if !reuse {
            self.vertex_event = None;
            self.edge_event = None;
        }
    }

    pub fn is_reuse_events(&self) -> bool {
        self.reuse_events
    }

    pub fn graph_listener_count(&self) -> usize {
        self.graph_listeners.len()
    }

    fn next_handle(&mut self) -> ListenerHandle {
        self.next_handle += 1;
        ListenerHandle(self.next_handle)
    }

    fn fire_vertex(&mut self, kind: ChangeKind, vertex: G::Vertex) {
        let local;
        let event = if self.reuse_events {
            let slot = self.vertex_event.get_or_insert_with(|| GraphVertexChangeEvent {
                source: self.id,
                kind,
                vertex: vertex.clone(),
            });
            slot.kind = kind;
            slot.vertex = vertex;
            &*slot
        } else {
            local = GraphVertexChangeEvent {
                source: self.id,
                kind,
                vertex,
            };
            &local
        };

        for (_, l) in &self.vertex_set_listeners {
            let mut l = l.borrow_mut();
            match kind {
                ChangeKind::Added => l.vertex_added(event),
                ChangeKind::Removed => l.vertex_removed(event),
            }
        }
        for (_, l) in &self.graph_listeners {
            let mut l = l.borrow_mut();
            match kind {
                ChangeKind::Added => l.vertex_added(event),
                ChangeKind::Removed => l.vertex_removed(event),
            }
        }
    }

    fn fire_edge(&mut self, kind: ChangeKind, edge: G::Edge) {
        let local;
        let event = if self.reuse_events {
            let slot = self.edge_event.get_or_insert_with(|| GraphEdgeChangeEvent {
                source: self.id,
                kind,
                edge: edge.clone(),
            });
            slot.kind = kind;
            slot.edge = edge;
            &*slot
        } else {
            local = GraphEdgeChangeEvent {
                source: self.id,
                kind,
                edge,
            };
            &local
        };

        for (_, l) in &self.graph_listeners {
            let mut l = l.borrow_mut();
            match kind {
                ChangeKind::Added => l.edge_added(event),
                ChangeKind::Removed => l.edge_removed(event),
            }
        }
    }
}

impl<G: Graph> Listenable<G::Vertex, G::Edge> for ListenableGraph<G> {
    fn add_graph_listener(
        &mut self,
        listener: SharedGraphListener<G::Vertex, G::Edge>,
    ) -> ListenerHandle {
        if let Some((handle, _)) = self
            .graph_listeners
            .iter()
            .find(|(_, l)| Rc::ptr_eq(l, &listener))
        {
            return *handle;
        }
        let handle = self.next_handle();
        self.graph_listeners.push((handle, listener));
        tracing::debug!(graph = ?self.id, ?handle, "graph listener registered");
        handle
    }

    fn remove_graph_listener(&mut self, handle: ListenerHandle) -> bool {
        let before = self.graph_listeners.len();
        self.graph_listeners.retain(|(h, _)| *h != handle);
        before != self.graph_listeners.len()
    }

    fn add_vertex_set_listener(
        &mut self,
        listener: SharedVertexSetListener<G::Vertex>,
    ) -> ListenerHandle {
        if let Some((handle, _)) = self
            .vertex_set_listeners
            .iter()
            .find(|(_, l)| Rc::ptr_eq(l, &listener))
        {
            return *handle;
        }
        let handle = self.next_handle();
        self.vertex_set_listeners.push((handle, listener));
        tracing::debug!(graph = ?self.id, ?handle, "vertex set listener registered");
        handle
    }

    fn remove_vertex_set_listener(&mut self, handle: ListenerHandle) -> bool {
        let before = self.vertex_set_listeners.len();
        self.vertex_set_listeners.retain(|(h, _)| *h != handle);
        before != self.vertex_set_listeners.len()
    }
}

impl<G: Graph> Graph for ListenableGraph<G> {
    type Vertex = G::Vertex;
    type Edge = G::Edge;

    fn is_directed(&self) -> bool {
        self.graph.is_directed()
    }

    fn vertices(&self) -> impl Iterator<Item = Self::Vertex> + '_ {
        self.graph.vertices()
    }

    fn edges(&self) -> impl Iterator<Item = Self::Edge> + '_ {
        self.graph.edges()
    }

    fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn contains_vertex(&self, v: &Self::Vertex) -> bool {
        self.graph.contains_vertex(v)
    }

    fn contains_edge(&self, e: &Self::Edge) -> bool {
        self.graph.contains_edge(e)
    }

    fn get_edge(&self, source: &Self::Vertex, target: &Self::Vertex) -> Option<Self::Edge> {
        self.graph.get_edge(source, target)
    }

    fn get_all_edges(&self, source: &Self::Vertex, target: &Self::Vertex) -> Vec<Self::Edge> {
        self.graph.get_all_edges(source, target)
    }

    fn edges_of(&self, v: &Self::Vertex) -> Result<Vec<Self::Edge>> {
        self.graph.edges_of(v)
    }

    fn degree_of(&self, v: &Self::Vertex) -> Result<usize> {
        self.graph.degree_of(v)
    }

    fn in_degree_of(&self, v: &Self::Vertex) -> Result<usize> {
        self.graph.in_degree_of(v)
    }

    fn out_degree_of(&self, v: &Self::Vertex) -> Result<usize> {
        self.graph.out_degree_of(v)
    }

    fn incoming_edges_of(&self, v: &Self::Vertex) -> Result<Vec<Self::Edge>> {
        self.graph.incoming_edges_of(v)
    }

    fn outgoing_edges_of(&self, v: &Self::Vertex) -> Result<Vec<Self::Edge>> {
        self.graph.outgoing_edges_of(v)
    }

    fn edge_source(&self, e: &Self::Edge) -> Self::Vertex {
        self.graph.edge_source(e)
    }

    fn edge_target(&self, e: &Self::Edge) -> Self::Vertex {
        self.graph.edge_target(e)
    }

    fn edge_weight(&self, e: &Self::Edge) -> f64 {
        self.graph.edge_weight(e)
    }

    fn as_listenable(&mut self) -> Option<&mut dyn Listenable<Self::Vertex, Self::Edge>> {
        Some(self)
    }
}

impl<G: GraphMut> GraphMut for ListenableGraph<G> {
    fn add_vertex(&mut self, v: Self::Vertex) -> Result<bool> {
        let added = self.graph.add_vertex(v.clone())?;
        if added {
            self.fire_vertex(ChangeKind::Added, v);
        }
        Ok(added)
    }

    fn add_edge(
        &mut self,
        source: &Self::Vertex,
        target: &Self::Vertex,
    ) -> Result<Option<Self::Edge>> {
        let e = self.graph.add_edge(source, target)?;
        if let Some(e) = &e {
            self.fire_edge(ChangeKind::Added, e.clone());
        }
        Ok(e)
    }

    fn add_edge_value(&mut self, e: Self::Edge) -> Result<bool> {
        let added = self.graph.add_edge_value(e.clone())?;
        if added {
            self.fire_edge(ChangeKind::Added, e);
        }
        Ok(added)
    }

    fn remove_vertex(&mut self, v: &Self::Vertex) -> Result<bool> {
        if !self.graph.contains_vertex(v) {
            return Ok(false);
        }
        let touching = self.graph.edges_of(v)?;
        self.remove_all_edges(&touching)?;
        self.graph.remove_vertex(v)?;
        self.fire_vertex(ChangeKind::Removed, v.clone());
        Ok(true)
    }

    fn remove_edge(&mut self, e: &Self::Edge) -> Result<bool> {
        let removed = self.graph.remove_edge(e)?;
        if removed {
            self.fire_edge(ChangeKind::Removed, e.clone());
        }
        Ok(removed)
    }

    fn remove_edge_between(
        &mut self,
        source: &Self::Vertex,
        target: &Self::Vertex,
    ) -> Result<Option<Self::Edge>> {
        let e = self.graph.remove_edge_between(source, target)?;
        if let Some(e) = &e {
            self.fire_edge(ChangeKind::Removed, e.clone());
        }
        Ok(e)
    }

    fn set_edge_weight(&mut self, e: &Self::Edge, weight: f64) -> Result<()> {
        self.graph.set_edge_weight(e, weight)
    }
}

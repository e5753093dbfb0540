use crate::edge::{GraphEdge, VertexId};
use crate::error::{GraphError, Result};
use crate::graph::{BaseGraph, EdgeListKind, Graph, GraphMut, GraphOptions};
use crate::listen::{
    GraphEdgeChangeEvent, GraphListener, GraphVertexChangeEvent, ListenerHandle,
    VertexSetListener,
};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Storage<G> = BaseGraph<<G as Graph>::Vertex, <G as Graph>::Edge>;

/// A graph whose vertices and edges are subsets of a shared base graph.
///
/// The subgraph keeps its own copy of the selected topology and shares the edge values
/// with the base. It only holds a weak reference to the base: operations that need the
/// base (adding vertices or edges) fail with [`GraphError::BaseGraphDropped`] once the base
/// is gone, everything else keeps working on the materialized subsets.
///
/// When the base is listenable the subgraph follows its removals: a removed base edge or
/// vertex disappears from the subgraph as well. Additions to the base are not mirrored.
/// Removing from the subgraph never touches the base.
pub struct Subgraph<G: Graph> {
    base: Weak<RefCell<G>>,
    storage: Rc<RefCell<Storage<G>>>,
    registration: Option<ListenerHandle>,
}

impl<G> Subgraph<G>
where
    G: Graph,
    G::Vertex: 'static,
    G::Edge: 'static,
{
    /// Subgraph over the vertices and edges accepted by the filters; `None` accepts
    /// everything. An edge is only included when both of its endpoints are.
    pub fn with_filters(
        base: &Rc<RefCell<G>>,
        vertex_filter: Option<&dyn Fn(&G::Vertex) -> bool>,
        edge_filter: Option<&dyn Fn(&G::Edge) -> bool>,
    ) -> Result<Self> {
        let storage = {
            let b = base.borrow();
            let options = GraphOptions {
                directed: b.is_directed(),
                allow_loops: true,
                allow_multiple_edges: true,
                weighted: false,
                edge_list: EdgeListKind::Vec,
            };
            let mut storage: Storage<G> = BaseGraph::without_factory(options);
            for v in b.vertices() {
                if vertex_filter.is_none_or(|f| f(&v)) {
                    storage.add_vertex(v)?;
                }
            }
            for e in b.edges() {
                let source = b.edge_source(&e);
                let target = b.edge_target(&e);
                if storage.contains_vertex(&source)
                    && storage.contains_vertex(&target)
                    && edge_filter.is_none_or(|f| f(&e))
                {
                    storage.add_edge_value(e)?;
                }
            }
            storage
        };
        tracing::debug!(
            vertices = storage.vertex_count(),
            edges = storage.edge_count(),
            "subgraph created"
        );

        let storage = Rc::new(RefCell::new(storage));
        let registration = base.borrow_mut().as_listenable().map(|l| {
            let sync = SubgraphSync::<G::Vertex, G::Edge> {
                storage: Rc::downgrade(&storage),
            };
            l.add_graph_listener(Rc::new(RefCell::new(sync)))
        });

        Ok(Self {
            base: Rc::downgrade(base),
            storage,
            registration,
        })
    }

    /// Subgraph containing every vertex and edge of `base`.
    pub fn new(base: &Rc<RefCell<G>>) -> Result<Self> {
        Self::with_filters(base, None, None)
    }

    /// Subgraph induced by `vertices`: those of them present in the base plus every base
    /// edge between them.
    pub fn induced(base: &Rc<RefCell<G>>, vertices: &[G::Vertex]) -> Result<Self> {
        let keep = |v: &G::Vertex| vertices.contains(v);
        Self::with_filters(base, Some(&keep), None)
    }
}

impl<G: Graph> Subgraph<G> {
    pub fn base(&self) -> Result<Rc<RefCell<G>>> {
        self.base.upgrade().ok_or(GraphError::BaseGraphDropped)
    }

    /// Whether the subgraph follows removals in its base.
    pub fn is_listening(&self) -> bool {
        self.registration.is_some()
    }
}

impl<G: Graph> Graph for Subgraph<G> {
    type Vertex = G::Vertex;
    type Edge = G::Edge;

    fn is_directed(&self) -> bool {
        self.storage.borrow().is_directed()
    }

    fn vertices(&self) -> impl Iterator<Item = Self::Vertex> + '_ {
        self.storage.borrow().vertices().collect::<Vec<_>>().into_iter()
    }

    fn edges(&self) -> impl Iterator<Item = Self::Edge> + '_ {
        self.storage.borrow().edges().collect::<Vec<_>>().into_iter()
    }

    fn vertex_count(&self) -> usize {
        self.storage.borrow().vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.storage.borrow().edge_count()
    }

    fn contains_vertex(&self, v: &Self::Vertex) -> bool {
        self.storage.borrow().contains_vertex(v)
    }

    fn contains_edge(&self, e: &Self::Edge) -> bool {
        self.storage.borrow().contains_edge(e)
    }

    fn get_edge(&self, source: &Self::Vertex, target: &Self::Vertex) -> Option<Self::Edge> {
        self.storage.borrow().get_edge(source, target)
    }

    fn get_all_edges(&self, source: &Self::Vertex, target: &Self::Vertex) -> Vec<Self::Edge> {
        self.storage.borrow().get_all_edges(source, target)
    }

    fn edges_of(&self, v: &Self::Vertex) -> Result<Vec<Self::Edge>> {
        self.storage.borrow().edges_of(v)
    }

    fn degree_of(&self, v: &Self::Vertex) -> Result<usize> {
        self.storage.borrow().degree_of(v)
    }

    fn in_degree_of(&self, v: &Self::Vertex) -> Result<usize> {
        self.storage.borrow().in_degree_of(v)
    }

    fn out_degree_of(&self, v: &Self::Vertex) -> Result<usize> {
        self.storage.borrow().out_degree_of(v)
    }

    fn incoming_edges_of(&self, v: &Self::Vertex) -> Result<Vec<Self::Edge>> {
        self.storage.borrow().incoming_edges_of(v)
    }

    fn outgoing_edges_of(&self, v: &Self::Vertex) -> Result<Vec<Self::Edge>> {
        self.storage.borrow().outgoing_edges_of(v)
    }
}

impl<G: Graph> GraphMut for Subgraph<G> {
    /// Adds a vertex of the base graph.
    fn add_vertex(&mut self, v: Self::Vertex) -> Result<bool> {
        let base = self.base()?;
        if !base.borrow().contains_vertex(&v) {
            return Err(GraphError::vertex_not_found(&v));
        }
        self.storage.borrow_mut().add_vertex(v)
    }

    /// Adds the first base edge between `source` and `target` that the subgraph does not
    /// hold yet; `None` when it already holds all of them.
    fn add_edge(
        &mut self,
        source: &Self::Vertex,
        target: &Self::Vertex,
    ) -> Result<Option<Self::Edge>> {
        let base = self.base()?;
        let mut storage = self.storage.borrow_mut();
        for v in [source, target] {
            if !storage.contains_vertex(v) {
                return Err(GraphError::vertex_not_found(v));
            }
        }
        let candidates = base.borrow().get_all_edges(source, target);
        if candidates.is_empty() {
            return Err(GraphError::invalid(format!(
                "no edge between {source:?} and {target:?} in the base graph"
            )));
        }
        for e in candidates {
            if !storage.contains_edge(&e) {
                storage.add_edge_value(e.clone())?;
                return Ok(Some(e));
            }
        }
        Ok(None)
    }

    /// Adds an edge of the base graph whose endpoints are already in the subgraph.
    fn add_edge_value(&mut self, e: Self::Edge) -> Result<bool> {
        let base = self.base()?;
        if !base.borrow().contains_edge(&e) {
            return Err(GraphError::edge_not_found(&e));
        }
        self.storage.borrow_mut().add_edge_value(e)
    }

    fn remove_vertex(&mut self, v: &Self::Vertex) -> Result<bool> {
        self.storage.borrow_mut().remove_vertex(v)
    }

    fn remove_edge(&mut self, e: &Self::Edge) -> Result<bool> {
        self.storage.borrow_mut().remove_edge(e)
    }

    fn remove_edge_between(
        &mut self,
        source: &Self::Vertex,
        target: &Self::Vertex,
    ) -> Result<Option<Self::Edge>> {
        self.storage.borrow_mut().remove_edge_between(source, target)
    }
}

impl<G: Graph> Drop for Subgraph<G> {
    fn drop(&mut self) {
        let Some(handle) = self.registration.take() else {
            return;
        };
        let Some(base) = self.base.upgrade() else {
            return;
        };
        // A base that is borrowed right now keeps a dead listener; it no-ops once the
        // storage is gone.
        let Ok(mut base) = base.try_borrow_mut() else {
            tracing::debug!(?handle, "base busy, subgraph listener left registered");
            return;
        };
        if let Some(l) = base.as_listenable() {
            l.remove_graph_listener(handle);
        }
    }
}

impl<G: Graph> fmt::Debug for Subgraph<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subgraph")
            .field("storage", &*self.storage.borrow())
            .field("listening", &self.registration.is_some())
            .field("base_alive", &(self.base.strong_count() > 0))
            .finish()
    }
}

/// Applies base removals to the subgraph storage.
struct SubgraphSync<V, E> {
    storage: Weak<RefCell<BaseGraph<V, E>>>,
}

impl<V, E> SubgraphSync<V, E>
where
    V: VertexId,
    E: GraphEdge<V>,
{
    fn apply(&self, f: impl FnOnce(&mut BaseGraph<V, E>) -> Result<bool>) {
        let Some(storage) = self.storage.upgrade() else {
            return;
        };
        let Ok(mut storage) = storage.try_borrow_mut() else {
            debug_assert!(false, "subgraph storage borrowed during base notification");
            return;
        };
        if let Err(err) = f(&mut storage) {
            tracing::warn!(%err, "subgraph failed to follow base removal");
        }
    }
}

impl<V, E> VertexSetListener<V> for SubgraphSync<V, E>
where
    V: VertexId,
    E: GraphEdge<V>,
{
    fn vertex_added(&mut self, _event: &GraphVertexChangeEvent<V>) {}

    fn vertex_removed(&mut self, event: &GraphVertexChangeEvent<V>) {
        self.apply(|s| s.remove_vertex(&event.vertex));
    }
}

impl<V, E> GraphListener<V, E> for SubgraphSync<V, E>
where
    V: VertexId,
    E: GraphEdge<V>,
{
    fn edge_added(&mut self, _event: &GraphEdgeChangeEvent<E>) {}

    fn edge_removed(&mut self, event: &GraphEdgeChangeEvent<E>) {
        self.apply(|s| s.remove_edge(&event.edge));
    }
}

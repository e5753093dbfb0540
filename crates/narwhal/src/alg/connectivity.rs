//! Connected components.

use crate::edge::{GraphEdge, VertexId};
use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::listen::{
    GraphEdgeChangeEvent, GraphListener, GraphVertexChangeEvent, VertexSetListener,
};
use crate::traverse::{BreadthFirstIterator, TraversalListener};
use crate::view::AsUndirected;
use crate::{HashMap, VertexSet};

/// Collects the vertices of each component a traversal walks through.
struct ComponentCollector<V> {
    sets: Vec<VertexSet<V>>,
    current: VertexSet<V>,
}

impl<V: VertexId, E> TraversalListener<V, E> for ComponentCollector<V> {
    fn connected_component_started(&mut self) {
        self.current = VertexSet::default();
    }

    fn connected_component_finished(&mut self) {
        self.sets.push(std::mem::take(&mut self.current));
    }

    fn vertex_traversed(&mut self, vertex: &V) {
        self.current.insert(vertex.clone());
    }
}

fn components_of<G: Graph>(g: &G) -> Vec<VertexSet<G::Vertex>> {
    let mut collector = ComponentCollector {
        sets: Vec::new(),
        current: VertexSet::default(),
    };
    {
        let mut it = BreadthFirstIterator::new(g);
        it.add_traversal_listener(&mut collector);
        for _ in it {}
    }
    collector.sets
}

/// Connected components of a graph, weakly connected ones for directed graphs.
///
/// Components are computed on first query and cached. Register the inspector as a graph
/// listener to have any structural change drop the cache; otherwise it keeps answering
/// for the graph as it was.
#[derive(Debug, Clone)]
pub struct ConnectivityInspector<V> {
    sets: Option<Vec<VertexSet<V>>>,
    set_of: HashMap<V, usize>,
}

impl<V: VertexId> Default for ConnectivityInspector<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VertexId> ConnectivityInspector<V> {
    pub fn new() -> Self {
        Self {
            sets: None,
            set_of: HashMap::default(),
        }
    }

    /// Drops the cached components.
    pub fn invalidate(&mut self) {
        self.sets = None;
        self.set_of.clear();
    }

    /// The connected components in traversal order.
    pub fn connected_sets<G>(&mut self, g: &G) -> Result<&[VertexSet<V>]>
    where
        G: Graph<Vertex = V>,
    {
        if self.sets.is_none() {
            let sets = if g.is_directed() {
                components_of(&AsUndirected::new(g)?)
            } else {
                components_of(g)
            };
            self.set_of = sets
                .iter()
                .enumerate()
                .flat_map(|(i, set)| set.iter().map(move |v| (v.clone(), i)))
                .collect();
            tracing::debug!(components = sets.len(), "connected components computed");
            self.sets = Some(sets);
        }
        Ok(self.sets.as_deref().unwrap_or_default())
    }

    /// `true` when the graph has exactly one component. An empty graph is not connected.
    pub fn is_graph_connected<G>(&mut self, g: &G) -> Result<bool>
    where
        G: Graph<Vertex = V>,
    {
        Ok(self.connected_sets(g)?.len() == 1)
    }

    /// The component containing `v`.
    pub fn connected_set_of<G>(&mut self, g: &G, v: &V) -> Result<&VertexSet<V>>
    where
        G: Graph<Vertex = V>,
    {
        if !g.contains_vertex(v) {
            return Err(GraphError::vertex_not_found(v));
        }
        self.connected_sets(g)?;
        let sets = self.sets.as_deref().unwrap_or_default();
        self.set_of
            .get(v)
            .and_then(|&i| sets.get(i))
            .ok_or_else(|| GraphError::vertex_not_found(v))
    }

    /// Whether some undirected path joins `a` and `b`.
    pub fn path_exists<G>(&mut self, g: &G, a: &V, b: &V) -> Result<bool>
    where
        G: Graph<Vertex = V>,
    {
        Ok(self.connected_set_of(g, a)?.contains(b))
    }
}

impl<V: VertexId> VertexSetListener<V> for ConnectivityInspector<V> {
    fn vertex_added(&mut self, _event: &GraphVertexChangeEvent<V>) {
        self.invalidate();
    }

    fn vertex_removed(&mut self, _event: &GraphVertexChangeEvent<V>) {
        self.invalidate();
    }
}

impl<V: VertexId, E: GraphEdge<V>> GraphListener<V, E> for ConnectivityInspector<V> {
    fn edge_added(&mut self, _event: &GraphEdgeChangeEvent<E>) {
        self.invalidate();
    }

    fn edge_removed(&mut self, _event: &GraphEdgeChangeEvent<E>) {
        self.invalidate();
    }
}

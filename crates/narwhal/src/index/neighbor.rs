use crate::edge::{GraphEdge, VertexId};
use crate::error::Result;
use crate::graph::Graph;
use crate::listen::{
    GraphEdgeChangeEvent, GraphListener, GraphVertexChangeEvent, VertexSetListener,
};
use crate::util::opposite_vertex;
use crate::{HashMap, VertexSet};
use hashbrown::hash_map::Entry;
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

/// Neighbor multiset of one vertex: each neighbor with the number of edges leading to it.
#[derive(Debug, Clone)]
pub struct Neighbors<V> {
    counts: IndexMap<V, usize, FxBuildHasher>,
}

impl<V> Default for Neighbors<V> {
    fn default() -> Self {
        Self {
            counts: IndexMap::default(),
        }
    }
}

impl<V: VertexId> PartialEq for Neighbors<V> {
    fn eq(&self, other: &Self) -> bool {
        self.counts == other.counts
    }
}

impl<V: VertexId> Eq for Neighbors<V> {}

impl<V: VertexId> Neighbors<V> {
    fn add(&mut self, v: V) {
        *self.counts.entry(v).or_insert(0) += 1;
    }

    fn remove(&mut self, v: &V) {
        let Some(count) = self.counts.get_mut(v) else {
            return;
        };
        *count -= 1;
        if *count == 0 {
            self.counts.shift_remove(v);
        }
    }

    pub fn contains(&self, v: &V) -> bool {
        self.counts.contains_key(v)
    }

    /// Number of edges to `v`.
    pub fn count(&self, v: &V) -> usize {
        self.counts.get(v).copied().unwrap_or(0)
    }

    /// Number of distinct neighbors.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Distinct neighbors in discovery order.
    pub fn set(&self) -> impl Iterator<Item = &V> + '_ {
        self.counts.keys()
    }

    pub fn to_set(&self) -> VertexSet<V> {
        self.counts.keys().cloned().collect()
    }

    /// Every neighbor repeated once per connecting edge.
    pub fn list(&self) -> Vec<V> {
        self.counts
            .iter()
            .flat_map(|(v, &n)| std::iter::repeat_n(v.clone(), n))
            .collect()
    }
}

fn cached<'a, V, F>(
    cache: &'a mut HashMap<V, Neighbors<V>>,
    v: &V,
    build: F,
) -> Result<&'a Neighbors<V>>
where
    V: VertexId,
    F: FnOnce() -> Result<Neighbors<V>>,
{
    Ok(match cache.entry(v.clone()) {
        Entry::Occupied(o) => o.into_mut(),
        Entry::Vacant(slot) => slot.insert(build()?),
    })
}

/// Neighbor index for undirected graphs (or any graph read through its incident edges).
///
/// A self-loop makes a vertex its own neighbor once.
#[derive(Debug, Clone)]
pub struct NeighborIndex<V> {
    cache: HashMap<V, Neighbors<V>>,
}

impl<V: VertexId> NeighborIndex<V> {
    pub fn new() -> Self {
        Self {
            cache: HashMap::default(),
        }
    }

    pub fn neighbors_of<G>(&mut self, g: &G, v: &V) -> Result<&Neighbors<V>>
    where
        G: Graph<Vertex = V>,
    {
        cached(&mut self.cache, v, || {
            let mut n = Neighbors::default();
            for e in g.edges_of(v)? {
                n.add(opposite_vertex(g, &e, v));
            }
            Ok(n)
        })
    }

    /// Distinct neighbors of `v`.
    pub fn neighbor_set_of<G>(&mut self, g: &G, v: &V) -> Result<VertexSet<V>>
    where
        G: Graph<Vertex = V>,
    {
        Ok(self.neighbors_of(g, v)?.to_set())
    }

    /// Neighbors of `v`, once per connecting edge.
    pub fn neighbor_list_of<G>(&mut self, g: &G, v: &V) -> Result<Vec<V>>
    where
        G: Graph<Vertex = V>,
    {
        Ok(self.neighbors_of(g, v)?.list())
    }

    fn added(&mut self, source: &V, target: &V) {
        if let Some(n) = self.cache.get_mut(source) {
            n.add(target.clone());
        }
        if source != target {
            if let Some(n) = self.cache.get_mut(target) {
                n.add(source.clone());
            }
        }
    }

    fn removed(&mut self, source: &V, target: &V) {
        if let Some(n) = self.cache.get_mut(source) {
            n.remove(target);
        }
        if source != target {
            if let Some(n) = self.cache.get_mut(target) {
                n.remove(source);
            }
        }
    }
}

impl<V: VertexId> Default for NeighborIndex<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VertexId> VertexSetListener<V> for NeighborIndex<V> {
    fn vertex_added(&mut self, _event: &GraphVertexChangeEvent<V>) {}

    fn vertex_removed(&mut self, event: &GraphVertexChangeEvent<V>) {
        self.cache.remove(&event.vertex);
    }
}

impl<V: VertexId, E: GraphEdge<V>> GraphListener<V, E> for NeighborIndex<V> {
    fn edge_added(&mut self, event: &GraphEdgeChangeEvent<E>) {
        self.added(event.edge.source(), event.edge.target());
    }

    fn edge_removed(&mut self, event: &GraphEdgeChangeEvent<E>) {
        self.removed(event.edge.source(), event.edge.target());
    }
}

/// Predecessor and successor index for directed graphs.
#[derive(Debug, Clone)]
pub struct DirectedNeighborIndex<V> {
    predecessors: HashMap<V, Neighbors<V>>,
    successors: HashMap<V, Neighbors<V>>,
}

impl<V: VertexId> DirectedNeighborIndex<V> {
    pub fn new() -> Self {
        Self {
            predecessors: HashMap::default(),
            successors: HashMap::default(),
        }
    }

    pub fn predecessors_of<G>(&mut self, g: &G, v: &V) -> Result<&Neighbors<V>>
    where
        G: Graph<Vertex = V>,
    {
        cached(&mut self.predecessors, v, || {
            let mut n = Neighbors::default();
            for e in g.incoming_edges_of(v)? {
                n.add(g.edge_source(&e));
            }
            Ok(n)
        })
    }

    pub fn successors_of<G>(&mut self, g: &G, v: &V) -> Result<&Neighbors<V>>
    where
        G: Graph<Vertex = V>,
    {
        cached(&mut self.successors, v, || {
            let mut n = Neighbors::default();
            for e in g.outgoing_edges_of(v)? {
                n.add(g.edge_target(&e));
            }
            Ok(n)
        })
    }
}

impl<V: VertexId> Default for DirectedNeighborIndex<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VertexId> VertexSetListener<V> for DirectedNeighborIndex<V> {
    fn vertex_added(&mut self, _event: &GraphVertexChangeEvent<V>) {}

    fn vertex_removed(&mut self, event: &GraphVertexChangeEvent<V>) {
        self.predecessors.remove(&event.vertex);
        self.successors.remove(&event.vertex);
    }
}

impl<V: VertexId, E: GraphEdge<V>> GraphListener<V, E> for DirectedNeighborIndex<V> {
    fn edge_added(&mut self, event: &GraphEdgeChangeEvent<E>) {
        let (source, target) = (event.edge.source(), event.edge.target());
        if let Some(n) = self.successors.get_mut(source) {
            n.add(target.clone());
        }
        if let Some(n) = self.predecessors.get_mut(target) {
            n.add(source.clone());
        }
    }

    fn edge_removed(&mut self, event: &GraphEdgeChangeEvent<E>) {
        let (source, target) = (event.edge.source(), event.edge.target());
        if let Some(n) = self.successors.get_mut(source) {
            n.remove(target);
        }
        if let Some(n) = self.predecessors.get_mut(target) {
            n.remove(source);
        }
    }
}

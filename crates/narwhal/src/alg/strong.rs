//! Strongly connected components.

use crate::edge::{GraphEdge, VertexId};
use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::listen::{
    GraphEdgeChangeEvent, GraphListener, GraphVertexChangeEvent, VertexSetListener,
};
use crate::traverse::{DepthFirstIterator, TraversalListener};
use crate::util::successor_list_of;
use crate::view::{EdgeReversed, Subgraph};
use crate::{HashMap, HashSet, VertexSet};
use std::cell::RefCell;
use std::rc::Rc;

struct FinishOrder<V> {
    order: Vec<V>,
}

impl<V: VertexId, E> TraversalListener<V, E> for FinishOrder<V> {
    fn vertex_finished(&mut self, vertex: &V) {
        self.order.push(vertex.clone());
    }
}

fn require_directed<G: Graph>(g: &G) -> Result<()> {
    if g.is_directed() {
        Ok(())
    } else {
        Err(GraphError::invalid(
            "strong connectivity is defined for directed graphs",
        ))
    }
}

/// Kosaraju's two-pass algorithm.
fn kosaraju<G: Graph>(g: &G) -> Result<Vec<VertexSet<G::Vertex>>> {
    let mut finish = FinishOrder { order: Vec::new() };
    {
        let mut it = DepthFirstIterator::new(g);
        it.add_traversal_listener(&mut finish);
        for _ in it {}
    }

    let reversed = EdgeReversed::new(g)?;
    let mut assigned: HashSet<G::Vertex> = HashSet::default();
    let mut sets = Vec::new();
    for root in finish.order.into_iter().rev() {
        if !assigned.insert(root.clone()) {
            continue;
        }
        let mut set = VertexSet::default();
        let mut stack = vec![root];
        while let Some(v) = stack.pop() {
            for e in reversed.outgoing_edges_of(&v)? {
                let w = reversed.edge_target(&e);
                if assigned.insert(w.clone()) {
                    stack.push(w);
                }
            }
            set.insert(v);
        }
        sets.push(set);
    }
    Ok(sets)
}

/// Strongly connected components of a directed graph.
///
/// Components are computed on first query (Kosaraju: depth-first finish order on the
/// graph, then depth-first trees over the reversed graph in reverse finish order) and
/// cached until the inspector is invalidated, which registered as a graph listener
/// happens on every structural change.
#[derive(Debug, Clone)]
pub struct StrongConnectivityInspector<V> {
    sets: Option<Vec<VertexSet<V>>>,
}

impl<V: VertexId> Default for StrongConnectivityInspector<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VertexId> StrongConnectivityInspector<V> {
    pub fn new() -> Self {
        Self { sets: None }
    }

    pub fn invalidate(&mut self) {
        self.sets = None;
    }

    pub fn strongly_connected_sets<G>(&mut self, g: &G) -> Result<&[VertexSet<V>]>
    where
        G: Graph<Vertex = V>,
    {
        require_directed(g)?;
        if self.sets.is_none() {
            let sets = kosaraju(g)?;
            tracing::debug!(
                components = sets.len(),
                vertices = g.vertex_count(),
                "strongly connected components computed"
            );
            self.sets = Some(sets);
        }
        Ok(self.sets.as_deref().unwrap_or_default())
    }

    pub fn is_strongly_connected<G>(&mut self, g: &G) -> Result<bool>
    where
        G: Graph<Vertex = V>,
    {
        Ok(self.strongly_connected_sets(g)?.len() == 1)
    }

    /// One induced subgraph of `base` per strongly connected component.
    pub fn strongly_connected_subgraphs<G>(
        &mut self,
        base: &Rc<RefCell<G>>,
    ) -> Result<Vec<Subgraph<G>>>
    where
        G: Graph<Vertex = V>,
        V: 'static,
        G::Edge: 'static,
    {
        let sets = self.strongly_connected_sets(&*base.borrow())?.to_vec();
        sets.iter()
            .map(|set| {
                let keep = |v: &V| set.contains(v);
                Subgraph::with_filters(base, Some(&keep), None)
            })
            .collect()
    }
}

impl<V: VertexId> VertexSetListener<V> for StrongConnectivityInspector<V> {
    fn vertex_added(&mut self, _event: &GraphVertexChangeEvent<V>) {
        self.invalidate();
    }

    fn vertex_removed(&mut self, _event: &GraphVertexChangeEvent<V>) {
        self.invalidate();
    }
}

impl<V: VertexId, E: GraphEdge<V>> GraphListener<V, E> for StrongConnectivityInspector<V> {
    fn edge_added(&mut self, _event: &GraphEdgeChangeEvent<E>) {
        self.invalidate();
    }

    fn edge_removed(&mut self, _event: &GraphEdgeChangeEvent<E>) {
        self.invalidate();
    }
}

/// Per-vertex Tarjan bookkeeping: discovery index and lowest index reachable.
#[derive(Clone, Copy)]
struct Discovery {
    index: usize,
    low: usize,
}

/// One pending `strongconnect` call: the vertex and the successors not yet looked at.
struct Frame<V> {
    vertex: V,
    successors: std::vec::IntoIter<V>,
}

/// Strongly connected components by Tarjan's single-pass algorithm, in reverse
/// topological order of the condensation.
/// Iterative: pending calls live in a `Vec` of frames, not on the thread stack.
pub fn tarjan_components<G: Graph>(g: &G) -> Result<Vec<VertexSet<G::Vertex>>> {
    require_directed(g)?;

    let mut discovered: HashMap<G::Vertex, Discovery> = HashMap::default();
    let mut on_stack: HashSet<G::Vertex> = HashSet::default();
    let mut stack: Vec<G::Vertex> = Vec::new();
    let mut sets = Vec::new();

    for root in g.vertices() {
        if discovered.contains_key(&root) {
            continue;
        }
        let mut frames = Vec::new();
        let mut enter = Some(root);

        loop {
            if let Some(v) = enter.take() {
                let index = discovered.len();
                discovered.insert(v.clone(), Discovery { index, low: index });
                stack.push(v.clone());
                on_stack.insert(v.clone());
                frames.push(Frame {
                    successors: successor_list_of(g, &v)?.into_iter(),
                    vertex: v,
                });
            }
            let Some(frame) = frames.last_mut() else {
                break;
            };

            if let Some(w) = frame.successors.next() {
                match discovered.get(&w).map(|d| d.index) {
                    None => enter = Some(w),
                    Some(seen) if on_stack.contains(&w) => {
                        if let Some(d) = discovered.get_mut(&frame.vertex) {
                            d.low = d.low.min(seen);
                        }
                    }
                    Some(_) => {}
                }
                continue;
            }

            let Some(Frame { vertex: v, .. }) = frames.pop() else {
                break;
            };
            let Some(&Discovery { index, low }) = discovered.get(&v) else {
                continue;
            };
            if let Some(parent) = frames.last() {
                if let Some(d) = discovered.get_mut(&parent.vertex) {
                    d.low = d.low.min(low);
                }
            }
            if low == index {
                let mut set = VertexSet::default();
                while let Some(w) = stack.pop() {
                    on_stack.remove(&w);
                    let done = w == v;
                    set.insert(w);
                    if done {
                        break;
                    }
                }
                sets.push(set);
            }
        }
    }

    tracing::debug!(components = sets.len(), "tarjan finished");
    Ok(sets)
}

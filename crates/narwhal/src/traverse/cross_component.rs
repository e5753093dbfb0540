use crate::HashMap;
use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::util::opposite_vertex;

/// What a [`Frontier`] hands back to the iterator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<V> {
    /// Visit this vertex next.
    Visit(V),
    /// Every vertex reachable through this one has been visited.
    Finish(V),
}

/// The set of discovered but not yet visited vertices, and the order they come out in.
pub trait Frontier<V> {
    fn is_empty(&self) -> bool;

    /// `v` was reached for the first time.
    fn encounter(&mut self, v: V);

    /// `v` was reached again; `pending` tells whether it is still waiting in the frontier.
    fn encounter_again(&mut self, _v: &V, _pending: bool) {}

    fn provide_next<G: Graph<Vertex = V>>(&mut self, graph: &G) -> Option<Step<V>>;
}

/// Observes a traversal. Every callback defaults to a no-op.
pub trait TraversalListener<V, E> {
    fn connected_component_started(&mut self) {}

    fn connected_component_finished(&mut self) {}

    fn vertex_traversed(&mut self, _vertex: &V) {}

    /// Reported by frontiers that track completion (depth-first).
    fn vertex_finished(&mut self, _vertex: &V) {}

    fn edge_traversed(&mut self, _edge: &E) {}
}

impl<V, E, L: TraversalListener<V, E> + ?Sized> TraversalListener<V, E> for &mut L {
    fn connected_component_started(&mut self) {
        (**self).connected_component_started();
    }

    fn connected_component_finished(&mut self) {
        (**self).connected_component_finished();
    }

    fn vertex_traversed(&mut self, vertex: &V) {
        (**self).vertex_traversed(vertex);
    }

    fn vertex_finished(&mut self, vertex: &V) {
        (**self).vertex_finished(vertex);
    }

    fn edge_traversed(&mut self, edge: &E) {
        (**self).edge_traversed(edge);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    NotStarted,
    HasPending,
    Exhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    Pending,
    Visited,
    Finished,
}

/// Traversal over a graph in the order given by its frontier.
///
/// The vertex set is snapshotted at construction; the graph must not change structurally
/// while the iterator is alive.
pub struct CrossComponentIterator<'g, G: Graph, F> {
    graph: &'g G,
    frontier: F,
    state: State,
    start: Option<G::Vertex>,
    roots: std::vec::IntoIter<G::Vertex>,
    seen: HashMap<G::Vertex, Visit>,
    cross_component: bool,
    in_component: bool,
    listeners: Vec<Box<dyn TraversalListener<G::Vertex, G::Edge> + 'g>>,
}

impl<'g, G, F> CrossComponentIterator<'g, G, F>
where
    G: Graph,
    F: Frontier<G::Vertex>,
{
    /// Traversal starting at `start`, or at the first vertex of the vertex set. A start
    /// vertex that is not in the graph is rejected.
    pub fn with_frontier(graph: &'g G, start: Option<&G::Vertex>, frontier: F) -> Result<Self> {
        if let Some(v) = start {
            if !graph.contains_vertex(v) {
                return Err(GraphError::vertex_not_found(v));
            }
        }
        Ok(Self::unchecked(graph, start.cloned(), frontier))
    }

    pub(crate) fn unchecked(graph: &'g G, start: Option<G::Vertex>, frontier: F) -> Self {
        let roots: Vec<G::Vertex> = graph.vertices().collect();
        let start = start.or_else(|| roots.first().cloned());
        Self {
            graph,
            frontier,
            state: State::NotStarted,
            start,
            roots: roots.into_iter(),
            seen: HashMap::default(),
            cross_component: true,
            in_component: false,
            listeners: Vec::new(),
        }
    }

    pub fn graph(&self) -> &'g G {
        self.graph
    }

    pub fn frontier(&self) -> &F {
        &self.frontier
    }

    pub fn into_frontier(self) -> F {
        self.frontier
    }

    pub fn is_cross_component_traversal(&self) -> bool {
        self.cross_component
    }

    pub fn set_cross_component_traversal(&mut self, cross_component: bool) {
        self.cross_component = cross_component;
    }

    pub fn add_traversal_listener(&mut self, listener: impl TraversalListener<G::Vertex, G::Edge> + 'g) {
        self.listeners.push(Box::new(listener));
    }

    /// Whether `v` has been discovered by the traversal so far.
    pub fn is_seen_vertex(&self, v: &G::Vertex) -> bool {
        self.seen.contains_key(v)
    }

    /// Like [`Iterator::next`], but reports exhaustion as [`GraphError::NoSuchElement`].
    pub fn next_vertex(&mut self) -> Result<G::Vertex> {
        self.next().ok_or(GraphError::NoSuchElement)
    }

    fn encounter(&mut self, v: G::Vertex) {
        self.seen.insert(v.clone(), Visit::Pending);
        self.frontier.encounter(v);
    }

    /// Seeds the next component; `false` once nothing is left to seed.
    fn seed(&mut self) -> bool {
        if self.state == State::NotStarted {
            self.state = State::HasPending;
            if let Some(start) = self.start.take() {
                self.encounter(start);
                return true;
            }
            return false;
        }
        if !self.cross_component {
            return false;
        }
        while let Some(v) = self.roots.next() {
            if !self.seen.contains_key(&v) {
                self.encounter(v);
                return true;
            }
        }
        false
    }

    fn add_unseen_children_of(&mut self, v: &G::Vertex) {
        let edges = if self.graph.is_directed() {
            self.graph.outgoing_edges_of(v)
        } else {
            self.graph.edges_of(v)
        };
        let Ok(edges) = edges else {
            debug_assert!(false, "traversal reached a vertex outside the graph");
            return;
        };
        for e in edges {
            for l in &mut self.listeners {
                l.edge_traversed(&e);
            }
            let w = opposite_vertex(self.graph, &e, v);
            match self.seen.get(&w) {
                Some(visit) => {
                    let pending = *visit == Visit::Pending;
                    self.frontier.encounter_again(&w, pending);
                }
                None => self.encounter(w),
            }
        }
    }
}

impl<G, F> Iterator for CrossComponentIterator<'_, G, F>
where
    G: Graph,
    F: Frontier<G::Vertex>,
{
    type Item = G::Vertex;

    fn next(&mut self) -> Option<G::Vertex> {
        loop {
            if self.state == State::Exhausted {
                return None;
            }
            if self.frontier.is_empty() {
                if self.in_component {
                    self.in_component = false;
                    for l in &mut self.listeners {
                        l.connected_component_finished();
                    }
                }
                if !self.seed() {
                    self.state = State::Exhausted;
                    return None;
                }
            }
            match self.frontier.provide_next(self.graph) {
                Some(Step::Visit(v)) => {
                    if !self.in_component {
                        self.in_component = true;
                        for l in &mut self.listeners {
                            l.connected_component_started();
                        }
                    }
                    self.seen.insert(v.clone(), Visit::Visited);
                    for l in &mut self.listeners {
                        l.vertex_traversed(&v);
                    }
                    self.add_unseen_children_of(&v);
                    return Some(v);
                }
                Some(Step::Finish(v)) => {
                    self.seen.insert(v.clone(), Visit::Finished);
                    for l in &mut self.listeners {
                        l.vertex_finished(&v);
                    }
                }
                None => {}
            }
        }
    }
}

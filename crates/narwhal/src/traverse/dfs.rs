use super::cross_component::{CrossComponentIterator, Frontier, Step};
use crate::edge::VertexId;
use crate::error::Result;
use crate::graph::Graph;

#[derive(Debug, Clone)]
enum Entry<V> {
    Vertex(V),
    /// Pushed under a vertex when it is visited; popping it finishes the vertex.
    Sentinel(V),
}

/// LIFO frontier: the most recently discovered vertex is visited first.
///
/// A vertex that is reached again while still waiting is moved back to the top of the
/// stack, which keeps the visiting order a true depth-first order. Each visited vertex
/// reports a [`Step::Finish`] once everything discovered through it is done.
#[derive(Debug, Clone)]
pub struct Lifo<V> {
    stack: Vec<Entry<V>>,
}

impl<V> Default for Lifo<V> {
    fn default() -> Self {
        Self { stack: Vec::new() }
    }
}

impl<V: VertexId> Frontier<V> for Lifo<V> {
    fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    fn encounter(&mut self, v: V) {
        self.stack.push(Entry::Vertex(v));
    }

    fn encounter_again(&mut self, v: &V, pending: bool) {
        if !pending {
            return;
        }
        let Some(i) = self
            .stack
            .iter()
            .rposition(|e| matches!(e, Entry::Vertex(w) if w == v))
        else {
            return;
        };
        let entry = self.stack.remove(i);
        self.stack.push(entry);
    }

    fn provide_next<G: Graph<Vertex = V>>(&mut self, _graph: &G) -> Option<Step<V>> {
        match self.stack.pop()? {
            Entry::Vertex(v) => {
                self.stack.push(Entry::Sentinel(v.clone()));
                Some(Step::Visit(v))
            }
            Entry::Sentinel(v) => Some(Step::Finish(v)),
        }
    }
}

pub type DepthFirstIterator<'g, G> = CrossComponentIterator<'g, G, Lifo<<G as Graph>::Vertex>>;

impl<'g, G: Graph> CrossComponentIterator<'g, G, Lifo<G::Vertex>> {
    /// Depth-first traversal of the whole graph, starting at its first vertex.
    pub fn new(graph: &'g G) -> Self {
        Self::unchecked(graph, None, Lifo::default())
    }

    pub fn from_vertex(graph: &'g G, start: &G::Vertex) -> Result<Self> {
        Self::with_frontier(graph, Some(start), Lifo::default())
    }
}

use super::cross_component::{CrossComponentIterator, Frontier, Step};
use crate::error::Result;
use crate::graph::Graph;
use std::collections::VecDeque;

/// FIFO frontier: vertices are visited in the order they were discovered.
#[derive(Debug, Clone)]
pub struct Fifo<V> {
    queue: VecDeque<V>,
}

impl<V> Default for Fifo<V> {
    fn default() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }
}

impl<V> Frontier<V> for Fifo<V> {
    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    fn encounter(&mut self, v: V) {
        self.queue.push_back(v);
    }

    fn provide_next<G: Graph<Vertex = V>>(&mut self, _graph: &G) -> Option<Step<V>> {
        self.queue.pop_front().map(Step::Visit)
    }
}

pub type BreadthFirstIterator<'g, G> = CrossComponentIterator<'g, G, Fifo<<G as Graph>::Vertex>>;

impl<'g, G: Graph> CrossComponentIterator<'g, G, Fifo<G::Vertex>> {
    /// Breadth-first traversal of the whole graph, starting at its first vertex.
    pub fn new(graph: &'g G) -> Self {
        Self::unchecked(graph, None, Fifo::default())
    }

    pub fn from_vertex(graph: &'g G, start: &G::Vertex) -> Result<Self> {
        Self::with_frontier(graph, Some(start), Fifo::default())
    }
}

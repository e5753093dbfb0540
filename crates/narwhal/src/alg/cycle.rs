//! Cycle detection in directed graphs.

use crate::VertexSet;
use crate::edge::VertexId;
use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::traverse::{CrossComponentIterator, Frontier, Lifo, Step};

/// Depth-first frontier that also tracks the path from the traversal root to the vertex
/// being visited.
///
/// Reaching a vertex that is already on the path closes a cycle. In enumeration mode the
/// path suffix starting at that vertex is added to `cycles`; with a `root`, only cycles
/// back into the root (or into vertices already known to be on such a cycle) count, and
/// then the whole path is added.
struct ProbeFrontier<V> {
    dfs: Lifo<V>,
    path: Vec<V>,
    root: Option<V>,
    cycles: Option<VertexSet<V>>,
    found: bool,
}

impl<V: VertexId> ProbeFrontier<V> {
    fn new(root: Option<V>, enumerate: bool) -> Self {
        Self {
            dfs: Lifo::default(),
            path: Vec::new(),
            root,
            cycles: enumerate.then(VertexSet::default),
            found: false,
        }
    }
}

impl<V: VertexId> Frontier<V> for ProbeFrontier<V> {
    fn is_empty(&self) -> bool {
        self.dfs.is_empty()
    }

    fn encounter(&mut self, v: V) {
        self.dfs.encounter(v);
    }

    fn encounter_again(&mut self, v: &V, pending: bool) {
        self.dfs.encounter_again(v, pending);

        let start = match &self.root {
            Some(root) => {
                let closes = v == root || self.cycles.as_ref().is_some_and(|c| c.contains(v));
                if !closes {
                    return;
                }
                0
            }
            None => match self.path.iter().position(|w| w == v) {
                Some(i) => i,
                None => return,
            },
        };
        self.found = true;
        if let Some(cycles) = &mut self.cycles {
            cycles.extend(self.path[start..].iter().cloned());
        }
    }

    fn provide_next<G: Graph<Vertex = V>>(&mut self, graph: &G) -> Option<Step<V>> {
        let step = self.dfs.provide_next(graph)?;
        if let Step::Visit(v) = &step {
            while let Some(tail) = self.path.last() {
                if graph.contains_edge_between(tail, v) {
                    break;
                }
                self.path.pop();
            }
            self.path.push(v.clone());
        }
        Some(step)
    }
}

/// Detects and enumerates the vertices that lie on cycles of a directed graph.
///
/// Every query runs a fresh depth-first probe; nothing is cached.
pub struct CycleDetector<'g, G: Graph> {
    graph: &'g G,
}

impl<'g, G: Graph> CycleDetector<'g, G> {
    pub fn new(graph: &'g G) -> Result<Self> {
        if !graph.is_directed() {
            return Err(GraphError::invalid(
                "cycle detection is defined for directed graphs",
            ));
        }
        Ok(Self { graph })
    }

    /// Whether the graph contains any cycle.
    pub fn detect_cycles(&self) -> bool {
        let it =
            CrossComponentIterator::unchecked(self.graph, None, ProbeFrontier::new(None, false));
        Self::probe_until_found(it)
    }

    /// Whether some cycle passes through `v`.
    pub fn detect_cycles_containing_vertex(&self, v: &G::Vertex) -> Result<bool> {
        let it = self.rooted(v, false)?;
        Ok(Self::probe_until_found(it))
    }

    /// Every vertex on some cycle found by the probe.
    pub fn find_cycles(&self) -> VertexSet<G::Vertex> {
        let it =
            CrossComponentIterator::unchecked(self.graph, None, ProbeFrontier::new(None, true));
        Self::probe_all(it)
    }

    /// Every vertex on some cycle through `v`.
    pub fn find_cycles_containing_vertex(&self, v: &G::Vertex) -> Result<VertexSet<G::Vertex>> {
        let it = self.rooted(v, true)?;
        Ok(Self::probe_all(it))
    }

    fn rooted(
        &self,
        v: &G::Vertex,
        enumerate: bool,
    ) -> Result<CrossComponentIterator<'g, G, ProbeFrontier<G::Vertex>>> {
        let mut it = CrossComponentIterator::with_frontier(
            self.graph,
            Some(v),
            ProbeFrontier::new(Some(v.clone()), enumerate),
        )?;
        it.set_cross_component_traversal(false);
        Ok(it)
    }

    fn probe_until_found(mut it: CrossComponentIterator<'g, G, ProbeFrontier<G::Vertex>>) -> bool {
        while it.next().is_some() {
            if it.frontier().found {
                return true;
            }
        }
        it.frontier().found
    }

    fn probe_all(
        mut it: CrossComponentIterator<'g, G, ProbeFrontier<G::Vertex>>,
    ) -> VertexSet<G::Vertex> {
        for _ in it.by_ref() {}
        let found = it.into_frontier();
        tracing::debug!(
            found = found.found,
            vertices = found.cycles.as_ref().map_or(0, |c| c.len()),
            "cycle probe finished"
        );
        found.cycles.unwrap_or_default()
    }
}

//! Single-source shortest paths allowing negative edge weights.

use super::GraphPath;
use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::util::opposite_vertex;
use crate::{HashMap, HashSet};
use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;

/// Relaxation threshold: a candidate must beat the current cost by more than this.
const EPSILON: f64 = 1e-9;

struct Label<E> {
    cost: f64,
    via: Option<E>,
}

/// Bellman-Ford with a hop bound.
///
/// Pass `i` relaxes the edges leaving the vertices whose cost improved in pass `i - 1`,
/// using the costs those vertices had at the start of the pass. The number of passes is
/// bounded by the hop limit (vertex count minus one by default), so the computed costs are
/// those of paths with at most that many edges. Costs are computed eagerly at construction.
pub struct BellmanFordShortestPath<'g, G: Graph> {
    graph: &'g G,
    source: G::Vertex,
    labels: HashMap<G::Vertex, Label<G::Edge>>,
    passes: usize,
}

impl<'g, G: Graph> BellmanFordShortestPath<'g, G> {
    pub fn new(graph: &'g G, source: &G::Vertex) -> Result<Self> {
        let max_hops = graph.vertex_count().saturating_sub(1);
        Self::with_max_hops(graph, source, max_hops)
    }

    pub fn with_max_hops(graph: &'g G, source: &G::Vertex, max_hops: usize) -> Result<Self> {
        if !graph.contains_vertex(source) {
            return Err(GraphError::vertex_not_found(source));
        }
        let mut this = Self {
            graph,
            source: source.clone(),
            labels: HashMap::default(),
            passes: 0,
        };
        this.run(max_hops)?;
        Ok(this)
    }

    pub fn source(&self) -> &G::Vertex {
        &self.source
    }

    /// Relaxation passes that changed at least one cost.
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Cost of the best path found to `target`; infinite when none was found.
    pub fn cost(&self, target: &G::Vertex) -> Result<f64> {
        if !self.graph.contains_vertex(target) {
            return Err(GraphError::vertex_not_found(target));
        }
        Ok(self.labels.get(target).map_or(f64::INFINITY, |l| l.cost))
    }

    /// Best path found to `target`. A predecessor chain that runs in a circle means a
    /// negative cycle was reached and is reported as [`GraphError::NegativeCycle`].
    pub fn path_to(&self, target: &G::Vertex) -> Result<Option<GraphPath<G::Vertex, G::Edge>>> {
        if !self.graph.contains_vertex(target) {
            return Err(GraphError::vertex_not_found(target));
        }
        let Some(label) = self.labels.get(target) else {
            return Ok(None);
        };

        let mut visited: HashSet<G::Vertex> = HashSet::default();
        let mut edges = Vec::new();
        let mut at = target.clone();
        let mut via = label.via.clone();
        visited.insert(at.clone());
        while let Some(e) = via {
            at = opposite_vertex(self.graph, &e, &at);
            if !visited.insert(at.clone()) {
                return Err(GraphError::NegativeCycle {
                    vertex: format!("{at:?}"),
                });
            }
            via = self.labels.get(&at).and_then(|l| l.via.clone());
            edges.push(e);
        }
        edges.reverse();
        Ok(Some(GraphPath::from_edges(self.graph, self.source.clone(), edges)))
    }

    /// One-shot form of [`path_to`](Self::path_to) with the default hop bound.
    pub fn find_path_between(
        graph: &'g G,
        source: &G::Vertex,
        target: &G::Vertex,
    ) -> Result<Option<GraphPath<G::Vertex, G::Edge>>> {
        Self::new(graph, source)?.path_to(target)
    }

    fn run(&mut self, max_hops: usize) -> Result<()> {
        self.labels.insert(
            self.source.clone(),
            Label {
                cost: 0.0,
                via: None,
            },
        );
        let mut frontier = vec![self.source.clone()];

        while !frontier.is_empty() && self.passes < max_hops {
            // Costs as of the end of the previous pass.
            let snapshot: Vec<(G::Vertex, f64)> = frontier
                .into_iter()
                .filter_map(|v| {
                    let cost = self.labels.get(&v)?.cost;
                    Some((v, cost))
                })
                .collect();

            let mut improved: IndexSet<G::Vertex, FxBuildHasher> = IndexSet::default();
            for (v, cost) in snapshot {
                let edges = if self.graph.is_directed() {
                    self.graph.outgoing_edges_of(&v)?
                } else {
                    self.graph.edges_of(&v)?
                };
                for e in edges {
                    let w = opposite_vertex(self.graph, &e, &v);
                    let candidate = cost + self.graph.edge_weight(&e);
                    let current = self.labels.get(&w).map_or(f64::INFINITY, |l| l.cost);
                    if candidate + EPSILON < current {
                        self.labels.insert(
                            w.clone(),
                            Label {
                                cost: candidate,
                                via: Some(e),
                            },
                        );
                        improved.insert(w);
                    }
                }
            }
            if improved.is_empty() {
                break;
            }
            self.passes += 1;
            frontier = improved.into_iter().collect();
        }

        tracing::trace!(
            passes = self.passes,
            reached = self.labels.len(),
            "bellman-ford finished"
        );
        Ok(())
    }
}

//! Single-pair shortest paths for non-negative edge weights.

use super::GraphPath;
use crate::HashMap;
use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::util::opposite_vertex;
use hashbrown::hash_map::Entry;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap entry. Ordered so that `BinaryHeap` pops the smallest distance first and, among
/// equal distances, the entry pushed first.
struct QueueEntry<V> {
    dist: f64,
    seq: u64,
    vertex: V,
}

impl<V> PartialEq for QueueEntry<V> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V> Eq for QueueEntry<V> {}

impl<V> PartialOrd for QueueEntry<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V> Ord for QueueEntry<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

struct Label<E> {
    dist: f64,
    via: Option<E>,
    settled: bool,
}

/// Dijkstra's algorithm with a binary heap.
///
/// A tentative distance is only replaced by a strictly shorter one, so among equally short
/// routes the one discovered first is kept. Directed graphs follow outgoing edges,
/// undirected graphs every incident edge. Any negative edge weight met during the search
/// is an error.
pub struct DijkstraShortestPath<'g, G> {
    graph: &'g G,
    radius: f64,
}

impl<'g, G: Graph> DijkstraShortestPath<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        Self {
            graph,
            radius: f64::INFINITY,
        }
    }

    /// Ignores every route longer than `radius`.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Shortest path from `source` to `target`, or `None` when `target` is unreachable
    /// within the radius.
    pub fn path_between(
        &self,
        source: &G::Vertex,
        target: &G::Vertex,
    ) -> Result<Option<GraphPath<G::Vertex, G::Edge>>> {
        for v in [source, target] {
            if !self.graph.contains_vertex(v) {
                return Err(GraphError::vertex_not_found(v));
            }
        }
        let labels = self.search(source, target)?;
        let Some(label) = labels.get(target).filter(|l| l.settled) else {
            return Ok(None);
        };

        let mut edges = Vec::new();
        let mut via = label.via.clone();
        let mut at = target.clone();
        while let Some(e) = via {
            at = opposite_vertex(self.graph, &e, &at);
            via = labels.get(&at).and_then(|l| l.via.clone());
            edges.push(e);
        }
        edges.reverse();
        Ok(Some(GraphPath::from_edges(self.graph, source.clone(), edges)))
    }

    /// One-shot form of [`path_between`](Self::path_between) without a radius.
    pub fn find_path_between(
        graph: &'g G,
        source: &G::Vertex,
        target: &G::Vertex,
    ) -> Result<Option<GraphPath<G::Vertex, G::Edge>>> {
        Self::new(graph).path_between(source, target)
    }

    fn search(
        &self,
        source: &G::Vertex,
        target: &G::Vertex,
    ) -> Result<HashMap<G::Vertex, Label<G::Edge>>> {
        let mut labels: HashMap<G::Vertex, Label<G::Edge>> = HashMap::default();
        let mut heap = BinaryHeap::new();
        let mut seq = 0u64;
        let mut settled = 0usize;

        labels.insert(
            source.clone(),
            Label {
                dist: 0.0,
                via: None,
                settled: false,
            },
        );
        heap.push(QueueEntry {
            dist: 0.0,
            seq,
            vertex: source.clone(),
        });

        while let Some(QueueEntry { dist, vertex, .. }) = heap.pop() {
            let Some(label) = labels.get_mut(&vertex) else {
                debug_assert!(false, "queued vertex without a label");
                continue;
            };
            if label.settled || dist > label.dist {
                continue;
            }
            label.settled = true;
            settled += 1;
            if vertex == *target {
                break;
            }

            let edges = if self.graph.is_directed() {
                self.graph.outgoing_edges_of(&vertex)?
            } else {
                self.graph.edges_of(&vertex)?
            };
            for e in edges {
                let weight = self.graph.edge_weight(&e);
                if weight < 0.0 {
                    return Err(GraphError::NegativeEdgeWeight {
                        edge: format!("{e:?}"),
                        weight,
                    });
                }
                let candidate = dist + weight;
                if candidate > self.radius {
                    continue;
                }
                let next = opposite_vertex(self.graph, &e, &vertex);
                match labels.entry(next.clone()) {
                    Entry::Occupied(mut o) => {
                        let l = o.get_mut();
                        if l.settled || candidate >= l.dist {
                            continue;
                        }
                        l.dist = candidate;
                        l.via = Some(e);
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(Label {
                            dist: candidate,
                            via: Some(e),
                            settled: false,
                        });
                    }
                }
                seq += 1;
                heap.push(QueueEntry {
                    dist: candidate,
                    seq,
                    vertex: next,
                });
            }
        }

        tracing::trace!(settled, reached = labels.len(), "dijkstra search finished");
        Ok(labels)
    }
}

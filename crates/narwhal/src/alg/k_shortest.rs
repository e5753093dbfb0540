//! Ranked simple paths from one source.

use super::GraphPath;
use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::util::opposite_vertex;
use crate::{HashMap, HashSet};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

/// A simple path out of the start vertex, still open or already at the target.
struct Partial<V, E> {
    vertices: Vec<V>,
    edges: Vec<E>,
    weight: f64,
    /// Vertex-set positions of `vertices`, the tie-break between equal weights.
    rank_key: Vec<usize>,
}

impl<V, E> PartialEq for Partial<V, E> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V, E> Eq for Partial<V, E> {}

impl<V, E> PartialOrd for Partial<V, E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Reversed so that `BinaryHeap` pops the best path first.
impl<V, E> Ord for Partial<V, E> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.rank_key.cmp(&self.rank_key))
    }
}

/// The `k` best simple paths from a start vertex to a given end vertex.
///
/// Paths are ranked by weight, then lexicographically by the vertex-set positions of the
/// path's vertices. Both keys only grow when a path is extended by one edge, so a
/// best-first search over simple paths reaches the end vertex in exactly that order. An
/// open path is kept only while the end is still reachable from its tail without revisiting
/// one of its vertices and within the remaining hops. Edge weights must be non-negative.
pub struct KShortestPaths<'g, G: Graph> {
    graph: &'g G,
    start: G::Vertex,
    k: usize,
    max_hops: usize,
    position: HashMap<G::Vertex, usize>,
}

impl<'g, G: Graph> KShortestPaths<'g, G> {
    pub fn new(graph: &'g G, start: &G::Vertex, k: usize) -> Result<Self> {
        let max_hops = graph.vertex_count().saturating_sub(1);
        Self::with_max_hops(graph, start, k, max_hops)
    }

    /// Only paths with at most `max_hops` edges are considered.
    pub fn with_max_hops(
        graph: &'g G,
        start: &G::Vertex,
        k: usize,
        max_hops: usize,
    ) -> Result<Self> {
        if k == 0 {
            return Err(GraphError::invalid("k must be at least 1"));
        }
        if !graph.contains_vertex(start) {
            return Err(GraphError::vertex_not_found(start));
        }
        if graph.edges().any(|e| graph.edge_weight(&e) < 0.0) {
            return Err(GraphError::invalid(
                "k-shortest-paths requires non-negative edge weights",
            ));
        }
        let position = graph.vertices().enumerate().map(|(i, v)| (v, i)).collect();
        Ok(Self {
            graph,
            start: start.clone(),
            k,
            max_hops,
            position,
        })
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn max_hops(&self) -> usize {
        self.max_hops
    }

    /// Up to `k` paths from the start vertex to `end`, best first; empty when `end` is
    /// unreachable.
    pub fn paths(&self, end: &G::Vertex) -> Result<Vec<GraphPath<G::Vertex, G::Edge>>> {
        if !self.graph.contains_vertex(end) {
            return Err(GraphError::vertex_not_found(end));
        }
        if *end == self.start {
            return Err(GraphError::invalid(
                "paths from a vertex to itself are not ranked",
            ));
        }

        let mut heap = BinaryHeap::new();
        heap.push(Partial {
            vertices: vec![self.start.clone()],
            edges: Vec::new(),
            weight: 0.0,
            rank_key: vec![self.position_of(&self.start)],
        });
        let mut found = Vec::new();
        let mut expanded = 0usize;

        while let Some(path) = heap.pop() {
            let Some(tail) = path.vertices.last() else {
                continue;
            };
            if tail == end {
                found.push(GraphPath::from_edges(
                    self.graph,
                    self.start.clone(),
                    path.edges,
                ));
                if found.len() == self.k {
                    break;
                }
                continue;
            }
            let hops_left = self.max_hops.saturating_sub(path.edges.len());
            if !self.can_reach(&path.vertices, end, hops_left)? {
                continue;
            }

            expanded += 1;
            for e in self.leaving_edges(tail)? {
                let w = opposite_vertex(self.graph, &e, tail);
                if path.vertices.contains(&w) {
                    continue;
                }
                let mut vertices = path.vertices.clone();
                vertices.push(w.clone());
                let mut edges = path.edges.clone();
                let weight = path.weight + self.graph.edge_weight(&e);
                edges.push(e);
                let mut rank_key = path.rank_key.clone();
                rank_key.push(self.position_of(&w));
                heap.push(Partial {
                    vertices,
                    edges,
                    weight,
                    rank_key,
                });
            }
        }

        tracing::trace!(
            expanded,
            found = found.len(),
            k = self.k,
            "k-shortest-paths finished"
        );
        Ok(found)
    }

    fn position_of(&self, v: &G::Vertex) -> usize {
        self.position.get(v).copied().unwrap_or(usize::MAX)
    }

    fn leaving_edges(&self, v: &G::Vertex) -> Result<Vec<G::Edge>> {
        if self.graph.is_directed() {
            self.graph.outgoing_edges_of(v)
        } else {
            self.graph.edges_of(v)
        }
    }

    /// Whether `end` is at most `hops` edges away from the tail of `path` when every other
    /// vertex of `path` is avoided.
    fn can_reach(&self, path: &[G::Vertex], end: &G::Vertex, hops: usize) -> Result<bool> {
        let Some(tail) = path.last() else {
            return Ok(false);
        };
        let mut seen: HashSet<G::Vertex> = path.iter().cloned().collect();
        let mut layer = vec![tail.clone()];
        for _ in 0..hops {
            let mut next = Vec::new();
            for u in &layer {
                for e in self.leaving_edges(u)? {
                    let w = opposite_vertex(self.graph, &e, u);
                    if w == *end {
                        return Ok(true);
                    }
                    if seen.insert(w.clone()) {
                        next.push(w);
                    }
                }
            }
            if next.is_empty() {
                break;
            }
            layer = next;
        }
        Ok(false)
    }
}

impl<G: Graph> fmt::Debug for KShortestPaths<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KShortestPaths")
            .field("start", &self.start)
            .field("k", &self.k)
            .field("max_hops", &self.max_hops)
            .finish_non_exhaustive()
    }
}

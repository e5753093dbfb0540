//! All-pairs shortest paths.

use super::GraphPath;
use crate::error::{GraphError, Result};
use crate::graph::Graph;
use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;

/// Floyd-Warshall over dense `V x V` matrices, computed at construction.
///
/// Besides the distance matrix it keeps, per pair, the intermediate vertex that last
/// improved the distance and the lightest direct edge; paths are rebuilt from those.
/// Negative cycles are not detected.
pub struct FloydWarshallShortestPaths<'g, G: Graph> {
    graph: &'g G,
    vertices: IndexSet<G::Vertex, FxBuildHasher>,
    dist: Vec<f64>,
    backtrace: Vec<Option<usize>>,
    direct: Vec<Option<G::Edge>>,
    diameter: f64,
    path_count: usize,
}

impl<'g, G: Graph> FloydWarshallShortestPaths<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        let vertices: IndexSet<G::Vertex, FxBuildHasher> = graph.vertices().collect();
        let n = vertices.len();
        let mut this = Self {
            graph,
            vertices,
            dist: vec![f64::INFINITY; n * n],
            backtrace: vec![None; n * n],
            direct: vec![None; n * n],
            diameter: 0.0,
            path_count: 0,
        };
        this.run();
        this
    }

    fn at(&self, i: usize, j: usize) -> usize {
        i * self.vertices.len() + j
    }

    fn run(&mut self) {
        let n = self.vertices.len();
        for i in 0..n {
            let ii = self.at(i, i);
            self.dist[ii] = 0.0;
        }

        let directed = self.graph.is_directed();
        for e in self.graph.edges() {
            let (Some(i), Some(j)) = (
                self.vertices.get_index_of(&self.graph.edge_source(&e)),
                self.vertices.get_index_of(&self.graph.edge_target(&e)),
            ) else {
                debug_assert!(false, "edge endpoint outside the vertex set");
                continue;
            };
            let w = self.graph.edge_weight(&e);
            let mut pairs = vec![(i, j)];
            if !directed && i != j {
                pairs.push((j, i));
            }
            for (a, b) in pairs {
                let ab = self.at(a, b);
                if w < self.dist[ab] {
                    self.dist[ab] = w;
                    self.direct[ab] = Some(e.clone());
                }
            }
        }

        for k in 0..n {
            for i in 0..n {
                let ik = self.dist[self.at(i, k)];
                if ik == f64::INFINITY {
                    continue;
                }
                for j in 0..n {
                    let candidate = ik + self.dist[self.at(k, j)];
                    let ij = self.at(i, j);
                    if candidate < self.dist[ij] {
                        self.dist[ij] = candidate;
                        self.backtrace[ij] = Some(k);
                    }
                }
            }
        }

        for i in 0..n {
            for j in 0..n {
                let d = self.dist[self.at(i, j)];
                if i != j && d.is_finite() {
                    self.path_count += 1;
                    self.diameter = self.diameter.max(d);
                }
            }
        }
        tracing::debug!(
            vertices = n,
            paths = self.path_count,
            diameter = self.diameter,
            "floyd-warshall finished"
        );
    }

    fn index_of(&self, v: &G::Vertex) -> Result<usize> {
        self.vertices
            .get_index_of(v)
            .ok_or_else(|| GraphError::vertex_not_found(v))
    }

    /// Largest finite distance between two vertices; `0.0` when there is none.
    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    /// Number of ordered pairs of distinct vertices connected by some path.
    pub fn shortest_paths_count(&self) -> usize {
        self.path_count
    }

    /// Infinite when `b` is unreachable from `a`.
    pub fn shortest_distance(&self, a: &G::Vertex, b: &G::Vertex) -> Result<f64> {
        let (i, j) = (self.index_of(a)?, self.index_of(b)?);
        Ok(self.dist[self.at(i, j)])
    }

    pub fn shortest_path(
        &self,
        a: &G::Vertex,
        b: &G::Vertex,
    ) -> Result<Option<GraphPath<G::Vertex, G::Edge>>> {
        let (i, j) = (self.index_of(a)?, self.index_of(b)?);
        Ok(self.path(i, j))
    }

    /// Shortest paths from `v` to every other vertex reachable from it, in vertex-set order.
    pub fn shortest_paths_from(&self, v: &G::Vertex) -> Result<Vec<GraphPath<G::Vertex, G::Edge>>> {
        let i = self.index_of(v)?;
        Ok((0..self.vertices.len())
            .filter(|&j| j != i)
            .filter_map(|j| self.path(i, j))
            .collect())
    }

    fn path(&self, i: usize, j: usize) -> Option<GraphPath<G::Vertex, G::Edge>> {
        if !self.dist[self.at(i, j)].is_finite() {
            return None;
        }
        let start = self.vertices.get_index(i)?.clone();
        if i == j {
            return Some(GraphPath::singleton(start));
        }

        let mut edges = Vec::new();
        let mut pending = vec![(i, j)];
        while let Some((a, b)) = pending.pop() {
            match self.backtrace[self.at(a, b)] {
                Some(k) => {
                    pending.push((k, b));
                    pending.push((a, k));
                }
                None => {
                    let Some(e) = self.direct[self.at(a, b)].clone() else {
                        debug_assert!(false, "finite distance without a direct edge");
                        return None;
                    };
                    edges.push(e);
                }
            }
        }
        Some(GraphPath::from_edges(self.graph, start, edges))
    }
}

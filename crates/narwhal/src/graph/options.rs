//! Graph construction policies.
//!
//! Options are fixed when a graph is built; nothing changes them afterwards.

/// Container used for the per-vertex adjacency lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeListKind {
    /// Plain vector: compact, linear-time removal. Fine for low-degree vertices.
    #[default]
    Vec,
    /// Hashed insertion-ordered set: constant-time removal and membership at the cost of
    /// extra memory per vertex.
    Indexed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphOptions {
    pub directed: bool,
    pub allow_loops: bool,
    pub allow_multiple_edges: bool,
    pub weighted: bool,
    pub edge_list: EdgeListKind,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            directed: true,
            allow_loops: false,
            allow_multiple_edges: false,
            weighted: false,
            edge_list: EdgeListKind::Vec,
        }
    }
}

impl GraphOptions {
    /// Undirected, no loops, no parallel edges.
    pub fn simple() -> Self {
        Self {
            directed: false,
            ..Default::default()
        }
    }

    /// Undirected, parallel edges, no loops.
    pub fn multigraph() -> Self {
        Self {
            directed: false,
            allow_multiple_edges: true,
            ..Default::default()
        }
    }

    /// Undirected, parallel edges and loops.
    pub fn pseudograph() -> Self {
        Self {
            directed: false,
            allow_loops: true,
            allow_multiple_edges: true,
            ..Default::default()
        }
    }

    /// Directed, no loops, no parallel edges.
    pub fn simple_directed() -> Self {
        Self::default()
    }

    /// Directed, loops allowed, no parallel edges.
    pub fn default_directed() -> Self {
        Self {
            allow_loops: true,
            ..Default::default()
        }
    }

    /// Directed, parallel edges, no loops.
    pub fn directed_multigraph() -> Self {
        Self {
            allow_multiple_edges: true,
            ..Default::default()
        }
    }

    /// Directed, parallel edges and loops.
    pub fn directed_pseudograph() -> Self {
        Self {
            allow_loops: true,
            allow_multiple_edges: true,
            ..Default::default()
        }
    }

    pub fn weighted(self) -> Self {
        Self {
            weighted: true,
            ..self
        }
    }

    pub fn with_edge_list(self, edge_list: EdgeListKind) -> Self {
        Self { edge_list, ..self }
    }
}

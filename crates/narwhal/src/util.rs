//! Free-standing helpers over the graph traits.

use crate::error::Result;
use crate::graph::{Graph, GraphMut};

/// The endpoint of `e` that is not `v`; `v` itself for a self-loop. Endpoints are read
/// through the graph, so reversed views report the reversed opposite.
pub fn opposite_vertex<G: Graph + ?Sized>(g: &G, e: &G::Edge, v: &G::Vertex) -> G::Vertex {
    let source = g.edge_source(e);
    if source == *v {
        g.edge_target(e)
    } else {
        debug_assert!(g.edge_target(e) == *v, "vertex is not an endpoint of the edge");
        source
    }
}

/// Adds `source` and `target` if needed, then an edge between them.
pub fn add_edge_with_vertices<G: GraphMut + ?Sized>(
    g: &mut G,
    source: G::Vertex,
    target: G::Vertex,
) -> Result<Option<G::Edge>> {
    g.add_vertex(source.clone())?;
    g.add_vertex(target.clone())?;
    g.add_edge(&source, &target)
}

/// Adds every vertex of `vertices`; `true` if any was new.
pub fn add_all_vertices<G, I>(g: &mut G, vertices: I) -> Result<bool>
where
    G: GraphMut + ?Sized,
    I: IntoIterator<Item = G::Vertex>,
{
    let mut modified = false;
    for v in vertices {
        modified |= g.add_vertex(v)?;
    }
    Ok(modified)
}

/// Copies the vertices and edges of `source` into `dest`, sharing the edge values.
/// `true` if `dest` changed.
pub fn add_graph<D, S>(dest: &mut D, source: &S) -> Result<bool>
where
    D: GraphMut + ?Sized,
    S: Graph<Vertex = D::Vertex, Edge = D::Edge> + ?Sized,
{
    let mut modified = add_all_vertices(dest, source.vertices())?;
    for e in source.edges() {
        modified |= dest.add_edge_value(e)?;
    }
    Ok(modified)
}

/// Neighbors of `v` over its incident edges, once per edge.
pub fn neighbor_list_of<G: Graph + ?Sized>(g: &G, v: &G::Vertex) -> Result<Vec<G::Vertex>> {
    Ok(g
        .edges_of(v)?
        .iter()
        .map(|e| opposite_vertex(g, e, v))
        .collect())
}

/// Sources of the edges entering `v`, once per edge.
pub fn predecessor_list_of<G: Graph + ?Sized>(g: &G, v: &G::Vertex) -> Result<Vec<G::Vertex>> {
    Ok(g
        .incoming_edges_of(v)?
        .iter()
        .map(|e| g.edge_source(e))
        .collect())
}

/// Targets of the edges leaving `v`, once per edge.
pub fn successor_list_of<G: Graph + ?Sized>(g: &G, v: &G::Vertex) -> Result<Vec<G::Vertex>> {
    Ok(g
        .outgoing_edges_of(v)?
        .iter()
        .map(|e| g.edge_target(e))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{BaseGraph, GraphOptions};

    #[test]
    fn add_graph_shares_edges() {
        let mut a: BaseGraph<u8> = BaseGraph::new(GraphOptions::simple());
        add_edge_with_vertices(&mut a, 1, 2).unwrap();
        add_edge_with_vertices(&mut a, 2, 3).unwrap();

        let mut b: BaseGraph<u8> = BaseGraph::new(GraphOptions::simple());
        assert!(add_graph(&mut b, &a).unwrap());
        assert_eq!(b.vertex_count(), 3);
        assert!(a.edges().all(|e| b.contains_edge(&e)));
        assert!(!add_graph(&mut b, &a).unwrap());
        assert_eq!(neighbor_list_of(&b, &2).unwrap(), vec![1, 3]);
    }
}

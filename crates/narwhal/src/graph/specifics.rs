//! Topology-specific adjacency bookkeeping.
//!
//! The storage core picks one variant at construction and forwards every adjacency query
//! to it, so call sites never branch on topology themselves. Callers check vertex
//! membership before calling in; the specifics assume the vertex exists.

use super::adjacency::{DirectedEdgeContainer, UndirectedEdgeContainer};
use super::options::EdgeListKind;
use crate::edge::{GraphEdge, VertexId};
use crate::error::{GraphError, Result};
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

type VertexMap<V, C> = IndexMap<V, Option<C>, FxBuildHasher>;

#[derive(Debug, Clone)]
pub(crate) enum Specifics<V, E> {
    Directed(DirectedSpecifics<V, E>),
    Undirected(UndirectedSpecifics<V, E>),
}

#[derive(Debug, Clone)]
pub(crate) struct DirectedSpecifics<V, E> {
    vertex_map: VertexMap<V, DirectedEdgeContainer<E>>,
    edge_list: EdgeListKind,
}

#[derive(Debug, Clone)]
pub(crate) struct UndirectedSpecifics<V, E> {
    vertex_map: VertexMap<V, UndirectedEdgeContainer<E>>,
    edge_list: EdgeListKind,
}

pub(crate) enum Vertices<'a, V, E> {
    Directed(indexmap::map::Keys<'a, V, Option<DirectedEdgeContainer<E>>>),
    Undirected(indexmap::map::Keys<'a, V, Option<UndirectedEdgeContainer<E>>>),
}

impl<'a, V, E> Iterator for Vertices<'a, V, E> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Vertices::Directed(it) => it.next(),
            Vertices::Undirected(it) => it.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Vertices::Directed(it) => it.size_hint(),
            Vertices::Undirected(it) => it.size_hint(),
        }
    }
}

fn is_loop<V: VertexId, E: GraphEdge<V>>(e: &E) -> bool {
    e.source() == e.target()
}

impl<V: VertexId, E: GraphEdge<V>> Specifics<V, E> {
    pub(crate) fn new(directed: bool, edge_list: EdgeListKind) -> Self {
        if directed {
            Specifics::Directed(DirectedSpecifics {
                vertex_map: IndexMap::default(),
                edge_list,
            })
        } else {
            Specifics::Undirected(UndirectedSpecifics {
                vertex_map: IndexMap::default(),
                edge_list,
            })
        }
    }

    pub(crate) fn is_directed(&self) -> bool {
        matches!(self, Specifics::Directed(_))
    }

    pub(crate) fn add_vertex(&mut self, v: V) -> bool {
        match self {
            Specifics::Directed(s) => add_vertex(&mut s.vertex_map, v),
            Specifics::Undirected(s) => add_vertex(&mut s.vertex_map, v),
        }
    }

    pub(crate) fn remove_vertex(&mut self, v: &V) -> bool {
        match self {
            Specifics::Directed(s) => s.vertex_map.shift_remove(v).is_some(),
            Specifics::Undirected(s) => s.vertex_map.shift_remove(v).is_some(),
        }
    }

    pub(crate) fn contains_vertex(&self, v: &V) -> bool {
        match self {
            Specifics::Directed(s) => s.vertex_map.contains_key(v),
            Specifics::Undirected(s) => s.vertex_map.contains_key(v),
        }
    }

    pub(crate) fn vertex_count(&self) -> usize {
        match self {
            Specifics::Directed(s) => s.vertex_map.len(),
            Specifics::Undirected(s) => s.vertex_map.len(),
        }
    }

    pub(crate) fn vertices(&self) -> Vertices<'_, V, E> {
        match self {
            Specifics::Directed(s) => Vertices::Directed(s.vertex_map.keys()),
            Specifics::Undirected(s) => Vertices::Undirected(s.vertex_map.keys()),
        }
    }

    pub(crate) fn get_edge(&self, source: &V, target: &V) -> Option<E> {
        match self {
            Specifics::Directed(s) => s
                .container(source)?
                .outgoing
                .iter()
                .find(|e| e.target() == target)
                .cloned(),
            Specifics::Undirected(s) => s
                .container(source)?
                .incident
                .iter()
                .find(|e| connects(*e, source, target))
                .cloned(),
        }
    }

    pub(crate) fn get_all_edges(&self, source: &V, target: &V) -> Vec<E> {
        match self {
            Specifics::Directed(s) => s.container(source).map_or_else(Vec::new, |c| {
                c.outgoing
                    .iter()
                    .filter(|e| e.target() == target)
                    .cloned()
                    .collect()
            }),
            Specifics::Undirected(s) => s.container(source).map_or_else(Vec::new, |c| {
                c.incident
                    .iter()
                    .filter(|e| connects(*e, source, target))
                    .cloned()
                    .collect()
            }),
        }
    }

    pub(crate) fn add_edge_to_touching_vertices(&mut self, e: &E) {
        match self {
            Specifics::Directed(s) => {
                if let Some(c) = s.container_mut(e.source()) {
                    c.outgoing.push(e.clone());
                }
                if let Some(c) = s.container_mut(e.target()) {
                    c.incoming.push(e.clone());
                }
            }
            Specifics::Undirected(s) => {
                if let Some(c) = s.container_mut(e.source()) {
                    c.incident.push(e.clone());
                }
                if !is_loop(e) {
                    if let Some(c) = s.container_mut(e.target()) {
                        c.incident.push(e.clone());
                    }
                }
            }
        }
    }

    pub(crate) fn remove_edge_from_touching_vertices(&mut self, e: &E) {
        match self {
            Specifics::Directed(s) => {
                if let Some(c) = s.container_mut(e.source()) {
                    c.outgoing.remove(e);
                }
                if let Some(c) = s.container_mut(e.target()) {
                    c.incoming.remove(e);
                }
            }
            Specifics::Undirected(s) => {
                if let Some(c) = s.container_mut(e.source()) {
                    c.incident.remove(e);
                }
                if !is_loop(e) {
                    if let Some(c) = s.container_mut(e.target()) {
                        c.incident.remove(e);
                    }
                }
            }
        }
    }

    /// Undirected degree; a self-loop counts twice.
    pub(crate) fn degree_of(&self, v: &V) -> Result<usize> {
        match self {
            Specifics::Directed(_) => Err(GraphError::unsupported("degree_of on a directed graph")),
            Specifics::Undirected(s) => Ok(s.container(v).map_or(0, |c| {
                c.incident
                    .iter()
                    .map(|e| if is_loop(e) { 2 } else { 1 })
                    .sum()
            })),
        }
    }

    pub(crate) fn in_degree_of(&self, v: &V) -> Result<usize> {
        match self {
            Specifics::Directed(s) => Ok(s.container(v).map_or(0, |c| c.incoming.len())),
            Specifics::Undirected(_) => {
                Err(GraphError::unsupported("in_degree_of on an undirected graph"))
            }
        }
    }

    pub(crate) fn out_degree_of(&self, v: &V) -> Result<usize> {
        match self {
            Specifics::Directed(s) => Ok(s.container(v).map_or(0, |c| c.outgoing.len())),
            Specifics::Undirected(_) => {
                Err(GraphError::unsupported("out_degree_of on an undirected graph"))
            }
        }
    }

    /// All edges touching `v`, each self-loop reported once.
    pub(crate) fn edges_of(&self, v: &V) -> Vec<E> {
        match self {
            Specifics::Directed(s) => {
                let Some(c) = s.container(v) else {
                    return Vec::new();
                };
                // A loop sits in both lists; keep the incoming copy only.
                let mut out: Vec<E> = Vec::with_capacity(c.incoming.len() + c.outgoing.len());
                out.extend(c.incoming.iter().cloned());
                out.extend(c.outgoing.iter().filter(|e| !is_loop(*e)).cloned());
                out
            }
            Specifics::Undirected(s) => s
                .container(v)
                .map_or_else(Vec::new, |c| c.incident.iter().cloned().collect()),
        }
    }

    pub(crate) fn incoming_edges_of(&self, v: &V) -> Result<Vec<E>> {
        match self {
            Specifics::Directed(s) => Ok(s.container(v).map_or_else(Vec::new, |c| {
                c.incoming.iter().cloned().collect()
            })),
            Specifics::Undirected(_) => Err(GraphError::unsupported(
                "incoming_edges_of on an undirected graph",
            )),
        }
    }

    pub(crate) fn outgoing_edges_of(&self, v: &V) -> Result<Vec<E>> {
        match self {
            Specifics::Directed(s) => Ok(s.container(v).map_or_else(Vec::new, |c| {
                c.outgoing.iter().cloned().collect()
            })),
            Specifics::Undirected(_) => Err(GraphError::unsupported(
                "outgoing_edges_of on an undirected graph",
            )),
        }
    }
}

fn add_vertex<V: VertexId, C>(map: &mut VertexMap<V, C>, v: V) -> bool {
    if map.contains_key(&v) {
        return false;
    }
    map.insert(v, None);
    true
}

fn connects<V: VertexId, E: GraphEdge<V>>(e: &E, a: &V, b: &V) -> bool {
    (e.source() == a && e.target() == b) || (e.source() == b && e.target() == a)
}

impl<V: VertexId, E: GraphEdge<V>> DirectedSpecifics<V, E> {
    fn container(&self, v: &V) -> Option<&DirectedEdgeContainer<E>> {
        self.vertex_map.get(v)?.as_ref()
    }

    fn container_mut(&mut self, v: &V) -> Option<&mut DirectedEdgeContainer<E>> {
        let kind = self.edge_list;
        let Some(slot) = self.vertex_map.get_mut(v) else {
            debug_assert!(false, "edge endpoint missing from vertex map");
            return None;
        };
        Some(slot.get_or_insert_with(|| DirectedEdgeContainer::new(kind)))
    }
}

impl<V: VertexId, E: GraphEdge<V>> UndirectedSpecifics<V, E> {
    fn container(&self, v: &V) -> Option<&UndirectedEdgeContainer<E>> {
        self.vertex_map.get(v)?.as_ref()
    }

    fn container_mut(&mut self, v: &V) -> Option<&mut UndirectedEdgeContainer<E>> {
        let kind = self.edge_list;
        let Some(slot) = self.vertex_map.get_mut(v) else {
            debug_assert!(false, "edge endpoint missing from vertex map");
            return None;
        };
        Some(slot.get_or_insert_with(|| UndirectedEdgeContainer::new(kind)))
    }
}

//! Per-vertex adjacency containers used by the specifics.
//!
//! Containers are created lazily: a vertex that no edge touches holds no container.

use super::options::EdgeListKind;
use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;
use std::hash::Hash;

#[derive(Debug, Clone)]
pub(crate) enum EdgeList<E> {
    Vec(Vec<E>),
    Indexed(IndexSet<E, FxBuildHasher>),
}

impl<E: Eq + Hash> EdgeList<E> {
    pub(crate) fn new(kind: EdgeListKind) -> Self {
        match kind {
            EdgeListKind::Vec => EdgeList::Vec(Vec::with_capacity(1)),
            EdgeListKind::Indexed => EdgeList::Indexed(IndexSet::default()),
        }
    }

    pub(crate) fn push(&mut self, edge: E) {
        match self {
            EdgeList::Vec(v) => v.push(edge),
            EdgeList::Indexed(s) => {
                s.insert(edge);
            }
        }
    }

    pub(crate) fn remove(&mut self, edge: &E) -> bool {
        match self {
            EdgeList::Vec(v) => match v.iter().position(|e| e == edge) {
                Some(ix) => {
                    v.remove(ix);
                    true
                }
                None => false,
            },
            EdgeList::Indexed(s) => s.shift_remove(edge),
        }
    }

    pub(crate) fn len(&self) -> usize {
        match self {
            EdgeList::Vec(v) => v.len(),
            EdgeList::Indexed(s) => s.len(),
        }
    }

    pub(crate) fn iter(&self) -> Box<dyn Iterator<Item = &E> + '_> {
        match self {
            EdgeList::Vec(v) => Box::new(v.iter()),
            EdgeList::Indexed(s) => Box::new(s.iter()),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct DirectedEdgeContainer<E> {
    pub(crate) incoming: EdgeList<E>,
    pub(crate) outgoing: EdgeList<E>,
}

impl<E: Eq + Hash> DirectedEdgeContainer<E> {
    pub(crate) fn new(kind: EdgeListKind) -> Self {
        Self {
            incoming: EdgeList::new(kind),
            outgoing: EdgeList::new(kind),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct UndirectedEdgeContainer<E> {
    pub(crate) incident: EdgeList<E>,
}

impl<E: Eq + Hash> UndirectedEdgeContainer<E> {
    pub(crate) fn new(kind: EdgeListKind) -> Self {
        Self {
            incident: EdgeList::new(kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_list_kinds_keep_insertion_order_on_removal() {
        for kind in [EdgeListKind::Vec, EdgeListKind::Indexed] {
            let mut list = EdgeList::new(kind);
            list.push(1);
            list.push(2);
            list.push(3);
            assert!(list.remove(&2));
            assert!(!list.remove(&2));
            assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
            assert_eq!(list.len(), 2);
        }
    }
}

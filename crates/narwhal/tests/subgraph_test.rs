use narwhal::listen::ListenableGraph;
use narwhal::view::Subgraph;
use narwhal::{BaseGraph, DefaultEdge, Graph, GraphEdge, GraphError, GraphMut, GraphOptions};
use std::cell::RefCell;
use std::rc::Rc;

type Base = ListenableGraph<BaseGraph<u32>>;

fn square() -> Rc<RefCell<Base>> {
    let mut g = ListenableGraph::new(BaseGraph::new(GraphOptions::simple()));
    for v in 1..=4 {
        g.add_vertex(v).unwrap();
    }
    for (s, t) in [(1, 2), (2, 3), (3, 4), (4, 1)] {
        g.add_edge(&s, &t).unwrap();
    }
    Rc::new(RefCell::new(g))
}

fn assert_subgraph_property(sub: &Subgraph<Base>, base: &Base) {
    for v in sub.vertices() {
        assert!(base.contains_vertex(&v));
    }
    for e in sub.edges() {
        assert!(base.contains_edge(&e));
        assert!(sub.contains_vertex(&sub.edge_source(&e)));
        assert!(sub.contains_vertex(&sub.edge_target(&e)));
    }
}

#[test]
fn vertex_filter_keeps_only_edges_between_kept_vertices() {
    let base = square();
    let keep = |v: &u32| *v != 4;
    let sub = Subgraph::with_filters(&base, Some(&keep), None).unwrap();

    assert_eq!(sub.vertices().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(sub.edge_count(), 2);
    assert!(sub.contains_edge_between(&1, &2));
    assert!(!sub.contains_edge_between(&3, &4));
    assert!(sub.is_listening());
    assert_subgraph_property(&sub, &base.borrow());
}

#[test]
fn edge_filter_is_applied_after_the_vertex_filter() {
    let base = square();
    let away_from_1 = |e: &DefaultEdge<u32>| *e.source() != 1 && *e.target() != 1;
    let sub = Subgraph::with_filters(&base, None, Some(&away_from_1)).unwrap();

    assert_eq!(sub.vertex_count(), 4);
    assert_eq!(sub.edge_count(), 2);
    assert_eq!(sub.degree_of(&1).unwrap(), 0);
}

#[test]
fn induced_subgraph_takes_every_edge_between_its_vertices() {
    let base = square();
    let sub = Subgraph::induced(&base, &[1, 2, 3, 9]).unwrap();
    assert_eq!(sub.vertex_count(), 3);
    assert_eq!(sub.edge_count(), 2);
}

#[test]
fn base_removals_cascade_into_the_subgraph() {
    let base = square();
    let sub = Subgraph::new(&base).unwrap();

    base.borrow_mut().remove_vertex(&2).unwrap();
    assert!(!sub.contains_vertex(&2));
    assert_eq!(sub.edge_count(), 2);

    let e = base.borrow().get_edge(&3, &4).unwrap();
    base.borrow_mut().remove_edge(&e).unwrap();
    assert!(!sub.contains_edge(&e));
    assert_subgraph_property(&sub, &base.borrow());
}

#[test]
fn base_additions_are_not_mirrored() {
    let base = square();
    let mut sub = Subgraph::new(&base).unwrap();

    base.borrow_mut().add_vertex(5).unwrap();
    base.borrow_mut().add_edge(&4, &5).unwrap();
    assert!(!sub.contains_vertex(&5));

    assert!(sub.add_vertex(5).unwrap());
    assert!(sub.add_edge(&4, &5).unwrap().is_some());
    assert!(sub.add_edge(&5, &4).unwrap().is_none());
    assert_subgraph_property(&sub, &base.borrow());
}

#[test]
fn additions_must_come_from_the_base() {
    let base = square();
    let keep = |v: &u32| *v < 3;
    let mut sub = Subgraph::with_filters(&base, Some(&keep), None).unwrap();

    let err = sub.add_vertex(7).unwrap_err();
    assert!(matches!(err, GraphError::VertexNotFound { .. }));
    assert!(sub.add_edge(&1, &3).unwrap_err().is_invalid_argument());

    sub.add_vertex(3).unwrap();
    let err = sub.add_edge(&1, &3).unwrap_err();
    assert!(matches!(err, GraphError::InvalidArgument { .. }));
    assert!(sub.add_edge(&2, &3).unwrap().is_some());
}

#[test]
fn subgraph_removals_leave_the_base_alone() {
    let base = square();
    let mut sub = Subgraph::new(&base).unwrap();

    sub.remove_vertex(&1).unwrap();
    sub.remove_edge_between(&2, &3).unwrap();

    assert_eq!(sub.vertex_count(), 3);
    assert_eq!(sub.edge_count(), 1);
    assert_eq!(base.borrow().vertex_count(), 4);
    assert_eq!(base.borrow().edge_count(), 4);
}

#[test]
fn dropping_the_subgraph_unregisters_it() {
    let base = square();
    let sub = Subgraph::new(&base).unwrap();
    assert_eq!(base.borrow().graph_listener_count(), 1);
    drop(sub);
    assert_eq!(base.borrow().graph_listener_count(), 0);
}

#[test]
fn subgraph_outlives_its_base_for_reads_only() {
    let base = square();
    let mut sub = Subgraph::new(&base).unwrap();
    drop(base);

    assert_eq!(sub.vertex_count(), 4);
    assert!(matches!(sub.base(), Err(GraphError::BaseGraphDropped)));
    assert!(matches!(
        sub.add_vertex(1),
        Err(GraphError::BaseGraphDropped)
    ));
    assert!(sub.remove_vertex(&1).unwrap());
}

#[test]
fn plain_base_is_a_static_snapshot() {
    let mut g: BaseGraph<u32> = BaseGraph::new(GraphOptions::simple_directed());
    g.add_vertex(1).unwrap();
    g.add_vertex(2).unwrap();
    g.add_edge(&1, &2).unwrap();
    let base = Rc::new(RefCell::new(g));
    let sub = Subgraph::new(&base).unwrap();
    assert!(!sub.is_listening());

    base.borrow_mut().remove_vertex(&2).unwrap();
    assert!(sub.contains_vertex(&2));
    assert!(sub.is_directed());
    assert_eq!(sub.out_degree_of(&1).unwrap(), 1);
}

#[test]
fn nested_subgraphs_follow_their_own_base() {
    let base = square();
    let outer = Rc::new(RefCell::new(Subgraph::new(&base).unwrap()));
    let inner = Subgraph::induced(&outer, &[1, 2]).unwrap();
    assert_eq!(inner.edge_count(), 1);

    outer.borrow_mut().remove_vertex(&2).unwrap();
    // The outer subgraph fires no events, so the inner one keeps its snapshot.
    assert!(inner.contains_vertex(&2));
}

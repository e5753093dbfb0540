use narwhal::listen::{Listenable, ListenableGraph};
use narwhal::view::{AsUndirected, EdgeReversed, GraphDelegator, UnmodifiableGraph};
use narwhal::{BaseGraph, ErrorKind, Graph, GraphMut, GraphOptions};

fn chain() -> BaseGraph<u32> {
    let mut g = BaseGraph::new(GraphOptions::simple_directed());
    for v in 1..=3 {
        g.add_vertex(v).unwrap();
    }
    g.add_edge(&1, &2).unwrap();
    g.add_edge(&2, &3).unwrap();
    g
}

#[test]
fn delegator_forwards_reads_and_writes() {
    let mut view = GraphDelegator::new(chain());
    assert!(view.is_directed());
    assert_eq!(view.vertex_count(), 3);
    assert_eq!(view.out_degree_of(&1).unwrap(), 1);

    view.add_vertex(4).unwrap();
    view.add_edge(&3, &4).unwrap();
    assert_eq!(view.inner().edge_count(), 3);
    assert_eq!(view.into_inner().vertex_count(), 4);
}

#[test]
fn delegator_exposes_the_listener_registry_of_its_graph() {
    let mut plain = GraphDelegator::new(chain());
    assert!(plain.as_listenable().is_none());

    let mut listening = GraphDelegator::new(ListenableGraph::new(chain()));
    assert!(listening.as_listenable().is_some());
}

#[test]
fn unmodifiable_view_rejects_every_mutation() {
    let g = chain();
    let mut view = UnmodifiableGraph::new(&g);
    let e = g.get_edge(&1, &2).unwrap();

    let results = [
        view.add_vertex(9).map(|_| ()),
        view.add_edge(&1, &3).map(|_| ()),
        view.add_edge_value(e.clone()).map(|_| ()),
        view.remove_vertex(&1).map(|_| ()),
        view.remove_edge(&e).map(|_| ()),
        view.remove_edge_between(&1, &2).map(|_| ()),
        view.remove_all_edges(std::slice::from_ref(&e)).map(|_| ()),
        view.remove_all_vertices(&[1]).map(|_| ()),
        view.set_edge_weight(&e, 2.0),
    ];
    for r in results {
        assert_eq!(r.unwrap_err().kind(), ErrorKind::Unsupported);
    }
    assert_eq!(view.vertex_count(), 3);
    assert_eq!(view.edge_count(), 2);
    assert_eq!(view.get_edge(&1, &2), Some(e));
}

#[test]
fn as_undirected_matches_edges_in_both_directions() {
    let g = chain();
    let view = AsUndirected::new(&g).unwrap();
    let e = g.get_edge(&1, &2).unwrap();

    assert!(!view.is_directed());
    assert_eq!(view.get_edge(&2, &1), Some(e.clone()));
    assert_eq!(view.get_all_edges(&2, &1), vec![e]);
    assert_eq!(view.degree_of(&2).unwrap(), 2);
    assert_eq!(view.edges_of(&2).unwrap().len(), 2);
}

#[test]
fn as_undirected_rejects_directed_queries_and_edge_addition() {
    let mut view = AsUndirected::new(chain()).unwrap();

    assert!(view.in_degree_of(&1).unwrap_err().is_unsupported());
    assert!(view.out_degree_of(&1).unwrap_err().is_unsupported());
    assert!(view.incoming_edges_of(&1).unwrap_err().is_unsupported());
    assert!(view.outgoing_edges_of(&1).unwrap_err().is_unsupported());
    assert!(view.add_edge(&1, &3).unwrap_err().is_unsupported());

    assert!(view.remove_edge_between(&2, &1).unwrap().is_some());
    assert_eq!(view.inner().edge_count(), 1);
}

#[test]
fn reversed_view_swaps_directions() {
    let g = chain();
    let view = EdgeReversed::new(&g).unwrap();
    let e = g.get_edge(&1, &2).unwrap();

    assert!(view.contains_edge_between(&2, &1));
    assert!(!view.contains_edge_between(&1, &2));
    assert_eq!(view.edge_source(&e), 2);
    assert_eq!(view.edge_target(&e), 1);
    assert_eq!(view.out_degree_of(&3).unwrap(), 1);
    assert_eq!(view.in_degree_of(&3).unwrap(), 0);
    assert_eq!(view.outgoing_edges_of(&2).unwrap(), vec![e]);
}

#[test]
fn reversed_view_requires_a_directed_graph() {
    let g: BaseGraph<u32> = BaseGraph::new(GraphOptions::simple());
    assert!(EdgeReversed::new(&g).unwrap_err().is_invalid_argument());
}

#[test]
fn views_compose() {
    let g = chain();
    let reversed = EdgeReversed::new(&g).unwrap();
    let view = UnmodifiableGraph::new(AsUndirected::new(&reversed).unwrap());
    assert_eq!(view.degree_of(&2).unwrap(), 2);
    assert!(view.contains_edge_between(&3, &2));
}

use narwhal::alg::{ConnectivityInspector, StrongConnectivityInspector, tarjan_components};
use narwhal::listen::{Listenable, ListenableGraph};
use narwhal::{BaseGraph, Graph, GraphMut, GraphOptions, VertexSet};
use std::cell::RefCell;
use std::rc::Rc;

fn directed(vertices: u32, edges: &[(u32, u32)]) -> BaseGraph<u32> {
    let mut g = BaseGraph::new(GraphOptions::default_directed());
    for v in 1..=vertices {
        g.add_vertex(v).unwrap();
    }
    for (s, t) in edges {
        g.add_edge(s, t).unwrap();
    }
    g
}

fn sorted(sets: &[VertexSet<u32>]) -> Vec<Vec<u32>> {
    let mut out: Vec<Vec<u32>> = sets
        .iter()
        .map(|s| {
            let mut v: Vec<u32> = s.iter().copied().collect();
            v.sort();
            v
        })
        .collect();
    out.sort();
    out
}

#[test]
fn triangle_stays_connected_until_every_edge_is_gone() {
    let mut g = ListenableGraph::new(BaseGraph::new(GraphOptions::simple()));
    for v in ["A", "B", "C"] {
        g.add_vertex(v).unwrap();
    }
    g.add_edge(&"A", &"B").unwrap();
    g.add_edge(&"B", &"C").unwrap();
    g.add_edge(&"C", &"A").unwrap();

    let inspector = Rc::new(RefCell::new(ConnectivityInspector::<&str>::new()));
    g.add_graph_listener(inspector.clone());
    assert!(inspector.borrow_mut().is_graph_connected(&g).unwrap());

    g.remove_edge_between(&"A", &"B").unwrap();
    assert!(inspector.borrow_mut().is_graph_connected(&g).unwrap());
    assert!(inspector.borrow_mut().path_exists(&g, &"A", &"B").unwrap());

    let edges: Vec<_> = g.edges().collect();
    g.remove_all_edges(&edges).unwrap();
    let mut inspector = inspector.borrow_mut();
    assert!(!inspector.is_graph_connected(&g).unwrap());
    assert_eq!(inspector.connected_sets(&g).unwrap().len(), 3);
    for set in inspector.connected_sets(&g).unwrap() {
        assert_eq!(set.len(), 1);
    }
}

#[test]
fn unregistered_inspector_keeps_its_snapshot() {
    let mut g: BaseGraph<u32> = BaseGraph::new(GraphOptions::simple());
    g.add_vertex(1).unwrap();
    g.add_vertex(2).unwrap();
    g.add_edge(&1, &2).unwrap();

    let mut inspector = ConnectivityInspector::new();
    assert!(inspector.is_graph_connected(&g).unwrap());
    g.remove_edge_between(&1, &2).unwrap();
    assert!(inspector.is_graph_connected(&g).unwrap());
    inspector.invalidate();
    assert!(!inspector.is_graph_connected(&g).unwrap());
}

#[test]
fn directed_graphs_are_weakly_connected() {
    let g = directed(5, &[(1, 2), (3, 2), (4, 5)]);
    let mut inspector = ConnectivityInspector::new();

    assert_eq!(
        sorted(inspector.connected_sets(&g).unwrap()),
        vec![vec![1, 2, 3], vec![4, 5]]
    );
    let of_3: Vec<u32> = inspector
        .connected_set_of(&g, &3)
        .unwrap()
        .iter()
        .copied()
        .collect();
    assert_eq!(of_3.len(), 3);
    assert!(inspector.path_exists(&g, &3, &1).unwrap());
    assert!(!inspector.path_exists(&g, &1, &4).unwrap());
    assert!(inspector.connected_set_of(&g, &9).is_err());
}

#[test]
fn empty_graph_is_not_connected() {
    let g: BaseGraph<u32> = BaseGraph::new(GraphOptions::simple());
    let mut inspector = ConnectivityInspector::new();
    assert!(!inspector.is_graph_connected(&g).unwrap());
    assert!(inspector.connected_sets(&g).unwrap().is_empty());
}

#[test]
fn strongly_connected_sets_of_two_cycles_and_a_tail() {
    let g = directed(6, &[(1, 2), (2, 3), (3, 1), (3, 4), (4, 5), (5, 4), (5, 6)]);
    let mut inspector = StrongConnectivityInspector::new();

    assert_eq!(
        sorted(inspector.strongly_connected_sets(&g).unwrap()),
        vec![vec![1, 2, 3], vec![4, 5], vec![6]]
    );
    assert!(!inspector.is_strongly_connected(&g).unwrap());
}

#[test]
fn kosaraju_and_tarjan_agree() {
    let g = directed(
        8,
        &[
            (1, 2),
            (2, 3),
            (3, 4),
            (4, 2),
            (4, 5),
            (5, 6),
            (6, 7),
            (7, 5),
            (8, 8),
            (8, 1),
        ],
    );
    let mut inspector = StrongConnectivityInspector::new();
    let kosaraju = sorted(inspector.strongly_connected_sets(&g).unwrap());
    let tarjan = sorted(&tarjan_components(&g).unwrap());
    assert_eq!(kosaraju, tarjan);
    assert_eq!(
        kosaraju,
        vec![vec![1], vec![2, 3, 4], vec![5, 6, 7], vec![8]]
    );
}

#[test]
fn tarjan_handles_long_chains() {
    const N: u32 = 200_000;
    let chain: Vec<(u32, u32)> = (1..N).map(|v| (v, v + 1)).collect();
    let g = directed(N, &chain);
    let sets = tarjan_components(&g).unwrap();
    assert_eq!(sets.len(), N as usize);
    assert_eq!(sets[0].get_index(0), Some(&N));
    assert_eq!(sets[sets.len() - 1].get_index(0), Some(&1));

    let mut ring = chain;
    ring.push((N, 1));
    let g = directed(N, &ring);
    let sets = tarjan_components(&g).unwrap();
    assert_eq!(sets.len(), 1);
    assert_eq!(sets[0].len(), N as usize);
    let mut inspector = StrongConnectivityInspector::new();
    assert!(inspector.is_strongly_connected(&g).unwrap());
}

#[test]
fn strong_connectivity_needs_a_directed_graph() {
    let g: BaseGraph<u32> = BaseGraph::new(GraphOptions::simple());
    let mut inspector = StrongConnectivityInspector::new();
    assert!(inspector
        .strongly_connected_sets(&g)
        .unwrap_err()
        .is_invalid_argument());
    assert!(tarjan_components(&g).unwrap_err().is_invalid_argument());
}

#[test]
fn strong_inspector_follows_mutations_when_registered() {
    let mut g = ListenableGraph::new(directed(3, &[(1, 2), (2, 3)]));
    let inspector = Rc::new(RefCell::new(StrongConnectivityInspector::<u32>::new()));
    g.add_graph_listener(inspector.clone());

    assert!(!inspector.borrow_mut().is_strongly_connected(&g).unwrap());
    g.add_edge(&3, &1).unwrap();
    assert!(inspector.borrow_mut().is_strongly_connected(&g).unwrap());
}

#[test]
fn strongly_connected_subgraphs_are_live_views() {
    let base = Rc::new(RefCell::new(ListenableGraph::new(directed(
        4,
        &[(1, 2), (2, 1), (2, 3), (3, 4), (4, 3)],
    ))));
    let mut inspector = StrongConnectivityInspector::new();
    let subgraphs = inspector.strongly_connected_subgraphs(&base).unwrap();

    assert_eq!(subgraphs.len(), 2);
    for sub in &subgraphs {
        assert_eq!(sub.vertex_count(), 2);
        assert_eq!(sub.edge_count(), 2);
    }

    base.borrow_mut().remove_vertex(&4).unwrap();
    let sizes: Vec<usize> = subgraphs.iter().map(|s| s.vertex_count()).collect();
    assert_eq!(sizes.iter().sum::<usize>(), 3);
}

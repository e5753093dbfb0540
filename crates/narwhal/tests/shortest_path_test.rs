use narwhal::alg::{
    BellmanFordShortestPath, DijkstraShortestPath, FloydWarshallShortestPaths, GraphPath,
    KShortestPaths,
};
use narwhal::{BaseGraph, DefaultEdge, GraphError, GraphMut, GraphOptions};

type Path = GraphPath<u32, DefaultEdge<u32>>;

fn weighted(options: GraphOptions, vertices: u32, edges: &[(u32, u32, f64)]) -> BaseGraph<u32> {
    let mut g = BaseGraph::new(options.weighted());
    for v in 1..=vertices {
        g.add_vertex(v).unwrap();
    }
    for &(s, t, w) in edges {
        let e = g.add_edge(&s, &t).unwrap().unwrap();
        g.set_edge_weight(&e, w).unwrap();
    }
    g
}

fn directed(vertices: u32, edges: &[(u32, u32, f64)]) -> BaseGraph<u32> {
    weighted(GraphOptions::simple_directed(), vertices, edges)
}

fn assert_simple(path: &Path) {
    let vertices = path.vertex_list();
    for (i, v) in vertices.iter().enumerate() {
        assert!(!vertices[i + 1..].contains(v), "{vertices:?} repeats {v}");
    }
}

#[test]
fn dijkstra_keeps_the_first_discovered_of_equal_routes() {
    let orderings: [&[(u32, u32, f64)]; 2] = [
        &[(1, 2, 2.0), (1, 3, 3.0), (2, 3, 1.0)],
        &[(2, 3, 1.0), (1, 3, 3.0), (1, 2, 2.0)],
    ];
    // Relaxation needs a strict improvement, so the route via 2 only ties the direct edge
    // found when 1 is expanded and never replaces it.
    for edges in orderings {
        let g = directed(3, edges);
        let path = DijkstraShortestPath::find_path_between(&g, &1, &3)
            .unwrap()
            .unwrap();
        assert_eq!(path.weight(), 3.0);
        assert_eq!(path.vertex_list(), &[1, 3]);
    }
}

#[test]
fn dijkstra_finds_the_cheaper_detour() {
    let g = directed(4, &[(1, 2, 1.0), (2, 3, 1.0), (1, 3, 5.0), (3, 4, 1.0)]);
    let path = DijkstraShortestPath::find_path_between(&g, &1, &4)
        .unwrap()
        .unwrap();
    assert_eq!(path.vertex_list(), &[1, 2, 3, 4]);
    assert_eq!(path.weight(), 3.0);
    assert_eq!(path.len(), 3);
    assert_eq!(*path.start_vertex(), 1);
    assert_eq!(*path.end_vertex(), 4);
}

#[test]
fn dijkstra_reports_unreachable_and_missing_vertices() {
    let g = directed(3, &[(1, 2, 1.0)]);
    assert!(DijkstraShortestPath::find_path_between(&g, &2, &1)
        .unwrap()
        .is_none());
    let err = DijkstraShortestPath::find_path_between(&g, &1, &9).unwrap_err();
    assert!(matches!(err, GraphError::VertexNotFound { .. }));
}

#[test]
fn dijkstra_path_to_self_is_empty() {
    let g = directed(2, &[(1, 2, 1.0)]);
    let path = DijkstraShortestPath::find_path_between(&g, &1, &1)
        .unwrap()
        .unwrap();
    assert!(path.is_empty());
    assert_eq!(path.weight(), 0.0);
    assert_eq!(path.vertex_list(), &[1]);
}

#[test]
fn dijkstra_respects_the_radius() {
    let g = directed(3, &[(1, 2, 2.0), (2, 3, 2.0)]);
    let dijkstra = DijkstraShortestPath::new(&g).with_radius(3.0);
    assert_eq!(dijkstra.radius(), 3.0);
    assert!(dijkstra.path_between(&1, &2).unwrap().is_some());
    assert!(dijkstra.path_between(&1, &3).unwrap().is_none());
}

#[test]
fn dijkstra_rejects_negative_weights() {
    let g = directed(2, &[(1, 2, -1.0)]);
    let err = DijkstraShortestPath::find_path_between(&g, &1, &2).unwrap_err();
    assert!(matches!(err, GraphError::NegativeEdgeWeight { .. }));
    assert!(err.is_invalid_argument());
}

#[test]
fn dijkstra_walks_undirected_edges_both_ways() {
    let g = weighted(GraphOptions::simple(), 3, &[(2, 1, 1.0), (3, 2, 1.0)]);
    let path = DijkstraShortestPath::find_path_between(&g, &1, &3)
        .unwrap()
        .unwrap();
    assert_eq!(path.vertex_list(), &[1, 2, 3]);
}

#[test]
fn bellman_ford_matches_dijkstra_without_negative_edges() {
    let g = directed(
        5,
        &[
            (1, 2, 4.0),
            (1, 3, 1.0),
            (3, 2, 2.0),
            (2, 4, 1.0),
            (3, 5, 7.0),
            (4, 5, 1.0),
        ],
    );
    let bf = BellmanFordShortestPath::new(&g, &1).unwrap();
    for target in 2..=5 {
        let expected = DijkstraShortestPath::find_path_between(&g, &1, &target)
            .unwrap()
            .unwrap();
        let actual = bf.path_to(&target).unwrap().unwrap();
        assert_eq!(actual.vertex_list(), expected.vertex_list());
        assert_eq!(actual.weight(), expected.weight());
        assert_eq!(bf.cost(&target).unwrap(), expected.weight());
    }
}

#[test]
fn bellman_ford_agrees_with_dijkstra_when_the_negative_edge_is_off_route() {
    let edges = |w: f64| [(1, 2, 1.0), (2, 3, 1.0), (1, 4, 2.0), (4, 2, w)];
    let negative = directed(4, &edges(-0.5));
    let positive = directed(4, &edges(0.5));

    let bf = BellmanFordShortestPath::find_path_between(&negative, &1, &3)
        .unwrap()
        .unwrap();
    let dijkstra = DijkstraShortestPath::find_path_between(&positive, &1, &3)
        .unwrap()
        .unwrap();
    assert_eq!(bf.vertex_list(), dijkstra.vertex_list());
    assert_eq!(bf.weight(), dijkstra.weight());
}

#[test]
fn bellman_ford_takes_the_negative_edge_on_the_optimal_route() {
    let g = directed(4, &[(1, 2, 4.0), (1, 3, 5.0), (3, 2, -3.0), (2, 4, 1.0)]);
    let bf = BellmanFordShortestPath::new(&g, &1).unwrap();

    let path = bf.path_to(&4).unwrap().unwrap();
    assert_eq!(path.vertex_list(), &[1, 3, 2, 4]);
    assert_eq!(path.weight(), 3.0);
    assert_eq!(bf.cost(&2).unwrap(), 2.0);
    assert_eq!(*bf.source(), 1);
    assert_eq!(bf.passes(), 3);
}

#[test]
fn bellman_ford_unreachable_is_infinite() {
    let g = directed(3, &[(1, 2, 1.0)]);
    let bf = BellmanFordShortestPath::new(&g, &1).unwrap();
    assert_eq!(bf.cost(&3).unwrap(), f64::INFINITY);
    assert!(bf.path_to(&3).unwrap().is_none());
    assert!(BellmanFordShortestPath::new(&g, &9).is_err());
}

#[test]
fn bellman_ford_hop_bound_limits_path_length() {
    let g = directed(4, &[(1, 2, 1.0), (2, 3, 1.0), (3, 4, 1.0), (1, 4, 10.0)]);
    let bounded = BellmanFordShortestPath::with_max_hops(&g, &1, 2).unwrap();
    assert_eq!(bounded.cost(&4).unwrap(), 10.0);

    let full = BellmanFordShortestPath::new(&g, &1).unwrap();
    assert_eq!(full.cost(&4).unwrap(), 3.0);
}

#[test]
fn bellman_ford_reports_a_negative_cycle_in_the_predecessor_chain() {
    let g = directed(3, &[(1, 2, 1.0), (2, 3, -2.0), (3, 2, 1.0)]);
    let bf = BellmanFordShortestPath::with_max_hops(&g, &1, 5).unwrap();
    let err = bf.path_to(&3).unwrap_err();
    assert!(matches!(err, GraphError::NegativeCycle { .. }));
}

#[test]
fn k_shortest_paths_on_a_complete_graph() {
    let mut g: BaseGraph<u32> = BaseGraph::new(GraphOptions::simple());
    for v in 1..=4 {
        g.add_vertex(v).unwrap();
    }
    for s in 1..=4 {
        for t in s + 1..=4 {
            g.add_edge(&s, &t).unwrap();
        }
    }

    let ksp = KShortestPaths::new(&g, &1, 3).unwrap();
    assert_eq!(ksp.k(), 3);
    let paths = ksp.paths(&4).unwrap();
    assert_eq!(paths.len(), 3);
    for pair in paths.windows(2) {
        assert!(pair[0].weight() <= pair[1].weight());
    }
    for p in &paths {
        assert_simple(p);
        assert_eq!(*p.start_vertex(), 1);
        assert_eq!(*p.end_vertex(), 4);
    }
    let vertices: Vec<&[u32]> = paths.iter().map(|p| p.vertex_list()).collect();
    assert_eq!(vertices, vec![&[1, 4][..], &[1, 2, 4], &[1, 3, 4]]);
}

#[test]
fn k_shortest_paths_rank_by_weight() {
    let g = directed(
        4,
        &[
            (1, 2, 1.0),
            (2, 4, 1.0),
            (1, 3, 1.0),
            (3, 4, 3.0),
            (1, 4, 5.0),
            (2, 3, 1.0),
        ],
    );
    let ksp = KShortestPaths::new(&g, &1, 5).unwrap();
    let weights: Vec<f64> = ksp.paths(&4).unwrap().iter().map(|p| p.weight()).collect();
    assert_eq!(weights, vec![2.0, 4.0, 5.0, 5.0]);
}

#[test]
fn k_shortest_paths_argument_checks() {
    let g = directed(3, &[(1, 2, 1.0)]);
    assert!(KShortestPaths::new(&g, &1, 0).unwrap_err().is_invalid_argument());
    assert!(KShortestPaths::new(&g, &9, 1).unwrap_err().is_invalid_argument());

    let ksp = KShortestPaths::new(&g, &1, 2).unwrap();
    assert!(ksp.paths(&1).unwrap_err().is_invalid_argument());
    assert!(ksp.paths(&3).unwrap().is_empty());
}

#[test]
fn k_shortest_paths_keep_prefixes_that_later_paths_need() {
    // Both paths into 4 that 4 would rank first run through 5, so the only way on from 4
    // to 5 starts with the worse prefix 1 -> 3 -> 2 -> 4.
    let g = directed(
        5,
        &[
            (1, 5, 0.0),
            (1, 3, 6.0),
            (3, 2, 8.0),
            (2, 4, 6.0),
            (4, 5, 2.0),
            (5, 4, 7.0),
            (5, 2, 2.0),
        ],
    );
    let ksp = KShortestPaths::new(&g, &1, 2).unwrap();
    let paths = ksp.paths(&5).unwrap();
    let weights: Vec<f64> = paths.iter().map(|p| p.weight()).collect();
    assert_eq!(weights, vec![0.0, 22.0]);
    assert_eq!(paths[1].vertex_list(), &[1, 3, 2, 4, 5]);
}

#[test]
fn k_shortest_paths_reject_negative_weights() {
    let g = directed(3, &[(1, 2, 1.0), (2, 3, -1.0)]);
    assert!(KShortestPaths::new(&g, &1, 2).unwrap_err().is_invalid_argument());
}

struct Lcg(u64);

impl Lcg {
    fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }
}

type Ranked = Vec<(f64, Vec<u32>)>;

/// Every simple path from `start` to `end` with at most `max_hops` edges, best first.
fn enumerate_simple_paths(
    n: u32,
    edges: &[(u32, u32, f64)],
    undirected: bool,
    start: u32,
    end: u32,
    max_hops: usize,
) -> Ranked {
    fn walk(
        adj: &[Vec<(u32, f64)>],
        end: u32,
        max_hops: usize,
        path: &mut Vec<u32>,
        weight: f64,
        out: &mut Ranked,
    ) {
        let tail = *path.last().unwrap();
        if tail == end {
            out.push((weight, path.clone()));
            return;
        }
        if path.len() > max_hops {
            return;
        }
        for &(w, c) in &adj[tail as usize] {
            if path.contains(&w) {
                continue;
            }
            path.push(w);
            walk(adj, end, max_hops, path, weight + c, out);
            path.pop();
        }
    }

    let mut adj = vec![Vec::new(); n as usize + 1];
    for &(s, t, w) in edges {
        adj[s as usize].push((t, w));
        if undirected {
            adj[t as usize].push((s, w));
        }
    }
    let mut out = Vec::new();
    walk(&adj, end, max_hops, &mut vec![start], 0.0, &mut out);
    out.sort_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
    out
}

#[test]
fn k_shortest_paths_match_exhaustive_enumeration() {
    const N: u32 = 6;
    let mut rng = Lcg(0x5eed);
    for round in 0..300 {
        let undirected = round % 3 == 0;
        let mut edges = Vec::new();
        for s in 1..=N {
            for t in 1..=N {
                let wanted = if undirected { s < t } else { s != t };
                if wanted && rng.next_u64() % 100 < 40 {
                    edges.push((s, t, (rng.next_u64() % 10) as f64));
                }
            }
        }
        let options = if undirected {
            GraphOptions::simple()
        } else {
            GraphOptions::simple_directed()
        };
        let g = weighted(options, N, &edges);

        for k in [1, 2, 3, 5] {
            for max_hops in [N as usize - 1, 3] {
                let ksp = KShortestPaths::with_max_hops(&g, &1, k, max_hops).unwrap();
                for end in 2..=N {
                    let got: Ranked = ksp
                        .paths(&end)
                        .unwrap()
                        .iter()
                        .map(|p| (p.weight(), p.vertex_list().to_vec()))
                        .collect();
                    let mut expected =
                        enumerate_simple_paths(N, &edges, undirected, 1, end, max_hops);
                    expected.truncate(k);
                    assert_eq!(
                        got, expected,
                        "k={k} max_hops={max_hops} end={end} undirected={undirected} edges={edges:?}"
                    );
                }
            }
        }
    }
}

#[test]
fn floyd_warshall_all_pairs() {
    let g = directed(4, &[(1, 2, 1.0), (2, 3, 2.0), (1, 3, 5.0)]);
    let fw = FloydWarshallShortestPaths::new(&g);

    assert_eq!(fw.shortest_distance(&1, &3).unwrap(), 3.0);
    assert_eq!(fw.shortest_distance(&3, &1).unwrap(), f64::INFINITY);
    assert_eq!(fw.diameter(), 3.0);
    assert_eq!(fw.shortest_paths_count(), 3);

    let path = fw.shortest_path(&1, &3).unwrap().unwrap();
    assert_eq!(path.vertex_list(), &[1, 2, 3]);
    assert_eq!(path.weight(), 3.0);
    assert!(fw.shortest_path(&3, &1).unwrap().is_none());
    assert!(fw.shortest_path(&4, &4).unwrap().unwrap().is_empty());
    assert_eq!(fw.shortest_paths_from(&1).unwrap().len(), 2);
    assert!(fw.shortest_distance(&1, &9).is_err());
}

#[test]
fn floyd_warshall_agrees_with_dijkstra_on_undirected_graphs() {
    let g = weighted(
        GraphOptions::simple(),
        5,
        &[(1, 2, 2.0), (2, 3, 2.0), (1, 3, 5.0), (3, 4, 1.0), (4, 5, 1.0), (5, 1, 7.0)],
    );
    let fw = FloydWarshallShortestPaths::new(&g);
    for a in 1..=5 {
        for b in 1..=5 {
            let expected = DijkstraShortestPath::find_path_between(&g, &a, &b)
                .unwrap()
                .unwrap()
                .weight();
            assert_eq!(fw.shortest_distance(&a, &b).unwrap(), expected);
        }
    }
}

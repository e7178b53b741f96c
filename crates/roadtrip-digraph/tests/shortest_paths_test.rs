use roadtrip_digraph::{Digraph, Error, VertexId};
use std::collections::BTreeMap;

const A: VertexId = 1;
const B: VertexId = 2;
const C: VertexId = 3;
const D: VertexId = 4;

fn graph(vertices: &[VertexId], edges: &[(VertexId, VertexId, f64)]) -> Digraph<(), f64> {
    let mut g = Digraph::new();
    for &v in vertices {
        g.add_vertex(v, ()).unwrap();
    }
    for &(from, to, w) in edges {
        g.add_edge(from, to, w).unwrap();
    }
    g
}

fn weight(w: &f64) -> f64 {
    *w
}

#[test]
fn single_vertex_maps_to_itself() {
    let g = graph(&[A], &[]);
    let paths = g.find_shortest_paths(A, weight).unwrap();
    assert_eq!(paths.as_map(), &BTreeMap::from([(A, A)]));
}

#[test]
fn three_cycle_with_uniform_weights() {
    let g = graph(&[A, B, C], &[(A, B, 1.0), (B, C, 1.0), (C, A, 1.0)]);

    let paths = g.shortest_paths(A, weight).unwrap();
    assert_eq!(
        paths.predecessors().as_map(),
        &BTreeMap::from([(A, A), (B, A), (C, B)])
    );
    assert_eq!(paths.path_to(C), Some(vec![A, B, C]));
    assert_eq!(paths.distance(C), Some(2.0));

    let total: f64 = [(A, B), (B, C)]
        .iter()
        .map(|&(f, t)| *g.edge_info(f, t).unwrap())
        .sum();
    assert_eq!(total, 2.0);
}

#[test]
fn unreachable_vertex_maps_to_itself() {
    let g = graph(&[A, B, C], &[(A, B, 1.0), (C, A, 1.0)]);
    let paths = g.find_shortest_paths(A, weight).unwrap();

    assert_eq!(paths[C], C);
    assert_eq!(paths[A], A);
    assert_eq!(paths[B], A);
    assert_eq!(paths.predecessor(C), None);
    assert!(!paths.is_reachable(C));
    assert_eq!(paths.path_to(C), None);
}

#[test]
fn unknown_start_is_an_error() {
    let g = graph(&[A], &[]);
    assert_eq!(
        g.find_shortest_paths(B, weight).unwrap_err(),
        Error::UnknownVertex { vertex: B }
    );
}

#[test]
fn cheaper_longer_route_wins_over_direct_edge() {
    let g = graph(
        &[A, B, C, D],
        &[(A, D, 10.0), (A, B, 1.0), (B, C, 2.0), (C, D, 3.0)],
    );
    let paths = g.shortest_paths(A, weight).unwrap();

    assert_eq!(paths.path_to(D), Some(vec![A, B, C, D]));
    assert_eq!(paths.distance(D), Some(6.0));
}

#[test]
fn distance_is_relaxed_after_first_discovery() {
    // D is first discovered through A at cost 5, later improved through C.
    let g = graph(
        &[A, B, C, D],
        &[(A, D, 5.0), (A, B, 1.0), (B, C, 1.0), (C, D, 1.0)],
    );
    let paths = g.find_shortest_paths(A, weight).unwrap();
    assert_eq!(paths[D], C);
}

#[test]
fn weight_function_selects_the_metric() {
    #[derive(Clone)]
    struct Segment {
        miles: f64,
        mph: f64,
    }

    let mut g: Digraph<&str, Segment> = Digraph::new();
    g.add_vertex(A, "a").unwrap();
    g.add_vertex(B, "b").unwrap();
    g.add_vertex(C, "c").unwrap();
    // Direct route is short but slow; the detour is long but fast.
    g.add_edge(A, C, Segment { miles: 10.0, mph: 10.0 }).unwrap();
    g.add_edge(A, B, Segment { miles: 10.0, mph: 100.0 }).unwrap();
    g.add_edge(B, C, Segment { miles: 10.0, mph: 100.0 }).unwrap();

    let by_distance = g.find_shortest_paths(A, |s| s.miles).unwrap();
    let by_time = g.find_shortest_paths(A, |s| s.miles / s.mph).unwrap();

    assert_eq!(by_distance[C], A);
    assert_eq!(by_time[C], B);
}

#[test]
fn self_loop_on_start_keeps_start_self_mapped() {
    let g = graph(&[A, B], &[(A, A, 0.0), (A, B, 1.0)]);
    let paths = g.find_shortest_paths(A, weight).unwrap();

    assert_eq!(paths[A], A);
    assert_eq!(paths.predecessor(A), None);
    assert!(paths.is_reachable(A));
    assert_eq!(paths[B], A);
}

#[test]
fn zero_weight_edges_are_followed() {
    let g = graph(&[A, B, C], &[(A, B, 0.0), (B, C, 0.0)]);
    let paths = g.shortest_paths(A, weight).unwrap();

    assert_eq!(paths.path_to(C), Some(vec![A, B, C]));
    assert_eq!(paths.distance(C), Some(0.0));
}

#[test]
fn every_vertex_appears_in_the_result() {
    let g = graph(&[10, 20, 30, 40], &[(10, 20, 1.0)]);
    let paths = g.find_shortest_paths(10, weight).unwrap();

    assert_eq!(paths.len(), g.vertex_count());
    let keys: Vec<VertexId> = paths.iter().map(|(v, _)| v).collect();
    assert_eq!(keys, vec![10, 20, 30, 40]);
    assert_eq!(paths.start(), 10);
}

#[test]
fn equal_cost_paths_are_reported_deterministically() {
    // Two routes of cost 2 to D; repeated runs must agree.
    let g = graph(
        &[A, B, C, D],
        &[(A, B, 1.0), (A, C, 1.0), (B, D, 1.0), (C, D, 1.0)],
    );
    let first = g.find_shortest_paths(A, weight).unwrap();
    for _ in 0..10 {
        assert_eq!(g.find_shortest_paths(A, weight).unwrap(), first);
    }
    assert!(first[D] == B || first[D] == C);
}

#[test]
fn results_follow_mutations() {
    let mut g = graph(&[A, B, C], &[(A, B, 1.0), (B, C, 1.0)]);
    assert_eq!(g.find_shortest_paths(A, weight).unwrap()[C], B);

    g.remove_vertex(B).unwrap();
    let paths = g.find_shortest_paths(A, weight).unwrap();
    assert_eq!(paths[C], C);
    assert_eq!(paths.get(B), None);
}

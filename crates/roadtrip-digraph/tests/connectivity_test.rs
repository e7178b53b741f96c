use roadtrip_digraph::{Digraph, Error};

fn with_vertices(ids: &[i32]) -> Digraph<(), ()> {
    let mut g = Digraph::new();
    for &id in ids {
        g.add_vertex(id, ()).unwrap();
    }
    g
}

#[test]
fn empty_graph_is_strongly_connected() {
    let g: Digraph<(), ()> = Digraph::new();
    assert!(g.is_strongly_connected());
}

#[test]
fn single_isolated_vertex_is_strongly_connected() {
    assert!(with_vertices(&[5]).is_strongly_connected());
}

#[test]
fn one_directional_edge_is_not_strongly_connected() {
    let mut g = with_vertices(&[1, 2]);
    g.add_edge(1, 2, ()).unwrap();
    assert!(!g.is_strongly_connected());
}

#[test]
fn edges_in_both_directions_are_strongly_connected() {
    let mut g = with_vertices(&[1, 2]);
    g.add_edge(1, 2, ()).unwrap();
    g.add_edge(2, 1, ()).unwrap();
    assert!(g.is_strongly_connected());
}

#[test]
fn two_isolated_vertices_are_not_strongly_connected() {
    assert!(!with_vertices(&[1, 2]).is_strongly_connected());
}

#[test]
fn cycle_is_strongly_connected_until_an_edge_is_removed() {
    let mut g = with_vertices(&[0, 1, 2, 3]);
    for (a, b) in [(0, 1), (1, 2), (2, 3), (3, 0)] {
        g.add_edge(a, b, ()).unwrap();
    }
    assert!(g.is_strongly_connected());

    g.remove_edge(2, 3).unwrap();
    assert!(!g.is_strongly_connected());
}

#[test]
fn sink_reached_from_everywhere_is_not_enough() {
    // Every vertex reaches 3, but 3 reaches nothing.
    let mut g = with_vertices(&[1, 2, 3]);
    for (a, b) in [(1, 2), (2, 1), (1, 3), (2, 3)] {
        g.add_edge(a, b, ()).unwrap();
    }
    assert!(!g.is_strongly_connected());
}

#[test]
fn removing_a_vertex_can_restore_strong_connectivity() {
    let mut g = with_vertices(&[1, 2, 3]);
    for (a, b) in [(1, 2), (2, 1), (1, 3)] {
        g.add_edge(a, b, ()).unwrap();
    }
    assert!(!g.is_strongly_connected());

    g.remove_vertex(3).unwrap();
    assert!(g.is_strongly_connected());
}

#[test]
fn reachable_from_reports_unknown_vertex() {
    let g = with_vertices(&[1]);
    assert_eq!(
        g.reachable_from(2).unwrap_err(),
        Error::UnknownVertex { vertex: 2 }
    );
}

#[test]
fn reachable_from_includes_start_and_ignores_upstream() {
    let mut g = with_vertices(&[1, 2, 3, 4]);
    for (a, b) in [(1, 2), (2, 3), (4, 2)] {
        g.add_edge(a, b, ()).unwrap();
    }
    let mut reached = g.reachable_from(2).unwrap();
    reached.sort();
    assert_eq!(reached, vec![2, 3]);
}

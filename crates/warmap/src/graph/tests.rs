use proptest::prelude::*;

use super::*;

fn pentagon_with_chord() -> UndirectedGraph {
    UndirectedGraph::from_edges([(0, 1), (1, 2), (2, 3), (3, 4), (4, 0), (0, 2)])
}

#[test]
fn empty_graph() {
    let g = UndirectedGraph::new();
    assert!(g.is_empty());
    assert_eq!(g.size(), (0, 0));
    assert!(!g.contains_vertex(0));
    assert_eq!(g.degree(0).unwrap(), 0);
    assert!(g.adjacents(0).unwrap().is_empty());
}

#[test]
fn insert_edge_stores_both_directions() {
    let mut g = UndirectedGraph::new();
    assert!(g.insert_edge((1, 3)));
    assert!(g.contains_edge((1, 3)));
    assert!(g.contains_edge((3, 1)));
    assert!(!g.insert_edge((3, 1)));
    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.vertex_count(), 4);
    assert!(!g.is_empty());
}

#[test]
fn self_loops_are_rejected() {
    let mut g = UndirectedGraph::new();
    assert!(!g.insert_edge((2, 2)));
    assert!(!g.contains_edge((2, 2)));
    assert_eq!(g.size(), (0, 0));
}

#[test]
fn degree_and_adjacents() {
    let g = pentagon_with_chord();
    assert_eq!(g.size(), (5, 6));
    assert_eq!(g.degree(0).unwrap(), 3);
    assert_eq!(g.degree(3).unwrap(), 2);
    assert_eq!(g.adjacents(0).unwrap(), vec![1, 2, 4]);
    assert_eq!(g.adjacents(2).unwrap(), vec![0, 1, 3]);
    assert_eq!(g.degree(17).unwrap(), 0);
    assert!(g.adjacents(17).unwrap().is_empty());
}

#[test]
fn edges_lists_each_pair_once() {
    let g = pentagon_with_chord();
    let edges: Vec<Edge> = g.edges().collect();
    assert_eq!(edges, vec![(0, 1), (0, 2), (0, 4), (1, 2), (2, 3), (3, 4)]);
}

#[test]
fn remove_edge_drops_both_directions() {
    let mut g = pentagon_with_chord();
    assert!(g.remove_edge((2, 0)));
    assert!(!g.contains_edge((0, 2)));
    assert!(!g.remove_edge((0, 2)));
    assert_eq!(g.edge_count(), 5);
}

#[test]
fn remove_vertex_drops_incident_edges() {
    let mut g = pentagon_with_chord();
    g.remove_vertex(0);
    assert_eq!(g.degree(0).unwrap(), 0);
    assert_eq!(g.edge_count(), 3);
    assert_eq!(g.adjacents(2).unwrap(), vec![1, 3]);
    // Ids stay dense, so the count does not shrink.
    assert_eq!(g.vertex_count(), 5);
    assert!(g.contains_vertex(0));
}

#[test]
fn insert_vertex_grows_count_without_edges() {
    let mut g = UndirectedGraph::new();
    g.insert_vertex(6);
    assert_eq!(g.size(), (7, 0));
    assert!(g.contains_vertex(3));
    assert!(!g.contains_vertex(7));
    g.insert_vertex(2);
    assert_eq!(g.vertex_count(), 7);
}

proptest! {
    #[test]
    fn edges_are_symmetric(pairs in prop::collection::vec((0usize..20, 0usize..20), 0..60)) {
        let g = UndirectedGraph::from_edges(pairs.iter().copied());
        for &(u, v) in &pairs {
            prop_assert_eq!(g.contains_edge((u, v)), u != v);
            prop_assert_eq!(g.contains_edge((u, v)), g.contains_edge((v, u)));
        }
        let distinct: std::collections::BTreeSet<Edge> = pairs
            .iter()
            .filter(|(u, v)| u != v)
            .map(|&(u, v)| (u.min(v), u.max(v)))
            .collect();
        prop_assert_eq!(g.edge_count(), distinct.len());
        let degree_sum: usize = (0..g.vertex_count()).map(|v| g.degree(v).unwrap()).sum();
        prop_assert_eq!(degree_sum, 2 * g.edge_count());
    }
}

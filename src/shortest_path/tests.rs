use super::*;
use crate::{Error, GraphConfig, WeightPolicy};

/// A(0,0) B(1,0) C(2,0); A-B 2, B-C 3, A-C 10.
fn line() -> Graph {
    let mut graph = Graph::new();
    graph.add_vertex("A", 0, 0).unwrap();
    graph.add_vertex("B", 1, 0).unwrap();
    graph.add_vertex("C", 2, 0).unwrap();
    graph.add_undirected_edge("A", "B", 2.0).unwrap();
    graph.add_undirected_edge("B", "C", 3.0).unwrap();
    graph.add_undirected_edge("A", "C", 10.0).unwrap();
    graph
}

#[test]
fn dijkstra_computes_distances_and_links() {
    let graph = line();
    let a = graph.vertex_id("A").unwrap();
    let b = graph.vertex_id("B").unwrap();
    let c = graph.vertex_id("C").unwrap();

    let tree = dijkstra(&graph, a);

    assert_eq!(tree.source(), a);
    assert_eq!(tree.distance(a), Some(0.0));
    assert_eq!(tree.distance(b), Some(2.0));
    assert_eq!(tree.distance(c), Some(5.0));

    assert_eq!(tree.previous(a), None);
    assert_eq!(tree.previous(b).unwrap().vertex, a);
    assert_eq!(tree.previous(c).unwrap().vertex, b);
    assert_eq!(tree.settled_count(), 3);
}

#[test]
fn directed_weights_are_respected() {
    // 0 -> 1 (10), 0 -> 2 (5), 2 -> 1 (2), 1 -> 3 (1)
    let mut graph = Graph::new();
    for (i, name) in ["n0", "n1", "n2", "n3"].iter().enumerate() {
        graph.add_vertex(*name, i as i32, 0).unwrap();
    }
    graph.add_edge("n0", "n1", 10.0).unwrap();
    graph.add_edge("n0", "n2", 5.0).unwrap();
    graph.add_edge("n2", "n1", 2.0).unwrap();
    graph.add_edge("n1", "n3", 1.0).unwrap();

    let tree = graph.shortest_paths("n0").unwrap();
    let id = |name: &str| graph.vertex_id(name).unwrap();

    assert_eq!(tree.distance(id("n2")), Some(5.0));
    assert_eq!(tree.distance(id("n1")), Some(7.0));
    assert_eq!(tree.distance(id("n3")), Some(8.0));
    assert_eq!(tree.previous(id("n1")).unwrap().vertex, id("n2"));

    // Edges are one-way: nothing leads back to n0.
    let reverse = graph.shortest_paths("n3").unwrap();
    assert!(!reverse.is_reachable(id("n0")));
}

#[test]
fn unreachable_vertices_keep_initial_state() {
    let mut graph = line();
    graph.add_vertex("Island", 50, 50).unwrap();
    let island = graph.vertex_id("Island").unwrap();

    let tree = graph.shortest_paths("A").unwrap();
    let state = tree.state(island);
    assert!(!state.settled);
    assert!(state.distance.is_infinite());
    assert_eq!(state.previous, None);
    assert_eq!(tree.distance(island), None);
}

#[test]
fn each_query_starts_from_fresh_state() {
    let mut graph = line();
    graph.add_vertex("D", 3, 0).unwrap();
    graph.add_edge("D", "A", 1.0).unwrap();
    let d = graph.vertex_id("D").unwrap();

    let from_d = graph.shortest_paths("D").unwrap();
    assert_eq!(from_d.distance(d), Some(0.0));

    // D is unreachable from A; nothing from the previous run may leak in.
    let from_a = graph.shortest_paths("A").unwrap();
    assert_eq!(from_a.distance(d), None);
    assert!(!from_a.is_settled(d));
}

#[test]
fn relaxation_records_the_edge_used() {
    let mut graph = Graph::new();
    graph.add_vertex("A", 0, 0).unwrap();
    graph.add_vertex("B", 1, 0).unwrap();
    graph.add_edge("A", "B", 7.0).unwrap();
    let cheap = graph.add_edge("A", "B", 4.0).unwrap();
    graph.add_edge("A", "B", 9.0).unwrap();

    let tree = graph.shortest_paths("A").unwrap();
    let b = graph.vertex_id("B").unwrap();
    assert_eq!(tree.previous(b).unwrap().edge, cheap);

    let path = tree.path_to(b);
    assert_eq!(path.len(), 1);
    assert_eq!(path.edges()[0].id, cheap);
    assert_eq!(path.total_distance(), 4.0);
}

#[test]
fn get_path_prefers_cheaper_detour() {
    let graph = line();
    let path = graph.get_path("A", "C").unwrap();

    let hops: Vec<_> = path.iter().map(|e| (e.from, e.to, e.distance)).collect();
    assert_eq!(hops, vec![("A", "B", 2.0), ("B", "C", 3.0)]);
    assert_eq!(path.vertices(), vec!["A", "B", "C"]);
    assert_eq!(graph.total_distance("A", "C").unwrap(), 5.0);
}

#[test]
fn trivial_and_unreachable_paths_are_empty() {
    let mut graph = line();
    graph.add_vertex("Island", 9, 9).unwrap();

    let same = graph.get_path("B", "B").unwrap();
    assert!(same.is_empty());
    assert!(same.vertices().is_empty());
    assert_eq!(graph.total_distance("B", "B").unwrap(), 0.0);

    assert!(graph.get_path("A", "Island").unwrap().is_empty());
    assert_eq!(graph.total_distance("A", "Island").unwrap(), 0.0);
}

#[test]
fn unknown_names_fail_source_first() {
    let graph = line();
    assert_eq!(
        graph.get_path("X", "Y").unwrap_err(),
        Error::UnknownVertex("X".into())
    );
    assert_eq!(
        graph.get_path("A", "Y").unwrap_err(),
        Error::UnknownVertex("Y".into())
    );
    assert_eq!(
        graph.total_distance("Q", "A").unwrap_err(),
        Error::UnknownVertex("Q".into())
    );
    assert!(graph.shortest_paths("nope").is_err());
}

#[test]
fn tree_reuse_matches_get_path() {
    let graph = line();
    let tree = graph.shortest_paths("C").unwrap();
    for target in ["A", "B", "C"] {
        assert_eq!(
            tree.path_to_name(target).unwrap(),
            graph.get_path("C", target).unwrap()
        );
    }
    assert!(tree.path_to_name("missing").is_none());
}

#[test]
fn path_display_lists_hops() {
    let graph = line();
    let path = graph.get_path("A", "C").unwrap();
    assert_eq!(path.to_string(), "(A - B, 2), (B - C, 3)");
    assert_eq!(graph.get_path("A", "A").unwrap().to_string(), "");
}

#[test]
fn negative_weights_still_terminate() {
    let mut graph = Graph::with_config(GraphConfig::new().weight_policy(WeightPolicy::AllowNegative));
    graph.add_vertex("A", 0, 0).unwrap();
    graph.add_vertex("B", 1, 0).unwrap();
    graph.add_vertex("C", 2, 0).unwrap();
    graph.add_undirected_edge("A", "B", 1.0).unwrap();
    graph.add_undirected_edge("B", "C", -5.0).unwrap();

    let path = graph.get_path("A", "C").unwrap();
    assert_eq!(path.vertices().first(), Some(&"A"));
    assert_eq!(path.vertices().last(), Some(&"C"));
}

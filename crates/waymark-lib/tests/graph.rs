use waymark_lib::{build_graph, Error, Graph, Position};

#[test]
fn edges_are_symmetric() {
    let graph = build_graph(&[("A", "B", 4.0), ("B", "C", 7.0)]).unwrap();
    let a = graph.node_id("A").unwrap();
    let b = graph.node_id("B").unwrap();
    let c = graph.node_id("C").unwrap();

    assert_eq!(graph.neighbors(a).get(&b), Some(&4.0));
    assert_eq!(graph.neighbors(b).get(&a), Some(&4.0));
    assert_eq!(graph.neighbors(b).get(&c), Some(&7.0));
    assert_eq!(graph.neighbors(c).get(&b), Some(&7.0));
}

#[test]
fn repeated_insertion_overwrites_both_directions() {
    let mut graph = Graph::new();
    graph.add_edge("A", "B", 4.0).unwrap();
    graph.add_edge("B", "A", 9.0).unwrap();

    let a = graph.node_id("A").unwrap();
    let b = graph.node_id("B").unwrap();
    assert_eq!(graph.weight(a, b), Some(9.0));
    assert_eq!(graph.weight(b, a), Some(9.0));
    assert_eq!(graph.edges().len(), 1);
}

#[test]
fn zero_weight_is_rejected() {
    let error = build_graph(&[("A", "B", 0.0)]).expect_err("zero weight");
    assert!(matches!(error, Error::InvalidWeight { weight, .. } if weight == 0.0));
}

#[test]
fn negative_and_non_finite_weights_are_rejected() {
    let mut graph = Graph::new();
    assert!(graph.add_edge("A", "B", -3.0).is_err());
    assert!(graph.add_edge("A", "B", f64::NAN).is_err());
    assert!(graph.add_edge("A", "B", f64::INFINITY).is_err());
    // Failed inserts must not declare edges.
    assert!(graph.node_id("A").is_none() || graph.neighbors_by_name("A").unwrap().is_empty());
}

#[test]
fn unknown_label_is_distinguished_from_isolated_node() {
    let mut graph = Graph::new();
    graph.add_node("Z", None);

    let isolated = graph.neighbors_by_name("Z").expect("declared node");
    assert!(isolated.is_empty());

    let error = graph.neighbors_by_name("Q").expect_err("undeclared node");
    assert!(matches!(error, Error::UnknownNode { name } if name == "Q"));
}

#[test]
fn positions_feed_the_distance_helper() {
    let mut graph = Graph::new();
    let a = graph.add_node("A", Some(Position { x: 0.0, y: 0.0 }));
    let b = graph.add_node("B", Some(Position { x: 3.0, y: 4.0 }));

    let pa = graph.position(a).unwrap();
    let pb = graph.position(b).unwrap();
    assert_eq!(pa.distance_to(&pb), 5.0);
}

#[test]
fn fuzzy_matches_suggest_close_labels() {
    let graph = build_graph(&[("Alpha", "Beta", 1.0), ("Gamma", "Beta", 2.0)]).unwrap();
    let suggestions = graph.fuzzy_matches("Alpah", 3);
    assert_eq!(suggestions.first().map(String::as_str), Some("Alpha"));
}

#[test]
fn edge_listing_reports_each_pair_once() {
    let graph = build_graph(&[("A", "B", 4.0), ("B", "C", 4.0), ("A", "C", 10.0)]).unwrap();
    let edges = graph.edges();
    assert_eq!(edges.len(), 3);
    for (u, v, _) in edges {
        assert!(u <= v);
    }
}

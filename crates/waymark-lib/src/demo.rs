//! Built-in demonstration map used by the CLI and benches.
//!
//! Fifteen named nodes (`A`..`O`) with fixed 2-D coordinates and a fixed set
//! of candidate edges. Edge weights are drawn from `1..=10` with a seeded
//! generator so a given seed always yields the same graph.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::Result;
use crate::graph::{Graph, Position};

const VERTICES: [(&str, f64, f64); 15] = [
    ("A", 100.0, 50.0),
    ("B", 360.0, 90.0),
    ("C", 495.0, 350.0),
    ("D", 100.0, 160.0),
    ("E", 360.0, 290.0),
    ("F", 650.0, 290.0),
    ("G", 100.0, 290.0),
    ("H", 220.0, 220.0),
    ("I", 550.0, 150.0),
    ("J", 600.0, 160.0),
    ("K", 100.0, 450.0),
    ("L", 360.0, 520.0),
    ("M", 560.0, 450.0),
    ("N", 600.0, 520.0),
    ("O", 220.0, 360.0),
];

const CANDIDATE_EDGES: [(&str, &str); 21] = [
    ("A", "B"),
    ("A", "C"),
    ("A", "D"),
    ("B", "C"),
    ("B", "D"),
    ("B", "E"),
    ("C", "F"),
    ("D", "G"),
    ("D", "H"),
    ("E", "I"),
    ("E", "F"),
    ("F", "J"),
    ("G", "K"),
    ("H", "L"),
    ("I", "M"),
    ("J", "N"),
    ("K", "O"),
    ("L", "M"),
    ("L", "N"),
    ("M", "O"),
    ("N", "O"),
];

/// Range of randomly assigned demo edge weights, inclusive.
pub const WEIGHT_RANGE: (u32, u32) = (1, 10);

/// Build the demo graph with weights drawn from the given seed.
pub fn demo_graph(seed: u64) -> Result<Graph> {
    let mut graph = Graph::new();
    for (label, x, y) in VERTICES {
        graph.add_node(label, Some(Position { x, y }));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    for (u, v) in CANDIDATE_EDGES {
        let weight = rng.gen_range(WEIGHT_RANGE.0..=WEIGHT_RANGE.1);
        graph.add_edge(u, v, f64::from(weight))?;
    }

    debug!(seed, nodes = graph.node_count(), "built demo graph");
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_graph_is_reproducible_per_seed() {
        let first = demo_graph(7).unwrap();
        let second = demo_graph(7).unwrap();
        assert_eq!(first.edges(), second.edges());
    }

    #[test]
    fn demo_weights_stay_in_range() {
        let graph = demo_graph(42).unwrap();
        let edges = graph.edges();
        assert_eq!(edges.len(), CANDIDATE_EDGES.len());
        for (_, _, weight) in edges {
            assert!((1.0..=10.0).contains(&weight));
        }
    }

    #[test]
    fn every_demo_node_is_positioned() {
        let graph = demo_graph(0).unwrap();
        for (id, _) in graph.nodes() {
            assert!(graph.position(id).is_some());
        }
    }
}

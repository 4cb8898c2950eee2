use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Dense index assigned to a node label when it is first declared.
pub type NodeId = usize;

/// Neighbour view returned for identifiers without recorded edges.
static NO_NEIGHBOURS: BTreeMap<NodeId, f64> = BTreeMap::new();

/// Cartesian coordinates for a node, consumed only by the search heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Calculate the Euclidean distance to another position.
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Weighted undirected graph keyed by interned string labels.
///
/// Edges are stored symmetrically: inserting `(u, v, w)` records the same
/// weight under both endpoints, and re-inserting a pair overwrites the prior
/// weight on both sides (last write wins). Adjacency uses `BTreeMap` so that
/// neighbour iteration order is deterministic, which in turn makes frontier
/// insertion order (and the FIFO tie-break) reproducible across runs.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    labels: Vec<String>,
    positions: Vec<Option<Position>>,
    name_to_id: HashMap<String, NodeId>,
    adjacency: Vec<BTreeMap<NodeId, f64>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a node, optionally with a position, and return its identifier.
    ///
    /// Declaring an existing label returns the existing identifier. A
    /// position is assigned at most once; later attempts to move a node are
    /// ignored with a warning.
    pub fn add_node(&mut self, label: &str, position: Option<Position>) -> NodeId {
        let id = self.intern(label);
        if let Some(position) = position {
            match self.positions[id] {
                None => self.positions[id] = Some(position),
                Some(existing) if existing == position => {}
                Some(_) => {
                    warn!(label, "ignoring position re-assignment for node");
                }
            }
        }
        id
    }

    /// Insert the edge `u`-`v` in both directions.
    ///
    /// Undeclared endpoints are declared on the fly without positions. Fails
    /// with [`Error::InvalidWeight`] unless the weight is positive and finite.
    pub fn add_edge(&mut self, u: &str, v: &str, weight: f64) -> Result<()> {
        if !(weight.is_finite() && weight > 0.0) {
            return Err(Error::InvalidWeight {
                from: u.to_string(),
                to: v.to_string(),
                weight,
            });
        }

        let u_id = self.intern(u);
        let v_id = self.intern(v);
        self.adjacency[u_id].insert(v_id, weight);
        self.adjacency[v_id].insert(u_id, weight);
        Ok(())
    }

    /// Lookup a node identifier by its case-sensitive label.
    pub fn node_id(&self, label: &str) -> Option<NodeId> {
        self.name_to_id.get(label).copied()
    }

    /// Lookup a node label by identifier.
    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.labels.get(id).map(String::as_str)
    }

    /// Position recorded for a node, if any.
    pub fn position(&self, id: NodeId) -> Option<Position> {
        self.positions.get(id).copied().flatten()
    }

    /// Return the neighbour-to-weight mapping for a node identifier.
    ///
    /// Identifiers without recorded edges (including out-of-range ones) get
    /// an empty view; use [`Graph::neighbors_by_name`] to distinguish an
    /// undeclared label from an isolated node.
    pub fn neighbors(&self, id: NodeId) -> &BTreeMap<NodeId, f64> {
        self.adjacency.get(id).unwrap_or(&NO_NEIGHBOURS)
    }

    /// Label-based adjacency query that fails with [`Error::UnknownNode`]
    /// for labels that were never declared.
    pub fn neighbors_by_name(&self, label: &str) -> Result<&BTreeMap<NodeId, f64>> {
        let id = self.node_id(label).ok_or_else(|| Error::UnknownNode {
            name: label.to_string(),
        })?;
        Ok(self.neighbors(id))
    }

    /// Weight of the edge between two identifiers, if one exists.
    pub fn weight(&self, u: NodeId, v: NodeId) -> Option<f64> {
        self.adjacency.get(u).and_then(|edges| edges.get(&v)).copied()
    }

    /// Number of declared nodes.
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Iterate over declared nodes as `(id, label)` pairs in declaration order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &str)> {
        self.labels.iter().enumerate().map(|(id, label)| (id, label.as_str()))
    }

    /// Collect each undirected edge exactly once as `(u, v, weight)` with
    /// `u <= v`, ordered by endpoint identifiers.
    pub fn edges(&self) -> Vec<(NodeId, NodeId, f64)> {
        let mut edges = Vec::new();
        for (u, targets) in self.adjacency.iter().enumerate() {
            for (&v, &weight) in targets {
                if u <= v {
                    edges.push((u, v, weight));
                }
            }
        }
        edges
    }

    /// Closest known labels to `name` by Jaro-Winkler similarity, best first.
    pub fn fuzzy_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let mut scored: Vec<(f64, &str)> = self
            .labels
            .iter()
            .map(|label| (strsim::jaro_winkler(name, label), label.as_str()))
            .filter(|(score, _)| *score >= 0.6)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, label)| label.to_string())
            .collect()
    }

    fn intern(&mut self, label: &str) -> NodeId {
        if let Some(&id) = self.name_to_id.get(label) {
            return id;
        }
        let id = self.labels.len();
        self.labels.push(label.to_string());
        self.positions.push(None);
        self.adjacency.push(BTreeMap::new());
        self.name_to_id.insert(label.to_string(), id);
        id
    }
}

/// Build a graph from an edge list.
///
/// Fails with [`Error::InvalidWeight`] on the first non-positive weight;
/// endpoints are declared implicitly and carry no positions (the heuristic
/// falls back to zero for them).
pub fn build_graph<S: AsRef<str>>(edges: &[(S, S, f64)]) -> Result<Graph> {
    let mut graph = Graph::new();
    for (u, v, weight) in edges {
        graph.add_edge(u.as_ref(), v.as_ref(), *weight)?;
    }
    debug!(
        nodes = graph.node_count(),
        edges = graph.edges().len(),
        "built graph from edge list"
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_is_stable() {
        let mut graph = Graph::new();
        let a = graph.add_node("A", None);
        let b = graph.add_node("B", None);
        assert_ne!(a, b);
        assert_eq!(graph.add_node("A", None), a);
        assert_eq!(graph.label(a), Some("A"));
    }

    #[test]
    fn position_assignment_is_write_once() {
        let mut graph = Graph::new();
        let a = graph.add_node("A", Some(Position { x: 1.0, y: 2.0 }));
        graph.add_node("A", Some(Position { x: 9.0, y: 9.0 }));
        assert_eq!(graph.position(a), Some(Position { x: 1.0, y: 2.0 }));
    }

    #[test]
    fn self_loop_is_representable() {
        let mut graph = Graph::new();
        graph.add_edge("A", "A", 2.0).unwrap();
        let a = graph.node_id("A").unwrap();
        assert_eq!(graph.weight(a, a), Some(2.0));
    }
}

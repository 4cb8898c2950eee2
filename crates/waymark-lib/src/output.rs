use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};
use crate::search::Route;

/// Step taken during traversal of a found route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub id: NodeId,
    pub label: String,
}

/// Structured representation of a found route that higher-level consumers
/// can serialise or render as text.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub start: String,
    pub goal: String,
    pub hops: usize,
    pub cost: f64,
    pub expanded: usize,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`Route`] into a summary with resolved node labels.
    pub fn from_route(graph: &Graph, route: &Route) -> Result<Self> {
        let steps = route
            .steps
            .iter()
            .enumerate()
            .map(|(index, &id)| {
                let label = resolve_label(graph, id)?;
                Ok(RouteStep { index, id, label })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            start: resolve_label(graph, route.start)?,
            goal: resolve_label(graph, route.goal)?,
            hops: route.hop_count(),
            cost: route.cost,
            expanded: route.expanded,
            steps,
        })
    }

    /// Render the summary as plain text, one line.
    pub fn render_text(&self) -> String {
        let mut text = String::new();
        let path = self
            .steps
            .iter()
            .map(|step| step.label.as_str())
            .collect::<Vec<_>>()
            .join(" -> ");
        let _ = write!(
            text,
            "Node {} found! Path: {}, cost {}, expanded {} nodes",
            self.goal, path, self.cost, self.expanded
        );
        text
    }
}

fn resolve_label(graph: &Graph, id: NodeId) -> Result<String> {
    graph
        .label(id)
        .map(str::to_string)
        .ok_or_else(|| Error::UnknownNode {
            name: format!("#{id}"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_graph;
    use crate::search::find_path;

    #[test]
    fn summary_resolves_labels_in_order() {
        let graph = build_graph(&[("A", "B", 4.0), ("B", "C", 4.0), ("A", "C", 10.0)]).unwrap();
        let route = find_path(&graph, "A", "C").unwrap();
        let summary = RouteSummary::from_route(&graph, &route).unwrap();

        let labels: Vec<_> = summary.steps.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "B", "C"]);
        assert_eq!(summary.hops, 2);
        assert_eq!(summary.cost, 8.0);
    }

    #[test]
    fn text_rendering_mentions_path_and_cost() {
        let graph = build_graph(&[("A", "B", 4.0), ("B", "C", 4.0), ("A", "C", 10.0)]).unwrap();
        let route = find_path(&graph, "A", "C").unwrap();
        let summary = RouteSummary::from_route(&graph, &route).unwrap();

        let text = summary.render_text();
        assert!(text.contains("Node C found!"));
        assert!(text.contains("A -> B -> C"));
        assert!(text.contains("cost 8"));
    }
}

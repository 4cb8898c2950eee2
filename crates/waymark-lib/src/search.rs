use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};
use std::fmt;

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::events::{NullObserver, SearchControl, SearchEvent, SearchObserver};
use crate::graph::{Graph, NodeId};

/// Lifecycle of a single engine instance.
///
/// `Running` only leaves through a terminal state, and a terminal state only
/// leaves through [`AStarEngine::reset`]. `Cancelled` is reached when an
/// observer requests a cooperative stop at an expansion suspension point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    #[default]
    Idle,
    Running,
    Found,
    NotFound,
    Cancelled,
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            SearchStatus::Idle => "idle",
            SearchStatus::Running => "running",
            SearchStatus::Found => "found",
            SearchStatus::NotFound => "not-found",
            SearchStatus::Cancelled => "cancelled",
        };
        f.write_str(value)
    }
}

/// Path returned by a successful search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub start: NodeId,
    pub goal: NodeId,
    /// Node sequence from start to goal, both endpoints included.
    pub steps: Vec<NodeId>,
    /// Exact sum of edge weights along consecutive step pairs.
    pub cost: f64,
    /// Number of nodes expanded before the goal was popped.
    pub expanded: usize,
}

impl Route {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Terminal result of a search invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Found(Route),
    /// The frontier emptied without popping the goal. Not an error: the
    /// engine stays reusable and may be re-run.
    NotFound,
    /// An observer cancelled the search at a suspension point.
    Cancelled,
}

/// A* search engine over a read-only [`Graph`].
///
/// The engine holds no graph data; frontier and visited set are created
/// fresh per invocation and discarded on termination. Expansion follows the
/// no-re-expansion rule: once a node enters the visited set it is never
/// expanded again, even if a cheaper path to it is discovered later. Under a
/// non-admissible heuristic this can yield a suboptimal (but still complete)
/// path; the engine does not verify admissibility.
#[derive(Debug, Clone, Default)]
pub struct AStarEngine {
    status: SearchStatus,
}

impl AStarEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle state.
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == SearchStatus::Running
    }

    /// Whether the engine sits in a terminal state.
    pub fn is_completed(&self) -> bool {
        matches!(
            self.status,
            SearchStatus::Found | SearchStatus::NotFound | SearchStatus::Cancelled
        )
    }

    /// Clear any terminal state so a fresh search can start.
    pub fn reset(&mut self) {
        self.status = SearchStatus::Idle;
    }

    /// Find a minimum-estimated-cost path from `start` to `goal`.
    ///
    /// Both labels must be declared in the graph; otherwise the call fails
    /// with [`Error::InvalidEndpoint`] and no search state changes. A second
    /// invocation while running, or after a successful one, is rejected with
    /// [`Error::EngineBusy`]; a `NotFound` or `Cancelled` engine may be
    /// re-run directly.
    ///
    /// The observer receives one [`SearchEvent::NodeExpanded`] per expanded
    /// node; that callback is the suspension point where collaborators can
    /// render intermediate state or request cancellation.
    pub fn search(
        &mut self,
        graph: &Graph,
        start: &str,
        goal: &str,
        observer: &mut dyn SearchObserver,
    ) -> Result<SearchOutcome> {
        if matches!(self.status, SearchStatus::Running | SearchStatus::Found) {
            return Err(Error::EngineBusy {
                status: self.status,
            });
        }

        let start_id = resolve_endpoint(graph, start)?;
        let goal_id = resolve_endpoint(graph, goal)?;

        self.status = SearchStatus::Running;
        debug!(start, goal, "starting A* search");

        let mut frontier: BinaryHeap<FrontierEntry> = BinaryHeap::new();
        let mut visited: HashSet<NodeId> = HashSet::new();
        let mut seq: u64 = 0;

        frontier.push(FrontierEntry {
            priority: FloatOrd(0.0),
            seq,
            node: start_id,
            path: Vec::new(),
        });

        while let Some(entry) = frontier.pop() {
            if entry.node == goal_id {
                let mut steps = entry.path;
                steps.push(entry.node);
                let cost = path_cost(graph, &steps);
                observer.on_event(&SearchEvent::GoalReached(goal_id));
                self.status = SearchStatus::Found;
                debug!(cost, hops = steps.len() - 1, "goal reached");
                return Ok(SearchOutcome::Found(Route {
                    start: start_id,
                    goal: goal_id,
                    steps,
                    cost,
                    expanded: visited.len(),
                }));
            }

            // Stale frontier entry for an already-expanded node.
            if !visited.insert(entry.node) {
                continue;
            }

            trace!(node = entry.node, priority = entry.priority.0, "expanding node");
            let control = observer.on_event(&SearchEvent::NodeExpanded(entry.node));

            for (&neighbor, &weight) in graph.neighbors(entry.node) {
                if visited.contains(&neighbor) {
                    continue;
                }
                let mut path = entry.path.clone();
                path.push(entry.node);
                let priority =
                    path.len() as f64 + heuristic_distance(graph, neighbor, goal_id) + weight;
                seq += 1;
                frontier.push(FrontierEntry {
                    priority: FloatOrd(priority),
                    seq,
                    node: neighbor,
                    path,
                });
            }

            if control == SearchControl::Cancel {
                self.status = SearchStatus::Cancelled;
                debug!(expanded = visited.len(), "search cancelled by observer");
                return Ok(SearchOutcome::Cancelled);
            }
        }

        observer.on_event(&SearchEvent::SearchExhausted);
        self.status = SearchStatus::NotFound;
        debug!(expanded = visited.len(), "frontier exhausted without goal");
        Ok(SearchOutcome::NotFound)
    }
}

/// Run a one-shot search and treat an exhausted frontier as an error.
///
/// Convenience wrapper over [`AStarEngine`] for callers that want the
/// `Result` shape instead of inspecting a [`SearchOutcome`].
pub fn find_path(graph: &Graph, start: &str, goal: &str) -> Result<Route> {
    let mut engine = AStarEngine::new();
    match engine.search(graph, start, goal, &mut NullObserver)? {
        SearchOutcome::Found(route) => Ok(route),
        SearchOutcome::NotFound | SearchOutcome::Cancelled => Err(Error::PathNotFound {
            start: start.to_string(),
            goal: goal.to_string(),
        }),
    }
}

fn resolve_endpoint(graph: &Graph, label: &str) -> Result<NodeId> {
    graph.node_id(label).ok_or_else(|| Error::InvalidEndpoint {
        name: label.to_string(),
        suggestions: graph.fuzzy_matches(label, 3),
    })
}

/// Euclidean estimate between two nodes; zero when either position is missing.
fn heuristic_distance(graph: &Graph, from: NodeId, to: NodeId) -> f64 {
    match (graph.position(from), graph.position(to)) {
        (Some(a), Some(b)) => a.distance_to(&b),
        _ => 0.0,
    }
}

fn path_cost(graph: &Graph, steps: &[NodeId]) -> f64 {
    steps
        .windows(2)
        .map(|pair| {
            graph
                .weight(pair[0], pair[1])
                .expect("consecutive path nodes share an edge")
        })
        .sum()
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Frontier entry carrying the path that discovered it. Sequence numbers are
/// assigned at insertion and break priority ties first-in-first-out.
#[derive(Clone, Debug)]
struct FrontierEntry {
    priority: FloatOrd,
    seq: u64,
    node: NodeId,
    path: Vec<NodeId>,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by priority;
        // lower sequence numbers win within equal priority.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frontier_orders_by_priority_then_sequence() {
        let mut heap = BinaryHeap::new();
        for (priority, seq) in [(2.0, 0), (1.0, 2), (1.0, 1), (3.0, 3)] {
            heap.push(FrontierEntry {
                priority: FloatOrd(priority),
                seq,
                node: 0,
                path: Vec::new(),
            });
        }

        let order: Vec<(f64, u64)> = std::iter::from_fn(|| heap.pop())
            .map(|entry| (entry.priority.0, entry.seq))
            .collect();
        assert_eq!(order, vec![(1.0, 1), (1.0, 2), (2.0, 0), (3.0, 3)]);
    }

    #[test]
    fn status_display_is_kebab_case() {
        assert_eq!(SearchStatus::NotFound.to_string(), "not-found");
        assert_eq!(SearchStatus::Idle.to_string(), "idle");
    }
}

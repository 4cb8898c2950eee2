//! Search event stream consumed by visualizer-style collaborators.
//!
//! The engine emits one [`SearchEvent`] per state change and suspends at
//! each expansion by calling the observer synchronously; the callback is the
//! pacing hook, so a collaborator can render intermediate state before the
//! next frontier pop proceeds. Observers never mutate search state.

use serde::Serialize;

use crate::graph::NodeId;

/// Discrete state change emitted during a search invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "event", content = "node")]
pub enum SearchEvent {
    /// A node was popped from the frontier and expanded. Emitted at most
    /// once per node per invocation.
    NodeExpanded(NodeId),
    /// The goal was popped; the search terminates with a found path.
    GoalReached(NodeId),
    /// The frontier emptied without reaching the goal.
    SearchExhausted,
}

/// Directive returned from the suspension point after each expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchControl {
    #[default]
    Continue,
    /// Stop cooperatively before the next frontier pop.
    Cancel,
}

/// Subscriber for the engine's event stream.
///
/// `on_event` is invoked once per emitted event; for [`SearchEvent::NodeExpanded`]
/// the return value is honoured as a cancellation directive, for terminal
/// events it is ignored.
pub trait SearchObserver {
    fn on_event(&mut self, event: &SearchEvent) -> SearchControl;
}

/// Observer that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl SearchObserver for NullObserver {
    fn on_event(&mut self, _event: &SearchEvent) -> SearchControl {
        SearchControl::Continue
    }
}

/// Observer that records the full event sequence.
#[derive(Debug, Clone, Default)]
pub struct TraceRecorder {
    events: Vec<SearchEvent>,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far, in emission order.
    pub fn events(&self) -> &[SearchEvent] {
        &self.events
    }

    /// Nodes expanded so far, in expansion order.
    pub fn expanded(&self) -> Vec<NodeId> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SearchEvent::NodeExpanded(node) => Some(*node),
                _ => None,
            })
            .collect()
    }
}

impl SearchObserver for TraceRecorder {
    fn on_event(&mut self, event: &SearchEvent) -> SearchControl {
        self.events.push(*event);
        SearchControl::Continue
    }
}

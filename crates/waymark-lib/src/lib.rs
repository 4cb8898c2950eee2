//! Waymark library entry points.
//!
//! This crate models weighted undirected graphs with named, positioned nodes
//! and runs A* informed search over them with a Euclidean-distance heuristic.
//! Searches emit a stream of visitation events that presentation layers (the
//! CLI, a future visualizer) subscribe to; the core itself never renders or
//! paces anything. Higher-level consumers should depend on the re-exports
//! here instead of reaching into modules.

#![deny(warnings)]

pub mod demo;
pub mod error;
pub mod events;
pub mod graph;
pub mod output;
pub mod search;

pub use demo::demo_graph;
pub use error::{Error, Result};
pub use events::{NullObserver, SearchControl, SearchEvent, SearchObserver, TraceRecorder};
pub use graph::{build_graph, Graph, NodeId, Position};
pub use output::{RouteStep, RouteSummary};
pub use search::{find_path, AStarEngine, Route, SearchOutcome, SearchStatus};

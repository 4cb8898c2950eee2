use thiserror::Error;

use crate::search::SearchStatus;

/// Convenient result alias for the waymark library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when an edge is inserted with a non-positive (or non-finite) weight.
    #[error("invalid weight {weight} for edge {from}-{to}: weights must be positive")]
    InvalidWeight {
        from: String,
        to: String,
        weight: f64,
    },

    /// Raised when an adjacency query names a node that was never declared.
    #[error("unknown node: {name}")]
    UnknownNode { name: String },

    /// Raised when a search endpoint is not present in the graph.
    #[error("invalid search endpoint: {name}{}", format_suggestions(.suggestions))]
    InvalidEndpoint {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised by [`crate::find_path`] when no path connects the endpoints.
    #[error("no path found between {start} and {goal}")]
    PathNotFound { start: String, goal: String },

    /// Raised when a search is started on an engine that is running or has
    /// already found a path. Call [`crate::AStarEngine::reset`] first.
    #[error("engine is {status}; reset before starting another search")]
    EngineBusy { status: SearchStatus },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

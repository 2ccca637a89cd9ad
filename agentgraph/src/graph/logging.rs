//! Logging helpers for graph execution.
//!
//! Structured `tracing` events for run start/finish and per-node progress.

use crate::error::AgentError;

use super::Next;

/// Log node execution start.
pub fn log_node_start(node_id: &str) {
    tracing::debug!(node_id = node_id, "Starting node execution");
}

/// Log node execution completion.
pub fn log_node_complete(node_id: &str, next: &Next) {
    tracing::debug!(node_id = node_id, ?next, "Node execution complete");
}

/// Span covering one run; node spans nest under it.
pub fn graph_span(run_name: Option<&str>) -> tracing::Span {
    tracing::info_span!("graph", run_name = run_name.unwrap_or("-"))
}

/// Log graph execution start.
pub fn log_graph_start() {
    tracing::info!("Starting graph execution");
}

/// Log graph execution completion.
pub fn log_graph_complete(steps: usize) {
    tracing::info!(steps, "Graph execution complete");
}

/// Log graph execution error.
pub fn log_graph_error(error: &AgentError) {
    tracing::error!(
        failed_node = error.failed_node().unwrap_or("-"),
        %error,
        "Graph execution error"
    );
}

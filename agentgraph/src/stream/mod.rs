//! Streaming types for `CompiledStateGraph::stream`.
//!
//! After each step the runner emits the modes the caller asked for; a failed run
//! ends the stream with a single `StreamEvent::Error`.

use crate::error::AgentError;

/// Which per-step events a stream carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StreamMode {
    /// Full state after each step.
    Values,
    /// Node id plus the state it produced.
    Updates,
}

/// One event from a streamed run.
#[derive(Debug)]
pub enum StreamEvent<S> {
    /// Full state snapshot after a step.
    Values(S),
    /// State produced by `node_id`.
    Updates { node_id: String, state: S },
    /// The run failed; no further events follow.
    Error(AgentError),
}

impl<S> StreamEvent<S> {
    /// True for the terminal `Error` event.
    pub fn is_error(&self) -> bool {
        matches!(self, StreamEvent::Error(_))
    }
}

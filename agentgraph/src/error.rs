//! Run-time error types.
//!
//! Returned by `Node::run`, `LlmClient` calls and the graph runner. Build-time
//! problems (duplicate or unknown nodes, invalid structure) live in
//! [`CompilationError`](crate::graph::CompilationError) instead.

use std::time::Duration;

use thiserror::Error;

/// Run-time error for a single graph run.
///
/// Steps return the leaf variants (`MissingInput`, `UnsupportedFormat`, ...). The runner
/// wraps any step failure in `StepExecution` so the caller can see which node failed;
/// use [`root_cause`](AgentError::root_cause) to get the step's own error back.
#[derive(Debug, Error)]
pub enum AgentError {
    /// Execution failed with a message (e.g. LLM call failed, transport error).
    #[error("execution failed: {0}")]
    ExecutionFailed(String),

    /// The run input carries none of the fields a run needs.
    #[error("missing input: {0}")]
    MissingInput(String),

    /// A document has a format no decoder handles.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Input or intermediate state failed a semantic check.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A structured model reply did not match its declared shape.
    #[error("reply does not match schema `{schema}`: {reason}")]
    SchemaMismatch { schema: String, reason: String },

    /// A step failed; `source` is the step's own error.
    #[error("step `{node_id}` failed: {source}")]
    StepExecution {
        node_id: String,
        #[source]
        source: Box<AgentError>,
    },

    /// `Next::Continue` from a node with more than one outgoing edge.
    #[error("ambiguous route from `{node}`: candidates {candidates:?}")]
    AmbiguousRoute {
        node: String,
        candidates: Vec<String>,
    },

    /// `Next::Node(to)` where no edge `from -> to` exists.
    #[error("no edge from `{from}` to `{to}`")]
    InvalidRoute { from: String, to: String },

    /// The run executed more steps than `RunnableConfig::recursion_limit` allows.
    #[error("recursion limit of {0} steps reached without hitting END")]
    RecursionLimit(usize),

    /// A step did not finish within `RunnableConfig::step_timeout`.
    #[error("timed out after {0:?}")]
    Timeout(Duration),
}

impl AgentError {
    /// Wraps a step failure with the id of the node that produced it.
    pub fn step(node_id: impl Into<String>, source: AgentError) -> Self {
        Self::StepExecution {
            node_id: node_id.into(),
            source: Box::new(source),
        }
    }

    /// The innermost error, skipping any `StepExecution` wrappers.
    pub fn root_cause(&self) -> &AgentError {
        let mut current = self;
        while let AgentError::StepExecution { source, .. } = current {
            current = source;
        }
        current
    }

    /// Id of the node that failed, when the error came from a step.
    pub fn failed_node(&self) -> Option<&str> {
        match self {
            AgentError::StepExecution { node_id, .. } => Some(node_id),
            _ => None,
        }
    }
}

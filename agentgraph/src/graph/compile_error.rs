//! Graph build errors.
//!
//! Returned by `StateGraph::add_node`, `StateGraph::add_edge` and
//! `StateGraph::compile`. All of them are reported before any run starts.

use std::fmt;

use thiserror::Error;

/// Error when building or compiling a state graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompilationError {
    /// `add_node` was called with an id that is already registered.
    #[error("duplicate node: {0}")]
    DuplicateNode(String),

    /// `add_edge` references an id that is neither registered nor a sentinel.
    #[error("unknown node: {0}")]
    UnknownNode(String),

    /// `add_node` was called with `START` or `END`.
    #[error("node id is reserved: {0}")]
    ReservedNodeId(String),

    /// `compile` found structural problems; every violation found is listed.
    #[error("invalid graph: {}", join_violations(.0))]
    Validation(Vec<GraphViolation>),
}

/// One structural problem found by `compile`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum GraphViolation {
    /// An edge points into the START sentinel.
    EdgeIntoStart { from: String },
    /// An edge leaves the END sentinel.
    EdgeFromEnd { to: String },
    /// There is no path from START to END at all.
    StartCannotReachEnd,
    /// The node cannot be reached from START.
    Unreachable(String),
    /// No path leads from the node to END.
    NoPathToEnd(String),
}

impl fmt::Display for GraphViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EdgeIntoStart { from } => write!(f, "edge {} -> START", from),
            Self::EdgeFromEnd { to } => write!(f, "edge END -> {}", to),
            Self::StartCannotReachEnd => write!(f, "no path from START to END"),
            Self::Unreachable(id) => write!(f, "node `{}` is unreachable from START", id),
            Self::NoPathToEnd(id) => write!(f, "node `{}` has no path to END", id),
        }
    }
}

fn join_violations(violations: &[GraphViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

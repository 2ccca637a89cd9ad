//! State graph: named nodes + directed edges, compile and invoke.
//!
//! Build with `StateGraph` (`add_node`, `add_edge` with `START` / `END`), `compile`
//! into an immutable `CompiledStateGraph`, then `invoke` / `run` / `stream` it.

mod compile_error;
mod compiled;
mod fn_node;
mod logging;
mod next;
mod node;
mod node_middleware;
mod run_config;
mod state_graph;
mod tracing_middleware;

pub use compile_error::{CompilationError, GraphViolation};
pub use compiled::{CompiledStateGraph, GraphStructure};
pub use fn_node::FnNode;
pub use next::Next;
pub use node::Node;
pub use node_middleware::{NodeFuture, NodeInner, NodeMiddleware};
pub use run_config::{RunnableConfig, DEFAULT_RECURSION_LIMIT};
pub use state_graph::{StateGraph, END, START};
pub use tracing_middleware::TracingMiddleware;

//! Graph node trait: one step in a StateGraph.
//!
//! Receives state `S`, returns updated `S` and `Next`. Used by `StateGraph`
//! and `CompiledStateGraph`.

use async_trait::async_trait;

use crate::error::AgentError;

use super::Next;

/// One step in a graph: state in, (state out, next step).
///
/// Steps own the state they receive and hand back the updated value; the runner
/// never shares one state between runs. Steps talk to the outside world only through
/// collaborators they were constructed with (LLM client, search, decoder).
///
/// **Interaction**: Registered via `StateGraph::add_node`; driven by `CompiledStateGraph::invoke`.
#[async_trait]
pub trait Node<S>: Send + Sync
where
    S: Clone + Send + Sync + 'static,
{
    /// Node id (e.g. `"load_resume"`). Used for logging; the graph uses the id given to `add_node`.
    fn id(&self) -> &str;

    /// One step: state in, (state out, next step).
    async fn run(&self, state: S) -> Result<(S, Next), AgentError>;
}

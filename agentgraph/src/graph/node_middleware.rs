//! Node middleware: wraps every `Node::run` call made by the runner.
//!
//! Set on the builder with `StateGraph::with_middleware`; the compiled graph calls
//! `around_run` for each step instead of calling the node directly.

use async_trait::async_trait;
use futures::future::BoxFuture;

use crate::error::AgentError;

use super::Next;

/// Future returned by the wrapped node call.
pub type NodeFuture<S> = BoxFuture<'static, Result<(S, Next), AgentError>>;

/// The wrapped node call; invoke it at most once with the (possibly adjusted) state.
pub type NodeInner<S> = Box<dyn FnOnce(S) -> NodeFuture<S> + Send>;

/// Around-advice for node execution (logging, tracing, metrics).
///
/// Implementations must return what `inner` returns unless they deliberately
/// change the outcome; the runner treats the returned value as the step result.
#[async_trait]
pub trait NodeMiddleware<S>: Send + Sync
where
    S: Clone + Send + Sync + 'static,
{
    async fn around_run(
        &self,
        node_id: &str,
        state: S,
        inner: NodeInner<S>,
    ) -> Result<(S, Next), AgentError>;
}

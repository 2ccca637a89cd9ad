//! Tracing shim: one `tracing` span per step, otherwise pass-through.

use std::time::Instant;

use async_trait::async_trait;
use tracing::Instrument;

use crate::error::AgentError;

use super::node_middleware::{NodeInner, NodeMiddleware};
use super::Next;

/// Middleware that runs each node inside a `node` span carrying `node_id`.
///
/// Emits `enter` / `exit` events with elapsed milliseconds; a failing step is
/// logged at warn level. The step result is returned unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingMiddleware;

#[async_trait]
impl<S> NodeMiddleware<S> for TracingMiddleware
where
    S: Clone + Send + Sync + 'static,
{
    async fn around_run(
        &self,
        node_id: &str,
        state: S,
        inner: NodeInner<S>,
    ) -> Result<(S, Next), AgentError> {
        let span = tracing::info_span!("node", node_id = node_id);
        async move {
            let started = Instant::now();
            tracing::debug!("enter");
            let result = inner(state).await;
            let elapsed_ms = started.elapsed().as_millis() as u64;
            match &result {
                Ok((_, next)) => tracing::debug!(elapsed_ms, ?next, "exit"),
                Err(error) => tracing::warn!(elapsed_ms, %error, "exit with error"),
            }
            result
        }
        .instrument(span)
        .await
    }
}

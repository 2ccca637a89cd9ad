//! Extension trait for a fluent API: attach `TracingMiddleware` before compiling.
//!
//! Interacts with [`StateGraph`](agentgraph::StateGraph),
//! [`ResumeAgentBuilder`](agentgraph_samples::resume::ResumeAgentBuilder) and
//! [`TracingMiddleware`](agentgraph::TracingMiddleware).

use std::sync::Arc;

use agentgraph::{StateGraph, TracingMiddleware};
use agentgraph_samples::resume::ResumeAgentBuilder;

/// Returns the same graph (or builder) with `TracingMiddleware` attached.
pub trait WithNodeTracing {
    fn with_node_tracing(self) -> Self;
}

impl<S> WithNodeTracing for StateGraph<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn with_node_tracing(self) -> Self {
        self.with_middleware(Arc::new(TracingMiddleware))
    }
}

impl WithNodeTracing for ResumeAgentBuilder {
    fn with_node_tracing(self) -> Self {
        self.middleware(Arc::new(TracingMiddleware))
    }
}

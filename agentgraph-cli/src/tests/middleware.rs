//! Unit tests for [`WithNodeTracing`](crate::middleware::WithNodeTracing).

use std::sync::Arc;

use agentgraph::{FnNode, StateGraph, END, START};

use crate::middleware::WithNodeTracing;

/// **Scenario**: with_node_tracing keeps graph behaviour unchanged.
#[tokio::test]
async fn with_node_tracing_is_transparent() {
    let mut graph = StateGraph::<u32>::new();
    graph
        .add_node("inc", Arc::new(FnNode::new("inc", |n: u32| async move { Ok(n + 1) })))
        .unwrap();
    graph.add_edge(START, "inc").unwrap();
    graph.add_edge("inc", END).unwrap();

    let compiled = graph.with_node_tracing().compile().unwrap();
    assert_eq!(compiled.invoke(41, None).await.unwrap(), 42);
}

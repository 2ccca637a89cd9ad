//! Shared state and nodes for the state_graph tests.

use std::sync::Arc;

use agentgraph::{AgentError, Next, Node, StateGraph, END, START};
use async_trait::async_trait;

/// State that records which nodes ran, in order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TraceState {
    pub visited: Vec<String>,
}

/// Appends its id to `visited` and continues.
pub struct VisitNode {
    id: String,
}

impl VisitNode {
    pub fn new(id: &str) -> Self {
        Self { id: id.to_string() }
    }
}

#[async_trait]
impl Node<TraceState> for VisitNode {
    fn id(&self) -> &str {
        &self.id
    }

    async fn run(&self, mut state: TraceState) -> Result<(TraceState, Next), AgentError> {
        state.visited.push(self.id.clone());
        Ok((state, Next::Continue))
    }
}

pub fn visit(id: &str) -> Arc<dyn Node<TraceState>> {
    Arc::new(VisitNode::new(id))
}

/// START -> ids[0] -> ... -> ids[n-1] -> END.
pub fn linear_graph(ids: &[&str]) -> StateGraph<TraceState> {
    let mut graph = StateGraph::new();
    for id in ids {
        graph.add_node(*id, visit(id)).expect("unique id");
    }
    let mut from: &str = START;
    for id in ids {
        graph.add_edge(from, *id).expect("known ids");
        from = *id;
    }
    graph.add_edge(from, END).expect("known ids");
    graph
}

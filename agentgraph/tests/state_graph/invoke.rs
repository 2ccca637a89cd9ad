//! StateGraph invoke / run: output, input projection, error surfacing.

use std::sync::Arc;

use agentgraph::{AgentError, FnNode, StateGraph, END, START};

use crate::common::{linear_graph, TraceState};

/// **Scenario**: invoke visits nodes in edge order and returns the final state.
#[tokio::test]
async fn invoke_visits_nodes_in_edge_order() {
    let compiled = linear_graph(&["load", "analyze", "finalize"]).compile().unwrap();
    let out = compiled.invoke(TraceState::default(), None).await.unwrap();
    assert_eq!(out.visited, vec!["load", "analyze", "finalize"]);
}

struct Request(Option<String>);

#[derive(Debug, PartialEq)]
struct Reply(Vec<String>);

impl TryFrom<Request> for TraceState {
    type Error = AgentError;

    fn try_from(request: Request) -> Result<Self, Self::Error> {
        let first = request
            .0
            .ok_or_else(|| AgentError::MissingInput("first entry".into()))?;
        Ok(TraceState {
            visited: vec![first],
        })
    }
}

impl From<TraceState> for Reply {
    fn from(state: TraceState) -> Self {
        Reply(state.visited)
    }
}

/// **Scenario**: run builds state from input and projects the final state into the output type.
#[tokio::test]
async fn run_projects_input_and_output() {
    let compiled = linear_graph(&["a"]).compile().unwrap();
    let reply: Reply = compiled
        .run(Request(Some("seed".into())), None)
        .await
        .unwrap();
    assert_eq!(reply, Reply(vec!["seed".into(), "a".into()]));
}

/// **Scenario**: Invalid input fails before any node runs and is not wrapped as a step error.
#[tokio::test]
async fn run_with_invalid_input_fails_before_steps() {
    let compiled = linear_graph(&["a"]).compile().unwrap();
    let result: Result<Reply, _> = compiled.run(Request(None), None).await;
    match result {
        Err(AgentError::MissingInput(what)) => assert_eq!(what, "first entry"),
        other => panic!("expected MissingInput, got {:?}", other),
    }
}

/// **Scenario**: A step failure is surfaced with the failing node id and the cause attached.
#[tokio::test]
async fn step_failure_names_node_and_cause() {
    let mut graph = StateGraph::<TraceState>::new();
    graph
        .add_node(
            "decode",
            Arc::new(FnNode::new("decode", |_s: TraceState| async move {
                Err::<TraceState, _>(AgentError::UnsupportedFormat("resume.docx".into()))
            })),
        )
        .unwrap();
    graph.add_edge(START, "decode").unwrap();
    graph.add_edge("decode", END).unwrap();
    let compiled = graph.compile().unwrap();
    let err = compiled.invoke(TraceState::default(), None).await.unwrap_err();
    assert_eq!(err.failed_node(), Some("decode"));
    assert!(matches!(err.root_cause(), AgentError::UnsupportedFormat(f) if f == "resume.docx"));
}

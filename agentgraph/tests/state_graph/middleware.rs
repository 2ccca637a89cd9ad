//! Node middleware: with_middleware wraps every node call.

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use agentgraph::{
    AgentError, Next, Node, NodeInner, NodeMiddleware, RunnableConfig, StateGraph,
    TracingMiddleware, END, START,
};
use async_trait::async_trait;
use tracing::Level;

use crate::common::{linear_graph, TraceState};

/// Counts calls and records node ids seen.
#[derive(Default)]
struct CountingMiddleware {
    calls: AtomicUsize,
}

#[async_trait]
impl NodeMiddleware<TraceState> for CountingMiddleware {
    async fn around_run(
        &self,
        node_id: &str,
        mut state: TraceState,
        inner: NodeInner<TraceState>,
    ) -> Result<(TraceState, Next), AgentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        state.visited.push(format!("before:{}", node_id));
        inner(state).await
    }
}

/// **Scenario**: Middleware runs around each node, in node order.
#[tokio::test]
async fn middleware_wraps_each_node() {
    let middleware = Arc::new(CountingMiddleware::default());
    let compiled = linear_graph(&["a", "b"])
        .with_middleware(middleware.clone())
        .compile()
        .unwrap();
    let out = compiled.invoke(TraceState::default(), None).await.unwrap();
    assert_eq!(middleware.calls.load(Ordering::SeqCst), 2);
    assert_eq!(out.visited, vec!["before:a", "a", "before:b", "b"]);
}

/// **Scenario**: TracingMiddleware is pass-through: same result as without middleware.
#[tokio::test]
async fn tracing_middleware_is_pass_through() {
    let plain = linear_graph(&["a", "b"]).compile().unwrap();
    let traced = linear_graph(&["a", "b"])
        .with_middleware(Arc::new(TracingMiddleware))
        .compile()
        .unwrap();
    let a = plain.invoke(TraceState::default(), None).await.unwrap();
    let b = traced.invoke(TraceState::default(), None).await.unwrap();
    assert_eq!(a, b);
}

/// In-memory sink for formatted tracing output.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    /// Installs a DEBUG fmt subscriber on this thread writing into the sink.
    fn install(&self) -> tracing::subscriber::DefaultGuard {
        let sink = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || sink.clone())
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

struct FailingNode;

#[async_trait]
impl Node<TraceState> for FailingNode {
    fn id(&self) -> &str {
        "broken"
    }

    async fn run(&self, _state: TraceState) -> Result<(TraceState, Next), AgentError> {
        Err(AgentError::ExecutionFailed("disk on fire".into()))
    }
}

/// **Scenario**: TracingMiddleware opens a `node` span carrying the node id and logs
/// enter/exit with elapsed time for every node.
#[tokio::test]
async fn tracing_middleware_emits_node_span_and_exit_events() {
    let logs = CapturedLogs::default();
    let _guard = logs.install();

    let compiled = linear_graph(&["a", "b"])
        .with_middleware(Arc::new(TracingMiddleware))
        .compile()
        .unwrap();
    compiled.invoke(TraceState::default(), None).await.unwrap();

    let text = logs.text();
    assert!(text.contains(r#"node{node_id="a"}"#), "{}", text);
    assert!(text.contains(r#"node{node_id="b"}"#), "{}", text);
    assert!(text.contains("enter"), "{}", text);
    assert!(text.contains("exit"), "{}", text);
    assert!(text.contains("elapsed_ms="), "{}", text);
}

/// **Scenario**: A failing node is logged at WARN as `exit with error` with the error text.
#[tokio::test]
async fn tracing_middleware_logs_failed_node() {
    let logs = CapturedLogs::default();
    let _guard = logs.install();

    let mut graph = StateGraph::<TraceState>::new();
    graph.add_node("broken", Arc::new(FailingNode)).unwrap();
    graph.add_edge(START, "broken").unwrap();
    graph.add_edge("broken", END).unwrap();
    let compiled = graph
        .with_middleware(Arc::new(TracingMiddleware))
        .compile()
        .unwrap();
    assert!(compiled.invoke(TraceState::default(), None).await.is_err());

    let text = logs.text();
    assert!(text.contains(r#"node{node_id="broken"}"#), "{}", text);
    assert!(text.contains("WARN"), "{}", text);
    assert!(text.contains("exit with error"), "{}", text);
    assert!(text.contains("disk on fire"), "{}", text);
}

/// **Scenario**: `with_run_name` names the run's `graph` span; node spans nest under it.
#[tokio::test]
async fn run_name_is_recorded_on_graph_span() {
    let logs = CapturedLogs::default();
    let _guard = logs.install();

    let compiled = linear_graph(&["a"])
        .with_middleware(Arc::new(TracingMiddleware))
        .compile()
        .unwrap();
    let config = RunnableConfig::default().with_run_name("nightly");
    compiled
        .invoke(TraceState::default(), Some(config))
        .await
        .unwrap();

    let text = logs.text();
    assert!(text.contains(r#"graph{run_name="nightly"}"#), "{}", text);
    assert!(
        text.contains(r#"graph{run_name="nightly"}:node{node_id="a"}"#),
        "{}",
        text
    );
}

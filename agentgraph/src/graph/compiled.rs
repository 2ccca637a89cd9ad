//! Compiled state graph: immutable, runs one state through the nodes.
//!
//! Built by `StateGraph::compile`. Holds nodes, outgoing edges per node and an
//! optional middleware, all behind `Arc`, so a compiled graph is cheap to clone and
//! can serve many concurrent runs; each run owns its own state.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tracing::Instrument;

use crate::error::AgentError;
use crate::stream::{StreamEvent, StreamMode};

use super::logging;
use super::node_middleware::{NodeFuture, NodeMiddleware};
use super::{Next, Node, RunnableConfig, END, START};

/// Node ids and edges of a compiled graph, sorted; compare two compilations with `==`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GraphStructure {
    pub(super) nodes: BTreeSet<String>,
    pub(super) edges: BTreeSet<(String, String)>,
}

impl GraphStructure {
    pub fn nodes(&self) -> &BTreeSet<String> {
        &self.nodes
    }

    pub fn edges(&self) -> &BTreeSet<(String, String)> {
        &self.edges
    }
}

/// Compiled graph: immutable structure, supports `invoke`, `run` and `stream`.
///
/// Execution starts at the single edge out of `START` and ends when `END` is reached
/// or a node returns `Next::End`. Steps run strictly one after another.
pub struct CompiledStateGraph<S> {
    pub(super) nodes: Arc<HashMap<String, Arc<dyn Node<S>>>>,
    pub(super) outgoing: Arc<HashMap<String, Vec<String>>>,
    pub(super) structure: Arc<GraphStructure>,
    pub(super) middleware: Option<Arc<dyn NodeMiddleware<S>>>,
}

impl<S> Clone for CompiledStateGraph<S> {
    fn clone(&self) -> Self {
        Self {
            nodes: Arc::clone(&self.nodes),
            outgoing: Arc::clone(&self.outgoing),
            structure: Arc::clone(&self.structure),
            middleware: self.middleware.clone(),
        }
    }
}

/// Sender side of a streamed run.
struct EventSink<S> {
    tx: mpsc::Sender<StreamEvent<S>>,
    modes: HashSet<StreamMode>,
}

impl<S: Clone> EventSink<S> {
    async fn emit(&self, node_id: &str, state: &S) {
        // A dropped receiver only means nobody is listening; the run carries on.
        if self.modes.contains(&StreamMode::Values) {
            let _ = self.tx.send(StreamEvent::Values(state.clone())).await;
        }
        if self.modes.contains(&StreamMode::Updates) {
            let _ = self
                .tx
                .send(StreamEvent::Updates {
                    node_id: node_id.to_string(),
                    state: state.clone(),
                })
                .await;
        }
    }
}

impl<S> CompiledStateGraph<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// Node ids and edges of this graph.
    pub fn structure(&self) -> &GraphStructure {
        &self.structure
    }

    /// Runs the graph with the given initial state and returns the final state.
    ///
    /// Any step failure aborts the run and is returned as `AgentError::StepExecution`;
    /// the partially updated state is dropped. Pass `None` for the default config.
    pub async fn invoke(&self, state: S, config: Option<RunnableConfig>) -> Result<S, AgentError> {
        let config = config.unwrap_or_default();
        self.run_traced(state, &config, None).await
    }

    /// Builds the initial state from `input`, runs the graph and projects the final state.
    ///
    /// Input validation (`S::try_from`) happens before any node runs, so an invalid
    /// input never reaches a step.
    pub async fn run<I, O>(&self, input: I, config: Option<RunnableConfig>) -> Result<O, AgentError>
    where
        S: TryFrom<I, Error = AgentError>,
        O: From<S>,
    {
        let state = S::try_from(input).map_err(|e| {
            logging::log_graph_error(&e);
            e
        })?;
        let final_state = self.invoke(state, config).await?;
        Ok(O::from(final_state))
    }

    /// Streams graph execution, emitting events via a channel-backed stream.
    ///
    /// Must be called inside a tokio runtime; the run is spawned as its own task.
    pub fn stream(
        &self,
        state: S,
        config: Option<RunnableConfig>,
        stream_mode: impl Into<HashSet<StreamMode>>,
    ) -> ReceiverStream<StreamEvent<S>> {
        let (tx, rx) = mpsc::channel(128);
        let graph = self.clone();
        let sink = EventSink {
            tx,
            modes: stream_mode.into(),
        };

        tokio::spawn(async move {
            let config = config.unwrap_or_default();
            if let Err(e) = graph.run_traced(state, &config, Some(&sink)).await {
                let _ = sink.tx.send(StreamEvent::Error(e)).await;
            }
        });

        ReceiverStream::new(rx)
    }

    async fn run_traced(
        &self,
        state: S,
        config: &RunnableConfig,
        sink: Option<&EventSink<S>>,
    ) -> Result<S, AgentError> {
        let span = logging::graph_span(config.run_name.as_deref());
        async move {
            logging::log_graph_start();
            match self.run_loop(state, config, sink).await {
                Ok((state, steps)) => {
                    logging::log_graph_complete(steps);
                    Ok(state)
                }
                Err(e) => {
                    logging::log_graph_error(&e);
                    Err(e)
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Steps through nodes until END; returns the final state and number of steps run.
    async fn run_loop(
        &self,
        mut state: S,
        config: &RunnableConfig,
        sink: Option<&EventSink<S>>,
    ) -> Result<(S, usize), AgentError> {
        let mut current = self.follow_edge(START)?;
        let mut steps = 0usize;

        while current != END {
            if steps >= config.recursion_limit {
                return Err(AgentError::RecursionLimit(config.recursion_limit));
            }
            steps += 1;

            let node = self.nodes.get(&current).cloned().ok_or_else(|| {
                AgentError::ExecutionFailed(format!("node `{}` missing from compiled graph", current))
            })?;

            logging::log_node_start(&current);
            let (new_state, next) = self
                .run_node(&current, node, state, config)
                .await
                .map_err(|e| AgentError::step(current.clone(), e))?;
            logging::log_node_complete(&current, &next);
            state = new_state;

            if let Some(sink) = sink {
                sink.emit(&current, &state).await;
            }

            current = match next {
                Next::End => break,
                Next::Continue => self.follow_edge(&current)?,
                Next::Node(to) => self.take_edge(&current, to)?,
            };
        }

        Ok((state, steps))
    }

    async fn run_node(
        &self,
        node_id: &str,
        node: Arc<dyn Node<S>>,
        state: S,
        config: &RunnableConfig,
    ) -> Result<(S, Next), AgentError> {
        let fut: NodeFuture<S> = match &self.middleware {
            Some(middleware) => {
                let middleware = Arc::clone(middleware);
                let node_id = node_id.to_string();
                Box::pin(async move {
                    middleware
                        .around_run(
                            &node_id,
                            state,
                            Box::new(move |s: S| -> NodeFuture<S> {
                                Box::pin(async move { node.run(s).await })
                            }),
                        )
                        .await
                })
            }
            None => Box::pin(async move { node.run(state).await }),
        };

        match config.step_timeout {
            Some(limit) => tokio::time::timeout(limit, fut)
                .await
                .map_err(|_| AgentError::Timeout(limit))?,
            None => fut.await,
        }
    }

    /// The single destination out of `from`.
    fn follow_edge(&self, from: &str) -> Result<String, AgentError> {
        let targets = self.outgoing.get(from).map(Vec::as_slice).unwrap_or(&[]);
        match targets {
            [only] => Ok(only.clone()),
            [] => Err(AgentError::ExecutionFailed(format!(
                "node `{}` has no outgoing edge",
                from
            ))),
            many => Err(AgentError::AmbiguousRoute {
                node: from.to_string(),
                candidates: many.to_vec(),
            }),
        }
    }

    /// `to`, if an edge `from -> to` exists.
    fn take_edge(&self, from: &str, to: String) -> Result<String, AgentError> {
        let exists = self
            .outgoing
            .get(from)
            .is_some_and(|targets| targets.contains(&to));
        if exists {
            Ok(to)
        } else {
            Err(AgentError::InvalidRoute {
                from: from.to_string(),
                to,
            })
        }
    }
}

//! Echo agent: `{ message }` in, `{ result: "Test agent received: " + message }` out.

use std::sync::Arc;

use agentgraph::{
    AgentError, CompilationError, CompiledStateGraph, Next, Node, RunnableConfig, StateGraph, END,
    START,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Prefix put in front of every echoed message.
pub const ECHO_PREFIX: &str = "Test agent received: ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EchoInput {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EchoOutput {
    pub result: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EchoState {
    pub message: String,
    pub result: String,
}

impl TryFrom<EchoInput> for EchoState {
    type Error = AgentError;

    fn try_from(input: EchoInput) -> Result<Self, Self::Error> {
        Ok(Self {
            message: input.message,
            result: String::new(),
        })
    }
}

impl From<EchoState> for EchoOutput {
    fn from(state: EchoState) -> Self {
        Self {
            result: state.result,
        }
    }
}

/// The single echo step.
pub struct EchoNode;

#[async_trait]
impl Node<EchoState> for EchoNode {
    fn id(&self) -> &str {
        "echo"
    }

    async fn run(&self, state: EchoState) -> Result<(EchoState, Next), AgentError> {
        let result = format!("{}{}", ECHO_PREFIX, state.message);
        Ok((EchoState { result, ..state }, Next::Continue))
    }
}

/// `START → echo → END`, not yet compiled (attach middleware before compiling if needed).
pub fn echo_graph() -> Result<StateGraph<EchoState>, CompilationError> {
    let mut graph = StateGraph::<EchoState>::new();
    graph
        .add_node("echo", Arc::new(EchoNode))?
        .add_edge(START, "echo")?
        .add_edge("echo", END)?;
    Ok(graph)
}

/// Compiled echo graph.
pub struct EchoAgent {
    graph: CompiledStateGraph<EchoState>,
}

impl EchoAgent {
    pub fn new() -> Result<Self, CompilationError> {
        Self::from_graph(echo_graph()?)
    }

    /// Compiles a (possibly middleware-wrapped) echo graph.
    pub fn from_graph(graph: StateGraph<EchoState>) -> Result<Self, CompilationError> {
        Ok(Self {
            graph: graph.compile()?,
        })
    }

    pub async fn run(
        &self,
        input: EchoInput,
        config: Option<RunnableConfig>,
    ) -> Result<EchoOutput, AgentError> {
        self.graph.run(input, config).await
    }
}

/// Builds an [`EchoAgent`] and runs it once.
pub async fn run_echo(input: EchoInput) -> Result<EchoOutput, AgentError> {
    let agent = EchoAgent::new().map_err(|e| AgentError::ExecutionFailed(e.to_string()))?;
    agent.run(input, None).await
}

//! # agentgraph
//!
//! Minimal state graphs for LLM agents with a **state-in, state-out** design: one state
//! type flows through named nodes connected by explicit edges between the `START` and
//! `END` sentinels.
//!
//! ## Main Modules
//!
//! - [`graph`]: `StateGraph` (builder + validation), `CompiledStateGraph` (runner),
//!   `Node`, `Next`, `FnNode`, node middleware and the `TracingMiddleware` shim.
//! - [`llm`]: `LlmClient` trait, `MockLlm`, structured output decoding and
//!   `ChatOpenAI` (feature `openai`).
//! - [`stream`]: per-step events for `CompiledStateGraph::stream`.
//! - [`error`]: run-time `AgentError`; build-time errors are `CompilationError`.
//!
//! ## Features
//!
//! - `openai`: OpenAI-compatible chat client via `async-openai`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use agentgraph::{FnNode, StateGraph, END, START};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut graph = StateGraph::<String>::new();
//! graph.add_node(
//!     "shout",
//!     Arc::new(FnNode::new("shout", |s: String| async move { Ok(s.to_uppercase()) })),
//! )?;
//! graph.add_edge(START, "shout")?.add_edge("shout", END)?;
//! let compiled = graph.compile()?;
//! let out = compiled.invoke("hello".to_string(), None).await?;
//! assert_eq!(out, "HELLO");
//! # Ok(())
//! # }
//! ```
//!
//! Concrete agents (echo, resume analysis) live in `agentgraph-samples`.

pub mod error;
pub mod graph;
pub mod llm;
pub mod message;
pub mod stream;

pub use error::AgentError;
pub use graph::{
    CompilationError, CompiledStateGraph, FnNode, GraphStructure, GraphViolation, Next, Node,
    NodeFuture, NodeInner, NodeMiddleware, RunnableConfig, StateGraph, TracingMiddleware,
    DEFAULT_RECURSION_LIMIT, END, START,
};
pub use llm::{
    decode_structured, invoke_structured, LlmClient, LlmResponse, MockLlm, OutputSchema,
    StructuredOutput,
};
#[cfg(feature = "openai")]
pub use llm::ChatOpenAI;
pub use message::Message;
pub use stream::{StreamEvent, StreamMode};

//! Closure-backed node for steps that need no struct of their own.

use std::future::Future;
use std::marker::PhantomData;

use async_trait::async_trait;

use crate::error::AgentError;

use super::{Next, Node};

/// Node built from an async closure `S -> Result<S, AgentError>`; always returns `Next::Continue`.
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use agentgraph::{FnNode, StateGraph, END, START};
///
/// let mut graph = StateGraph::<i32>::new();
/// graph.add_node("inc", Arc::new(FnNode::new("inc", |s: i32| async move { Ok(s + 1) }))).unwrap();
/// graph.add_edge(START, "inc").unwrap();
/// graph.add_edge("inc", END).unwrap();
/// let compiled = graph.compile().unwrap();
/// ```
pub struct FnNode<S, F> {
    id: String,
    f: F,
    _state: PhantomData<fn(S) -> S>,
}

impl<S, F, Fut> FnNode<S, F>
where
    F: Fn(S) -> Fut + Send + Sync,
    Fut: Future<Output = Result<S, AgentError>> + Send,
{
    pub fn new(id: impl Into<String>, f: F) -> Self {
        Self {
            id: id.into(),
            f,
            _state: PhantomData,
        }
    }
}

#[async_trait]
impl<S, F, Fut> Node<S> for FnNode<S, F>
where
    S: Clone + Send + Sync + 'static,
    F: Fn(S) -> Fut + Send + Sync,
    Fut: Future<Output = Result<S, AgentError>> + Send,
{
    fn id(&self) -> &str {
        &self.id
    }

    async fn run(&self, state: S) -> Result<(S, Next), AgentError> {
        let state = (self.f)(state).await?;
        Ok((state, Next::Continue))
    }
}

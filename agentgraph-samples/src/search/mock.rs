//! Canned [`WebSearch`] for tests.

use std::sync::Mutex;

use agentgraph::AgentError;
use async_trait::async_trait;

use super::{SearchHit, WebSearch};

/// Returns the same hits for every query (or fails when built with `failing`) and records queries.
#[derive(Debug, Default)]
pub struct MockSearch {
    hits: Vec<SearchHit>,
    failure: Option<String>,
    queries: Mutex<Vec<String>>,
}

impl MockSearch {
    pub fn new(hits: Vec<SearchHit>) -> Self {
        Self {
            hits,
            ..Self::default()
        }
    }

    /// Every search fails with `ExecutionFailed(message)`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    /// Queries seen so far, in call order.
    pub fn queries(&self) -> Vec<String> {
        self.queries
            .lock()
            .map(|q| q.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl WebSearch for MockSearch {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, AgentError> {
        if let Ok(mut queries) = self.queries.lock() {
            queries.push(query.to_string());
        }
        match &self.failure {
            Some(message) => Err(AgentError::ExecutionFailed(message.clone())),
            None => Ok(self.hits.clone()),
        }
    }
}

//! Mock LLM for tests and examples.
//!
//! Returns a fixed text reply and fixed structured replies keyed by schema name.
//! Every request is recorded so tests can assert on prompts and call counts.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::AgentError;
use crate::llm::{LlmClient, LlmResponse, OutputSchema};
use crate::message::Message;

/// Mock LLM: fixed assistant text and fixed structured replies.
///
/// **Interaction**: Implements `LlmClient`; injected into steps in place of a real client.
#[derive(Debug, Default)]
pub struct MockLlm {
    /// Text returned by `invoke`.
    content: String,
    /// Values returned by `invoke_structured`, keyed by `OutputSchema::name`.
    structured: HashMap<String, Value>,
    calls: AtomicUsize,
    requests: Mutex<Vec<Vec<Message>>>,
}

impl MockLlm {
    /// Build a mock whose text replies are `content`.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Set the value returned for structured calls against schema `name` (builder).
    pub fn with_structured(mut self, name: impl Into<String>, value: Value) -> Self {
        self.structured.insert(name.into(), value);
        self
    }

    /// Number of `invoke` / `invoke_structured` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Message lists received so far, oldest first.
    pub fn requests(&self) -> Vec<Vec<Message>> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    fn record(&self, messages: &[Message]) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(messages.to_vec());
        }
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn invoke(&self, messages: &[Message]) -> Result<LlmResponse, AgentError> {
        self.record(messages);
        Ok(LlmResponse {
            content: self.content.clone(),
        })
    }

    async fn invoke_structured(
        &self,
        messages: &[Message],
        schema: &OutputSchema,
    ) -> Result<Value, AgentError> {
        self.record(messages);
        self.structured.get(&schema.name).cloned().ok_or_else(|| {
            AgentError::ExecutionFailed(format!(
                "mock has no structured reply for `{}`",
                schema.name
            ))
        })
    }
}

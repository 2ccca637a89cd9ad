//! Language-model collaborator.
//!
//! Steps receive an `Arc<dyn LlmClient>` at construction and call it with a short
//! list of role-tagged messages. Free-text replies come back as `LlmResponse`;
//! structured replies are requested with an `OutputSchema` and decoded strictly
//! (see [`structured`]).

mod mock;
pub mod structured;

#[cfg(feature = "openai")]
mod openai;

pub use mock::MockLlm;
pub use structured::{decode_structured, invoke_structured, OutputSchema, StructuredOutput};

#[cfg(feature = "openai")]
pub use openai::ChatOpenAI;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::message::Message;

/// Response from an LLM completion: assistant message text.
///
/// **Interaction**: Returned by `LlmClient::invoke()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmResponse {
    /// Assistant message content (plain text).
    pub content: String,
}

/// LLM client: given messages, returns assistant text or a structured JSON value.
///
/// Implementations: `MockLlm` (fixed replies), `ChatOpenAI` (real API, feature `openai`).
/// Retries and network timeouts belong to the implementation, not to the graph runner.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Invoke one turn: read messages, return assistant content.
    async fn invoke(&self, messages: &[Message]) -> Result<LlmResponse, AgentError>;

    /// Invoke one turn and return a JSON value meant to match `schema`.
    ///
    /// The default folds the JSON schema instruction into the leading system message
    /// (or prepends one), calls `invoke` and parses the reply as JSON. Shape checks
    /// happen in [`decode_structured`].
    async fn invoke_structured(
        &self,
        messages: &[Message],
        schema: &OutputSchema,
    ) -> Result<serde_json::Value, AgentError> {
        let request = with_schema_instruction(messages, schema);
        let response = self.invoke(&request).await?;
        structured::parse_json_reply(&response.content, &schema.name)
    }
}

/// Returns `messages` with the schema instruction in a single leading system message.
///
/// Chat APIs expect at most one system message and expect it first.
fn with_schema_instruction(messages: &[Message], schema: &OutputSchema) -> Vec<Message> {
    let instruction = schema.instruction();
    let mut request = Vec::with_capacity(messages.len() + 1);
    match messages.split_first() {
        Some((Message::System(system), rest)) => {
            request.push(Message::system(format!("{}\n\n{}", system, instruction)));
            request.extend_from_slice(rest);
        }
        _ => {
            request.push(Message::system(instruction));
            request.extend_from_slice(messages);
        }
    }
    request
}

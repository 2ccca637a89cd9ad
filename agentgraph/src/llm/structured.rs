//! Structured model output: JSON schema in, validated Rust value out.
//!
//! Decoding fails closed. A reply that is not JSON, misses a field, carries an
//! unknown field or breaks a value constraint is a `SchemaMismatch`; partial data is
//! never accepted.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::AgentError;
use crate::message::Message;

use super::LlmClient;

/// Named JSON schema describing the reply a structured call expects.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputSchema {
    pub name: String,
    pub description: String,
    pub schema: Value,
}

impl OutputSchema {
    pub fn new(name: impl Into<String>, description: impl Into<String>, schema: Value) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schema,
        }
    }

    /// System instruction asking the model to reply with a single JSON object.
    pub fn instruction(&self) -> String {
        format!(
            "Respond with a single JSON object named `{}` ({}). \
             It must validate against this JSON schema; do not add any other text.\n{}",
            self.name, self.description, self.schema
        )
    }
}

/// A Rust type that a structured model reply decodes into.
///
/// Implementors are plain serde types (use `#[serde(deny_unknown_fields)]`) plus the
/// schema sent to the model and any value checks serde cannot express.
pub trait StructuredOutput: DeserializeOwned {
    fn schema() -> OutputSchema;

    /// Semantic checks after deserialization; return the reason on failure.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Strictly decodes `value` into `T`, then runs `T::validate`.
pub fn decode_structured<T: StructuredOutput>(value: Value) -> Result<T, AgentError> {
    let name = T::schema().name;
    let decoded: T = serde_json::from_value(value).map_err(|e| AgentError::SchemaMismatch {
        schema: name.clone(),
        reason: e.to_string(),
    })?;
    decoded
        .validate()
        .map_err(|reason| AgentError::SchemaMismatch {
            schema: name,
            reason,
        })?;
    Ok(decoded)
}

/// Calls `llm` for a `T`-shaped reply and decodes it.
pub async fn invoke_structured<T: StructuredOutput>(
    llm: &dyn LlmClient,
    messages: &[Message],
) -> Result<T, AgentError> {
    let schema = T::schema();
    let value = llm.invoke_structured(messages, &schema).await?;
    decode_structured(value)
}

/// Parses a model reply as one JSON object; a single surrounding markdown fence is allowed.
pub(crate) fn parse_json_reply(reply: &str, schema: &str) -> Result<Value, AgentError> {
    let body = strip_code_fence(reply.trim());
    let value: Value = serde_json::from_str(body).map_err(|e| AgentError::SchemaMismatch {
        schema: schema.to_string(),
        reason: format!("reply is not valid JSON: {}", e),
    })?;
    if !value.is_object() {
        return Err(AgentError::SchemaMismatch {
            schema: schema.to_string(),
            reason: "reply is not a JSON object".to_string(),
        });
    }
    Ok(value)
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let Some(rest) = rest.strip_suffix("```") else {
        return text;
    };
    // Drop an optional language tag on the opening fence line.
    match rest.split_once('\n') {
        Some((tag, body)) if !tag.trim_start().starts_with('{') => body.trim(),
        _ => rest.trim(),
    }
}

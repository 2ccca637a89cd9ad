//! `load_resume`: resolves the resume source into `resume_text`.

use std::path::Path;
use std::sync::Arc;

use agentgraph::{AgentError, Next, Node};
use async_trait::async_trait;

use crate::document::{decode_base64, DocumentDecoder};

use super::state::ResumeState;

pub struct LoadResumeNode {
    decoder: Arc<dyn DocumentDecoder>,
}

impl LoadResumeNode {
    pub fn new(decoder: Arc<dyn DocumentDecoder>) -> Self {
        Self { decoder }
    }
}

#[async_trait]
impl Node<ResumeState> for LoadResumeNode {
    fn id(&self) -> &str {
        super::LOAD_RESUME
    }

    /// File path wins over base64, which wins over inline text.
    async fn run(&self, state: ResumeState) -> Result<(ResumeState, Next), AgentError> {
        let resume_text = if let Some(path) = &state.resume_file_path {
            tracing::debug!(path = %path, "loading resume file");
            self.decoder.decode_file(Path::new(path)).await?.trim().to_string()
        } else if let Some(encoded) = &state.resume_base64 {
            let bytes = decode_base64(encoded)?;
            tracing::debug!(bytes = bytes.len(), "decoding base64 resume");
            self.decoder.decode_pdf_bytes(bytes).await?.trim().to_string()
        } else {
            state.resume_text.trim().to_string()
        };

        if resume_text.is_empty() {
            return Err(AgentError::Validation(
                "no text could be read from the resume".to_string(),
            ));
        }
        Ok((
            ResumeState {
                resume_text,
                ..state
            },
            Next::Continue,
        ))
    }
}

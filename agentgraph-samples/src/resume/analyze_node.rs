//! `analyze_resume`: scores the resume and lists findings.

use std::sync::Arc;

use agentgraph::{invoke_structured, AgentError, LlmClient, Next, Node};
use async_trait::async_trait;

use super::prompts;
use super::schema::ResumeAnalysis;
use super::state::ResumeState;

pub struct AnalyzeNode {
    llm: Arc<dyn LlmClient>,
}

impl AnalyzeNode {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Node<ResumeState> for AnalyzeNode {
    fn id(&self) -> &str {
        super::ANALYZE_RESUME
    }

    async fn run(&self, state: ResumeState) -> Result<(ResumeState, Next), AgentError> {
        let analysis: ResumeAnalysis =
            invoke_structured(self.llm.as_ref(), &prompts::analysis(&state)).await?;
        let overall_score = u8::try_from(analysis.score).map_err(|_| AgentError::SchemaMismatch {
            schema: "ResumeAnalysis".to_string(),
            reason: format!("score {} is outside 0..=100", analysis.score),
        })?;
        let resume_analysis = analysis.render();
        Ok((
            ResumeState {
                overall_score,
                resume_analysis,
                strengths: analysis.strengths,
                weaknesses: analysis.weaknesses,
                specific_improvements: analysis.improvements,
                ..state
            },
            Next::Continue,
        ))
    }
}

//! `generate_improvements`: rewritten summary, bullet and skills sections.

use std::sync::Arc;

use agentgraph::{invoke_structured, AgentError, LlmClient, Next, Node};
use async_trait::async_trait;

use super::prompts;
use super::schema::ImprovedSections;
use super::state::ResumeState;

pub struct ImproveNode {
    llm: Arc<dyn LlmClient>,
}

impl ImproveNode {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Node<ResumeState> for ImproveNode {
    fn id(&self) -> &str {
        super::GENERATE_IMPROVEMENTS
    }

    async fn run(&self, state: ResumeState) -> Result<(ResumeState, Next), AgentError> {
        let sections: ImprovedSections =
            invoke_structured(self.llm.as_ref(), &prompts::improvement(&state)).await?;
        Ok((
            ResumeState {
                improved_sections: sections.into_map(),
                ..state
            },
            Next::Continue,
        ))
    }
}

//! `research_best_practices`: best-practice summary, from web results or the model alone.

use std::sync::Arc;

use agentgraph::{AgentError, LlmClient, Next, Node};
use async_trait::async_trait;

use crate::search::{format_hits, WebSearch};

use super::prompts;
use super::state::ResumeState;

/// How the research step gathers material. Decided once when the agent is built.
#[derive(Clone)]
pub enum ResearchMode {
    WebSearch(Arc<dyn WebSearch>),
    ModelOnly,
}

impl ResearchMode {
    /// `WebSearch` when a backend is configured, else `ModelOnly`.
    pub fn from_search(search: Option<Arc<dyn WebSearch>>) -> Self {
        match search {
            Some(search) => Self::WebSearch(search),
            None => Self::ModelOnly,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::WebSearch(_) => "web_search",
            Self::ModelOnly => "model_only",
        }
    }
}

impl std::fmt::Debug for ResearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

pub struct ResearchNode {
    llm: Arc<dyn LlmClient>,
    mode: ResearchMode,
}

impl ResearchNode {
    pub fn new(llm: Arc<dyn LlmClient>, mode: ResearchMode) -> Self {
        Self { llm, mode }
    }
}

#[async_trait]
impl Node<ResumeState> for ResearchNode {
    fn id(&self) -> &str {
        super::RESEARCH_BEST_PRACTICES
    }

    async fn run(&self, state: ResumeState) -> Result<(ResumeState, Next), AgentError> {
        let messages = match &self.mode {
            ResearchMode::WebSearch(search) => {
                let query = prompts::research_query(&state);
                let hits = search.search(&query).await?;
                tracing::debug!(query = %query, hits = hits.len(), "research search");
                prompts::research_from_results(&state, &format_hits(&hits))
            }
            ResearchMode::ModelOnly => prompts::research_model_only(&state),
        };
        let reply = self.llm.invoke(&messages).await?;
        Ok((
            ResumeState {
                best_practices: reply.content,
                ..state
            },
            Next::Continue,
        ))
    }
}

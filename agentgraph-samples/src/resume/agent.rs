//! Resume agent assembly: collaborators in, compiled graph out.

use std::sync::Arc;

use agentgraph::{
    AgentError, CompilationError, CompiledStateGraph, LlmClient, NodeMiddleware, RunnableConfig,
    StateGraph, END, START,
};

use crate::document::{DocumentDecoder, FsDocumentDecoder};
use crate::search::WebSearch;

use super::{
    AnalyzeNode, FinalizeNode, ImproveNode, LoadResumeNode, ResearchMode, ResearchNode,
    ResumeInput, ResumeOutput, ResumeState, STEP_ORDER,
};

/// Builds the uncompiled five-step graph.
pub fn resume_graph(
    llm: Arc<dyn LlmClient>,
    research: ResearchMode,
    decoder: Arc<dyn DocumentDecoder>,
) -> Result<StateGraph<ResumeState>, CompilationError> {
    let mut graph = StateGraph::<ResumeState>::new();
    graph
        .add_node(super::LOAD_RESUME, Arc::new(LoadResumeNode::new(decoder)))?
        .add_node(
            super::RESEARCH_BEST_PRACTICES,
            Arc::new(ResearchNode::new(llm.clone(), research)),
        )?
        .add_node(super::ANALYZE_RESUME, Arc::new(AnalyzeNode::new(llm.clone())))?
        .add_node(super::GENERATE_IMPROVEMENTS, Arc::new(ImproveNode::new(llm)))?
        .add_node(super::FINALIZE_OUTPUT, Arc::new(FinalizeNode))?;

    let mut from = START;
    for id in STEP_ORDER {
        graph.add_edge(from, id)?;
        from = id;
    }
    graph.add_edge(from, END)?;
    Ok(graph)
}

/// Compiled resume agent. Cheap to share; runs may overlap.
pub struct ResumeAgent {
    graph: CompiledStateGraph<ResumeState>,
    research: ResearchMode,
}

impl ResumeAgent {
    /// Agent with the filesystem decoder; web search is used when `search` is given.
    pub fn new(
        llm: Arc<dyn LlmClient>,
        search: Option<Arc<dyn WebSearch>>,
    ) -> Result<Self, CompilationError> {
        Self::builder(llm).search(search).build()
    }

    pub fn builder(llm: Arc<dyn LlmClient>) -> ResumeAgentBuilder {
        ResumeAgentBuilder {
            llm,
            research: ResearchMode::ModelOnly,
            decoder: Arc::new(FsDocumentDecoder),
            middleware: None,
        }
    }

    pub fn graph(&self) -> &CompiledStateGraph<ResumeState> {
        &self.graph
    }

    pub fn research_mode(&self) -> &ResearchMode {
        &self.research
    }

    pub async fn run(
        &self,
        input: ResumeInput,
        config: Option<RunnableConfig>,
    ) -> Result<ResumeOutput, AgentError> {
        self.graph.run(input, config).await
    }
}

/// Builder for [`ResumeAgent`].
pub struct ResumeAgentBuilder {
    llm: Arc<dyn LlmClient>,
    research: ResearchMode,
    decoder: Arc<dyn DocumentDecoder>,
    middleware: Option<Arc<dyn NodeMiddleware<ResumeState>>>,
}

impl ResumeAgentBuilder {
    pub fn search(mut self, search: Option<Arc<dyn WebSearch>>) -> Self {
        self.research = ResearchMode::from_search(search);
        self
    }

    pub fn decoder(mut self, decoder: Arc<dyn DocumentDecoder>) -> Self {
        self.decoder = decoder;
        self
    }

    pub fn middleware(mut self, middleware: Arc<dyn NodeMiddleware<ResumeState>>) -> Self {
        self.middleware = Some(middleware);
        self
    }

    pub fn build(self) -> Result<ResumeAgent, CompilationError> {
        let mut graph = resume_graph(self.llm, self.research.clone(), self.decoder)?;
        if let Some(middleware) = self.middleware {
            graph = graph.with_middleware(middleware);
        }
        tracing::debug!(research = self.research.name(), "resume agent compiled");
        Ok(ResumeAgent {
            graph: graph.compile()?,
            research: self.research,
        })
    }
}

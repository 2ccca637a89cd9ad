use std::path::Path;
use std::sync::Arc;

use agentgraph::LlmClient;
use agentgraph_samples::resume::{ResumeAgent, ResumeInput, ResumeOutput};

use crate::config::{Error, RunConfig};
use crate::middleware::WithNodeTracing;

/// Builds [`ResumeInput`] from CLI sources; `base64_file` holds base64 text, read as-is.
pub async fn resume_input(
    text: Option<String>,
    file: Option<&Path>,
    base64_file: Option<&Path>,
    role: Option<String>,
    years: Option<u32>,
) -> Result<ResumeInput, Error> {
    let resume_base64 = match base64_file {
        Some(path) => Some(tokio::fs::read_to_string(path).await.map_err(|e| {
            format!("cannot read base64 file {}: {}", path.display(), e)
        })?),
        None => None,
    };
    Ok(ResumeInput {
        resume_text: text,
        resume_file_path: file.map(|p| p.display().to_string()),
        resume_base64,
        target_role: role,
        years_experience: years,
    })
}

/// Runs the resume agent with `ChatOpenAI` built from `config`.
pub async fn run_resume(input: ResumeInput, config: &RunConfig) -> Result<ResumeOutput, Error> {
    let llm: Arc<dyn LlmClient> = Arc::new(config.chat_model()?);
    run_resume_with_llm(llm, input, config).await
}

/// Runs the resume agent with a caller-supplied model; search and limits come from `config`.
pub async fn run_resume_with_llm(
    llm: Arc<dyn LlmClient>,
    input: ResumeInput,
    config: &RunConfig,
) -> Result<ResumeOutput, Error> {
    let agent = ResumeAgent::builder(llm)
        .search(config.web_search())
        .with_node_tracing()
        .build()?;
    tracing::info!(
        research = agent.research_mode().name(),
        model = %config.model,
        "running resume agent"
    );
    Ok(agent.run(input, Some(config.runnable_config())).await?)
}

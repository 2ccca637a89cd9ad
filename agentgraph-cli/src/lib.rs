//! agentgraph-cli library: config loading and run entry points for the sample agents.
//!
//! Reads OpenAI / Tavily settings from env (and `.env`), builds the echo or resume
//! agent and runs it once.
//!
//! ## Usage
//!
//! ```rust,no_run,ignore
//! let config = agentgraph_cli::RunConfig::from_env()?;
//! let out = agentgraph_cli::run_resume(input, &config).await?;
//! println!("{}", serde_json::to_string_pretty(&out)?);
//! ```

mod config;
mod logging;
mod middleware;
mod run;

pub use agentgraph_samples::{EchoOutput, ResumeInput, ResumeOutput};
pub use config::{Error, RunConfig, RunOptions};
pub use logging::init_logging;
pub use middleware::WithNodeTracing;
pub use run::{resume_input, run_echo, run_resume, run_resume_with_llm};

#[cfg(test)]
mod tests;

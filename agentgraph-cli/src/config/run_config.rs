//! Run config: OpenAI endpoint and model, Tavily search, run limits. Filled from env / .env.

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use agentgraph::{ChatOpenAI, RunnableConfig, DEFAULT_RECURSION_LIMIT};
use agentgraph_samples::search::{TavilySearch, WebSearch, DEFAULT_MAX_RESULTS};
use async_openai::config::OpenAIConfig;

use super::RunOptions;

/// Error type used for config loading and CLI runs.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

#[derive(Clone, Debug)]
pub struct RunConfig {
    /// OpenAI-compatible API base URL.
    pub api_base: String,
    /// Required for the resume agent only.
    pub api_key: Option<String>,
    pub model: String,
    /// Sampling temperature 0–2. Default: unset (use API default).
    pub temperature: Option<f32>,
    /// Enables web search in the research step when set.
    pub tavily_api_key: Option<String>,
    pub tavily_max_results: u32,
    pub recursion_limit: usize,
    pub step_timeout: Option<Duration>,
    /// Cleared by `--no-search`.
    pub use_search: bool,
}

impl RunConfig {
    /// Fill config from env vars. Call `dotenv::dotenv().ok()` first to pick up `.env`.
    ///
    /// `OPENAI_API_BASE`, `OPENAI_MODEL`, `TAVILY_MAX_RESULTS` and `RECURSION_LIMIT` have
    /// defaults; `OPENAI_API_KEY`, `OPENAI_TEMPERATURE`, `TAVILY_API_KEY` and
    /// `STEP_TIMEOUT_SECS` are optional. Unparsable numbers are an error.
    pub fn from_env() -> Result<Self, Error> {
        let api_key = non_empty_var("OPENAI_API_KEY");
        let api_base = non_empty_var("OPENAI_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let model = non_empty_var("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let temperature = parse_var::<f32>("OPENAI_TEMPERATURE")?;
        let tavily_api_key = non_empty_var("TAVILY_API_KEY");
        let tavily_max_results =
            parse_var::<u32>("TAVILY_MAX_RESULTS")?.unwrap_or(DEFAULT_MAX_RESULTS);
        let recursion_limit =
            parse_var::<usize>("RECURSION_LIMIT")?.unwrap_or(DEFAULT_RECURSION_LIMIT);
        let step_timeout = parse_var::<u64>("STEP_TIMEOUT_SECS")?.map(Duration::from_secs);
        Ok(Self {
            api_base,
            api_key,
            model,
            temperature,
            tavily_api_key,
            tavily_max_results,
            recursion_limit,
            step_timeout,
            use_search: true,
        })
    }

    /// Apply optional overrides from `RunOptions`; only set fields override.
    pub fn apply_options(&mut self, options: &RunOptions) {
        if let Some(model) = &options.model {
            self.model = model.clone();
        }
        if let Some(t) = options.temperature {
            self.temperature = Some(t);
        }
        if options.no_search {
            self.use_search = false;
        }
        if let Some(secs) = options.timeout_secs {
            self.step_timeout = Some(Duration::from_secs(secs));
        }
        if let Some(limit) = options.recursion_limit {
            self.recursion_limit = limit;
        }
    }

    /// Per-run limits for the graph runner.
    pub fn runnable_config(&self) -> RunnableConfig {
        let config = RunnableConfig::default().with_recursion_limit(self.recursion_limit);
        match self.step_timeout {
            Some(timeout) => config.with_step_timeout(timeout),
            None => config,
        }
    }

    /// Chat model for the resume agent; fails when `OPENAI_API_KEY` is missing.
    pub fn chat_model(&self) -> Result<ChatOpenAI, Error> {
        let api_key = self.api_key.clone().ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "OPENAI_API_KEY is not set; please configure it in .env",
            )
        })?;
        let openai_config = OpenAIConfig::new()
            .with_api_base(&self.api_base)
            .with_api_key(api_key);
        let mut llm = ChatOpenAI::with_config(openai_config, self.model.clone());
        if let Some(t) = self.temperature {
            llm = llm.with_temperature(t);
        }
        Ok(llm)
    }

    /// Tavily search when a key is configured and search is not disabled.
    pub fn web_search(&self) -> Option<Arc<dyn WebSearch>> {
        if !self.use_search {
            return None;
        }
        let key = self.tavily_api_key.as_ref()?;
        Some(Arc::new(
            TavilySearch::new(key.clone()).with_max_results(self.tavily_max_results),
        ))
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_var<T>(name: &str) -> Result<Option<T>, Error>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match non_empty_var(name) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| format!("{} = {:?} is invalid: {}", name, raw, e).into()),
    }
}

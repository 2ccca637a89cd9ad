//! Tavily search API client (`POST /search`).

use agentgraph::AgentError;
use async_trait::async_trait;
use serde_json::{json, Value};

use super::{SearchHit, WebSearch};

pub const TAVILY_ENDPOINT: &str = "https://api.tavily.com/search";
pub const DEFAULT_MAX_RESULTS: u32 = 5;

/// Tavily-backed [`WebSearch`]. Build it only when an API key is configured.
pub struct TavilySearch {
    api_key: String,
    max_results: u32,
    endpoint: String,
    http: reqwest::Client,
}

impl TavilySearch {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            max_results: DEFAULT_MAX_RESULTS,
            endpoint: TAVILY_ENDPOINT.to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    /// Overrides the endpoint (proxies, local stubs).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn max_results(&self) -> u32 {
        self.max_results
    }
}

#[async_trait]
impl WebSearch for TavilySearch {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, AgentError> {
        tracing::debug!(query, max_results = self.max_results, "tavily search");
        let resp = self
            .http
            .post(&self.endpoint)
            .json(&json!({
                "api_key": self.api_key,
                "query": query,
                "max_results": self.max_results,
            }))
            .send()
            .await
            .map_err(|e| AgentError::ExecutionFailed(format!("web search request failed: {}", e)))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AgentError::ExecutionFailed(format!(
                "web search returned HTTP {}",
                status
            )));
        }

        let body: Value = resp
            .json()
            .await
            .map_err(|e| AgentError::ExecutionFailed(format!("web search reply unreadable: {}", e)))?;
        Ok(hits_from_body(&body))
    }
}

/// Pulls `results[]` out of a Tavily reply; missing fields become empty strings.
fn hits_from_body(body: &Value) -> Vec<SearchHit> {
    body["results"]
        .as_array()
        .map(|arr| {
            arr.iter()
                .map(|r| SearchHit {
                    title: r["title"].as_str().unwrap_or("").to_string(),
                    url: r["url"].as_str().unwrap_or("").to_string(),
                    content: r["content"].as_str().unwrap_or("").to_string(),
                    score: r["score"].as_f64(),
                })
                .collect()
        })
        .unwrap_or_default()
}

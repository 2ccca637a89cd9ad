//! Web search collaborator for the research step.
//!
//! `TavilySearch` is the real backend; `MockSearch` records queries and returns canned hits.

mod mock;
mod tavily;

pub use mock::MockSearch;
pub use tavily::{TavilySearch, DEFAULT_MAX_RESULTS, TAVILY_ENDPOINT};

use agentgraph::AgentError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One ranked search result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
    pub content: String,
    #[serde(default)]
    pub score: Option<f64>,
}

/// Query → ranked hits.
#[async_trait]
pub trait WebSearch: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, AgentError>;
}

/// Renders hits as prompt text: title, snippet and URL per hit, separated by rules.
pub fn format_hits(hits: &[SearchHit]) -> String {
    if hits.is_empty() {
        return "No results found.".to_string();
    }
    hits.iter()
        .map(|h| format!("**{}**\n{}\nURL: {}", h.title, h.content, h.url))
        .collect::<Vec<_>>()
        .join("\n\n---\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(title: &str) -> SearchHit {
        SearchHit {
            title: title.into(),
            url: format!("https://example.com/{}", title),
            content: format!("about {}", title),
            score: None,
        }
    }

    /// **Scenario**: Hits render in order with title, content and URL.
    #[test]
    fn format_hits_keeps_order() {
        let text = format_hits(&[hit("a"), hit("b")]);
        assert_eq!(
            text,
            "**a**\nabout a\nURL: https://example.com/a\n\n---\n\n**b**\nabout b\nURL: https://example.com/b"
        );
    }

    /// **Scenario**: No hits renders a placeholder instead of an empty prompt section.
    #[test]
    fn format_hits_empty() {
        assert_eq!(format_hits(&[]), "No results found.");
    }
}

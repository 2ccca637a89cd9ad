//! Resume agent input, working state and output.

use std::collections::BTreeMap;

use agentgraph::AgentError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TARGET_ROLE: &str = "Software Engineer";

/// Caller input. Provide at least one of `resume_text`, `resume_file_path`, `resume_base64`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeInput {
    pub resume_text: Option<String>,
    /// Local `.pdf` or `.txt` file.
    pub resume_file_path: Option<String>,
    /// Base64-encoded PDF.
    pub resume_base64: Option<String>,
    pub target_role: Option<String>,
    pub years_experience: Option<u32>,
}

/// State carried through the five resume steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeState {
    pub resume_text: String,
    pub resume_file_path: Option<String>,
    pub resume_base64: Option<String>,
    pub target_role: String,
    pub years_experience: u32,
    pub best_practices: String,
    /// Human-readable rendering of the analysis.
    pub resume_analysis: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub specific_improvements: Vec<String>,
    pub improved_sections: BTreeMap<String, String>,
    pub overall_score: u8,
}

impl Default for ResumeState {
    fn default() -> Self {
        Self {
            resume_text: String::new(),
            resume_file_path: None,
            resume_base64: None,
            target_role: DEFAULT_TARGET_ROLE.to_string(),
            years_experience: 0,
            best_practices: String::new(),
            resume_analysis: String::new(),
            strengths: Vec::new(),
            weaknesses: Vec::new(),
            specific_improvements: Vec::new(),
            improved_sections: BTreeMap::new(),
            overall_score: 0,
        }
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl TryFrom<ResumeInput> for ResumeState {
    type Error = AgentError;

    /// Fails with `MissingInput` when no resume source is given; blank strings count as absent.
    fn try_from(input: ResumeInput) -> Result<Self, Self::Error> {
        let text = present(input.resume_text);
        let file_path = present(input.resume_file_path);
        let base64 = present(input.resume_base64);

        let sources = [text.is_some(), file_path.is_some(), base64.is_some()]
            .iter()
            .filter(|s| **s)
            .count();
        if sources == 0 {
            return Err(AgentError::MissingInput(
                "provide one of resume_text, resume_file_path or resume_base64".to_string(),
            ));
        }
        if sources > 1 {
            tracing::warn!(
                "several resume sources given; using file path first, then base64, then text"
            );
        }

        Ok(Self {
            resume_text: text.unwrap_or_default(),
            resume_file_path: file_path,
            resume_base64: base64,
            target_role: present(input.target_role)
                .map(|r| r.trim().to_string())
                .unwrap_or_else(|| DEFAULT_TARGET_ROLE.to_string()),
            years_experience: input.years_experience.unwrap_or(0),
            ..Self::default()
        })
    }
}

/// Final result of a resume run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeOutput {
    /// 0 to 100.
    pub overall_score: u8,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub specific_improvements: Vec<String>,
    pub best_practices: String,
    pub improved_sections: BTreeMap<String, String>,
}

impl From<ResumeState> for ResumeOutput {
    fn from(state: ResumeState) -> Self {
        Self {
            overall_score: state.overall_score,
            strengths: state.strengths,
            weaknesses: state.weaknesses,
            specific_improvements: state.specific_improvements,
            best_practices: state.best_practices,
            improved_sections: state.improved_sections,
        }
    }
}

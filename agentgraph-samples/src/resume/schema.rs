//! Structured replies expected from the model in the analyze and improve steps.

use std::collections::BTreeMap;

use agentgraph::{OutputSchema, StructuredOutput};
use serde::Deserialize;
use serde_json::json;

/// Analysis reply: score plus strengths, weaknesses and improvements.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResumeAnalysis {
    pub score: i64,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub improvements: Vec<String>,
}

impl StructuredOutput for ResumeAnalysis {
    fn schema() -> OutputSchema {
        OutputSchema::new(
            "ResumeAnalysis",
            "quality score and findings for a resume",
            json!({
                "type": "object",
                "properties": {
                    "score": {
                        "type": "integer", "minimum": 0, "maximum": 100,
                        "description": "Overall resume quality score from 0-100"
                    },
                    "strengths": {
                        "type": "array", "items": { "type": "string" },
                        "description": "3-5 key strengths in the resume"
                    },
                    "weaknesses": {
                        "type": "array", "items": { "type": "string" },
                        "description": "3-5 areas that need improvement"
                    },
                    "improvements": {
                        "type": "array", "items": { "type": "string" },
                        "description": "3-5 specific actionable improvements"
                    }
                },
                "required": ["score", "strengths", "weaknesses", "improvements"],
                "additionalProperties": false
            }),
        )
    }

    fn validate(&self) -> Result<(), String> {
        if !(0..=100).contains(&self.score) {
            return Err(format!("score {} is outside 0..=100", self.score));
        }
        Ok(())
    }
}

impl ResumeAnalysis {
    /// "Score: N", then bulleted strengths and weaknesses.
    pub fn render(&self) -> String {
        format!(
            "Score: {}\n\nStrengths:\n{}\n\nWeaknesses:\n{}",
            self.score,
            bullets(&self.strengths),
            bullets(&self.weaknesses)
        )
    }
}

/// Rewritten resume sections.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImprovedSections {
    pub professional_summary: String,
    pub sample_bullet: String,
    pub technical_skills: String,
}

impl StructuredOutput for ImprovedSections {
    fn schema() -> OutputSchema {
        OutputSchema::new(
            "ImprovedSections",
            "rewritten resume sections ready to paste",
            json!({
                "type": "object",
                "properties": {
                    "professional_summary": {
                        "type": "string",
                        "description": "Improved professional summary (2-3 sentences)"
                    },
                    "sample_bullet": {
                        "type": "string",
                        "description": "One improved bullet point for the experience section"
                    },
                    "technical_skills": {
                        "type": "string",
                        "description": "Improved technical skills section formatted for ATS"
                    }
                },
                "required": ["professional_summary", "sample_bullet", "technical_skills"],
                "additionalProperties": false
            }),
        )
    }
}

impl ImprovedSections {
    pub fn into_map(self) -> BTreeMap<String, String> {
        BTreeMap::from([
            (
                "professional_summary".to_string(),
                self.professional_summary,
            ),
            ("sample_bullet".to_string(), self.sample_bullet),
            ("technical_skills".to_string(), self.technical_skills),
        ])
    }
}

pub(crate) fn bullets(items: &[String]) -> String {
    items
        .iter()
        .map(|i| format!("- {}", i))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use agentgraph::{decode_structured, AgentError};

    /// **Scenario**: Out-of-range scores and unknown fields are schema mismatches.
    #[test]
    fn analysis_decoding_is_strict() {
        let too_high = json!({"score": 140, "strengths": [], "weaknesses": [], "improvements": []});
        assert!(matches!(
            decode_structured::<ResumeAnalysis>(too_high),
            Err(AgentError::SchemaMismatch { .. })
        ));
        let extra = json!({"score": 50, "strengths": [], "weaknesses": [], "improvements": [], "grade": "B"});
        assert!(matches!(
            decode_structured::<ResumeAnalysis>(extra),
            Err(AgentError::SchemaMismatch { .. })
        ));
    }

    /// **Scenario**: The rendered analysis lists score, strengths and weaknesses.
    #[test]
    fn analysis_render() {
        let a = ResumeAnalysis {
            score: 80,
            strengths: vec!["Clear".into(), "Concise".into()],
            weaknesses: vec!["No metrics".into()],
            improvements: vec![],
        };
        assert_eq!(
            a.render(),
            "Score: 80\n\nStrengths:\n- Clear\n- Concise\n\nWeaknesses:\n- No metrics"
        );
    }

    /// **Scenario**: Improved sections map to the three fixed keys.
    #[test]
    fn sections_into_map() {
        let map = ImprovedSections {
            professional_summary: "p".into(),
            sample_bullet: "b".into(),
            technical_skills: "t".into(),
        }
        .into_map();
        assert_eq!(
            map.keys().collect::<Vec<_>>(),
            vec!["professional_summary", "sample_bullet", "technical_skills"]
        );
    }
}

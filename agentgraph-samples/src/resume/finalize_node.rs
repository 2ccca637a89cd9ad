//! `finalize_output`: last consistency check before the state becomes `ResumeOutput`.

use agentgraph::{AgentError, Next, Node};
use async_trait::async_trait;

use super::state::ResumeState;

pub struct FinalizeNode;

#[async_trait]
impl Node<ResumeState> for FinalizeNode {
    fn id(&self) -> &str {
        super::FINALIZE_OUTPUT
    }

    async fn run(&self, state: ResumeState) -> Result<(ResumeState, Next), AgentError> {
        if state.overall_score > 100 {
            return Err(AgentError::Validation(format!(
                "overall_score {} is above 100",
                state.overall_score
            )));
        }
        if state.resume_text.trim().is_empty() {
            return Err(AgentError::Validation("resume text is empty".to_string()));
        }
        Ok((state, Next::End))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Scenario**: A complete state passes through unchanged and ends the run.
    #[tokio::test]
    async fn complete_state_passes() {
        let state = ResumeState {
            resume_text: "Jane".into(),
            overall_score: 100,
            ..ResumeState::default()
        };
        let (out, next) = FinalizeNode.run(state.clone()).await.unwrap();
        assert_eq!(out, state);
        assert_eq!(next, Next::End);
    }

    /// **Scenario**: Out-of-range score or empty text is a Validation error.
    #[tokio::test]
    async fn incomplete_state_rejected() {
        let bad_score = ResumeState {
            resume_text: "Jane".into(),
            overall_score: 101,
            ..ResumeState::default()
        };
        assert!(matches!(
            FinalizeNode.run(bad_score).await,
            Err(AgentError::Validation(_))
        ));
        assert!(matches!(
            FinalizeNode.run(ResumeState::default()).await,
            Err(AgentError::Validation(_))
        ));
    }
}

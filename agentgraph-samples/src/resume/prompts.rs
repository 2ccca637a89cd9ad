//! Prompt text for the resume steps.

use agentgraph::Message;

use super::schema::bullets;
use super::state::ResumeState;

pub const RESEARCH_SYSTEM: &str = "You are a resume expert. Summarize the top 5-7 best practices \
for software engineering resumes, covering format, content structure, presentation of technical \
skills, project descriptions and ATS optimization.";

pub const ANALYSIS_SYSTEM: &str =
    "You are a professional resume analyst. Give detailed, actionable feedback.";

pub const IMPROVEMENT_SYSTEM: &str =
    "You are a professional resume writer. Write polished, ATS-friendly content.";

/// Web search query for the research step.
pub fn research_query(state: &ResumeState) -> String {
    format!(
        "best practices for {} resume {} years experience 2025",
        state.target_role, state.years_experience
    )
}

/// Research request when search results are available.
pub fn research_from_results(state: &ResumeState, results: &str) -> Vec<Message> {
    vec![
        Message::system(RESEARCH_SYSTEM),
        Message::user(format!(
            "Search results about resume best practices:\n\n{}\n\n\
             Summarize the top 7 best practices for a {} resume with {} years of experience \
             as a numbered list.",
            results, state.target_role, state.years_experience
        )),
    ]
}

/// Research request relying on the model's own knowledge.
pub fn research_model_only(state: &ResumeState) -> Vec<Message> {
    vec![
        Message::system(RESEARCH_SYSTEM),
        Message::user(format!(
            "Summarize the top 7 best practices for a {} resume with {} years of experience \
             in 2025. Cover format, content structure, presentation of technical skills, \
             project descriptions and ATS optimization. Answer as a numbered list.",
            state.target_role, state.years_experience
        )),
    ]
}

pub fn analysis(state: &ResumeState) -> Vec<Message> {
    vec![
        Message::system(ANALYSIS_SYSTEM),
        Message::user(format!(
            "Analyze this resume against current best practices.\n\n\
             BEST PRACTICES:\n{}\n\n\
             RESUME:\n{}\n\n\
             TARGET ROLE: {}\nEXPERIENCE: {} years\n\n\
             Give an overall quality score (0-100), 3-5 key strengths, 3-5 critical weaknesses \
             and 3-5 specific, actionable improvements. Quote actual resume content.",
            state.best_practices, state.resume_text, state.target_role, state.years_experience
        )),
    ]
}

pub fn improvement(state: &ResumeState) -> Vec<Message> {
    vec![
        Message::system(IMPROVEMENT_SYSTEM),
        Message::user(format!(
            "WEAKNESSES:\n{}\n\nIMPROVEMENTS NEEDED:\n{}\n\nORIGINAL RESUME:\n{}\n\n\
             Write improved versions of: a professional summary (2-3 sentences), one \
             experience bullet point, and a technical skills section formatted for ATS. \
             Each must be ready to paste into the resume.",
            bullets(&state.weaknesses),
            bullets(&state.specific_improvements),
            state.resume_text
        )),
    ]
}

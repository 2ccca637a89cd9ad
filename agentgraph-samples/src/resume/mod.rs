//! Resume analysis agent.
//!
//! `START → load_resume → research_best_practices → analyze_resume →
//! generate_improvements → finalize_output → END`.
//!
//! The model, web search and document decoder are injected, so the whole pipeline runs
//! against `MockLlm` / `MockSearch` in tests.

mod agent;
mod analyze_node;
mod finalize_node;
mod improve_node;
mod load_node;
pub mod prompts;
mod research_node;
mod schema;
mod state;

pub use agent::{resume_graph, ResumeAgent, ResumeAgentBuilder};
pub use analyze_node::AnalyzeNode;
pub use finalize_node::FinalizeNode;
pub use improve_node::ImproveNode;
pub use load_node::LoadResumeNode;
pub use research_node::{ResearchMode, ResearchNode};
pub use schema::{ImprovedSections, ResumeAnalysis};
pub use state::{ResumeInput, ResumeOutput, ResumeState, DEFAULT_TARGET_ROLE};

pub const LOAD_RESUME: &str = "load_resume";
pub const RESEARCH_BEST_PRACTICES: &str = "research_best_practices";
pub const ANALYZE_RESUME: &str = "analyze_resume";
pub const GENERATE_IMPROVEMENTS: &str = "generate_improvements";
pub const FINALIZE_OUTPUT: &str = "finalize_output";

/// Node ids in execution order.
pub const STEP_ORDER: [&str; 5] = [
    LOAD_RESUME,
    RESEARCH_BEST_PRACTICES,
    ANALYZE_RESUME,
    GENERATE_IMPROVEMENTS,
    FINALIZE_OUTPUT,
];

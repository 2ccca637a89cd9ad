//! Run entry points for the echo and resume agents.
//!
//! Neither reads `.env`; callers load it and build a [`RunConfig`](crate::RunConfig) first.

mod echo;
mod resume;

pub use echo::run_echo;
pub use resume::{resume_input, run_resume, run_resume_with_llm};

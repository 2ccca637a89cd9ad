//! Sample agents built on `agentgraph`.
//!
//! - [`echo`]: one-node graph that answers with a fixed prefix plus the input message.
//! - [`resume`]: five-step resume review (load → research → analyze → improve → finalize).
//! - [`document`]: resume file decoding (PDF / TXT / base64 PDF).
//! - [`search`]: optional web-search collaborator used by the research step.

pub mod document;
pub mod echo;
pub mod resume;
pub mod search;

pub use document::{DocumentDecoder, DocumentFormat, FsDocumentDecoder};
pub use echo::{run_echo, EchoAgent, EchoInput, EchoOutput, ECHO_PREFIX};
pub use resume::{ResearchMode, ResumeAgent, ResumeInput, ResumeOutput, ResumeState};
pub use search::{MockSearch, SearchHit, TavilySearch, WebSearch};

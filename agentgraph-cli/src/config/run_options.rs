//! Optional overrides for a run (CLI flags or programmatic).
//!
//! Used by [`RunConfig::apply_options`](super::RunConfig::apply_options).

/// Overrides applied on top of the env-based [`RunConfig`](super::RunConfig).
///
/// All fields are optional; only set fields override.
#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    /// Override model name.
    pub model: Option<String>,
    /// Override sampling temperature (0–2).
    pub temperature: Option<f32>,
    /// Research from model knowledge only, even when a Tavily key is configured.
    pub no_search: bool,
    /// Per-step timeout in seconds.
    pub timeout_secs: Option<u64>,
    /// Override the step limit.
    pub recursion_limit: Option<usize>,
}

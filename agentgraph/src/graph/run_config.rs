//! Per-run options for `CompiledStateGraph::invoke` / `run` / `stream`.

use std::time::Duration;

/// Default cap on step executions per run.
pub const DEFAULT_RECURSION_LIMIT: usize = 25;

/// Per-run options. `None` passed to `invoke` means `RunnableConfig::default()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunnableConfig {
    /// Recorded as `run_name` on the run's `graph` tracing span (`-` when unset).
    pub run_name: Option<String>,
    /// Maximum number of step executions before the run fails with `RecursionLimit`.
    pub recursion_limit: usize,
    /// Upper bound for a single step; unset means steps may take as long as they need.
    pub step_timeout: Option<Duration>,
}

impl Default for RunnableConfig {
    fn default() -> Self {
        Self {
            run_name: None,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
            step_timeout: None,
        }
    }
}

impl RunnableConfig {
    pub fn with_run_name(mut self, name: impl Into<String>) -> Self {
        self.run_name = Some(name.into());
        self
    }

    pub fn with_recursion_limit(mut self, limit: usize) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn with_step_timeout(mut self, timeout: Duration) -> Self {
        self.step_timeout = Some(timeout);
        self
    }
}

//! Unit tests for agentgraph-cli, organized by module.

mod middleware;

use std::sync::{Mutex, MutexGuard, OnceLock};

/// Lock for tests that read or write process env so they do not race.
static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

pub(crate) fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Env vars read by `RunConfig::from_env`.
pub(crate) const CONFIG_VARS: [&str; 8] = [
    "OPENAI_API_KEY",
    "OPENAI_API_BASE",
    "OPENAI_MODEL",
    "OPENAI_TEMPERATURE",
    "TAVILY_API_KEY",
    "TAVILY_MAX_RESULTS",
    "RECURSION_LIMIT",
    "STEP_TIMEOUT_SECS",
];

/// Runs `f` with the config env vars cleared and then set to `vars`; restores them afterwards.
pub(crate) fn with_env<T>(vars: &[(&str, &str)], f: impl FnOnce() -> T) -> T {
    let _guard = env_lock();
    let saved: Vec<(&str, Option<String>)> = CONFIG_VARS
        .iter()
        .map(|name| (*name, std::env::var(name).ok()))
        .collect();
    for name in CONFIG_VARS {
        std::env::remove_var(name);
    }
    for (name, value) in vars {
        std::env::set_var(name, value);
    }

    let result = f();

    for (name, value) in saved {
        match value {
            Some(v) => std::env::set_var(name, v),
            None => std::env::remove_var(name),
        }
    }
    result
}

//! tracing subscriber for the binary: `RUST_LOG` wins, else `info` (`debug` with `--verbose`).
//!
//! Logs go to stderr; stdout carries only the JSON result.

use tracing_subscriber::EnvFilter;

pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // A subscriber may already be installed (tests, embedding callers).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

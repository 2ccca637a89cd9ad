//! Node middleware wiring for CLI runs.
//!
//! Re-exports [`WithNodeTracing`].

mod with_node_tracing;

pub use with_node_tracing::WithNodeTracing;

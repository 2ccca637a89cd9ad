use agentgraph_samples::echo::{echo_graph, EchoAgent, EchoInput, EchoOutput};

use crate::config::{Error, RunConfig};
use crate::middleware::WithNodeTracing;

/// Runs the echo graph once with node tracing attached.
pub async fn run_echo(message: &str, config: &RunConfig) -> Result<EchoOutput, Error> {
    let agent = EchoAgent::from_graph(echo_graph()?.with_node_tracing())?;
    let input = EchoInput {
        message: message.to_string(),
    };
    Ok(agent.run(input, Some(config.runnable_config())).await?)
}

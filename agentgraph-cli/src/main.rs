//! agentgraph binary: runs a sample agent once and prints its output as JSON.

use std::path::PathBuf;

use agentgraph_cli::{
    init_logging, resume_input, run_echo, run_resume, Error, RunConfig, RunOptions,
};
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "agentgraph")]
#[command(about = "Run the agentgraph sample agents; the result is printed as JSON")]
struct Cli {
    /// Debug logs on stderr (node enter/exit, prompts sizes).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Echo a message back with a fixed prefix.
    Echo {
        #[arg(trailing_var_arg = true, required = true)]
        message: Vec<String>,
    },
    /// Analyze a resume and suggest improvements.
    Resume(ResumeArgs),
}

#[derive(Args, Debug)]
struct ResumeArgs {
    /// Resume as inline text.
    #[arg(long, value_name = "TEXT")]
    text: Option<String>,
    /// Local .pdf or .txt resume.
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,
    /// File containing a base64-encoded PDF.
    #[arg(long, value_name = "PATH")]
    base64_file: Option<PathBuf>,
    /// Target role (default: Software Engineer).
    #[arg(long)]
    role: Option<String>,
    /// Years of experience (default: 0).
    #[arg(long)]
    years: Option<u32>,
    /// Skip web search even when TAVILY_API_KEY is set.
    #[arg(long)]
    no_search: bool,
    /// Per-step timeout in seconds.
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,
    /// Override OPENAI_MODEL.
    #[arg(long)]
    model: Option<String>,
    /// Override OPENAI_TEMPERATURE.
    #[arg(long)]
    temperature: Option<f32>,
}

async fn run(cli: Cli) -> Result<serde_json::Value, Error> {
    let mut config = RunConfig::from_env()?;
    match cli.command {
        Command::Echo { message } => {
            let out = run_echo(message.join(" ").trim(), &config).await?;
            Ok(serde_json::to_value(out)?)
        }
        Command::Resume(args) => {
            config.apply_options(&RunOptions {
                model: args.model,
                temperature: args.temperature,
                no_search: args.no_search,
                timeout_secs: args.timeout,
                recursion_limit: None,
            });
            let input = resume_input(
                args.text,
                args.file.as_deref(),
                args.base64_file.as_deref(),
                args.role,
                args.years,
            )
            .await?;
            let out = run_resume(input, &config).await?;
            Ok(serde_json::to_value(out)?)
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    dotenv::dotenv().ok();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(value) => match serde_json::to_string_pretty(&value) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

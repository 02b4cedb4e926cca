//! boardroom: multi-agent gateway main binary
//!
//! Routes user queries to domain-gated specialist agents or a delegating
//! generalist.
//!
//! Usage:
//!   boardroom                    - Start server mode (HTTP API)
//!   boardroom --cli [agent]      - Ask one question from the terminal
//!   boardroom --help             - Show help

mod cli;

use std::sync::Arc;

use board_core::{AgentKind, AgentRegistry, Config, LlmClient};
use tracing_subscriber::EnvFilter;

/// Run mode
enum RunMode {
    /// Server mode (HTTP API)
    Server,
    /// One-shot interactive CLI mode
    Cli(Option<String>),
    /// Show help
    Help,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mode = parse_args();

    match mode {
        RunMode::Help => {
            print_help();
            return Ok(());
        }
        RunMode::Version => {
            println!("boardroom {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        _ => {}
    }

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    // Load .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::load().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    tracing::info!("Starting boardroom...");
    tracing::info!("Model: {}", config.llm.model);

    let client = LlmClient::new(&config)
        .map_err(|e| anyhow::anyhow!("Failed to create LLM client: {}", e))?;

    let registry = Arc::new(AgentRegistry::new(
        Arc::new(client),
        config.agents.clone(),
    ));

    match mode {
        RunMode::Cli(agent_type) => {
            let kind = match agent_type {
                Some(name) => AgentKind::parse(&name)
                    .map_err(|e| anyhow::anyhow!("{}", e))?,
                None => AgentKind::Generalist,
            };

            tracing::info!("Running in CLI mode with the '{}' agent", kind);
            cli::run_cli(registry, kind).await
        }
        RunMode::Server => {
            tracing::info!("Running in server mode on port {}", config.api.port);
            board_api::start_server(config.api.port, registry).await
        }
        _ => Ok(()),
    }
}

/// Parse command line arguments
fn parse_args() -> RunMode {
    let args: Vec<String> = std::env::args().collect();

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--cli" | "-c" => return RunMode::Cli(iter.next().cloned()),
            "--help" | "-h" => return RunMode::Help,
            "--version" | "-v" => return RunMode::Version,
            _ => {}
        }
    }

    RunMode::Server
}

/// Print help message
fn print_help() {
    println!("boardroom - multi-agent gateway");
    println!();
    println!("Usage:");
    println!("  boardroom                 Start server mode (HTTP API)");
    println!("  boardroom --cli [agent]   Ask one question from the terminal");
    println!("                            (agent defaults to 'generalist')");
    println!("  boardroom --help          Show this help message");
    println!("  boardroom --version       Show version");
    println!();
    println!("Agents:");
    for kind in AgentKind::ALL {
        println!("  {:<18}{}", kind.as_str(), kind.profile().description);
    }
    println!();
    println!("Environment Variables:");
    println!("  LLM_API_KEY          API key (required)");
    println!("  LLM_MODEL            Model name (default: claude-sonnet-4-20250514)");
    println!("  LLM_PROVIDER         Provider: claude or openai (default: claude)");
    println!("  LLM_BASE_URL         Custom API endpoint");
    println!("  API_PORT             HTTP API port (default: 3000)");
    println!("  AGENT_MAX_STEPS      Reasoning step budget (default: 20)");
    println!("  GATE_FAIL_OPEN       Treat gate failures as relevant (default: true)");
}

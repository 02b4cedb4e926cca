//! One-shot interactive CLI mode
//!
//! Prompts for a single question, runs it against the chosen agent, prints
//! the answer, and releases agent resources before exiting.

use std::io::{self, Write};
use std::sync::Arc;

use board_core::{AgentKind, AgentRegistry};
use tracing::{error, info, warn};

/// Ask one question and print the agent's answer.
pub async fn run_cli(registry: Arc<AgentRegistry>, kind: AgentKind) -> anyhow::Result<()> {
    print!("Ask the {} a question: ", kind.profile().description);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let prompt = line.trim();

    if prompt.is_empty() {
        warn!("Empty prompt provided.");
    } else {
        info!("Processing your request with the '{}' agent...", kind);

        let agent = registry.get_or_create(kind).await;
        match agent.run(prompt).await {
            Ok(response) => {
                info!("'{}' agent processing completed.", kind);
                println!("\nAgent Response:\n{}", response);
            }
            Err(e) => error!("An error occurred: {}", e),
        }
    }

    // Release agent resources in every exit path.
    registry.release_all().await;

    Ok(())
}

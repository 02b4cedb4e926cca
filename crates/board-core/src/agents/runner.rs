//! Bounded step loop shared by the agent implementations
//!
//! One step is a single completion call; tool_use responses are executed
//! through the tool manager and fed back until the model ends its turn or
//! the step budget runs out.

use tracing::{debug, warn};

use crate::llm::{CompletionBackend, Message, MessageContent, MessagesRequest};
use crate::tool::{ToolManager, ToolResult};
use crate::{Error, Result};

/// Bounds for one run of the step loop
#[derive(Debug, Clone, Copy)]
pub struct StepLimits {
    pub max_steps: usize,
    pub max_tokens: u64,
}

impl From<&crate::config::AgentConfig> for StepLimits {
    fn from(config: &crate::config::AgentConfig) -> Self {
        Self {
            max_steps: config.max_steps,
            max_tokens: config.max_tokens,
        }
    }
}

/// Run the step loop until the model ends its turn.
///
/// `guidance` is consulted once per step with the transcript so far; any
/// text it returns is appended as a user message for that step only, which
/// is how the generalist swaps in browser-aware guidance after browser
/// activity. Tool failures are returned to the model as error-valued tool
/// results rather than aborting the loop.
pub(crate) async fn run_step_loop<F>(
    backend: &dyn CompletionBackend,
    tools: &ToolManager,
    system_prompt: &str,
    mut transcript: Vec<Message>,
    limits: StepLimits,
    mut guidance: F,
) -> Result<String>
where
    F: FnMut(&[Message]) -> Option<String> + Send,
{
    let definitions = tools.definitions();

    for step in 1..=limits.max_steps {
        if let Some(text) = guidance(&transcript) {
            transcript.push(Message::user(text));
        }

        let request = MessagesRequest {
            model: backend.model().to_string(),
            max_tokens: limits.max_tokens,
            system: Some(system_prompt.to_string()),
            messages: transcript.clone(),
            tools: if definitions.is_empty() {
                None
            } else {
                Some(definitions.clone())
            },
            temperature: None,
        };

        let response = backend.complete(request).await?;

        match response.stop_reason.as_str() {
            "end_turn" | "stop_sequence" | "stop" => {
                debug!("Step loop finished after {} step(s)", step);
                return Ok(response.text());
            }
            "tool_use" | "tool_calls" => {
                let uses = response.tool_uses();

                if uses.is_empty() {
                    warn!("tool_use stop_reason but no tool_uses found");
                    continue;
                }

                let mut tool_results = Vec::new();
                for (id, name, input) in &uses {
                    debug!("Executing tool: {} with input: {:?}", name, input);

                    let result = tools
                        .execute(name, input.clone())
                        .await
                        .unwrap_or_else(|e| ToolResult::error(e.to_string()));

                    tool_results.push(MessageContent::ToolResult {
                        tool_use_id: id.clone(),
                        content: result.output,
                        is_error: result.is_error,
                    });
                }

                transcript.push(Message {
                    role: "assistant".to_string(),
                    content: response.content,
                });
                transcript.push(Message {
                    role: "user".to_string(),
                    content: tool_results,
                });
            }
            other => {
                return Err(Error::Api(format!("Unknown stop_reason: {}", other)));
            }
        }
    }

    Err(Error::StepLimit(limits.max_steps))
}

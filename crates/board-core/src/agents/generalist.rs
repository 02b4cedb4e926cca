//! General-purpose agent
//!
//! Accepts any query without gating and carries the broadest tool set,
//! including the delegation tool for handing domain work to specialists.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::info;

use super::delegate::DelegateTool;
use super::prompts;
use super::runner::{run_step_loop, StepLimits};
use super::types::{Agent, AgentKind, AgentProfile, AgentState};
use crate::config::AgentConfig;
use crate::llm::{CompletionBackend, Message};
use crate::tool::ToolManager;
use crate::Result;

/// Name under which browser automation is registered when available.
pub const BROWSER_TOOL_NAME: &str = "browser_use";

/// How many trailing messages are inspected for recent browser activity.
const BROWSER_CONTEXT_WINDOW: usize = 3;

/// A versatile agent that can solve various tasks using multiple tools.
pub struct GeneralistAgent {
    profile: &'static AgentProfile,
    backend: Arc<dyn CompletionBackend>,
    tools: Arc<ToolManager>,
    limits: StepLimits,
    memory: Mutex<Vec<Message>>,
    state: Mutex<AgentState>,
}

impl GeneralistAgent {
    /// Create a generalist whose only tool is the delegation tool.
    pub fn new(backend: Arc<dyn CompletionBackend>, config: &AgentConfig) -> Self {
        Self::with_tools(backend, config, ToolManager::new())
    }

    /// Create a generalist with externally provided tools (browser
    /// automation, code execution, file editing). The delegation tool is
    /// always registered on top of them.
    pub fn with_tools(
        backend: Arc<dyn CompletionBackend>,
        config: &AgentConfig,
        mut tools: ToolManager,
    ) -> Self {
        tools.register(Arc::new(DelegateTool::new(backend.clone(), config.clone())));

        Self {
            profile: AgentKind::Generalist.profile(),
            backend,
            tools: Arc::new(tools),
            limits: StepLimits::from(config),
            memory: Mutex::new(Vec::new()),
            state: Mutex::new(AgentState::Created),
        }
    }

    /// Current run state
    pub async fn state(&self) -> AgentState {
        *self.state.lock().await
    }

    /// Snapshot of the conversation memory
    pub async fn history(&self) -> Vec<Message> {
        self.memory.lock().await.clone()
    }

    async fn set_state(&self, state: AgentState) {
        *self.state.lock().await = state;
    }

    /// Next-step guidance for one step of the loop.
    ///
    /// When any of the last few messages invoked the browser tool, the
    /// browser-aware variant is used for exactly that step; the standard
    /// guidance returns by itself on the next step since nothing is mutated.
    fn step_guidance(transcript: &[Message]) -> String {
        let browser_in_use = transcript
            .iter()
            .rev()
            .take(BROWSER_CONTEXT_WINDOW)
            .any(|msg| msg.uses_tool(BROWSER_TOOL_NAME));

        if browser_in_use {
            prompts::GENERALIST_BROWSER_NEXT_STEP.to_string()
        } else {
            prompts::GENERALIST_NEXT_STEP.to_string()
        }
    }
}

#[async_trait]
impl Agent for GeneralistAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Generalist
    }

    async fn run(&self, query: &str) -> Result<String> {
        info!("Analyzing request: \"{}\"", query);
        info!("May delegate to specialized agents if needed for this task...");

        self.set_state(AgentState::Running).await;

        let mut transcript = self.memory.lock().await.clone();
        transcript.push(Message::user(query));

        let answer = run_step_loop(
            self.backend.as_ref(),
            &self.tools,
            self.profile.system_prompt,
            transcript,
            self.limits,
            |transcript| Some(Self::step_guidance(transcript)),
        )
        .await?;

        let mut memory = self.memory.lock().await;
        memory.push(Message::user(query));
        memory.push(Message::assistant(answer.as_str()));
        drop(memory);

        self.set_state(AgentState::Done).await;

        info!("Completed processing the request");

        Ok(answer)
    }

    async fn cleanup(&self) -> Result<()> {
        // Reaches the delegation tool, which releases its cached agents.
        self.tools.cleanup().await;
        self.memory.lock().await.clear();
        self.set_state(AgentState::Created).await;
        Ok(())
    }
}

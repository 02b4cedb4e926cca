//! Specialist agent
//!
//! Wraps a domain system prompt, the relevance gate, and the step loop.
//! Out-of-domain queries are refused before any loop work is spent on them;
//! in-domain answers get the profile's disclaimer appended.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{info, warn};

use super::gate::DomainGate;
use super::runner::{run_step_loop, StepLimits};
use super::types::{Agent, AgentKind, AgentProfile, AgentState};
use crate::config::AgentConfig;
use crate::llm::{CompletionBackend, Message};
use crate::tool::ToolManager;
use crate::Result;

/// Gate plus the refusal returned when it rejects a query.
struct GatePolicy {
    gate: DomainGate,
    refusal: &'static str,
}

/// An agent bound to one specialist profile.
pub struct SpecialistAgent {
    kind: AgentKind,
    profile: &'static AgentProfile,
    gated: Option<GatePolicy>,
    backend: Arc<dyn CompletionBackend>,
    tools: Arc<ToolManager>,
    limits: StepLimits,
    memory: Mutex<Vec<Message>>,
    state: Mutex<AgentState>,
}

impl SpecialistAgent {
    /// Create a specialist with an empty tool set (plain Q&A).
    pub fn new(kind: AgentKind, backend: Arc<dyn CompletionBackend>, config: &AgentConfig) -> Self {
        Self::with_tools(kind, backend, config, Arc::new(ToolManager::new()))
    }

    /// Create a specialist with a tool set (e.g. the browser specialist).
    pub fn with_tools(
        kind: AgentKind,
        backend: Arc<dyn CompletionBackend>,
        config: &AgentConfig,
        tools: Arc<ToolManager>,
    ) -> Self {
        let profile = kind.profile();

        let gated = match (profile.domain_check, profile.refusal) {
            (Some(template), Some(refusal)) => Some(GatePolicy {
                gate: DomainGate::new(backend.clone(), template, config.gate_fail_open),
                refusal,
            }),
            _ => None,
        };

        Self {
            kind,
            profile,
            gated,
            backend,
            tools,
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
}

#[async_trait]
impl Agent for SpecialistAgent {
    fn kind(&self) -> AgentKind {
        self.kind
    }

    async fn run(&self, query: &str) -> Result<String> {
        info!("{}: received request: {}", self.profile.name, query);

        if let Some(gated) = &self.gated {
            self.set_state(AgentState::Gating).await;

            if !gated.gate.check(query).await {
                warn!("Query deemed irrelevant to {}.", self.profile.name);

                let mut memory = self.memory.lock().await;
                memory.push(Message::user(query));
                memory.push(Message::assistant(gated.refusal));
                drop(memory);

                self.set_state(AgentState::Refused).await;
                return Ok(gated.refusal.to_string());
            }

            info!("Query is relevant. Proceeding with standard execution.");
        }

        self.set_state(AgentState::Running).await;

        let mut transcript = self.memory.lock().await.clone();
        transcript.push(Message::user(query));

        let answer = run_step_loop(
            self.backend.as_ref(),
            &self.tools,
            self.profile.system_prompt,
            transcript,
            self.limits,
            |_| None,
        )
        .await?;

        let mut memory = self.memory.lock().await;
        memory.push(Message::user(query));
        memory.push(Message::assistant(answer.as_str()));
        drop(memory);

        self.set_state(AgentState::Done).await;

        Ok(match self.profile.disclaimer {
            Some(disclaimer) => format!("{}{}", answer, disclaimer),
            None => answer,
        })
    }

    async fn cleanup(&self) -> Result<()> {
        self.tools.cleanup().await;
        self.memory.lock().await.clear();
        self.set_state(AgentState::Created).await;
        Ok(())
    }
}

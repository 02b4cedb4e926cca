//! board-core: Boardroom core library
//!
//! Multi-agent delegation and domain gating: the LLM client, the tool
//! system, the specialist/generalist agents, and the registry that owns
//! their lifecycles.

pub mod agents;
pub mod config;
pub mod error;
pub mod llm;
pub mod tool;

pub use agents::{
    Agent, AgentKind, AgentRegistry, AgentState, DelegateTool, DomainGate, GeneralistAgent,
    SpecialistAgent,
};
pub use config::{AgentConfig, ApiConfig, Config, LlmConfig, LlmProvider};
pub use error::{Error, Result};
pub use llm::{CompletionBackend, LlmClient, Message, MessageContent, ToolDefinition};
pub use tool::{Tool, ToolManager, ToolResult};

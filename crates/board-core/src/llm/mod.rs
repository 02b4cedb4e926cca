//! LLM API client and message types

pub mod client;
pub mod types;

pub use client::{CompletionBackend, LlmClient};
pub use types::{
    Message, MessageContent, MessagesRequest, MessagesResponse, ToolDefinition, Usage,
};

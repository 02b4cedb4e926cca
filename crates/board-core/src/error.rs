//! Error types for board-core

use thiserror::Error;

/// Main error type for board-core
#[derive(Error, Debug)]
pub enum Error {
    #[error("LLM API error: {0}")]
    Api(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown agent type: {0}")]
    UnknownAgentType(String),

    #[error("Tool execution error: {0}")]
    ToolExecution(String),

    #[error("Agent loop exceeded {0} steps without completing")]
    StepLimit(usize),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for board-core
pub type Result<T> = std::result::Result<T, Error>;

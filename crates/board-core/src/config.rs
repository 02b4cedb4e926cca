//! Configuration management
//!
//! Settings are resolved in the following order of precedence:
//! 1. Environment variables
//! 2. boardroom.toml configuration file
//! 3. Built-in defaults
//!
//! Inside the configuration file, `${VAR_NAME}` expands to the value of the
//! corresponding environment variable.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::Error;

/// LLM Provider type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    /// Anthropic Claude API
    #[default]
    Claude,
    /// OpenAI-compatible API (GLM, etc.)
    OpenAi,
}

impl LlmProvider {
    fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "openai" | "glm" | "zai" | "minimax" => LlmProvider::OpenAi,
            _ => LlmProvider::Claude,
        }
    }
}

/// LLM configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// API key
    pub api_key: String,

    /// Model to use
    #[serde(default = "default_model")]
    pub model: String,

    /// API provider
    #[serde(default)]
    pub provider: LlmProvider,

    /// Base URL (optional, for custom endpoints)
    pub base_url: Option<String>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            provider: LlmProvider::Claude,
            base_url: None,
        }
    }
}

fn default_model() -> String {
    "claude-sonnet-4-20250514".to_string()
}

/// HTTP API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Port for the HTTP API server
    #[serde(default = "default_api_port")]
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: default_api_port(),
        }
    }
}

/// Agent execution configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Maximum reasoning steps per request
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,

    /// Maximum tokens per completion
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u64,

    /// Whether the domain gate treats a failed relevance check as relevant.
    /// Failing open trades precision for availability on transient LLM errors.
    #[serde(default = "default_gate_fail_open")]
    pub gate_fail_open: bool,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            max_steps: default_max_steps(),
            max_tokens: default_max_tokens(),
            gate_fail_open: default_gate_fail_open(),
        }
    }
}

fn default_api_port() -> u16 {
    3000
}

fn default_max_steps() -> usize {
    20
}

fn default_max_tokens() -> u64 {
    4096
}

fn default_gate_fail_open() -> bool {
    true
}

/// Main configuration for boardroom
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// LLM configuration
    #[serde(default)]
    pub llm: LlmConfig,

    /// HTTP API configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Agent execution configuration
    #[serde(default)]
    pub agents: AgentConfig,
}

impl Config {
    /// Expand `${VAR_NAME}` references to environment variable values.
    ///
    /// Unset variables expand to the empty string.
    fn expand_env_vars(value: &str) -> String {
        let mut result = String::new();
        let mut chars = value.chars().peekable();

        while let Some(c) = chars.next() {
            if c == '$' && chars.peek() == Some(&'{') {
                chars.next(); // consume '{'

                let mut var_name = String::new();
                while let Some(&c) = chars.peek() {
                    if c == '}' {
                        chars.next(); // consume '}'
                        break;
                    }
                    var_name.push(c);
                    chars.next();
                }

                if let Ok(env_value) = std::env::var(&var_name) {
                    result.push_str(&env_value);
                }
            } else {
                result.push(c);
            }
        }

        result
    }

    /// Load configuration from a TOML file.
    ///
    /// `${VAR_NAME}` references in the file are expanded before parsing, and
    /// environment variables override whatever the file provides.
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();

        let toml_content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

        let expanded_content = Self::expand_env_vars(&toml_content);

        let mut config: Config = toml::from_str(&expanded_content)
            .map_err(|e| Error::Config(format!("Failed to parse TOML: {}", e)))?;

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load configuration from the default locations.
    ///
    /// Tries `./boardroom.toml` first, then falls back to environment
    /// variables only.
    pub fn load() -> crate::Result<Self> {
        if Path::new("boardroom.toml").exists() {
            return Self::from_toml_file("boardroom.toml");
        }

        Self::from_env()
    }

    /// Override settings from environment variables.
    fn apply_env_overrides(&mut self) {
        if let Ok(api_key) = std::env::var("LLM_API_KEY") {
            self.llm.api_key = api_key;
        }

        if let Ok(model) = std::env::var("LLM_MODEL") {
            if !model.is_empty() {
                self.llm.model = model;
            }
        }

        if let Ok(provider) = std::env::var("LLM_PROVIDER") {
            if !provider.is_empty() {
                self.llm.provider = LlmProvider::from_name(&provider);
            }
        }

        if let Ok(base_url) = std::env::var("LLM_BASE_URL") {
            if !base_url.is_empty() {
                self.llm.base_url = Some(base_url);
            }
        }

        if let Ok(port) = std::env::var("API_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }

        if let Ok(steps) = std::env::var("AGENT_MAX_STEPS") {
            if let Ok(s) = steps.parse() {
                self.agents.max_steps = s;
            }
        }

        if let Ok(tokens) = std::env::var("AGENT_MAX_TOKENS") {
            if let Ok(t) = tokens.parse() {
                self.agents.max_tokens = t;
            }
        }

        if let Ok(fail_open) = std::env::var("GATE_FAIL_OPEN") {
            self.agents.gate_fail_open = fail_open.to_lowercase() != "false";
        }
    }

    /// Load configuration from environment variables only.
    pub fn from_env() -> crate::Result<Self> {
        let api_key = std::env::var("LLM_API_KEY")
            .map_err(|_| Error::Config("LLM_API_KEY not set".to_string()))?;

        let mut config = Config {
            llm: LlmConfig {
                api_key,
                ..Default::default()
            },
            api: ApiConfig::default(),
            agents: AgentConfig::default(),
        };

        config.apply_env_overrides();

        Ok(config)
    }
}

//! Agent delegation tool
//!
//! Exposes specialist agents as a callable tool so the generalist's step
//! loop can hand off domain-specific work. Resolved agents are cached in a
//! private registry scoped to this tool's lifetime, independent from the
//! outward-facing registry.

use async_trait::async_trait;
use serde_json::{json, Value as JsonValue};
use std::sync::Arc;
use tracing::{error, info};

use super::registry::AgentRegistry;
use super::types::AgentKind;
use crate::config::AgentConfig;
use crate::llm::CompletionBackend;
use crate::tool::{Tool, ToolResult};
use crate::{Error, Result};

const DELEGATE_TOOL_NAME: &str = "call_agent";

const DELEGATE_TOOL_DESCRIPTION: &str = "\
Call another specialized agent to handle a specific part of the task. \
Use this when you need expertise in a particular domain. \
Available agents: browser, data_eng, product_manager, tech_lead, finance_lead, \
law_lead, seo_lead, marketing_lead, hr_lead";

/// Tool for calling specialist agents.
pub struct DelegateTool {
    registry: AgentRegistry,
}

impl DelegateTool {
    pub fn new(backend: Arc<dyn CompletionBackend>, config: AgentConfig) -> Self {
        Self {
            registry: AgentRegistry::new(backend, config),
        }
    }

    /// The tool's private registry (the outward-facing one lives elsewhere
    /// by design).
    pub fn registry(&self) -> &AgentRegistry {
        &self.registry
    }

    /// Resolve an agent type and run the forwarded query against it.
    ///
    /// Only specialist kinds are delegatable; `generalist` and unknown
    /// names are an `UnknownAgentType` error.
    pub async fn invoke(
        &self,
        agent_type: &str,
        query: &str,
        context: Option<&str>,
    ) -> Result<String> {
        let kind = AgentKind::parse(agent_type)?;
        if !AgentKind::DELEGATABLE.contains(&kind) {
            return Err(Error::UnknownAgentType(agent_type.to_string()));
        }

        let description = kind.profile().description;

        info!(
            "Delegating to {} ({}) agent for specialized assistance...",
            description, kind
        );

        let agent = self.registry.get_or_create(kind).await;

        let full_query = match context {
            Some(context) if !context.is_empty() => {
                format!("{}\n\nQuery: {}", context, query)
            }
            _ => query.to_string(),
        };

        info!("Calling agent '{}' with query: {}", kind, query);

        let result = agent.run(&full_query).await?;

        info!("{} agent has completed the task", description);

        Ok(format!(
            "=== Results from {} ({}) ===\n\n{}\n\n=== End of {} Results ===",
            description, kind, result, description
        ))
    }
}

#[async_trait]
impl Tool for DelegateTool {
    fn name(&self) -> &str {
        DELEGATE_TOOL_NAME
    }

    fn description(&self) -> &str {
        DELEGATE_TOOL_DESCRIPTION
    }

    fn input_schema(&self) -> JsonValue {
        let delegatable: Vec<&str> = AgentKind::DELEGATABLE.iter().map(|k| k.as_str()).collect();

        json!({
            "type": "object",
            "properties": {
                "agent_type": {
                    "type": "string",
                    "enum": delegatable,
                    "description": "Type of agent to call"
                },
                "query": {
                    "type": "string",
                    "description": "Query to send to the agent"
                },
                "context": {
                    "type": "string",
                    "description": "Additional context to provide to the agent"
                }
            },
            "required": ["agent_type", "query"]
        })
    }

    /// Delegation failures degrade to a readable error result so the
    /// delegating loop can adapt instead of aborting.
    async fn execute(&self, input: JsonValue) -> Result<ToolResult> {
        let agent_type = input["agent_type"].as_str().unwrap_or_default().to_string();
        let query = input["query"].as_str().unwrap_or_default().to_string();
        let context = input["context"].as_str().map(|s| s.to_string());

        match self.invoke(&agent_type, &query, context.as_deref()).await {
            Ok(text) => Ok(ToolResult::success(text)),
            Err(e) => {
                let error_msg = format!("Error calling agent '{}': {}", agent_type, e);
                error!("{}", error_msg);
                Ok(ToolResult::error(error_msg))
            }
        }
    }

    async fn cleanup(&self) -> Result<()> {
        self.registry.release_all().await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::llm::{Message, MessageContent, MessagesRequest, MessagesResponse};
    use std::collections::VecDeque;
    use tokio::sync::Mutex;

    /// Backend replaying scripted text replies and recording every request.
    struct ScriptedBackend {
        responses: Mutex<VecDeque<&'static str>>,
        requests: Mutex<Vec<MessagesRequest>>,
    }

    impl ScriptedBackend {
        fn new(responses: Vec<&'static str>) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses.into()),
                requests: Mutex::new(Vec::new()),
            })
        }

        async fn requests(&self) -> Vec<MessagesRequest> {
            self.requests.lock().await.clone()
        }
    }

    #[async_trait]
    impl CompletionBackend for ScriptedBackend {
        fn model(&self) -> &str {
            "test-model"
        }

        async fn complete(&self, request: MessagesRequest) -> Result<MessagesResponse> {
            self.requests.lock().await.push(request);

            let text = self
                .responses
                .lock()
                .await
                .pop_front()
                .ok_or_else(|| Error::Api("script exhausted".to_string()))?;

            Ok(MessagesResponse {
                id: "r".to_string(),
                response_type: "message".to_string(),
                role: "assistant".to_string(),
                content: vec![MessageContent::Text {
                    text: text.to_string(),
                }],
                model: "test-model".to_string(),
                stop_sequence: None,
                stop_reason: "end_turn".to_string(),
                usage: None,
            })
        }
    }

    fn tool(backend: Arc<ScriptedBackend>) -> DelegateTool {
        DelegateTool::new(backend, AgentConfig::default())
    }

    /// Last user message the specialist's loop received.
    fn forwarded_text(requests: &[MessagesRequest]) -> String {
        let last = requests.last().expect("at least one request");
        last.messages
            .last()
            .map(Message::text_content)
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn test_invoke_wraps_result_in_provenance_banners() {
        // Gate YES, then the specialist's answer.
        let backend = ScriptedBackend::new(vec!["YES", "Partition by date."]);
        let tool = tool(backend);

        let result = tool
            .invoke("data_eng", "How should I partition this table?", None)
            .await
            .unwrap();

        assert!(result.starts_with("=== Results from Data Engineering Expert (data_eng) ==="));
        assert!(result.contains("Partition by date."));
        assert!(result.ends_with("=== End of Data Engineering Expert Results ==="));
    }

    #[tokio::test]
    async fn test_invoke_joins_context_and_query() {
        let backend = ScriptedBackend::new(vec!["YES", "answer"]);
        let tool = tool(backend.clone());

        tool.invoke("data_eng", "Q", Some("C")).await.unwrap();

        let requests = backend.requests().await;
        assert_eq!(forwarded_text(&requests), "C\n\nQuery: Q");
    }

    #[tokio::test]
    async fn test_invoke_without_context_forwards_query_verbatim() {
        let backend = ScriptedBackend::new(vec!["YES", "answer"]);
        let tool = tool(backend.clone());

        tool.invoke("data_eng", "Q", None).await.unwrap();
        assert_eq!(forwarded_text(&backend.requests().await), "Q");
    }

    #[tokio::test]
    async fn test_invoke_empty_context_forwards_query_verbatim() {
        let backend = ScriptedBackend::new(vec!["YES", "answer"]);
        let tool = tool(backend.clone());

        tool.invoke("data_eng", "Q", Some("")).await.unwrap();
        assert_eq!(forwarded_text(&backend.requests().await), "Q");
    }

    #[tokio::test]
    async fn test_unknown_agent_type_is_an_error_result_not_a_panic() {
        let backend = ScriptedBackend::new(vec![]);
        let tool = tool(backend);

        let result = tool
            .execute(json!({"agent_type": "nonexistent", "query": "x"}))
            .await
            .unwrap();

        assert!(result.is_error);
        assert!(result.output.contains("Error calling agent 'nonexistent'"));
    }

    #[tokio::test]
    async fn test_generalist_is_not_delegatable() {
        let backend = ScriptedBackend::new(vec![]);
        let tool = tool(backend);

        let err = tool.invoke("generalist", "x", None).await.unwrap_err();
        assert!(matches!(err, Error::UnknownAgentType(_)));
    }

    #[tokio::test]
    async fn test_agent_failure_degrades_to_error_text() {
        // Gate passes, then the specialist's loop call fails.
        let backend = ScriptedBackend::new(vec!["YES"]);
        let tool = tool(backend);

        let result = tool
            .execute(json!({"agent_type": "finance_lead", "query": "What is WACC?"}))
            .await
            .unwrap();

        assert!(result.is_error);
        assert!(result.output.contains("Error calling agent 'finance_lead'"));
    }

    #[tokio::test]
    async fn test_agents_are_memoized_per_tool() {
        let backend = ScriptedBackend::new(vec!["YES", "a1", "YES", "a2"]);
        let tool = tool(backend);

        tool.invoke("tech_lead", "first", None).await.unwrap();
        tool.invoke("tech_lead", "second", None).await.unwrap();

        assert_eq!(tool.registry().len().await, 1);
    }

    #[tokio::test]
    async fn test_cleanup_empties_the_registry() {
        let backend = ScriptedBackend::new(vec!["YES", "a1"]);
        let tool = tool(backend);

        tool.invoke("tech_lead", "q", None).await.unwrap();
        assert_eq!(tool.registry().len().await, 1);

        Tool::cleanup(&tool).await.unwrap();
        assert_eq!(tool.registry().len().await, 0);
    }

    #[tokio::test]
    async fn test_refusal_passes_through_with_banners() {
        let backend = ScriptedBackend::new(vec!["NO"]);
        let tool = tool(backend);

        let result = tool
            .invoke("finance_lead", "Plan my wedding", None)
            .await
            .unwrap();

        assert!(result.contains(crate::agents::prompts::FINANCE_LEAD_REFUSAL));
        assert!(result.starts_with("=== Results from Financial Analysis Specialist (finance_lead) ==="));
    }
}

//! Domain relevance gate
//!
//! Cheap pre-check that decides whether a query is in-domain for a
//! specialist before the full step loop is spent on it.

use std::sync::Arc;

use tracing::{debug, error};

use crate::llm::{CompletionBackend, Message};

/// Output cap for the classifier; the reply is a bare YES or NO.
const GATE_MAX_TOKENS: u64 = 10;

/// Relevance gate for one specialist domain.
///
/// Issues a single deterministic classification call. On completion failure
/// the gate falls back to `fail_open` (assume relevant by default) so a
/// transient LLM error does not silently drop valid requests.
pub struct DomainGate {
    backend: Arc<dyn CompletionBackend>,
    template: &'static str,
    fail_open: bool,
}

impl DomainGate {
    pub fn new(
        backend: Arc<dyn CompletionBackend>,
        template: &'static str,
        fail_open: bool,
    ) -> Self {
        Self {
            backend,
            template,
            fail_open,
        }
    }

    /// Classify a query as in-domain (`true`) or out-of-domain (`false`).
    ///
    /// Does not touch any conversation memory.
    pub async fn check(&self, query: &str) -> bool {
        let check_prompt = self.template.replace("{query}", query);

        let reply = self
            .backend
            .chat_completion(vec![Message::user(check_prompt)], GATE_MAX_TOKENS, 0.0)
            .await;

        match reply {
            Ok(reply) => {
                let answer = reply.trim().to_uppercase();
                debug!("Domain check response: '{}'", answer);
                answer == "YES"
            }
            Err(e) => {
                error!("Error during domain check: {}", e);
                self.fail_open
            }
        }
    }
}

//! Agent registry and lifecycle manager
//!
//! Caches one live instance per agent kind, created lazily on first
//! request. Two registries coexist in the system by design: one behind the
//! outward request handler and one inside each delegation tool; they never
//! share instances.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{error, info};

use super::generalist::GeneralistAgent;
use super::specialist::SpecialistAgent;
use super::types::{Agent, AgentKind};
use crate::config::AgentConfig;
use crate::llm::CompletionBackend;

/// Cache of live agent instances, keyed by kind.
///
/// The single lock around the cache makes concurrent first requests for the
/// same kind construct exactly one instance.
pub struct AgentRegistry {
    backend: Arc<dyn CompletionBackend>,
    config: AgentConfig,
    agents: Mutex<HashMap<AgentKind, Arc<dyn Agent>>>,
}

impl AgentRegistry {
    /// Create an empty registry
    pub fn new(backend: Arc<dyn CompletionBackend>, config: AgentConfig) -> Self {
        Self {
            backend,
            config,
            agents: Mutex::new(HashMap::new()),
        }
    }

    /// Return the cached instance for a kind, constructing it on first use.
    pub async fn get_or_create(&self, kind: AgentKind) -> Arc<dyn Agent> {
        let mut agents = self.agents.lock().await;

        if let Some(agent) = agents.get(&kind) {
            return agent.clone();
        }

        info!("Creating agent instance: {}", kind);
        let agent = self.build(kind);
        agents.insert(kind, agent.clone());
        agent
    }

    fn build(&self, kind: AgentKind) -> Arc<dyn Agent> {
        match kind {
            AgentKind::Generalist => {
                Arc::new(GeneralistAgent::new(self.backend.clone(), &self.config))
            }
            _ => Arc::new(SpecialistAgent::new(
                kind,
                self.backend.clone(),
                &self.config,
            )),
        }
    }

    /// Clean up and evict one kind; absent kinds are a no-op.
    ///
    /// The cache entry is removed regardless of whether the instance's own
    /// cleanup succeeds, so a later lookup constructs a fresh instance.
    pub async fn release(&self, kind: AgentKind) {
        let removed = self.agents.lock().await.remove(&kind);

        if let Some(agent) = removed {
            info!("Cleaning up agent: {}", kind);
            if let Err(e) = agent.cleanup().await {
                error!("Error cleaning up agent '{}': {}", kind, e);
            }
        }
    }

    /// Clean up and evict every cached instance.
    ///
    /// Cleanup failures are logged and never prevent the remaining
    /// instances from being released.
    pub async fn release_all(&self) {
        let drained: Vec<(AgentKind, Arc<dyn Agent>)> = {
            let mut agents = self.agents.lock().await;
            agents.drain().collect()
        };

        for (kind, agent) in drained {
            info!("Cleaning up agent: {}", kind);
            if let Err(e) = agent.cleanup().await {
                error!("Error cleaning up agent '{}': {}", kind, e);
            }
        }
    }

    /// Number of cached instances
    pub async fn len(&self) -> usize {
        self.agents.lock().await.len()
    }

    /// Whether the cache is empty
    pub async fn is_empty(&self) -> bool {
        self.agents.lock().await.is_empty()
    }

    /// Kinds with a live instance
    pub async fn cached_kinds(&self) -> Vec<AgentKind> {
        self.agents.lock().await.keys().copied().collect()
    }

    #[cfg(test)]
    pub(crate) async fn insert_instance(&self, kind: AgentKind, agent: Arc<dyn Agent>) {
        self.agents.lock().await.insert(kind, agent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use crate::llm::{MessagesRequest, MessagesResponse};
    use async_trait::async_trait;

    /// Backend that fails every call; registry tests never complete.
    struct OfflineBackend;

    #[async_trait]
    impl CompletionBackend for OfflineBackend {
        fn model(&self) -> &str {
            "test-model"
        }

        async fn complete(&self, _request: MessagesRequest) -> Result<MessagesResponse> {
            Err(Error::Api("offline".to_string()))
        }
    }

    fn registry() -> AgentRegistry {
        AgentRegistry::new(Arc::new(OfflineBackend), AgentConfig::default())
    }

    #[tokio::test]
    async fn test_get_or_create_is_referentially_stable() {
        let registry = registry();

        for kind in AgentKind::ALL {
            let first = registry.get_or_create(kind).await;
            let second = registry.get_or_create(kind).await;
            assert!(
                Arc::ptr_eq(&first, &second),
                "second lookup must return the identical instance for {}",
                kind
            );
        }

        assert_eq!(registry.len().await, AgentKind::ALL.len());
    }

    #[tokio::test]
    async fn test_release_evicts_and_recreates() {
        let registry = registry();

        let before = registry.get_or_create(AgentKind::FinanceLead).await;
        registry.release(AgentKind::FinanceLead).await;

        let after = registry.get_or_create(AgentKind::FinanceLead).await;
        assert!(
            !Arc::ptr_eq(&before, &after),
            "post-release lookup must construct a fresh instance"
        );
    }

    #[tokio::test]
    async fn test_release_absent_kind_is_a_noop() {
        let registry = registry();
        registry.release(AgentKind::SeoLead).await;
        assert!(registry.is_empty().await);
    }

    #[tokio::test]
    async fn test_release_all_empties_the_cache() {
        let registry = registry();

        registry.get_or_create(AgentKind::TechLead).await;
        registry.get_or_create(AgentKind::LawLead).await;
        registry.get_or_create(AgentKind::Generalist).await;
        assert_eq!(registry.len().await, 3);

        registry.release_all().await;
        assert!(registry.is_empty().await);
    }

    #[tokio::test]
    async fn test_release_all_survives_cleanup_failures() {
        struct BrokenCleanupAgent;

        #[async_trait]
        impl Agent for BrokenCleanupAgent {
            fn kind(&self) -> AgentKind {
                AgentKind::Browser
            }

            async fn run(&self, _query: &str) -> Result<String> {
                Ok(String::new())
            }

            async fn cleanup(&self) -> Result<()> {
                Err(Error::Other("teardown failed".to_string()))
            }
        }

        let registry = registry();
        registry
            .insert_instance(AgentKind::Browser, Arc::new(BrokenCleanupAgent))
            .await;
        registry.get_or_create(AgentKind::TechLead).await;
        registry.get_or_create(AgentKind::HrLead).await;

        registry.release_all().await;

        // Total release: zero cached entries even though one cleanup raised.
        assert_eq!(registry.len().await, 0);
    }

    #[tokio::test]
    async fn test_release_evicts_even_when_cleanup_fails() {
        struct BrokenCleanupAgent;

        #[async_trait]
        impl Agent for BrokenCleanupAgent {
            fn kind(&self) -> AgentKind {
                AgentKind::Browser
            }

            async fn run(&self, _query: &str) -> Result<String> {
                Ok(String::new())
            }

            async fn cleanup(&self) -> Result<()> {
                Err(Error::Other("teardown failed".to_string()))
            }
        }

        let registry = registry();
        registry
            .insert_instance(AgentKind::Browser, Arc::new(BrokenCleanupAgent))
            .await;

        registry.release(AgentKind::Browser).await;
        assert!(registry.is_empty().await);
    }

    #[tokio::test]
    async fn test_registries_do_not_share_instances() {
        let a = registry();
        let b = registry();

        let from_a = a.get_or_create(AgentKind::TechLead).await;
        let from_b = b.get_or_create(AgentKind::TechLead).await;

        assert!(!Arc::ptr_eq(&from_a, &from_b));
    }

    #[tokio::test]
    async fn test_concurrent_first_requests_build_one_instance() {
        let registry = Arc::new(registry());

        let tasks: Vec<_> = (0..8)
            .map(|_| {
                let registry = registry.clone();
                tokio::spawn(async move { registry.get_or_create(AgentKind::FinanceLead).await })
            })
            .collect();

        let mut instances = Vec::new();
        for task in tasks {
            instances.push(task.await.unwrap());
        }

        assert_eq!(registry.len().await, 1);
        for instance in &instances[1..] {
            assert!(Arc::ptr_eq(&instances[0], instance));
        }
    }
}

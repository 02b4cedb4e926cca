//! Agent types and trait definitions
//!
//! Defines the core types for the multi-agent system:
//! - AgentKind: closed enumeration of every known agent type
//! - AgentProfile: static per-kind descriptor (prompts, refusal, disclaimer)
//! - Agent trait: interface shared by specialist and generalist agents
//! - AgentState: lifecycle of a single run

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::prompts;
use crate::{Error, Result};

/// Closed set of known agent types.
///
/// The wire representation is the snake_case name (`finance_lead`,
/// `browser`, ...); unknown strings fail parsing rather than falling through
/// to a runtime lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentKind {
    Browser,
    DataEng,
    ProductManager,
    TechLead,
    FinanceLead,
    LawLead,
    SeoLead,
    MarketingLead,
    HrLead,
    Generalist,
}

impl AgentKind {
    /// Every known kind, generalist last
    pub const ALL: [AgentKind; 10] = [
        AgentKind::Browser,
        AgentKind::DataEng,
        AgentKind::ProductManager,
        AgentKind::TechLead,
        AgentKind::FinanceLead,
        AgentKind::LawLead,
        AgentKind::SeoLead,
        AgentKind::MarketingLead,
        AgentKind::HrLead,
        AgentKind::Generalist,
    ];

    /// Kinds a generalist may delegate to (everything but itself)
    pub const DELEGATABLE: [AgentKind; 9] = [
        AgentKind::Browser,
        AgentKind::DataEng,
        AgentKind::ProductManager,
        AgentKind::TechLead,
        AgentKind::FinanceLead,
        AgentKind::LawLead,
        AgentKind::SeoLead,
        AgentKind::MarketingLead,
        AgentKind::HrLead,
    ];

    /// Wire name of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentKind::Browser => "browser",
            AgentKind::DataEng => "data_eng",
            AgentKind::ProductManager => "product_manager",
            AgentKind::TechLead => "tech_lead",
            AgentKind::FinanceLead => "finance_lead",
            AgentKind::LawLead => "law_lead",
            AgentKind::SeoLead => "seo_lead",
            AgentKind::MarketingLead => "marketing_lead",
            AgentKind::HrLead => "hr_lead",
            AgentKind::Generalist => "generalist",
        }
    }

    /// Parse a wire name; unknown names are a configuration/dispatch error
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "browser" => Ok(AgentKind::Browser),
            "data_eng" => Ok(AgentKind::DataEng),
            "product_manager" => Ok(AgentKind::ProductManager),
            "tech_lead" => Ok(AgentKind::TechLead),
            "finance_lead" => Ok(AgentKind::FinanceLead),
            "law_lead" => Ok(AgentKind::LawLead),
            "seo_lead" => Ok(AgentKind::SeoLead),
            "marketing_lead" => Ok(AgentKind::MarketingLead),
            "hr_lead" => Ok(AgentKind::HrLead),
            "generalist" => Ok(AgentKind::Generalist),
            other => Err(Error::UnknownAgentType(other.to_string())),
        }
    }

    /// Static descriptor for this kind
    pub fn profile(&self) -> &'static AgentProfile {
        match self {
            AgentKind::Browser => &BROWSER_PROFILE,
            AgentKind::DataEng => &DATA_ENG_PROFILE,
            AgentKind::ProductManager => &PRODUCT_MANAGER_PROFILE,
            AgentKind::TechLead => &TECH_LEAD_PROFILE,
            AgentKind::FinanceLead => &FINANCE_LEAD_PROFILE,
            AgentKind::LawLead => &LAW_LEAD_PROFILE,
            AgentKind::SeoLead => &SEO_LEAD_PROFILE,
            AgentKind::MarketingLead => &MARKETING_LEAD_PROFILE,
            AgentKind::HrLead => &HR_LEAD_PROFILE,
            AgentKind::Generalist => &GENERALIST_PROFILE,
        }
    }
}

impl std::str::FromStr for AgentKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        AgentKind::parse(s)
    }
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static descriptor for one agent kind.
///
/// Created once at compile time and never mutated. Kinds without a
/// `domain_check` template are not gated; `disclaimer` is stored with its
/// leading blank-line separator and appended verbatim to successful
/// responses.
pub struct AgentProfile {
    /// Display name
    pub name: &'static str,
    /// Human-readable description, used in delegation provenance banners
    pub description: &'static str,
    /// Persona and domain boundary for the model
    pub system_prompt: &'static str,
    /// YES/NO classification template with a `{query}` placeholder
    pub domain_check: Option<&'static str>,
    /// Fixed refusal returned for out-of-domain queries
    pub refusal: Option<&'static str>,
    /// Fixed suffix appended to in-domain answers
    pub disclaimer: Option<&'static str>,
}

static BROWSER_PROFILE: AgentProfile = AgentProfile {
    name: "Browser",
    description: "Browser Automation Specialist",
    system_prompt: prompts::BROWSER_SYSTEM_PROMPT,
    domain_check: None,
    refusal: None,
    disclaimer: None,
};

static DATA_ENG_PROFILE: AgentProfile = AgentProfile {
    name: "DataEng",
    description: "Data Engineering Expert",
    system_prompt: prompts::DATA_ENG_SYSTEM_PROMPT,
    domain_check: Some(prompts::DATA_ENG_DOMAIN_CHECK),
    refusal: Some(prompts::DATA_ENG_REFUSAL),
    disclaimer: None,
};

static PRODUCT_MANAGER_PROFILE: AgentProfile = AgentProfile {
    name: "ProductManager",
    description: "Product Management Specialist",
    system_prompt: prompts::PRODUCT_MANAGER_SYSTEM_PROMPT,
    domain_check: Some(prompts::PRODUCT_MANAGER_DOMAIN_CHECK),
    refusal: Some(prompts::PRODUCT_MANAGER_REFUSAL),
    disclaimer: None,
};

static TECH_LEAD_PROFILE: AgentProfile = AgentProfile {
    name: "TechLead",
    description: "Technical Architecture Expert",
    system_prompt: prompts::TECH_LEAD_SYSTEM_PROMPT,
    domain_check: Some(prompts::TECH_LEAD_DOMAIN_CHECK),
    refusal: Some(prompts::TECH_LEAD_REFUSAL),
    disclaimer: None,
};

static FINANCE_LEAD_PROFILE: AgentProfile = AgentProfile {
    name: "FinanceLead",
    description: "Financial Analysis Specialist",
    system_prompt: prompts::FINANCE_LEAD_SYSTEM_PROMPT,
    domain_check: Some(prompts::FINANCE_LEAD_DOMAIN_CHECK),
    refusal: Some(prompts::FINANCE_LEAD_REFUSAL),
    disclaimer: Some(prompts::FINANCE_LEAD_DISCLAIMER),
};

static LAW_LEAD_PROFILE: AgentProfile = AgentProfile {
    name: "LawLead",
    description: "Legal Specialist",
    system_prompt: prompts::LAW_LEAD_SYSTEM_PROMPT,
    domain_check: Some(prompts::LAW_LEAD_DOMAIN_CHECK),
    refusal: Some(prompts::LAW_LEAD_REFUSAL),
    disclaimer: Some(prompts::LAW_LEAD_DISCLAIMER),
};

static SEO_LEAD_PROFILE: AgentProfile = AgentProfile {
    name: "SeoLead",
    description: "SEO Expert",
    system_prompt: prompts::SEO_LEAD_SYSTEM_PROMPT,
    domain_check: Some(prompts::SEO_LEAD_DOMAIN_CHECK),
    refusal: Some(prompts::SEO_LEAD_REFUSAL),
    disclaimer: Some(prompts::SEO_LEAD_DISCLAIMER),
};

static MARKETING_LEAD_PROFILE: AgentProfile = AgentProfile {
    name: "MarketingLead",
    description: "Marketing Specialist",
    system_prompt: prompts::MARKETING_LEAD_SYSTEM_PROMPT,
    domain_check: Some(prompts::MARKETING_LEAD_DOMAIN_CHECK),
    refusal: Some(prompts::MARKETING_LEAD_REFUSAL),
    disclaimer: Some(prompts::MARKETING_LEAD_DISCLAIMER),
};

static HR_LEAD_PROFILE: AgentProfile = AgentProfile {
    name: "HrLead",
    description: "Human Resources Specialist",
    system_prompt: prompts::HR_LEAD_SYSTEM_PROMPT,
    domain_check: Some(prompts::HR_LEAD_DOMAIN_CHECK),
    refusal: Some(prompts::HR_LEAD_REFUSAL),
    disclaimer: Some(prompts::HR_LEAD_DISCLAIMER),
};

static GENERALIST_PROFILE: AgentProfile = AgentProfile {
    name: "Generalist",
    description: "General-Purpose Assistant",
    system_prompt: prompts::GENERALIST_SYSTEM_PROMPT,
    domain_check: None,
    refusal: None,
    disclaimer: None,
};

/// Lifecycle of a single agent run.
///
/// `Refused` and `Done` are terminal for the run; a cached instance starts
/// the next run from `Gating` again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentState {
    Created,
    Gating,
    Refused,
    Running,
    Done,
}

/// Interface shared by every agent the registry can hand out.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Kind this instance was created for; never changes after creation
    fn kind(&self) -> AgentKind;

    /// Display name
    fn name(&self) -> &str {
        self.kind().profile().name
    }

    /// Human-readable description
    fn description(&self) -> &str {
        self.kind().profile().description
    }

    /// Answer a query, gating first where the profile requires it
    async fn run(&self, query: &str) -> Result<String>;

    /// Release resources held by the instance (tool sessions, nested
    /// agents, conversation memory)
    async fn cleanup(&self) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trip() {
        for kind in AgentKind::ALL {
            assert_eq!(AgentKind::parse(kind.as_str()).unwrap(), kind);
        }
    }

    #[test]
    fn test_parse_unknown_kind() {
        let err = AgentKind::parse("nonexistent").unwrap_err();
        assert!(matches!(err, Error::UnknownAgentType(ref name) if name == "nonexistent"));
    }

    #[test]
    fn test_delegatable_excludes_generalist() {
        assert!(!AgentKind::DELEGATABLE.contains(&AgentKind::Generalist));
        assert_eq!(AgentKind::DELEGATABLE.len(), AgentKind::ALL.len() - 1);
    }

    #[test]
    fn test_gated_profiles_have_refusals() {
        for kind in AgentKind::ALL {
            let profile = kind.profile();
            assert_eq!(
                profile.domain_check.is_some(),
                profile.refusal.is_some(),
                "gate and refusal must come together for {}",
                kind
            );
        }
    }

    #[test]
    fn test_domain_check_templates_have_query_placeholder() {
        for kind in AgentKind::ALL {
            if let Some(template) = kind.profile().domain_check {
                assert!(template.contains("{query}"), "missing placeholder for {}", kind);
            }
        }
    }

    #[test]
    fn test_disclaimers_start_with_separator() {
        for kind in AgentKind::ALL {
            if let Some(disclaimer) = kind.profile().disclaimer {
                assert!(disclaimer.starts_with("\n\n"), "bad separator for {}", kind);
            }
        }
    }

    #[test]
    fn test_kind_serde_wire_names() {
        let json = serde_json::to_string(&AgentKind::FinanceLead).unwrap();
        assert_eq!(json, r#""finance_lead""#);

        let kind: AgentKind = serde_json::from_str(r#""tech_lead""#).unwrap();
        assert_eq!(kind, AgentKind::TechLead);
    }
}

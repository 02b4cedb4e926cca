//! Multi-agent orchestration
//!
//! Routes queries to domain specialists behind a cheap relevance gate, and
//! lets the generalist hand work to specialists as a tool call.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      AgentRegistry                        │
//! │   lazily constructs and caches one instance per kind      │
//! └────────────┬────────────────────────────┬────────────────┘
//!              │                            │
//!              ▼                            ▼
//!      SpecialistAgent               GeneralistAgent
//!      gate → step loop              step loop + tools
//!      → disclaimer                       │
//!                                         ▼
//!                                   DelegateTool
//!                                   own registry of
//!                                   specialist agents
//! ```
//!
//! A query first hits the gate: a single deterministic YES/NO completion
//! that decides whether the expensive step loop runs at all. The generalist
//! skips the gate, and may invoke `call_agent` mid-loop, which resolves a
//! specialist from the tool's own registry and repeats the gate-then-run
//! sequence one level down.

pub mod delegate;
pub mod gate;
pub mod generalist;
pub mod prompts;
pub mod registry;
pub mod runner;
pub mod specialist;
pub mod types;

// Re-exports
pub use delegate::DelegateTool;
pub use gate::DomainGate;
pub use generalist::{GeneralistAgent, BROWSER_TOOL_NAME};
pub use registry::AgentRegistry;
pub use runner::StepLimits;
pub use specialist::SpecialistAgent;
pub use types::{Agent, AgentKind, AgentProfile, AgentState};

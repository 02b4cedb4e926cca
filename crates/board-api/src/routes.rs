//! Route definitions
//!
//! Defines all HTTP API endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{cleanup, health, list_agents, query};
use crate::server::AppState;

/// Create the API router
pub fn routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Agent query endpoint
        .route("/api/query", post(query))
        // Agent listing
        .route("/api/agents", get(list_agents))
        // Lifecycle management
        .route("/api/cleanup", post(cleanup))
}

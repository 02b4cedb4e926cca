//! board-api: HTTP API for Boardroom
//!
//! Provides REST API endpoints for routing queries to agents and managing
//! their lifecycles. Built with axum for async HTTP handling.

pub mod handlers;
pub mod routes;
pub mod server;

pub use server::{start_server, AppState};

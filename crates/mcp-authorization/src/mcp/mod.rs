//! Embedded MCP tool sub-application.
//!
//! A minimal, stateless tool server mounted under `/mcp`. It exposes one
//! no-argument tool (`hello`) both over the MCP JSON-RPC surface and as a
//! direct invocation route. No sessions, no streaming, no shared state with
//! the metadata module.

pub mod tools;
pub mod transport;

use std::sync::Arc;

use axum::{Router, routing::post};

pub use tools::{GREETING, HelloTool, McpTool, register_all_tools};
pub use transport::McpState;

/// Create the sub-application router, mounted by the main server under
/// `{prefix}/mcp`.
#[must_use]
pub fn create_router() -> Router {
    let state = Arc::new(McpState { tools: register_all_tools() });

    Router::new()
        .route("/", post(transport::handle_rpc))
        .route("/tools/{name}", post(transport::handle_tool_invoke))
        .with_state(state)
}

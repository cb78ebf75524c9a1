//! MCP tool implementations.
//!
//! Exactly one tool is registered: `hello`, a no-argument greeting. Tools
//! here are pure — they take no context and hold no state — so the trait has
//! no error channel.

/// The constant greeting returned by the `hello` tool and the root route.
pub const GREETING: &str = "Hello, World!";

/// Trait for MCP tools.
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// Tool name (e.g., "hello").
    fn name(&self) -> &'static str;

    /// Tool description for LLM clients.
    fn description(&self) -> &'static str;

    /// JSON Schema for input parameters.
    fn input_schema(&self) -> serde_json::Value;

    /// Execute the tool with the given input.
    async fn call(&self, input: serde_json::Value) -> serde_json::Value;
}

/// A no-argument tool returning a constant greeting.
pub struct HelloTool;

#[async_trait::async_trait]
impl McpTool for HelloTool {
    fn name(&self) -> &'static str {
        "hello"
    }

    fn description(&self) -> &'static str {
        "Return a constant greeting message."
    }

    fn input_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {},
            "required": []
        })
    }

    async fn call(&self, _input: serde_json::Value) -> serde_json::Value {
        serde_json::json!({ "message": GREETING })
    }
}

/// Register all tools.
#[must_use]
pub fn register_all_tools() -> Vec<Box<dyn McpTool>> {
    vec![Box::new(HelloTool)]
}

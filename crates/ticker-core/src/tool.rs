//! Tool trait definition

use crate::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Trait for callable operations exposed to the MCP host
///
/// Each tool provides a name, a description, and a JSON schema for its
/// input. Tools that can fail in a way the host is expected to inspect
/// return the failure inside the payload (a descriptive string or a JSON
/// `null`), not as an `Err` — an `Err` from [`execute`](Tool::execute) is
/// reserved for parameter validation failures.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Execute the tool with given parameters
    ///
    /// # Arguments
    ///
    /// * `params` - Tool input as JSON value (should match input_schema)
    async fn execute(&self, params: Value) -> Result<Value>;

    /// Get the tool's name
    ///
    /// Must be unique within a ToolRegistry
    fn name(&self) -> &str;

    /// Get the tool's description
    ///
    /// This description tells the host when to call this tool
    fn description(&self) -> &str;

    /// Get the tool's input schema (JSON Schema format)
    ///
    /// # Example
    ///
    /// ```
    /// use serde_json::json;
    ///
    /// // Example schema for a price lookup tool:
    /// let schema = json!({
    ///     "type": "object",
    ///     "properties": {
    ///         "symbol": { "type": "string" }
    ///     },
    ///     "required": ["symbol"]
    /// });
    /// ```
    fn input_schema(&self) -> Value;
}

//! MCP wire types for the stdio server
//!
//! JSON-RPC 2.0, newline-delimited. Only the server-side subset of the
//! protocol is modeled here.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Protocol revision this server speaks
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// JSON-RPC error: malformed JSON on the wire
pub const PARSE_ERROR: i64 = -32700;
/// JSON-RPC error: unknown method
pub const METHOD_NOT_FOUND: i64 = -32601;
/// JSON-RPC error: invalid request parameters
pub const INVALID_PARAMS: i64 = -32602;

/// Tool definition (for tools/list)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Tool call result (for tools/call)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCallResult {
    pub content: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "isError")]
    pub is_error: Option<bool>,
}

impl ToolCallResult {
    /// Successful result carrying one text block
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![Content::Text { text: text.into() }],
            is_error: None,
        }
    }

    /// Failed result carrying one text block
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            content: vec![Content::Text { text: text.into() }],
            is_error: Some(true),
        }
    }
}

/// Content block
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Content {
    Text { text: String },
}

/// Resource template (for resources/templates/list)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceTemplate {
    #[serde(rename = "uriTemplate")]
    pub uri_template: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "mimeType")]
    pub mime_type: Option<String>,
}

/// One entry of a resources/read response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceContent {
    pub uri: String,
    #[serde(skip_serializing_if = "Option::is_none", rename = "mimeType")]
    pub mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// resources/read response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadResourceResult {
    pub contents: Vec<ResourceContent>,
}

/// Render a tool payload as the text of a content block
///
/// Strings pass through unchanged; everything else (numbers, the news
/// tool's `null` sentinel) renders as its JSON text.
pub fn payload_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tool_definition_field_names() {
        let definition = ToolDefinition {
            name: "get_stock_price".to_string(),
            description: Some("Price lookup".to_string()),
            input_schema: json!({ "type": "object" }),
        };

        let value = serde_json::to_value(&definition).unwrap();
        assert_eq!(value["inputSchema"], json!({ "type": "object" }));
        assert!(value.get("input_schema").is_none());
    }

    #[test]
    fn test_content_is_tagged() {
        let result = ToolCallResult::text("42.5");
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(value["content"][0]["type"], "text");
        assert_eq!(value["content"][0]["text"], "42.5");
        assert!(value.get("isError").is_none());

        let value = serde_json::to_value(ToolCallResult::error("bad params")).unwrap();
        assert_eq!(value["isError"], true);
    }

    #[test]
    fn test_payload_text() {
        assert_eq!(payload_text(&json!("plain")), "plain");
        assert_eq!(payload_text(&json!(99.5)), "99.5");
        assert_eq!(payload_text(&Value::Null), "null");
    }
}

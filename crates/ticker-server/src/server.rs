//! Stdio MCP server
//!
//! Reads newline-delimited JSON-RPC 2.0 requests from stdin and writes
//! responses to stdout. Tool failures surface as `isError` tool results,
//! never as JSON-RPC faults; the host checks the payload.

use serde_json::{Value, json};
use std::sync::Arc;
use ticker_core::ToolRegistry;
use ticker_market::StockResource;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use crate::protocol::{
    INVALID_PARAMS, METHOD_NOT_FOUND, PARSE_ERROR, PROTOCOL_VERSION, ReadResourceResult,
    ResourceContent, ResourceTemplate, ToolCallResult, ToolDefinition, payload_text,
};

type RpcResult = Result<Value, (i64, String)>;

/// The stdio MCP server
pub struct McpServer {
    registry: Arc<ToolRegistry>,
    stocks: StockResource,
}

impl McpServer {
    /// Create a server over a tool registry and the stock resource
    pub fn new(registry: Arc<ToolRegistry>, stocks: StockResource) -> Self {
        Self { registry, stocks }
    }

    /// Serve until stdin closes
    pub async fn run(&self) -> anyhow::Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdout = tokio::io::stdout();

        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(response) = self.handle_line(line).await {
                let serialized = serde_json::to_string(&response)?;
                stdout.write_all(serialized.as_bytes()).await?;
                stdout.write_all(b"\n").await?;
                stdout.flush().await?;
            }
        }

        info!("stdin closed, shutting down");
        Ok(())
    }

    async fn handle_line(&self, line: &str) -> Option<Value> {
        match serde_json::from_str::<Value>(line) {
            Ok(message) => self.handle_message(message).await,
            Err(e) => {
                warn!("Discarding malformed request: {e}");
                Some(error_response(
                    Value::Null,
                    PARSE_ERROR,
                    format!("Parse error: {e}"),
                ))
            }
        }
    }

    /// Dispatch one JSON-RPC message; notifications produce no response
    pub async fn handle_message(&self, message: Value) -> Option<Value> {
        let method = message
            .get("method")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let Some(id) = message.get("id").cloned() else {
            debug!("Notification: {method}");
            return None;
        };

        let params = message.get("params").cloned().unwrap_or_else(|| json!({}));
        debug!("Handling request: {method}");

        let result = match method.as_str() {
            "initialize" => self.initialize(),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(self.list_tools()),
            "tools/call" => self.call_tool(&params).await,
            "resources/list" => Ok(json!({ "resources": [] })),
            "resources/templates/list" => Ok(self.list_resource_templates()),
            "resources/read" => self.read_resource(&params).await,
            "prompts/list" => Ok(json!({ "prompts": [] })),
            other => Err((METHOD_NOT_FOUND, format!("Method not found: {other}"))),
        };

        Some(match result {
            Ok(result) => json!({ "jsonrpc": "2.0", "id": id, "result": result }),
            Err((code, message)) => error_response(id, code, message),
        })
    }

    fn initialize(&self) -> RpcResult {
        Ok(json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": {},
                "resources": {}
            },
            "serverInfo": {
                "name": "ticker-rs",
                "version": env!("CARGO_PKG_VERSION")
            }
        }))
    }

    fn list_tools(&self) -> Value {
        let tools: Vec<ToolDefinition> = self
            .registry
            .list_tools()
            .iter()
            .map(|tool| ToolDefinition {
                name: tool.name().to_string(),
                description: Some(tool.description().to_string()),
                input_schema: tool.input_schema(),
            })
            .collect();

        json!({ "tools": tools })
    }

    async fn call_tool(&self, params: &Value) -> RpcResult {
        let name = params
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| (INVALID_PARAMS, "Missing tool name".to_string()))?;
        let arguments = params.get("arguments").cloned().unwrap_or_else(|| json!({}));

        let Some(tool) = self.registry.get(name) else {
            return Err((INVALID_PARAMS, format!("Unknown tool: {name}")));
        };

        info!("Calling tool: {name}");
        let result = match tool.execute(arguments).await {
            Ok(payload) => ToolCallResult::text(payload_text(&payload)),
            Err(e) => ToolCallResult::error(e.to_string()),
        };

        Ok(serde_json::to_value(result).unwrap_or(Value::Null))
    }

    fn list_resource_templates(&self) -> Value {
        let templates = vec![ResourceTemplate {
            uri_template: ticker_market::resource::URI_TEMPLATE.to_string(),
            name: "Stock price".to_string(),
            description: Some(
                "Current stock price for the given symbol as a formatted sentence".to_string(),
            ),
            mime_type: Some("text/plain".to_string()),
        }];

        json!({ "resourceTemplates": templates })
    }

    async fn read_resource(&self, params: &Value) -> RpcResult {
        let uri = params
            .get("uri")
            .and_then(Value::as_str)
            .ok_or_else(|| (INVALID_PARAMS, "Missing resource uri".to_string()))?;

        let Some(symbol) = StockResource::symbol_from_uri(uri) else {
            return Err((INVALID_PARAMS, format!("Unsupported resource URI: {uri}")));
        };

        let text = self.stocks.read(symbol).await;
        let result = ReadResourceResult {
            contents: vec![ResourceContent {
                uri: uri.to_string(),
                mime_type: Some("text/plain".to_string()),
                text: Some(text),
            }],
        };

        Ok(serde_json::to_value(result).unwrap_or(Value::Null))
    }
}

fn error_response(id: Value, code: i64, message: impl Into<String>) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": {
            "code": code,
            "message": message.into()
        }
    })
}

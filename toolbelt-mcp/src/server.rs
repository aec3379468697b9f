//! MCP request handling
//!
//! Transport-free: `process_line` takes one JSON-RPC line and returns the
//! response line, or `None` for notifications.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value as JsonValue};
use toolbelt_plugin::{ArgMeta, ToolCategory, ToolMeta, ToolRegistry};
use tracing::{debug, error, info, warn};

use crate::config::ServerConfig;

pub const PROTOCOL_VERSION: &str = "2025-11-25";
pub const SERVER_NAME: &str = "toolbelt";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

const PARSE_ERROR: i32 = -32700;
const METHOD_NOT_FOUND: i32 = -32601;
const INVALID_PARAMS: i32 = -32602;

// MCP Protocol types
#[derive(Debug, Deserialize)]
pub struct McpRequest {
    #[allow(dead_code)]
    pub jsonrpc: String,
    /// `None` only when the member is absent; `"id": null` is `Some(Null)`
    #[serde(default, deserialize_with = "present_id")]
    pub id: Option<JsonValue>,
    pub method: String,
    #[serde(default)]
    pub params: Option<JsonValue>,
}

fn present_id<'de, D>(deserializer: D) -> Result<Option<JsonValue>, D::Error>
where
    D: Deserializer<'de>,
{
    JsonValue::deserialize(deserializer).map(Some)
}

#[derive(Debug, Serialize)]
pub struct McpResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<McpError>,
}

#[derive(Debug, Serialize)]
pub struct McpError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonValue>,
}

impl McpError {
    fn invalid_params(message: impl Into<String>) -> Self {
        McpError { code: INVALID_PARAMS, message: message.into(), data: None }
    }
}

pub struct Server {
    registry: ToolRegistry,
    config: ServerConfig,
}

impl Server {
    pub fn new(registry: ToolRegistry, config: ServerConfig) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Handle one input line. `None` means no response is written.
    pub fn process_line(&self, line: &str) -> Option<String> {
        let request: McpRequest = match serde_json::from_str(line) {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "failed to parse request");
                let response = McpResponse {
                    jsonrpc: "2.0".to_string(),
                    id: None,
                    result: None,
                    error: Some(McpError {
                        code: PARSE_ERROR,
                        message: format!("Parse error: {}", e),
                        data: None,
                    }),
                };
                return Some(encode(&response));
            }
        };

        debug!(method = %request.method, "processing request");
        let response = self.handle_request(&request);

        // Notifications (no id) should NOT receive a response
        if request.id.is_none() {
            debug!(method = %request.method, "notification processed (no response)");
            return None;
        }

        Some(encode(&response))
    }

    pub fn handle_request(&self, request: &McpRequest) -> McpResponse {
        let result = match request.method.as_str() {
            // Lifecycle
            "initialize" => self.handle_initialize(&request.params),
            "initialized" | "notifications/initialized" => Ok(json!({})),
            "ping" => Ok(json!({})),

            // Tools
            "tools/list" => self.handle_tools_list(),
            "tools/call" => self.handle_tool_call(&request.params),
            "tools/search" => self.handle_tools_search(&request.params),

            _ => Err(McpError {
                code: METHOD_NOT_FOUND,
                message: format!("Method not found: {}", request.method),
                data: None,
            }),
        };

        match result {
            Ok(r) => McpResponse {
                jsonrpc: "2.0".to_string(),
                id: request.id.clone(),
                result: Some(r),
                error: None,
            },
            Err(e) => McpResponse {
                jsonrpc: "2.0".to_string(),
                id: request.id.clone(),
                result: None,
                error: Some(e),
            },
        }
    }

    fn handle_initialize(&self, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
        let client_info = params.as_ref()
            .and_then(|p| p.get("clientInfo"))
            .and_then(|c| c.get("name"))
            .and_then(|n| n.as_str())
            .unwrap_or("unknown");

        // Use client's protocol version for compatibility
        let client_protocol = params.as_ref()
            .and_then(|p| p.get("protocolVersion"))
            .and_then(|v| v.as_str())
            .unwrap_or(PROTOCOL_VERSION);

        info!(client = client_info, protocol = client_protocol, "client connected");

        Ok(json!({
            "protocolVersion": client_protocol,
            "serverInfo": {
                "name": SERVER_NAME,
                "version": SERVER_VERSION,
                "description": "Everyday utility tools: unit and currency conversion"
            },
            "capabilities": {
                "tools": {
                    "listChanged": false
                }
            },
            "instructions": "Use tools/list to see the available tools. Unit symbols are case-sensitive and belong to one category; call list_units to see them."
        }))
    }

    fn handle_tools_list(&self) -> Result<JsonValue, McpError> {
        let tools: Vec<JsonValue> = self.registry.list().iter().map(tool_descriptor).collect();
        Ok(json!({ "tools": tools }))
    }

    fn handle_tools_search(&self, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
        let query = search_param(params, "query")?.unwrap_or("");

        let category = match search_param(params, "category")? {
            Some(label) => Some(ToolCategory::from_label(label).ok_or_else(|| McpError {
                code: INVALID_PARAMS,
                message: format!("Unknown tool category: {}", label),
                data: Some(json!({
                    "available": ToolCategory::ALL.iter().map(|c| c.label()).collect::<Vec<_>>()
                })),
            })?),
            None => None,
        };

        let found = self.registry.search(query, category);
        let text = format!("{} tools available", found.len());
        Ok(json!({
            "content": [{ "type": "text", "text": text }],
            "tools": found,
        }))
    }

    fn handle_tool_call(&self, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
        let params = params.as_ref().ok_or_else(|| McpError::invalid_params("Missing params"))?;

        let name = params.get("name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| McpError::invalid_params("Missing tool name"))?;

        let mut args = params.get("arguments").cloned().unwrap_or(json!({}));
        if !args.is_object() {
            return Err(McpError::invalid_params("Tool arguments must be an object"));
        }
        self.apply_defaults(name, &mut args);

        match self.registry.call(name, &args) {
            Ok(data) => {
                let text = data.get("display")
                    .and_then(|d| d.as_str())
                    .map(str::to_string)
                    .unwrap_or_else(|| data.to_string());
                Ok(json!({
                    "content": [{ "type": "text", "text": text }],
                    "data": data,
                    "isError": false
                }))
            }
            Err(e) => {
                debug!(tool = name, code = %e.code, "tool returned error");
                Ok(json!({
                    "content": [{ "type": "text", "text": e.to_string() }],
                    "data": { "error": e },
                    "isError": true
                }))
            }
        }
    }

    /// Fill a missing `places` argument from the configured display precision
    fn apply_defaults(&self, name: &str, args: &mut JsonValue) {
        let takes_places = self.registry.get(name)
            .map(|tool| tool.meta().args.iter().any(|a| a.name == "places"))
            .unwrap_or(false);
        if !takes_places {
            return;
        }
        if let Some(obj) = args.as_object_mut() {
            if obj.get("places").map_or(true, JsonValue::is_null) {
                obj.insert("places".to_string(), json!(self.config.display_places));
            }
        }
    }
}

/// Optional string member of `tools/search` params; null counts as absent
fn search_param<'a>(params: &'a Option<JsonValue>, key: &str) -> Result<Option<&'a str>, McpError> {
    match params.as_ref().and_then(|p| p.get(key)) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::String(s)) => Ok(Some(s.as_str())),
        Some(_) => Err(McpError::invalid_params(format!("'{}' must be a string", key))),
    }
}

fn encode(response: &McpResponse) -> String {
    serde_json::to_string(response).unwrap_or_else(|e| {
        error!(error = %e, "failed to encode response");
        r#"{"jsonrpc":"2.0","error":{"code":-32603,"message":"Internal error"}}"#.to_string()
    })
}

fn json_schema_type(typ: &str) -> &'static str {
    match typ {
        "Number" => "number",
        "Bool" => "boolean",
        "List" => "array",
        "Object" => "object",
        _ => "string",
    }
}

fn arg_schema(arg: &ArgMeta) -> JsonValue {
    let mut schema = json!({
        "type": json_schema_type(arg.typ),
        "description": arg.description,
    });
    if let Some(default) = arg.default {
        schema["default"] = json!(default);
    }
    schema
}

fn tool_descriptor(meta: &ToolMeta) -> JsonValue {
    let properties: serde_json::Map<String, JsonValue> = meta.args.iter()
        .map(|a| (a.name.to_string(), arg_schema(a)))
        .collect();
    let required: Vec<&str> = meta.args.iter()
        .filter(|a| !a.optional)
        .map(|a| a.name)
        .collect();

    json!({
        "name": meta.name,
        "description": meta.description,
        "inputSchema": {
            "type": "object",
            "properties": properties,
            "required": required
        }
    })
}

use crate::prelude::eprintln;
use serde::{Deserialize, Serialize};

use super::{JsonRpcError, Tool, INVALID_PARAMS};

// MCP Protocol types for tools
#[derive(Debug, Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct ServerCapabilities {
    pub tools: Option<ToolsCapability>,
}

#[derive(Debug, Serialize)]
pub struct ToolsCapability {}

#[derive(Debug, Serialize)]
pub struct InitializeResult {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    pub capabilities: ServerCapabilities,
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
}

#[derive(Debug, Serialize)]
pub struct ToolsList {
    pub tools: Vec<Tool>,
}

#[derive(Debug, Deserialize)]
pub struct CallToolParams {
    pub name: String,
    pub arguments: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct CallToolResult {
    pub content: Vec<Content>,
    #[serde(rename = "isError", skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum Content {
    #[serde(rename = "text")]
    Text { text: String },
}

pub fn handle_initialize() -> Result<serde_json::Value, JsonRpcError> {
    let result = InitializeResult {
        protocol_version: "2024-11-05".to_string(),
        capabilities: ServerCapabilities {
            tools: Some(ToolsCapability {}),
        },
        server_info: ServerInfo {
            name: "hilanet".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    };

    serde_json::to_value(result).map_err(JsonRpcError::internal)
}

pub fn handle_tools_list() -> Result<serde_json::Value, JsonRpcError> {
    let tools = hilanet_core::registry::tools()
        .iter()
        .map(|spec| Tool {
            name: spec.name.to_string(),
            description: spec.description.to_string(),
            input_schema: spec.input_schema(),
        })
        .collect();

    serde_json::to_value(ToolsList { tools }).map_err(JsonRpcError::internal)
}

/// Run a tool. Argument problems come back as an `isError` tool result so
/// the client can show them; only an unknown tool is a JSON-RPC error.
pub fn handle_tools_call(
    params: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    let params: CallToolParams = serde_json::from_value(params.unwrap_or(serde_json::Value::Null))
        .map_err(|e| JsonRpcError::new(INVALID_PARAMS, format!("Invalid params: {e}")))?;

    if global.verbose {
        eprintln!("Calling {}: {:?}", params.name, params.arguments);
    }

    let arguments = params.arguments.unwrap_or(serde_json::Value::Null);
    let result = match crate::tools::call_tool(&params.name, arguments, global) {
        Ok(text) => CallToolResult {
            content: vec![Content::Text { text }],
            is_error: None,
        },
        Err(err) if err.is_user_facing() => {
            log::info!("{} rejected: {err}", params.name);
            CallToolResult {
                content: vec![Content::Text {
                    text: err.to_string(),
                }],
                is_error: Some(true),
            }
        }
        Err(err) => return Err(JsonRpcError::new(INVALID_PARAMS, err.to_string())),
    };

    serde_json::to_value(result).map_err(JsonRpcError::internal)
}

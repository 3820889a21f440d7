mod cli;
mod sse;
mod stdio;
mod tools;

pub use cli::App;

use crate::prelude::*;
use serde::{Deserialize, Serialize};

const PARSE_ERROR: i32 = -32700;
const INVALID_REQUEST: i32 = -32600;
const METHOD_NOT_FOUND: i32 = -32601;
const INVALID_PARAMS: i32 = -32602;
const INTERNAL_ERROR: i32 = -32603;

// JSON-RPC 2.0 types
#[derive(Debug, Deserialize)]
struct JsonRpcRequest {
    #[allow(dead_code)]
    jsonrpc: String,
    id: Option<serde_json::Value>,
    method: String,
    params: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    jsonrpc: String,
    id: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonRpcError>,
}

#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl JsonRpcError {
    fn new(code: i32, message: String) -> Self {
        JsonRpcError {
            code,
            message,
            data: None,
        }
    }

    fn internal(e: impl std::fmt::Display) -> Self {
        JsonRpcError::new(INTERNAL_ERROR, format!("Internal error: {e}"))
    }
}

// MCP Protocol types
#[derive(Debug, Serialize)]
pub struct Tool {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: serde_json::Value,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        cli::Commands::Stdio => stdio::run_stdio(global).await,
        cli::Commands::Sse(options) => sse::run_sse(options, global).await,
    }
}

/// Response to a message that never became a request (bad JSON, bad UTF-8).
pub fn parse_error(e: impl std::fmt::Display) -> JsonRpcResponse {
    error_response(
        None,
        JsonRpcError::new(PARSE_ERROR, format!("Parse error: {e}")),
    )
}

fn error_response(id: Option<serde_json::Value>, error: JsonRpcError) -> JsonRpcResponse {
    JsonRpcResponse {
        jsonrpc: "2.0".to_string(),
        id,
        result: None,
        error: Some(error),
    }
}

/// Handle one JSON-RPC message.
///
/// Returns `None` for notifications (messages without an `id`), which never
/// get a response.
pub fn handle_request(request_str: &str, global: &crate::Global) -> Option<JsonRpcResponse> {
    let message: serde_json::Value = match serde_json::from_str(request_str) {
        Ok(value) => value,
        Err(e) => return Some(parse_error(e)),
    };

    let id = message.get("id").cloned().filter(|id| !id.is_null());
    let request: JsonRpcRequest = match serde_json::from_value(message) {
        Ok(req) => req,
        Err(e) => {
            return Some(error_response(
                id,
                JsonRpcError::new(INVALID_REQUEST, format!("Invalid Request: {e}")),
            ));
        }
    };

    let Some(id) = request.id else {
        log::debug!("notification: {}", request.method);
        return None;
    };

    let result = match request.method.as_str() {
        "initialize" => tools::handle_initialize(),
        "ping" => Ok(serde_json::json!({})),
        "tools/list" => tools::handle_tools_list(),
        "tools/call" => tools::handle_tools_call(request.params, global),
        method => Err(JsonRpcError::new(
            METHOD_NOT_FOUND,
            format!("Method not found: {method}"),
        )),
    };

    let response = match result {
        Ok(value) => JsonRpcResponse {
            jsonrpc: "2.0".to_string(),
            id: Some(id),
            result: Some(value),
            error: None,
        },
        Err(error) => error_response(Some(id), error),
    };

    Some(response)
}

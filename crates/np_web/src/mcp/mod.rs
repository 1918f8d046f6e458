//! Model Context Protocol endpoint.
//!
//! A stateless JSON-RPC 2.0 handler mounted at `POST /mcp`. Each HTTP
//! request carries exactly one message. Supported methods:
//! - `initialize`, `ping`
//! - `tools/list`, `tools/call`
//! - `resources/list`, `resources/read`, `resources/templates/list`
//!
//! Notifications are acknowledged with `202 Accepted` and no body.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub mod protocol;
pub mod tools;
pub mod widget;

use crate::AppState;
use protocol::{
    CallToolParams, InitializeParams, JsonRpcError, JsonRpcRequest, JsonRpcResponse, ReadResourceParams,
    DEFAULT_PROTOCOL_VERSION, JSONRPC_VERSION,
};

pub const SERVER_NAME: &str = "news-portal";

pub async fn handle(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let message: Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(e) => {
            warn!("Rejected malformed MCP message: {}", e);
            return Json(JsonRpcResponse::failure(Value::Null, JsonRpcError::parse_error(e))).into_response();
        }
    };

    if message.is_array() {
        return Json(JsonRpcResponse::failure(
            Value::Null,
            JsonRpcError::invalid_request("batch requests are not supported"),
        ))
        .into_response();
    }

    let id = message.get("id").cloned().unwrap_or(Value::Null);
    let request: JsonRpcRequest = match serde_json::from_value(message) {
        Ok(request) => request,
        Err(e) => return Json(JsonRpcResponse::failure(id, JsonRpcError::invalid_request(e))).into_response(),
    };
    if request.jsonrpc != JSONRPC_VERSION {
        return Json(JsonRpcResponse::failure(
            id,
            JsonRpcError::invalid_request(format!("unsupported jsonrpc version {}", request.jsonrpc)),
        ))
        .into_response();
    }

    if request.is_notification() {
        debug!("MCP notification {}", request.method);
        return StatusCode::ACCEPTED.into_response();
    }

    info!("📨 MCP request {}", request.method);
    let result = dispatch(&state, &request.method, request.params);
    Json(JsonRpcResponse::from_result(id, result)).into_response()
}

fn params<T: DeserializeOwned>(params: Option<Value>) -> Result<T, JsonRpcError> {
    let params = params.ok_or_else(|| JsonRpcError::invalid_params("missing params"))?;
    serde_json::from_value(params).map_err(JsonRpcError::invalid_params)
}

pub fn dispatch(state: &AppState, method: &str, raw_params: Option<Value>) -> Result<Value, JsonRpcError> {
    match method {
        "initialize" => {
            let init: InitializeParams = match raw_params {
                Some(value) => serde_json::from_value(value).map_err(JsonRpcError::invalid_params)?,
                None => InitializeParams::default(),
            };
            let version = init.protocol_version.unwrap_or_else(|| DEFAULT_PROTOCOL_VERSION.to_string());
            Ok(json!({
                "protocolVersion": version,
                "capabilities": {
                    "tools": { "listChanged": false },
                    "resources": { "listChanged": false, "subscribe": false },
                },
                "serverInfo": { "name": SERVER_NAME, "version": env!("CARGO_PKG_VERSION") },
            }))
        }
        "ping" => Ok(json!({})),
        "tools/list" => Ok(json!({ "tools": tools::definitions() })),
        "tools/call" => {
            let call: CallToolParams = params(raw_params)?;
            let result = tools::call(state, &call.name, call.arguments);
            serde_json::to_value(result).map_err(|e| JsonRpcError::new(protocol::INTERNAL_ERROR, e.to_string()))
        }
        "resources/list" => {
            let resources: Vec<Value> = widget::WIDGETS.iter().map(|w| w.resource()).collect();
            Ok(json!({ "resources": resources }))
        }
        "resources/templates/list" => Ok(json!({ "resourceTemplates": [] })),
        "resources/read" => {
            let read: ReadResourceParams = params(raw_params)?;
            let widget = widget::find(&read.uri)
                .ok_or_else(|| JsonRpcError::invalid_params(format!("unknown resource {}", read.uri)))?;
            Ok(json!({ "contents": [widget.contents()] }))
        }
        other => Err(JsonRpcError::method_not_found(other)),
    }
}

//! Shared test helpers for freshdesk_mcp tests.

#![allow(dead_code)]

use freshdesk_api::FreshdeskClient;
use httpmock::MockServer;
use rmcp::model::{CallToolResult, RawContent};
use serde_json::{Map, Value};

pub const API_KEY: &str = "test-key";

/// `Authorization` header Freshdesk expects for `API_KEY`.
pub const BASIC_AUTH: &str = "Basic dGVzdC1rZXk6WA==";

/// Create a client that talks to the given mock server.
pub fn client_for(server: &MockServer) -> FreshdeskClient {
    FreshdeskClient::with_base_url(server.base_url(), API_KEY)
}

/// Extract the text content from a CallToolResult.
pub fn get_text(result: &CallToolResult) -> String {
    assert_eq!(result.content.len(), 1, "Expected exactly one content item");
    match &result.content[0].raw {
        RawContent::Text(text_content) => text_content.text.clone(),
        _ => panic!("Expected text content"),
    }
}

/// Parse the text content of a result as JSON.
pub fn get_json(result: &CallToolResult) -> Value {
    let text = get_text(result);
    serde_json::from_str(&text).unwrap_or_else(|e| panic!("Expected JSON, got {text:?}: {e}"))
}

/// Check if the result is a success.
pub fn is_success(result: &CallToolResult) -> bool {
    result.is_error == Some(false)
}

/// Check if the result is an error.
pub fn is_error(result: &CallToolResult) -> bool {
    result.is_error == Some(true)
}

/// Turn a `json!` object literal into a field map.
pub fn fields(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("Expected a JSON object, got {other}"),
    }
}

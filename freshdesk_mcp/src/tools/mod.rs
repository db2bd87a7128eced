//! MCP tool implementations for Freshdesk.
//!
//! Each submodule covers one Freshdesk resource. Tool functions take the
//! client and their parameters and always produce a `CallToolResult`:
//! API and validation failures become error results, not protocol errors.

pub mod agents;
pub mod alerts;
pub mod canned_responses;
pub mod companies;
pub mod contacts;
pub mod groups;
pub mod solutions;
pub mod tickets;

use freshdesk_api::{ApiResponse, FreshdeskError, PageRequest};
use rmcp::model::{CallToolResult, Content};
use rmcp::schemars;
use serde_json::{Map, Value, json};

/// Pagination parameters shared by list tools.
#[derive(Debug, Default, serde::Deserialize, schemars::JsonSchema)]
pub struct PageParams {
    /// Page number, starting at 1. Defaults to 1.
    #[serde(default)]
    pub page: Option<i64>,
    /// Results per page, between 1 and 100. Defaults to 30.
    #[serde(default)]
    pub per_page: Option<i64>,
}

impl PageParams {
    pub fn request(&self) -> Result<PageRequest, FreshdeskError> {
        PageRequest::new(self.page, self.per_page)
    }
}

/// Parameters for tools that only take a search string.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct SearchParams {
    /// Text to search for.
    pub query: String,
}

/// Pretty-printed JSON as a successful result.
pub(crate) fn success_json(value: &Value) -> CallToolResult {
    let text = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    CallToolResult::success(vec![Content::text(text)])
}

/// A plain message as a successful result.
pub(crate) fn success_message(message: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(message.into())])
}

/// A plain message as an error result.
pub(crate) fn invalid(message: impl Into<String>) -> CallToolResult {
    CallToolResult::error(vec![Content::text(message.into())])
}

/// Turns a failure into an error result prefixed with `context`.
///
/// Validation failures carry their own wording and are not prefixed.
pub(crate) fn failure(context: &str, error: &FreshdeskError) -> CallToolResult {
    match error {
        FreshdeskError::Validation(message) => invalid(message.clone()),
        other => invalid(format!("{}: {}", context, other)),
    }
}

/// Returns the response body, or a contextual error.
pub(crate) fn respond(result: Result<ApiResponse, FreshdeskError>, context: &str) -> CallToolResult {
    match result {
        Ok(response) => success_json(&response.body),
        Err(e) => failure(context, &e),
    }
}

/// Like `respond`, but answers `204 No Content` with a success envelope.
pub(crate) fn respond_no_content(
    result: Result<ApiResponse, FreshdeskError>,
    context: &str,
    message: &str,
) -> CallToolResult {
    match result {
        Ok(response) if response.status == 204 || response.body.is_null() => {
            success_json(&json!({"success": true, "message": message}))
        }
        other => respond(other, context),
    }
}

/// Wraps a list response as `{ <key>: [...], "pagination": {...} }`.
pub(crate) fn paginated(
    result: Result<ApiResponse, FreshdeskError>,
    key: &str,
    page: &PageRequest,
    context: &str,
) -> CallToolResult {
    match result {
        Ok(response) => {
            let mut envelope = Map::new();
            envelope.insert(key.to_string(), response.body);
            envelope.insert(
                "pagination".to_string(),
                json!(page.info(&response.pagination)),
            );
            success_json(&Value::Object(envelope))
        }
        Err(e) => failure(context, &e),
    }
}

/// Whether `fields[key]` holds a non-empty, non-zero, non-false value.
pub(crate) fn has_value(fields: &Map<String, Value>, key: &str) -> bool {
    match fields.get(key) {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
    }
}

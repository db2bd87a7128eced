//! Alert management tools for the `/ams/alerts` endpoints.

use freshdesk_api::FreshdeskClient;
use rmcp::model::CallToolResult;
use rmcp::schemars;
use serde_json::json;

use super::{PageParams, failure, paginated, respond, respond_no_content};

/// Parameters for tools addressing a single alert.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AlertIdParams {
    /// ID of the alert.
    pub alert_id: u64,
}

/// Parameters for the list_alerts tool.
#[derive(Debug, Default, serde::Deserialize, schemars::JsonSchema)]
pub struct ListAlertsParams {
    /// Filter query, e.g. "severity:201 AND state:1".
    #[serde(default)]
    pub query: Option<String>,
    /// Field to sort by. Defaults to "updated_at".
    #[serde(default)]
    pub order_by: Option<String>,
    /// "asc" or "desc". Defaults to "desc".
    #[serde(default)]
    pub order_type: Option<String>,
    #[serde(flatten)]
    pub page: PageParams,
}

/// Parameters for the view_alert_logs tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AlertLogsParams {
    /// ID of the alert.
    pub alert_id: u64,
    /// Continuation token from a previous page of logs.
    #[serde(default)]
    pub start_token: Option<u64>,
}

/// Parameters for the create_alert_note tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CreateAlertNoteParams {
    /// ID of the alert.
    pub alert_id: u64,
    /// Note content.
    pub description: String,
}

/// Parameters for the list_alert_notes tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ListAlertNotesParams {
    /// ID of the alert.
    pub alert_id: u64,
    #[serde(flatten)]
    pub page: PageParams,
}

/// Parameters for tools addressing a single alert note.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AlertNoteIdParams {
    /// ID of the alert.
    pub alert_id: u64,
    /// ID of the note.
    pub note_id: u64,
}

/// Parameters for the update_alert_note tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct UpdateAlertNoteParams {
    /// ID of the alert.
    pub alert_id: u64,
    /// ID of the note.
    pub note_id: u64,
    /// New note content.
    pub description: String,
}

pub async fn list_alerts(client: &FreshdeskClient, params: &ListAlertsParams) -> CallToolResult {
    let page = match params.page.request() {
        Ok(page) => page,
        Err(e) => return failure("Failed to fetch alerts", &e),
    };

    let mut query = vec![
        (
            "order_by",
            params
                .order_by
                .clone()
                .unwrap_or_else(|| "updated_at".to_string()),
        ),
        (
            "order_type",
            params
                .order_type
                .clone()
                .unwrap_or_else(|| "desc".to_string()),
        ),
    ];
    query.extend(page.query());
    if let Some(filter) = params.query.as_ref().filter(|q| !q.is_empty()) {
        query.push(("query", filter.clone()));
    }

    paginated(
        client.get("/ams/alerts", &query).await,
        "alerts",
        &page,
        "Failed to fetch alerts",
    )
}

pub async fn view_alert(client: &FreshdeskClient, params: &AlertIdParams) -> CallToolResult {
    let path = format!("/ams/alerts/{}", params.alert_id);
    respond(client.get(&path, &[]).await, "Failed to fetch alert")
}

pub async fn acknowledge_alert(client: &FreshdeskClient, params: &AlertIdParams) -> CallToolResult {
    let path = format!("/ams/alerts/{}/acknowledge", params.alert_id);
    respond(
        client.put_empty(&path).await,
        "Failed to acknowledge alert",
    )
}

pub async fn resolve_alert(client: &FreshdeskClient, params: &AlertIdParams) -> CallToolResult {
    let path = format!("/ams/alerts/{}/resolve", params.alert_id);
    respond(client.put_empty(&path).await, "Failed to resolve alert")
}

pub async fn suppress_alert(client: &FreshdeskClient, params: &AlertIdParams) -> CallToolResult {
    let path = format!("/ams/alerts/{}/suppress", params.alert_id);
    respond_no_content(
        client.put_empty(&path).await,
        "Failed to suppress alert",
        "Alert suppressed successfully",
    )
}

pub async fn unsuppress_alert(client: &FreshdeskClient, params: &AlertIdParams) -> CallToolResult {
    let path = format!("/ams/alerts/{}/unsuppress", params.alert_id);
    respond_no_content(
        client.put_empty(&path).await,
        "Failed to unsuppress alert",
        "Alert unsuppressed successfully",
    )
}

pub async fn delete_alert(client: &FreshdeskClient, params: &AlertIdParams) -> CallToolResult {
    let path = format!("/ams/alerts/{}", params.alert_id);
    respond_no_content(
        client.delete(&path).await,
        "Failed to delete alert",
        "Alert deleted successfully",
    )
}

pub async fn view_alert_logs(client: &FreshdeskClient, params: &AlertLogsParams) -> CallToolResult {
    let path = format!("/ams/alerts/{}/logs", params.alert_id);
    let query: Vec<(&str, String)> = params
        .start_token
        .filter(|token| *token != 0)
        .map(|token| ("start_token", token.to_string()))
        .into_iter()
        .collect();
    respond(
        client.get(&path, &query).await,
        "Failed to fetch alert logs",
    )
}

pub async fn create_alert_note(
    client: &FreshdeskClient,
    params: &CreateAlertNoteParams,
) -> CallToolResult {
    let path = format!("/ams/alerts/{}/notes", params.alert_id);
    respond(
        client
            .post(&path, &json!({"description": params.description}))
            .await,
        "Failed to create alert note",
    )
}

pub async fn list_alert_notes(
    client: &FreshdeskClient,
    params: &ListAlertNotesParams,
) -> CallToolResult {
    let page = match params.page.request() {
        Ok(page) => page,
        Err(e) => return failure("Failed to fetch alert notes", &e),
    };
    let path = format!("/ams/alerts/{}/notes", params.alert_id);

    paginated(
        client.get(&path, &page.query()).await,
        "alert_notes",
        &page,
        "Failed to fetch alert notes",
    )
}

pub async fn view_alert_note(
    client: &FreshdeskClient,
    params: &AlertNoteIdParams,
) -> CallToolResult {
    let path = format!("/ams/alerts/{}/notes/{}", params.alert_id, params.note_id);
    respond(client.get(&path, &[]).await, "Failed to fetch alert note")
}

pub async fn update_alert_note(
    client: &FreshdeskClient,
    params: &UpdateAlertNoteParams,
) -> CallToolResult {
    let path = format!("/ams/alerts/{}/notes/{}", params.alert_id, params.note_id);
    respond(
        client
            .put(&path, &json!({"description": params.description}))
            .await,
        "Failed to update alert note",
    )
}

pub async fn delete_alert_note(
    client: &FreshdeskClient,
    params: &AlertNoteIdParams,
) -> CallToolResult {
    let path = format!("/ams/alerts/{}/notes/{}", params.alert_id, params.note_id);
    respond_no_content(
        client.delete(&path).await,
        "Failed to delete alert note",
        "Alert note deleted successfully",
    )
}

//! Canned response and canned response folder tools.

use freshdesk_api::FreshdeskClient;
use freshdesk_api::models::{CannedResponseCreate, from_fields};
use rmcp::model::CallToolResult;
use rmcp::schemars;
use serde_json::{Map, Value, json};

use super::{failure, invalid, respond};

/// Parameters for tools addressing a canned response folder.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct FolderIdParams {
    /// ID of the canned response folder.
    pub folder_id: u64,
}

/// Parameters for tools addressing a single canned response.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CannedResponseIdParams {
    /// ID of the canned response.
    pub canned_response_id: u64,
}

/// Parameters for the create_canned_response tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CreateCannedResponseParams {
    /// Requires "title", "content_html", "folder_id" and "visibility"
    /// (0=all agents, 1=personal, 2=select groups). "group_ids" is required
    /// when visibility is 2.
    pub canned_response_fields: Map<String, Value>,
}

/// Parameters for the update_canned_response tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct UpdateCannedResponseParams {
    /// ID of the canned response.
    pub canned_response_id: u64,
    /// Properties to change.
    pub canned_response_fields: Map<String, Value>,
}

/// Parameters for the create_canned_response_folder tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CreateFolderParams {
    /// Name of the folder.
    pub name: String,
}

/// Parameters for the update_canned_response_folder tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct UpdateFolderParams {
    /// ID of the folder.
    pub folder_id: u64,
    /// New name of the folder.
    pub name: String,
}

pub async fn list_canned_responses(
    client: &FreshdeskClient,
    params: &FolderIdParams,
) -> CallToolResult {
    let path = format!("/canned_response_folders/{}/responses", params.folder_id);
    respond(
        client.get(&path, &[]).await,
        "Failed to fetch canned responses",
    )
}

pub async fn list_canned_response_folders(client: &FreshdeskClient) -> CallToolResult {
    respond(
        client.get("/canned_response_folders", &[]).await,
        "Failed to fetch canned response folders",
    )
}

pub async fn view_canned_response(
    client: &FreshdeskClient,
    params: &CannedResponseIdParams,
) -> CallToolResult {
    let path = format!("/canned_responses/{}", params.canned_response_id);
    respond(
        client.get(&path, &[]).await,
        "Failed to fetch canned response",
    )
}

pub async fn create_canned_response(
    client: &FreshdeskClient,
    params: &CreateCannedResponseParams,
) -> CallToolResult {
    let canned_response: CannedResponseCreate =
        match from_fields(params.canned_response_fields.clone()) {
            Ok(canned_response) => canned_response,
            Err(e) => return failure("Failed to create canned response", &e),
        };
    respond(
        client.post("/canned_responses", &canned_response).await,
        "Failed to create canned response",
    )
}

pub async fn update_canned_response(
    client: &FreshdeskClient,
    params: &UpdateCannedResponseParams,
) -> CallToolResult {
    let path = format!("/canned_responses/{}", params.canned_response_id);
    respond(
        client.put(&path, &params.canned_response_fields).await,
        "Failed to update canned response",
    )
}

pub async fn create_canned_response_folder(
    client: &FreshdeskClient,
    params: &CreateFolderParams,
) -> CallToolResult {
    if params.name.trim().is_empty() {
        return invalid("Name is required");
    }
    respond(
        client
            .post("/canned_response_folders", &json!({"name": params.name}))
            .await,
        "Failed to create canned response folder",
    )
}

pub async fn update_canned_response_folder(
    client: &FreshdeskClient,
    params: &UpdateFolderParams,
) -> CallToolResult {
    if params.name.trim().is_empty() {
        return invalid("Name is required");
    }
    let path = format!("/canned_response_folders/{}", params.folder_id);
    respond(
        client.put(&path, &json!({"name": params.name})).await,
        "Failed to update canned response folder",
    )
}

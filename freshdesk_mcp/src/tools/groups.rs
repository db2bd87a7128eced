//! Agent group tools.

use freshdesk_api::FreshdeskClient;
use freshdesk_api::models::{GroupCreate, from_fields};
use rmcp::model::CallToolResult;
use rmcp::schemars;
use serde_json::{Map, Value};

use super::{PageParams, failure, respond};

/// Parameters for tools addressing a single group.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GroupIdParams {
    /// ID of the group.
    pub group_id: u64,
}

/// Parameters for the create_group tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CreateGroupParams {
    /// Group properties. "name" is required; optional "description",
    /// "agent_ids", "auto_ticket_assign" (0 or 1), "escalate_to" and
    /// "unassigned_for" (30m, 1h, 2h, 4h, 8h, 12h, 1d, 2d, 3d).
    pub group_fields: Map<String, Value>,
}

/// Parameters for the update_group tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct UpdateGroupParams {
    /// ID of the group.
    pub group_id: u64,
    /// Group properties, validated like create_group.
    pub group_fields: Map<String, Value>,
}

pub async fn list_groups(client: &FreshdeskClient, params: &PageParams) -> CallToolResult {
    let page = match params.request() {
        Ok(page) => page,
        Err(e) => return failure("Failed to fetch groups", &e),
    };
    respond(
        client.get("/groups", &page.query()).await,
        "Failed to fetch groups",
    )
}

pub async fn create_group(client: &FreshdeskClient, params: &CreateGroupParams) -> CallToolResult {
    let group: GroupCreate = match from_fields(params.group_fields.clone()) {
        Ok(group) => group,
        Err(e) => return failure("Failed to create group", &e),
    };
    respond(
        client.post("/groups", &group).await,
        "Failed to create group",
    )
}

pub async fn view_group(client: &FreshdeskClient, params: &GroupIdParams) -> CallToolResult {
    let path = format!("/groups/{}", params.group_id);
    respond(client.get(&path, &[]).await, "Failed to fetch group")
}

pub async fn update_group(client: &FreshdeskClient, params: &UpdateGroupParams) -> CallToolResult {
    let group: GroupCreate = match from_fields(params.group_fields.clone()) {
        Ok(group) => group,
        Err(e) => return failure("Failed to update group", &e),
    };
    let path = format!("/groups/{}", params.group_id);
    respond(client.put(&path, &group).await, "Failed to update group")
}

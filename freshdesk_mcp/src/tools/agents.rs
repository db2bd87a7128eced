//! Agent tools.

use freshdesk_api::FreshdeskClient;
use freshdesk_api::types::AgentTicketScope;
use rmcp::model::CallToolResult;
use rmcp::schemars;
use serde_json::{Map, Value};

use super::{PageParams, SearchParams, failure, has_value, invalid, respond};

/// Parameters for tools addressing a single agent.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AgentIdParams {
    /// ID of the agent.
    pub agent_id: u64,
}

/// Parameters for the create_agent tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CreateAgentParams {
    /// Agent properties. "email" and "ticket_scope" (1=Global, 2=Group,
    /// 3=Restricted) are required.
    pub agent_fields: Map<String, Value>,
}

/// Parameters for the update_agent tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct UpdateAgentParams {
    /// ID of the agent.
    pub agent_id: u64,
    /// Agent properties to change.
    pub agent_fields: Map<String, Value>,
}

pub async fn get_agents(client: &FreshdeskClient, params: &PageParams) -> CallToolResult {
    let page = match params.request() {
        Ok(page) => page,
        Err(e) => return failure("Failed to fetch agents", &e),
    };
    respond(
        client.get("/agents", &page.query()).await,
        "Failed to fetch agents",
    )
}

pub async fn view_agent(client: &FreshdeskClient, params: &AgentIdParams) -> CallToolResult {
    let path = format!("/agents/{}", params.agent_id);
    respond(client.get(&path, &[]).await, "Failed to fetch agent")
}

pub async fn create_agent(client: &FreshdeskClient, params: &CreateAgentParams) -> CallToolResult {
    let fields = &params.agent_fields;
    if !has_value(fields, "email") || !has_value(fields, "ticket_scope") {
        return invalid("Missing mandatory fields. Both 'email' and 'ticket_scope' are required.");
    }

    let scope = fields
        .get("ticket_scope")
        .map(AgentTicketScope::from_value);
    let Some(Ok(scope)) = scope else {
        return invalid(format!(
            "Invalid value for ticket_scope. Must be one of: {}",
            AgentTicketScope::labels()
        ));
    };

    let mut body = fields.clone();
    body.insert("ticket_scope".to_string(), scope.code().into());

    respond(
        client.post("/agents", &body).await,
        "Failed to create agent",
    )
}

pub async fn update_agent(client: &FreshdeskClient, params: &UpdateAgentParams) -> CallToolResult {
    let path = format!("/agents/{}", params.agent_id);
    respond(
        client.put(&path, &params.agent_fields).await,
        "Failed to update agent",
    )
}

pub async fn search_agents(client: &FreshdeskClient, params: &SearchParams) -> CallToolResult {
    respond(
        client
            .get("/agents/autocomplete", &[("term", params.query.clone())])
            .await,
        "Failed to search agents",
    )
}

//! Ticket, conversation and ticket field tools.

use freshdesk_api::FreshdeskClient;
use freshdesk_api::models::{TicketCreate, Validate, check_requester};
use freshdesk_api::types::{TicketPriority, TicketSource, TicketStatus};
use rmcp::model::CallToolResult;
use rmcp::schemars;
use serde_json::{Map, Value, json};

use super::{
    PageParams, SearchParams, failure, invalid, paginated, respond, success_json, success_message,
};

/// Parameters for tools addressing a single ticket.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct TicketIdParams {
    /// ID of the ticket.
    pub ticket_id: u64,
}

/// Parameters for the create_ticket tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CreateTicketParams {
    /// Subject of the ticket.
    pub subject: String,
    /// HTML content of the ticket.
    pub description: String,
    /// Source code: 1=Email, 2=Portal, 3=Phone, 7=Chat, 9=Feedback widget, 10=Outbound email.
    pub source: Value,
    /// Priority code: 1=Low, 2=Medium, 3=High, 4=Urgent.
    pub priority: Value,
    /// Status code: 2=Open, 3=Pending, 4=Resolved, 5=Closed.
    pub status: Value,
    /// Email address of the requester. Either this or requester_id is required.
    #[serde(default)]
    pub email: Option<String>,
    /// Contact ID of the requester.
    #[serde(default)]
    pub requester_id: Option<u64>,
    /// Custom field values keyed by field name (e.g. "cf_region").
    #[serde(default)]
    pub custom_fields: Option<Map<String, Value>>,
    /// Other top-level ticket fields such as "type", "group_id" or "tags".
    #[serde(default)]
    pub additional_fields: Option<Map<String, Value>>,
}

/// Parameters for the update_ticket tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct UpdateTicketParams {
    /// ID of the ticket.
    pub ticket_id: u64,
    /// Fields to change, e.g. {"status": 4, "custom_fields": {"cf_region": "EU"}}.
    pub ticket_fields: Map<String, Value>,
}

/// Parameters for tools that post a body to a ticket.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct TicketBodyParams {
    /// ID of the ticket.
    pub ticket_id: u64,
    /// HTML content.
    pub body: String,
}

/// Parameters for the update_ticket_conversation tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct UpdateConversationParams {
    /// ID of the conversation (reply or note).
    pub conversation_id: u64,
    /// New HTML content.
    pub body: String,
}

/// Parameters for the get_field_properties tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct FieldPropertiesParams {
    /// Name of the ticket field, e.g. "status", "type" or "cf_region".
    pub field_name: String,
}

/// Parameters for tools addressing a single ticket field.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct TicketFieldIdParams {
    /// ID of the ticket field.
    pub ticket_field_id: u64,
}

/// Parameters for the create_ticket_field tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CreateTicketFieldParams {
    /// Ticket field definition as accepted by Freshdesk.
    pub ticket_field_fields: Map<String, Value>,
}

/// Parameters for the update_ticket_field tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct UpdateTicketFieldParams {
    /// ID of the ticket field.
    pub ticket_field_id: u64,
    /// Properties to change.
    pub ticket_field_fields: Map<String, Value>,
}

pub async fn get_ticket_fields(client: &FreshdeskClient) -> CallToolResult {
    respond(
        client.get("/ticket_form_fields", &[]).await,
        "Failed to fetch ticket fields",
    )
}

pub async fn get_tickets(client: &FreshdeskClient, params: &PageParams) -> CallToolResult {
    let page = match params.request() {
        Ok(page) => page,
        Err(e) => return failure("Failed to fetch tickets", &e),
    };

    paginated(
        client.get("/tickets", &page.query()).await,
        "tickets",
        &page,
        "Failed to fetch tickets",
    )
}

pub async fn create_ticket(client: &FreshdeskClient, params: &CreateTicketParams) -> CallToolResult {
    if let Err(e) = check_requester(params.email.as_deref(), params.requester_id) {
        return failure("Failed to create ticket", &e);
    }

    let codes = (
        TicketSource::from_value(&params.source),
        TicketPriority::from_value(&params.priority),
        TicketStatus::from_value(&params.status),
    );
    let (Ok(source), Ok(priority), Ok(status)) = codes else {
        return invalid("Invalid value for source, priority, or status");
    };

    let ticket = TicketCreate {
        subject: params.subject.clone(),
        description: params.description.clone(),
        source,
        priority,
        status,
        email: params.email.clone(),
        requester_id: params.requester_id,
        custom_fields: params.custom_fields.clone(),
        additional_fields: params.additional_fields.clone().unwrap_or_default(),
    };
    if let Err(e) = ticket.validate() {
        return failure("Failed to create ticket", &e);
    }

    match client.post("/tickets", &ticket.into_payload()).await {
        Ok(response) if response.status == 201 => {
            let details = serde_json::to_string_pretty(&response.body).unwrap_or_default();
            success_message(format!("Ticket created successfully\n{}", details))
        }
        Ok(response) => success_message(format!("Success: {}", response.body)),
        Err(e) => match e.field_errors() {
            Some(errors) if e.status() == Some(400) => {
                invalid(format!("Validation Error: {}", errors))
            }
            _ => failure("Failed to create ticket", &e),
        },
    }
}

pub async fn update_ticket(client: &FreshdeskClient, params: &UpdateTicketParams) -> CallToolResult {
    if params.ticket_fields.is_empty() {
        return invalid("No fields provided for update");
    }

    let mut update = params.ticket_fields.clone();
    let empty_custom_fields = update
        .get("custom_fields")
        .is_some_and(|v| v.is_null() || v.as_object().is_some_and(Map::is_empty));
    if empty_custom_fields {
        update.remove("custom_fields");
    }
    if update.is_empty() {
        return invalid("No fields provided for update");
    }

    let path = format!("/tickets/{}", params.ticket_id);
    match client.put(&path, &update).await {
        Ok(response) => success_json(&json!({
            "success": true,
            "message": "Ticket updated successfully",
            "ticket": response.body,
        })),
        Err(e) => match e.field_errors() {
            Some(errors) => invalid(format!("Validation errors: {}", errors)),
            None => failure("Failed to update ticket", &e),
        },
    }
}

pub async fn delete_ticket(client: &FreshdeskClient, params: &TicketIdParams) -> CallToolResult {
    let path = format!("/tickets/{}", params.ticket_id);
    match client.delete(&path).await {
        Ok(_) => success_message(format!("Ticket {} deleted successfully", params.ticket_id)),
        Err(e) => failure("Failed to delete ticket", &e),
    }
}

pub async fn get_ticket(client: &FreshdeskClient, params: &TicketIdParams) -> CallToolResult {
    let path = format!("/tickets/{}", params.ticket_id);
    respond(client.get(&path, &[]).await, "Failed to fetch ticket")
}

/// Uses Freshdesk's filter query syntax, e.g. `"priority:3 AND status:2"`.
pub async fn search_tickets(client: &FreshdeskClient, params: &SearchParams) -> CallToolResult {
    respond(
        client
            .get("/search/tickets", &[("query", params.query.clone())])
            .await,
        "Failed to search tickets",
    )
}

pub async fn get_ticket_conversation(
    client: &FreshdeskClient,
    params: &TicketIdParams,
) -> CallToolResult {
    let path = format!("/tickets/{}/conversations", params.ticket_id);
    respond(
        client.get(&path, &[]).await,
        "Failed to fetch ticket conversation",
    )
}

pub async fn create_ticket_reply(
    client: &FreshdeskClient,
    params: &TicketBodyParams,
) -> CallToolResult {
    let path = format!("/tickets/{}/reply", params.ticket_id);
    respond(
        client.post(&path, &json!({"body": params.body})).await,
        "Failed to create reply",
    )
}

pub async fn create_ticket_note(
    client: &FreshdeskClient,
    params: &TicketBodyParams,
) -> CallToolResult {
    let path = format!("/tickets/{}/notes", params.ticket_id);
    respond(
        client.post(&path, &json!({"body": params.body})).await,
        "Failed to create note",
    )
}

pub async fn update_ticket_conversation(
    client: &FreshdeskClient,
    params: &UpdateConversationParams,
) -> CallToolResult {
    let path = format!("/conversations/{}", params.conversation_id);
    respond(
        client.put(&path, &json!({"body": params.body})).await,
        "Cannot update conversation",
    )
}

/// Looks up one field of the ticket form by name.
///
/// The form calls the ticket type field `ticket_type`, but callers know it as `type`.
pub async fn get_field_properties(
    client: &FreshdeskClient,
    params: &FieldPropertiesParams,
) -> CallToolResult {
    let field_name = match params.field_name.as_str() {
        "type" => "ticket_type",
        other => other,
    };

    let fields = match client.get("/ticket_form_fields", &[]).await {
        Ok(response) => response.body,
        Err(e) => return failure("Failed to fetch ticket fields", &e),
    };

    let matched = fields.as_array().and_then(|fields| {
        fields
            .iter()
            .find(|field| field.get("name").and_then(Value::as_str) == Some(field_name))
    });

    match matched {
        Some(field) => success_json(field),
        None => invalid(format!(
            "Field '{}' not found. Use get_ticket_fields to see available fields.",
            params.field_name
        )),
    }
}

pub async fn create_ticket_field(
    client: &FreshdeskClient,
    params: &CreateTicketFieldParams,
) -> CallToolResult {
    if params.ticket_field_fields.is_empty() {
        return invalid("No fields provided for the ticket field");
    }
    respond(
        client
            .post("/admin/ticket_fields", &params.ticket_field_fields)
            .await,
        "Failed to create ticket field",
    )
}

pub async fn view_ticket_field(
    client: &FreshdeskClient,
    params: &TicketFieldIdParams,
) -> CallToolResult {
    let path = format!("/admin/ticket_fields/{}", params.ticket_field_id);
    respond(client.get(&path, &[]).await, "Failed to fetch ticket field")
}

pub async fn update_ticket_field(
    client: &FreshdeskClient,
    params: &UpdateTicketFieldParams,
) -> CallToolResult {
    let path = format!("/admin/ticket_fields/{}", params.ticket_field_id);
    respond(
        client.put(&path, &params.ticket_field_fields).await,
        "Failed to update ticket field",
    )
}

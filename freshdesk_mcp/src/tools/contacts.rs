//! Contact and contact field tools.

use freshdesk_api::FreshdeskClient;
use freshdesk_api::models::{ContactFieldCreate, from_fields};
use rmcp::model::CallToolResult;
use rmcp::schemars;
use serde_json::{Map, Value};

use super::{PageParams, SearchParams, failure, respond};

/// Parameters for tools addressing a single contact.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ContactIdParams {
    /// ID of the contact.
    pub contact_id: u64,
}

/// Parameters for the update_contact tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct UpdateContactParams {
    /// ID of the contact.
    pub contact_id: u64,
    /// Contact properties to change, e.g. {"job_title": "CTO"}.
    pub contact_fields: Map<String, Value>,
}

/// Parameters for tools addressing a single contact field.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ContactFieldIdParams {
    /// ID of the contact field.
    pub contact_field_id: u64,
}

/// Parameters for the create_contact_field tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CreateContactFieldParams {
    /// Field definition. Requires "label", "label_for_customers" and "type"
    /// (custom_text, custom_paragraph, custom_checkbox, custom_number,
    /// custom_dropdown, custom_phone_number, custom_url or custom_date).
    pub contact_field_fields: Map<String, Value>,
}

/// Parameters for the update_contact_field tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct UpdateContactFieldParams {
    /// ID of the contact field.
    pub contact_field_id: u64,
    /// Properties to change.
    pub contact_field_fields: Map<String, Value>,
}

pub async fn list_contacts(client: &FreshdeskClient, params: &PageParams) -> CallToolResult {
    let page = match params.request() {
        Ok(page) => page,
        Err(e) => return failure("Failed to fetch contacts", &e),
    };
    respond(
        client.get("/contacts", &page.query()).await,
        "Failed to fetch contacts",
    )
}

pub async fn get_contact(client: &FreshdeskClient, params: &ContactIdParams) -> CallToolResult {
    let path = format!("/contacts/{}", params.contact_id);
    respond(client.get(&path, &[]).await, "Failed to fetch contact")
}

pub async fn search_contacts(client: &FreshdeskClient, params: &SearchParams) -> CallToolResult {
    respond(
        client
            .get("/contacts/autocomplete", &[("term", params.query.clone())])
            .await,
        "Failed to search contacts",
    )
}

pub async fn update_contact(
    client: &FreshdeskClient,
    params: &UpdateContactParams,
) -> CallToolResult {
    let path = format!("/contacts/{}", params.contact_id);
    respond(
        client.put(&path, &params.contact_fields).await,
        "Failed to update contact",
    )
}

pub async fn list_contact_fields(client: &FreshdeskClient) -> CallToolResult {
    respond(
        client.get("/contact_fields", &[]).await,
        "Failed to fetch contact fields",
    )
}

pub async fn view_contact_field(
    client: &FreshdeskClient,
    params: &ContactFieldIdParams,
) -> CallToolResult {
    let path = format!("/contact_fields/{}", params.contact_field_id);
    respond(client.get(&path, &[]).await, "Failed to fetch contact field")
}

pub async fn create_contact_field(
    client: &FreshdeskClient,
    params: &CreateContactFieldParams,
) -> CallToolResult {
    let field: ContactFieldCreate = match from_fields(params.contact_field_fields.clone()) {
        Ok(field) => field,
        Err(e) => return failure("Failed to create contact field", &e),
    };
    respond(
        client.post("/contact_fields", &field).await,
        "Failed to create contact field",
    )
}

pub async fn update_contact_field(
    client: &FreshdeskClient,
    params: &UpdateContactFieldParams,
) -> CallToolResult {
    let path = format!("/contact_fields/{}", params.contact_field_id);
    respond(
        client.put(&path, &params.contact_field_fields).await,
        "Failed to update contact field",
    )
}

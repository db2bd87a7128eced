//! Request bodies that are validated before they are sent.
//!
//! Tool callers hand in free-form JSON objects. The models below give those
//! objects a shape, fill in Freshdesk's defaults and reject values the API
//! would refuse anyway, so callers get a readable message instead of a 400.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::FreshdeskError;
use crate::types::{TicketPriority, TicketSource, TicketStatus, UnassignedFor};

/// Deserializes `fields` into `T` and runs its validation.
pub fn from_fields<T>(fields: Map<String, Value>) -> Result<T, FreshdeskError>
where
    T: DeserializeOwned + Validate,
{
    let model: T = serde_json::from_value(Value::Object(fields))
        .map_err(|e| FreshdeskError::Validation(format!("Validation error: {}", e)))?;
    model.validate()?;
    Ok(model)
}

/// Checks that go beyond what deserialization enforces.
pub trait Validate {
    fn validate(&self) -> Result<(), FreshdeskError>;
}

fn validation(message: impl Into<String>) -> FreshdeskError {
    FreshdeskError::Validation(format!("Validation error: {}", message.into()))
}

/// Body for creating or updating an agent group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupCreate {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_ids: Option<Vec<u64>>,
    #[serde(default)]
    pub auto_ticket_assign: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escalate_to: Option<u64>,
    #[serde(default)]
    pub unassigned_for: UnassignedFor,
}

impl Validate for GroupCreate {
    fn validate(&self) -> Result<(), FreshdeskError> {
        if self.name.trim().is_empty() {
            return Err(validation("name must not be empty"));
        }
        if self.auto_ticket_assign > 1 {
            return Err(validation("auto_ticket_assign must be 0 or 1"));
        }
        Ok(())
    }
}

/// Custom contact field types Freshdesk accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactFieldType {
    CustomText,
    CustomParagraph,
    CustomCheckbox,
    CustomNumber,
    CustomDropdown,
    CustomPhoneNumber,
    CustomUrl,
    CustomDate,
}

fn default_position() -> u32 {
    1
}

/// Body for creating a custom contact field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactFieldCreate {
    pub label: String,
    pub label_for_customers: String,
    pub r#type: ContactFieldType,
    #[serde(default)]
    pub editable_in_signup: bool,
    #[serde(default = "default_position")]
    pub position: u32,
    #[serde(default)]
    pub required_for_agents: bool,
    #[serde(default)]
    pub customers_can_edit: bool,
    #[serde(default)]
    pub required_for_customers: bool,
    #[serde(default)]
    pub displayed_for_customers: bool,
    /// Dropdown choices, e.g. `{"value": "Gold", "position": 1}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<Map<String, Value>>>,
}

impl Validate for ContactFieldCreate {
    fn validate(&self) -> Result<(), FreshdeskError> {
        if self.label.trim().is_empty() || self.label_for_customers.trim().is_empty() {
            return Err(validation("label and label_for_customers must not be empty"));
        }
        if let Some(choices) = &self.choices {
            let malformed = choices.iter().any(|choice| {
                !choice
                    .values()
                    .all(|v| v.is_string() || v.is_i64() || v.is_u64())
            });
            if malformed {
                return Err(validation("choices values must be strings or integers"));
            }
        }
        Ok(())
    }
}

/// Body for creating a canned response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CannedResponseCreate {
    pub title: String,
    pub content_html: String,
    pub folder_id: u64,
    /// 0 = all agents, 1 = personal, 2 = select groups.
    pub visibility: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_ids: Option<Vec<u64>>,
}

impl Validate for CannedResponseCreate {
    fn validate(&self) -> Result<(), FreshdeskError> {
        if self.visibility > 2 {
            return Err(validation("visibility must be 0, 1 or 2"));
        }
        if self.visibility == 2 && self.group_ids.as_ref().is_none_or(|ids| ids.is_empty()) {
            return Err(validation("group_ids are required when visibility is 2"));
        }
        Ok(())
    }
}

/// A new ticket, before it is turned into a request body.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketCreate {
    pub subject: String,
    pub description: String,
    pub source: TicketSource,
    pub priority: TicketPriority,
    pub status: TicketStatus,
    pub email: Option<String>,
    pub requester_id: Option<u64>,
    pub custom_fields: Option<Map<String, Value>>,
    /// Extra top-level fields (e.g. `type`, `group_id`). These win over
    /// the named fields when keys collide.
    pub additional_fields: Map<String, Value>,
}

/// A ticket needs a requester, given by email or by contact ID.
pub fn check_requester(email: Option<&str>, requester_id: Option<u64>) -> Result<(), FreshdeskError> {
    let has_email = email.is_some_and(|e| !e.trim().is_empty());
    let has_requester = requester_id.is_some_and(|id| id != 0);
    if !has_email && !has_requester {
        return Err(FreshdeskError::Validation(
            "Either email or requester_id must be provided".to_string(),
        ));
    }
    Ok(())
}

impl Validate for TicketCreate {
    fn validate(&self) -> Result<(), FreshdeskError> {
        check_requester(self.email.as_deref(), self.requester_id)
    }
}

impl TicketCreate {
    /// Builds the JSON body for `POST /tickets`.
    pub fn into_payload(self) -> Value {
        let mut body = Map::new();
        body.insert("subject".into(), Value::String(self.subject));
        body.insert("description".into(), Value::String(self.description));
        body.insert("source".into(), self.source.code().into());
        body.insert("priority".into(), self.priority.code().into());
        body.insert("status".into(), self.status.code().into());

        if let Some(email) = self.email.filter(|e| !e.trim().is_empty()) {
            body.insert("email".into(), Value::String(email));
        }
        if let Some(requester_id) = self.requester_id.filter(|id| *id != 0) {
            body.insert("requester_id".into(), requester_id.into());
        }
        if let Some(custom_fields) = self.custom_fields.filter(|f| !f.is_empty()) {
            body.insert("custom_fields".into(), Value::Object(custom_fields));
        }
        body.extend(self.additional_fields);

        Value::Object(body)
    }
}

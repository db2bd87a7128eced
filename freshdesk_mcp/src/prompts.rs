//! Prompt templates offered to MCP clients.
//!
//! Prompts don't call Freshdesk themselves. They hand the assistant a
//! ready-made payload and point it at the tools that act on it.

use rmcp::ErrorData as McpError;
use rmcp::model::{
    GetPromptResult, JsonObject, Prompt, PromptArgument, PromptMessage, PromptMessageRole,
};
use serde_json::{Value, json};

pub const CREATE_TICKET: &str = "create_ticket";
pub const CREATE_REPLY: &str = "create_reply";

const TICKET_ARGUMENTS: [(&str, &str); 6] = [
    ("subject", "Subject of the ticket"),
    ("description", "HTML content of the ticket"),
    ("source", "Source code, e.g. 2 for Portal"),
    ("priority", "Priority code, e.g. 1 for Low"),
    ("status", "Status code, e.g. 2 for Open"),
    ("email", "Email address of the requester"),
];

const REPLY_ARGUMENTS: [(&str, &str); 2] = [
    ("ticket_id", "ID of the ticket to reply to"),
    ("reply_message", "Content of the reply"),
];

/// All prompts this server offers.
pub fn list() -> Vec<Prompt> {
    vec![
        Prompt::new(
            CREATE_TICKET,
            Some("Create a ticket in Freshdesk"),
            Some(arguments(&TICKET_ARGUMENTS)),
        ),
        Prompt::new(
            CREATE_REPLY,
            Some("Create a reply in Freshdesk"),
            Some(arguments(&REPLY_ARGUMENTS)),
        ),
    ]
}

/// Renders the prompt `name` with the caller's arguments.
pub fn get(name: &str, args: Option<&JsonObject>) -> Result<GetPromptResult, McpError> {
    match name {
        CREATE_TICKET => {
            let mut payload = serde_json::Map::new();
            for (key, _) in TICKET_ARGUMENTS {
                payload.insert(key.to_string(), Value::String(required(args, key)?));
            }
            Ok(user_prompt(
                "Create a ticket in Freshdesk",
                create_ticket_text(&Value::Object(payload)),
            ))
        }
        CREATE_REPLY => {
            let ticket_id = required(args, "ticket_id")?;
            let reply = required(args, "reply_message")?;
            Ok(user_prompt(
                "Create a reply in Freshdesk",
                create_reply_text(&ticket_id, &json!({ "body": reply })),
            ))
        }
        other => Err(McpError::invalid_params(
            format!("Prompt '{}' not found", other),
            None,
        )),
    }
}

fn arguments(specs: &[(&str, &str)]) -> Vec<PromptArgument> {
    specs
        .iter()
        .map(|(name, description)| PromptArgument {
            name: name.to_string(),
            title: None,
            description: Some(description.to_string()),
            required: Some(true),
        })
        .collect()
}

/// Reads a required argument as text. Numbers are accepted as-is.
fn required(args: Option<&JsonObject>, key: &str) -> Result<String, McpError> {
    match args.and_then(|args| args.get(key)) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        _ => Err(McpError::invalid_params(
            format!("Missing required argument '{}'", key),
            None,
        )),
    }
}

fn user_prompt(description: &str, text: String) -> GetPromptResult {
    GetPromptResult {
        description: Some(description.to_string()),
        messages: vec![PromptMessage::new_text(PromptMessageRole::User, text)],
    }
}

fn create_ticket_text(payload: &Value) -> String {
    format!(
        "Kindly create a ticket in Freshdesk using the following payload:\n\
         \n\
         {payload}\n\
         \n\
         If you need to retrieve information about any fields (such as allowed values or \
         internal keys), please use the `get_field_properties` tool.\n\
         \n\
         Notes:\n\
         - The \"type\" field is **not** a custom field; it is a standard system field.\n\
         - The \"type\" field is required but should be passed as a top-level parameter, \
         not within custom_fields.\n\
         Make sure to reference the correct keys from `get_field_properties` when \
         constructing the payload.\n"
    )
}

fn create_reply_text(ticket_id: &str, payload: &Value) -> String {
    format!(
        "Kindly create a ticket reply in Freshdesk for ticket ID {ticket_id} using the \
         following payload:\n\
         \n\
         {payload}\n\
         \n\
         Notes:\n\
         - The \"body\" field must be in **HTML format** and should be **brief yet \
         contextually complete**.\n\
         - When composing the \"body\", please **review the previous conversation** in \
         the ticket.\n\
         - Ensure the tone and style **match the prior replies**, and that the message \
         provides **full context** so the recipient can understand the issue without \
         needing to re-read earlier messages.\n"
    )
}

mod helpers;

use freshdesk_mcp::tools::SearchParams;
use freshdesk_mcp::tools::contacts::{
    ContactFieldIdParams, CreateContactFieldParams, UpdateContactFieldParams,
    UpdateContactParams, create_contact_field, search_contacts, update_contact,
    update_contact_field, view_contact_field,
};
use helpers::{client_for, fields, get_json, get_text, is_error};
use httpmock::prelude::*;
use serde_json::json;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_search_contacts_sends_term() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/v2/contacts/autocomplete")
                    .query_param("term", "jane");
                then.status(200).json_body(json!([{"id": 3, "name": "Jane"}]));
            })
            .await;

        let params = SearchParams {
            query: "jane".to_string(),
        };
        let result = search_contacts(&client_for(&server), &params).await;

        mock.assert_async().await;
        assert_eq!(get_json(&result)[0]["id"], 3);
    }

    #[tokio::test]
    async fn test_update_contact_sends_fields() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PUT)
                    .path("/api/v2/contacts/3")
                    .json_body(json!({"job_title": "CTO"}));
                then.status(200).json_body(json!({"id": 3, "job_title": "CTO"}));
            })
            .await;

        let params = UpdateContactParams {
            contact_id: 3,
            contact_fields: fields(json!({"job_title": "CTO"})),
        };
        let result = update_contact(&client_for(&server), &params).await;

        mock.assert_async().await;
        assert_eq!(get_json(&result)["job_title"], "CTO");
    }

    #[tokio::test]
    async fn test_create_contact_field_fills_defaults() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/v2/contact_fields").json_body(json!({
                    "label": "Tier",
                    "label_for_customers": "Tier",
                    "type": "custom_dropdown",
                    "editable_in_signup": false,
                    "position": 1,
                    "required_for_agents": false,
                    "customers_can_edit": false,
                    "required_for_customers": false,
                    "displayed_for_customers": false,
                    "choices": [{"value": "Gold", "position": 1}]
                }));
                then.status(201).json_body(json!({"id": 40}));
            })
            .await;

        let params = CreateContactFieldParams {
            contact_field_fields: fields(json!({
                "label": "Tier",
                "label_for_customers": "Tier",
                "type": "custom_dropdown",
                "choices": [{"value": "Gold", "position": 1}]
            })),
        };
        let result = create_contact_field(&client_for(&server), &params).await;

        mock.assert_async().await;
        assert_eq!(get_json(&result)["id"], 40);
    }

    #[tokio::test]
    async fn test_create_contact_field_rejects_unknown_type() {
        let server = MockServer::start_async().await;
        let params = CreateContactFieldParams {
            contact_field_fields: fields(json!({
                "label": "Tier",
                "label_for_customers": "Tier",
                "type": "custom_color"
            })),
        };
        let result = create_contact_field(&client_for(&server), &params).await;

        assert!(is_error(&result));
        assert!(get_text(&result).starts_with("Validation error: "));
    }

    #[tokio::test]
    async fn test_view_and_update_contact_field() {
        let server = MockServer::start_async().await;
        let view = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v2/contact_fields/31");
                then.status(200).json_body(json!({"id": 31, "label": "Tier"}));
            })
            .await;
        let update = server
            .mock_async(|when, then| {
                when.method(PUT)
                    .path("/api/v2/contact_fields/31")
                    .json_body(json!({"label": "Support tier"}));
                then.status(200).json_body(json!({"id": 31, "label": "Support tier"}));
            })
            .await;
        let client = client_for(&server);

        let result = view_contact_field(&client, &ContactFieldIdParams { contact_field_id: 31 }).await;
        assert_eq!(get_json(&result)["label"], "Tier");

        let params = UpdateContactFieldParams {
            contact_field_id: 31,
            contact_field_fields: fields(json!({"label": "Support tier"})),
        };
        let result = update_contact_field(&client, &params).await;
        assert_eq!(get_json(&result)["label"], "Support tier");

        view.assert_async().await;
        update.assert_async().await;
    }
}

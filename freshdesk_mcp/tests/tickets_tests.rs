mod helpers;

use freshdesk_mcp::tools::PageParams;
use freshdesk_mcp::tools::SearchParams;
use freshdesk_mcp::tools::tickets::{
    CreateTicketFieldParams, CreateTicketParams, FieldPropertiesParams, TicketIdParams,
    UpdateTicketParams, create_ticket, create_ticket_field, delete_ticket, get_field_properties,
    get_ticket, get_tickets, search_tickets, update_ticket,
};
use helpers::{BASIC_AUTH, client_for, fields, get_json, get_text, is_error, is_success};
use httpmock::prelude::*;
use serde_json::{Map, json};

fn new_ticket() -> CreateTicketParams {
    CreateTicketParams {
        subject: "Printer on fire".to_string(),
        description: "<p>Third floor</p>".to_string(),
        source: json!(2),
        priority: json!("4"),
        status: json!(2),
        email: Some("jane@example.com".to_string()),
        requester_id: None,
        custom_fields: None,
        additional_fields: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_tickets_wraps_pagination() {
        let server = MockServer::start_async().await;
        let link = format!(r#"<{}/api/v2/tickets?page=3&per_page=10>; rel="next""#, server.base_url());
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/v2/tickets")
                    .header("authorization", BASIC_AUTH)
                    .query_param("page", "2")
                    .query_param("per_page", "10");
                then.status(200)
                    .header("Link", link.as_str())
                    .json_body(json!([{"id": 11}, {"id": 12}]));
            })
            .await;

        let params = PageParams {
            page: Some(2),
            per_page: Some(10),
        };
        let result = get_tickets(&client_for(&server), &params).await;

        mock.assert_async().await;
        assert!(is_success(&result));
        let body = get_json(&result);
        assert_eq!(body["tickets"], json!([{"id": 11}, {"id": 12}]));
        assert_eq!(
            body["pagination"],
            json!({"current_page": 2, "next_page": 3, "prev_page": null, "per_page": 10})
        );
    }

    #[tokio::test]
    async fn test_get_tickets_rejects_bad_page_without_request() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.path("/api/v2/tickets");
                then.status(200).json_body(json!([]));
            })
            .await;

        let params = PageParams {
            page: Some(0),
            per_page: None,
        };
        let result = get_tickets(&client_for(&server), &params).await;
        assert!(is_error(&result));
        assert_eq!(get_text(&result), "Page number must be greater than 0");

        let params = PageParams {
            page: None,
            per_page: Some(101),
        };
        let result = get_tickets(&client_for(&server), &params).await;
        assert_eq!(get_text(&result), "Page size must be between 1 and 100");

        mock.assert_hits_async(0).await;
    }

    #[tokio::test]
    async fn test_create_ticket_sends_codes_and_merges_additional_fields() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/v2/tickets").json_body(json!({
                    "subject": "Printer on fire",
                    "description": "<p>Third floor</p>",
                    "source": 2,
                    "priority": 4,
                    "status": 2,
                    "email": "jane@example.com",
                    "custom_fields": {"cf_floor": "3"},
                    "type": "Incident"
                }));
                then.status(201).json_body(json!({"id": 99, "subject": "Printer on fire"}));
            })
            .await;

        let mut params = new_ticket();
        params.custom_fields = Some(fields(json!({"cf_floor": "3"})));
        params.additional_fields = Some(fields(json!({"type": "Incident"})));
        let result = create_ticket(&client_for(&server), &params).await;

        mock.assert_async().await;
        assert!(is_success(&result));
        let text = get_text(&result);
        assert!(text.starts_with("Ticket created successfully\n"));
        assert!(text.contains("\"id\": 99"));
    }

    #[tokio::test]
    async fn test_create_ticket_rejects_unknown_codes() {
        let server = MockServer::start_async().await;
        let mut params = new_ticket();
        params.status = json!(9);

        let result = create_ticket(&client_for(&server), &params).await;
        assert!(is_error(&result));
        assert_eq!(
            get_text(&result),
            "Invalid value for source, priority, or status"
        );
    }

    #[tokio::test]
    async fn test_create_ticket_requires_requester() {
        let server = MockServer::start_async().await;
        let mut params = new_ticket();
        params.email = None;

        let result = create_ticket(&client_for(&server), &params).await;
        assert!(is_error(&result));
        assert_eq!(
            get_text(&result),
            "Either email or requester_id must be provided"
        );
    }

    #[tokio::test]
    async fn test_create_ticket_checks_requester_before_codes() {
        let server = MockServer::start_async().await;
        let mut params = new_ticket();
        params.email = None;
        params.source = json!(99);

        let result = create_ticket(&client_for(&server), &params).await;
        assert!(is_error(&result));
        assert_eq!(
            get_text(&result),
            "Either email or requester_id must be provided"
        );
    }

    #[tokio::test]
    async fn test_create_ticket_reports_field_errors() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/v2/tickets");
                then.status(400).json_body(json!({
                    "description": "Validation failed",
                    "errors": [{"field": "type", "message": "It should be one of these values: 'Incident,Problem'", "code": "invalid_value"}]
                }));
            })
            .await;

        let result = create_ticket(&client_for(&server), &new_ticket()).await;
        assert!(is_error(&result));
        let text = get_text(&result);
        assert!(text.starts_with("Validation Error: "));
        assert!(text.contains("invalid_value"));
    }

    #[tokio::test]
    async fn test_update_ticket_drops_empty_custom_fields() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PUT)
                    .path("/api/v2/tickets/7")
                    .json_body(json!({"status": 4}));
                then.status(200).json_body(json!({"id": 7, "status": 4}));
            })
            .await;

        let params = UpdateTicketParams {
            ticket_id: 7,
            ticket_fields: fields(json!({"status": 4, "custom_fields": {}})),
        };
        let result = update_ticket(&client_for(&server), &params).await;

        mock.assert_async().await;
        let body = get_json(&result);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Ticket updated successfully");
        assert_eq!(body["ticket"]["status"], 4);
    }

    #[tokio::test]
    async fn test_update_ticket_requires_fields() {
        let server = MockServer::start_async().await;
        let params = UpdateTicketParams {
            ticket_id: 7,
            ticket_fields: Map::new(),
        };
        let result = update_ticket(&client_for(&server), &params).await;
        assert_eq!(get_text(&result), "No fields provided for update");

        let params = UpdateTicketParams {
            ticket_id: 7,
            ticket_fields: fields(json!({"custom_fields": null})),
        };
        let result = update_ticket(&client_for(&server), &params).await;
        assert!(is_error(&result));
    }

    #[tokio::test]
    async fn test_update_ticket_reports_validation_errors() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(PUT).path("/api/v2/tickets/7");
                then.status(400).json_body(json!({
                    "description": "Validation failed",
                    "errors": [{"field": "priority", "code": "invalid_value"}]
                }));
            })
            .await;

        let params = UpdateTicketParams {
            ticket_id: 7,
            ticket_fields: fields(json!({"priority": 12})),
        };
        let result = update_ticket(&client_for(&server), &params).await;
        assert!(get_text(&result).starts_with("Validation errors: "));
    }

    #[tokio::test]
    async fn test_delete_ticket() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(DELETE).path("/api/v2/tickets/5");
                then.status(204);
            })
            .await;

        let result = delete_ticket(&client_for(&server), &TicketIdParams { ticket_id: 5 }).await;

        mock.assert_async().await;
        assert_eq!(get_text(&result), "Ticket 5 deleted successfully");
    }

    #[tokio::test]
    async fn test_get_ticket_not_found_has_context() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v2/tickets/404");
                then.status(404).json_body(json!({"code": "access_denied", "message": "Record not found"}));
            })
            .await;

        let result = get_ticket(&client_for(&server), &TicketIdParams { ticket_id: 404 }).await;
        assert!(is_error(&result));
        let text = get_text(&result);
        assert!(text.starts_with("Failed to fetch ticket: "));
        assert!(text.contains("404"));
    }

    #[tokio::test]
    async fn test_search_tickets_passes_query() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/v2/search/tickets")
                    .query_param("query", "priority:3 AND status:2");
                then.status(200).json_body(json!({"total": 1, "results": [{"id": 3}]}));
            })
            .await;

        let params = SearchParams {
            query: "priority:3 AND status:2".to_string(),
        };
        let result = search_tickets(&client_for(&server), &params).await;

        mock.assert_async().await;
        assert_eq!(get_json(&result)["total"], 1);
    }

    #[tokio::test]
    async fn test_get_field_properties_maps_type() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v2/ticket_form_fields");
                then.status(200).json_body(json!([
                    {"name": "status", "choices": []},
                    {"name": "ticket_type", "choices": ["Incident", "Problem"]}
                ]));
            })
            .await;
        let client = client_for(&server);

        let params = FieldPropertiesParams {
            field_name: "type".to_string(),
        };
        let result = get_field_properties(&client, &params).await;
        assert_eq!(get_json(&result)["choices"], json!(["Incident", "Problem"]));

        let params = FieldPropertiesParams {
            field_name: "cf_missing".to_string(),
        };
        let result = get_field_properties(&client, &params).await;
        assert!(is_error(&result));
        assert_eq!(
            get_text(&result),
            "Field 'cf_missing' not found. Use get_ticket_fields to see available fields."
        );
    }

    #[tokio::test]
    async fn test_create_ticket_field_requires_fields() {
        let server = MockServer::start_async().await;
        let params = CreateTicketFieldParams {
            ticket_field_fields: Map::new(),
        };
        let result = create_ticket_field(&client_for(&server), &params).await;
        assert!(is_error(&result));
        assert_eq!(get_text(&result), "No fields provided for the ticket field");
    }
}

mod helpers;

use freshdesk_api::{FreshdeskError, Pagination};
use helpers::{BASIC_AUTH, client_for};
use httpmock::prelude::*;
use serde_json::json;

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[tokio::test]
    async fn test_get_sends_basic_auth_and_query() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/v2/tickets")
                    .header("authorization", BASIC_AUTH)
                    .query_param("page", "2")
                    .query_param("per_page", "10");
                then.status(200).json_body(json!([{"id": 1}]));
            })
            .await;

        let client = client_for(&server);
        let response = client
            .get(
                "/tickets",
                &[("page", "2".to_string()), ("per_page", "10".to_string())],
            )
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response.status, 200);
        assert_eq!(response.body, json!([{"id": 1}]));
        assert_eq!(response.pagination, Pagination::default());
    }

    #[tokio::test]
    async fn test_get_reads_link_header() {
        let server = MockServer::start_async().await;
        let link = format!(
            r#"<{}/api/v2/companies?page=3>; rel="next", <{}/api/v2/companies?page=1>; rel="prev""#,
            server.base_url(),
            server.base_url()
        );
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v2/companies");
                then.status(200)
                    .header("Link", link.as_str())
                    .json_body(json!([]));
            })
            .await;

        let response = client_for(&server).get("/companies", &[]).await.unwrap();

        assert_eq!(
            response.pagination,
            Pagination {
                next: Some(3),
                prev: Some(1),
            }
        );
    }

    #[tokio::test]
    async fn test_post_sends_json_body() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/v2/canned_response_folders")
                    .header("content-type", "application/json")
                    .json_body(json!({"name": "Billing"}));
                then.status(201).json_body(json!({"id": 5, "name": "Billing"}));
            })
            .await;

        let response = client_for(&server)
            .post("/canned_response_folders", &json!({"name": "Billing"}))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response.status, 201);
        assert_eq!(response.body["id"], json!(5));
    }

    #[tokio::test]
    async fn test_no_content_yields_null_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(DELETE).path("/api/v2/tickets/9");
                then.status(204);
            })
            .await;

        let response = client_for(&server).delete("/tickets/9").await.unwrap();

        assert_eq!(response.status, 204);
        assert!(response.body.is_null());
    }

    #[tokio::test]
    async fn test_error_status_maps_to_api_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(PUT).path("/api/v2/contacts/3");
                then.status(400).json_body(json!({
                    "description": "Validation failed",
                    "errors": [{"field": "email", "code": "invalid_value"}]
                }));
            })
            .await;

        let error = client_for(&server)
            .put("/contacts/3", &json!({"email": "nope"}))
            .await
            .unwrap_err();

        assert_eq!(error.status(), Some(400));
        assert_eq!(
            error.field_errors(),
            Some(&json!([{"field": "email", "code": "invalid_value"}]))
        );
        assert!(error.to_string().contains("Validation failed"));
    }

    #[tokio::test]
    async fn test_error_without_json_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v2/agents/1");
                then.status(503).body("upstream unavailable");
            })
            .await;

        let error = client_for(&server).get("/agents/1", &[]).await.unwrap_err();

        assert_matches!(
            error,
            FreshdeskError::Api { status: 503, ref message, errors: None } if message == "Service Unavailable"
        );
    }

    #[tokio::test]
    async fn test_invalid_json_on_success_is_decode_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v2/groups");
                then.status(200).body("<html>maintenance</html>");
            })
            .await;

        let error = client_for(&server).get("/groups", &[]).await.unwrap_err();

        assert_matches!(error, FreshdeskError::Decode(_));
    }

    #[tokio::test]
    async fn test_put_empty_sends_no_body() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PUT).path("/api/v2/ams/alerts/4/acknowledge");
                then.status(200).json_body(json!({"id": 4, "state": 1}));
            })
            .await;

        let response = client_for(&server)
            .put_empty("/ams/alerts/4/acknowledge")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response.body["id"], json!(4));
    }
}

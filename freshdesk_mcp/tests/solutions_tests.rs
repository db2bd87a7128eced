mod helpers;

use freshdesk_mcp::tools::solutions::{
    ArticleIdParams, CategoryIdParams, CreateArticleParams, CreateCategoryParams,
    CreateFolderParams, UpdateArticleParams, create_solution_article, create_solution_category,
    create_solution_category_folder, list_solution_folders, update_solution_article,
    view_solution_article,
};
use helpers::{client_for, fields, get_json, get_text, is_error};
use httpmock::prelude::*;
use serde_json::json;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_solution_category_requires_name() {
        let server = MockServer::start_async().await;
        let params = CreateCategoryParams {
            category_fields: fields(json!({"description": "FAQ"})),
        };
        let result = create_solution_category(&client_for(&server), &params).await;

        assert!(is_error(&result));
        assert_eq!(get_text(&result), "Name is required");
    }

    #[tokio::test]
    async fn test_create_solution_category() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/v2/solutions/categories")
                    .json_body(json!({"name": "FAQ"}));
                then.status(201).json_body(json!({"id": 2, "name": "FAQ"}));
            })
            .await;

        let params = CreateCategoryParams {
            category_fields: fields(json!({"name": "FAQ"})),
        };
        let result = create_solution_category(&client_for(&server), &params).await;

        mock.assert_async().await;
        assert_eq!(get_json(&result)["id"], 2);
    }

    #[tokio::test]
    async fn test_list_solution_folders_requires_category() {
        let server = MockServer::start_async().await;
        let result =
            list_solution_folders(&client_for(&server), &CategoryIdParams { category_id: 0 }).await;

        assert!(is_error(&result));
        assert_eq!(get_text(&result), "Category ID is required");
    }

    #[tokio::test]
    async fn test_create_folder_in_category() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/v2/solutions/categories/2/folders")
                    .json_body(json!({"name": "Billing", "visibility": 1}));
                then.status(201).json_body(json!({"id": 30}));
            })
            .await;

        let params = CreateFolderParams {
            category_id: 2,
            folder_fields: fields(json!({"name": "Billing", "visibility": 1})),
        };
        let result = create_solution_category_folder(&client_for(&server), &params).await;

        mock.assert_async().await;
        assert_eq!(get_json(&result)["id"], 30);
    }

    #[tokio::test]
    async fn test_create_solution_article_requires_core_fields() {
        let server = MockServer::start_async().await;
        let params = CreateArticleParams {
            folder_id: 30,
            article_fields: fields(json!({"title": "Reset password", "description": "<p>Steps</p>"})),
        };
        let result = create_solution_article(&client_for(&server), &params).await;

        assert!(is_error(&result));
        assert_eq!(
            get_text(&result),
            "Title, status and description are required"
        );
    }

    #[tokio::test]
    async fn test_create_solution_article() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/v2/solutions/folders/30/articles");
                then.status(201).json_body(json!({"id": 501, "status": 2}));
            })
            .await;

        let params = CreateArticleParams {
            folder_id: 30,
            article_fields: fields(json!({
                "title": "Reset password",
                "description": "<p>Steps</p>",
                "status": 2
            })),
        };
        let result = create_solution_article(&client_for(&server), &params).await;

        mock.assert_async().await;
        assert_eq!(get_json(&result)["id"], 501);
    }

    #[tokio::test]
    async fn test_view_and_update_solution_article() {
        let server = MockServer::start_async().await;
        let view = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v2/solutions/articles/55");
                then.status(200).json_body(json!({"id": 55, "title": "Reset password"}));
            })
            .await;
        let update = server
            .mock_async(|when, then| {
                when.method(PUT)
                    .path("/api/v2/solutions/articles/55")
                    .json_body(json!({"status": 2}));
                then.status(200).json_body(json!({"id": 55, "status": 2}));
            })
            .await;
        let client = client_for(&server);

        let result = view_solution_article(&client, &ArticleIdParams { article_id: 55 }).await;
        assert_eq!(get_json(&result)["title"], "Reset password");

        let params = UpdateArticleParams {
            article_id: 55,
            article_fields: fields(json!({"status": 2})),
        };
        let result = update_solution_article(&client, &params).await;
        assert_eq!(get_json(&result)["status"], 2);

        view.assert_async().await;
        update.assert_async().await;
    }
}

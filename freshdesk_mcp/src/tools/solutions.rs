//! Knowledge base tools: solution categories, folders and articles.

use freshdesk_api::FreshdeskClient;
use rmcp::model::CallToolResult;
use rmcp::schemars;
use serde_json::{Map, Value};

use super::{has_value, invalid, respond};

/// Parameters for tools addressing a single solution category.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CategoryIdParams {
    /// ID of the solution category.
    pub category_id: u64,
}

/// Parameters for the create_solution_category tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CreateCategoryParams {
    /// Category properties. "name" is required; "description" and
    /// "visible_in_portals" are optional.
    pub category_fields: Map<String, Value>,
}

/// Parameters for the update_solution_category tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct UpdateCategoryParams {
    /// ID of the solution category.
    pub category_id: u64,
    /// Category properties. "name" is required.
    pub category_fields: Map<String, Value>,
}

/// Parameters for the create_solution_category_folder tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CreateFolderParams {
    /// ID of the category the folder belongs to.
    pub category_id: u64,
    /// Folder properties. "name" is required; "description" and
    /// "visibility" are optional.
    pub folder_fields: Map<String, Value>,
}

/// Parameters for tools addressing a single solution folder.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct FolderIdParams {
    /// ID of the solution folder.
    pub folder_id: u64,
}

/// Parameters for the update_solution_category_folder tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct UpdateFolderParams {
    /// ID of the solution folder.
    pub folder_id: u64,
    /// Folder properties. "name" is required.
    pub folder_fields: Map<String, Value>,
}

/// Parameters for the create_solution_article tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CreateArticleParams {
    /// ID of the folder the article goes in.
    pub folder_id: u64,
    /// Article properties. "title", "status" (1=draft, 2=published) and
    /// "description" (HTML) are required.
    pub article_fields: Map<String, Value>,
}

/// Parameters for tools addressing a single solution article.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ArticleIdParams {
    /// ID of the solution article.
    pub article_id: u64,
}

/// Parameters for the update_solution_article tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct UpdateArticleParams {
    /// ID of the solution article.
    pub article_id: u64,
    /// Article properties to change.
    pub article_fields: Map<String, Value>,
}

pub async fn list_solution_categories(client: &FreshdeskClient) -> CallToolResult {
    respond(
        client.get("/solutions/categories", &[]).await,
        "Failed to fetch solution categories",
    )
}

pub async fn view_solution_category(
    client: &FreshdeskClient,
    params: &CategoryIdParams,
) -> CallToolResult {
    let path = format!("/solutions/categories/{}", params.category_id);
    respond(
        client.get(&path, &[]).await,
        "Failed to fetch solution category",
    )
}

pub async fn create_solution_category(
    client: &FreshdeskClient,
    params: &CreateCategoryParams,
) -> CallToolResult {
    if !has_value(&params.category_fields, "name") {
        return invalid("Name is required");
    }
    respond(
        client
            .post("/solutions/categories", &params.category_fields)
            .await,
        "Failed to create solution category",
    )
}

pub async fn update_solution_category(
    client: &FreshdeskClient,
    params: &UpdateCategoryParams,
) -> CallToolResult {
    if !has_value(&params.category_fields, "name") {
        return invalid("Name is required");
    }
    let path = format!("/solutions/categories/{}", params.category_id);
    respond(
        client.put(&path, &params.category_fields).await,
        "Failed to update solution category",
    )
}

pub async fn list_solution_folders(
    client: &FreshdeskClient,
    params: &CategoryIdParams,
) -> CallToolResult {
    if params.category_id == 0 {
        return invalid("Category ID is required");
    }
    let path = format!("/solutions/categories/{}/folders", params.category_id);
    respond(
        client.get(&path, &[]).await,
        "Failed to fetch solution folders",
    )
}

pub async fn create_solution_category_folder(
    client: &FreshdeskClient,
    params: &CreateFolderParams,
) -> CallToolResult {
    if !has_value(&params.folder_fields, "name") {
        return invalid("Name is required");
    }
    let path = format!("/solutions/categories/{}/folders", params.category_id);
    respond(
        client.post(&path, &params.folder_fields).await,
        "Failed to create solution folder",
    )
}

pub async fn view_solution_category_folder(
    client: &FreshdeskClient,
    params: &FolderIdParams,
) -> CallToolResult {
    let path = format!("/solutions/folders/{}", params.folder_id);
    respond(
        client.get(&path, &[]).await,
        "Failed to fetch solution folder",
    )
}

pub async fn update_solution_category_folder(
    client: &FreshdeskClient,
    params: &UpdateFolderParams,
) -> CallToolResult {
    if !has_value(&params.folder_fields, "name") {
        return invalid("Name is required");
    }
    let path = format!("/solutions/folders/{}", params.folder_id);
    respond(
        client.put(&path, &params.folder_fields).await,
        "Failed to update solution folder",
    )
}

pub async fn list_solution_articles(
    client: &FreshdeskClient,
    params: &FolderIdParams,
) -> CallToolResult {
    let path = format!("/solutions/folders/{}/articles", params.folder_id);
    respond(
        client.get(&path, &[]).await,
        "Failed to fetch solution articles",
    )
}

pub async fn create_solution_article(
    client: &FreshdeskClient,
    params: &CreateArticleParams,
) -> CallToolResult {
    let fields = &params.article_fields;
    if !["title", "status", "description"]
        .iter()
        .all(|key| has_value(fields, key))
    {
        return invalid("Title, status and description are required");
    }
    let path = format!("/solutions/folders/{}/articles", params.folder_id);
    respond(
        client.post(&path, fields).await,
        "Failed to create solution article",
    )
}

pub async fn view_solution_article(
    client: &FreshdeskClient,
    params: &ArticleIdParams,
) -> CallToolResult {
    let path = format!("/solutions/articles/{}", params.article_id);
    respond(
        client.get(&path, &[]).await,
        "Failed to fetch solution article",
    )
}

pub async fn update_solution_article(
    client: &FreshdeskClient,
    params: &UpdateArticleParams,
) -> CallToolResult {
    let path = format!("/solutions/articles/{}", params.article_id);
    respond(
        client.put(&path, &params.article_fields).await,
        "Failed to update solution article",
    )
}

//! Company tools.

use freshdesk_api::FreshdeskClient;
use rmcp::model::CallToolResult;
use rmcp::schemars;

use super::{PageParams, SearchParams, failure, paginated, respond};

/// Parameters for tools addressing a single company.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CompanyIdParams {
    /// ID of the company.
    pub company_id: u64,
}

/// Parameters for the find_company_by_name tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CompanyNameParams {
    /// Full or partial company name.
    pub name: String,
}

pub async fn list_companies(client: &FreshdeskClient, params: &PageParams) -> CallToolResult {
    let page = match params.request() {
        Ok(page) => page,
        Err(e) => return failure("Failed to fetch companies", &e),
    };

    paginated(
        client.get("/companies", &page.query()).await,
        "companies",
        &page,
        "Failed to fetch companies",
    )
}

pub async fn view_company(client: &FreshdeskClient, params: &CompanyIdParams) -> CallToolResult {
    let path = format!("/companies/{}", params.company_id);
    respond(client.get(&path, &[]).await, "Failed to fetch company")
}

pub async fn search_companies(client: &FreshdeskClient, params: &SearchParams) -> CallToolResult {
    autocomplete(client, &params.query, "Failed to search companies").await
}

pub async fn find_company_by_name(
    client: &FreshdeskClient,
    params: &CompanyNameParams,
) -> CallToolResult {
    autocomplete(client, &params.name, "Failed to find company").await
}

pub async fn list_company_fields(client: &FreshdeskClient) -> CallToolResult {
    respond(
        client.get("/company_fields", &[]).await,
        "Failed to fetch company fields",
    )
}

// The autocomplete endpoint matches on `name`, not `term` like agents and contacts.
async fn autocomplete(client: &FreshdeskClient, name: &str, context: &str) -> CallToolResult {
    respond(
        client
            .get("/companies/autocomplete", &[("name", name.to_string())])
            .await,
        context,
    )
}

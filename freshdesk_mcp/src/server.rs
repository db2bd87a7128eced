//! Core MCP server implementation for Freshdesk.

use std::fmt;

use freshdesk_api::FreshdeskClient;
use log::debug;
use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, ServiceExt,
    handler::server::wrapper::Parameters, model::*, service::RequestContext, tool, tool_handler,
    tool_router, transport::stdio,
};

use crate::prompts;
use crate::tools::agents::{AgentIdParams, CreateAgentParams, UpdateAgentParams};
use crate::tools::alerts::{
    AlertIdParams, AlertLogsParams, AlertNoteIdParams, CreateAlertNoteParams,
    ListAlertNotesParams, ListAlertsParams, UpdateAlertNoteParams,
};
use crate::tools::canned_responses::{
    CannedResponseIdParams, CreateCannedResponseParams, CreateFolderParams, FolderIdParams,
    UpdateCannedResponseParams, UpdateFolderParams,
};
use crate::tools::companies::{CompanyIdParams, CompanyNameParams};
use crate::tools::contacts::{
    ContactFieldIdParams, ContactIdParams, CreateContactFieldParams, UpdateContactFieldParams,
    UpdateContactParams,
};
use crate::tools::groups::{CreateGroupParams, GroupIdParams, UpdateGroupParams};
use crate::tools::solutions::{
    ArticleIdParams, CategoryIdParams, CreateArticleParams, CreateCategoryParams,
    UpdateArticleParams, UpdateCategoryParams,
};
use crate::tools::tickets::{
    CreateTicketFieldParams, CreateTicketParams, FieldPropertiesParams, TicketBodyParams,
    TicketFieldIdParams, TicketIdParams, UpdateConversationParams, UpdateTicketFieldParams,
    UpdateTicketParams,
};
use crate::tools::{self, PageParams, SearchParams, solutions};

/// Name the server reports to clients and on its service endpoints.
pub const SERVICE_NAME: &str = "freshdesk-mcp";

/// Error type for MCP server operations.
#[derive(Debug)]
pub enum ServerError {
    /// MCP protocol error
    Mcp(String),
    /// Socket or stdio error
    Io(std::io::Error),
}

impl From<std::io::Error> for ServerError {
    fn from(err: std::io::Error) -> Self {
        ServerError::Io(err)
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::Mcp(msg) => write!(f, "MCP error: {}", msg),
            ServerError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for ServerError {}

/// MCP server for a Freshdesk account.
///
/// Exposes tickets, contacts, agents, groups, companies, canned responses,
/// the knowledge base and alerts as MCP tools, plus two prompts for
/// drafting tickets and replies.
#[derive(Clone)]
pub struct FreshdeskMcpServer {
    client: FreshdeskClient,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<FreshdeskMcpServer>,
}

#[tool_router]
impl FreshdeskMcpServer {
    pub fn new(client: FreshdeskClient) -> Self {
        debug!("Creating MCP server for {}", client.base_url());
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }

    /// Names of every registered tool, sorted.
    pub fn tool_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        names.sort();
        names
    }

    // Tickets

    #[tool(description = "Get the ticket form fields, including custom fields and their allowed choices.")]
    async fn get_ticket_fields(&self) -> Result<CallToolResult, McpError> {
        debug!("Tool: get_ticket_fields");
        Ok(tools::tickets::get_ticket_fields(&self.client).await)
    }

    #[tool(description = "List tickets with pagination. \
        Returns the tickets and a pagination block with current, next and previous page numbers.")]
    async fn get_tickets(
        &self,
        Parameters(params): Parameters<PageParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            "Tool: get_tickets, page={:?}, per_page={:?}",
            params.page, params.per_page
        );
        Ok(tools::tickets::get_tickets(&self.client, &params).await)
    }

    #[tool(description = "Create a ticket. Requires subject, description, source, priority, status \
        and either email or requester_id. Use get_field_properties to look up valid values \
        for custom fields, and pass 'type' through additional_fields.")]
    async fn create_ticket(
        &self,
        Parameters(params): Parameters<CreateTicketParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: create_ticket, subject={}", params.subject);
        Ok(tools::tickets::create_ticket(&self.client, &params).await)
    }

    #[tool(description = "Update a ticket. Custom fields go under 'custom_fields'; \
        everything else is a top-level ticket property.")]
    async fn update_ticket(
        &self,
        Parameters(params): Parameters<UpdateTicketParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: update_ticket, ticket_id={}", params.ticket_id);
        Ok(tools::tickets::update_ticket(&self.client, &params).await)
    }

    #[tool(description = "Delete a ticket.")]
    async fn delete_ticket(
        &self,
        Parameters(params): Parameters<TicketIdParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: delete_ticket, ticket_id={}", params.ticket_id);
        Ok(tools::tickets::delete_ticket(&self.client, &params).await)
    }

    #[tool(description = "Get a single ticket by ID.")]
    async fn get_ticket(
        &self,
        Parameters(params): Parameters<TicketIdParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: get_ticket, ticket_id={}", params.ticket_id);
        Ok(tools::tickets::get_ticket(&self.client, &params).await)
    }

    #[tool(description = "Search tickets with a Freshdesk filter query, \
        e.g. \"priority:3 AND status:2\" or \"tag:'billing'\".")]
    async fn search_tickets(
        &self,
        Parameters(params): Parameters<SearchParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: search_tickets, query={}", params.query);
        Ok(tools::tickets::search_tickets(&self.client, &params).await)
    }

    #[tool(description = "Get all replies and notes on a ticket.")]
    async fn get_ticket_conversation(
        &self,
        Parameters(params): Parameters<TicketIdParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: get_ticket_conversation, ticket_id={}", params.ticket_id);
        Ok(tools::tickets::get_ticket_conversation(&self.client, &params).await)
    }

    #[tool(description = "Reply to a ticket. The reply is sent to the requester.")]
    async fn create_ticket_reply(
        &self,
        Parameters(params): Parameters<TicketBodyParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: create_ticket_reply, ticket_id={}", params.ticket_id);
        Ok(tools::tickets::create_ticket_reply(&self.client, &params).await)
    }

    #[tool(description = "Add a private note to a ticket.")]
    async fn create_ticket_note(
        &self,
        Parameters(params): Parameters<TicketBodyParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: create_ticket_note, ticket_id={}", params.ticket_id);
        Ok(tools::tickets::create_ticket_note(&self.client, &params).await)
    }

    #[tool(description = "Edit the body of an existing reply or note.")]
    async fn update_ticket_conversation(
        &self,
        Parameters(params): Parameters<UpdateConversationParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            "Tool: update_ticket_conversation, conversation_id={}",
            params.conversation_id
        );
        Ok(tools::tickets::update_ticket_conversation(&self.client, &params).await)
    }

    #[tool(description = "Get the properties of one ticket field by name, \
        including its allowed choices. Use get_ticket_fields to list all fields.")]
    async fn get_field_properties(
        &self,
        Parameters(params): Parameters<FieldPropertiesParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: get_field_properties, field_name={}", params.field_name);
        Ok(tools::tickets::get_field_properties(&self.client, &params).await)
    }

    #[tool(description = "Create a custom ticket field.")]
    async fn create_ticket_field(
        &self,
        Parameters(params): Parameters<CreateTicketFieldParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: create_ticket_field");
        Ok(tools::tickets::create_ticket_field(&self.client, &params).await)
    }

    #[tool(description = "View a ticket field by ID.")]
    async fn view_ticket_field(
        &self,
        Parameters(params): Parameters<TicketFieldIdParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            "Tool: view_ticket_field, ticket_field_id={}",
            params.ticket_field_id
        );
        Ok(tools::tickets::view_ticket_field(&self.client, &params).await)
    }

    #[tool(description = "Update a ticket field.")]
    async fn update_ticket_field(
        &self,
        Parameters(params): Parameters<UpdateTicketFieldParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            "Tool: update_ticket_field, ticket_field_id={}",
            params.ticket_field_id
        );
        Ok(tools::tickets::update_ticket_field(&self.client, &params).await)
    }

    // Agents

    #[tool(description = "List agents with pagination.")]
    async fn get_agents(
        &self,
        Parameters(params): Parameters<PageParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            "Tool: get_agents, page={:?}, per_page={:?}",
            params.page, params.per_page
        );
        Ok(tools::agents::get_agents(&self.client, &params).await)
    }

    #[tool(description = "View an agent by ID.")]
    async fn view_agent(
        &self,
        Parameters(params): Parameters<AgentIdParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: view_agent, agent_id={}", params.agent_id);
        Ok(tools::agents::view_agent(&self.client, &params).await)
    }

    #[tool(description = "Create an agent. Requires 'email' and 'ticket_scope' \
        (1=GLOBAL_ACCESS, 2=GROUP_ACCESS, 3=RESTRICTED_ACCESS).")]
    async fn create_agent(
        &self,
        Parameters(params): Parameters<CreateAgentParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: create_agent");
        Ok(tools::agents::create_agent(&self.client, &params).await)
    }

    #[tool(description = "Update an agent.")]
    async fn update_agent(
        &self,
        Parameters(params): Parameters<UpdateAgentParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: update_agent, agent_id={}", params.agent_id);
        Ok(tools::agents::update_agent(&self.client, &params).await)
    }

    #[tool(description = "Search agents by name or email.")]
    async fn search_agents(
        &self,
        Parameters(params): Parameters<SearchParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: search_agents, query={}", params.query);
        Ok(tools::agents::search_agents(&self.client, &params).await)
    }

    // Contacts

    #[tool(description = "List contacts with pagination.")]
    async fn list_contacts(
        &self,
        Parameters(params): Parameters<PageParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            "Tool: list_contacts, page={:?}, per_page={:?}",
            params.page, params.per_page
        );
        Ok(tools::contacts::list_contacts(&self.client, &params).await)
    }

    #[tool(description = "Get a contact by ID.")]
    async fn get_contact(
        &self,
        Parameters(params): Parameters<ContactIdParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: get_contact, contact_id={}", params.contact_id);
        Ok(tools::contacts::get_contact(&self.client, &params).await)
    }

    #[tool(description = "Search contacts by name.")]
    async fn search_contacts(
        &self,
        Parameters(params): Parameters<SearchParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: search_contacts, query={}", params.query);
        Ok(tools::contacts::search_contacts(&self.client, &params).await)
    }

    #[tool(description = "Update a contact.")]
    async fn update_contact(
        &self,
        Parameters(params): Parameters<UpdateContactParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: update_contact, contact_id={}", params.contact_id);
        Ok(tools::contacts::update_contact(&self.client, &params).await)
    }

    #[tool(description = "List all contact fields.")]
    async fn list_contact_fields(&self) -> Result<CallToolResult, McpError> {
        debug!("Tool: list_contact_fields");
        Ok(tools::contacts::list_contact_fields(&self.client).await)
    }

    #[tool(description = "View a contact field by ID.")]
    async fn view_contact_field(
        &self,
        Parameters(params): Parameters<ContactFieldIdParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            "Tool: view_contact_field, contact_field_id={}",
            params.contact_field_id
        );
        Ok(tools::contacts::view_contact_field(&self.client, &params).await)
    }

    #[tool(description = "Create a custom contact field. \
        Requires 'label', 'label_for_customers' and 'type'.")]
    async fn create_contact_field(
        &self,
        Parameters(params): Parameters<CreateContactFieldParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: create_contact_field");
        Ok(tools::contacts::create_contact_field(&self.client, &params).await)
    }

    #[tool(description = "Update a contact field.")]
    async fn update_contact_field(
        &self,
        Parameters(params): Parameters<UpdateContactFieldParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            "Tool: update_contact_field, contact_field_id={}",
            params.contact_field_id
        );
        Ok(tools::contacts::update_contact_field(&self.client, &params).await)
    }

    // Canned responses

    #[tool(description = "List the canned responses in a folder.")]
    async fn list_canned_responses(
        &self,
        Parameters(params): Parameters<FolderIdParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: list_canned_responses, folder_id={}", params.folder_id);
        Ok(tools::canned_responses::list_canned_responses(&self.client, &params).await)
    }

    #[tool(description = "List all canned response folders.")]
    async fn list_canned_response_folders(&self) -> Result<CallToolResult, McpError> {
        debug!("Tool: list_canned_response_folders");
        Ok(tools::canned_responses::list_canned_response_folders(&self.client).await)
    }

    #[tool(description = "View a canned response by ID.")]
    async fn view_canned_response(
        &self,
        Parameters(params): Parameters<CannedResponseIdParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            "Tool: view_canned_response, canned_response_id={}",
            params.canned_response_id
        );
        Ok(tools::canned_responses::view_canned_response(&self.client, &params).await)
    }

    #[tool(description = "Create a canned response. Requires 'title', 'content_html', \
        'folder_id' and 'visibility'; 'group_ids' is required when visibility is 2.")]
    async fn create_canned_response(
        &self,
        Parameters(params): Parameters<CreateCannedResponseParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: create_canned_response");
        Ok(tools::canned_responses::create_canned_response(&self.client, &params).await)
    }

    #[tool(description = "Update a canned response.")]
    async fn update_canned_response(
        &self,
        Parameters(params): Parameters<UpdateCannedResponseParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            "Tool: update_canned_response, canned_response_id={}",
            params.canned_response_id
        );
        Ok(tools::canned_responses::update_canned_response(&self.client, &params).await)
    }

    #[tool(description = "Create a canned response folder.")]
    async fn create_canned_response_folder(
        &self,
        Parameters(params): Parameters<CreateFolderParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: create_canned_response_folder, name={}", params.name);
        Ok(tools::canned_responses::create_canned_response_folder(&self.client, &params).await)
    }

    #[tool(description = "Rename a canned response folder.")]
    async fn update_canned_response_folder(
        &self,
        Parameters(params): Parameters<UpdateFolderParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            "Tool: update_canned_response_folder, folder_id={}",
            params.folder_id
        );
        Ok(tools::canned_responses::update_canned_response_folder(&self.client, &params).await)
    }

    // Solutions

    #[tool(description = "List all knowledge base categories.")]
    async fn list_solution_categories(&self) -> Result<CallToolResult, McpError> {
        debug!("Tool: list_solution_categories");
        Ok(tools::solutions::list_solution_categories(&self.client).await)
    }

    #[tool(description = "View a knowledge base category by ID.")]
    async fn view_solution_category(
        &self,
        Parameters(params): Parameters<CategoryIdParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: view_solution_category, category_id={}", params.category_id);
        Ok(tools::solutions::view_solution_category(&self.client, &params).await)
    }

    #[tool(description = "Create a knowledge base category. Requires 'name'.")]
    async fn create_solution_category(
        &self,
        Parameters(params): Parameters<CreateCategoryParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: create_solution_category");
        Ok(tools::solutions::create_solution_category(&self.client, &params).await)
    }

    #[tool(description = "Update a knowledge base category. Requires 'name'.")]
    async fn update_solution_category(
        &self,
        Parameters(params): Parameters<UpdateCategoryParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            "Tool: update_solution_category, category_id={}",
            params.category_id
        );
        Ok(tools::solutions::update_solution_category(&self.client, &params).await)
    }

    #[tool(description = "List the folders in a knowledge base category.")]
    async fn list_solution_folders(
        &self,
        Parameters(params): Parameters<CategoryIdParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: list_solution_folders, category_id={}", params.category_id);
        Ok(tools::solutions::list_solution_folders(&self.client, &params).await)
    }

    #[tool(description = "Create a folder in a knowledge base category. Requires 'name'.")]
    async fn create_solution_category_folder(
        &self,
        Parameters(params): Parameters<solutions::CreateFolderParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            "Tool: create_solution_category_folder, category_id={}",
            params.category_id
        );
        Ok(tools::solutions::create_solution_category_folder(&self.client, &params).await)
    }

    #[tool(description = "View a knowledge base folder by ID.")]
    async fn view_solution_category_folder(
        &self,
        Parameters(params): Parameters<solutions::FolderIdParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            "Tool: view_solution_category_folder, folder_id={}",
            params.folder_id
        );
        Ok(tools::solutions::view_solution_category_folder(&self.client, &params).await)
    }

    #[tool(description = "Update a knowledge base folder. Requires 'name'.")]
    async fn update_solution_category_folder(
        &self,
        Parameters(params): Parameters<solutions::UpdateFolderParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            "Tool: update_solution_category_folder, folder_id={}",
            params.folder_id
        );
        Ok(tools::solutions::update_solution_category_folder(&self.client, &params).await)
    }

    #[tool(description = "List the articles in a knowledge base folder.")]
    async fn list_solution_articles(
        &self,
        Parameters(params): Parameters<solutions::FolderIdParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: list_solution_articles, folder_id={}", params.folder_id);
        Ok(tools::solutions::list_solution_articles(&self.client, &params).await)
    }

    #[tool(description = "Create a knowledge base article. \
        Requires 'title', 'status' (1=draft, 2=published) and 'description'.")]
    async fn create_solution_article(
        &self,
        Parameters(params): Parameters<CreateArticleParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: create_solution_article, folder_id={}", params.folder_id);
        Ok(tools::solutions::create_solution_article(&self.client, &params).await)
    }

    #[tool(description = "View a knowledge base article by ID.")]
    async fn view_solution_article(
        &self,
        Parameters(params): Parameters<ArticleIdParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: view_solution_article, article_id={}", params.article_id);
        Ok(tools::solutions::view_solution_article(&self.client, &params).await)
    }

    #[tool(description = "Update a knowledge base article.")]
    async fn update_solution_article(
        &self,
        Parameters(params): Parameters<UpdateArticleParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: update_solution_article, article_id={}", params.article_id);
        Ok(tools::solutions::update_solution_article(&self.client, &params).await)
    }

    // Groups

    #[tool(description = "List agent groups with pagination.")]
    async fn list_groups(
        &self,
        Parameters(params): Parameters<PageParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            "Tool: list_groups, page={:?}, per_page={:?}",
            params.page, params.per_page
        );
        Ok(tools::groups::list_groups(&self.client, &params).await)
    }

    #[tool(description = "Create an agent group. Requires 'name'.")]
    async fn create_group(
        &self,
        Parameters(params): Parameters<CreateGroupParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: create_group");
        Ok(tools::groups::create_group(&self.client, &params).await)
    }

    #[tool(description = "View an agent group by ID.")]
    async fn view_group(
        &self,
        Parameters(params): Parameters<GroupIdParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: view_group, group_id={}", params.group_id);
        Ok(tools::groups::view_group(&self.client, &params).await)
    }

    #[tool(description = "Update an agent group. Fields are validated like create_group.")]
    async fn update_group(
        &self,
        Parameters(params): Parameters<UpdateGroupParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: update_group, group_id={}", params.group_id);
        Ok(tools::groups::update_group(&self.client, &params).await)
    }

    // Companies

    #[tool(description = "List companies with pagination.")]
    async fn list_companies(
        &self,
        Parameters(params): Parameters<PageParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            "Tool: list_companies, page={:?}, per_page={:?}",
            params.page, params.per_page
        );
        Ok(tools::companies::list_companies(&self.client, &params).await)
    }

    #[tool(description = "View a company by ID.")]
    async fn view_company(
        &self,
        Parameters(params): Parameters<CompanyIdParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: view_company, company_id={}", params.company_id);
        Ok(tools::companies::view_company(&self.client, &params).await)
    }

    #[tool(description = "Search companies by name.")]
    async fn search_companies(
        &self,
        Parameters(params): Parameters<SearchParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: search_companies, query={}", params.query);
        Ok(tools::companies::search_companies(&self.client, &params).await)
    }

    #[tool(description = "Find a company by full or partial name.")]
    async fn find_company_by_name(
        &self,
        Parameters(params): Parameters<CompanyNameParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: find_company_by_name, name={}", params.name);
        Ok(tools::companies::find_company_by_name(&self.client, &params).await)
    }

    #[tool(description = "List all company fields.")]
    async fn list_company_fields(&self) -> Result<CallToolResult, McpError> {
        debug!("Tool: list_company_fields");
        Ok(tools::companies::list_company_fields(&self.client).await)
    }

    // Alerts

    #[tool(description = "List alerts with optional filtering, sorting and pagination.")]
    async fn list_alerts(
        &self,
        Parameters(params): Parameters<ListAlertsParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: list_alerts, query={:?}", params.query);
        Ok(tools::alerts::list_alerts(&self.client, &params).await)
    }

    #[tool(description = "View an alert by ID.")]
    async fn view_alert(
        &self,
        Parameters(params): Parameters<AlertIdParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: view_alert, alert_id={}", params.alert_id);
        Ok(tools::alerts::view_alert(&self.client, &params).await)
    }

    #[tool(description = "Acknowledge an alert.")]
    async fn acknowledge_alert(
        &self,
        Parameters(params): Parameters<AlertIdParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: acknowledge_alert, alert_id={}", params.alert_id);
        Ok(tools::alerts::acknowledge_alert(&self.client, &params).await)
    }

    #[tool(description = "Resolve an alert.")]
    async fn resolve_alert(
        &self,
        Parameters(params): Parameters<AlertIdParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: resolve_alert, alert_id={}", params.alert_id);
        Ok(tools::alerts::resolve_alert(&self.client, &params).await)
    }

    #[tool(description = "Suppress an alert.")]
    async fn suppress_alert(
        &self,
        Parameters(params): Parameters<AlertIdParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: suppress_alert, alert_id={}", params.alert_id);
        Ok(tools::alerts::suppress_alert(&self.client, &params).await)
    }

    #[tool(description = "Unsuppress an alert.")]
    async fn unsuppress_alert(
        &self,
        Parameters(params): Parameters<AlertIdParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: unsuppress_alert, alert_id={}", params.alert_id);
        Ok(tools::alerts::unsuppress_alert(&self.client, &params).await)
    }

    #[tool(description = "Delete an alert.")]
    async fn delete_alert(
        &self,
        Parameters(params): Parameters<AlertIdParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: delete_alert, alert_id={}", params.alert_id);
        Ok(tools::alerts::delete_alert(&self.client, &params).await)
    }

    #[tool(description = "View the activity log of an alert. \
        Pass start_token from a previous response to continue.")]
    async fn view_alert_logs(
        &self,
        Parameters(params): Parameters<AlertLogsParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: view_alert_logs, alert_id={}", params.alert_id);
        Ok(tools::alerts::view_alert_logs(&self.client, &params).await)
    }

    #[tool(description = "Add a note to an alert.")]
    async fn create_alert_note(
        &self,
        Parameters(params): Parameters<CreateAlertNoteParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: create_alert_note, alert_id={}", params.alert_id);
        Ok(tools::alerts::create_alert_note(&self.client, &params).await)
    }

    #[tool(description = "List the notes on an alert with pagination.")]
    async fn list_alert_notes(
        &self,
        Parameters(params): Parameters<ListAlertNotesParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: list_alert_notes, alert_id={}", params.alert_id);
        Ok(tools::alerts::list_alert_notes(&self.client, &params).await)
    }

    #[tool(description = "View a note on an alert.")]
    async fn view_alert_note(
        &self,
        Parameters(params): Parameters<AlertNoteIdParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            "Tool: view_alert_note, alert_id={}, note_id={}",
            params.alert_id, params.note_id
        );
        Ok(tools::alerts::view_alert_note(&self.client, &params).await)
    }

    #[tool(description = "Update a note on an alert.")]
    async fn update_alert_note(
        &self,
        Parameters(params): Parameters<UpdateAlertNoteParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            "Tool: update_alert_note, alert_id={}, note_id={}",
            params.alert_id, params.note_id
        );
        Ok(tools::alerts::update_alert_note(&self.client, &params).await)
    }

    #[tool(description = "Delete a note on an alert.")]
    async fn delete_alert_note(
        &self,
        Parameters(params): Parameters<AlertNoteIdParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            "Tool: delete_alert_note, alert_id={}, note_id={}",
            params.alert_id, params.note_id
        );
        Ok(tools::alerts::delete_alert_note(&self.client, &params).await)
    }

    /// Serve MCP over stdio (stdin/stdout).
    ///
    /// This method blocks until the connection is closed.
    pub async fn serve_stdio(self) -> Result<(), ServerError> {
        debug!("Starting MCP server on stdio");
        let service = self
            .serve(stdio())
            .await
            .map_err(|e| ServerError::Mcp(format!("Failed to start server: {}", e)))?;
        service
            .waiting()
            .await
            .map_err(|e| ServerError::Mcp(format!("Server error: {}", e)))?;
        Ok(())
    }
}

#[tool_handler]
impl ServerHandler for FreshdeskMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: SERVICE_NAME.into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Implementation::from_build_env()
            },
            instructions: Some(
                "Freshdesk MCP server. Use tools to read and manage tickets, contacts, agents, \
                 groups, companies, canned responses, knowledge base articles and alerts. \
                 Use the create_ticket and create_reply prompts to draft tickets and replies."
                    .into(),
            ),
        }
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        debug!("Listing prompts");
        Ok(ListPromptsResult {
            prompts: prompts::list(),
            next_cursor: None,
            meta: None,
        })
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        debug!("Getting prompt: {}", request.name);
        prompts::get(&request.name, request.arguments.as_ref())
    }
}

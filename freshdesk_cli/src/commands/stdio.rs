//! Stdio transport command.

use freshdesk_mcp::FreshdeskMcpServer;

use super::{build_client, runtime};
use crate::cli::FreshdeskArgs;
use crate::errors::CliError;
use crate::ui;

/// Serve MCP on stdin/stdout until the client disconnects.
pub fn serve_stdio(freshdesk: &FreshdeskArgs) -> Result<(), CliError> {
    let client = build_client(freshdesk)?;
    ui::debug(&format!("Serving Freshdesk at {} over stdio", client.base_url()));

    runtime()?.block_on(async {
        FreshdeskMcpServer::new(client)
            .serve_stdio()
            .await
            .map_err(|e| {
                ui::error_with_details("MCP server error", &e.to_string());
                CliError::ServeError
            })
    })
}

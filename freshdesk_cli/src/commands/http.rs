//! Streamable HTTP transport command.

use freshdesk_mcp::{FreshdeskMcpServer, HttpConfig, HttpServer};

use super::{build_client, runtime};
use crate::cli::FreshdeskArgs;
use crate::errors::CliError;
use crate::ui;

/// Serve MCP over HTTP until Ctrl-C.
pub fn serve_http(config: HttpConfig, freshdesk: &FreshdeskArgs) -> Result<(), CliError> {
    let client = build_client(freshdesk)?;

    runtime()?.block_on(async {
        let server = HttpServer::bind(FreshdeskMcpServer::new(client), config)
            .await
            .map_err(|e| {
                ui::error_with_details("Failed to bind HTTP server", &e.to_string());
                CliError::ServeError
            })?;

        if let Ok(addr) = server.local_addr() {
            ui::info(&format!("Listening on http://{}", addr));
        }

        server.serve().await.map_err(|e| {
            ui::error_with_details("HTTP server error", &e.to_string());
            CliError::ServeError
        })?;

        ui::success("Server stopped");
        Ok(())
    })
}

//! Stdio to HTTP bridge command.

use freshdesk_mcp::{Bridge, BridgeConfig, BridgeError};

use super::runtime;
use crate::errors::CliError;
use crate::ui;

/// Relay stdin/stdout MCP traffic to a remote server.
pub fn run_bridge(config: BridgeConfig) -> Result<(), CliError> {
    ui::debug(&format!("Bridging stdio to {}", config.url));

    runtime()?.block_on(async {
        let bridge = Bridge::new(config).map_err(|e| {
            ui::error_with_details("Failed to create bridge", &e.to_string());
            CliError::ConfigError
        })?;

        bridge.run_stdio().await.map_err(|e| {
            match e {
                BridgeError::Unhealthy(_) | BridgeError::Http(_) => {
                    ui::error_with_details("Remote MCP server is not reachable", &e.to_string())
                }
                BridgeError::Io(_) => ui::error_with_details("Bridge I/O error", &e.to_string()),
            }
            CliError::ServeError
        })
    })
}

mod cli;
mod commands;
mod errors;
mod ui;

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use freshdesk_mcp::{BridgeConfig, HttpConfig};

use cli::{FreshdeskCli, FreshdeskCliCommand};

fn main() -> ExitCode {
    let cli = FreshdeskCli::parse();
    initialize_logging(cli.verbose);

    let result = match cli.command {
        FreshdeskCliCommand::Stdio { freshdesk } => commands::serve_stdio(&freshdesk),
        FreshdeskCliCommand::Http {
            host,
            port,
            mcp_api_key,
            require_auth,
            freshdesk,
        } => {
            let config = HttpConfig {
                host,
                port,
                api_key: mcp_api_key.filter(|k| !k.is_empty()),
                require_auth,
            };
            commands::serve_http(config, &freshdesk)
        }
        FreshdeskCliCommand::Bridge {
            url,
            mcp_api_key,
            timeout_secs,
        } => commands::run_bridge(BridgeConfig {
            url,
            api_key: mcp_api_key.filter(|k| !k.is_empty()),
            timeout: Duration::from_secs(timeout_secs),
        }),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("Exiting: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr; stdout belongs to the MCP transport. `RUST_LOG` overrides the level.
fn initialize_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_millis()
        .target(env_logger::Target::Stderr)
        .init();
}

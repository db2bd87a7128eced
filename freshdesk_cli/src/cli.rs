use clap::builder::BoolishValueParser;
use clap::{Args, Parser, Subcommand};

/// Defines the top-level interface for the Freshdesk MCP binary with clap.
#[derive(Parser, Debug)]
#[command(name = "freshdesk-mcp")]
#[command(version, about = "Freshdesk MCP: Helpdesk tools for AI assistants.")]
pub struct FreshdeskCli {
    /// Enable verbose output?
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: FreshdeskCliCommand,
}

/// Defines the available subcommands.
#[derive(Subcommand, Debug, PartialEq)]
pub enum FreshdeskCliCommand {
    /// Serve MCP over stdin/stdout.
    Stdio {
        #[command(flatten)]
        freshdesk: FreshdeskArgs,
    },
    /// Serve MCP over Streamable HTTP with bearer authentication.
    Http {
        /// Address to bind.
        #[arg(long, env = "HOST", default_value = "0.0.0.0")]
        host: String,
        /// Port to bind.
        #[arg(long, env = "PORT", default_value_t = 8080)]
        port: u16,
        /// Bearer token clients must present.
        #[arg(long, env = "MCP_API_KEY", hide_env_values = true)]
        mcp_api_key: Option<String>,
        /// Require a bearer token on /mcp and /debug/tools.
        #[arg(
            long,
            env = "MCP_REQUIRE_AUTH",
            default_value_t = true,
            action = clap::ArgAction::Set,
            value_parser = BoolishValueParser::new()
        )]
        require_auth: bool,
        #[command(flatten)]
        freshdesk: FreshdeskArgs,
    },
    /// Relay MCP messages from stdio to a remote HTTP server.
    Bridge {
        /// Base URL of the remote server.
        #[arg(long, env = "MCP_BRIDGE_URL", default_value = "http://localhost:8080")]
        url: String,
        /// Bearer token for the remote server.
        #[arg(long, env = "MCP_API_KEY", hide_env_values = true)]
        mcp_api_key: Option<String>,
        /// Request timeout in seconds.
        #[arg(long, default_value_t = 30)]
        timeout_secs: u64,
    },
}

/// Freshdesk account settings shared by the serving commands.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct FreshdeskArgs {
    /// Freshdesk domain (e.g. acme.freshdesk.com)
    #[arg(long, env = "FRESHDESK_DOMAIN")]
    pub domain: Option<String>,

    /// Freshdesk API key
    #[arg(long, env = "FRESHDESK_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Freshdesk request timeout in seconds.
    #[arg(long, env = "FRESHDESK_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        FreshdeskCli::command().debug_assert();
    }

    #[test]
    fn test_parse_stdio_with_flags() {
        let cli = FreshdeskCli::try_parse_from([
            "freshdesk-mcp",
            "stdio",
            "--domain",
            "acme.freshdesk.com",
            "--api-key",
            "secret",
            "--timeout-secs",
            "10",
        ])
        .unwrap();

        assert!(!cli.verbose);
        assert_eq!(
            cli.command,
            FreshdeskCliCommand::Stdio {
                freshdesk: FreshdeskArgs {
                    domain: Some("acme.freshdesk.com".to_string()),
                    api_key: Some("secret".to_string()),
                    timeout_secs: 10,
                }
            }
        );
    }

    #[test]
    fn test_parse_http_auth_toggle() {
        let cli = FreshdeskCli::try_parse_from([
            "freshdesk-mcp",
            "--verbose",
            "http",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--require-auth",
            "false",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            FreshdeskCliCommand::Http {
                host,
                port,
                require_auth,
                ..
            } => {
                assert_eq!(host, "127.0.0.1");
                assert_eq!(port, 9000);
                assert!(!require_auth);
            }
            other => panic!("Expected http command, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_bridge() {
        let cli = FreshdeskCli::try_parse_from([
            "freshdesk-mcp",
            "bridge",
            "--url",
            "https://mcp.example.com",
            "--timeout-secs",
            "5",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            FreshdeskCliCommand::Bridge {
                url, timeout_secs, ..
            } => {
                assert_eq!(url, "https://mcp.example.com");
                assert_eq!(timeout_secs, 5);
            }
            other => panic!("Expected bridge command, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_bad_port() {
        let result =
            FreshdeskCli::try_parse_from(["freshdesk-mcp", "http", "--port", "not-a-port"]);
        assert!(result.is_err());
    }
}

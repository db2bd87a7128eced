mod bridge;
mod http;
mod stdio;

use std::time::Duration;

use freshdesk_api::{ClientConfig, FreshdeskClient};
use tokio::runtime::Runtime;

use crate::cli::FreshdeskArgs;
use crate::errors::CliError;
use crate::ui;

pub use bridge::run_bridge;
pub use http::serve_http;
pub use stdio::serve_stdio;

/// Create a tokio runtime for the async servers.
fn runtime() -> Result<Runtime, CliError> {
    Runtime::new().map_err(|e| {
        ui::error_with_details("Failed to create async runtime", &e.to_string());
        CliError::RuntimeError
    })
}

/// Build the Freshdesk client from flags or environment.
fn build_client(args: &FreshdeskArgs) -> Result<FreshdeskClient, CliError> {
    let Some(domain) = args.domain.as_deref().filter(|d| !d.trim().is_empty()) else {
        ui::error("Missing Freshdesk domain. Set FRESHDESK_DOMAIN or pass --domain.");
        return Err(CliError::ConfigError);
    };
    let Some(api_key) = args.api_key.as_deref().filter(|k| !k.trim().is_empty()) else {
        ui::error("Missing Freshdesk API key. Set FRESHDESK_API_KEY or pass --api-key.");
        return Err(CliError::ConfigError);
    };

    let config = ClientConfig {
        timeout: Duration::from_secs(args.timeout_secs),
        ..ClientConfig::new(domain, api_key)
    };
    FreshdeskClient::new(config).map_err(|e| {
        ui::error_with_details("Failed to configure Freshdesk client", &e.to_string());
        CliError::ConfigError
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(domain: Option<&str>, api_key: Option<&str>) -> FreshdeskArgs {
        FreshdeskArgs {
            domain: domain.map(str::to_string),
            api_key: api_key.map(str::to_string),
            timeout_secs: 30,
        }
    }

    #[test]
    fn test_build_client_requires_domain_and_key() {
        assert_eq!(
            build_client(&args(None, Some("key"))).unwrap_err(),
            CliError::ConfigError
        );
        assert_eq!(
            build_client(&args(Some("acme.freshdesk.com"), Some("  "))).unwrap_err(),
            CliError::ConfigError
        );
    }

    #[test]
    fn test_build_client_uses_domain() {
        let client = build_client(&args(Some("acme.freshdesk.com"), Some("key"))).unwrap();
        assert_eq!(client.base_url(), "https://acme.freshdesk.com");
    }
}

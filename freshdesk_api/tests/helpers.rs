//! Shared test helpers for freshdesk_api tests.

#![allow(dead_code)]

use freshdesk_api::FreshdeskClient;
use httpmock::MockServer;

pub const API_KEY: &str = "test-key";

/// `Authorization` header Freshdesk expects for `API_KEY`.
pub const BASIC_AUTH: &str = "Basic dGVzdC1rZXk6WA==";

/// Create a client that talks to the given mock server.
pub fn client_for(server: &MockServer) -> FreshdeskClient {
    FreshdeskClient::with_base_url(server.base_url(), API_KEY)
}

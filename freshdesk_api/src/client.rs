//! Authenticated HTTP client for the Freshdesk REST API.

use std::time::Duration;

use log::debug;
use reqwest::header::LINK;
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde_json::Value;

use crate::errors::FreshdeskError;
use crate::pagination::{Pagination, parse_link_header};

/// Path prefix of every API v2 endpoint.
pub const API_PREFIX: &str = "/api/v2";

/// Default timeout for a single request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Freshdesk uses the API key as the basic auth user and ignores the password.
const API_PASSWORD: &str = "X";

/// Settings needed to reach a Freshdesk account.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Account domain, e.g. `acme.freshdesk.com`.
    pub domain: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(domain: impl Into<String>, api_key: impl Into<String>) -> Self {
        ClientConfig {
            domain: domain.into(),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// A decoded API response.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    /// Parsed JSON body, or `Null` when the body was empty.
    pub body: Value,
    pub pagination: Pagination,
}

/// Client for one Freshdesk account. Cheap to clone.
#[derive(Debug, Clone)]
pub struct FreshdeskClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl FreshdeskClient {
    /// Creates a client for `https://{domain}`.
    pub fn new(config: ClientConfig) -> Result<Self, FreshdeskError> {
        let domain = config
            .domain
            .trim()
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_end_matches('/');

        if domain.is_empty() {
            return Err(FreshdeskError::Config(
                "a Freshdesk domain is required".to_string(),
            ));
        }
        if config.api_key.trim().is_empty() {
            return Err(FreshdeskError::Config(
                "a Freshdesk API key is required".to_string(),
            ));
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| FreshdeskError::Config(format!("could not build HTTP client: {}", e)))?;

        Ok(FreshdeskClient {
            http,
            base_url: format!("https://{}", domain),
            api_key: config.api_key,
        })
    }

    /// Creates a client against an arbitrary origin, e.g. a local mock server.
    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        FreshdeskClient {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// Origin requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of an API path such as `/tickets/1`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, path)
    }

    pub async fn get(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<ApiResponse, FreshdeskError> {
        let request = self.request(Method::GET, path).query(query);
        self.send(request).await
    }

    pub async fn post<B>(&self, path: &str, body: &B) -> Result<ApiResponse, FreshdeskError>
    where
        B: Serialize + ?Sized,
    {
        let request = self.request(Method::POST, path).json(body);
        self.send(request).await
    }

    pub async fn put<B>(&self, path: &str, body: &B) -> Result<ApiResponse, FreshdeskError>
    where
        B: Serialize + ?Sized,
    {
        let request = self.request(Method::PUT, path).json(body);
        self.send(request).await
    }

    /// PUT without a body, used by state transitions like acknowledging an alert.
    pub async fn put_empty(&self, path: &str) -> Result<ApiResponse, FreshdeskError> {
        let request = self.request(Method::PUT, path);
        self.send(request).await
    }

    pub async fn delete(&self, path: &str) -> Result<ApiResponse, FreshdeskError> {
        let request = self.request(Method::DELETE, path);
        self.send(request).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        debug!("Freshdesk request: {} {}", method, path);
        self.http
            .request(method, self.url(path))
            .basic_auth(&self.api_key, Some(API_PASSWORD))
    }

    async fn send(&self, request: RequestBuilder) -> Result<ApiResponse, FreshdeskError> {
        let response = request.send().await?;
        let status = response.status();
        let pagination = response
            .headers()
            .get(LINK)
            .and_then(|value| value.to_str().ok())
            .map(parse_link_header)
            .unwrap_or_default();
        let bytes = response.bytes().await?;

        debug!("Freshdesk response: {} ({} bytes)", status, bytes.len());

        if !status.is_success() {
            let body = serde_json::from_slice::<Value>(&bytes).ok();
            return Err(api_error(status, body));
        }

        let body = if bytes.iter().all(|b| b.is_ascii_whitespace()) {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).map_err(|e| FreshdeskError::Decode(e.to_string()))?
        };

        Ok(ApiResponse {
            status: status.as_u16(),
            body,
            pagination,
        })
    }
}

/// Builds an API error from a failed response and its (optional) JSON body.
fn api_error(status: StatusCode, body: Option<Value>) -> FreshdeskError {
    let message = body
        .as_ref()
        .and_then(|b| b.get("description").or_else(|| b.get("message")))
        .and_then(Value::as_str)
        .map(str::to_string)
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_else(|| "Unknown error".to_string());
    let errors = body.and_then(|mut b| b.get_mut("errors").map(Value::take));

    FreshdeskError::Api {
        status: status.as_u16(),
        message,
        errors,
    }
}

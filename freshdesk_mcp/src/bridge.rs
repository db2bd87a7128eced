//! Relays line-delimited JSON-RPC from stdio to a remote HTTP MCP server.
//!
//! Lets clients that can only spawn a local stdio process talk to a
//! deployed `/mcp` endpoint. Each stdin line is POSTed as-is; every JSON-RPC
//! message in the answer becomes one stdout line.

use std::fmt;
use std::time::Duration;

use log::{debug, error, info, warn};
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde_json::{Value, json};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

const SESSION_HEADER: &str = "mcp-session-id";
const INTERNAL_ERROR: i64 = -32603;

/// Settings for the bridge.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Base URL of the HTTP server, without the `/mcp` suffix.
    pub url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8080".to_string(),
            api_key: None,
            timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug)]
pub enum BridgeError {
    Http(reqwest::Error),
    /// The health endpoint answered with a failure status.
    Unhealthy(u16),
    Io(std::io::Error),
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeError::Http(err) => write!(f, "Cannot connect to HTTP server: {}", err),
            BridgeError::Unhealthy(status) => {
                write!(f, "HTTP server health check failed with status {}", status)
            }
            BridgeError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for BridgeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BridgeError::Http(err) => Some(err),
            BridgeError::Io(err) => Some(err),
            BridgeError::Unhealthy(_) => None,
        }
    }
}

impl From<reqwest::Error> for BridgeError {
    fn from(err: reqwest::Error) -> Self {
        BridgeError::Http(err)
    }
}

impl From<std::io::Error> for BridgeError {
    fn from(err: std::io::Error) -> Self {
        BridgeError::Io(err)
    }
}

pub struct Bridge {
    http: reqwest::Client,
    config: BridgeConfig,
    session_id: Option<String>,
}

impl Bridge {
    pub fn new(config: BridgeConfig) -> Result<Self, BridgeError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            http,
            config: BridgeConfig {
                url: config.url.trim_end_matches('/').to_string(),
                ..config
            },
            session_id: None,
        })
    }

    /// Session assigned by the server, once there is one.
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    /// Fails unless `GET {url}/health` answers with a success status.
    pub async fn health_check(&self) -> Result<(), BridgeError> {
        let response = self
            .http
            .get(format!("{}/health", self.config.url))
            .timeout(Duration::from_secs(5))
            .send()
            .await?;
        info!("Health check: {}", response.status());
        if !response.status().is_success() {
            return Err(BridgeError::Unhealthy(response.status().as_u16()));
        }
        Ok(())
    }

    /// Forwards one JSON-RPC line and returns the lines to write back.
    pub async fn relay(&mut self, line: &str) -> Vec<String> {
        let line = line.trim();
        if line.is_empty() {
            return Vec::new();
        }

        let message: Value = match serde_json::from_str(line) {
            Ok(message) => message,
            Err(e) => {
                error!("Ignoring unparseable message: {}", e);
                return Vec::new();
            }
        };
        let id = message.get("id").cloned().unwrap_or(Value::Null);
        debug!(
            "Relaying method={}, id={}",
            message.get("method").and_then(Value::as_str).unwrap_or("-"),
            id
        );

        match self.post(line).await {
            Ok(lines) => lines,
            Err(RelayError::Status(status)) => {
                error!("HTTP error {}", status.as_u16());
                vec![error_line(&id, &format!("HTTP error {}", status.as_u16()))]
            }
            Err(RelayError::Other(message)) => {
                error!("Relay failed: {}", message);
                vec![error_line(&id, &message)]
            }
        }
    }

    /// Relays every line of `reader` until EOF.
    pub async fn run<R, W>(&mut self, reader: R, mut writer: W) -> Result<(), BridgeError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            for out in self.relay(&line).await {
                writer.write_all(out.as_bytes()).await?;
                writer.write_all(b"\n").await?;
            }
            writer.flush().await?;
        }
        info!("Input closed, stopping bridge");
        Ok(())
    }

    /// Checks the server is up, then relays stdin to stdout.
    pub async fn run_stdio(mut self) -> Result<(), BridgeError> {
        self.health_check().await?;
        info!("Bridge ready, relaying to {}/mcp", self.config.url);
        self.run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
            .await
    }

    async fn post(&mut self, body: &str) -> Result<Vec<String>, RelayError> {
        let mut request = self
            .http
            .post(format!("{}/mcp", self.config.url))
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json, text/event-stream")
            .body(body.to_string());
        if let Some(key) = self.config.api_key.as_deref().filter(|k| !k.is_empty()) {
            request = request.header(AUTHORIZATION, format!("Bearer {}", key));
        }
        if let Some(session) = &self.session_id {
            request = request.header(SESSION_HEADER, session);
        }

        let response = request.send().await.map_err(RelayError::other)?;
        let status = response.status();
        debug!("HTTP response: {}", status);

        if let Some(session) = response
            .headers()
            .get(SESSION_HEADER)
            .and_then(|v| v.to_str().ok())
        {
            if self.session_id.as_deref() != Some(session) {
                debug!("Session assigned: {}", session);
                self.session_id = Some(session.to_string());
            }
        }

        match status {
            StatusCode::ACCEPTED | StatusCode::NO_CONTENT => Ok(Vec::new()),
            StatusCode::OK => {
                let is_sse = response
                    .headers()
                    .get(CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok())
                    .is_some_and(|ct| ct.starts_with("text/event-stream"));
                let text = response.text().await.map_err(RelayError::other)?;
                if is_sse {
                    sse_messages(&text).map_err(RelayError::other)
                } else if text.trim().is_empty() {
                    Ok(Vec::new())
                } else {
                    let value: Value = serde_json::from_str(&text).map_err(RelayError::other)?;
                    Ok(vec![value.to_string()])
                }
            }
            other => Err(RelayError::Status(other)),
        }
    }
}

enum RelayError {
    Status(StatusCode),
    Other(String),
}

impl RelayError {
    fn other(err: impl fmt::Display) -> Self {
        RelayError::Other(err.to_string())
    }
}

fn error_line(id: &Value, message: &str) -> String {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": {"code": INTERNAL_ERROR, "message": message},
    })
    .to_string()
}

/// Re-encodes every SSE payload as compact single-line JSON.
fn sse_messages(body: &str) -> Result<Vec<String>, serde_json::Error> {
    sse_payloads(body)
        .iter()
        .map(|payload| serde_json::from_str::<Value>(payload).map(|value| value.to_string()))
        .collect()
}

/// Extracts the `data` payload of every event in an SSE body.
///
/// Multi-line data is joined with `\n`; events without data are skipped.
pub fn sse_payloads(body: &str) -> Vec<String> {
    let mut payloads = Vec::new();
    let mut data: Vec<&str> = Vec::new();

    for line in body.lines().chain(std::iter::once("")) {
        if line.is_empty() {
            let payload = data.join("\n");
            if !payload.trim().is_empty() {
                payloads.push(payload);
            }
            data.clear();
        } else if let Some(value) = line.strip_prefix("data:") {
            data.push(value.strip_prefix(' ').unwrap_or(value));
        } else if !line.starts_with(':') && !line.contains(':') {
            warn!("Ignoring malformed SSE line: {}", line);
        }
    }
    payloads
}

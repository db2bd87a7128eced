//! HTTP transport: MCP over Streamable HTTP plus a few service endpoints.
//!
//! | path           | auth | purpose                          |
//! |----------------|------|----------------------------------|
//! | `/mcp`         | yes  | MCP Streamable HTTP (stateless)  |
//! | `/health`      | no   | liveness probe                   |
//! | `/`            | no   | service description              |
//! | `/debug/tools` | yes  | names of the registered tools    |

use std::convert::Infallible;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use bytes::Bytes;
use http_body_util::{BodyExt, Full, combinators::BoxBody};
use hyper::body::Incoming;
use hyper::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use log::{debug, error, info, warn};
use rmcp::transport::streamable_http_server::session::local::LocalSessionManager;
use rmcp::transport::streamable_http_server::{StreamableHttpServerConfig, StreamableHttpService};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tower::ServiceExt;

use crate::server::{FreshdeskMcpServer, SERVICE_NAME, ServerError};

type HttpResponse = Response<BoxBody<Bytes, Infallible>>;

/// Settings for the HTTP transport.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
    /// Bearer token clients must present on protected endpoints.
    pub api_key: Option<String>,
    pub require_auth: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            api_key: None,
            require_auth: true,
        }
    }
}

/// Why a request was refused before reaching a protected endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Auth is required but no key was configured.
    NotConfigured,
    MissingHeader,
    InvalidKey,
}

impl AuthError {
    fn status(&self) -> StatusCode {
        match self {
            AuthError::NotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
            AuthError::MissingHeader | AuthError::InvalidKey => StatusCode::UNAUTHORIZED,
        }
    }

    fn detail(&self) -> &'static str {
        match self {
            AuthError::NotConfigured => "Server configuration error",
            AuthError::MissingHeader => "Authorization header required",
            AuthError::InvalidKey => "Invalid API key",
        }
    }
}

/// Checks an `Authorization` header value against the configured key.
pub fn authorize(config: &HttpConfig, header: Option<&str>) -> Result<(), AuthError> {
    if !config.require_auth {
        return Ok(());
    }
    let Some(expected) = config.api_key.as_deref().filter(|k| !k.is_empty()) else {
        warn!("MCP_API_KEY not set but authentication is required");
        return Err(AuthError::NotConfigured);
    };
    let Some(token) = header
        .and_then(|h| h.trim().split_once(' '))
        .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("bearer"))
        .map(|(_, token)| token.trim())
        .filter(|t| !t.is_empty())
    else {
        return Err(AuthError::MissingHeader);
    };
    if token != expected {
        let shown: String = token.chars().take(8).collect();
        warn!("Invalid API key attempted: {}...", shown);
        return Err(AuthError::InvalidKey);
    }
    Ok(())
}

struct AppState {
    config: HttpConfig,
    tool_names: Vec<String>,
    mcp: StreamableHttpService<FreshdeskMcpServer, LocalSessionManager>,
}

/// A bound HTTP server, ready to accept connections.
pub struct HttpServer {
    listener: TcpListener,
    state: Arc<AppState>,
}

impl HttpServer {
    /// Binds `host:port` from `config`. Port 0 picks a free port.
    pub async fn bind(server: FreshdeskMcpServer, config: HttpConfig) -> Result<Self, ServerError> {
        let address = format!("{}:{}", config.host, config.port);
        let listener = TcpListener::bind(&address).await?;

        if config.require_auth && config.api_key.as_deref().is_none_or(str::is_empty) {
            warn!("Authentication is required but no MCP API key is set; protected endpoints will fail");
        }

        let tool_names = server.tool_names();
        let mcp = StreamableHttpService::new(
            move || Ok(server.clone()),
            Arc::new(LocalSessionManager::default()),
            StreamableHttpServerConfig {
                stateful_mode: false,
                ..Default::default()
            },
        );

        Ok(Self {
            listener,
            state: Arc::new(AppState {
                config,
                tool_names,
                mcp,
            }),
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, ServerError> {
        Ok(self.listener.local_addr()?)
    }

    /// Serves until Ctrl-C.
    pub async fn serve(self) -> Result<(), ServerError> {
        self.serve_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {}", e);
                std::future::pending::<()>().await;
            }
        })
        .await
    }

    /// Serves until `shutdown` completes. In-flight connections are left to finish.
    pub async fn serve_with_shutdown<F>(self, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()>,
    {
        let address = self.local_addr()?;
        info!("HTTP MCP server listening on {}", address);
        info!("MCP endpoint available at: http://{}/mcp", address);
        info!(
            "Authentication: {}",
            if self.state.config.require_auth {
                "Bearer token"
            } else {
                "disabled"
            }
        );

        tokio::pin!(shutdown);
        loop {
            tokio::select! {
                accepted = self.listener.accept() => {
                    let (stream, peer_addr) = accepted?;
                    debug!("New connection from {}", peer_addr);

                    let state = Arc::clone(&self.state);
                    tokio::spawn(async move {
                        let io = TokioIo::new(stream);
                        let service = service_fn(move |req| route(Arc::clone(&state), req));

                        if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                            if err.is_incomplete_message() {
                                debug!("Client disconnected: {}", err);
                            } else {
                                error!("Error serving connection: {}", err);
                            }
                        }
                    });
                }
                _ = &mut shutdown => {
                    info!("Shutting down HTTP server");
                    return Ok(());
                }
            }
        }
    }
}

async fn route(state: Arc<AppState>, req: Request<Incoming>) -> Result<HttpResponse, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    debug!("{} {}", method, path);

    let response = match (&method, path.as_str()) {
        (&Method::GET, "/health") => json_response(
            StatusCode::OK,
            &json!({"status": "healthy", "service": SERVICE_NAME}),
        ),
        (&Method::GET, "/") => json_response(StatusCode::OK, &service_info(&state.config)),
        (&Method::GET, "/debug/tools") => match check(&state.config, &req) {
            Ok(()) => json_response(
                StatusCode::OK,
                &json!({"tools": state.tool_names, "count": state.tool_names.len()}),
            ),
            Err(refused) => refused,
        },
        (_, "/mcp") => match check(&state.config, &req) {
            Ok(()) => return state.mcp.clone().oneshot(req).await,
            Err(refused) => refused,
        },
        _ => json_response(StatusCode::NOT_FOUND, &json!({"detail": "Not Found"})),
    };
    Ok(response)
}

fn check(config: &HttpConfig, req: &Request<Incoming>) -> Result<(), HttpResponse> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());
    authorize(config, header)
        .map_err(|e| json_response(e.status(), &json!({"detail": e.detail()})))
}

fn service_info(config: &HttpConfig) -> Value {
    json!({
        "service": "Freshdesk MCP Server",
        "version": env!("CARGO_PKG_VERSION"),
        "authentication": {
            "authentication_required": config.require_auth,
            "auth_method": if config.require_auth { "Bearer token" } else { "None" },
        },
        "endpoints": {
            "mcp": "/mcp",
            "health": "/health",
            "debug": "/debug/tools",
        },
    })
}

fn json_response(status: StatusCode, body: &Value) -> HttpResponse {
    let mut response = Response::new(Full::new(Bytes::from(body.to_string())).boxed());
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}

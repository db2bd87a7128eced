//! MCP server for Freshdesk.
//!
//! This crate provides an MCP (Model Context Protocol) server that exposes
//! the Freshdesk helpdesk API to AI assistants, over stdio or Streamable
//! HTTP, plus a bridge that relays stdio to a remote HTTP server.

pub mod bridge;
pub mod http;
pub mod prompts;
mod server;
pub mod tools;

pub use bridge::{Bridge, BridgeConfig, BridgeError};
pub use http::{HttpConfig, HttpServer};
pub use server::{FreshdeskMcpServer, SERVICE_NAME, ServerError};

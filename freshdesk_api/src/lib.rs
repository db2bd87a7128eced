//! Client for the Freshdesk REST API (v2).
//!
//! This crate holds everything needed to talk to a Freshdesk account:
//! the authenticated HTTP client, `Link` header pagination, the integer
//! codes Freshdesk uses for ticket and alert properties, and validated
//! request models for the create endpoints.

pub mod client;
pub mod errors;
pub mod models;
pub mod pagination;
pub mod types;

pub use client::{ApiResponse, ClientConfig, FreshdeskClient};
pub use errors::FreshdeskError;
pub use pagination::{PageInfo, PageRequest, Pagination, parse_link_header};

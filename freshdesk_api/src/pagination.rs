//! Page requests and `Link` header parsing.
//!
//! Freshdesk list endpoints take `page` and `per_page` query parameters and
//! advertise neighbouring pages in a `Link` header:
//! `<https://acme.freshdesk.com/api/v2/tickets?page=2>; rel="next"`.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::errors::FreshdeskError;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PER_PAGE: i64 = 30;
pub const MAX_PER_PAGE: i64 = 100;

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<(.+?)>;\s*rel="(.+?)""#).expect("valid link regex"));
static PAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|[?&/])page=(\d+)").expect("valid page regex"));

/// Neighbouring pages advertised by a `Link` header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub next: Option<u32>,
    pub prev: Option<u32>,
}

/// Parses a `Link` header into next/prev page numbers.
///
/// Unknown relations, links without a `page` parameter and malformed
/// entries are ignored.
pub fn parse_link_header(header: &str) -> Pagination {
    let mut pagination = Pagination::default();

    for link in header.split(',') {
        let Some(captures) = LINK_RE.captures(link) else {
            continue;
        };
        let Some(page) = PAGE_RE
            .captures(&captures[1])
            .and_then(|c| c[1].parse::<u32>().ok())
        else {
            continue;
        };

        match &captures[2] {
            "next" => pagination.next = Some(page),
            "prev" => pagination.prev = Some(page),
            _ => {}
        }
    }

    pagination
}

/// A validated page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest {
            page: DEFAULT_PAGE as u32,
            per_page: DEFAULT_PER_PAGE as u32,
        }
    }
}

impl PageRequest {
    /// Builds a page request, applying defaults for missing values.
    pub fn new(page: Option<i64>, per_page: Option<i64>) -> Result<Self, FreshdeskError> {
        let page = page.unwrap_or(DEFAULT_PAGE);
        let per_page = per_page.unwrap_or(DEFAULT_PER_PAGE);

        if page < 1 || page > u32::MAX as i64 {
            return Err(FreshdeskError::Validation(
                "Page number must be greater than 0".to_string(),
            ));
        }
        if !(1..=MAX_PER_PAGE).contains(&per_page) {
            return Err(FreshdeskError::Validation(format!(
                "Page size must be between 1 and {}",
                MAX_PER_PAGE
            )));
        }

        Ok(PageRequest {
            page: page as u32,
            per_page: per_page as u32,
        })
    }

    /// Query parameters for this page.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page.to_string()),
            ("per_page", self.per_page.to_string()),
        ]
    }

    /// Combines this request with the links of its response.
    pub fn info(&self, links: &Pagination) -> PageInfo {
        PageInfo {
            current_page: self.page,
            next_page: links.next,
            prev_page: links.prev,
            per_page: self.per_page,
        }
    }
}

/// Pagination summary returned alongside list results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub current_page: u32,
    pub next_page: Option<u32>,
    pub prev_page: Option<u32>,
    pub per_page: u32,
}

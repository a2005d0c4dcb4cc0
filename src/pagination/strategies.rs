//! Pagination strategy implementations

use super::types::{NextPage, NextUrlMode, RequestTemplate};
use crate::error::{Error, Result};
use crate::link::parse_link_header;
use reqwest::header::{HeaderMap, LINK};
use tracing::{debug, warn};
use url::Url;

// ============================================================================
// Link Header Pagination
// ============================================================================

/// Link header pagination (RFC 5988)
///
/// Extracts next page URL from the Link header.
/// Common in GitHub, GitLab and Canvas APIs.
/// Format: `Link: <https://api.github.com/...?page=2>; rel="next", ...`
#[derive(Debug, Clone)]
pub struct LinkHeaderPaginator {
    /// Rel value to follow (default: "next")
    pub rel: String,
    /// How the next URL is built from the link target
    pub mode: NextUrlMode,
}

impl Default for LinkHeaderPaginator {
    fn default() -> Self {
        Self {
            rel: "next".to_string(),
            mode: NextUrlMode::default(),
        }
    }
}

impl LinkHeaderPaginator {
    /// Create a new link header paginator
    pub fn new(rel: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            ..Default::default()
        }
    }

    /// Set the next URL mode
    #[must_use]
    pub fn with_mode(mut self, mode: NextUrlMode) -> Self {
        self.mode = mode;
        self
    }

    /// Derive the next request from a page's response headers
    ///
    /// Multiple `Link` header lines are treated as one comma-separated list.
    pub fn next_page(&self, current: &RequestTemplate, headers: &HeaderMap) -> Result<NextPage> {
        let Some(link_header) = joined_link_header(headers)? else {
            return Ok(NextPage::Done);
        };

        let links = parse_link_header(&link_header)?;
        let Some(link) = links.find(&self.rel) else {
            return Ok(NextPage::Done);
        };

        let next_url = self
            .mode
            .next_url(current.url(), &link.url)
            .map_err(|e| Error::link_header(&link_header, format!("invalid link target: {e}")))?;
        if changes_origin(current.url(), &next_url) {
            warn!(
                "rel=\"{}\" leads to another origin ({}); request headers are sent unchanged",
                self.rel,
                next_url.origin().ascii_serialization()
            );
        }
        debug!("Following rel=\"{}\" to {}", self.rel, next_url);
        Ok(NextPage::Continue(current.with_url(next_url)))
    }
}

/// True when `next` has a different scheme, host or port than `current`
pub(crate) fn changes_origin(current: &Url, next: &Url) -> bool {
    current.origin() != next.origin()
}

/// All `Link` header values joined with `", "`, or `None` when absent
fn joined_link_header(headers: &HeaderMap) -> Result<Option<String>> {
    let mut values = Vec::new();
    for value in headers.get_all(LINK) {
        let value = value.to_str().map_err(|_| {
            Error::link_header(
                String::from_utf8_lossy(value.as_bytes()),
                "non-ASCII header value",
            )
        })?;
        values.push(value);
    }

    if values.is_empty() {
        Ok(None)
    } else {
        Ok(Some(values.join(", ")))
    }
}

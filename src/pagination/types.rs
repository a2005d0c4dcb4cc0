//! Pagination types

use crate::auth::{header_name_from, Authenticator};
use crate::error::{Error, Result};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use url::Url;

/// The GET request for one page
///
/// Between pages only the URL changes; the header set is fixed when the
/// template is built and shared by the whole chain.
#[derive(Debug, Clone)]
pub struct RequestTemplate {
    url: Url,
    headers: HeaderMap,
}

impl RequestTemplate {
    /// Create a template for `url` with no headers
    pub fn new(url: Url) -> Self {
        Self {
            url,
            headers: HeaderMap::new(),
        }
    }

    /// Parse `url` and create a template for it
    pub fn parse(url: &str) -> Result<Self> {
        Ok(Self::new(Url::parse(url)?))
    }

    /// Add a header, keeping earlier values for the same name
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self> {
        let value =
            HeaderValue::from_str(value).map_err(|e| Error::invalid_header(name, e.to_string()))?;
        self.headers.append(header_name_from(name)?, value);
        Ok(self)
    }

    /// Apply authentication headers
    pub fn with_auth(mut self, authenticator: &Authenticator) -> Result<Self> {
        authenticator.apply(&mut self.headers)?;
        Ok(self)
    }

    /// The same request aimed at another URL
    pub fn with_url(&self, url: Url) -> Self {
        Self {
            url,
            headers: self.headers.clone(),
        }
    }

    /// HTTP method (always GET)
    pub fn method(&self) -> Method {
        Method::GET
    }

    /// Target URL
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Request headers
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

/// How the URL of the next page is derived from a `rel="next"` link
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum NextUrlMode {
    /// Request the link target as given (resolved against the current URL
    /// when relative)
    #[default]
    Verbatim,
    /// Keep the current URL and only replace its query string with the
    /// link target's query string
    QueryOnly,
}

impl NextUrlMode {
    /// Build the next page URL from the current one and a link target
    pub fn next_url(self, current: &Url, target: &str) -> Result<Url> {
        let resolved = current.join(target)?;
        match self {
            Self::Verbatim => Ok(resolved),
            Self::QueryOnly => {
                let mut next = current.clone();
                next.set_query(resolved.query());
                Ok(next)
            }
        }
    }
}

/// Result of the next page computation
#[derive(Debug, Clone)]
pub enum NextPage {
    /// Fetch this request next
    Continue(RequestTemplate),
    /// No more pages
    Done,
}

impl NextPage {
    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Check if this is a continue result
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue(_))
    }
}

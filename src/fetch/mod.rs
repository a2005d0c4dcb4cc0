//! Paginated fetch engine
//!
//! Follows `rel="next"` links from a seed request until they run out and
//! merges every page's records into one JSON array.
//!
//! # Overview
//!
//! Each page goes through the same steps:
//!
//! 1. GET the current request (transport failures abort the chain)
//! 2. Require status 200 exactly
//! 3. Require a text-like `Content-Type`
//! 4. Decode the body strictly as a JSON array of `T`
//! 5. Look for a `next` link and, if present, continue with it
//!
//! The chain is all-or-nothing: any failure discards the pages already
//! fetched. Pages are requested one after another, since each `next` link is
//! only known once the previous response arrives. The loop keeps stack depth
//! constant however long the chain is.

mod types;

pub use types::{FetchOptions, FetchPhase, Merged};

use crate::content_type::{ContentTypeRules, DEFAULT_RULES};
use crate::decode::{Fragment, JsonArrayDecoder};
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::pagination::{LinkHeaderPaginator, NextPage, RequestTemplate};
use bytes::Bytes;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

/// Fetch every page reachable from `template` and return the merged JSON array
///
/// Uses the default link paginator (verbatim `next` URLs) and no page limit.
pub async fn fetch_all<T>(client: &HttpClient, template: RequestTemplate) -> Result<Bytes>
where
    T: DeserializeOwned + Serialize,
{
    PaginatedFetcher::new(client.clone())
        .fetch_all::<T>(template)
        .await
}

/// Drives one linear chain of page requests per call
///
/// Holds no per-chain state, so one fetcher can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct PaginatedFetcher {
    client: HttpClient,
    paginator: LinkHeaderPaginator,
    rules: ContentTypeRules,
    options: FetchOptions,
}

impl PaginatedFetcher {
    /// Create a fetcher with default pagination and content type rules
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            paginator: LinkHeaderPaginator::default(),
            rules: DEFAULT_RULES.clone(),
            options: FetchOptions::default(),
        }
    }

    /// Set the paginator
    #[must_use]
    pub fn with_paginator(mut self, paginator: LinkHeaderPaginator) -> Self {
        self.paginator = paginator;
        self
    }

    /// Set the content type rules
    #[must_use]
    pub fn with_rules(mut self, rules: ContentTypeRules) -> Self {
        self.rules = rules;
        self
    }

    /// Set fetch options
    #[must_use]
    pub fn with_options(mut self, options: FetchOptions) -> Self {
        self.options = options;
        self
    }

    /// Get the HTTP client
    pub fn client(&self) -> &HttpClient {
        &self.client
    }

    /// Fetch all pages and return the merged result as JSON bytes
    pub async fn fetch_all<T>(&self, template: RequestTemplate) -> Result<Bytes>
    where
        T: DeserializeOwned + Serialize,
    {
        self.fetch_records::<T>(template).await?.to_bytes()
    }

    /// Fetch all pages and return the merged records
    pub async fn fetch_records<T>(&self, template: RequestTemplate) -> Result<Merged<T>>
    where
        T: DeserializeOwned,
    {
        let decoder = JsonArrayDecoder::<T>::new();
        let mut merged = Merged::default();
        let mut current = template;

        loop {
            if let Some(limit) = self.options.max_pages {
                if merged.pages() >= limit {
                    return Err(Error::PageLimitExceeded { limit });
                }
            }

            let page = merged.pages() + 1;
            let (fragment, headers) = self.fetch_page(&current, &decoder, page).await?;
            debug!("Page {page}: {} records", fragment.len());
            merged.push_page(fragment.into_records());

            match self.paginator.next_page(&current, &headers)? {
                NextPage::Continue(next) => {
                    debug!("[{}] page {page} -> {}", FetchPhase::Recursing, next.url());
                    current = next;
                }
                NextPage::Done => break,
            }
        }

        debug!("[{}] {} pages", FetchPhase::Done, merged.pages());
        info!(
            "Fetched {} records across {} pages",
            merged.records.len(),
            merged.pages()
        );
        Ok(merged)
    }

    /// Request, validate and decode a single page
    async fn fetch_page<T>(
        &self,
        request: &RequestTemplate,
        decoder: &JsonArrayDecoder<T>,
        page: usize,
    ) -> Result<(Fragment<T>, HeaderMap)>
    where
        T: DeserializeOwned,
    {
        debug!("[{}] page {page}: {}", FetchPhase::Requesting, request.url());
        let response = self.client.get(request.url(), request.headers()).await?;

        debug!("[{}] page {page}", FetchPhase::Validating);
        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::http_status(status.as_u16()));
        }
        self.check_content_type(response.headers())?;

        let headers = response.headers().clone();
        let body = response.bytes().await?;

        debug!("[{}] page {page}: {} bytes", FetchPhase::Parsing, body.len());
        let fragment = decoder.decode(&body)?;
        Ok((fragment, headers))
    }

    fn check_content_type(&self, headers: &HeaderMap) -> Result<()> {
        let Some(value) = headers.get(CONTENT_TYPE) else {
            return Err(Error::content_type(""));
        };
        let raw = String::from_utf8_lossy(value.as_bytes());
        if raw.is_empty() || !self.rules.accepts(&raw) {
            return Err(Error::content_type(raw));
        }
        Ok(())
    }
}

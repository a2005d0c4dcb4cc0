//! Fetch types
//!
//! Options and results for a single fetch chain.

use bytes::Bytes;
use serde::Serialize;
use std::fmt;

use crate::error::{Error, Result};

/// Options for one fetch chain
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchOptions {
    /// Maximum number of pages to request; `None` follows `next` links until
    /// they run out
    pub max_pages: Option<usize>,
}

impl FetchOptions {
    /// Create default options (no page limit)
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the number of pages a chain may request
    #[must_use]
    pub fn max_pages(mut self, limit: usize) -> Self {
        self.max_pages = Some(limit);
        self
    }
}

/// Where a fetch chain currently is, for tracing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPhase {
    /// Sending the GET for a page
    Requesting,
    /// Checking status and `Content-Type`
    Validating,
    /// Decoding the body
    Parsing,
    /// Following the `next` link
    Recursing,
    /// Chain finished
    Done,
}

impl fmt::Display for FetchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Requesting => "requesting",
            Self::Validating => "validating",
            Self::Parsing => "parsing",
            Self::Recursing => "recursing",
            Self::Done => "done",
        };
        f.write_str(name)
    }
}

/// Records merged from every page of a chain, in fetch order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Merged<T> {
    /// All records, page 1 first
    pub records: Vec<T>,
    /// Record count of each page, in fetch order
    pub page_sizes: Vec<usize>,
}

impl<T> Default for Merged<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            page_sizes: Vec::new(),
        }
    }
}

impl<T> Merged<T> {
    /// Number of pages fetched
    pub fn pages(&self) -> usize {
        self.page_sizes.len()
    }

    /// Append one page's records
    pub fn push_page(&mut self, records: Vec<T>) {
        self.page_sizes.push(records.len());
        self.records.extend(records);
    }
}

impl<T: Serialize> Merged<T> {
    /// The merged result as one compact JSON array
    pub fn to_bytes(&self) -> Result<Bytes> {
        serde_json::to_vec(&self.records)
            .map(Bytes::from)
            .map_err(|e| Error::malformed_body(format!("error marshaling json: {e}")))
    }
}

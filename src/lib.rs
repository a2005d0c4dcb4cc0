//! # pagechain
//!
//! Fetch a REST collection that is split across pages linked by RFC 5988
//! `Link` headers, and merge every page into a single JSON array.
//!
//! ## Features
//!
//! - **Link Header Pagination**: Follows `rel="next"` until the chain ends
//! - **Strict Validation**: Status 200 only, text-like `Content-Type` only
//! - **Typed Records**: Pages decode into any `serde` type, merged once
//! - **All-or-Nothing**: A failure on any page fails the whole fetch
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pagechain::http::HttpClient;
//! use pagechain::pagination::RequestTemplate;
//! use pagechain::{fetch_all, Result, User};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = HttpClient::new()?;
//!     let template = RequestTemplate::parse("https://lms.example.edu/api/v1/courses/7/users/")?
//!         .with_header("Authorization", "Bearer secret")?;
//!
//!     let body = fetch_all::<User>(&client, template).await?;
//!     println!("{}", String::from_utf8_lossy(&body));
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │              fetch_all(template) → JSON array               │
//! └─────────────────────────────────────────────────────────────┘
//!                               │
//! ┌──────────┬───────────┬──────┴───────┬────────────┬─────────┐
//! │   Auth   │   HTTP    │  Pagination  │  Validate  │ Decode  │
//! ├──────────┼───────────┼──────────────┼────────────┼─────────┤
//! │ Bearer   │ GET       │ Link header  │ Status 200 │ [T]     │
//! │ Basic    │ Timeouts  │ Verbatim URL │ Text types │ Merge   │
//! │ Headers  │           │ Query only   │ Charsets   │         │
//! └──────────┴───────────┴──────────────┴────────────┴─────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::unused_self)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Content-Type parsing and text-like classification
pub mod content_type;

/// RFC 5988 Link header parsing
pub mod link;

/// Authentication
pub mod auth;

/// HTTP client
pub mod http;

/// Response decoders
pub mod decode;

/// Link header pagination
pub mod pagination;

/// Paginated fetch engine
pub mod fetch;

/// Source configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use fetch::{fetch_all, PaginatedFetcher};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

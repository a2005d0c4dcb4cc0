//! Content-Type validation
//!
//! Decides whether a response body can be trusted as text-based structured
//! data before it is handed to the JSON decoder. Binary payloads and
//! non-UTF-8 charsets are rejected up front.
//!
//! # Overview
//!
//! - [`MediaType`] parses a `Content-Type` value (type, subtype, parameters)
//! - [`ContentTypeRules`] holds the accepted media-type patterns and charsets
//! - [`is_text_like`] checks a header value against the default rules

mod parser;
mod types;

pub use parser::MediaType;
pub use types::{is_text_like, ContentTypeRules, DEFAULT_RULES};

//! Pagination module
//!
//! Supports: Link Header (RFC 5988)
//!
//! # Overview
//!
//! A [`RequestTemplate`] describes the GET for one page. After each page the
//! [`LinkHeaderPaginator`] inspects the response headers and either derives
//! the next template or reports that the chain is done.

mod strategies;
mod types;

pub use strategies::LinkHeaderPaginator;
pub use types::{NextPage, NextUrlMode, RequestTemplate};

#[cfg(test)]
mod tests;

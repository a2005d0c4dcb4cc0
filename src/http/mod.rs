//! HTTP client module
//!
//! A thin wrapper over `reqwest::Client` that issues exactly one request per
//! call. There is no retry, backoff or rate limiting: a transport failure is
//! reported to the caller as-is.

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};

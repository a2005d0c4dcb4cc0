//! Tests for pagination module

use super::strategies::changes_origin;
use super::*;
use crate::auth::{AuthConfig, Authenticator};
use crate::error::ErrorKind;
use reqwest::header::{HeaderMap, HeaderValue};
use url::Url;

fn template(url: &str) -> RequestTemplate {
    RequestTemplate::parse(url)
        .unwrap()
        .with_header("X-Tenant", "acme")
        .unwrap()
}

fn link_headers(values: &[&'static str]) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for value in values {
        headers.append("link", HeaderValue::from_static(*value));
    }
    headers
}

fn expect_continue(next: NextPage) -> RequestTemplate {
    match next {
        NextPage::Continue(req) => req,
        NextPage::Done => panic!("Expected Continue"),
    }
}

// ============================================================================
// RequestTemplate Tests
// ============================================================================

#[test]
fn test_request_template_is_get() {
    let req = template("https://lms.example.edu/api/v1/courses/1/users/");
    assert_eq!(req.method(), reqwest::Method::GET);
    assert_eq!(req.headers().get("x-tenant").unwrap(), "acme");
}

#[test]
fn test_request_template_with_auth() {
    let auth = Authenticator::new(AuthConfig::Bearer {
        token: "t0k".to_string(),
    });
    let req = template("https://a.example/u").with_auth(&auth).unwrap();
    assert_eq!(req.headers().get("authorization").unwrap(), "Bearer t0k");
}

#[test]
fn test_request_template_with_url_keeps_headers() {
    let req = template("https://a.example/u");
    let next = req.with_url(Url::parse("https://b.example/v?page=2").unwrap());
    assert_eq!(next.url().as_str(), "https://b.example/v?page=2");
    assert_eq!(next.headers(), req.headers());
}

#[test]
fn test_request_template_invalid_url() {
    let err = RequestTemplate::parse("not a url").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[test]
fn test_request_template_invalid_header() {
    let result = RequestTemplate::parse("https://a.example/")
        .unwrap()
        .with_header("X-Bad", "line\nbreak");
    assert!(result.is_err());
}

// ============================================================================
// NextUrlMode Tests
// ============================================================================

#[test]
fn test_next_url_verbatim_absolute() {
    let current = Url::parse("https://a.example/api/users?per_page=10").unwrap();
    let next = NextUrlMode::Verbatim
        .next_url(&current, "https://cdn.example/other?page=2")
        .unwrap();
    assert_eq!(next.as_str(), "https://cdn.example/other?page=2");
}

#[test]
fn test_next_url_verbatim_relative() {
    let current = Url::parse("https://a.example/api/users?page=1").unwrap();
    let next = NextUrlMode::Verbatim
        .next_url(&current, "/api/users?page=2")
        .unwrap();
    assert_eq!(next.as_str(), "https://a.example/api/users?page=2");
}

#[test]
fn test_next_url_query_only() {
    let current = Url::parse("https://a.example/api/users/").unwrap();
    let next = NextUrlMode::QueryOnly
        .next_url(&current, "https://cdn.example/other?page=2&per_page=10")
        .unwrap();
    assert_eq!(next.as_str(), "https://a.example/api/users/?page=2&per_page=10");
}

#[test]
fn test_next_url_query_only_without_query() {
    let current = Url::parse("https://a.example/api/users?page=3").unwrap();
    let next = NextUrlMode::QueryOnly
        .next_url(&current, "https://a.example/api/users")
        .unwrap();
    assert_eq!(next.as_str(), "https://a.example/api/users");
}

#[test]
fn test_next_url_mode_default() {
    assert_eq!(NextUrlMode::default(), NextUrlMode::Verbatim);
}

#[test]
fn test_next_url_mode_deserialize() {
    let mode: NextUrlMode = serde_json::from_str("\"query_only\"").unwrap();
    assert_eq!(mode, NextUrlMode::QueryOnly);
}

// ============================================================================
// Link Header Paginator Tests
// ============================================================================

#[test]
fn test_link_header_paginator_continues() {
    let paginator = LinkHeaderPaginator::default();
    let headers = link_headers(&[
        "<https://api.example.com/items?page=2>; rel=\"next\", <https://api.example.com/items?page=1>; rel=\"prev\"",
    ]);

    let current = template("https://api.example.com/items");
    let next = expect_continue(paginator.next_page(&current, &headers).unwrap());

    assert_eq!(next.url().as_str(), "https://api.example.com/items?page=2");
    assert_eq!(next.headers().get("x-tenant").unwrap(), "acme");
}

#[test]
fn test_link_header_paginator_stops_no_header() {
    let paginator = LinkHeaderPaginator::default();
    let next = paginator
        .next_page(&template("https://api.example.com/items"), &HeaderMap::new())
        .unwrap();
    assert!(next.is_done());
}

#[test]
fn test_link_header_paginator_stops_no_next() {
    let paginator = LinkHeaderPaginator::default();
    let headers = link_headers(&["<https://api.example.com/items?page=1>; rel=\"prev\""]);

    let next = paginator
        .next_page(&template("https://api.example.com/items"), &headers)
        .unwrap();
    assert!(next.is_done());
}

#[test]
fn test_link_header_paginator_multiple_header_lines() {
    let paginator = LinkHeaderPaginator::default();
    let headers = link_headers(&[
        "<https://api.example.com/items?page=1>; rel=\"first\"",
        "<https://api.example.com/items?page=4>; rel=\"next\"",
    ]);

    let next = expect_continue(
        paginator
            .next_page(&template("https://api.example.com/items"), &headers)
            .unwrap(),
    );
    assert_eq!(next.url().query(), Some("page=4"));
}

#[test]
fn test_link_header_paginator_query_only_mode() {
    let paginator = LinkHeaderPaginator::default().with_mode(NextUrlMode::QueryOnly);
    let headers = link_headers(&["<https://elsewhere.example/x?page=2>; rel=\"next\""]);

    let next = expect_continue(
        paginator
            .next_page(&template("https://api.example.com/items"), &headers)
            .unwrap(),
    );
    assert_eq!(next.url().as_str(), "https://api.example.com/items?page=2");
}

#[test]
fn test_link_header_paginator_custom_rel() {
    let paginator = LinkHeaderPaginator::new("more");
    let headers = link_headers(&["<https://api.example.com/items?page=2>; rel=\"more\""]);

    let next = paginator
        .next_page(&template("https://api.example.com/items"), &headers)
        .unwrap();
    assert!(next.is_continue());
}

#[test]
fn test_link_header_paginator_malformed_header() {
    let paginator = LinkHeaderPaginator::default();
    let headers = link_headers(&["https://api.example.com/items?page=2; rel=\"next\""]);

    let err = paginator
        .next_page(&template("https://api.example.com/items"), &headers)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::LinkHeaderParse);
}

#[test]
fn test_link_header_paginator_invalid_target() {
    let paginator = LinkHeaderPaginator::default();
    let headers = link_headers(&["<http://[::1>; rel=\"next\""]);

    let err = paginator
        .next_page(&template("https://api.example.com/items"), &headers)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::LinkHeaderParse);
}

#[test]
fn test_changes_origin() {
    let current = Url::parse("https://api.example.com/items").unwrap();
    let same = Url::parse("https://api.example.com/other?page=2").unwrap();
    let other_host = Url::parse("https://cdn.example.com/items?page=2").unwrap();
    let other_port = Url::parse("https://api.example.com:8443/items").unwrap();
    let other_scheme = Url::parse("http://api.example.com/items").unwrap();

    assert!(!changes_origin(&current, &same));
    assert!(changes_origin(&current, &other_host));
    assert!(changes_origin(&current, &other_port));
    assert!(changes_origin(&current, &other_scheme));
}

#[test]
fn test_link_header_paginator_cross_origin_keeps_headers() {
    let paginator = LinkHeaderPaginator::default();
    let headers = link_headers(&["<https://cdn.example.com/items?page=2>; rel=\"next\""]);
    let current = template("https://api.example.com/items")
        .with_auth(&Authenticator::new(AuthConfig::bearer_opt(Some("t0k"))))
        .unwrap();

    let next = expect_continue(paginator.next_page(&current, &headers).unwrap());

    assert_eq!(next.url().host_str(), Some("cdn.example.com"));
    assert_eq!(next.headers().get("authorization").unwrap(), "Bearer t0k");
}

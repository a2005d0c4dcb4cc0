//! Integration tests using mock HTTP server
//!
//! Tests the full end-to-end flow: source config → paginated requests → merged JSON array

use pagechain::config::SourceConfig;
use pagechain::error::ErrorKind;
use pagechain::fetch::{FetchOptions, PaginatedFetcher};
use pagechain::http::HttpClient;
use pagechain::pagination::{NextUrlMode, RequestTemplate};
use pagechain::{fetch_all, Error, User};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn json_page(body: Value) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("Content-Type", "application/json; charset=utf-8")
        .set_body_string(body.to_string())
}

fn with_next(response: ResponseTemplate, next: &str) -> ResponseTemplate {
    response.insert_header("Link", format!("<{next}>; rel=\"next\"").as_str())
}

fn roster_config(server: &MockServer, course: u64) -> SourceConfig {
    SourceConfig {
        base_url: Some(server.uri()),
        course_code: Some(course),
        token: Some("secret".to_string()),
        ..Default::default()
    }
}

async fn fetch_roster(config: &SourceConfig) -> pagechain::Result<Vec<User>> {
    let client = HttpClient::with_config(config.http_config())?;
    let fetcher = PaginatedFetcher::new(client)
        .with_paginator(config.paginator())
        .with_options(config.fetch_options());
    let body = fetcher
        .fetch_all::<User>(config.request_template()?)
        .await?;
    Ok(serde_json::from_slice(&body)?)
}

// ============================================================================
// Roster Tests
// ============================================================================

#[tokio::test]
async fn test_course_roster_across_pages() {
    let server = MockServer::start().await;
    let roster = "/api/v1/courses/42/users/";

    Mock::given(method("GET"))
        .and(path(roster))
        .and(query_param("page", "2"))
        .and(header("Authorization", "Bearer secret"))
        .respond_with(json_page(json!([
            {"id": 3, "name": "Carol", "login_id": "carol", "email": "c@example.edu"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(roster))
        .and(header("Authorization", "Bearer secret"))
        .respond_with(with_next(
            json_page(json!([
                {"id": 1, "name": "Alice", "login_id": "alice"},
                {"id": 2, "name": "Bob", "login_id": "bob"}
            ])),
            &format!("{}{roster}?page=2", server.uri()),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let users = fetch_roster(&roster_config(&server, 42)).await.unwrap();

    assert_eq!(
        users,
        vec![
            User::new(1, "Alice", "alice"),
            User::new(2, "Bob", "bob"),
            User::new(3, "Carol", "carol"),
        ]
    );
}

#[tokio::test]
async fn test_course_roster_drops_unknown_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/courses/7/users/"))
        .respond_with(json_page(json!([
            {"id": 9, "name": "Dana", "login_id": "dana", "sortable_name": "Dana"}
        ])))
        .mount(&server)
        .await;

    let config = roster_config(&server, 7);
    let client = HttpClient::new().unwrap();
    let body = fetch_all::<User>(&client, config.request_template().unwrap())
        .await
        .unwrap();

    assert_eq!(&body[..], br#"[{"id":9,"name":"Dana","login_id":"dana"}]"#);
}

#[tokio::test]
async fn test_course_roster_query_only_mode() {
    let server = MockServer::start().await;
    let roster = "/api/v1/courses/5/users/";

    Mock::given(method("GET"))
        .and(path(roster))
        .and(query_param("page", "2"))
        .respond_with(json_page(json!([{"id": 2, "name": "B", "login_id": "b"}])))
        .mount(&server)
        .await;

    // The server advertises a foreign host; only its query string is used
    Mock::given(method("GET"))
        .and(path(roster))
        .respond_with(with_next(
            json_page(json!([{"id": 1, "name": "A", "login_id": "a"}])),
            "https://unreachable.invalid/elsewhere?page=2",
        ))
        .mount(&server)
        .await;

    let config = SourceConfig {
        next_url: NextUrlMode::QueryOnly,
        ..roster_config(&server, 5)
    };
    let users = fetch_roster(&config).await.unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users[1].login_id, "b");
}

// ============================================================================
// Generic Collection Tests
// ============================================================================

#[tokio::test]
async fn test_untyped_collection_preserves_records() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/items"))
        .and(query_param("cursor", "b"))
        .respond_with(json_page(json!([{"sku": "x-2", "tags": []}])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/items"))
        .respond_with(with_next(
            json_page(json!([{"sku": "x-1", "tags": ["new"]}])),
            "/items?cursor=b",
        ))
        .mount(&server)
        .await;

    let template = RequestTemplate::parse(&format!("{}/items", server.uri())).unwrap();
    let client = HttpClient::new().unwrap();
    let body = fetch_all::<Value>(&client, template).await.unwrap();

    let merged: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        merged,
        json!([{"sku": "x-1", "tags": ["new"]}, {"sku": "x-2", "tags": []}])
    );
}

// ============================================================================
// Failure Tests
// ============================================================================

#[tokio::test]
async fn test_not_found_fails_whole_fetch() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .expect(1)
        .mount(&server)
        .await;

    let err = fetch_roster(&roster_config(&server, 1)).await.unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 404 }));
    assert_eq!(err.to_string(), "HTTP request error. Response code: 404");
}

#[tokio::test]
async fn test_malformed_second_page_discards_first() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/list"))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "application/json")
                .set_body_string("[{\"id\": 2,"),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/list"))
        .respond_with(with_next(
            json_page(json!([{"id": 1}])),
            "/list?page=2",
        ))
        .mount(&server)
        .await;

    let template = RequestTemplate::parse(&format!("{}/list", server.uri())).unwrap();
    let err = fetch_all::<Value>(&HttpClient::new().unwrap(), template)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::MalformedBody);
}

#[tokio::test]
async fn test_binary_content_type_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "application/octet-stream")
                .set_body_bytes(vec![0u8, 1, 2]),
        )
        .mount(&server)
        .await;

    let err = fetch_roster(&roster_config(&server, 1)).await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "Content-Type is not recognized as a text type, got \"application/octet-stream\""
    );
}

#[tokio::test]
async fn test_endless_chain_stopped_by_page_limit() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/loop"))
        .respond_with(with_next(json_page(json!([1])), "/loop"))
        .expect(4)
        .mount(&server)
        .await;

    let template = RequestTemplate::parse(&format!("{}/loop", server.uri())).unwrap();
    let fetcher = PaginatedFetcher::new(HttpClient::new().unwrap())
        .with_options(FetchOptions::new().max_pages(4));
    let err = fetcher.fetch_all::<Value>(template).await.unwrap_err();

    assert!(matches!(err, Error::PageLimitExceeded { limit: 4 }));
}

//! DevToClient harness.
//!
//! Runs the real HTTP client against [`FakeDevToApi`], a local axum server
//! that pages an in-memory record list the way dev.to does.
//!
//! # What this covers
//!
//! - query parameters for paged and single-shot listings
//! - `X-Total-Count` passthrough, and its absence
//! - failures: non-success status, non-array body, unreachable host
//!
//! # Running
//!
//! ```sh
//! cargo test --test api_harness
//! ```

mod common;
use common::fake_devto_api::{FakeDevToApi, SeenRequest};
use common::*;

use folio_api::DevToClient;
use folio_core::{ArticleSource, ListQuery, SourceError};
use pretty_assertions::assert_eq;
use serde_json::json;

async fn api_with(records: u64) -> (FakeDevToApi, DevToClient) {
    let api = FakeDevToApi::start().await.unwrap();
    api.set_records(devto_records(1, records)).await;
    let client = DevToClient::new(api.base_url(), "folio-test").unwrap();
    (api, client)
}

#[tokio::test]
async fn paged_query_sends_page_and_per_page() {
    let (api, client) = api_with(20).await;

    let page = client.list_articles(ListQuery::paged(2, 6)).await.unwrap();

    assert_eq!(api.requests().await, vec![SeenRequest { page: Some(2), per_page: Some(6) }]);
    let ids: Vec<u64> = page.records.iter().map(|r| r["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, vec![7, 8, 9, 10, 11, 12]);
}

#[tokio::test]
async fn fixed_query_sends_only_per_page() {
    let (api, client) = api_with(20).await;

    let page = client.list_articles(ListQuery::fixed(3)).await.unwrap();

    assert_eq!(api.requests().await, vec![SeenRequest { page: None, per_page: Some(3) }]);
    assert_eq!(page.records.len(), 3);
}

#[tokio::test]
async fn total_count_header_is_passed_through() {
    let (_api, client) = api_with(45).await;
    let page = client.list_articles(ListQuery::paged(1, 6)).await.unwrap();
    assert_eq!(page.total_count, Some(45));
}

#[tokio::test]
async fn missing_total_count_is_none() {
    let (api, client) = api_with(45).await;
    api.hide_total().await;
    let page = client.list_articles(ListQuery::paged(1, 6)).await.unwrap();
    assert_eq!(page.total_count, None);
}

#[tokio::test]
async fn page_past_the_end_is_empty_not_an_error() {
    let (_api, client) = api_with(4).await;
    let page = client.list_articles(ListQuery::paged(9, 6)).await.unwrap();
    assert!(page.records.is_empty());
}

#[tokio::test]
async fn records_are_returned_raw() {
    let (api, client) = api_with(0).await;
    api.respond_with_body(json!([{ "id": 1 }, "junk", { "title": "no id" }])).await;

    let page = client.list_articles(ListQuery::fixed(6)).await.unwrap();
    assert_eq!(page.records.len(), 3, "filtering is the normalizer's job");
}

#[tokio::test]
async fn server_error_is_a_status_error() {
    let (api, client) = api_with(10).await;
    api.fail_with(500).await;

    let err = client.list_articles(ListQuery::paged(1, 6)).await.unwrap_err();
    assert_eq!(err, SourceError::Status { status: 500 });
}

#[tokio::test]
async fn not_found_is_a_status_error() {
    let (api, client) = api_with(10).await;
    api.fail_with(404).await;

    let err = client.list_articles(ListQuery::fixed(6)).await.unwrap_err();
    assert_eq!(err, SourceError::Status { status: 404 });
}

#[tokio::test]
async fn object_body_is_a_decode_error() {
    let (api, client) = api_with(0).await;
    api.respond_with_body(json!({ "error": "rate limited" })).await;

    let err = client.list_articles(ListQuery::fixed(6)).await.unwrap_err();
    assert!(matches!(err, SourceError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    // Bind then drop a listener so the port is known to be closed.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = DevToClient::new(format!("http://127.0.0.1:{port}"), "folio-test").unwrap();

    let err = client.list_articles(ListQuery::fixed(6)).await.unwrap_err();
    assert!(matches!(err, SourceError::Transport(_)), "got {err:?}");
}

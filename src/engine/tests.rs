//! Tests for engine module

use super::*;
use crate::http::HttpClientConfig;
use crate::pagination::PageNumberPaginator;
use serde_json::json;
use test_case::test_case;
use tracing_test::traced_test;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LISTING: &str = "/v1/hackers/programs";

fn programs_json(range: std::ops::Range<usize>, offers_bounties: bool) -> Vec<Value> {
    range
        .map(|i| {
            json!({
                "id": i.to_string(),
                "type": "program",
                "attributes": {"handle": format!("program-{i}"), "offers_bounties": offers_bounties}
            })
        })
        .collect()
}

async fn mount_page(server: &MockServer, page: u32, data: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path(LISTING))
        .and(query_param("page[number]", page.to_string()))
        .and(query_param("page[size]", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": data })))
        .expect(1)
        .mount(server)
        .await;
}

fn engine() -> FetchEngine {
    FetchEngine::new(HttpClient::with_config(HttpClientConfig::default()).unwrap())
}

fn ids(programs: &[Program]) -> Vec<String> {
    programs
        .iter()
        .filter_map(|p| p.id().map(str::to_string))
        .collect()
}

// ============================================================================
// FetchStats Tests
// ============================================================================

#[test]
fn test_fetch_stats_default() {
    let stats = FetchStats::default();
    assert_eq!(stats.requests, 0);
    assert_eq!(stats.pages_fetched, 0);
    assert_eq!(stats.records_fetched, 0);
    assert_eq!(stats.errors, 0);
}

#[test]
fn test_fetch_stats_mutations() {
    let mut stats = FetchStats::default();

    stats.add_request();
    stats.add_request();
    stats.add_page(100);
    stats.add_page(30);
    stats.add_error();
    stats.set_duration(1500);

    assert_eq!(stats.requests, 2);
    assert_eq!(stats.pages_fetched, 2);
    assert_eq!(stats.records_fetched, 130);
    assert_eq!(stats.errors, 1);
    assert_eq!(stats.duration_ms, 1500);
}

// ============================================================================
// FetchEngine Tests
// ============================================================================

#[test_case(&[30] ; "single short page")]
#[test_case(&[0] ; "single empty page")]
#[test_case(&[100, 0] ; "full page then empty page")]
#[test_case(&[100, 100, 30] ; "two full pages then short page")]
#[test_case(&[100, 100, 100, 1] ; "three full pages then one record")]
#[tokio::test]
async fn test_fetch_concatenates_pages_in_order(page_sizes: &[usize]) {
    let server = MockServer::start().await;

    let mut expected = Vec::new();
    let mut offset = 0;
    for (i, size) in page_sizes.iter().enumerate() {
        let data = programs_json(offset..offset + size, true);
        expected.extend((offset..offset + size).map(|n| n.to_string()));
        mount_page(&server, i as u32 + 1, data).await;
        offset += size;
    }

    let mut engine = engine();
    let url = format!("{}{LISTING}", server.uri());
    let outcome = engine
        .fetch_all(&url, &PageNumberPaginator::new(100))
        .await;

    assert!(outcome.is_complete());
    assert_eq!(ids(&outcome.programs), expected);
    assert_eq!(engine.stats().requests, page_sizes.len());
    assert_eq!(engine.stats().records_fetched, expected.len());
}

#[tokio::test]
async fn test_short_first_page_makes_one_request() {
    let server = MockServer::start().await;
    mount_page(&server, 1, programs_json(0..42, false)).await;

    let mut engine = engine();
    let url = format!("{}{LISTING}", server.uri());
    let outcome = engine.fetch_all(&url, &PageNumberPaginator::default()).await;

    assert_eq!(outcome.programs.len(), 42);
    assert!(matches!(
        outcome.stop,
        FetchStop::Finished(StopReason::ShortPage)
    ));
    assert_eq!(engine.stats().requests, 1);
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_scenario_230_programs_in_three_requests() {
    let server = MockServer::start().await;
    mount_page(&server, 1, programs_json(0..100, true)).await;
    mount_page(&server, 2, programs_json(100..200, true)).await;
    mount_page(&server, 3, programs_json(200..230, false)).await;

    let mut engine = engine();
    let url = format!("{}{LISTING}", server.uri());
    let outcome = engine.fetch_all(&url, &PageNumberPaginator::default()).await;

    assert!(outcome.is_complete());
    assert_eq!(outcome.programs.len(), 230);
    assert_eq!(engine.stats().pages_fetched, 3);
    assert_eq!(outcome.programs[199].offers_bounties(), Some(true));
    assert_eq!(outcome.programs[200].offers_bounties(), Some(false));
}

#[traced_test]
#[tokio::test]
async fn test_unauthorized_first_page_returns_empty_result() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(LISTING))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"errors": [{"title": "Unauthorized"}]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut engine = engine();
    let url = format!("{}{LISTING}", server.uri());
    let outcome = engine.fetch_all(&url, &PageNumberPaginator::default()).await;

    assert!(outcome.programs.is_empty());
    assert!(outcome.is_auth_failure());
    assert!(matches!(outcome.stop, FetchStop::Failed { page: 1, .. }));
    assert_eq!(engine.stats().requests, 1);
    assert_eq!(engine.stats().errors, 1);

    assert!(logs_contain("Fetching page 1..."));
    assert!(logs_contain("Error fetching programs on page 1: HTTP 401"));
    assert!(logs_contain(
        "Authentication failed. Please check your username and API key."
    ));
}

#[traced_test]
#[tokio::test]
async fn test_failure_mid_way_keeps_partial_results() {
    let server = MockServer::start().await;
    mount_page(&server, 1, programs_json(0..100, true)).await;

    Mock::given(method("GET"))
        .and(path(LISTING))
        .and(query_param("page[number]", "2"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let mut engine = engine();
    let url = format!("{}{LISTING}", server.uri());
    let outcome = engine.fetch_all(&url, &PageNumberPaginator::default()).await;

    assert_eq!(outcome.programs.len(), 100);
    assert!(!outcome.is_complete());
    assert!(!outcome.is_auth_failure());
    assert_eq!(outcome.error().and_then(Error::status), Some(500));
    assert!(matches!(outcome.stop, FetchStop::Failed { page: 2, .. }));

    assert!(logs_contain("Error fetching programs on page 2: HTTP 500: boom"));
    assert!(!logs_contain("Authentication failed"));
}

#[tokio::test]
async fn test_malformed_body_keeps_partial_results() {
    let server = MockServer::start().await;
    mount_page(&server, 1, programs_json(0..100, false)).await;

    Mock::given(method("GET"))
        .and(path(LISTING))
        .and(query_param("page[number]", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"data\": [truncated"))
        .mount(&server)
        .await;

    let mut engine = engine();
    let url = format!("{}{LISTING}", server.uri());
    let outcome = engine.fetch_all(&url, &PageNumberPaginator::default()).await;

    assert_eq!(outcome.programs.len(), 100);
    assert!(matches!(outcome.error(), Some(Error::Decode { .. })));
}

#[tokio::test]
async fn test_transport_failure_is_not_auth_failure() {
    let uri = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        format!("http://{}", listener.local_addr().unwrap())
    };

    let mut engine = engine();
    let outcome = engine
        .fetch_all(&format!("{uri}{LISTING}"), &PageNumberPaginator::default())
        .await;

    assert!(outcome.programs.is_empty());
    assert!(matches!(outcome.error(), Some(Error::Http(_))));
    assert!(!outcome.is_auth_failure());
}

#[traced_test]
#[tokio::test]
async fn test_page_limit_stops_endless_full_pages() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(LISTING))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": programs_json(0..100, true) })),
        )
        .expect(3)
        .mount(&server)
        .await;

    let mut engine = engine();
    let url = format!("{}{LISTING}", server.uri());
    let paginator = PageNumberPaginator::default().with_max_pages(3);
    let outcome = engine.fetch_all(&url, &paginator).await;

    assert!(matches!(
        outcome.stop,
        FetchStop::Finished(StopReason::PageLimit)
    ));
    assert_eq!(outcome.programs.len(), 300);
    assert!(logs_contain(
        "Stopped after 3 pages: page limit reached while pages were still full"
    ));
}

//! Custom Search provider against a mock HTTP server.

use httpmock::prelude::*;
use serde_json::json;
use xray::XrayError;
use xray::search::{
    DateRestrict, PageSpec, SearchOrchestrator, SearchProvider, SearchRequest, StopReason,
};

use super::fixture::{TestFixture, google, items, response_body};

fn request(query: &str, start: u32) -> SearchRequest<'_> {
    SearchRequest {
        query,
        page_size: 10,
        start,
        date_restrict: None,
    }
}

// =============================================================================
// Wire format
// =============================================================================

#[test]
fn test_request_carries_credentials_and_paging() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/customsearch/v1")
            .query_param("key", "key-abc")
            .query_param("cx", "cx-xyz")
            .query_param("q", "(site:jobs.lever.co) \"Security Engineer\"")
            .query_param("num", "5")
            .query_param("start", "6")
            .query_param("dateRestrict", "w1");
        then.status(200).json_body(response_body(&items("lever", 2)));
    });

    let provider = google(&server);
    let page = provider
        .search(&SearchRequest {
            query: "(site:jobs.lever.co) \"Security Engineer\"",
            page_size: 5,
            start: 6,
            date_restrict: Some(DateRestrict::W1),
        })
        .unwrap();

    mock.assert();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].link, "https://example.com/lever/0");
}

#[test]
fn test_missing_items_key_is_empty_page() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/customsearch/v1");
        then.status(200)
            .json_body(json!({ "kind": "customsearch#search", "searchInformation": { "totalResults": "0" } }));
    });

    let page = google(&server).search(&request("nothing", 1)).unwrap();
    mock.assert();
    assert!(page.is_empty());
}

#[test]
fn test_items_without_link_are_dropped() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/customsearch/v1");
        then.status(200).json_body(json!({
            "items": [
                { "title": "no link here" },
                { "link": "https://example.com/untitled" },
                { "title": "Kept", "link": "https://example.com/kept", "snippet": "s" }
            ]
        }));
    });

    let page = google(&server).search(&request("q", 1)).unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].title, "");
    assert_eq!(page[1].snippet, "s");
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn test_api_error_message_is_surfaced() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/customsearch/v1");
        then.status(429).json_body(json!({
            "error": { "code": 429, "message": "Quota exceeded for quota metric 'Queries'" }
        }));
    });

    let result = google(&server).search(&request("q", 1));
    assert!(matches!(result, Err(XrayError::SearchTransport(_))));
    assert_err_contains!(result, "Quota exceeded for quota metric");
}

#[test]
fn test_non_json_error_body_is_kept() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/customsearch/v1");
        then.status(502).body("<html>bad gateway</html>");
    });

    let result = google(&server).search(&request("q", 1));
    assert_err_contains!(result, "502");
}

#[test]
fn test_malformed_success_body_is_transport_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/customsearch/v1");
        then.status(200).body("{ not json");
    });

    let result = google(&server).search(&request("q", 1));
    assert_err_contains!(result, "decode response");
}

// =============================================================================
// Pagination over HTTP
// =============================================================================

#[test]
fn test_pagination_walks_offsets_until_empty_page() {
    let server = MockServer::start();
    let first = server.mock(|when, then| {
        when.method(GET).path("/customsearch/v1").query_param("start", "1");
        then.status(200).json_body(response_body(&items("p1", 10)));
    });
    let second = server.mock(|when, then| {
        when.method(GET).path("/customsearch/v1").query_param("start", "11");
        then.status(200).json_body(response_body(&items("p2", 10)));
    });
    let third = server.mock(|when, then| {
        when.method(GET).path("/customsearch/v1").query_param("start", "21");
        then.status(200).json_body(json!({}));
    });

    let fixture = TestFixture::new("test_pagination_walks_offsets_until_empty_page");
    let provider = google(&server);
    let ledger = fixture.ledger();
    let outcome = SearchOrchestrator::new(&provider, &ledger).paginate("q", &PageSpec::new(10, 5));

    first.assert();
    second.assert();
    third.assert();
    assert_eq!(outcome.items.len(), 20);
    assert_eq!(outcome.stop, StopReason::EmptyPage);
    assert_eq!(outcome.pages_fetched, 3);
    // The empty page was a completed call and is charged.
    assert_eq!(ledger.status().used, 3);
}

#[test]
fn test_failed_call_keeps_earlier_pages_and_is_not_charged() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/customsearch/v1").query_param("start", "1");
        then.status(200).json_body(response_body(&items("ok", 10)));
    });
    server.mock(|when, then| {
        when.method(GET).path("/customsearch/v1").query_param("start", "11");
        then.status(500).body("boom");
    });

    let fixture = TestFixture::new("test_failed_call_keeps_earlier_pages_and_is_not_charged");
    let provider = google(&server);
    let ledger = fixture.ledger();
    let outcome = SearchOrchestrator::new(&provider, &ledger).paginate("q", &PageSpec::new(10, 3));

    assert_eq!(outcome.items.len(), 10);
    assert_eq!(outcome.stop, StopReason::Failed);
    assert!(outcome.is_interrupted());
    assert_eq!(ledger.status().used, 1);
}

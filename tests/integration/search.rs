//! Public search, single page and aggregated, in both modes.

use gamma_sdk::mock::{json_response, text_response, MockTransport};
use gamma_sdk::{AsyncGammaClient, GammaClient, GammaError, PageBound, Query};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::fixtures;

fn paged_mock() -> MockTransport {
    MockTransport::new()
        .with_json("/public-search", fixtures::search_page(&["1", "2"], 45, true))
        .with_response_when(
            "/public-search",
            Query::from([("page", "2")]),
            json_response(200, &fixtures::search_page(&["3"], 45, true)),
        )
        .with_response_when(
            "/public-search",
            Query::from([("page", "3")]),
            json_response(200, &fixtures::search_page(&["4"], 45, false)),
        )
}

fn event_ids(response: &gamma_sdk::PublicSearchResponse) -> Vec<&str> {
    response.events.iter().map(|e| e.id.as_str()).collect()
}

fn pages(mock: &MockTransport) -> Vec<String> {
    mock.requests()
        .iter()
        .map(|r| r.query.get("page").unwrap_or_default().to_string())
        .collect()
}

#[test]
fn single_page_is_typed() {
    let mock = MockTransport::new().with_json(
        "/public-search",
        json!({"events": [fixtures::search_event("175976")]}),
    );
    let client = GammaClient::with_transport(mock.clone());

    let response = client.public_search("elon", &Query::new()).unwrap();
    assert_eq!(response.events.len(), 1);
    let market = &response.events[0].markets[0];
    assert_eq!(market.id, "1225133");
    assert_eq!(market.last_trade_price, Some(0.5));
    assert_eq!(response.pagination, None);
    assert_eq!(mock.requests()[0].query.get("q"), Some("elon"));
}

#[test]
fn empty_result() {
    let mock = MockTransport::new().with_json("/public-search", json!({"events": []}));
    let client = GammaClient::with_transport(mock);
    let response = client.public_search("nonexistent", &Query::new()).unwrap();
    assert!(response.events.is_empty());
}

#[test]
fn aggregation_stops_before_the_last_page_by_default() {
    let mock = paged_mock();
    let client = GammaClient::with_transport(mock.clone());

    let response = client.public_search_all("elon", &Query::new()).unwrap();
    assert_eq!(event_ids(&response), vec!["1", "2", "3"]);
    assert_eq!(response.pagination, None);
    assert_eq!(pages(&mock), vec!["1", "2"]);

    let first = &mock.requests()[0].query;
    assert_eq!(first.get("limit_per_type"), Some("20"));
    assert_eq!(first.get("type"), Some("events"));
    assert_eq!(first.get("sort"), Some("volume_24hr"));
}

#[test]
fn inclusive_bound_fetches_the_last_page() {
    let mock = paged_mock();
    let client = GammaClient::with_transport(mock.clone());

    let response = client
        .public_search_all_with("elon", &Query::new(), PageBound::Inclusive)
        .unwrap();
    assert_eq!(event_ids(&response), vec!["1", "2", "3", "4"]);
    assert_eq!(pages(&mock), vec!["1", "2", "3"]);
}

#[test]
fn exhausted_first_page_is_returned_unmodified() {
    let mock = MockTransport::new()
        .with_json("/public-search", fixtures::search_page(&["1"], 1, false));
    let client = GammaClient::with_transport(mock.clone());

    let response = client.public_search_all("elon", &Query::new()).unwrap();
    assert_eq!(event_ids(&response), vec!["1"]);
    assert!(response.pagination.is_some());
    assert_eq!(mock.request_count(), 1);
}

#[test]
fn a_failed_page_aborts_aggregation() {
    let mock = MockTransport::new()
        .with_json("/public-search", fixtures::search_page(&["1"], 45, true))
        .with_response_when(
            "/public-search",
            Query::from([("page", "2")]),
            text_response(502, "bad gateway"),
        );
    let client = GammaClient::with_transport(mock);

    let err = client.public_search_all("elon", &Query::new()).unwrap_err();
    assert!(matches!(err, GammaError::Api { status: 502, .. }));
}

#[test]
fn invalid_limit_is_rejected_before_any_request() {
    let mock = MockTransport::new();
    let client = GammaClient::with_transport(mock.clone());

    let err = client
        .public_search_all("elon", &Query::from([("limit_per_type", "0")]))
        .unwrap_err();
    assert!(matches!(err, GammaError::Validation(_)));
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
async fn async_aggregation_matches_blocking() {
    let mock = paged_mock();
    let client = AsyncGammaClient::with_transport(mock.clone());

    let response = client.public_search_all("elon", &Query::new()).await.unwrap();
    assert_eq!(event_ids(&response), vec!["1", "2", "3"]);
    assert_eq!(pages(&mock), vec!["1", "2"]);

    let inclusive = client
        .public_search_all_with("elon", &Query::new(), PageBound::Inclusive)
        .await
        .unwrap();
    assert_eq!(inclusive.events.len(), 4);
}

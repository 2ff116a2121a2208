//! URL resolution in both modes.

use gamma_sdk::error::TransportError;
use gamma_sdk::mock::{text_response, MockTransport};
use gamma_sdk::{AsyncGammaClient, GammaClient, GammaError, Resolved};
use serde_json::json;

use crate::fixtures;

#[test]
fn market_urls_resolve_to_markets() {
    let mock = MockTransport::new()
        .with_json("/markets/slug/foo-bar", json!([fixtures::market("7", "foo-bar")]));
    let client = GammaClient::with_transport(mock.clone());

    let resolved = client
        .resolve_url("https://polymarket.com/market/foo-bar")
        .unwrap();
    assert!(matches!(resolved, Some(Resolved::Market(ref m)) if m.id == "7"));
    assert_eq!(mock.paths(), vec!["/markets/slug/foo-bar"]);
}

#[test]
fn failed_market_lookup_falls_back_to_events() {
    let mock = MockTransport::new()
        .with_response("/markets/slug/us-election", text_response(500, "oops"))
        .with_json("/events/slug/us-election", fixtures::event("5", "us-election"));
    let client = GammaClient::with_transport(mock.clone());

    let resolved = client
        .resolve_url("https://polymarket.com/event/us-election")
        .unwrap();
    assert!(matches!(resolved, Some(Resolved::Event(ref e)) if e.id == "5"));
    assert_eq!(
        mock.paths(),
        vec!["/markets/slug/us-election", "/events/slug/us-election"]
    );
}

#[test]
fn empty_market_result_does_not_try_events() {
    let mock = MockTransport::new()
        .with_json("/markets/slug/gone", json!([]))
        .with_json("/events/slug/gone", fixtures::event("5", "gone"));
    let client = GammaClient::with_transport(mock.clone());

    assert_eq!(client.resolve_url("/market/gone").unwrap(), None);
    assert_eq!(mock.paths(), vec!["/markets/slug/gone"]);
}

#[test]
fn both_lookups_failing_yields_none() {
    let mock = MockTransport::new()
        .with_failure("/markets/slug/x", TransportError::Timeout("slow".to_string()));
    let client = GammaClient::with_transport(mock.clone());

    assert_eq!(client.resolve_url("https://polymarket.com/event/x").unwrap(), None);
    assert_eq!(mock.request_count(), 2);
}

#[test]
fn malformed_urls_fail_before_any_request() {
    let mock = MockTransport::new();
    let client = GammaClient::with_transport(mock.clone());

    for url in [
        "https://polymarket.com/foo",
        "https://polymarket.com/profile/0xabc",
        "https://polymarket.com/",
    ] {
        let err = client.resolve_url(url).unwrap_err();
        assert!(matches!(err, GammaError::Validation(_)), "{url}");
    }
    assert_eq!(mock.request_count(), 0);
}

#[test]
fn closed_client_resolves_to_none() {
    let mock = MockTransport::new()
        .with_json("/markets/slug/foo", json!([fixtures::market("7", "foo")]));
    let client = GammaClient::with_transport(mock.clone());
    client.close();

    assert_eq!(client.resolve_url("https://polymarket.com/market/foo").unwrap(), None);
    assert_eq!(mock.request_count(), 0);

    let err = client.markets().get_by_slug("foo").unwrap_err();
    assert!(matches!(err, GammaError::Closed));
}

#[tokio::test]
async fn closed_async_client_resolves_to_none() {
    let client = AsyncGammaClient::with_transport(MockTransport::new());
    client.close();

    let resolved = client
        .resolve_url("https://polymarket.com/event/us-election")
        .await
        .unwrap();
    assert_eq!(resolved, None);
    assert!(matches!(
        client.events().get_by_slug("us-election").await,
        Err(GammaError::Closed)
    ));
}

#[tokio::test]
async fn async_resolution_follows_the_same_order() {
    let mock = MockTransport::new()
        .with_response("/markets/slug/us-election", text_response(404, "not found"))
        .with_json("/events/slug/us-election", fixtures::event("5", "us-election"));
    let client = AsyncGammaClient::with_transport(mock);

    let resolved = client
        .resolve_url("https://polymarket.com/event/us-election")
        .await
        .unwrap();
    assert!(matches!(resolved, Some(Resolved::Event(_))));
}

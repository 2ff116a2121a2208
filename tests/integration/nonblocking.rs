//! Async facade over the mock transport.

use gamma_sdk::mock::{text_response, MockTransport};
use gamma_sdk::{AsyncGammaClient, GammaError, Payload, Query};
use serde_json::json;

use crate::fixtures;

#[tokio::test]
async fn sub_clients_mirror_the_blocking_facade() {
    let mock = MockTransport::new()
        .with_json("/events/slug/us-election", fixtures::event("5", "us-election"))
        .with_json("/tags", json!([fixtures::tag("1", "Crypto"), fixtures::tag("2", "Politics")]))
        .with_json("/markets/slug/empty", json!([]));
    let client = AsyncGammaClient::with_transport(mock.clone());

    let event = client.events().get_by_slug("us-election").await.unwrap();
    assert_eq!(event.id, "5");
    assert_eq!(event.markets.len(), 1);
    assert_eq!(event.tags[0].label.as_deref(), Some("Politics"));

    let tags = client.tags().list(&Query::new()).await.unwrap();
    assert_eq!(tags.len(), 2);

    assert_eq!(client.markets().get_by_slug("empty").await.unwrap(), None);
    assert_eq!(
        mock.paths(),
        vec!["/events/slug/us-election", "/tags", "/markets/slug/empty"]
    );
}

#[tokio::test]
async fn status_passes_json_through() {
    let mock = MockTransport::new().with_json("/status", json!({"status": "ok"}));
    let client = AsyncGammaClient::with_transport(mock);
    assert_eq!(
        client.status().await.unwrap(),
        Payload::Json(json!({"status": "ok"}))
    );
}

#[tokio::test]
async fn not_found_propagates() {
    let client = AsyncGammaClient::with_transport(MockTransport::new());
    let err = client.comments().get_by_id("missing").await.unwrap_err();
    assert!(matches!(err, GammaError::NotFound { status: 404, ref path } if path == "/comments/missing"));
}

#[tokio::test]
async fn closed_client_refuses_calls() {
    let mock = MockTransport::new().with_response("/status", text_response(200, "OK"));
    let client = AsyncGammaClient::with_transport(mock.clone());

    assert!(client.status().await.is_ok());
    client.close();
    assert!(client.is_closed());

    let err = client.series().list(&Query::new()).await.unwrap_err();
    assert!(matches!(err, GammaError::Closed));
    assert_eq!(mock.request_count(), 1);
}

#[test]
fn futures_run_on_a_plain_executor() {
    let mock = MockTransport::new().with_json("/markets/3", fixtures::market("3", "three"));
    let client = AsyncGammaClient::with_transport(mock);

    let market = tokio_test::block_on(client.markets().get_by_id("3")).unwrap();
    assert_eq!(market.slug, "three");
}

#[tokio::test]
async fn calls_are_send() {
    fn assert_send<T: Send>(value: T) -> T {
        value
    }

    let mock = MockTransport::new()
        .with_json("/markets/3", fixtures::market("3", "three"))
        .with_json("/public-search", json!({"events": []}));
    let client = AsyncGammaClient::with_transport(mock);
    let market = assert_send(client.markets().get_by_id("3")).await.unwrap();
    assert_eq!(market.id, "3");
    let page = assert_send(client.public_search_all("x", &Query::new()))
        .await
        .unwrap();
    assert!(page.events.is_empty());
}

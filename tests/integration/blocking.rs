//! Blocking facade over the mock transport.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use gamma_sdk::error::TransportError;
use gamma_sdk::http::{HttpRequest, HttpResponse};
use gamma_sdk::mock::{json_response, text_response, MockTransport};
use gamma_sdk::transport::Transport;
use gamma_sdk::{GammaClient, GammaError, Payload, Query};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::fixtures;

#[test]
fn market_by_id_is_typed() {
    let mock = MockTransport::new().with_json("/markets/12", fixtures::market("12", "will-it-rain"));
    let client = GammaClient::with_transport(mock.clone());

    let market = client.markets().get_by_id("12").unwrap();
    assert_eq!(market.id, "12");
    assert_eq!(market.outcome_labels(), vec!["Yes", "No"]);
    assert_eq!(market.token_ids(), vec!["111", "222"]);
    assert_eq!(market.volume, Some(12345.67));
    assert!(market.end_date.is_some());
    assert_eq!(mock.paths(), vec!["/markets/12"]);
}

#[test]
fn list_passes_query_through() {
    let mock = MockTransport::new().with_json(
        "/markets",
        json!([fixtures::market("1", "a"), fixtures::market("2", "b")]),
    );
    let client = GammaClient::with_transport(mock.clone());

    let query = Query::from([("active", "true"), ("limit", "2")]);
    let markets = client.markets().list(&query).unwrap();
    assert_eq!(markets.len(), 2);
    assert_eq!(mock.requests()[0].query, query);
}

#[test]
fn repeated_filters_reach_the_transport_in_order() {
    let mock = MockTransport::new().with_json(
        "/markets",
        json!([fixtures::market("1", "a"), fixtures::market("2", "b")]),
    );
    let client = GammaClient::with_transport(mock.clone());

    let query: Query = vec![("id", "1"), ("id", "2"), ("closed", "false")]
        .into_iter()
        .collect();
    client.markets().list(&query).unwrap();

    let sent = &mock.requests()[0].query;
    assert_eq!(
        sent.iter().collect::<Vec<_>>(),
        vec![("id", "1"), ("id", "2"), ("closed", "false")]
    );
}

#[test]
fn market_by_slug_accepts_object_array_and_empty() {
    let body = fixtures::market("7", "foo-bar");
    let object = MockTransport::new().with_json("/markets/slug/foo-bar", body.clone());
    let listed = MockTransport::new().with_json("/markets/slug/foo-bar", json!([body]));
    let empty = MockTransport::new().with_json("/markets/slug/foo-bar", json!([]));

    let from_object = GammaClient::with_transport(object)
        .markets()
        .get_by_slug("foo-bar")
        .unwrap();
    let from_array = GammaClient::with_transport(listed)
        .markets()
        .get_by_slug("foo-bar")
        .unwrap();
    let from_empty = GammaClient::with_transport(empty)
        .markets()
        .get_by_slug("foo-bar")
        .unwrap();

    assert!(from_object.is_some());
    assert_eq!(from_object, from_array);
    assert_eq!(from_empty, None);
}

#[test]
fn every_sub_client_hits_its_route() {
    let mock = MockTransport::new()
        .with_json("/sports", json!([{"sport": "nba"}]))
        .with_json("/sports/teams", json!([{"id": 1, "name": "Lakers", "league": "nba"}]))
        .with_json("/sports/market-types", json!({"marketTypes": ["moneyline"]}))
        .with_json("/tags/slug/politics", fixtures::tag("2", "Politics"))
        .with_json("/tags-related-tag-id/2", json!([{"id": "9", "tagID": 2, "relatedTagID": 3}]))
        .with_json("/tags/2/related", json!([fixtures::tag("3", "Elections")]))
        .with_json("/events/5/tags", json!([fixtures::tag("2", "Politics")]))
        .with_json("/series/4", json!({"id": "4", "title": "NBA", "slug": "nba", "active": true}))
        .with_json(
            "/comments/user/0xabc",
            json!([{"id": "c1", "comment": "gm", "userAddress": "0xabc"}]),
        )
        .with_json("/profiles/0xabc", json!({"proxyWallet": "0xabc", "name": "anon"}));
    let client = GammaClient::with_transport(mock.clone());

    assert_eq!(client.sports().metadata().unwrap()[0].sport, "nba");
    assert_eq!(client.sports().list_teams(&Query::new()).unwrap()[0].id, 1);
    assert_eq!(client.sports().market_types().unwrap(), vec!["moneyline"]);
    assert_eq!(client.tags().get_by_slug("politics").unwrap().id, "2");
    assert_eq!(client.tags().related_by_id("2").unwrap()[0]["relatedTagID"], json!(3));
    assert_eq!(client.tags().tags_related_to_id("2").unwrap()[0].id, "3");
    assert_eq!(client.events().tags("5").unwrap().len(), 1);
    assert!(client.series().get_by_id("4").unwrap().active);
    assert_eq!(client.comments().by_user("0xabc").unwrap()[0].comment, "gm");
    assert_eq!(
        client.profiles().get_by_address("0xabc").unwrap().name.as_deref(),
        Some("anon")
    );
    assert_eq!(mock.request_count(), 10);
}

#[test]
fn status_text_is_unquoted() {
    let mock = MockTransport::new().with_response("/status", text_response(200, "\"OK\""));
    let client = GammaClient::with_transport(mock);
    assert_eq!(client.status().unwrap(), Payload::Text("OK".to_string()));
}

#[test]
fn search_binds_q() {
    let mock = MockTransport::new().with_json("/search", json!({"events": [], "tags": []}));
    let client = GammaClient::with_transport(mock.clone());

    let body = client.search("trump", &Query::from([("limit", "3")])).unwrap();
    assert_eq!(body["tags"], json!([]));
    let request = &mock.requests()[0];
    assert_eq!(request.query.get("q"), Some("trump"));
    assert_eq!(request.query.get("limit"), Some("3"));
}

#[test]
fn http_errors_are_classified() {
    let mock = MockTransport::new()
        .with_response("/events/500", text_response(500, "boom"))
        .with_response("/events/404", json_response(404, &json!({"error": "missing"})));
    let client = GammaClient::with_transport(mock);

    let err = client.events().get_by_id("500").unwrap_err();
    assert!(matches!(err, GammaError::Api { status: 500, ref body } if body == "boom"));

    let err = client.events().get_by_id("404").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.status(), Some(404));
}

#[test]
fn transport_failures_are_wrapped() {
    let mock = MockTransport::new()
        .with_failure("/tags", TransportError::Connect("connection refused".to_string()));
    let client = GammaClient::with_transport(mock);

    let err = client.tags().list(&Query::new()).unwrap_err();
    assert!(matches!(err, GammaError::Transport(TransportError::Connect(_))));
}

#[test]
fn invalid_bodies_report_every_field() {
    let mock = MockTransport::new().with_json(
        "/markets",
        json!([fixtures::market("1", "ok"), {"id": "2", "question": "?"}]),
    );
    let client = GammaClient::with_transport(mock);

    match client.markets().list(&Query::new()).unwrap_err() {
        GammaError::Model(err) => {
            assert_eq!(err.model, "Market");
            for path in ["[1].conditionId", "[1].slug", "[1].outcomes", "[1].clobTokenIds"] {
                assert!(err.is_missing(path), "{path} should be reported");
            }
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn closed_client_refuses_calls() {
    let mock = MockTransport::new().with_json("/markets/1", fixtures::market("1", "a"));
    let client = GammaClient::with_transport(mock.clone());
    assert!(!client.is_closed());

    client.close();
    client.close();
    assert!(client.is_closed());

    let err = client.markets().get_by_id("1").unwrap_err();
    assert!(matches!(err, GammaError::Closed));
    assert!(matches!(client.status(), Err(GammaError::Closed)));
    assert_eq!(mock.request_count(), 0);
}

/// Transport that flags its own drop.
struct Flagged(Arc<AtomicBool>);

impl Transport for Flagged {
    fn send(&self, _request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        Ok(text_response(200, "OK"))
    }
}

impl Drop for Flagged {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

#[test]
fn transport_is_released_on_close_and_on_drop() {
    let closed = Arc::new(AtomicBool::new(false));
    let client = GammaClient::with_transport(Flagged(closed.clone()));
    client.close();
    assert!(closed.load(Ordering::SeqCst));

    let dropped = Arc::new(AtomicBool::new(false));
    {
        let client = GammaClient::with_transport(Flagged(dropped.clone()));
        assert!(client.status().is_ok());
        assert!(!dropped.load(Ordering::SeqCst));
    }
    assert!(dropped.load(Ordering::SeqCst));
}

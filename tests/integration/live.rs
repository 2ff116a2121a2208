//! Tests against the real Gamma API.

use gamma_sdk::{AsyncGammaClient, ClientConfig, GammaClient, Payload, Query};

fn live_config() -> ClientConfig {
    ClientConfig::load().unwrap_or_default()
}

#[test]
#[ignore = "requires network access"]
fn test_status() {
    let client = GammaClient::with_config(live_config()).unwrap();
    let status = client.status().unwrap();
    println!("Status: {status:?}");
    assert!(matches!(status, Payload::Text(_) | Payload::Json(_)));
}

#[test]
#[ignore = "requires network access"]
fn test_list_active_markets() {
    let client = GammaClient::with_config(live_config()).unwrap();
    let markets = client
        .markets()
        .list(&Query::from([("active", "true"), ("closed", "false"), ("limit", "5")]))
        .unwrap();
    assert!(markets.len() <= 5);
    for market in &markets {
        println!("{}: {}", market.slug, market.question);
    }
}

#[tokio::test]
#[ignore = "requires network access"]
async fn test_public_search() {
    let client = AsyncGammaClient::with_config(live_config()).unwrap();
    let response = client
        .public_search("bitcoin", &Query::from([("limit_per_type", "5")]))
        .await
        .unwrap();
    println!("Found {} events", response.events.len());
}

#[tokio::test]
#[ignore = "requires network access"]
async fn test_tags() {
    let client = AsyncGammaClient::with_config(live_config()).unwrap();
    let tags = client
        .tags()
        .list(&Query::from([("limit", "10")]))
        .await
        .unwrap();
    assert!(!tags.is_empty());
}

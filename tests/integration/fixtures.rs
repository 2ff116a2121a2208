//! Canned upstream bodies.

use serde_json::{json, Value};

pub fn market(id: &str, slug: &str) -> Value {
    json!({
        "id": id,
        "question": format!("Question for {slug}?"),
        "conditionId": format!("0xcond{id}"),
        "slug": slug,
        "outcomes": "[\"Yes\", \"No\"]",
        "outcomePrices": "[\"0.42\", \"0.58\"]",
        "clobTokenIds": "[\"111\", \"222\"]",
        "volume": "12345.67",
        "endDate": "2026-01-30 19:37:52+00",
        "active": true
    })
}

pub fn event(id: &str, slug: &str) -> Value {
    json!({
        "id": id,
        "slug": slug,
        "title": format!("Event {slug}"),
        "startDate": "2026-01-23T17:00:00Z",
        "markets": [market(&format!("{id}1"), &format!("{slug}-yes"))],
        "tags": [{"id": "2", "label": "Politics", "slug": "politics"}]
    })
}

pub fn tag(id: &str, label: &str) -> Value {
    json!({"id": id, "label": label, "slug": label.to_lowercase()})
}

pub fn search_market() -> Value {
    json!({
        "id": "1225133",
        "question": "Will Elon Musk post 0-19 tweets?",
        "conditionId": "0x94491b6c74801148fc60e613c1bb5fe187501a656148f051cdb57c1890195f27",
        "slug": "elon-musk-tweets-0-19",
        "lastTradePrice": 0.5,
        "bestAsk": 0.51,
        "bestBid": 0.49
    })
}

pub fn search_event(id: &str) -> Value {
    json!({
        "id": id,
        "slug": format!("event-{id}"),
        "title": "Elon Musk # tweets January 23 - January 30, 2026?",
        "markets": [search_market()]
    })
}

/// One `/public-search` page with the given events and paging block.
pub fn search_page(event_ids: &[&str], total_results: i64, has_more: bool) -> Value {
    json!({
        "events": event_ids.iter().map(|id| search_event(id)).collect::<Vec<_>>(),
        "pagination": {"hasMore": has_more, "totalResults": total_results}
    })
}

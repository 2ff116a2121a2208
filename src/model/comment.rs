use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::schema::{Field, Kind};
use super::Model;

const FIELDS: &[Field] = &[
    Field::required("id", "id", Kind::Str),
    Field::required("comment", "comment", Kind::Str),
    Field::required("user_address", "userAddress", Kind::Str),
    Field::optional("user_name", "userName", Kind::Str),
    Field::optional("proxy_wallet", "proxyWallet", Kind::Str),
    Field::optional("market_id", "marketId", Kind::Str),
    Field::optional("event_id", "eventId", Kind::Str),
    Field::optional("created_at", "createdAt", Kind::Timestamp),
    Field::optional("updated_at", "updatedAt", Kind::Timestamp),
];

/// A user comment on a market or event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub comment: String,
    #[serde(alias = "user_address")]
    pub user_address: String,
    #[serde(alias = "user_name")]
    pub user_name: Option<String>,
    #[serde(alias = "proxy_wallet")]
    pub proxy_wallet: Option<String>,
    #[serde(alias = "market_id")]
    pub market_id: Option<String>,
    #[serde(alias = "event_id")]
    pub event_id: Option<String>,
    #[serde(default, alias = "created_at", with = "crate::datetime::flexible")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, alias = "updated_at", with = "crate::datetime::flexible")]
    pub updated_at: Option<OffsetDateTime>,
}

impl Model for Comment {
    const NAME: &'static str = "Comment";
    const FIELDS: &'static [Field] = FIELDS;
}

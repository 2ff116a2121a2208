use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::de;
use super::schema::{Field, Kind};
use super::{Model, StringOrList};

const FIELDS: &[Field] = &[
    Field::required("id", "id", Kind::Str),
    Field::required("question", "question", Kind::Str),
    Field::required("condition_id", "conditionId", Kind::Str),
    Field::required("slug", "slug", Kind::Str),
    Field::required("outcomes", "outcomes", Kind::StringOrList),
    Field::required("clob_token_ids", "clobTokenIds", Kind::StringOrList),
    Field::optional("description", "description", Kind::Str),
    Field::optional("image", "image", Kind::Str),
    Field::optional("icon", "icon", Kind::Str),
    Field::optional("twitter_card_image", "twitterCardImage", Kind::Str),
    Field::optional("resolution_source", "resolutionSource", Kind::Str),
    Field::optional("start_date", "startDate", Kind::Timestamp),
    Field::optional("end_date", "endDate", Kind::Timestamp),
    Field::optional("end_date_iso", "endDateIso", Kind::Str),
    Field::optional("created_at", "createdAt", Kind::Timestamp),
    Field::optional("updated_at", "updatedAt", Kind::Timestamp),
    Field::optional("category", "category", Kind::Str),
    Field::optional("amm_type", "ammType", Kind::Str),
    Field::optional("liquidity", "liquidity", Kind::Float),
    Field::optional("liquidity_num", "liquidityNum", Kind::Float),
    Field::optional("volume", "volume", Kind::Float),
    Field::optional("volume_num", "volumeNum", Kind::Float),
    Field::optional("volume_24hr", "volume24hr", Kind::Float),
    Field::optional("outcome_prices", "outcomePrices", Kind::StringOrList),
    Field::optional("group_item_title", "groupItemTitle", Kind::Str),
    Field::optional("group_item_threshold", "groupItemThreshold", Kind::Str),
    Field::optional("question_id", "questionId", Kind::Str),
    Field::optional("rewards_min_size", "rewardsMinSize", Kind::Float),
    Field::optional("rewards_max_spread", "rewardsMaxSpread", Kind::Float),
    Field::optional("spread", "spread", Kind::Float),
    Field::optional("last_trade_price", "lastTradePrice", Kind::Float),
    Field::optional("best_bid", "bestBid", Kind::Float),
    Field::optional("best_ask", "bestAsk", Kind::Float),
    Field::optional("enable_order_book", "enableOrderBook", Kind::Bool),
    Field::optional("accepting_orders", "acceptingOrders", Kind::Bool),
    Field::optional("neg_risk", "negRisk", Kind::Bool),
    Field::defaulted("active", "active", Kind::Bool),
    Field::defaulted("closed", "closed", Kind::Bool),
    Field::defaulted("archived", "archived", Kind::Bool),
    Field::defaulted("restricted", "restricted", Kind::Bool),
    Field::optional("event_id", "eventId", Kind::Str),
];

/// A single Polymarket market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    pub id: String,
    pub question: String,
    /// On-chain condition identifier.
    #[serde(alias = "condition_id")]
    pub condition_id: String,
    pub slug: String,
    pub outcomes: StringOrList,
    /// CLOB token IDs, one per outcome.
    #[serde(alias = "clob_token_ids")]
    pub clob_token_ids: StringOrList,

    pub description: Option<String>,
    pub image: Option<String>,
    pub icon: Option<String>,
    #[serde(alias = "twitter_card_image")]
    pub twitter_card_image: Option<String>,
    #[serde(alias = "resolution_source")]
    pub resolution_source: Option<String>,
    #[serde(default, alias = "start_date", with = "crate::datetime::flexible")]
    pub start_date: Option<OffsetDateTime>,
    #[serde(default, alias = "end_date", with = "crate::datetime::flexible")]
    pub end_date: Option<OffsetDateTime>,
    #[serde(alias = "end_date_iso")]
    pub end_date_iso: Option<String>,
    #[serde(default, alias = "created_at", with = "crate::datetime::flexible")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, alias = "updated_at", with = "crate::datetime::flexible")]
    pub updated_at: Option<OffsetDateTime>,
    pub category: Option<String>,
    #[serde(alias = "amm_type")]
    pub amm_type: Option<String>,

    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub liquidity: Option<f64>,
    #[serde(default, alias = "liquidity_num", deserialize_with = "de::lenient_f64")]
    pub liquidity_num: Option<f64>,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub volume: Option<f64>,
    #[serde(default, alias = "volume_num", deserialize_with = "de::lenient_f64")]
    pub volume_num: Option<f64>,
    #[serde(default, alias = "volume_24hr", deserialize_with = "de::lenient_f64")]
    pub volume_24hr: Option<f64>,
    #[serde(alias = "outcome_prices")]
    pub outcome_prices: Option<StringOrList>,

    #[serde(alias = "group_item_title")]
    pub group_item_title: Option<String>,
    #[serde(alias = "group_item_threshold")]
    pub group_item_threshold: Option<String>,
    #[serde(alias = "question_id")]
    pub question_id: Option<String>,
    #[serde(default, alias = "rewards_min_size", deserialize_with = "de::lenient_f64")]
    pub rewards_min_size: Option<f64>,
    #[serde(default, alias = "rewards_max_spread", deserialize_with = "de::lenient_f64")]
    pub rewards_max_spread: Option<f64>,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub spread: Option<f64>,
    #[serde(default, alias = "last_trade_price", deserialize_with = "de::lenient_f64")]
    pub last_trade_price: Option<f64>,
    #[serde(default, alias = "best_bid", deserialize_with = "de::lenient_f64")]
    pub best_bid: Option<f64>,
    #[serde(default, alias = "best_ask", deserialize_with = "de::lenient_f64")]
    pub best_ask: Option<f64>,
    #[serde(alias = "enable_order_book")]
    pub enable_order_book: Option<bool>,
    #[serde(alias = "accepting_orders")]
    pub accepting_orders: Option<bool>,
    #[serde(alias = "neg_risk")]
    pub neg_risk: Option<bool>,

    #[serde(default = "de::default_true", deserialize_with = "de::null_as_true")]
    pub active: bool,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub closed: bool,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub archived: bool,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub restricted: bool,
    #[serde(alias = "event_id")]
    pub event_id: Option<String>,
}

impl Model for Market {
    const NAME: &'static str = "Market";
    const FIELDS: &'static [Field] = FIELDS;
}

impl Market {
    /// Outcome labels as a list.
    pub fn outcome_labels(&self) -> Vec<String> {
        self.outcomes.values()
    }

    /// CLOB token IDs as a list.
    pub fn token_ids(&self) -> Vec<String> {
        self.clob_token_ids.values()
    }

    /// Outcome prices parsed as floats, skipping unparseable entries.
    pub fn prices(&self) -> Vec<f64> {
        self.outcome_prices
            .as_ref()
            .map(|prices| {
                prices
                    .values()
                    .iter()
                    .filter_map(|p| p.parse().ok())
                    .collect()
            })
            .unwrap_or_default()
    }
}

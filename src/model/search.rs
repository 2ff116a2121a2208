use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use time::OffsetDateTime;

use super::de;
use super::schema::{Field, Kind};
use super::{Model, StringOrList};

const MARKET_FIELDS: &[Field] = &[
    Field::required("id", "id", Kind::Str),
    Field::required("question", "question", Kind::Str),
    Field::required("condition_id", "conditionId", Kind::Str),
    Field::required("slug", "slug", Kind::Str),
    Field::optional("resolution_source", "resolutionSource", Kind::Str),
    Field::optional("end_date", "endDate", Kind::Timestamp),
    Field::optional("start_date", "startDate", Kind::Timestamp),
    Field::optional("image", "image", Kind::Str),
    Field::optional("icon", "icon", Kind::Str),
    Field::optional("description", "description", Kind::Str),
    Field::optional("outcomes", "outcomes", Kind::StringOrList),
    Field::optional("outcome_prices", "outcomePrices", Kind::StringOrList),
    Field::optional("market_maker_address", "marketMakerAddress", Kind::Str),
    Field::optional("closed_time", "closedTime", Kind::Timestamp),
    Field::optional("submitted_by", "submitted_by", Kind::Str),
    Field::optional("resolved_by", "resolvedBy", Kind::Str),
    Field::optional("group_item_title", "groupItemTitle", Kind::Str),
    Field::optional("group_item_threshold", "groupItemThreshold", Kind::Str),
    Field::optional("question_id", "questionID", Kind::Str),
    Field::optional("uma_end_date", "umaEndDate", Kind::Timestamp),
    Field::optional("order_price_min_tick_size", "orderPriceMinTickSize", Kind::Float),
    Field::optional("order_min_size", "orderMinSize", Kind::Float),
    Field::optional("uma_resolution_status", "umaResolutionStatus", Kind::Str),
    Field::optional("volume_num", "volumeNum", Kind::Float),
    Field::optional("end_date_iso", "endDateIso", Kind::Str),
    Field::optional("start_date_iso", "startDateIso", Kind::Str),
    Field::optional("has_reviewed_dates", "hasReviewedDates", Kind::Bool),
    Field::optional("clob_token_ids", "clobTokenIds", Kind::StringOrList),
    Field::optional("uma_bond", "umaBond", Kind::Str),
    Field::optional("uma_reward", "umaReward", Kind::Str),
    Field::optional("volume_1wk_clob", "volume1wkClob", Kind::Float),
    Field::optional("volume_1mo_clob", "volume1moClob", Kind::Float),
    Field::optional("volume_1yr_clob", "volume1yrClob", Kind::Float),
    Field::optional("volume_clob", "volumeClob", Kind::Float),
    Field::optional("custom_liveness", "customLiveness", Kind::Int),
    Field::optional("accepting_orders", "acceptingOrders", Kind::Bool),
    Field::optional("neg_risk_request_id", "negRiskRequestID", Kind::Str),
    Field::optional("ready", "ready", Kind::Bool),
    Field::optional("funded", "funded", Kind::Bool),
    Field::optional("accepting_orders_timestamp", "acceptingOrdersTimestamp", Kind::Timestamp),
    Field::optional("cyom", "cyom", Kind::Bool),
    Field::optional(
        "pager_duty_notification_enabled",
        "pagerDutyNotificationEnabled",
        Kind::Bool,
    ),
    Field::optional("approved", "approved", Kind::Bool),
    Field::optional("rewards_min_size", "rewardsMinSize", Kind::Float),
    Field::optional("rewards_max_spread", "rewardsMaxSpread", Kind::Float),
    Field::optional("spread", "spread", Kind::Float),
    Field::optional("automatically_resolved", "automaticallyResolved", Kind::Bool),
    Field::optional("last_trade_price", "lastTradePrice", Kind::Float),
    Field::optional("best_ask", "bestAsk", Kind::Float),
    Field::optional("best_bid", "bestBid", Kind::Float),
    Field::optional("automatically_active", "automaticallyActive", Kind::Bool),
    Field::optional("clear_book_on_start", "clearBookOnStart", Kind::Bool),
    Field::optional("manual_activation", "manualActivation", Kind::Bool),
    Field::optional("neg_risk_other", "negRiskOther", Kind::Bool),
    Field::optional("uma_resolution_statuses", "umaResolutionStatuses", Kind::Str),
    Field::optional("pending_deployment", "pendingDeployment", Kind::Bool),
    Field::optional("deploying", "deploying", Kind::Bool),
    Field::optional("deploying_timestamp", "deployingTimestamp", Kind::Timestamp),
    Field::optional("rfq_enabled", "rfqEnabled", Kind::Bool),
    Field::optional("holding_rewards_enabled", "holdingRewardsEnabled", Kind::Bool),
    Field::optional("fees_enabled", "feesEnabled", Kind::Bool),
    Field::optional("requires_translation", "requiresTranslation", Kind::Bool),
    Field::defaulted("active", "active", Kind::Bool),
    Field::defaulted("closed", "closed", Kind::Bool),
    Field::defaulted("archived", "archived", Kind::Bool),
    Field::defaulted("restricted", "restricted", Kind::Bool),
    Field::defaulted("new", "new", Kind::Bool),
    Field::defaulted("featured", "featured", Kind::Bool),
    Field::optional("liquidity", "liquidity", Kind::Float),
    Field::optional("volume", "volume", Kind::Float),
    Field::optional("neg_risk", "negRisk", Kind::Bool),
];

const EVENT_FIELDS: &[Field] = &[
    Field::required("id", "id", Kind::Str),
    Field::optional("ticker", "ticker", Kind::Str),
    Field::required("slug", "slug", Kind::Str),
    Field::required("title", "title", Kind::Str),
    Field::optional("description", "description", Kind::Str),
    Field::optional("resolution_source", "resolutionSource", Kind::Str),
    Field::optional("start_date", "startDate", Kind::Timestamp),
    Field::optional("creation_date", "creationDate", Kind::Timestamp),
    Field::optional("end_date", "endDate", Kind::Timestamp),
    Field::optional("image", "image", Kind::Str),
    Field::optional("icon", "icon", Kind::Str),
    Field::defaulted("active", "active", Kind::Bool),
    Field::defaulted("closed", "closed", Kind::Bool),
    Field::defaulted("archived", "archived", Kind::Bool),
    Field::defaulted("new", "new", Kind::Bool),
    Field::defaulted("featured", "featured", Kind::Bool),
    Field::defaulted("restricted", "restricted", Kind::Bool),
    Field::optional("liquidity", "liquidity", Kind::Float),
    Field::optional("volume", "volume", Kind::Float),
    Field::optional("open_interest", "openInterest", Kind::Float),
    Field::optional("created_at", "createdAt", Kind::Timestamp),
    Field::optional("updated_at", "updatedAt", Kind::Timestamp),
    Field::optional("competitive", "competitive", Kind::Float),
    Field::optional("volume_24hr", "volume24hr", Kind::Float),
    Field::optional("volume_1wk", "volume1wk", Kind::Float),
    Field::optional("volume_1mo", "volume1mo", Kind::Float),
    Field::optional("volume_1yr", "volume1yr", Kind::Float),
    Field::optional("enable_order_book", "enableOrderBook", Kind::Bool),
    Field::optional("liquidity_clob", "liquidityClob", Kind::Float),
    Field::optional("neg_risk", "negRisk", Kind::Bool),
    Field::optional("neg_risk_market_id", "negRiskMarketID", Kind::Str),
    Field::optional("comment_count", "commentCount", Kind::Int),
    Field::defaulted("markets", "markets", Kind::Many(MARKET_FIELDS)),
];

const PAGINATION_FIELDS: &[Field] = &[
    Field::optional("total_results", "totalResults", Kind::Int),
    Field::defaulted("has_more", "hasMore", Kind::Bool),
];

const RESPONSE_FIELDS: &[Field] = &[
    Field::defaulted("events", "events", Kind::Many(EVENT_FIELDS)),
    Field::optional("pagination", "pagination", Kind::Nested(PAGINATION_FIELDS)),
];

/// Market entry of a public search result.
///
/// A wider, looser shape than [`super::Market`]: outcome and token lists are
/// optional here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicSearchMarket {
    pub id: String,
    pub question: String,
    #[serde(alias = "condition_id")]
    pub condition_id: String,
    pub slug: String,
    #[serde(alias = "resolution_source")]
    pub resolution_source: Option<String>,
    #[serde(default, alias = "end_date", with = "crate::datetime::flexible")]
    pub end_date: Option<OffsetDateTime>,
    #[serde(default, alias = "start_date", with = "crate::datetime::flexible")]
    pub start_date: Option<OffsetDateTime>,
    pub image: Option<String>,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub outcomes: Option<StringOrList>,
    #[serde(alias = "outcome_prices")]
    pub outcome_prices: Option<StringOrList>,
    #[serde(alias = "market_maker_address")]
    pub market_maker_address: Option<String>,
    #[serde(default, alias = "closed_time", with = "crate::datetime::flexible")]
    pub closed_time: Option<OffsetDateTime>,
    #[serde(rename = "submitted_by")]
    pub submitted_by: Option<String>,
    #[serde(alias = "resolved_by")]
    pub resolved_by: Option<String>,
    #[serde(alias = "group_item_title")]
    pub group_item_title: Option<String>,
    #[serde(alias = "group_item_threshold")]
    pub group_item_threshold: Option<String>,
    #[serde(rename = "questionID", alias = "question_id")]
    pub question_id: Option<String>,
    #[serde(default, alias = "uma_end_date", with = "crate::datetime::flexible")]
    pub uma_end_date: Option<OffsetDateTime>,
    #[serde(
        default,
        alias = "order_price_min_tick_size",
        deserialize_with = "de::lenient_f64"
    )]
    pub order_price_min_tick_size: Option<f64>,
    #[serde(default, alias = "order_min_size", deserialize_with = "de::lenient_f64")]
    pub order_min_size: Option<f64>,
    #[serde(alias = "uma_resolution_status")]
    pub uma_resolution_status: Option<String>,
    #[serde(default, alias = "volume_num", deserialize_with = "de::lenient_f64")]
    pub volume_num: Option<f64>,
    #[serde(alias = "end_date_iso")]
    pub end_date_iso: Option<String>,
    #[serde(alias = "start_date_iso")]
    pub start_date_iso: Option<String>,
    #[serde(alias = "has_reviewed_dates")]
    pub has_reviewed_dates: Option<bool>,
    #[serde(alias = "clob_token_ids")]
    pub clob_token_ids: Option<StringOrList>,
    #[serde(alias = "uma_bond")]
    pub uma_bond: Option<String>,
    #[serde(alias = "uma_reward")]
    pub uma_reward: Option<String>,
    #[serde(default, alias = "volume_1wk_clob", deserialize_with = "de::lenient_f64")]
    pub volume_1wk_clob: Option<f64>,
    #[serde(default, alias = "volume_1mo_clob", deserialize_with = "de::lenient_f64")]
    pub volume_1mo_clob: Option<f64>,
    #[serde(default, alias = "volume_1yr_clob", deserialize_with = "de::lenient_f64")]
    pub volume_1yr_clob: Option<f64>,
    #[serde(default, alias = "volume_clob", deserialize_with = "de::lenient_f64")]
    pub volume_clob: Option<f64>,
    #[serde(default, alias = "custom_liveness", deserialize_with = "de::lenient_i64")]
    pub custom_liveness: Option<i64>,
    #[serde(alias = "accepting_orders")]
    pub accepting_orders: Option<bool>,
    #[serde(rename = "negRiskRequestID", alias = "neg_risk_request_id")]
    pub neg_risk_request_id: Option<String>,
    pub ready: Option<bool>,
    pub funded: Option<bool>,
    #[serde(
        default,
        alias = "accepting_orders_timestamp",
        with = "crate::datetime::flexible"
    )]
    pub accepting_orders_timestamp: Option<OffsetDateTime>,
    pub cyom: Option<bool>,
    #[serde(alias = "pager_duty_notification_enabled")]
    pub pager_duty_notification_enabled: Option<bool>,
    pub approved: Option<bool>,
    #[serde(default, alias = "rewards_min_size", deserialize_with = "de::lenient_f64")]
    pub rewards_min_size: Option<f64>,
    #[serde(default, alias = "rewards_max_spread", deserialize_with = "de::lenient_f64")]
    pub rewards_max_spread: Option<f64>,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub spread: Option<f64>,
    #[serde(alias = "automatically_resolved")]
    pub automatically_resolved: Option<bool>,
    #[serde(default, alias = "last_trade_price", deserialize_with = "de::lenient_f64")]
    pub last_trade_price: Option<f64>,
    #[serde(default, alias = "best_ask", deserialize_with = "de::lenient_f64")]
    pub best_ask: Option<f64>,
    #[serde(default, alias = "best_bid", deserialize_with = "de::lenient_f64")]
    pub best_bid: Option<f64>,
    #[serde(alias = "automatically_active")]
    pub automatically_active: Option<bool>,
    #[serde(alias = "clear_book_on_start")]
    pub clear_book_on_start: Option<bool>,
    #[serde(alias = "manual_activation")]
    pub manual_activation: Option<bool>,
    #[serde(alias = "neg_risk_other")]
    pub neg_risk_other: Option<bool>,
    #[serde(alias = "uma_resolution_statuses")]
    pub uma_resolution_statuses: Option<String>,
    #[serde(alias = "pending_deployment")]
    pub pending_deployment: Option<bool>,
    pub deploying: Option<bool>,
    #[serde(default, alias = "deploying_timestamp", with = "crate::datetime::flexible")]
    pub deploying_timestamp: Option<OffsetDateTime>,
    #[serde(alias = "rfq_enabled")]
    pub rfq_enabled: Option<bool>,
    #[serde(alias = "holding_rewards_enabled")]
    pub holding_rewards_enabled: Option<bool>,
    #[serde(alias = "fees_enabled")]
    pub fees_enabled: Option<bool>,
    #[serde(alias = "requires_translation")]
    pub requires_translation: Option<bool>,

    #[serde(default = "de::default_true", deserialize_with = "de::null_as_true")]
    pub active: bool,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub closed: bool,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub archived: bool,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub restricted: bool,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub new: bool,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub featured: bool,

    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub liquidity: Option<f64>,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub volume: Option<f64>,
    #[serde(alias = "neg_risk")]
    pub neg_risk: Option<bool>,
}

impl Model for PublicSearchMarket {
    const NAME: &'static str = "PublicSearchMarket";
    const FIELDS: &'static [Field] = MARKET_FIELDS;
}

/// Event entry of a public search result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicSearchEvent {
    pub id: String,
    pub ticker: Option<String>,
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    #[serde(alias = "resolution_source")]
    pub resolution_source: Option<String>,
    #[serde(default, alias = "start_date", with = "crate::datetime::flexible")]
    pub start_date: Option<OffsetDateTime>,
    #[serde(default, alias = "creation_date", with = "crate::datetime::flexible")]
    pub creation_date: Option<OffsetDateTime>,
    #[serde(default, alias = "end_date", with = "crate::datetime::flexible")]
    pub end_date: Option<OffsetDateTime>,
    pub image: Option<String>,
    pub icon: Option<String>,

    #[serde(default = "de::default_true", deserialize_with = "de::null_as_true")]
    pub active: bool,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub closed: bool,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub archived: bool,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub new: bool,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub featured: bool,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub restricted: bool,

    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub liquidity: Option<f64>,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub volume: Option<f64>,
    #[serde(default, alias = "open_interest", deserialize_with = "de::lenient_f64")]
    pub open_interest: Option<f64>,
    #[serde(default, alias = "created_at", with = "crate::datetime::flexible")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, alias = "updated_at", with = "crate::datetime::flexible")]
    pub updated_at: Option<OffsetDateTime>,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub competitive: Option<f64>,
    #[serde(default, alias = "volume_24hr", deserialize_with = "de::lenient_f64")]
    pub volume_24hr: Option<f64>,
    #[serde(default, alias = "volume_1wk", deserialize_with = "de::lenient_f64")]
    pub volume_1wk: Option<f64>,
    #[serde(default, alias = "volume_1mo", deserialize_with = "de::lenient_f64")]
    pub volume_1mo: Option<f64>,
    #[serde(default, alias = "volume_1yr", deserialize_with = "de::lenient_f64")]
    pub volume_1yr: Option<f64>,
    #[serde(alias = "enable_order_book")]
    pub enable_order_book: Option<bool>,
    #[serde(default, alias = "liquidity_clob", deserialize_with = "de::lenient_f64")]
    pub liquidity_clob: Option<f64>,
    #[serde(alias = "neg_risk")]
    pub neg_risk: Option<bool>,
    #[serde(rename = "negRiskMarketID", alias = "neg_risk_market_id")]
    pub neg_risk_market_id: Option<String>,
    #[serde(default, alias = "comment_count", deserialize_with = "de::lenient_i64")]
    pub comment_count: Option<i64>,

    #[serde(default, deserialize_with = "de::null_as_default")]
    pub markets: Vec<PublicSearchMarket>,
}

impl Model for PublicSearchEvent {
    const NAME: &'static str = "PublicSearchEvent";
    const FIELDS: &'static [Field] = EVENT_FIELDS;
}

/// Paging metadata of a public search page. Keys beyond the two the pager
/// reads are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default, alias = "total_results", deserialize_with = "de::lenient_i64")]
    pub total_results: Option<i64>,
    #[serde(default, alias = "has_more", deserialize_with = "de::null_as_default")]
    pub has_more: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One page (or the aggregation of several pages) of `/public-search`.
///
/// `pagination` is `None` for a non-paginated or exhausted result, and
/// always for an aggregated one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicSearchResponse {
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub events: Vec<PublicSearchEvent>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

impl Model for PublicSearchResponse {
    const NAME: &'static str = "PublicSearchResponse";
    const FIELDS: &'static [Field] = RESPONSE_FIELDS;
}

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::de;
use super::schema::{Field, Kind};
use super::{Market, Model, Tag};

const FIELDS: &[Field] = &[
    Field::required("id", "id", Kind::Str),
    Field::optional("ticker", "ticker", Kind::Str),
    Field::required("slug", "slug", Kind::Str),
    Field::required("title", "title", Kind::Str),
    Field::optional("description", "description", Kind::Str),
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
    Field::optional("volume_24hr", "volume24hr", Kind::Float),
    Field::optional("open_interest", "openInterest", Kind::Float),
    Field::optional("comment_count", "commentCount", Kind::Int),
    Field::optional("start_date", "startDate", Kind::Timestamp),
    Field::optional("end_date", "endDate", Kind::Timestamp),
    Field::optional("creation_date", "creationDate", Kind::Timestamp),
    Field::optional("created_at", "createdAt", Kind::Timestamp),
    Field::optional("updated_at", "updatedAt", Kind::Timestamp),
    Field::optional("last_updated_at", "lastUpdatedAt", Kind::Timestamp),
    Field::defaulted("markets", "markets", Kind::Many(<Market as Model>::FIELDS)),
    Field::defaulted("tags", "tags", Kind::Many(<Tag as Model>::FIELDS)),
];

/// A group of related markets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub ticker: Option<String>,
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
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
    #[serde(default, alias = "volume_24hr", deserialize_with = "de::lenient_f64")]
    pub volume_24hr: Option<f64>,
    #[serde(default, alias = "open_interest", deserialize_with = "de::lenient_f64")]
    pub open_interest: Option<f64>,
    #[serde(default, alias = "comment_count", deserialize_with = "de::lenient_i64")]
    pub comment_count: Option<i64>,

    #[serde(default, alias = "start_date", with = "crate::datetime::flexible")]
    pub start_date: Option<OffsetDateTime>,
    #[serde(default, alias = "end_date", with = "crate::datetime::flexible")]
    pub end_date: Option<OffsetDateTime>,
    #[serde(default, alias = "creation_date", with = "crate::datetime::flexible")]
    pub creation_date: Option<OffsetDateTime>,
    #[serde(default, alias = "created_at", with = "crate::datetime::flexible")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, alias = "updated_at", with = "crate::datetime::flexible")]
    pub updated_at: Option<OffsetDateTime>,
    #[serde(default, alias = "last_updated_at", with = "crate::datetime::flexible")]
    pub last_updated_at: Option<OffsetDateTime>,

    /// Markets in this event; empty when the upstream omits them.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub markets: Vec<Market>,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub tags: Vec<Tag>,
}

impl Model for Event {
    const NAME: &'static str = "Event";
    const FIELDS: &'static [Field] = FIELDS;
}

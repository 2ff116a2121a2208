use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::de;
use super::schema::{Field, Kind};
use super::Model;

const FIELDS: &[Field] = &[
    Field::required("id", "id", Kind::Str),
    Field::required("title", "title", Kind::Str),
    Field::required("slug", "slug", Kind::Str),
    Field::required("active", "active", Kind::Bool),
    Field::optional("ticker", "ticker", Kind::Str),
    Field::optional("series_type", "seriesType", Kind::Str),
    Field::optional("recurrence", "recurrence", Kind::Str),
    Field::optional("image", "image", Kind::Str),
    Field::optional("icon", "icon", Kind::Str),
    Field::optional("closed", "closed", Kind::Bool),
    Field::optional("archived", "archived", Kind::Bool),
    Field::optional("volume", "volume", Kind::Float),
    Field::optional("liquidity", "liquidity", Kind::Float),
    Field::optional("created_at", "createdAt", Kind::Timestamp),
    Field::optional("updated_at", "updatedAt", Kind::Timestamp),
];

/// A recurring collection of events, e.g. a weekly or per-season series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub active: bool,
    pub ticker: Option<String>,
    #[serde(alias = "series_type")]
    pub series_type: Option<String>,
    pub recurrence: Option<String>,
    pub image: Option<String>,
    pub icon: Option<String>,
    pub closed: Option<bool>,
    pub archived: Option<bool>,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub volume: Option<f64>,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub liquidity: Option<f64>,
    #[serde(default, alias = "created_at", with = "crate::datetime::flexible")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, alias = "updated_at", with = "crate::datetime::flexible")]
    pub updated_at: Option<OffsetDateTime>,
}

impl Model for Series {
    const NAME: &'static str = "Series";
    const FIELDS: &'static [Field] = FIELDS;
}

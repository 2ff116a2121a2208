//! Repair and parsing of the upstream's inconsistent timestamp strings.
//!
//! The Gamma API mixes several timestamp spellings, sometimes within a single
//! object: RFC 3339, `2026-01-30 19:37:52+00` (space separator, truncated
//! offset), offset-less ISO 8601, bare dates, and the occasional
//! `AprilT1, 2023`. [`normalize`] fixes the first two shapes textually;
//! [`parse_flexible`] then tries each accepted format in turn.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use thiserror::Error;
use time::format_description::well_known::{Iso8601, Rfc3339};
use time::{Date, Month, OffsetDateTime, PrimitiveDateTime};

/// A timestamp value that matched none of the accepted formats.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unparseable timestamp: {0:?}")]
pub struct TimestampError(pub String);

/// `<month name>[T| ]<day>, <year>`, e.g. `AprilT1, 2023` or `MAY 8, 2022`.
static MONTH_DAY_YEAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^([a-z]+)\s*(\d{1,2}),\s*(\d{4})$").expect("valid regex")
});

const MONTHS: [(&str, Month); 12] = [
    ("january", Month::January),
    ("february", Month::February),
    ("march", Month::March),
    ("april", Month::April),
    ("may", Month::May),
    ("june", Month::June),
    ("july", Month::July),
    ("august", Month::August),
    ("september", Month::September),
    ("october", Month::October),
    ("november", Month::November),
    ("december", Month::December),
];

/// Repair a timestamp string so a standard parser accepts it.
///
/// 1. A space separator with no `T` anywhere becomes `T` (first space only).
/// 2. A trailing `+00` / `-00` offset gains its missing `:00`.
///
/// Both rules are independent; strings that need neither are borrowed back
/// unchanged.
pub fn normalize(raw: &str) -> Cow<'_, str> {
    let mut value = Cow::Borrowed(raw);
    if value.contains(' ') && !value.contains('T') {
        value = Cow::Owned(value.replacen(' ', "T", 1));
    }
    if value.ends_with("+00") || value.ends_with("-00") {
        value.to_mut().push_str(":00");
    }
    value
}

/// Apply [`normalize`] to a JSON value. Every non-string value is returned
/// as is.
pub fn normalize_value(value: Value) -> Value {
    match value {
        Value::String(raw) => {
            if let Cow::Owned(fixed) = normalize(&raw) {
                return Value::String(fixed);
            }
            Value::String(raw)
        }
        other => other,
    }
}

/// Parse a timestamp string in any of the formats the upstream emits.
///
/// Offset-less inputs are taken as UTC. Month-name dates resolve to midnight
/// UTC.
pub fn parse_flexible(raw: &str) -> Result<OffsetDateTime, TimestampError> {
    let mut owned = normalize(raw.trim()).into_owned();
    // `-00:00` is "UTC, local offset unknown"; parsers disagree on accepting it.
    if let Some(head) = owned.strip_suffix("-00:00") {
        owned = format!("{head}+00:00");
    }
    let text = owned.as_str();

    if let Ok(dt) = OffsetDateTime::parse(text, &Rfc3339) {
        return Ok(dt);
    }
    if let Ok(dt) = OffsetDateTime::parse(text, &Iso8601::DEFAULT) {
        return Ok(dt);
    }
    if let Ok(dt) = PrimitiveDateTime::parse(text, &Iso8601::DEFAULT) {
        return Ok(dt.assume_utc());
    }
    if let Ok(date) = Date::parse(text, &Iso8601::DEFAULT) {
        return Ok(date.midnight().assume_utc());
    }
    parse_month_day_year(text).ok_or_else(|| TimestampError(raw.to_string()))
}

/// Interpret a JSON value as an optional timestamp.
///
/// `null` is `None`, strings go through [`parse_flexible`], integers are unix
/// seconds.
pub fn timestamp_from_value(value: &Value) -> Result<Option<OffsetDateTime>, TimestampError> {
    match value {
        Value::Null => Ok(None),
        Value::String(raw) => parse_flexible(raw).map(Some),
        Value::Number(n) => n
            .as_i64()
            .and_then(|secs| OffsetDateTime::from_unix_timestamp(secs).ok())
            .map(Some)
            .ok_or_else(|| TimestampError(n.to_string())),
        other => Err(TimestampError(other.to_string())),
    }
}

fn parse_month_day_year(text: &str) -> Option<OffsetDateTime> {
    let captures = MONTH_DAY_YEAR.captures(text)?;
    let month = month_named(captures.get(1)?.as_str())?;
    let day: u8 = captures.get(2)?.as_str().parse().ok()?;
    let year: i32 = captures.get(3)?.as_str().parse().ok()?;
    let date = Date::from_calendar_date(year, month, day).ok()?;
    Some(date.midnight().assume_utc())
}

/// Month lookup tolerating the stray `T` separator glued to the name.
fn month_named(name: &str) -> Option<Month> {
    let lower = name.to_ascii_lowercase();
    let lookup = |candidate: &str| {
        MONTHS
            .iter()
            .find(|(full, _)| *full == candidate)
            .map(|(_, month)| *month)
    };
    lookup(&lower).or_else(|| lower.strip_suffix('t').and_then(lookup))
}

/// Serde adapter for `Option<OffsetDateTime>` fields with relaxed parsing.
///
/// Serializes as RFC 3339.
pub mod flexible {
    use serde::{de, ser, Deserialize, Deserializer, Serializer};
    use serde_json::Value;
    use time::format_description::well_known::Rfc3339;
    use time::OffsetDateTime;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<OffsetDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        super::timestamp_from_value(&value).map_err(de::Error::custom)
    }

    pub fn serialize<S>(value: &Option<OffsetDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => {
                let text = dt.format(&Rfc3339).map_err(ser::Error::custom)?;
                serializer.serialize_some(&text)
            }
            None => serializer.serialize_none(),
        }
    }
}

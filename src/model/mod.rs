//! Typed entities returned by the Gamma API.
//!
//! Every entity:
//! - deserializes from the upstream camelCase wire names *and* from its
//!   snake_case Rust names, and serializes back to the wire names
//! - is validated against its declarative [`schema`] before construction,
//!   so a bad body reports every missing or mistyped field at once
//! - leaves absent optional values as `None`, never as a zero default

pub mod de;
pub mod schema;

mod comment;
mod event;
mod market;
mod profile;
mod search;
mod series;
mod sports;
mod tag;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{FieldError, FieldErrorKind, GammaError, ModelError};

pub use comment::Comment;
pub use event::Event;
pub use market::Market;
pub use profile::Profile;
pub use schema::{Field, Kind, Presence};
pub use search::{Pagination, PublicSearchEvent, PublicSearchMarket, PublicSearchResponse};
pub use series::Series;
pub use sports::{SportMetadata, Team};
pub use tag::Tag;

/// A validated entity built from a raw JSON value.
pub trait Model: DeserializeOwned {
    /// Entity name used in error messages.
    const NAME: &'static str;

    /// Field schema checked before deserialization.
    const FIELDS: &'static [Field];

    /// Validate `value` against [`Model::FIELDS`] and build the entity.
    fn from_value(value: Value) -> Result<Self, ModelError> {
        let errors = schema::validate(Self::FIELDS, &value);
        if !errors.is_empty() {
            return Err(ModelError {
                model: Self::NAME,
                errors,
            });
        }

        serde_json::from_value(value).map_err(|e| ModelError {
            model: Self::NAME,
            errors: vec![FieldError {
                path: String::new(),
                kind: FieldErrorKind::Invalid(e.to_string()),
            }],
        })
    }

    /// Parse and build from a JSON document.
    fn from_json(text: &str) -> Result<Self, GammaError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| GammaError::Decode(e.to_string()))?;
        Ok(Self::from_value(value)?)
    }
}

/// A value the upstream sends either as one string or as a list of strings.
///
/// Single strings are frequently a JSON-encoded array (`"[\"Yes\", \"No\"]"`);
/// [`StringOrList::values`] unpacks that form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StringOrList {
    One(String),
    Many(Vec<String>),
}

impl StringOrList {
    /// The list view of the value.
    pub fn values(&self) -> Vec<String> {
        match self {
            StringOrList::Many(items) => items.clone(),
            StringOrList::One(raw) if raw.trim_start().starts_with('[') => {
                serde_json::from_str(raw).unwrap_or_else(|_| vec![raw.clone()])
            }
            StringOrList::One(raw) => vec![raw.clone()],
        }
    }
}

impl From<&str> for StringOrList {
    fn from(value: &str) -> Self {
        StringOrList::One(value.to_string())
    }
}

impl From<Vec<String>> for StringOrList {
    fn from(values: Vec<String>) -> Self {
        StringOrList::Many(values)
    }
}

//! Transport-neutral request and response types.

use serde::Serialize;
use serde_json::Value;
use strum::{Display, EnumString};

use crate::error::{GammaError, Result};

/// HTTP verb. The Gamma API is read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
}

/// Ordered query parameters, passed through to the upstream unmodified.
///
/// A key may repeat (`id=1&id=2`); the list endpoints read repeated keys as
/// a set of filters. Collecting from pairs keeps every pair in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Query(Vec<(String, String)>);

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Query::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.set(key, value);
        self
    }

    /// Set `key` to a single value, replacing every earlier value. The first
    /// occurrence keeps its position.
    pub fn set(&mut self, key: impl Into<String>, value: impl ToString) {
        let key = key.into();
        let mut value = Some(value.to_string());
        self.0.retain_mut(|(k, v)| {
            if *k != key {
                return true;
            }
            match value.take() {
                Some(new) => {
                    *v = new;
                    true
                }
                None => false,
            }
        });
        if let Some(value) = value {
            self.0.push((key, value));
        }
    }

    /// Add another value for `key`, keeping earlier ones.
    pub fn append(&mut self, key: impl Into<String>, value: impl ToString) {
        self.0.push((key.into(), value.to_string()));
    }

    /// First value of `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every value of `key`, in order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Merge `other` into `self`. A key present in `other` takes all of its
    /// values from `other`.
    pub fn merge(mut self, other: &Query) -> Self {
        self.0
            .retain(|(key, _)| other.get(key).is_none());
        self.0.extend(other.0.iter().cloned());
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Query {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut query = Query::new();
        for (key, value) in iter {
            query.append(key, value);
        }
        query
    }
}

impl<K: Into<String>, V: ToString, const N: usize> From<[(K, V); N]> for Query {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// A request relative to the configured base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// Path with parameters already substituted, e.g. `/markets/12`.
    pub path: String,
    pub query: Query,
}

impl HttpRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.into(),
            query: Query::new(),
        }
    }

    pub fn with_query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }
}

/// A fully read response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// Header names are lowercase.
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case("content-type"))
            .map(|(_, value)| value.as_str())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A decoded successful response body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Json(Value),
    Text(String),
}

impl Payload {
    pub fn into_json(self) -> Option<Value> {
        match self {
            Payload::Json(value) => Some(value),
            Payload::Text(_) => None,
        }
    }
}

/// Map a response to its payload or to the error its status denotes.
pub fn classify(path: &str, response: HttpResponse) -> Result<Payload> {
    if response.status == 404 {
        return Err(GammaError::NotFound {
            status: response.status,
            path: path.to_string(),
        });
    }
    if !response.is_success() {
        return Err(GammaError::Api {
            status: response.status,
            body: response.body,
        });
    }

    let is_json = response
        .content_type()
        .is_some_and(|ct| ct.to_ascii_lowercase().contains("application/json"));
    if is_json {
        return serde_json::from_str(&response.body)
            .map(Payload::Json)
            .map_err(|e| GammaError::Decode(format!("{path}: {e}")));
    }
    Ok(Payload::Text(strip_quotes(&response.body).to_string()))
}

/// Remove one pair of surrounding double quotes.
fn strip_quotes(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(text)
}

//! Resource sub-clients.
//!
//! Each sub-client is written once, generically over an [`Executor`]. A
//! method only describes its request and how to decode the body as a
//! [`Call`]; the executor decides whether running it blocks the calling
//! thread or returns a future. Both facades in [`crate::client`] are
//! executors, so `client.markets()` borrows the facade itself and never
//! holds a transport of its own.

pub mod comments;
pub mod events;
pub mod markets;
pub mod profiles;
pub mod routes;
pub mod series;
pub mod sports;
pub mod tags;

use serde_json::Value;

use crate::error::{GammaError, Result};
use crate::http::{classify, HttpRequest, HttpResponse, Payload};
use crate::model::Model;

pub use comments::CommentsApi;
pub use events::EventsApi;
pub use markets::MarketsApi;
pub use profiles::ProfilesApi;
pub use series::SeriesApi;
pub use sports::SportsApi;
pub use tags::TagsApi;

/// A request paired with the decoder for its successful body.
#[derive(Debug)]
pub struct Call<T> {
    pub request: HttpRequest,
    decode: fn(Payload) -> Result<T>,
}

impl<T> Call<T> {
    pub fn new(request: HttpRequest, decode: fn(Payload) -> Result<T>) -> Self {
        Self { request, decode }
    }

    /// Classify the response, then decode its payload.
    pub fn finish(&self, response: HttpResponse) -> Result<T> {
        let payload = classify(&self.request.path, response)?;
        (self.decode)(payload)
    }
}

/// Runs calls against a transport.
///
/// `Output` is `Result<T>` for the blocking facade and a boxed future of it
/// for the async one.
pub trait Executor {
    type Output<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn execute<'a, T: Send + 'a>(&'a self, call: Call<T>) -> Self::Output<'a, T>;
}

fn expect_json(payload: Payload) -> Result<Value> {
    match payload {
        Payload::Json(value) => Ok(value),
        Payload::Text(text) => Err(GammaError::Decode(format!(
            "expected a JSON body, got text: {text:?}"
        ))),
    }
}

fn expect_array(payload: Payload) -> Result<Vec<Value>> {
    match expect_json(payload)? {
        Value::Array(items) => Ok(items),
        other => Err(GammaError::Decode(format!(
            "expected a JSON array, got {}",
            crate::model::schema::json_type(&other)
        ))),
    }
}

/// One entity from a JSON object.
pub fn decode_one<M: Model>(payload: Payload) -> Result<M> {
    Ok(M::from_value(expect_json(payload)?)?)
}

/// A list of entities; element errors are prefixed with `[i]`.
pub fn decode_many<M: Model>(payload: Payload) -> Result<Vec<M>> {
    expect_array(payload)?
        .into_iter()
        .enumerate()
        .map(|(index, item)| M::from_value(item).map_err(|e| GammaError::from(e.at_index(index))))
        .collect()
}

/// An object, or the first element of an array. An empty array is `None`.
pub fn decode_optional_one<M: Model>(payload: Payload) -> Result<Option<M>> {
    match expect_json(payload)? {
        Value::Array(items) => match items.into_iter().next() {
            Some(first) => Ok(Some(M::from_value(first).map_err(|e| e.at_index(0))?)),
            None => Ok(None),
        },
        value => Ok(Some(M::from_value(value)?)),
    }
}

/// Raw JSON body.
pub fn decode_json(payload: Payload) -> Result<Value> {
    expect_json(payload)
}

/// Raw JSON array body.
pub fn decode_raw_list(payload: Payload) -> Result<Vec<Value>> {
    expect_array(payload)
}

/// Body returned unmodified.
pub fn decode_payload(payload: Payload) -> Result<Payload> {
    Ok(payload)
}

/// The `marketTypes` list of an object body; missing is empty.
pub fn decode_market_types(payload: Payload) -> Result<Vec<String>> {
    let body = expect_json(payload)?;
    match body.get("marketTypes") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(types) => serde_json::from_value(types.clone())
            .map_err(|e| GammaError::Decode(format!("marketTypes: {e}"))),
    }
}

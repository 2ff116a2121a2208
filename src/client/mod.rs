//! Facade clients.
//!
//! [`GammaClient`] blocks the calling thread; [`AsyncGammaClient`] returns
//! futures. Both own exactly one transport, expose the same sub-clients and
//! top-level operations, and share the request helpers below.

mod blocking;
mod nonblocking;
mod resolve;
mod search;

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;

use tracing::debug;

pub use blocking::GammaClient;
pub use nonblocking::AsyncGammaClient;
pub use resolve::{extract_slug, Resolved};
pub use search::{PageBound, SearchPager};

use crate::api::{decode_json, decode_one, decode_payload, routes, Call};
use crate::error::{GammaError, Result};
use crate::http::{HttpRequest, Payload, Query};
use crate::metrics;
use crate::model::PublicSearchResponse;

/// The facade's transport handle.
///
/// Released at most once, by [`TransportSlot::release`] or when the slot is
/// dropped with its facade.
#[derive(Debug)]
struct TransportSlot<T> {
    slot: Mutex<Option<Arc<T>>>,
}

impl<T> TransportSlot<T> {
    fn new(transport: T) -> Self {
        Self {
            slot: Mutex::new(Some(Arc::new(transport))),
        }
    }

    /// A handle for one request, or `Closed`.
    ///
    /// The lock is only held while cloning, never across a send.
    fn get(&self) -> Result<Arc<T>> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(GammaError::Closed)
    }

    /// Drop the transport. Returns `false` if it was already released.
    fn release(&self) -> bool {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .is_some()
    }

    fn is_released(&self) -> bool {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }
}

/// Record metrics and a debug line for one finished request.
fn observe<R>(start: Instant, request: &HttpRequest, result: &Result<R>) {
    match result {
        Ok(_) => metrics::record_request(start, &request.path, "ok"),
        Err(err) => {
            debug!(path = %request.path, error = %err, "Request failed");
            metrics::record_request(start, &request.path, err.label());
        }
    }
}

fn status_call() -> Call<Payload> {
    Call::new(HttpRequest::get(routes::STATUS), decode_payload)
}

fn search_call(q: &str, query: &Query) -> Call<serde_json::Value> {
    let request = HttpRequest::get(routes::SEARCH).with_query(query.clone().with("q", q));
    Call::new(request, decode_json)
}

fn public_search_call(q: &str, query: &Query) -> Call<PublicSearchResponse> {
    let request =
        HttpRequest::get(routes::PUBLIC_SEARCH).with_query(query.clone().with("q", q));
    Call::new(request, decode_one::<PublicSearchResponse>)
}

//! Integration tests for the Gamma client.
//!
//! Everything except `live` runs against `MockTransport`.
//! Live tests hit the real API: cargo test --test integration -- --ignored

mod blocking;
mod fixtures;
mod live;
mod nonblocking;
mod resolve;
mod search;

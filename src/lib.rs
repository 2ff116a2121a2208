//! Typed client for the Polymarket Gamma metadata API.
//!
//! The Gamma API serves market, event, tag, series, sports, comment and
//! profile metadata as JSON. This crate wraps it in two facades:
//!
//! - [`GammaClient`]: blocking, every call completes on the caller's thread
//! - [`AsyncGammaClient`]: async, every call is a `Send` future
//!
//! Both expose the same resource sub-clients (`client.markets()`,
//! `client.events()`, ...) plus status, search, paged public search and
//! Polymarket URL resolution. Responses are validated into typed entities;
//! a body that fails validation reports every offending field at once.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`http`]: Transport-neutral request/response types
//! - [`transport`]: Transport traits and `reqwest` implementations
//! - [`model`]: Typed entities and their schemas
//! - [`datetime`]: Timestamp repair and parsing
//! - [`api`]: Resource sub-clients and route table
//! - [`client`]: Blocking and async facades
//! - [`mock`]: In-memory transport for tests
//! - [`metrics`]: Request metrics

pub mod api;
pub mod client;
pub mod config;
pub mod datetime;
pub mod error;
pub mod http;
pub mod metrics;
pub mod mock;
pub mod model;
pub mod transport;

pub use client::{AsyncGammaClient, GammaClient, PageBound, Resolved};
pub use config::ClientConfig;
pub use error::{GammaError, Result};
pub use http::{Payload, Query};
pub use model::{
    Comment, Event, Market, Model, Profile, PublicSearchEvent, PublicSearchMarket,
    PublicSearchResponse, Series, SportMetadata, Tag, Team,
};

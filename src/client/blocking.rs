use std::time::Instant;

use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use super::{
    extract_slug, observe, public_search_call, search_call, status_call, PageBound, Resolved,
    SearchPager, TransportSlot,
};
use crate::api::{
    Call, CommentsApi, EventsApi, Executor, MarketsApi, ProfilesApi, SeriesApi, SportsApi,
    TagsApi,
};
use crate::config::ClientConfig;
use crate::error::{GammaError, Result};
use crate::http::{Payload, Query};
use crate::model::PublicSearchResponse;
use crate::transport::{ReqwestTransport, Transport};

/// Blocking Gamma API client.
///
/// Every call runs to completion on the calling thread. The transport is
/// released by [`GammaClient::close`] or when the client is dropped;
/// afterwards every request fails with [`GammaError::Closed`], which
/// [`GammaClient::resolve_url`] reports as `None` like any other lookup
/// failure.
///
/// ```no_run
/// use gamma_sdk::{GammaClient, Query};
///
/// # fn main() -> gamma_sdk::Result<()> {
/// let client = GammaClient::new()?;
/// let markets = client.markets().list(&Query::from([("active", "true"), ("limit", "5")]))?;
/// for market in markets {
///     println!("{}: {}", market.slug, market.question);
/// }
/// client.close();
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct GammaClient<T: Transport = ReqwestTransport> {
    config: ClientConfig,
    transport: TransportSlot<T>,
}

impl GammaClient<ReqwestTransport> {
    /// Client for the production API with default settings.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        config.validate().map_err(GammaError::Validation)?;
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self {
            config,
            transport: TransportSlot::new(transport),
        })
    }
}

impl<T: Transport> GammaClient<T> {
    /// Client over a caller-supplied transport, e.g. a mock.
    pub fn with_transport(transport: T) -> Self {
        Self {
            config: ClientConfig::default(),
            transport: TransportSlot::new(transport),
        }
    }

    /// Release the transport. Later calls are no-ops.
    pub fn close(&self) {
        if self.transport.release() {
            debug!("Transport released");
        }
    }

    pub fn is_closed(&self) -> bool {
        self.transport.is_released()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn sports(&self) -> SportsApi<'_, Self> {
        SportsApi::new(self)
    }

    pub fn tags(&self) -> TagsApi<'_, Self> {
        TagsApi::new(self)
    }

    pub fn events(&self) -> EventsApi<'_, Self> {
        EventsApi::new(self)
    }

    pub fn markets(&self) -> MarketsApi<'_, Self> {
        MarketsApi::new(self)
    }

    pub fn series(&self) -> SeriesApi<'_, Self> {
        SeriesApi::new(self)
    }

    pub fn comments(&self) -> CommentsApi<'_, Self> {
        CommentsApi::new(self)
    }

    pub fn profiles(&self) -> ProfilesApi<'_, Self> {
        ProfilesApi::new(self)
    }

    /// Upstream health, returned as sent.
    pub fn status(&self) -> Result<Payload> {
        self.execute(status_call())
    }

    /// Legacy search; the body is returned as raw JSON.
    pub fn search(&self, q: &str, query: &Query) -> Result<Value> {
        self.execute(search_call(q, query))
    }

    /// One page of `/public-search`.
    pub fn public_search(&self, q: &str, query: &Query) -> Result<PublicSearchResponse> {
        self.execute(public_search_call(q, query))
    }

    /// Every page of `/public-search`, concatenated.
    ///
    /// See [`PageBound`] for which pages are fetched.
    pub fn public_search_all(&self, q: &str, query: &Query) -> Result<PublicSearchResponse> {
        self.public_search_all_with(q, query, PageBound::default())
    }

    #[instrument(skip(self, query))]
    pub fn public_search_all_with(
        &self,
        q: &str,
        query: &Query,
        bound: PageBound,
    ) -> Result<PublicSearchResponse> {
        let pager = SearchPager::new(q, query, bound)?;
        let first = self.execute(pager.first_call())?;
        let Some(pages) = pager.follow_up_pages(&first) else {
            return Ok(first);
        };

        info!(pages = pages.len() + 1, "Aggregating public search");
        let mut events = first.events;
        for page in pages {
            let next = self.execute(pager.page_call(page))?;
            debug!(page, events = next.events.len(), "Fetched page");
            events.extend(next.events);
        }
        Ok(SearchPager::aggregate(events))
    }

    /// Resolve a Polymarket web URL to its market or event.
    ///
    /// The market lookup runs first; if it fails, the event lookup; if that
    /// fails too, the answer is `None`. Only a malformed URL is an error.
    #[instrument(skip(self))]
    pub fn resolve_url(&self, url: &str) -> Result<Option<Resolved>> {
        let slug = extract_slug(url)?;

        match self.markets().get_by_slug(&slug) {
            Ok(market) => return Ok(market.map(Resolved::Market)),
            Err(err) => warn!(%slug, error = %err, "Market lookup failed, trying event"),
        }

        match self.events().get_by_slug(&slug) {
            Ok(event) => Ok(Some(Resolved::Event(event))),
            Err(err) => {
                warn!(%slug, error = %err, "Event lookup failed");
                Ok(None)
            }
        }
    }
}

impl<T: Transport> Executor for GammaClient<T> {
    type Output<'a, R> = Result<R>
    where
        Self: 'a,
        R: 'a;

    fn execute<'a, R: Send + 'a>(&'a self, call: Call<R>) -> Result<R> {
        let transport = self.transport.get()?;
        let start = Instant::now();
        let result = transport
            .send(&call.request)
            .map_err(GammaError::from)
            .and_then(|response| call.finish(response));
        observe(start, &call.request, &result);
        result
    }
}

impl<T: Transport> Drop for GammaClient<T> {
    fn drop(&mut self) {
        self.close();
    }
}

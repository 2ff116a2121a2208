use std::time::Instant;

use futures::future::BoxFuture;
use futures::FutureExt;
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
use crate::transport::{AsyncReqwestTransport, AsyncTransport};

/// Async Gamma API client.
///
/// Mirrors [`super::GammaClient`]; every call is a `Send` future that only
/// suspends while waiting on the transport. Nothing is spawned.
///
/// ```no_run
/// use gamma_sdk::{AsyncGammaClient, Query};
///
/// # async fn run() -> gamma_sdk::Result<()> {
/// let client = AsyncGammaClient::new()?;
/// let results = client.public_search("bitcoin", &Query::new()).await?;
/// println!("{} events", results.events.len());
/// client.close();
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct AsyncGammaClient<T: AsyncTransport = AsyncReqwestTransport> {
    config: ClientConfig,
    transport: TransportSlot<T>,
}

impl AsyncGammaClient<AsyncReqwestTransport> {
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        config.validate().map_err(GammaError::Validation)?;
        let transport = AsyncReqwestTransport::new(&config)?;
        Ok(Self {
            config,
            transport: TransportSlot::new(transport),
        })
    }
}

impl<T: AsyncTransport> AsyncGammaClient<T> {
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

    pub async fn status(&self) -> Result<Payload> {
        self.execute(status_call()).await
    }

    pub async fn search(&self, q: &str, query: &Query) -> Result<Value> {
        self.execute(search_call(q, query)).await
    }

    pub async fn public_search(&self, q: &str, query: &Query) -> Result<PublicSearchResponse> {
        self.execute(public_search_call(q, query)).await
    }

    pub async fn public_search_all(
        &self,
        q: &str,
        query: &Query,
    ) -> Result<PublicSearchResponse> {
        self.public_search_all_with(q, query, PageBound::default())
            .await
    }

    /// Every page of `/public-search`, fetched one after another.
    #[instrument(skip(self, query))]
    pub async fn public_search_all_with(
        &self,
        q: &str,
        query: &Query,
        bound: PageBound,
    ) -> Result<PublicSearchResponse> {
        let pager = SearchPager::new(q, query, bound)?;
        let first = self.execute(pager.first_call()).await?;
        let Some(pages) = pager.follow_up_pages(&first) else {
            return Ok(first);
        };

        info!(pages = pages.len() + 1, "Aggregating public search");
        let mut events = first.events;
        for page in pages {
            let next = self.execute(pager.page_call(page)).await?;
            debug!(page, events = next.events.len(), "Fetched page");
            events.extend(next.events);
        }
        Ok(SearchPager::aggregate(events))
    }

    /// Resolve a Polymarket web URL; same fallback rules as the blocking
    /// client.
    #[instrument(skip(self))]
    pub async fn resolve_url(&self, url: &str) -> Result<Option<Resolved>> {
        let slug = extract_slug(url)?;

        match self.markets().get_by_slug(&slug).await {
            Ok(market) => return Ok(market.map(Resolved::Market)),
            Err(err) => warn!(%slug, error = %err, "Market lookup failed, trying event"),
        }

        match self.events().get_by_slug(&slug).await {
            Ok(event) => Ok(Some(Resolved::Event(event))),
            Err(err) => {
                warn!(%slug, error = %err, "Event lookup failed");
                Ok(None)
            }
        }
    }
}

impl<T: AsyncTransport> Executor for AsyncGammaClient<T> {
    type Output<'a, R> = BoxFuture<'a, Result<R>>
    where
        Self: 'a,
        R: 'a;

    fn execute<'a, R: Send + 'a>(&'a self, call: Call<R>) -> BoxFuture<'a, Result<R>> {
        async move {
            // Clone the handle out so no lock is held across the await.
            let transport = self.transport.get()?;
            let start = Instant::now();
            let result = match transport.send(&call.request).await {
                Ok(response) => call.finish(response),
                Err(err) => Err(err.into()),
            };
            observe(start, &call.request, &result);
            result
        }
        .boxed()
    }
}

impl<T: AsyncTransport> Drop for AsyncGammaClient<T> {
    fn drop(&mut self) {
        self.close();
    }
}

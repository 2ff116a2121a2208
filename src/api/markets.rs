//! Market lookups.

use super::{decode_many, decode_one, decode_optional_one, routes, Call, Executor};
use crate::http::{HttpRequest, Query};
use crate::model::{Market, Tag};

/// `/markets` endpoints.
#[derive(Debug)]
pub struct MarketsApi<'c, E: Executor + 'c> {
    exec: &'c E,
}

impl<'c, E: Executor + 'c> MarketsApi<'c, E> {
    pub(crate) fn new(exec: &'c E) -> Self {
        Self { exec }
    }

    /// Markets matching the filters in `query` (`active`, `tag_id`, `slug`,
    /// `limit`, `offset`, ...).
    pub fn list(&self, query: &Query) -> E::Output<'c, Vec<Market>> {
        let request = HttpRequest::get(routes::MARKETS).with_query(query.clone());
        self.exec.execute(Call::new(request, decode_many::<Market>))
    }

    pub fn get_by_id(&self, market_id: &str) -> E::Output<'c, Market> {
        let request = HttpRequest::get(routes::fill(routes::MARKETS_BY_ID, market_id));
        self.exec.execute(Call::new(request, decode_one::<Market>))
    }

    pub fn tags(&self, market_id: &str) -> E::Output<'c, Vec<Tag>> {
        let request = HttpRequest::get(routes::fill(routes::MARKETS_TAGS, market_id));
        self.exec.execute(Call::new(request, decode_many::<Tag>))
    }

    /// Market by slug.
    ///
    /// The upstream answers with either an object or an array; an empty
    /// array yields `None`.
    pub fn get_by_slug(&self, slug: &str) -> E::Output<'c, Option<Market>> {
        let request = HttpRequest::get(routes::fill(routes::MARKETS_BY_SLUG, slug));
        self.exec.execute(Call::new(request, decode_optional_one::<Market>))
    }
}

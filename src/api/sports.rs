//! Sports metadata and teams.

use super::{decode_many, decode_market_types, routes, Call, Executor};
use crate::http::{HttpRequest, Query};
use crate::model::{SportMetadata, Team};

/// `/sports` endpoints.
#[derive(Debug)]
pub struct SportsApi<'c, E: Executor + 'c> {
    exec: &'c E,
}

impl<'c, E: Executor + 'c> SportsApi<'c, E> {
    pub(crate) fn new(exec: &'c E) -> Self {
        Self { exec }
    }

    /// Display and resolution metadata for every sport.
    pub fn metadata(&self) -> E::Output<'c, Vec<SportMetadata>> {
        let request = HttpRequest::get(routes::SPORTS);
        self.exec
            .execute(Call::new(request, decode_many::<SportMetadata>))
    }

    /// Teams, filtered by e.g. `league`, `name`, `limit`.
    pub fn list_teams(&self, query: &Query) -> E::Output<'c, Vec<Team>> {
        let request = HttpRequest::get(routes::SPORTS_TEAMS).with_query(query.clone());
        self.exec.execute(Call::new(request, decode_many::<Team>))
    }

    /// Valid sports market type names.
    pub fn market_types(&self) -> E::Output<'c, Vec<String>> {
        self.exec.execute(Call::new(
            HttpRequest::get(routes::SPORTS_MARKET_TYPES),
            decode_market_types,
        ))
    }
}

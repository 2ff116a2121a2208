use super::{decode_many, decode_one, routes, Call, Executor};
use crate::http::{HttpRequest, Query};
use crate::model::{Event, Tag};

/// `/events` endpoints.
#[derive(Debug)]
pub struct EventsApi<'c, E: Executor + 'c> {
    exec: &'c E,
}

impl<'c, E: Executor + 'c> EventsApi<'c, E> {
    pub(crate) fn new(exec: &'c E) -> Self {
        Self { exec }
    }

    /// Events matching the filters in `query` (`active`, `closed`, `limit`, ...).
    pub fn list(&self, query: &Query) -> E::Output<'c, Vec<Event>> {
        let request = HttpRequest::get(routes::EVENTS).with_query(query.clone());
        self.exec.execute(Call::new(request, decode_many::<Event>))
    }

    pub fn get_by_id(&self, event_id: &str) -> E::Output<'c, Event> {
        let request = HttpRequest::get(routes::fill(routes::EVENTS_BY_ID, event_id));
        self.exec.execute(Call::new(request, decode_one::<Event>))
    }

    pub fn tags(&self, event_id: &str) -> E::Output<'c, Vec<Tag>> {
        let request = HttpRequest::get(routes::fill(routes::EVENTS_TAGS, event_id));
        self.exec.execute(Call::new(request, decode_many::<Tag>))
    }

    pub fn get_by_slug(&self, slug: &str) -> E::Output<'c, Event> {
        let request = HttpRequest::get(routes::fill(routes::EVENTS_BY_SLUG, slug));
        self.exec.execute(Call::new(request, decode_one::<Event>))
    }
}

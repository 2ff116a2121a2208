use super::{decode_many, decode_one, routes, Call, Executor};
use crate::http::{HttpRequest, Query};
use crate::model::Series;

#[derive(Debug)]
pub struct SeriesApi<'c, E: Executor + 'c> {
    exec: &'c E,
}

impl<'c, E: Executor + 'c> SeriesApi<'c, E> {
    pub(crate) fn new(exec: &'c E) -> Self {
        Self { exec }
    }

    pub fn list(&self, query: &Query) -> E::Output<'c, Vec<Series>> {
        let request = HttpRequest::get(routes::SERIES).with_query(query.clone());
        self.exec.execute(Call::new(request, decode_many::<Series>))
    }

    pub fn get_by_id(&self, series_id: &str) -> E::Output<'c, Series> {
        let request = HttpRequest::get(routes::fill(routes::SERIES_BY_ID, series_id));
        self.exec.execute(Call::new(request, decode_one::<Series>))
    }
}

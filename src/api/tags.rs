use serde_json::Value;

use super::{decode_many, decode_one, decode_raw_list, routes, Call, Executor};
use crate::http::{HttpRequest, Query};
use crate::model::Tag;

/// `/tags` endpoints.
#[derive(Debug)]
pub struct TagsApi<'c, E: Executor + 'c> {
    exec: &'c E,
}

impl<'c, E: Executor + 'c> TagsApi<'c, E> {
    pub(crate) fn new(exec: &'c E) -> Self {
        Self { exec }
    }

    pub fn list(&self, query: &Query) -> E::Output<'c, Vec<Tag>> {
        let request = HttpRequest::get(routes::TAGS).with_query(query.clone());
        self.exec.execute(Call::new(request, decode_many::<Tag>))
    }

    pub fn get_by_id(&self, tag_id: &str) -> E::Output<'c, Tag> {
        let request = HttpRequest::get(routes::fill(routes::TAGS_BY_ID, tag_id));
        self.exec.execute(Call::new(request, decode_one::<Tag>))
    }

    pub fn get_by_slug(&self, slug: &str) -> E::Output<'c, Tag> {
        let request = HttpRequest::get(routes::fill(routes::TAGS_BY_SLUG, slug));
        self.exec.execute(Call::new(request, decode_one::<Tag>))
    }

    /// Relationship records for a tag, returned as raw JSON.
    pub fn related_by_id(&self, tag_id: &str) -> E::Output<'c, Vec<Value>> {
        let request = HttpRequest::get(routes::fill(routes::TAGS_RELATED_BY_ID, tag_id));
        self.exec.execute(Call::new(request, decode_raw_list))
    }

    /// Relationship records for a tag slug, returned as raw JSON.
    pub fn related_by_slug(&self, slug: &str) -> E::Output<'c, Vec<Value>> {
        let request = HttpRequest::get(routes::fill(routes::TAGS_RELATED_BY_SLUG, slug));
        self.exec.execute(Call::new(request, decode_raw_list))
    }

    /// The tags themselves that are related to a tag.
    pub fn tags_related_to_id(&self, tag_id: &str) -> E::Output<'c, Vec<Tag>> {
        let request = HttpRequest::get(routes::fill(routes::TAGS_RELATED_TO_ID, tag_id));
        self.exec.execute(Call::new(request, decode_many::<Tag>))
    }

    pub fn tags_related_to_slug(&self, slug: &str) -> E::Output<'c, Vec<Tag>> {
        let request = HttpRequest::get(routes::fill(routes::TAGS_RELATED_TO_SLUG, slug));
        self.exec.execute(Call::new(request, decode_many::<Tag>))
    }
}

use super::{decode_many, decode_one, routes, Call, Executor};
use crate::http::{HttpRequest, Query};
use crate::model::Comment;

/// `/comments` endpoints.
#[derive(Debug)]
pub struct CommentsApi<'c, E: Executor + 'c> {
    exec: &'c E,
}

impl<'c, E: Executor + 'c> CommentsApi<'c, E> {
    pub(crate) fn new(exec: &'c E) -> Self {
        Self { exec }
    }

    pub fn list(&self, query: &Query) -> E::Output<'c, Vec<Comment>> {
        let request = HttpRequest::get(routes::COMMENTS).with_query(query.clone());
        self.exec.execute(Call::new(request, decode_many::<Comment>))
    }

    pub fn get_by_id(&self, comment_id: &str) -> E::Output<'c, Comment> {
        let request = HttpRequest::get(routes::fill(routes::COMMENTS_BY_ID, comment_id));
        self.exec.execute(Call::new(request, decode_one::<Comment>))
    }

    /// Comments written by a wallet address.
    pub fn by_user(&self, address: &str) -> E::Output<'c, Vec<Comment>> {
        let request = HttpRequest::get(routes::fill(routes::COMMENTS_BY_USER, address));
        self.exec.execute(Call::new(request, decode_many::<Comment>))
    }
}

use super::{decode_one, routes, Call, Executor};
use crate::http::HttpRequest;
use crate::model::Profile;

/// `/profiles` endpoint.
#[derive(Debug)]
pub struct ProfilesApi<'c, E: Executor + 'c> {
    exec: &'c E,
}

impl<'c, E: Executor + 'c> ProfilesApi<'c, E> {
    pub(crate) fn new(exec: &'c E) -> Self {
        Self { exec }
    }

    pub fn get_by_address(&self, address: &str) -> E::Output<'c, Profile> {
        let request = HttpRequest::get(routes::fill(routes::PROFILES_BY_ADDRESS, address));
        self.exec.execute(Call::new(request, decode_one::<Profile>))
    }
}

//! Polymarket web URL resolution.

use serde::Serialize;
use url::Url;

use crate::error::{GammaError, Result};
use crate::model::{Event, Market};

/// What a Polymarket URL points at.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Resolved {
    Market(Market),
    Event(Event),
}

/// Slug of a `/market/<...>/<slug>` or `/event/<...>/<slug>` URL.
///
/// Scheme and host are ignored, so relative paths work too. Anything else is
/// a `Validation` error.
pub fn extract_slug(raw: &str) -> Result<String> {
    let invalid = || GammaError::Validation(format!("Invalid Polymarket URL: {raw}"));

    let parsed = match Url::parse(raw) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse("http://localhost/")
            .and_then(|base| base.join(raw))
            .map_err(|_| invalid())?,
        Err(_) => return Err(invalid()),
    };

    let parts: Vec<&str> = parsed.path().trim_matches('/').split('/').collect();
    match parts.as_slice() {
        [kind, .., slug] if matches!(*kind, "market" | "event") && !slug.is_empty() => {
            Ok((*slug).to_string())
        }
        _ => Err(invalid()),
    }
}

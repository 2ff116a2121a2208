//! Gamma API route templates.
//!
//! Templates carry at most one `{placeholder}`, filled with [`fill`].

// Sports
pub const SPORTS: &str = "/sports";
pub const SPORTS_TEAMS: &str = "/sports/teams";
pub const SPORTS_MARKET_TYPES: &str = "/sports/market-types";

// Tags
pub const TAGS: &str = "/tags";
pub const TAGS_BY_ID: &str = "/tags/{tag_id}";
pub const TAGS_BY_SLUG: &str = "/tags/slug/{slug}";
pub const TAGS_RELATED_BY_ID: &str = "/tags-related-tag-id/{tag_id}";
pub const TAGS_RELATED_BY_SLUG: &str = "/tags-related-tag-slug/{slug}";
pub const TAGS_RELATED_TO_ID: &str = "/tags/{tag_id}/related";
pub const TAGS_RELATED_TO_SLUG: &str = "/tags/slug/{slug}/related";

// Events
pub const EVENTS: &str = "/events";
pub const EVENTS_BY_ID: &str = "/events/{event_id}";
pub const EVENTS_TAGS: &str = "/events/{event_id}/tags";
pub const EVENTS_BY_SLUG: &str = "/events/slug/{slug}";

// Markets
pub const MARKETS: &str = "/markets";
pub const MARKETS_BY_ID: &str = "/markets/{market_id}";
pub const MARKETS_TAGS: &str = "/markets/{market_id}/tags";
pub const MARKETS_BY_SLUG: &str = "/markets/slug/{slug}";

// Series
pub const SERIES: &str = "/series";
pub const SERIES_BY_ID: &str = "/series/{series_id}";

// Comments
pub const COMMENTS: &str = "/comments";
pub const COMMENTS_BY_ID: &str = "/comments/{comment_id}";
pub const COMMENTS_BY_USER: &str = "/comments/user/{address}";

// Profiles
pub const PROFILES_BY_ADDRESS: &str = "/profiles/{address}";

// General
pub const STATUS: &str = "/status";
pub const SEARCH: &str = "/search";
pub const PUBLIC_SEARCH: &str = "/public-search";

/// Substitute `value` verbatim for the template's placeholder.
pub fn fill(template: &str, value: &str) -> String {
    match (template.find('{'), template.find('}')) {
        (Some(open), Some(close)) if open < close => {
            format!("{}{}{}", &template[..open], value, &template[close + 1..])
        }
        _ => template.to_string(),
    }
}

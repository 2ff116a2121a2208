//! Paging over `/public-search`.

use strum::{Display, EnumString};

use super::public_search_call;
use crate::api::Call;
use crate::error::{GammaError, Result};
use crate::http::Query;
use crate::model::{PublicSearchEvent, PublicSearchResponse};

/// Upper bound of the follow-up page range.
///
/// With `page_count = totalResults / limit_per_type + 1`, the upstream
/// clients fetch pages `2..page_count`, which skips the last page whenever
/// `totalResults` is not a multiple of `limit_per_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum PageBound {
    /// Pages `2..page_count`.
    #[default]
    Exclusive,
    /// Pages `2..=page_count`.
    Inclusive,
}

/// Request plan for an aggregated public search.
///
/// Both facades drive the same pager: issue [`SearchPager::first_call`],
/// ask [`SearchPager::follow_up_pages`] what else to fetch, then issue
/// [`SearchPager::page_call`] for each page in order.
#[derive(Debug, Clone)]
pub struct SearchPager {
    q: String,
    query: Query,
    limit_per_type: u64,
    bound: PageBound,
}

impl SearchPager {
    pub const DEFAULT_LIMIT_PER_TYPE: u64 = 20;

    /// Merge the caller's parameters over the defaults.
    ///
    /// Fails with `Validation` if `limit_per_type` is not a positive integer.
    pub fn new(q: &str, overrides: &Query, bound: PageBound) -> Result<Self> {
        let query = Query::from([
            ("page", "1".to_string()),
            ("limit_per_type", Self::DEFAULT_LIMIT_PER_TYPE.to_string()),
            ("type", "events".to_string()),
            ("sort", "volume_24hr".to_string()),
        ])
        .merge(overrides);

        let raw_limit = query.get("limit_per_type").unwrap_or_default();
        let limit_per_type = match raw_limit.trim().parse::<u64>() {
            Ok(limit) if limit > 0 => limit,
            _ => {
                return Err(GammaError::Validation(format!(
                    "limit_per_type must be a positive integer, got {raw_limit:?}"
                )))
            }
        };

        Ok(Self {
            q: q.to_string(),
            query,
            limit_per_type,
            bound,
        })
    }

    pub fn limit_per_type(&self) -> u64 {
        self.limit_per_type
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    /// First page, with whatever `page` the caller asked for.
    pub fn first_call(&self) -> Call<PublicSearchResponse> {
        public_search_call(&self.q, &self.query)
    }

    pub fn page_call(&self, page: u64) -> Call<PublicSearchResponse> {
        public_search_call(&self.q, &self.query.clone().with("page", page))
    }

    /// Pages still to fetch after `first`.
    ///
    /// `None` means `first` is the whole answer: no pagination block, no
    /// `totalResults`, or `hasMore == false`.
    pub fn follow_up_pages(&self, first: &PublicSearchResponse) -> Option<Vec<u64>> {
        let pagination = first.pagination.as_ref()?;
        if !pagination.has_more {
            return None;
        }
        let total = u64::try_from(pagination.total_results?).unwrap_or(0);
        let page_count = total / self.limit_per_type + 1;
        Some(match self.bound {
            PageBound::Exclusive => (2..page_count).collect(),
            PageBound::Inclusive => (2..=page_count).collect(),
        })
    }

    /// Concatenated result; paging metadata is dropped.
    pub fn aggregate(events: Vec<PublicSearchEvent>) -> PublicSearchResponse {
        PublicSearchResponse {
            events,
            pagination: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Pagination;
    use pretty_assertions::assert_eq;

    fn page(total: i64, has_more: bool) -> PublicSearchResponse {
        PublicSearchResponse {
            events: Vec::new(),
            pagination: Some(Pagination {
                total_results: Some(total),
                has_more,
                ..Default::default()
            }),
        }
    }

    #[test]
    fn defaults_then_overrides() {
        let pager = SearchPager::new(
            "bitcoin",
            &Query::from([("sort", "liquidity"), ("events_status", "active")]),
            PageBound::Exclusive,
        )
        .unwrap();
        let query = pager.first_call().request.query;
        assert_eq!(query.get("page"), Some("1"));
        assert_eq!(query.get("limit_per_type"), Some("20"));
        assert_eq!(query.get("type"), Some("events"));
        assert_eq!(query.get("sort"), Some("liquidity"));
        assert_eq!(query.get("events_status"), Some("active"));
        assert_eq!(query.get("q"), Some("bitcoin"));
    }

    #[test]
    fn page_call_sets_page() {
        let pager = SearchPager::new("x", &Query::new(), PageBound::Exclusive).unwrap();
        let call = pager.page_call(4);
        assert_eq!(call.request.path, "/public-search");
        assert_eq!(call.request.query.get("page"), Some("4"));
    }

    #[test]
    fn exclusive_bound_skips_last_page() {
        let pager = SearchPager::new("x", &Query::new(), PageBound::Exclusive).unwrap();
        assert_eq!(pager.follow_up_pages(&page(45, true)), Some(vec![2]));
        assert_eq!(pager.follow_up_pages(&page(10, true)), Some(vec![]));
    }

    #[test]
    fn inclusive_bound_reaches_last_page() {
        let pager = SearchPager::new("x", &Query::new(), PageBound::Inclusive).unwrap();
        assert_eq!(pager.follow_up_pages(&page(45, true)), Some(vec![2, 3]));
    }

    #[test]
    fn exhausted_or_unpaginated_results_stop() {
        let pager = SearchPager::new("x", &Query::new(), PageBound::Exclusive).unwrap();
        assert_eq!(pager.follow_up_pages(&page(45, false)), None);
        assert_eq!(pager.follow_up_pages(&PublicSearchResponse::default()), None);
    }

    #[test]
    fn custom_limit_changes_page_count() {
        let pager = SearchPager::new(
            "x",
            &Query::from([("limit_per_type", "10")]),
            PageBound::Exclusive,
        )
        .unwrap();
        assert_eq!(pager.limit_per_type(), 10);
        assert_eq!(pager.follow_up_pages(&page(45, true)), Some(vec![2, 3, 4]));
    }

    #[test]
    fn bad_limits_are_rejected() {
        for raw in ["0", "twenty", "-5"] {
            let err = SearchPager::new("x", &Query::from([("limit_per_type", raw)]), PageBound::Exclusive)
                .unwrap_err();
            assert!(matches!(err, GammaError::Validation(_)), "{raw}");
        }
    }

    #[test]
    fn page_bound_parses() {
        assert_eq!("inclusive".parse::<PageBound>().unwrap(), PageBound::Inclusive);
        assert_eq!(PageBound::default().to_string(), "exclusive");
    }
}

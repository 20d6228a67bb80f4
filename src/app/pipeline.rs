//! City-list load pipeline.
//!
//! A load runs in at most two steps:
//!
//! ```text
//! fetch_cities(query) ──► resolve_listing ──► Done(outcome)
//!                                  │
//!                                  └──► Confirm { name, fallback }
//!                                           │
//!               fetch_city(name) ──► resolve_confirmation ──► Done(outcome)
//! ```
//!
//! The user-triggered exact lookup is a single step resolved by
//! [`resolve_lookup`]. Every step produces a tagged [`LoadOutcome`] that
//! [`AppState::apply_outcome`](crate::app::AppState::apply_outcome) turns into
//! display state, so the fallback rule lives in exactly one place.
//!
//! Each list-writing request carries a sequence number from
//! [`RequestSequence`]; only results for the latest issued sequence are
//! applied.

use crate::api::{CitiesResponse, CityResponse};
use crate::domain::{find_exact_match, CityMap, CityStats, Result};

/// Message shown when the list request itself fails.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load city data.";

/// Informational message for a query that matched nothing.
#[must_use]
pub fn no_matches_message(query: &str) -> String {
    format!("No cities found for \"{query}\"")
}

/// Message for a user-triggered exact lookup that found nothing.
#[must_use]
pub fn lookup_missing_message(query: &str) -> String {
    format!("No city found for \"{query}\"")
}

/// Monotonic counter for city-list requests.
///
/// Responses are matched against the latest issued number; anything older has
/// been superseded by a later keystroke or lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSequence {
    issued: u64,
}

impl RequestSequence {
    /// Issues the next sequence number.
    pub fn next(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// The most recently issued sequence number, 0 before the first request.
    #[must_use]
    pub const fn latest(self) -> u64 {
        self.issued
    }

    #[must_use]
    pub const fn is_current(self, seq: u64) -> bool {
        self.issued != 0 && seq == self.issued
    }
}

/// Exact-match confirmation waiting for the authoritative lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingConfirmation {
    pub seq: u64,
    pub name: String,
    pub fallback: CityStats,
}

/// Final result of a pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The filtered (or unfiltered) list, shown as returned.
    FilteredOnly {
        cities: CityMap,
        total_cities: Option<usize>,
    },
    /// A non-empty query matched no city.
    NoMatches { query: String },
    /// The exact match was confirmed by the single-city endpoint.
    ExactConfirmed { name: String, stats: CityStats },
    /// The confirmation failed; the filtered batch's statistics are shown.
    ExactFallback { name: String, stats: CityStats },
    /// The list request failed.
    Failed,
    /// The user-triggered lookup found the city.
    LookupFound { name: String, stats: CityStats },
    /// The user-triggered lookup found nothing or failed.
    LookupMissing { query: String },
}

/// What to do after the list response.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadStep {
    Done(LoadOutcome),
    /// An exact match was found; confirm it against the single-city endpoint,
    /// keeping `fallback` for when that call fails.
    Confirm { name: String, fallback: CityStats },
}

/// Resolves the list response for `query`.
///
/// # Examples
///
/// ```
/// use weatherdash::app::pipeline::{resolve_listing, LoadOutcome, LoadStep};
/// use weatherdash::api::CitiesResponse;
///
/// let empty = CitiesResponse { cities: Default::default(), total_cities: Some(0) };
/// assert_eq!(
///     resolve_listing("zzz", Ok(empty)),
///     LoadStep::Done(LoadOutcome::NoMatches { query: "zzz".into() }),
/// );
/// ```
#[must_use]
pub fn resolve_listing(query: &str, result: Result<CitiesResponse>) -> LoadStep {
    let response = match result {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(query = %query, error = %e, "city list request failed");
            return LoadStep::Done(LoadOutcome::Failed);
        }
    };

    if response.cities.is_empty() && !query.is_empty() {
        tracing::debug!(query = %query, "no cities matched query");
        return LoadStep::Done(LoadOutcome::NoMatches {
            query: query.to_string(),
        });
    }

    if let Some(name) = find_exact_match(&response.cities, query) {
        if let Some(stats) = response.cities.get(name) {
            tracing::debug!(query = %query, city = %name, "exact match found, confirming");
            return LoadStep::Confirm {
                name: name.to_string(),
                fallback: *stats,
            };
        }
    }

    tracing::debug!(
        query = %query,
        city_count = response.cities.len(),
        "city list resolved"
    );
    LoadStep::Done(LoadOutcome::FilteredOnly {
        cities: response.cities,
        total_cities: response.total_cities,
    })
}

/// Resolves the authoritative lookup that confirms an exact match.
///
/// Any failure, including a 404, falls back to the filtered batch's
/// statistics so the matched city never disappears from the table.
#[must_use]
pub fn resolve_confirmation(
    pending: PendingConfirmation,
    result: Result<Option<CityResponse>>,
) -> LoadOutcome {
    match result {
        Ok(Some(response)) => LoadOutcome::ExactConfirmed {
            name: pending.name,
            stats: response.statistics,
        },
        Ok(None) => {
            tracing::warn!(city = %pending.name, "exact city not found, using list statistics");
            LoadOutcome::ExactFallback {
                name: pending.name,
                stats: pending.fallback,
            }
        }
        Err(e) => {
            tracing::warn!(city = %pending.name, error = %e, "exact fetch failed, using list statistics");
            LoadOutcome::ExactFallback {
                name: pending.name,
                stats: pending.fallback,
            }
        }
    }
}

/// Resolves the user-triggered exact lookup of `query`.
#[must_use]
pub fn resolve_lookup(query: &str, result: Result<Option<CityResponse>>) -> LoadOutcome {
    match result {
        Ok(Some(response)) => LoadOutcome::LookupFound {
            name: response.city,
            stats: response.statistics,
        },
        Ok(None) => LoadOutcome::LookupMissing {
            query: query.to_string(),
        },
        Err(e) => {
            tracing::warn!(query = %query, error = %e, "exact lookup failed");
            LoadOutcome::LookupMissing {
                query: query.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::WeatherdashError;

    fn stats(mean: f64) -> CityStats {
        CityStats::new(mean - 5.0, mean + 5.0, mean, 10)
    }

    fn listing(names: &[&str]) -> CitiesResponse {
        CitiesResponse {
            cities: names.iter().map(|n| ((*n).to_string(), stats(10.0))).collect(),
            total_cities: Some(names.len()),
        }
    }

    fn http_error(status: u16) -> WeatherdashError {
        WeatherdashError::Http { status, body: String::new() }
    }

    #[test]
    fn unfiltered_listing_is_shown_as_is() {
        let step = resolve_listing("", Ok(listing(&["Belgrade", "Hamburg"])));
        match step {
            LoadStep::Done(LoadOutcome::FilteredOnly { cities, total_cities }) => {
                assert_eq!(cities.len(), 2);
                assert_eq!(total_cities, Some(2));
            }
            other => panic!("unexpected step: {other:?}"),
        }
    }

    #[test]
    fn empty_unfiltered_listing_is_not_a_no_match() {
        let step = resolve_listing("", Ok(listing(&[])));
        assert!(matches!(
            step,
            LoadStep::Done(LoadOutcome::FilteredOnly { ref cities, .. }) if cities.is_empty()
        ));
    }

    #[test]
    fn exact_match_requests_confirmation_with_fallback() {
        let step = resolve_listing(" london ", Ok(listing(&["London", "Londonderry"])));
        assert_eq!(
            step,
            LoadStep::Confirm { name: "London".into(), fallback: stats(10.0) }
        );
    }

    #[test]
    fn partial_match_keeps_the_filtered_list() {
        let step = resolve_listing("Lon", Ok(listing(&["London", "Londonderry"])));
        assert!(matches!(step, LoadStep::Done(LoadOutcome::FilteredOnly { .. })));
    }

    #[test]
    fn failed_listing_resolves_to_failed() {
        assert_eq!(
            resolve_listing("Lon", Err(http_error(503))),
            LoadStep::Done(LoadOutcome::Failed)
        );
    }

    #[test]
    fn confirmation_prefers_authoritative_statistics() {
        let pending = PendingConfirmation { seq: 1, name: "London".into(), fallback: stats(10.0) };
        let response = CityResponse { city: "London".into(), statistics: stats(11.3) };
        assert_eq!(
            resolve_confirmation(pending, Ok(Some(response))),
            LoadOutcome::ExactConfirmed { name: "London".into(), stats: stats(11.3) }
        );
    }

    #[test]
    fn confirmation_falls_back_on_error_or_not_found() {
        let pending = PendingConfirmation { seq: 1, name: "London".into(), fallback: stats(10.0) };
        let expected = LoadOutcome::ExactFallback { name: "London".into(), stats: stats(10.0) };

        assert_eq!(resolve_confirmation(pending.clone(), Err(http_error(500))), expected);
        assert_eq!(resolve_confirmation(pending, Ok(None)), expected);
    }

    #[test]
    fn lookup_reports_missing_city() {
        assert_eq!(
            resolve_lookup("Atlantis", Ok(None)),
            LoadOutcome::LookupMissing { query: "Atlantis".into() }
        );
        assert_eq!(
            resolve_lookup("Atlantis", Err(http_error(400))),
            LoadOutcome::LookupMissing { query: "Atlantis".into() }
        );
    }

    #[test]
    fn sequence_only_accepts_latest() {
        let mut seq = RequestSequence::default();
        assert!(!seq.is_current(0));

        let first = seq.next();
        let second = seq.next();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
        assert_eq!(seq.latest(), second);
    }

    #[test]
    fn messages_quote_the_query() {
        assert_eq!(no_matches_message("zzz"), "No cities found for \"zzz\"");
        assert_eq!(lookup_missing_message("Atlantis"), "No city found for \"Atlantis\"");
    }
}

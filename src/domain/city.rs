//! City statistics domain model.
//!
//! A [`CityStats`] value is an immutable snapshot computed by the backend. The
//! plugin only stores and re-displays it; it never recomputes or patches one.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Temperature statistics for a single city.
///
/// The backend reports `null` readings for a city without samples, so `min`,
/// `max` and `mean` are only present when `count > 0`.
///
/// # Examples
///
/// ```
/// use weatherdash::CityStats;
///
/// let stats: CityStats = serde_json::from_str(
///     r#"{"min": -10.5, "max": 35.2, "mean": 12.4, "count": 842}"#,
/// ).unwrap();
/// assert_eq!(stats.mean, Some(12.4));
///
/// let empty: CityStats = serde_json::from_str(
///     r#"{"min": null, "max": null, "mean": null, "count": 0}"#,
/// ).unwrap();
/// assert_eq!(empty, CityStats::default());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CityStats {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub mean: Option<f64>,
    pub count: u64,
}

impl CityStats {
    /// Statistics for a city with at least one sample.
    #[must_use]
    pub fn new(min: f64, max: f64, mean: f64, count: u64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            mean: Some(mean),
            count,
        }
    }
}

/// Mapping from city name (case-sensitive, as returned by the server) to its
/// statistics.
///
/// Iteration order carries no meaning for display; rows are always ordered by
/// the active [`SortConfig`](crate::domain::SortConfig).
pub type CityMap = BTreeMap<String, CityStats>;

/// Builds a map holding exactly one city.
#[must_use]
pub fn single_city(name: &str, stats: CityStats) -> CityMap {
    let mut map = CityMap::new();
    map.insert(name.to_string(), stats);
    map
}

/// Finds the city name in `cities` that equals `query` ignoring case.
///
/// The query is trimmed before comparison; city names are compared as returned
/// by the server. Returns `None` for a blank query.
///
/// # Examples
///
/// ```
/// use weatherdash::domain::{find_exact_match, CityMap, CityStats};
///
/// let stats = CityStats::new(1.0, 2.0, 1.5, 2);
/// let mut cities = CityMap::new();
/// cities.insert("London".to_string(), stats);
/// cities.insert("Londonderry".to_string(), stats);
///
/// assert_eq!(find_exact_match(&cities, " london "), Some("London"));
/// assert_eq!(find_exact_match(&cities, "lon"), None);
/// ```
#[must_use]
pub fn find_exact_match<'a>(cities: &'a CityMap, query: &str) -> Option<&'a str> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    cities
        .keys()
        .find(|name| name.to_lowercase() == needle)
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(mean: f64) -> CityStats {
        CityStats::new(mean - 1.0, mean + 1.0, mean, 3)
    }

    #[test]
    fn exact_match_ignores_case_and_surrounding_whitespace() {
        let mut cities = CityMap::new();
        cities.insert("Dar es Salaam".to_string(), stats(27.0));
        cities.insert("Palembang".to_string(), stats(27.3));

        assert_eq!(find_exact_match(&cities, "DAR ES SALAAM"), Some("Dar es Salaam"));
        assert_eq!(find_exact_match(&cities, "  palembang\t"), Some("Palembang"));
    }

    #[test]
    fn exact_match_requires_whole_name() {
        let mut cities = CityMap::new();
        cities.insert("Belgrade".to_string(), stats(12.5));

        assert_eq!(find_exact_match(&cities, "Belgr"), None);
        assert_eq!(find_exact_match(&cities, "   "), None);
        assert_eq!(find_exact_match(&CityMap::new(), "Belgrade"), None);
    }

    #[test]
    fn stats_require_a_sample_count() {
        let result = serde_json::from_str::<CityStats>(r#"{"min": 1.0, "max": 2.0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn stats_without_samples_have_no_readings() {
        let stats: CityStats =
            serde_json::from_str(r#"{"min": null, "max": null, "mean": null, "count": 0}"#).unwrap();
        assert_eq!(stats.count, 0);
        assert!(stats.min.is_none() && stats.max.is_none() && stats.mean.is_none());
    }

    #[test]
    fn single_city_holds_one_entry() {
        let map = single_city("Hamburg", stats(9.7));
        assert_eq!(map.len(), 1);
        assert_eq!(map["Hamburg"].mean, Some(9.7));
    }
}

//! Column sorting for the city table.
//!
//! Sorting is a pure transform over whatever [`CityMap`] the controller holds.
//! It never adds or drops entries and never triggers a network call; the
//! ordered rows are recomputed on every render.

use super::city::{CityMap, CityStats};
use std::cmp::Ordering;

/// Table column a sort can be keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    City,
    Min,
    Max,
    Mean,
    Count,
}

impl SortKey {
    /// All columns in display order.
    pub const ALL: [Self; 5] = [Self::City, Self::Min, Self::Max, Self::Mean, Self::Count];

    /// Column header label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::City => "City",
            Self::Min => "Min",
            Self::Max => "Max",
            Self::Mean => "Mean",
            Self::Count => "Count",
        }
    }

    /// Maps the `1`..`5` column shortcut to its key.
    #[must_use]
    pub fn from_shortcut(c: char) -> Option<Self> {
        let index = c.to_digit(10)?.checked_sub(1)?;
        Self::ALL.get(usize::try_from(index).ok()?).copied()
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Arrow glyph shown next to the active column header.
    #[must_use]
    pub const fn arrow(self) -> &'static str {
        match self {
            Self::Asc => "▲",
            Self::Desc => "▼",
        }
    }
}

/// Active sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            key: SortKey::City,
            direction: SortDirection::Asc,
        }
    }
}

impl SortConfig {
    /// Returns the configuration after the user selects `key`.
    ///
    /// Selecting the active key while ascending flips to descending; any other
    /// selection (a new key, or the active key while descending) sorts
    /// ascending.
    ///
    /// # Examples
    ///
    /// ```
    /// use weatherdash::domain::{SortConfig, SortDirection, SortKey};
    ///
    /// let sort = SortConfig::default().toggled(SortKey::Mean);
    /// assert_eq!(sort.direction, SortDirection::Asc);
    /// assert_eq!(sort.toggled(SortKey::Mean).direction, SortDirection::Desc);
    /// assert_eq!(sort.toggled(SortKey::Mean).toggled(SortKey::Mean), sort);
    /// ```
    #[must_use]
    pub fn toggled(self, key: SortKey) -> Self {
        let direction = if self.key == key && self.direction == SortDirection::Asc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        Self { key, direction }
    }

    /// Cities without a reading for the active column sort last in either
    /// direction.
    fn compare(self, a: (&str, &CityStats), b: (&str, &CityStats)) -> Ordering {
        let ordering = match self.key {
            SortKey::City => a.0.cmp(b.0),
            SortKey::Count => a.1.count.cmp(&b.1.count),
            SortKey::Min | SortKey::Max | SortKey::Mean => {
                match (self.reading(a.1), self.reading(b.1)) {
                    (Some(x), Some(y)) => x.total_cmp(&y),
                    (Some(_), None) => return Ordering::Less,
                    (None, Some(_)) => return Ordering::Greater,
                    (None, None) => Ordering::Equal,
                }
            }
        };
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    fn reading(self, stats: &CityStats) -> Option<f64> {
        match self.key {
            SortKey::Min => stats.min,
            SortKey::Max => stats.max,
            SortKey::Mean => stats.mean,
            SortKey::City | SortKey::Count => None,
        }
    }
}

/// Produces the ordered `(name, stats)` rows for `cities`.
///
/// The result is a permutation of the map's entries. The sort is stable, so
/// ties keep the map's iteration order.
#[must_use]
pub fn sort_cities(cities: &CityMap, sort: SortConfig) -> Vec<(&str, &CityStats)> {
    let mut rows: Vec<(&str, &CityStats)> = cities
        .iter()
        .map(|(name, stats)| (name.as_str(), stats))
        .collect();
    rows.sort_by(|a, b| sort.compare(*a, *b));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CityMap {
        let mut cities = CityMap::new();
        cities.insert("Palembang".into(), CityStats::new(22.1, 33.0, 27.9, 40));
        cities.insert("Belgrade".into(), CityStats::new(-8.0, 36.4, 14.3, 120));
        cities.insert("Hamburg".into(), CityStats::new(-10.5, 35.2, 12.4, 842));
        cities.insert("Dar es Salaam".into(), CityStats::new(19.9, 35.5, 25.8, 7));
        cities
    }

    fn names(rows: &[(&str, &CityStats)]) -> Vec<String> {
        rows.iter().map(|(name, _)| (*name).to_string()).collect()
    }

    #[test]
    fn sorts_by_name_ascending_by_default() {
        let cities = sample();
        let rows = sort_cities(&cities, SortConfig::default());
        assert_eq!(names(&rows), ["Belgrade", "Dar es Salaam", "Hamburg", "Palembang"]);
    }

    #[test]
    fn sorts_numeric_columns_in_both_directions() {
        let cities = sample();

        let by_min = SortConfig { key: SortKey::Min, direction: SortDirection::Asc };
        assert_eq!(
            names(&sort_cities(&cities, by_min)),
            ["Hamburg", "Belgrade", "Dar es Salaam", "Palembang"]
        );

        let by_count_desc = SortConfig { key: SortKey::Count, direction: SortDirection::Desc };
        assert_eq!(
            names(&sort_cities(&cities, by_count_desc)),
            ["Hamburg", "Belgrade", "Palembang", "Dar es Salaam"]
        );

        let by_max_desc = SortConfig { key: SortKey::Max, direction: SortDirection::Desc };
        assert_eq!(names(&sort_cities(&cities, by_max_desc))[0], "Belgrade");
    }

    #[test]
    fn sorted_rows_are_a_permutation_of_the_map() {
        let cities = sample();
        for key in SortKey::ALL {
            for direction in [SortDirection::Asc, SortDirection::Desc] {
                let rows = sort_cities(&cities, SortConfig { key, direction });
                let mut seen = names(&rows);
                seen.sort();
                let mut expected: Vec<String> = cities.keys().cloned().collect();
                expected.sort();
                assert_eq!(seen, expected, "{key:?} {direction:?}");
            }
        }
    }

    #[test]
    fn ties_keep_map_order() {
        let mut cities = CityMap::new();
        let stats = CityStats::new(0.0, 1.0, 0.5, 1);
        cities.insert("Bravo".into(), stats);
        cities.insert("Alpha".into(), stats);
        cities.insert("Charlie".into(), stats);

        let rows = sort_cities(&cities, SortConfig { key: SortKey::Mean, direction: SortDirection::Asc });
        assert_eq!(names(&rows), ["Alpha", "Bravo", "Charlie"]);
    }

    #[test]
    fn toggle_flips_only_the_active_ascending_key() {
        let start = SortConfig::default();

        let flipped = start.toggled(SortKey::City);
        assert_eq!(flipped, SortConfig { key: SortKey::City, direction: SortDirection::Desc });

        let other = flipped.toggled(SortKey::Count);
        assert_eq!(other, SortConfig { key: SortKey::Count, direction: SortDirection::Asc });

        assert_eq!(start.toggled(SortKey::City).toggled(SortKey::City), start);
    }

    #[test]
    fn shortcuts_map_to_columns() {
        assert_eq!(SortKey::from_shortcut('1'), Some(SortKey::City));
        assert_eq!(SortKey::from_shortcut('5'), Some(SortKey::Count));
        assert_eq!(SortKey::from_shortcut('0'), None);
        assert_eq!(SortKey::from_shortcut('6'), None);
        assert_eq!(SortKey::from_shortcut('x'), None);
    }

    #[test]
    fn cities_without_readings_sort_last_both_ways() {
        let mut cities = sample();
        cities.insert("Ghost".into(), CityStats::default());

        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let rows = sort_cities(&cities, SortConfig { key: SortKey::Mean, direction });
            assert_eq!(names(&rows).last().map(String::as_str), Some("Ghost"), "{direction:?}");
        }

        let by_count = SortConfig { key: SortKey::Count, direction: SortDirection::Asc };
        assert_eq!(names(&sort_cities(&cities, by_count))[0], "Ghost");
    }

    #[test]
    fn empty_map_sorts_to_no_rows() {
        assert!(sort_cities(&CityMap::new(), SortConfig::default()).is_empty());
    }
}

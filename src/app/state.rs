//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the single source of truth for all
//! dashboard state: backend health, the current city map, the loading flag,
//! the error line, the search query, the sort configuration and the selection
//! cursor. Every slice is replaced wholesale when a fetch resolves; city
//! statistics are never patched in place.
//!
//! # State Components
//!
//! - **Health**: `None` while the one-shot probe is pending
//! - **Cities**: map currently on display, replaced by each applied outcome
//! - **Loading / Error**: status of the latest issued city-list request
//! - **Search / Sort**: user input driving what is fetched and how it is ordered
//! - **Request sequence**: guards against stale responses overwriting newer ones
//!
//! # View Model Computation
//!
//! `compute_viewmodel` sorts the held map, windows the rows around the
//! selection, formats the numbers and computes query highlight ranges.

use super::modes::{InputMode, SearchFocus};
use super::pipeline::{
    self, LoadOutcome, PendingConfirmation, RequestSequence, LOAD_FAILED_MESSAGE,
};
use super::Action;
use crate::api::{ApiClient, RequestKind};
use crate::domain::{
    single_city, sort_cities, CityMap, CityStats, HealthStatus, Result, SortConfig, SortKey,
};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ColumnHeader, DisplayItem, EmptyState, FooterInfo, HeaderInfo, HealthIndicator, HealthInfo,
    SearchBarInfo, StatusInfo, StatusKind, UIViewModel,
};
use chrono::{DateTime, Utc};
use fuzzy_matcher::skim::SkimMatcherV2;

/// Widest the City column grows, including the gap after it.
pub const CITY_COLUMN_WIDTH: usize = 28;

/// Narrowest the City column shrinks on small terminals.
const MIN_CITY_COLUMN_WIDTH: usize = 12;

/// Left indent plus right margin around the table.
const TABLE_MARGIN: usize = 2;

/// Width of each numeric column in characters.
pub const NUMBER_COLUMN_WIDTH: usize = 12;

/// Cell text for a reading the backend could not compute.
const NO_READING: &str = "-";

/// Rows used by header, health line, borders, status line, column headers
/// and footer.
const CHROME_ROWS: usize = 8;

/// Extra rows taken by the search box.
const SEARCH_BAR_ROWS: usize = 3;

/// Width of the City column for a terminal `cols` wide.
#[must_use]
pub fn city_column_width(cols: usize) -> usize {
    cols.saturating_sub(NUMBER_COLUMN_WIDTH * 4 + TABLE_MARGIN)
        .clamp(MIN_CITY_COLUMN_WIDTH, CITY_COLUMN_WIDTH)
}

/// Central application state container.
///
/// Mutated only by [`handle_event`](crate::app::handle_event). View models are
/// computed on demand from state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Request builder for the configured backend.
    pub api: ApiClient,

    /// Result of the health probe; `None` while it is still pending.
    pub health: Option<HealthStatus>,

    /// Cities currently on display.
    pub cities: CityMap,

    /// `total_cities` reported by the last applied list response.
    pub total_cities: Option<usize>,

    /// Whether the latest issued city-list request is still in flight.
    pub loading: bool,

    /// Error or informational message for the latest city-list request.
    pub error: Option<String>,

    /// Current search query, exactly as typed.
    pub search_query: String,

    /// Active table sort.
    pub sort: SortConfig,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Zero-based index of the selected row within the sorted rows.
    pub selected_index: usize,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// When the last city result was applied.
    pub last_updated: Option<DateTime<Utc>>,

    /// Whether the mount-time health probe and initial load were issued.
    pub mounted: bool,

    requests: RequestSequence,
    pending_confirmation: Option<PendingConfirmation>,
}

impl AppState {
    /// Creates the initial state: no cities, ascending by city name, empty
    /// query, not loading, health unknown.
    ///
    /// # Example
    ///
    /// ```rust
    /// use weatherdash::api::ApiClient;
    /// use weatherdash::{AppState, Theme};
    ///
    /// let state = AppState::new(ApiClient::default(), Theme::default());
    /// assert!(state.cities.is_empty());
    /// assert!(!state.loading);
    /// assert!(state.health.is_none());
    /// ```
    #[must_use]
    pub fn new(api: ApiClient, theme: Theme) -> Self {
        Self {
            api,
            health: None,
            cities: CityMap::new(),
            total_cities: None,
            loading: false,
            error: None,
            search_query: String::new(),
            sort: SortConfig::default(),
            input_mode: InputMode::Normal,
            selected_index: 0,
            theme,
            last_updated: None,
            mounted: false,
            requests: RequestSequence::default(),
            pending_confirmation: None,
        }
    }

    /// Sequence number of the most recently issued city-list request.
    #[must_use]
    pub const fn latest_request_seq(&self) -> u64 {
        self.requests.latest()
    }

    /// Whether a response for `seq` may still be applied.
    #[must_use]
    pub const fn is_current_request(&self, seq: u64) -> bool {
        self.requests.is_current(seq)
    }

    /// Starts a city-list load for the current query.
    ///
    /// Sets the loading flag, clears the previous error and supersedes any
    /// request still in flight.
    pub fn begin_load(&mut self) -> Action {
        let seq = self.requests.next();
        self.loading = true;
        self.error = None;
        self.pending_confirmation = None;

        tracing::debug!(seq = seq, query = %self.search_query, "loading cities");
        Action::Fetch(self.api.cities_request(&self.search_query, seq))
    }

    /// Starts the user-triggered exact lookup of the trimmed query.
    ///
    /// Returns `None` without touching state when the query is blank.
    pub fn begin_lookup(&mut self) -> Option<Action> {
        let name = self.search_query.trim().to_string();
        if name.is_empty() {
            return None;
        }

        let seq = self.requests.next();
        self.loading = true;
        self.error = None;
        self.pending_confirmation = None;

        tracing::debug!(seq = seq, city = %name, "fetching exact city");
        Some(Action::Fetch(self.api.city_request(
            &name,
            RequestKind::LookupExact,
            seq,
        )))
    }

    /// Parks an exact match and returns the authoritative lookup confirming it.
    ///
    /// The loading flag stays set until the confirmation resolves.
    pub fn await_confirmation(&mut self, seq: u64, name: String, fallback: CityStats) -> Action {
        let action = Action::Fetch(self.api.city_request(&name, RequestKind::ConfirmExact, seq));
        self.pending_confirmation = Some(PendingConfirmation { seq, name, fallback });
        action
    }

    /// Takes the parked confirmation matching `seq` and `name`, if any.
    pub fn take_confirmation(&mut self, seq: u64, name: &str) -> Option<PendingConfirmation> {
        match &self.pending_confirmation {
            Some(pending) if pending.seq == seq && pending.name == name => {
                self.pending_confirmation.take()
            }
            _ => None,
        }
    }

    /// Records the health probe result. A failed probe becomes an unhealthy
    /// status carrying the failure text.
    pub fn apply_health(&mut self, result: Result<HealthStatus>) {
        let health = match result {
            Ok(health) => health,
            Err(e) => {
                tracing::warn!(error = %e, "health check failed");
                HealthStatus::unhealthy(e.to_string())
            }
        };
        tracing::debug!(status = ?health.status, "health status updated");
        self.health = Some(health);
    }

    /// Applies a pipeline outcome, replacing the displayed cities and ending
    /// the loading state.
    pub fn apply_outcome(&mut self, outcome: LoadOutcome) {
        tracing::debug!(outcome = ?outcome, "applying load outcome");

        match outcome {
            LoadOutcome::FilteredOnly { cities, total_cities } => {
                self.cities = cities;
                self.total_cities = total_cities;
                self.error = None;
                self.last_updated = Some(Utc::now());
            }
            LoadOutcome::NoMatches { query } => {
                self.cities = CityMap::new();
                self.total_cities = Some(0);
                self.error = Some(pipeline::no_matches_message(&query));
                self.last_updated = Some(Utc::now());
            }
            LoadOutcome::ExactConfirmed { name, stats }
            | LoadOutcome::ExactFallback { name, stats }
            | LoadOutcome::LookupFound { name, stats } => {
                self.cities = single_city(&name, stats);
                self.total_cities = None;
                self.error = None;
                self.last_updated = Some(Utc::now());
            }
            LoadOutcome::Failed => {
                self.cities = CityMap::new();
                self.total_cities = None;
                self.error = Some(LOAD_FAILED_MESSAGE.to_string());
            }
            LoadOutcome::LookupMissing { query } => {
                self.cities = CityMap::new();
                self.total_cities = None;
                self.error = Some(pipeline::lookup_missing_message(&query));
            }
        }

        self.loading = false;
        self.pending_confirmation = None;
        self.clamp_selection();
    }

    /// Rows in display order under the active sort.
    #[must_use]
    pub fn sorted_rows(&self) -> Vec<(&str, &CityStats)> {
        sort_cities(&self.cities, self.sort)
    }

    /// Applies a column selection to the sort.
    pub fn sort_by(&mut self, key: SortKey) {
        self.sort = self.sort.toggled(key);
        tracing::debug!(key = ?self.sort.key, direction = ?self.sort.direction, "sort changed");
    }

    /// Moves selection cursor down by one row, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        if self.cities.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.cities.len();
    }

    /// Moves selection cursor up by one row, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        if self.cities.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.cities.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Keeps the selection within the current rows.
    pub fn clamp_selection(&mut self) {
        if self.cities.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.cities.len() - 1);
        }
    }

    fn shows_search_bar(&self) -> bool {
        self.input_mode.is_search() || !self.search_query.is_empty()
    }

    /// Computes a renderable UI view model from current state and terminal
    /// dimensions.
    ///
    /// # Windowing Algorithm
    ///
    /// 1. Calculate available rows after subtracting UI chrome
    /// 2. Center the window on the selected row
    /// 3. Shift the window back if it runs past the end
    /// 4. Compute the selection index relative to the window
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let sorted = self.sorted_rows();
        let available_rows = self.calculate_available_rows(rows);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(sorted.len());
        if visible_end - visible_start.min(visible_end) < available_rows
            && sorted.len() >= available_rows
        {
            visible_start = visible_end.saturating_sub(available_rows);
        }
        let visible_start = visible_start.min(visible_end);

        let query = self.search_query.trim();
        let matcher = if query.is_empty() {
            None
        } else {
            Some(SkimMatcherV2::default().ignore_case())
        };

        let city_width = city_column_width(cols);
        let display_items = sorted[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, (name, stats))| {
                let is_selected = visible_start + relative_idx == self.selected_index;
                Self::compute_display_item(
                    name,
                    stats,
                    is_selected,
                    city_width,
                    query,
                    matcher.as_ref(),
                )
            })
            .collect();

        UIViewModel {
            header: self.compute_header(),
            health: self.compute_health(),
            search_bar: self.compute_search_bar(),
            status: self.compute_status(),
            columns: self.compute_columns(),
            display_items,
            selected_index: self.selected_index.saturating_sub(visible_start),
            footer: self.compute_footer(),
            empty_state: self.compute_empty_state(),
        }
    }

    fn compute_display_item(
        name: &str,
        stats: &CityStats,
        is_selected: bool,
        city_width: usize,
        query: &str,
        matcher: Option<&SkimMatcherV2>,
    ) -> DisplayItem {
        let max_name_chars = city_width - 2;
        let name_chars = name.chars().count();
        let (city, visible_chars) = if name_chars > max_name_chars {
            let keep = max_name_chars - 3;
            (format!("{}...", name.chars().take(keep).collect::<String>()), keep)
        } else {
            (name.to_string(), name_chars)
        };

        let highlight_ranges = matcher.map_or_else(Vec::new, |m| {
            compute_highlight_ranges(name, query, m)
                .into_iter()
                .filter(|&(start, _)| start < visible_chars)
                .map(|(start, end)| (start, end.min(visible_chars)))
                .collect()
        });

        DisplayItem {
            city,
            min: format_reading(stats.min),
            max: format_reading(stats.max),
            mean: format_reading(stats.mean),
            count: stats.count.to_string(),
            is_selected,
            highlight_ranges,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let shown = self.cities.len();
        let title = match self.total_cities {
            Some(total) if total > shown => {
                format!(" Weather Statistics ({shown} of {total} cities) ")
            }
            _ => format!(" Weather Statistics ({shown} cities) "),
        };
        HeaderInfo { title }
    }

    fn compute_health(&self) -> HealthInfo {
        match &self.health {
            None => HealthInfo {
                indicator: HealthIndicator::Checking,
                text: "Checking...".to_string(),
            },
            Some(health) if health.is_healthy() => HealthInfo {
                indicator: HealthIndicator::Connected,
                text: health.service.as_ref().map_or_else(
                    || "✓ Connected - Backend API is running".to_string(),
                    |service| format!("✓ Connected - Backend API is running ({service})"),
                ),
            },
            Some(health) => HealthInfo {
                indicator: HealthIndicator::Disconnected,
                text: health.error.as_ref().map_or_else(
                    || "✗ Disconnected - Backend API is not responding".to_string(),
                    |error| format!("✗ Disconnected - Backend API is not responding: {error}"),
                ),
            },
        }
    }

    fn compute_status(&self) -> Option<StatusInfo> {
        if self.loading {
            return Some(StatusInfo {
                kind: StatusKind::Loading,
                message: "Loading cities...".to_string(),
            });
        }
        if let Some(error) = &self.error {
            return Some(StatusInfo {
                kind: StatusKind::Error,
                message: error.clone(),
            });
        }
        self.last_updated.map(|at| StatusInfo {
            kind: StatusKind::Info,
            message: format!(
                "Total cities: {}  ·  updated {} UTC",
                self.cities.len(),
                at.format("%H:%M:%S")
            ),
        })
    }

    fn compute_columns(&self) -> Vec<ColumnHeader> {
        SortKey::ALL
            .iter()
            .enumerate()
            .map(|(idx, &key)| {
                let is_active = self.sort.key == key;
                let label = if is_active {
                    format!("{} [{}] {}", key.label(), idx + 1, self.sort.direction.arrow())
                } else {
                    format!("{} [{}]", key.label(), idx + 1)
                };
                ColumnHeader { label, is_active }
            })
            .collect()
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Search(SearchFocus::Typing) => {
                "ESC: exit search  Enter: results  Ctrl+e: fetch exact  Ctrl+n/p: navigate  Type to search"
            }
            InputMode::Search(SearchFocus::Navigating) => {
                "ESC: exit search  /: edit query  j/k: navigate  1-5: sort  Enter/e: fetch exact"
            }
            InputMode::Normal => {
                "j/k: navigate  /: search  1-5: sort  e: fetch exact  ESC: clear search  q: quit"
            }
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        self.shows_search_bar().then(|| SearchBarInfo {
            query: self.search_query.clone(),
            is_typing: self.input_mode.is_typing(),
        })
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if !self.mounted {
            // Health is only known before mount when access was refused.
            let (message, subtitle) = if self.health.is_some() {
                ("Web access refused", "Reload the plugin and allow web access to load city data")
            } else {
                ("Waiting for web access", "Grant the permission request to load city data")
            };
            return Some(EmptyState {
                message: message.to_string(),
                subtitle: subtitle.to_string(),
            });
        }
        if self.loading || self.error.is_some() || !self.cities.is_empty() {
            return None;
        }
        let subtitle = if self.search_query.is_empty() {
            "The backend returned no city data"
        } else {
            "Try a different search"
        };
        Some(EmptyState {
            message: "No cities found.".to_string(),
            subtitle: subtitle.to_string(),
        })
    }

    /// Calculates rows available for table rows after subtracting UI chrome.
    fn calculate_available_rows(&self, total_rows: usize) -> usize {
        if self.shows_search_bar() {
            total_rows.saturating_sub(CHROME_ROWS + SEARCH_BAR_ROWS)
        } else {
            total_rows.saturating_sub(CHROME_ROWS)
        }
    }
}

/// One decimal place; a city without samples shows a dash.
fn format_reading(value: Option<f64>) -> String {
    value.map_or_else(|| NO_READING.to_string(), |v| format!("{v:.1}"))
}

/// Computes coalesced character ranges of `text` matched by `query`.
///
/// Consecutive match indices are merged into `(start, end)` ranges with an
/// exclusive end.
fn compute_highlight_ranges(text: &str, query: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
    use fuzzy_matcher::FuzzyMatcher;

    let Some((_score, indices)) = matcher.fuzzy_indices(text, query) else {
        return vec![];
    };

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SortDirection;

    fn state_with(names: &[(&str, f64)]) -> AppState {
        let mut state = AppState::new(ApiClient::default(), Theme::default());
        state.mounted = true;
        state.apply_outcome(LoadOutcome::FilteredOnly {
            cities: names
                .iter()
                .map(|(n, mean)| {
                    ((*n).to_string(), CityStats::new(mean - 3.0, mean + 3.0, *mean, 5))
                })
                .collect(),
            total_cities: Some(names.len()),
        });
        state
    }

    #[test]
    fn begin_load_sets_loading_and_clears_error() {
        let mut state = AppState::new(ApiClient::default(), Theme::default());
        state.error = Some("old".into());
        state.search_query = "Ham".into();

        let action = state.begin_load();

        assert!(state.loading);
        assert!(state.error.is_none());
        match action {
            Action::Fetch(request) => {
                assert_eq!(request.url, "http://127.0.0.1:5000/api/cities?search=Ham");
                assert_eq!(request.context.seq, state.latest_request_seq());
            }
            Action::CloseFocus => panic!("expected a fetch"),
        }
    }

    #[test]
    fn begin_lookup_is_disabled_for_blank_query() {
        let mut state = AppState::new(ApiClient::default(), Theme::default());
        state.search_query = "   ".into();
        assert!(state.begin_lookup().is_none());
        assert!(!state.loading);
        assert_eq!(state.latest_request_seq(), 0);
    }

    #[test]
    fn failed_outcome_clears_cities_and_sets_message() {
        let mut state = state_with(&[("Belgrade", 14.3)]);
        state.loading = true;
        state.apply_outcome(LoadOutcome::Failed);

        assert!(state.cities.is_empty());
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Failed to load city data."));
    }

    #[test]
    fn failed_health_probe_becomes_unhealthy() {
        let mut state = AppState::new(ApiClient::default(), Theme::default());
        state.apply_health(Err(crate::domain::WeatherdashError::Http {
            status: 400,
            body: "connection refused".into(),
        }));
        let health = state.health.as_ref().unwrap();
        assert!(!health.is_healthy());
        assert_eq!(health.error.as_deref(), Some("HTTP error! Status: 400"));
    }

    #[test]
    fn selection_wraps_and_clamps() {
        let mut state = state_with(&[("A", 1.0), ("B", 2.0), ("C", 3.0)]);
        state.move_selection_up();
        assert_eq!(state.selected_index, 2);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);

        state.selected_index = 2;
        state.apply_outcome(LoadOutcome::ExactConfirmed {
            name: "A".into(),
            stats: CityStats::new(0.0, 2.0, 1.0, 2),
        });
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn cities_without_samples_render_dashes() {
        let mut state = state_with(&[("Belgrade", 14.3)]);
        state.cities.insert("Ghost".into(), CityStats::default());
        state.sort_by(SortKey::Mean);

        let vm = state.compute_viewmodel(24, 80);
        let ghost = &vm.display_items[1];
        assert_eq!(ghost.city, "Ghost");
        assert_eq!((ghost.min.as_str(), ghost.max.as_str(), ghost.mean.as_str()), ("-", "-", "-"));
        assert_eq!(ghost.count, "0");
    }

    #[test]
    fn viewmodel_marks_active_column_with_direction() {
        let mut state = state_with(&[("Alpha", 5.0)]);
        state.sort_by(SortKey::Count);
        state.sort_by(SortKey::Count);
        assert_eq!(state.sort.direction, SortDirection::Desc);

        let vm = state.compute_viewmodel(24, 80);
        let active: Vec<&ColumnHeader> = vm.columns.iter().filter(|c| c.is_active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].label, "Count [5] ▼");
        assert_eq!(vm.columns[0].label, "City [1]");
    }

    #[test]
    fn viewmodel_formats_rows_and_highlights_query() {
        let mut state = state_with(&[("Hamburg", 12.4), ("Belgrade", 14.3)]);
        state.search_query = "burg".into();

        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.display_items.len(), 2);
        let hamburg = &vm.display_items[1];
        assert_eq!(hamburg.city, "Hamburg");
        assert_eq!(hamburg.mean, "12.4");
        assert_eq!(hamburg.min, "9.4");
        assert_eq!(hamburg.count, "5");
        assert_eq!(hamburg.highlight_ranges, vec![(3, 7)]);
        assert!(vm.search_bar.is_some());
    }

    #[test]
    fn long_names_are_truncated_on_char_boundaries() {
        let long = "Llanfairpwllgwyngyllgogerychwyrndrobwllllantysiliogogogoch";
        let state = state_with(&[(long, 10.0)]);
        let vm = state.compute_viewmodel(24, 80);
        let item = &vm.display_items[0];
        assert_eq!(item.city.chars().count(), CITY_COLUMN_WIDTH - 2);
        assert!(item.city.ends_with("..."));
    }

    #[test]
    fn city_column_shrinks_on_narrow_terminals() {
        assert_eq!(city_column_width(120), CITY_COLUMN_WIDTH);
        assert_eq!(city_column_width(70), 20);
        assert_eq!(city_column_width(10), MIN_CITY_COLUMN_WIDTH);
    }

    #[test]
    fn window_follows_selection() {
        let names: Vec<(String, f64)> = (0..30).map(|i| (format!("City{i:02}"), f64::from(i))).collect();
        let refs: Vec<(&str, f64)> = names.iter().map(|(n, m)| (n.as_str(), *m)).collect();
        let mut state = state_with(&refs);
        state.selected_index = 29;

        let vm = state.compute_viewmodel(18, 80);
        assert_eq!(vm.display_items.len(), 10);
        assert_eq!(vm.display_items.last().map(|i| i.city.as_str()), Some("City29"));
        assert!(vm.display_items[vm.selected_index].is_selected);
    }

    #[test]
    fn empty_state_only_when_idle_without_error() {
        let mut state = state_with(&[]);
        assert_eq!(
            state.compute_viewmodel(24, 80).empty_state.map(|e| e.message),
            Some("No cities found.".to_string())
        );

        state.loading = true;
        assert!(state.compute_viewmodel(24, 80).empty_state.is_none());

        state.apply_outcome(LoadOutcome::NoMatches { query: "zzz".into() });
        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.empty_state.is_none());
        let status = vm.status.unwrap();
        assert_eq!(status.kind, StatusKind::Error);
        assert_eq!(status.message, "No cities found for \"zzz\"");
    }

    #[test]
    fn health_line_reflects_probe() {
        let mut state = AppState::new(ApiClient::default(), Theme::default());
        assert_eq!(state.compute_viewmodel(24, 80).health.indicator, HealthIndicator::Checking);

        state.apply_health(Ok(HealthStatus {
            status: crate::domain::HealthState::Healthy,
            error: None,
            service: Some("weather-api".into()),
        }));
        let health = state.compute_viewmodel(24, 80).health;
        assert_eq!(health.indicator, HealthIndicator::Connected);
        assert!(health.text.contains("weather-api"));
    }

    #[test]
    fn header_shows_reported_total_when_larger() {
        let mut state = state_with(&[("Alpha", 1.0)]);
        state.total_cities = Some(413);
        assert_eq!(
            state.compute_viewmodel(24, 80).header.title,
            " Weather Statistics (1 of 413 cities) "
        );
    }

    #[test]
    fn highlight_ranges_coalesce_consecutive_indices() {
        let matcher = SkimMatcherV2::default().ignore_case();
        assert_eq!(compute_highlight_ranges("Hamburg", "ham", &matcher), vec![(0, 3)]);
        assert!(compute_highlight_ranges("Hamburg", "xyz", &matcher).is_empty());
    }
}

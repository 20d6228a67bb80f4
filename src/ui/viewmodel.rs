//! View model types representing renderable UI state.
//!
//! View models are computed from application state via
//! `AppState::compute_viewmodel()` and consumed by the renderer. They contain
//! no business logic, only display-ready data: formatted numbers, sort
//! indicators, match highlight ranges and status text.

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Title bar.
    pub header: HeaderInfo,

    /// Backend connectivity line under the title.
    pub health: HealthInfo,

    /// Search input box, shown while searching or while a query is set.
    pub search_bar: Option<SearchBarInfo>,

    /// Loading, error or summary line above the table.
    pub status: Option<StatusInfo>,

    /// Table column headers in display order.
    pub columns: Vec<ColumnHeader>,

    /// Visible window of sorted table rows.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected row within `display_items`.
    pub selected_index: usize,

    /// Keybinding hints.
    pub footer: FooterInfo,

    /// Shown in place of the table when there is nothing to list.
    pub empty_state: Option<EmptyState>,
}

/// One row of the city table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// City name, truncated to fit the column.
    pub city: String,
    pub min: String,
    pub max: String,
    pub mean: String,
    pub count: String,

    /// Whether this row holds the selection cursor.
    pub is_selected: bool,

    /// Character ranges of `city` matching the search query.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices,
    /// exclusive end, all within the (possibly truncated) `city` text.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Table column header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnHeader {
    /// Header text including the shortcut and, for the active column, the
    /// direction arrow (e.g. `"Mean [4] ▼"`).
    pub label: String,

    /// Whether the table is currently sorted by this column.
    pub is_active: bool,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Backend connectivity indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthIndicator {
    Checking,
    Connected,
    Disconnected,
}

/// Health line display information.
#[derive(Debug, Clone)]
pub struct HealthInfo {
    pub indicator: HealthIndicator,
    pub text: String,
}

/// Kind of status line, selecting its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Loading,
    Error,
    Info,
}

/// Status line display information.
#[derive(Debug, Clone)]
pub struct StatusInfo {
    pub kind: StatusKind,
    pub message: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g., "No cities found.").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,

    /// Whether keystrokes currently edit the query (draws a cursor).
    pub is_typing: bool,
}

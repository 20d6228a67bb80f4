//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Title bar and backend health line
//! - [`search`]: Search input box (border, query text, cursor)
//! - [`status`]: Loading, error or summary line
//! - [`table`]: City statistics with sortable columns
//! - [`empty`]: Message shown in place of an empty table
//! - [`footer`]: Keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Health line]
//! [Border]
//! [Search Bar - 3 lines, when shown]
//! [Status line]
//! [Column headers]
//! [Table rows | empty state]
//! [Border]
//! [Footer]
//! ```

mod empty;
mod footer;
mod header;
mod search;
mod status;
mod table;

use crate::app::state::city_column_width;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use footer::render_footer;
use header::{render_header, render_health_line};
use search::render_search_bar;
use status::render_status_line;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line at the specified row.
///
/// Returns the next available row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full dashboard layout.
///
/// Rows between the table and the bottom border are left untouched; Zellij
/// clears the pane before each render.
pub fn render_dashboard(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let city_width = city_column_width(cols);
    let mut current_row = 2; // row 1 stays blank

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_health_line(current_row, &vm.health, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }
    current_row = render_status_line(current_row, vm.status.as_ref(), theme, cols);
    current_row = render_table_headers(current_row, &vm.columns, city_width, theme);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row, empty, theme, cols);
    } else {
        render_table_rows(current_row, &vm.display_items, city_width, theme, cols);
    }

    let footer_start = rows;
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}

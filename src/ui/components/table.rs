//! Table component renderer.
//!
//! Renders the city statistics as a five-column table: the city name
//! left-aligned, then Min, Max, Mean and Count right-aligned. Supports
//! selection highlighting and search match highlighting.

use crate::app::state::NUMBER_COLUMN_WIDTH;
use crate::ui::helpers::{self, display_width, position_cursor, print_padded};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ColumnHeader, DisplayItem};

/// Renders the column headers; the sorted column is highlighted.
///
/// Returns the next available row.
pub fn render_table_headers(
    row: usize,
    columns: &[ColumnHeader],
    city_width: usize,
    theme: &Theme,
) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!(" ");

    for (idx, column) in columns.iter().enumerate() {
        let color = if column.is_active {
            &theme.colors.active_column_fg
        } else {
            &theme.colors.header_fg
        };
        print!("{}", Theme::fg(color));
        if idx == 0 {
            print_padded(&column.label, city_width);
        } else {
            print_right_aligned(&column.label, NUMBER_COLUMN_WIDTH);
        }
    }

    print!("{}", Theme::reset());
    row + 1
}

/// Renders all table rows starting at the specified row.
///
/// Returns the next available row.
pub fn render_table_rows(
    row: usize,
    items: &[DisplayItem],
    city_width: usize,
    theme: &Theme,
    cols: usize,
) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, city_width, theme, cols);
    }
    current_row
}

/// Renders a single city row.
///
/// # Styling Precedence
///
/// 1. Selection background (if `is_selected`)
/// 2. Match highlights (unless selected)
/// 3. Normal text color
///
/// The row is padded to the full terminal width so the selection background
/// spans the line.
fn render_table_row(
    row: usize,
    item: &DisplayItem,
    city_width: usize,
    theme: &Theme,
    cols: usize,
) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    print!(" ");
    helpers::render_highlighted_text(&item.city, &item.highlight_ranges, theme, item.is_selected);
    print!(
        "{}",
        " ".repeat(city_width.saturating_sub(display_width(&item.city)))
    );

    for value in [&item.min, &item.max, &item.mean, &item.count] {
        print_right_aligned(value, NUMBER_COLUMN_WIDTH);
    }

    let line_len = 1 + city_width + NUMBER_COLUMN_WIDTH * 4;
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}

fn print_right_aligned(text: &str, width: usize) {
    print!("{}{text}", " ".repeat(width.saturating_sub(display_width(text))));
}

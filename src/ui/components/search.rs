//! Search bar component renderer.
//!
//! This module renders the search input box with a bordered frame, the query
//! text and a block cursor while the query is being edited.

use crate::ui::helpers::{display_width, position_cursor, truncate_chars};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

const CURSOR: &str = "█";

/// Renders the 3-line search input box at the specified row.
///
/// # Layout
///
/// ```text
/// [margin] ┌──────────────────┐ [margin]
/// [margin] │ Search city: ... │ [margin]
/// [margin] └──────────────────┘ [margin]
/// ```
///
/// Returns the next available row (`row + 3`).
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let label = " Search city: ";
    let cursor_width = usize::from(search.is_typing);
    let query_width = inner_width.saturating_sub(display_width(label) + cursor_width);
    let query = tail_chars(&search.query, query_width);
    let used = display_width(label) + display_width(query) + cursor_width;

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", truncate_chars(label, inner_width));
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{query}");
    if search.is_typing {
        print!("{CURSOR}");
    }
    print!("{}", " ".repeat(inner_width.saturating_sub(used)));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}

/// Last `max` characters of `text`, so the end of a long query stays visible.
fn tail_chars(text: &str, max: usize) -> &str {
    let len = display_width(text);
    if len <= max {
        return text;
    }
    text.char_indices()
        .nth(len - max)
        .map_or("", |(byte_idx, _)| &text[byte_idx..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_queries_keep_their_tail() {
        assert_eq!(tail_chars("Llanfairpwll", 4), "pwll");
        assert_eq!(tail_chars("Zürich", 10), "Zürich");
        assert_eq!(tail_chars("Zürich", 0), "");
    }
}

//! Shared rendering utilities and helpers.
//!
//! Text measurement and match highlighting operate on character indices, not
//! byte indices, so city names like "São Paulo" or "Zürich" render aligned.
//!
//! # Example
//!
//! ```rust
//! use weatherdash::ui::helpers::split_highlighted;
//!
//! let segments = split_highlighted("Hamburg", &[(3, 7)]);
//! assert_eq!(segments, vec![("Ham".to_string(), false), ("burg".to_string(), true)]);
//! ```

use crate::ui::theme::Theme;

/// Positions the cursor at a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Width of `text` in terminal cells, counting one cell per character.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Truncates `text` to at most `max` characters.
#[must_use]
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Prints `text` left-aligned in a field `width` cells wide.
pub fn print_padded(text: &str, width: usize) {
    let text = truncate_chars(text, width);
    print!("{text}{}", " ".repeat(width.saturating_sub(display_width(text))));
}

/// Splits `text` into `(segment, is_highlighted)` pieces.
///
/// `ranges` are `(start, end)` character indices with exclusive end, sorted
/// and non-overlapping. Ranges past the end of `text` are clipped.
#[must_use]
pub fn split_highlighted(text: &str, ranges: &[(usize, usize)]) -> Vec<(String, bool)> {
    let chars: Vec<char> = text.chars().collect();
    let mut segments = Vec::new();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.clamp(current_pos, chars.len());
        let end = end.clamp(start, chars.len());

        if start > current_pos {
            segments.push((chars[current_pos..start].iter().collect(), false));
        }
        if end > start {
            segments.push((chars[start..end].iter().collect(), true));
        }
        current_pos = end;
    }

    if current_pos < chars.len() {
        segments.push((chars[current_pos..].iter().collect(), false));
    }
    segments
}

/// Renders text with highlighted character ranges for search matches.
///
/// Selected rows skip match highlighting so the selection background stays
/// uniform. After each highlight the row's base foreground is restored.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    for (segment, highlighted) in split_highlighted(text, ranges) {
        if highlighted {
            print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
            print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
            print!("{segment}");
            print!("{}", Theme::reset());
            print!("{}", Theme::fg(&theme.colors.text_normal));
        } else {
            print!("{segment}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_respects_char_boundaries() {
        assert_eq!(truncate_chars("Zürich", 2), "Zü");
        assert_eq!(truncate_chars("Oslo", 10), "Oslo");
        assert_eq!(display_width("São Paulo"), 9);
    }

    #[test]
    fn out_of_range_highlights_are_clipped() {
        let segments = split_highlighted("Oslo", &[(2, 9)]);
        assert_eq!(segments, vec![("Os".to_string(), false), ("lo".to_string(), true)]);
        assert_eq!(split_highlighted("Oslo", &[(7, 9)]), vec![("Oslo".to_string(), false)]);
    }

    #[test]
    fn multiple_ranges_interleave_with_plain_text() {
        let segments = split_highlighted("Belgrade", &[(0, 1), (3, 5)]);
        assert_eq!(
            segments,
            vec![
                ("B".to_string(), true),
                ("el".to_string(), false),
                ("gr".to_string(), true),
                ("ade".to_string(), false),
            ]
        );
    }
}

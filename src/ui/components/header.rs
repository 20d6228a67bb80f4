//! Header component renderer.
//!
//! Renders the centered title bar and the backend health line beneath it.

use crate::ui::helpers::{display_width, position_cursor, truncate_chars};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{HeaderInfo, HealthIndicator, HealthInfo};

/// Renders the header title bar at the specified row.
///
/// The title is centered, bold and padded to the full terminal width so an
/// optional header background spans the line.
///
/// Returns the next available row.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title = truncate_chars(&header.title, cols);
    let title_len = display_width(title);
    let padding = (cols.saturating_sub(title_len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(padding));
    print!("{title}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + title_len)));

    print!("{}", Theme::reset());
    row + 1
}

/// Renders the centered backend health line.
///
/// Colored by indicator: healthy, unhealthy, or dimmed while the probe is
/// still pending.
pub fn render_health_line(row: usize, health: &HealthInfo, theme: &Theme, cols: usize) -> usize {
    let text = truncate_chars(&health.text, cols);
    let text_len = display_width(text);
    let padding = (cols.saturating_sub(text_len)) / 2;

    position_cursor(row, 1);
    match health.indicator {
        HealthIndicator::Checking => {
            print!("{}", Theme::dim());
            print!("{}", Theme::fg(&theme.colors.text_dim));
        }
        HealthIndicator::Connected => print!("{}", Theme::fg(&theme.colors.healthy_fg)),
        HealthIndicator::Disconnected => print!("{}", Theme::fg(&theme.colors.unhealthy_fg)),
    }
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
    row + 1
}

//! Status line renderer: loading indicator, error text or result summary.

use crate::ui::helpers::{position_cursor, print_padded};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{StatusInfo, StatusKind};

/// Renders the status line, or a blank line when there is nothing to report.
pub fn render_status_line(
    row: usize,
    status: Option<&StatusInfo>,
    theme: &Theme,
    cols: usize,
) -> usize {
    position_cursor(row, 1);
    let width = cols.saturating_sub(1);

    let Some(status) = status else {
        print!("{}", " ".repeat(cols));
        return row + 1;
    };

    match status.kind {
        StatusKind::Loading => {
            print!("{}", Theme::dim());
            print!("{}", Theme::fg(&theme.colors.text_dim));
        }
        StatusKind::Error => {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.error_fg));
        }
        StatusKind::Info => print!("{}", Theme::fg(&theme.colors.text_dim)),
    }
    print!(" ");
    print_padded(&status.message, width);
    print!("{}", Theme::reset());
    row + 1
}

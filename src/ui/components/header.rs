//! Header component renderer.
//!
//! Two rows: the title bar (screen title plus the sort/hidden summary or the
//! slideshow banner) and the directory being listed.

use crate::ui::helpers::{truncate, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title bar and location rows starting at `row`.
///
/// # Returns
///
/// The next available row position (row + 2).
///
/// # Layout
///
/// ```text
///  phogo  Sort: Name | Hidden: off
///  /home/me/photos
/// ```
pub fn render_header(frame: &mut Frame, row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    frame.set(row, render_title_bar(&header.title, &header.summary, theme, cols));

    let mut location = Theme::fg(&theme.colors.text_dim);
    location.push(' ');
    location.push_str(&truncate(&header.location, cols.saturating_sub(1)));
    frame.set(row + 1, location);

    row + 2
}

/// Styled title pill followed by a dimmed summary, cut to `cols`.
pub fn render_title_bar(title: &str, summary: &str, theme: &Theme, cols: usize) -> String {
    let pill = truncate(&format!(" {title} "), cols);
    let pill_len = pill.chars().count();

    let mut line = String::new();
    line.push_str(Theme::bold());
    line.push_str(&Theme::fg(&theme.colors.title_fg));
    if let Some(bg) = &theme.colors.title_bg {
        line.push_str(&Theme::bg(bg));
    }
    line.push_str(&pill);
    line.push_str(Theme::reset());

    let room = cols.saturating_sub(pill_len + 2);
    if room > 0 && !summary.is_empty() {
        line.push_str("  ");
        line.push_str(&Theme::fg(&theme.colors.status_fg));
        line.push_str(&truncate(summary, room));
    }
    line
}

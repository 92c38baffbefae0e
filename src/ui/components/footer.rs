//! Footer component renderer.
//!
//! The keybinding hints row and the status message row below it.

use crate::ui::helpers::{truncate, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the hints row at `row` and the status row at `row + 1`.
///
/// Hints are dropped from the right when they do not fit in `cols`.
///
/// # Returns
///
/// The next available row position (row + 2).
pub fn render_footer(frame: &mut Frame, row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let mut line = String::new();
    let mut used = 0;

    for (key, action) in &footer.hints {
        let width = key.chars().count() + action.chars().count() + 3;
        if used + width > cols {
            break;
        }
        line.push(' ');
        line.push_str(&Theme::fg(&theme.colors.key_fg));
        line.push_str(key);
        line.push(' ');
        line.push_str(&Theme::fg(&theme.colors.text_dim));
        line.push_str(action);
        line.push(' ');
        used += width;
    }
    frame.set(row, line);

    if let Some(status) = &footer.status {
        frame.set(
            row + 1,
            format!(
                "{} {}",
                Theme::fg(&theme.colors.status_fg),
                truncate(status, cols.saturating_sub(1))
            ),
        );
    }

    row + 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_that_do_not_fit_are_dropped() {
        let theme = Theme::default();
        let footer = FooterInfo {
            hints: vec![("q", "quit"), ("enter", "view")],
            status: Some("Path copied!".to_string()),
        };

        let mut frame = Frame::new(2);
        render_footer(&mut frame, 1, &footer, &theme, 8);
        let output = frame.finish();
        assert!(output.contains("quit"));
        assert!(!output.contains("view"));
        assert!(output.contains("Path copied!"));
    }
}

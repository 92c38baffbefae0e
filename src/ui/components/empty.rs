//! Empty state component renderer.

use crate::ui::helpers::{center, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the two-line empty state message, centered, at `row`.
///
/// # Layout
///
/// ```text
/// [left padding] MESSAGE [right padding]
/// [left padding] subtitle [right padding]
/// ```
pub fn render_empty_state(frame: &mut Frame, row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    frame.set(
        row,
        format!("{}{}", Theme::fg(&theme.colors.empty_state_fg), center(&empty.message, cols)),
    );
    frame.set(
        row + 1,
        format!(
            "{}{}{}",
            Theme::dim(),
            Theme::fg(&theme.colors.text_dim),
            center(&empty.subtitle, cols)
        ),
    );
}

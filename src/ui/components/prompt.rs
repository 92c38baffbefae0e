//! Prompt box component renderer.
//!
//! A bordered three-row box used for the search query, the rename draft and
//! the delete confirmation.

use crate::ui::helpers::{pad, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PromptInfo;

/// Horizontal margin for the prompt box (spaces on left and right).
const PROMPT_BOX_MARGIN: usize = 2;

/// Renders the prompt box starting at `row`.
///
/// # Returns
///
/// The next available row position (row + 3).
///
/// # Layout
///
/// ```text
/// [margin] ┌─────────────────┐ [margin]
/// [margin] │ Search: holiday▏│ [margin]
/// [margin] └─────────────────┘ [margin]
/// ```
pub fn render_prompt(frame: &mut Frame, row: usize, prompt: &PromptInfo, theme: &Theme, cols: usize) -> usize {
    let margin = " ".repeat(PROMPT_BOX_MARGIN);
    let inner_width = cols.saturating_sub(PROMPT_BOX_MARGIN * 2 + 2);
    let border = Theme::fg(&theme.colors.prompt_border);

    frame.set(row, format!("{margin}{border}┌{}┐", "─".repeat(inner_width)));

    let cursor = if prompt.editing { "▏" } else { "" };
    let text = format!(" {}: {}{cursor}", prompt.label, prompt.text);
    frame.set(
        row + 1,
        format!(
            "{margin}{border}│{}{}{border}│",
            Theme::fg(&theme.colors.text_normal),
            pad(&text, inner_width)
        ),
    );

    frame.set(row + 2, format!("{margin}{border}└{}┘", "─".repeat(inner_width)));

    row + 3
}

//! Table component renderer.
//!
//! Renders a list screen as a two-column table with NAME and DETAILS
//! columns. Used for images, folders and the render-mode picker alike.

use crate::ui::helpers::{self, pad, truncate, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Fixed width of the NAME column, including the selection marker.
const NAME_COLUMN_WIDTH: usize = 40;

fn name_width(cols: usize) -> usize {
    NAME_COLUMN_WIDTH.min(cols.saturating_sub(cols / 3))
}

/// Renders the column headers at `row`.
///
/// # Returns
///
/// The next available row position (row + 1).
pub fn render_table_headers(frame: &mut Frame, row: usize, theme: &Theme, cols: usize) -> usize {
    let width = name_width(cols);
    frame.set(
        row,
        format!(
            "{}{}  {}{}",
            Theme::bold(),
            Theme::fg(&theme.colors.text_dim),
            pad("NAME", width.saturating_sub(2)),
            truncate("DETAILS", cols.saturating_sub(width))
        ),
    );
    row + 1
}

/// Renders rows from `row` up to (not including) `limit`.
///
/// # Returns
///
/// The next available row position.
pub fn render_table_rows(
    frame: &mut Frame,
    row: usize,
    limit: usize,
    items: &[DisplayItem],
    theme: &Theme,
    cols: usize,
) -> usize {
    let mut current_row = row;
    for item in items {
        if current_row >= limit {
            break;
        }
        frame.set(current_row, render_table_row(item, theme, cols));
        current_row += 1;
    }
    current_row
}

/// One row: marker, NAME (fixed width), DETAILS (rest of the line).
///
/// # Styling Precedence
///
/// 1. Selection colors (if `is_selected`)
/// 2. Search match highlights (unless selected)
/// 3. Folder color for directories, normal text otherwise
///
/// The row is padded to the full width so the selection background spans
/// the whole line.
fn render_table_row(item: &DisplayItem, theme: &Theme, cols: usize) -> String {
    let width = name_width(cols);
    let mut line = String::new();

    if item.is_selected {
        line.push_str(&Theme::fg(&theme.colors.selection_fg));
        line.push_str(&Theme::bg(&theme.colors.selection_bg));
        line.push_str("> ");
    } else {
        let color = if item.is_directory {
            &theme.colors.directory_fg
        } else {
            &theme.colors.text_normal
        };
        line.push_str(&Theme::fg(color));
        line.push_str("  ");
    }

    let title_width = width.saturating_sub(3);
    let title = truncate(&item.title, title_width);
    line.push_str(&helpers::render_highlighted_text(
        &title,
        &item.highlight_ranges,
        theme,
        item.is_selected,
    ));
    line.push_str(&" ".repeat(width.saturating_sub(2 + title.chars().count())));

    if !item.is_selected {
        line.push_str(&Theme::fg(&theme.colors.text_dim));
    }
    let details_width = cols.saturating_sub(width);
    line.push_str(&pad(&item.subtitle, details_width));

    line
}

//! Composable UI component renderers.
//!
//! Each component writes its rows into a [`Frame`] starting at a given row
//! and returns the next free row, so screens are assembled top to bottom.
//!
//! # Components
//!
//! - `header`: Title bar and location row
//! - `prompt`: Search/rename/delete input box
//! - `table`: Entry list with NAME and DETAILS columns
//! - `viewer`: Text-art image display
//! - `empty`: Empty state message
//! - `footer`: Keybinding hints and status message
//!
//! # Layouts
//!
//! - [`render_list_screen`]: Header + Border + Prompt? + Table + Border + Footer
//! - [`render_viewer_screen`]: Title + Text art + Footer

mod empty;
mod footer;
mod header;
mod prompt;
mod table;
mod viewer;

use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayItem, EmptyState, ImageView, UIViewModel};

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use prompt::render_prompt;
use table::{render_table_headers, render_table_rows};
use viewer::render_viewer;

/// Rows reserved at the bottom of every screen: hints and status.
const FOOTER_ROWS: usize = 2;

/// Renders a horizontal border line at `row`.
///
/// # Returns
///
/// The next available row position (row + 1).
fn render_border(frame: &mut Frame, row: usize, color: &str, cols: usize) -> usize {
    frame.set(row, format!("{}{}", Theme::fg(color), "─".repeat(cols)));
    row + 1
}

/// Renders a list screen (catalog or render-mode picker).
///
/// Layout structure:
/// ```text
/// [Title bar]
/// [Location]
/// [Border]
/// [Prompt - 3 lines, only while searching, renaming or confirming]
/// [Table Headers]
/// [Table Rows or empty state]
/// [Blank padding to fill screen]
/// [Border]
/// [Footer hints]
/// [Status]
/// ```
pub fn render_list_screen(
    frame: &mut Frame,
    vm: &UIViewModel,
    items: &[DisplayItem],
    empty_state: Option<&EmptyState>,
    theme: &Theme,
    cols: usize,
) {
    let rows = frame.rows();
    let footer_start = rows.saturating_sub(FOOTER_ROWS - 1);
    let bottom_border = footer_start.saturating_sub(1);

    let mut current_row = render_header(frame, 1, &vm.header, theme, cols);
    current_row = render_border(frame, current_row, &theme.colors.border, cols);
    if let Some(prompt) = &vm.prompt {
        current_row = render_prompt(frame, current_row, prompt, theme, cols);
    }

    if let Some(empty) = empty_state {
        let middle = current_row + bottom_border.saturating_sub(current_row) / 2;
        render_empty_state(frame, middle.saturating_sub(1).max(current_row), empty, theme, cols);
    } else {
        current_row = render_table_headers(frame, current_row, theme, cols);
        render_table_rows(frame, current_row, bottom_border, items, theme, cols);
    }

    render_border(frame, bottom_border, &theme.colors.border, cols);
    render_footer(frame, footer_start, &vm.footer, theme, cols);
}

/// Renders the image viewer screen.
///
/// Layout structure:
/// ```text
/// [Title bar]
/// [Text art - rows minus 3 lines]
/// [Footer hints]
/// [Status]
/// ```
pub fn render_viewer_screen(frame: &mut Frame, vm: &UIViewModel, view: &ImageView, theme: &Theme, cols: usize) {
    let rows = frame.rows();
    let footer_start = rows.saturating_sub(FOOTER_ROWS - 1);

    render_viewer(frame, 1, footer_start, &vm.header, view, theme, cols);
    render_footer(frame, footer_start, &vm.footer, theme, cols);
}

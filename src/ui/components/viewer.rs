//! Image viewer component renderer.

use crate::ui::components::header::render_title_bar;
use crate::ui::helpers::{center, truncate, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{HeaderInfo, ImageView};

/// Renders the viewer title row and the text art below it, up to (not
/// including) `limit`.
///
/// Rendered lines are written untouched: they already carry their own color
/// sequences and fit the viewport the render was requested for. While a
/// render is outstanding, or when it failed, a centered message replaces the
/// art.
pub fn render_viewer(
    frame: &mut Frame,
    row: usize,
    limit: usize,
    header: &HeaderInfo,
    view: &ImageView,
    theme: &Theme,
    cols: usize,
) -> usize {
    let title = if view.name.is_empty() {
        header.title.clone()
    } else {
        view.name.clone()
    };
    frame.set(row, render_title_bar(&title, &header.summary, theme, cols));

    let body_start = row + 1;
    let middle = body_start + limit.saturating_sub(body_start) / 2;

    if let Some(error) = &view.error {
        frame.set(
            middle,
            format!("{}{}", Theme::fg(&theme.colors.error_fg), center(&truncate(error, cols), cols)),
        );
        return limit;
    }

    if let Some(placeholder) = &view.placeholder {
        frame.set(
            middle,
            format!("{}{}", Theme::fg(&theme.colors.text_dim), center(placeholder, cols)),
        );
        return limit;
    }

    for (offset, line) in view.lines.iter().enumerate() {
        let current_row = body_start + offset;
        if current_row >= limit {
            break;
        }
        frame.set(current_row, line.clone());
    }
    limit
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> HeaderInfo {
        HeaderInfo {
            title: "Image View".to_string(),
            summary: "Mode: Color".to_string(),
            location: "/pics".to_string(),
        }
    }

    #[test]
    fn art_lines_are_written_below_the_title() {
        let theme = Theme::default();
        let view = ImageView {
            name: "cat.png".to_string(),
            lines: vec!["@@##".to_string(), "..::".to_string(), "====".to_string()],
            placeholder: None,
            error: None,
        };

        let mut frame = Frame::new(4);
        render_viewer(&mut frame, 1, 3, &header(), &view, &theme, 20);
        let output = frame.finish();
        assert!(output.contains(" cat.png "));
        assert!(output.contains("\u{1b}[2;1H@@##"));
        assert!(output.contains("\u{1b}[3;1H..::"));
        assert!(!output.contains("===="));
    }

    #[test]
    fn failures_replace_the_art() {
        let theme = Theme::default();
        let view = ImageView {
            name: "broken.png".to_string(),
            lines: vec![],
            placeholder: None,
            error: Some("Image error: unsupported format".to_string()),
        };

        let mut frame = Frame::new(10);
        render_viewer(&mut frame, 1, 9, &header(), &view, &theme, 60);
        let output = frame.finish();
        assert!(output.contains("Image error: unsupported format"));
        assert!(output.contains(&Theme::fg(&theme.colors.error_fg)));
    }
}

//! Shared rendering utilities and helpers.
//!
//! Components never print directly: they write positioned lines into a
//! [`Frame`], and the runtime flushes the finished frame to the terminal in
//! a single write. This module holds the frame buffer plus the text helpers
//! the components share (truncation, padding and match highlighting).
//!
//! All widths are counted in characters, not bytes.
//!
//! # Example
//!
//! ```rust
//! use phogo::ui::helpers::{render_highlighted_text, Frame};
//! use phogo::ui::Theme;
//!
//! let theme = Theme::default();
//! let mut frame = Frame::new(3);
//! frame.set(1, render_highlighted_text("cat.png", &[(0, 3)], &theme, false));
//! let output = frame.finish();
//! assert!(output.starts_with("\u{1b}[1;1H"));
//! ```

use crate::ui::theme::Theme;

/// One screen's worth of lines, indexed by 1-based row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    lines: Vec<String>,
}

impl Frame {
    #[must_use]
    pub fn new(rows: usize) -> Self {
        Self {
            lines: vec![String::new(); rows],
        }
    }

    /// Replaces the content of `row` (1-indexed). Rows outside the frame
    /// are ignored.
    pub fn set(&mut self, row: usize, content: String) {
        if let Some(line) = row.checked_sub(1).and_then(|index| self.lines.get_mut(index)) {
            *line = content;
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.lines.len()
    }

    /// Serializes the frame: every row is positioned absolutely, reset and
    /// cleared to the end of the line, so stale content never survives.
    #[must_use]
    pub fn finish(self) -> String {
        let mut output = String::new();
        for (index, line) in self.lines.iter().enumerate() {
            output.push_str(&format!("\u{1b}[{};1H", index + 1));
            output.push_str(line);
            output.push_str(Theme::reset());
            output.push_str("\u{1b}[K");
        }
        output
    }
}

/// Cuts `text` to at most `width` characters, ending with `…` when cut.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

/// Left-aligns `text` in a field of `width` characters, truncating if needed.
#[must_use]
pub fn pad(text: &str, width: usize) -> String {
    let cut = truncate(text, width);
    let fill = width.saturating_sub(cut.chars().count());
    format!("{cut}{}", " ".repeat(fill))
}

/// Centers `text` in a field of `width` characters.
#[must_use]
pub fn center(text: &str, width: usize) -> String {
    let cut = truncate(text, width);
    let len = cut.chars().count();
    let left = width.saturating_sub(len) / 2;
    format!("{}{cut}{}", " ".repeat(left), " ".repeat(width.saturating_sub(left + len)))
}

/// Renders text with highlighted character ranges for search matches.
///
/// Ranges are `(start, end)` character indices. When `is_selected` is true
/// the selection colors win and the text is returned unstyled, so the
/// caller's selection background stays intact.
///
/// After each highlighted section the styling is reset; the caller is
/// expected to have set the base color only once per row, so it is
/// re-applied here with `text_normal`.
#[must_use]
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) -> String {
    if ranges.is_empty() || is_selected {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut output = String::new();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        output.extend(&chars[current_pos..start]);
        output.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        output.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        output.extend(&chars[start..end]);
        output.push_str(Theme::reset());
        output.push_str(&Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    output.extend(&chars[current_pos..]);
    output
}

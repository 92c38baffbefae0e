//! View model computation for a [`Session`].

use crate::app::modes::Mode;
use crate::app::state::{Session, LIST_CHROME_ROWS, PROMPT_ROWS};
use crate::catalog::CatalogKind;
use crate::domain::entry::{CatalogItem, ListItem, RenderMode};
use crate::ui::viewmodel::{
    BodyView, DisplayItem, EmptyState, FooterInfo, HeaderInfo, ImageView, PromptInfo, UIViewModel,
};

impl Session {
    /// Computes a renderable UI view model from current state and terminal dimensions.
    ///
    /// # Windowing Algorithm
    ///
    /// 1. Calculate available rows after subtracting UI chrome (header, footer, prompt)
    /// 2. Center window around the cursor
    /// 3. Adjust window if near start/end to maximize visible items
    /// 4. Compute relative selection index within visible window
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use phogo::app::Session;
    /// # fn demo(session: &Session) {
    /// let viewmodel = session.compute_viewmodel(24, 80);
    /// # }
    /// ```
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let _span = tracing::trace_span!("compute_viewmodel", rows, cols, mode = ?self.mode).entered();

        let body = match self.mode {
            Mode::ViewingImage => BodyView::Image(self.compute_image_view(rows)),
            Mode::SelectingFilter => self.compute_filter_list(rows),
            _ => self.compute_catalog_list(rows),
        };

        UIViewModel {
            header: self.compute_header(),
            body,
            prompt: self.compute_prompt(),
            footer: self.compute_footer(),
        }
    }

    fn compute_catalog_list(&self, rows: usize) -> BodyView {
        if self.catalog.is_empty() {
            return BodyView::List {
                items: vec![],
                selected_index: 0,
                empty_state: Some(self.compute_empty_state()),
            };
        }

        let needle = self.active_query().to_lowercase();
        let now = chrono::Utc::now().timestamp();

        let (start, end) = window(self.cursor, self.catalog.len(), self.available_rows(rows));
        let items = self.catalog.items[start..end]
            .iter()
            .enumerate()
            .map(|(offset, item)| {
                let title = item.display_title();
                let highlight_ranges = match item {
                    CatalogItem::Image(_) | CatalogItem::Directory(_) => {
                        highlight_ranges(&title, &needle)
                    }
                    CatalogItem::Parent | CatalogItem::Unreadable { .. } => vec![],
                };
                DisplayItem {
                    title,
                    subtitle: item.display_subtitle(now),
                    is_selected: start + offset == self.cursor,
                    is_directory: matches!(item, CatalogItem::Parent | CatalogItem::Directory(_)),
                    highlight_ranges,
                }
            })
            .collect();

        BodyView::List {
            items,
            selected_index: self.cursor.saturating_sub(start),
            empty_state: None,
        }
    }

    fn compute_filter_list(&self, rows: usize) -> BodyView {
        let (start, end) = window(self.filter_cursor, RenderMode::ALL.len(), self.available_rows(rows));
        let items = RenderMode::ALL[start..end]
            .iter()
            .enumerate()
            .map(|(offset, mode)| {
                let mut subtitle = mode.display_subtitle(0);
                if *mode == self.render_mode {
                    subtitle.push_str("  (current)");
                }
                DisplayItem {
                    title: mode.display_title(),
                    subtitle,
                    is_selected: start + offset == self.filter_cursor,
                    is_directory: false,
                    highlight_ranges: vec![],
                }
            })
            .collect();

        BodyView::List {
            items,
            selected_index: self.filter_cursor.saturating_sub(start),
            empty_state: None,
        }
    }

    fn compute_image_view(&self, rows: usize) -> ImageView {
        let name = self
            .selected()
            .map(|item| item.name().to_string())
            .unwrap_or_default();
        let height = rows.saturating_sub(usize::from(crate::app::state::VIEWER_CHROME_ROWS));

        let mut view = ImageView {
            name,
            lines: vec![],
            placeholder: None,
            error: None,
        };

        if self.render.pending {
            view.placeholder = Some("Rendering...".to_string());
            return view;
        }

        match &self.render.content {
            Some(Ok(text)) => {
                view.lines = text
                    .lines()
                    .skip(self.render.scroll)
                    .take(height)
                    .map(str::to_string)
                    .collect();
            }
            Some(Err(message)) => view.error = Some(message.clone()),
            None => view.placeholder = Some("Nothing rendered yet".to_string()),
        }

        view
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = match self.mode {
            Mode::Browsing | Mode::Searching | Mode::Renaming | Mode::ConfirmingDelete => {
                "phogo".to_string()
            }
            Mode::ViewingImage | Mode::DirectoryBrowsing | Mode::SelectingFilter => {
                self.mode.label().to_string()
            }
        };

        let summary = if self.slideshow.is_active() {
            "SLIDESHOW LOOPING (any key to stop)".to_string()
        } else if self.mode == Mode::ViewingImage {
            format!("Mode: {}", self.render_mode)
        } else {
            let mut summary = format!(
                "Sort: {} | Hidden: {}",
                self.sort_key.label(),
                if self.show_hidden { "on" } else { "off" }
            );
            if !self.search_query.is_empty() && self.mode != Mode::Searching {
                summary.push_str(&format!(" | Filter: {}", self.search_query));
            }
            summary
        };

        HeaderInfo {
            title,
            summary,
            location: self.catalog_dir().display().to_string(),
        }
    }

    fn compute_prompt(&self) -> Option<PromptInfo> {
        match self.mode {
            Mode::Searching => Some(PromptInfo {
                label: "Search".to_string(),
                text: self.input.value().to_string(),
                editing: true,
            }),
            Mode::Renaming => Some(PromptInfo {
                label: "Rename".to_string(),
                text: self.input.value().to_string(),
                editing: true,
            }),
            Mode::ConfirmingDelete => Some(PromptInfo {
                label: "Delete?".to_string(),
                text: format!(
                    "{} (y to confirm, any other key to cancel)",
                    self.selected().map_or("", CatalogItem::name)
                ),
                editing: false,
            }),
            _ => None,
        }
    }

    /// Computes footer keybinding hints for the current mode.
    fn compute_footer(&self) -> FooterInfo {
        let hints = match self.mode {
            Mode::Browsing => vec![
                ("j/k", "move"),
                ("enter", "view"),
                ("P", "slide"),
                ("s", "sort"),
                ("y", "path"),
                ("r", "name"),
                ("x", "del"),
                ("h", "hide"),
                ("/", "find"),
                ("d", "dirs"),
                ("f", "filter"),
                ("q", "quit"),
            ],
            Mode::ViewingImage => vec![
                ("1-4", "filter"),
                ("j/k", "scroll"),
                ("f", "picker"),
                ("esc", "back"),
            ],
            Mode::DirectoryBrowsing => vec![
                ("j/k", "move"),
                ("enter", "open"),
                ("d", "set"),
                ("h", "hide"),
                ("/", "find"),
                ("esc", "back"),
            ],
            Mode::Searching | Mode::Renaming => vec![("enter", "confirm"), ("esc", "cancel")],
            Mode::ConfirmingDelete => vec![("y", "yes"), ("n", "no")],
            Mode::SelectingFilter => vec![
                ("j/k", "move"),
                ("1-4", "jump"),
                ("enter", "apply"),
                ("esc", "cancel"),
            ],
        };

        FooterInfo {
            hints,
            status: self.status.clone(),
        }
    }

    fn compute_empty_state(&self) -> EmptyState {
        let query = self.active_query();
        let (message, subtitle) = match self.catalog_kind() {
            CatalogKind::Images if !query.is_empty() => (
                format!("No images match \"{query}\""),
                "Press / to change the search".to_string(),
            ),
            CatalogKind::Images => (
                "No images here".to_string(),
                "Press d to browse another folder".to_string(),
            ),
            CatalogKind::Directories => (
                "No folders here".to_string(),
                "Press d to use this folder".to_string(),
            ),
        };
        EmptyState { message, subtitle }
    }

    /// Search text currently narrowing the list: the draft while searching.
    fn active_query(&self) -> &str {
        if self.mode == Mode::Searching {
            self.input.value()
        } else {
            &self.search_query
        }
    }

    fn available_rows(&self, total_rows: usize) -> usize {
        let chrome = if self.compute_prompt().is_some() {
            LIST_CHROME_ROWS + PROMPT_ROWS
        } else {
            LIST_CHROME_ROWS
        };
        total_rows.saturating_sub(chrome).max(1)
    }
}

/// Visible `[start, end)` range of `len` rows centered on `selected`.
fn window(selected: usize, len: usize, available: usize) -> (usize, usize) {
    let mut start = selected.saturating_sub(available / 2);
    let end = (start + available).min(len);

    if end - start < available && len >= available {
        start = end.saturating_sub(available);
    }
    (start, end)
}

/// Character ranges of `title` containing `needle` (already lowercased).
fn highlight_ranges(title: &str, needle: &str) -> Vec<(usize, usize)> {
    if needle.is_empty() {
        return vec![];
    }

    let lowered: Vec<char> = title.chars().flat_map(char::to_lowercase).collect();
    let title_len = title.chars().count();
    if lowered.len() != title_len {
        return vec![];
    }

    let needle: Vec<char> = needle.chars().collect();
    let mut ranges = Vec::new();
    let mut index = 0;
    while index + needle.len() <= lowered.len() {
        if lowered[index..index + needle.len()] == needle[..] {
            ranges.push((index, index + needle.len()));
            index += needle.len();
        } else {
            index += 1;
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_centers_and_clamps() {
        assert_eq!(window(0, 100, 10), (0, 10));
        assert_eq!(window(50, 100, 10), (45, 55));
        assert_eq!(window(99, 100, 10), (90, 100));
        assert_eq!(window(2, 3, 10), (0, 3));
    }

    #[test]
    fn highlight_finds_every_match() {
        assert_eq!(highlight_ranges("Cat-cat.png", "cat"), vec![(0, 3), (4, 7)]);
        assert!(highlight_ranges("dog.png", "cat").is_empty());
        assert!(highlight_ranges("dog.png", "").is_empty());
    }
}

//! Session state and the operations transitions are built from.
//!
//! [`Session`] is the single mutable aggregate of a running browser. It is
//! owned by the event loop and mutated only by
//! [`handle_event`](crate::app::handle_event); the catalog engine and the
//! render dispatcher receive copies of what they need and never hold a
//! reference back into it.
//!
//! # Invariants
//!
//! - The catalog always lists the working directory while in `Browsing`,
//!   `ViewingImage`, `Renaming` and `ConfirmingDelete`, and the browsing
//!   directory while in `DirectoryBrowsing` (and `Searching` opened from it).
//! - `render.pending` is true from the moment a request is issued until the
//!   completion with the latest sequence number is consumed.

use crate::app::input::TextInput;
use crate::app::modes::Mode;
use crate::app::slideshow::Slideshow;
use crate::app::Action;
use crate::catalog::{build_catalog, Catalog, CatalogKind, CatalogQuery, FileSystem};
use crate::domain::entry::{CatalogItem, RenderMode, SortKey};
use crate::ui::theme::Theme;
use crate::worker::{RenderCompletion, RenderRequest};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Rows the viewer uses for its title, footer and status line.
pub const VIEWER_CHROME_ROWS: u16 = 3;

/// Rows the list screens use for header, borders, footer and status.
pub const LIST_CHROME_ROWS: usize = 7;

/// Extra rows taken by the prompt box while searching or renaming.
pub const PROMPT_ROWS: usize = 3;

/// Terminal size in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { cols: 80, rows: 24 }
    }
}

/// What the viewer currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderState {
    /// Sequence number of the most recently issued request.
    pub latest_seq: u64,

    /// A request is outstanding; the viewer shows a placeholder.
    pub pending: bool,

    /// Last applied outcome: text art or an error message.
    pub content: Option<Result<String, String>>,

    /// First visible line of `content`.
    pub scroll: usize,
}

/// The browsing session.
pub struct Session {
    pub mode: Mode,

    /// Directory whose images are browsed.
    pub working_dir: PathBuf,

    /// Directory being explored while picking a new working directory.
    pub browsing_dir: PathBuf,

    /// Committed search text. Persists across mode switches.
    pub search_query: String,

    pub show_hidden: bool,
    pub sort_key: SortKey,
    pub render_mode: RenderMode,

    pub catalog: Catalog,

    /// Index into `catalog.items`.
    pub cursor: usize,

    pub render: RenderState,
    pub slideshow: Slideshow,

    /// User-facing message shown below the footer.
    pub status: Option<String>,

    /// Draft text for the search and rename prompts.
    pub input: TextInput,

    /// Mode to return to when a search is confirmed or cancelled.
    pub search_return: Mode,

    /// Highlighted row of the filter picker.
    pub filter_cursor: usize,

    /// Mode to return to when the filter picker closes.
    pub filter_return: Mode,

    pub viewport: Viewport,
    pub theme: Theme,

    fs: Arc<dyn FileSystem>,

    /// Listing failure currently shown as the status, if any.
    listing_error: Option<String>,
}

impl Session {
    /// Creates a session browsing the images of `working_dir`.
    ///
    /// The catalog is loaded immediately.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use phogo::app::{Session, Viewport};
    /// use phogo::app::slideshow::Slideshow;
    /// use phogo::catalog::OsFileSystem;
    /// use phogo::ui::Theme;
    /// use std::sync::Arc;
    ///
    /// let session = Session::new(
    ///     "/home/me/photos".into(),
    ///     Arc::new(OsFileSystem),
    ///     Theme::default(),
    ///     Viewport::default(),
    ///     Slideshow::default(),
    /// );
    /// println!("{} images", session.catalog.image_count());
    /// ```
    #[must_use]
    pub fn new(
        working_dir: PathBuf,
        fs: Arc<dyn FileSystem>,
        theme: Theme,
        viewport: Viewport,
        slideshow: Slideshow,
    ) -> Self {
        let mut session = Self {
            mode: Mode::Browsing,
            browsing_dir: working_dir.clone(),
            working_dir,
            search_query: String::new(),
            show_hidden: false,
            sort_key: SortKey::default(),
            render_mode: RenderMode::default(),
            catalog: Catalog::default(),
            cursor: 0,
            render: RenderState::default(),
            slideshow,
            status: None,
            input: TextInput::default(),
            search_return: Mode::Browsing,
            filter_cursor: 0,
            filter_return: Mode::Browsing,
            viewport,
            theme,
            fs,
            listing_error: None,
        };
        session.reload_catalog();
        session
    }

    #[must_use]
    pub fn fs(&self) -> &dyn FileSystem {
        self.fs.as_ref()
    }

    /// Which listing the current mode shows.
    #[must_use]
    pub fn catalog_kind(&self) -> CatalogKind {
        let origin = if self.mode == Mode::Searching {
            self.search_return
        } else {
            self.mode
        };

        if origin == Mode::DirectoryBrowsing {
            CatalogKind::Directories
        } else {
            CatalogKind::Images
        }
    }

    /// Directory the current catalog lists.
    #[must_use]
    pub fn catalog_dir(&self) -> &Path {
        match self.catalog_kind() {
            CatalogKind::Directories => &self.browsing_dir,
            CatalogKind::Images => &self.working_dir,
        }
    }

    /// Rebuilds the catalog with the committed search query.
    pub fn reload_catalog(&mut self) {
        let query = self.search_query.clone();
        self.reload_catalog_with(&query);
    }

    /// Rebuilds the catalog with `query`, keeping the selection by name.
    ///
    /// If the selected entry is gone the cursor is clamped. A listing
    /// failure is reported through the status message, which the next
    /// successful listing clears unless something else replaced it.
    pub fn reload_catalog_with(&mut self, query: &str) {
        let selected = self.selected().map(|item| item.name().to_string());

        let catalog = build_catalog(
            self.fs.as_ref(),
            self.catalog_dir(),
            &CatalogQuery {
                kind: self.catalog_kind(),
                query,
                show_hidden: self.show_hidden,
                sort: self.sort_key,
            },
        );

        match &catalog.error {
            Some(error) => {
                self.status = Some(error.clone());
                self.listing_error = Some(error.clone());
            }
            None => {
                if let Some(stale) = self.listing_error.take() {
                    if self.status.as_ref() == Some(&stale) {
                        self.status = None;
                    }
                }
            }
        }
        self.catalog = catalog;

        self.cursor = selected
            .and_then(|name| self.catalog.position_of(&name))
            .unwrap_or_else(|| self.cursor.min(self.catalog.len().saturating_sub(1)));
    }

    /// Lists a different directory in the current mode, starting at the top.
    pub fn load_directory(&mut self, dir: PathBuf) {
        match self.catalog_kind() {
            CatalogKind::Directories => self.browsing_dir = dir,
            CatalogKind::Images => self.working_dir = dir,
        }
        self.cursor = 0;
        self.catalog = Catalog::default();
        self.reload_catalog();
    }

    /// Selects the entry called `name`. Returns `false` if it is not listed.
    pub fn select_name(&mut self, name: &str) -> bool {
        match self.catalog.position_of(name) {
            Some(index) => {
                self.cursor = index;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn selected(&self) -> Option<&CatalogItem> {
        self.catalog.get(self.cursor)
    }

    /// Path of the selected image, if the cursor is on one.
    #[must_use]
    pub fn selected_image_path(&self) -> Option<PathBuf> {
        match self.selected()? {
            CatalogItem::Image(entry) => Some(self.working_dir.join(&entry.name)),
            _ => None,
        }
    }

    /// Moves the cursor down one row, wrapping to the top.
    pub fn move_cursor_down(&mut self) {
        if self.catalog.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.catalog.len();
    }

    /// Moves the cursor up one row, wrapping to the bottom.
    pub fn move_cursor_up(&mut self) {
        if self.catalog.is_empty() {
            return;
        }
        if self.cursor == 0 {
            self.cursor = self.catalog.len() - 1;
        } else {
            self.cursor -= 1;
        }
    }

    pub fn page_down(&mut self) {
        let last = self.catalog.len().saturating_sub(1);
        self.cursor = (self.cursor + self.list_page_size()).min(last);
    }

    pub fn page_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(self.list_page_size());
    }

    pub fn cursor_to_top(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_to_bottom(&mut self) {
        self.cursor = self.catalog.len().saturating_sub(1);
    }

    /// Number of list rows visible on the current screen.
    #[must_use]
    pub fn list_page_size(&self) -> usize {
        let chrome = if self.mode.is_text_entry() {
            LIST_CHROME_ROWS + PROMPT_ROWS
        } else {
            LIST_CHROME_ROWS
        };
        usize::from(self.viewport.rows).saturating_sub(chrome).max(1)
    }

    /// Text-art size for the current viewport.
    #[must_use]
    pub fn render_size(&self) -> (u16, u16) {
        (
            self.viewport.cols.max(1),
            self.viewport.rows.saturating_sub(VIEWER_CHROME_ROWS).max(1),
        )
    }

    /// Issues a render of the selected image.
    ///
    /// Supersedes any outstanding request: the sequence number is bumped, so
    /// the earlier completion will be dropped when it arrives. Returns `None`
    /// if the cursor is not on an image.
    pub fn request_render(&mut self) -> Option<Action> {
        let path = self.selected_image_path()?;
        let (width, height) = self.render_size();

        self.render.latest_seq = self.render.latest_seq.wrapping_add(1);
        self.render.pending = true;
        self.render.scroll = 0;

        tracing::debug!(
            seq = self.render.latest_seq,
            path = %path.display(),
            width,
            height,
            mode = %self.render_mode,
            "render requested"
        );

        Some(Action::RequestRender(RenderRequest::new(
            self.render.latest_seq,
            path,
            width,
            height,
            self.render_mode,
        )))
    }

    /// Applies a completion if it answers the latest request.
    ///
    /// Returns `false` for stale or duplicate completions, which are dropped.
    pub fn apply_completion(&mut self, completion: &RenderCompletion) -> bool {
        if !self.render.pending || completion.seq != self.render.latest_seq {
            tracing::debug!(
                seq = completion.seq,
                latest = self.render.latest_seq,
                pending = self.render.pending,
                "dropping stale render completion"
            );
            return false;
        }

        self.render.pending = false;
        self.render.content = Some(completion.outcome.clone());
        self.render.scroll = 0;
        true
    }

    /// Scrolls the viewer by `delta` lines, clamped to the content.
    pub fn scroll_viewer(&mut self, delta: isize) {
        let Some(Ok(text)) = &self.render.content else {
            return;
        };
        let max = text.lines().count().saturating_sub(usize::from(self.render_size().1));
        self.render.scroll = self.render.scroll.saturating_add_signed(delta).min(max);
    }

    /// Starts a slideshow and returns the first tick to arm.
    pub fn start_slideshow(&mut self) -> Action {
        let generation = self.slideshow.start();
        Action::ScheduleTick {
            generation,
            delay: self.slideshow.interval(),
        }
    }

    /// Stops a running slideshow. Returns `false` if none was running.
    pub fn stop_slideshow(&mut self) -> bool {
        let stopped = self.slideshow.stop();
        if stopped {
            tracing::debug!("slideshow stopped");
            self.status = Some("Slideshow stopped".to_string());
        }
        stopped
    }

    /// Advances to the next catalog entry, wrapping from last to first.
    pub fn advance_slide(&mut self) {
        self.move_cursor_down();
    }

    /// Leaves the current mode for `Browsing` and clears the status.
    ///
    /// Leaving directory browsing commits the browsing directory as the new
    /// working directory, so the image catalog is reloaded from there.
    pub fn return_to_browsing(&mut self) {
        let committing = self.catalog_kind() == CatalogKind::Directories;
        let leaving_search = self.mode == Mode::Searching;

        self.mode = Mode::Browsing;
        self.status = None;

        if committing {
            self.commit_browsing_dir();
        } else if leaving_search {
            self.reload_catalog();
        }
    }

    /// Makes the browsing directory the working directory and reloads images.
    pub fn commit_browsing_dir(&mut self) {
        tracing::debug!(dir = %self.browsing_dir.display(), "working directory changed");
        self.mode = Mode::Browsing;
        self.working_dir.clone_from(&self.browsing_dir);
        self.cursor = 0;
        self.catalog = Catalog::default();
        self.reload_catalog();
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("mode", &self.mode)
            .field("working_dir", &self.working_dir)
            .field("browsing_dir", &self.browsing_dir)
            .field("search_query", &self.search_query)
            .field("cursor", &self.cursor)
            .field("catalog_len", &self.catalog.len())
            .field("render", &self.render)
            .field("slideshow", &self.slideshow)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

//! View model types representing renderable UI state.
//!
//! View models are immutable snapshots computed by
//! [`Session::compute_viewmodel`](crate::app::Session::compute_viewmodel)
//! and consumed by the renderer. They contain no business logic, only
//! display-ready data: windowed rows, highlight ranges, prompt text and the
//! visible slice of rendered text art.
//!
//! # Example
//!
//! ```rust
//! use phogo::ui::viewmodel::{BodyView, DisplayItem, FooterInfo, HeaderInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo {
//!         title: "phogo".to_string(),
//!         summary: "Sort: Name | Hidden: off".to_string(),
//!         location: "/home/me/photos".to_string(),
//!     },
//!     body: BodyView::List {
//!         items: vec![DisplayItem {
//!             title: "cat.png".to_string(),
//!             subtitle: "1.2 KB  3h ago".to_string(),
//!             is_selected: true,
//!             is_directory: false,
//!             highlight_ranges: vec![(0, 3)],
//!         }],
//!         selected_index: 0,
//!         empty_state: None,
//!     },
//!     prompt: None,
//!     footer: FooterInfo { hints: vec![("q", "quit")], status: None },
//! };
//! assert!(vm.prompt.is_none());
//! ```

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub body: BodyView,

    /// Input box shown above the list while searching, renaming or
    /// confirming a delete.
    pub prompt: Option<PromptInfo>,

    pub footer: FooterInfo,
}

/// Main area of the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyView {
    /// A windowed list (images, folders or render modes).
    List {
        /// Rows inside the visible window.
        items: Vec<DisplayItem>,

        /// Index of the selected row within `items`.
        selected_index: usize,

        /// Shown instead of the rows when there is nothing to list.
        empty_state: Option<EmptyState>,
    },

    /// The text-art viewer.
    Image(ImageView),
}

/// Display information for a single list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub title: String,
    pub subtitle: String,
    pub is_selected: bool,
    pub is_directory: bool,

    /// Character ranges of `title` matching the search text.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Visible part of the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageView {
    /// Name of the image being shown.
    pub name: String,

    /// Visible lines of text art, already scrolled.
    pub lines: Vec<String>,

    /// "Rendering..." while a request is outstanding.
    pub placeholder: Option<String>,

    /// Render failure shown inline.
    pub error: Option<String>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Screen title (application name or mode).
    pub title: String,

    /// Sort/hidden summary or the slideshow banner.
    pub summary: String,

    /// Directory being listed.
    pub location: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// `(key, action)` pairs, e.g. `("/", "find")`.
    pub hints: Vec<(&'static str, &'static str)>,

    /// Status message line.
    pub status: Option<String>,
}

/// Text prompt display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptInfo {
    /// Label before the text, e.g. "Search".
    pub label: String,

    /// Current draft text.
    pub text: String,

    /// Draw a cursor after the text.
    pub editing: bool,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No images here").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

//! Interaction modes of a browsing session.
//!
//! Exactly one [`Mode`] is active at a time. The mode decides how keys are
//! mapped to events, which transitions are legal and which catalog (images
//! of the working directory or subdirectories of the browsing directory) the
//! session shows.
//!
//! # State Machine
//!
//! `Browsing` is the hub. `enter`/`P` open `ViewingImage`, `d` opens
//! `DirectoryBrowsing`, `/` opens `Searching`, and `r`, `x` and `f` open
//! `Renaming`, `ConfirmingDelete` and `SelectingFilter`. Every nested mode
//! returns to `Browsing` (or, for search and the filter picker, to the mode
//! it was opened from) on confirm or cancel.

/// Current interaction mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Image list of the working directory. Initial mode.
    #[default]
    Browsing,

    /// Full-screen text-art preview of the selected image, optionally
    /// advancing as a slideshow.
    ViewingImage,

    /// Picking a new working directory; lists subdirectories of the
    /// browsing directory.
    DirectoryBrowsing,

    /// Editing the search query; the list filters as the user types.
    Searching,

    /// Editing a new name for the selected image.
    Renaming,

    /// Waiting for `y` to delete the selected image.
    ConfirmingDelete,

    /// Choosing one of the render modes.
    SelectingFilter,
}

impl Mode {
    /// Modes in which printable keys are typed into the text input.
    #[must_use]
    pub const fn is_text_entry(self) -> bool {
        matches!(self, Self::Searching | Self::Renaming)
    }

    /// Short label for the header.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Browsing => "Browse",
            Self::ViewingImage => "Image View",
            Self::DirectoryBrowsing => "Folders",
            Self::Searching => "Search",
            Self::Renaming => "Rename",
            Self::ConfirmingDelete => "Delete",
            Self::SelectingFilter => "Filter",
        }
    }
}

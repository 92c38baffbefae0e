//! Image-to-text rendering.
//!
//! The session never renders anything itself. It hands `(path, width,
//! height, mode)` to an [`ImageRenderer`] through the render dispatcher and
//! later receives either a text block or a failure message. Keeping the
//! renderer behind a trait lets tests substitute a fake and keeps the
//! conversion algorithm out of the state machine.

mod ascii;

pub use ascii::{image_to_text, AsciiRenderer, CHARACTER_RAMP};

use crate::domain::entry::RenderMode;
use crate::domain::error::Result;
use std::path::Path;

/// Width used by `--convert`.
pub const FALLBACK_WIDTH: u16 = 80;

/// Height used by `--convert`.
pub const FALLBACK_HEIGHT: u16 = 40;

/// Converts an image file into a block of text sized in terminal cells.
///
/// Implementations must be callable from a worker thread.
pub trait ImageRenderer: Send + Sync {
    /// Renders `path` into exactly `height` lines of `width` cells.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, cannot be decoded, or the
    /// requested size is zero.
    fn render(&self, path: &Path, width: u16, height: u16, mode: RenderMode) -> Result<String>;
}

/// The two knobs a [`RenderMode`] selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderPreset {
    /// Emit 24-bit ANSI foreground colors.
    pub colored: bool,
    /// Map bright pixels to sparse characters instead of dense ones.
    pub reversed: bool,
}

impl From<RenderMode> for RenderPreset {
    fn from(mode: RenderMode) -> Self {
        match mode {
            RenderMode::Color => Self { colored: true, reversed: false },
            RenderMode::Grayscale => Self { colored: false, reversed: false },
            RenderMode::Inverted => Self { colored: true, reversed: true },
            RenderMode::Duotone => Self { colored: false, reversed: true },
        }
    }
}

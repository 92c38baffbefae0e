//! Domain layer for phogo.
//!
//! Core types shared by every other layer, independent of the terminal, the
//! filesystem implementation and the renderer.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`entry`]: Filesystem entries, list items, sort keys and render modes

pub mod entry;
pub mod error;

pub use entry::{format_bytes, CatalogItem, Entry, ListItem, RenderMode, SortKey, IMAGE_EXTENSIONS};
pub use error::{PhogoError, Result};

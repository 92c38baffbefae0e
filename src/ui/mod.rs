//! User interface rendering layer with component-based architecture.
//!
//! This module turns a [`Session`](crate::app::Session) into one frame of
//! ANSI-styled text. It never touches the terminal itself: the runtime
//! writes the returned string.
//!
//! # Architecture
//!
//! ```text
//! Session → compute_viewmodel → UIViewModel → components → Frame → String
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Frame buffer and shared text utilities
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_viewmodel};
pub use theme::Theme;
pub use viewmodel::{
    BodyView, DisplayItem, EmptyState, FooterInfo, HeaderInfo, ImageView, PromptInfo, UIViewModel,
};

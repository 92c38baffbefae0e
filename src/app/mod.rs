//! Application layer: the session state machine.
//!
//! This module sits between the terminal runtime (main.rs) and the
//! catalog/render/worker layers. It implements the event-driven architecture
//! that powers the interactive browser.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Keys/Timer → Events → handle_event → Session mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──────── Render completions ──────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and mode transitions
//! - [`modes`]: The seven interaction modes
//! - [`state`]: The session aggregate and its operations
//! - [`slideshow`]: Slideshow timer generation tracking
//! - [`input`]: Text buffer for search and rename
//! - `view`: View model computation

pub mod actions;
pub mod handler;
pub mod input;
pub mod modes;
pub mod slideshow;
pub mod state;
mod view;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::Mode;
pub use state::{RenderState, Session, Viewport};

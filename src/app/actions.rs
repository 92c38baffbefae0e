//! Actions representing side effects to be executed by the terminal runtime.
//!
//! The event handler never performs I/O that could block or outlive the
//! event: rendering, timers, the clipboard and process exit are returned as
//! [`Action`]s and executed by the runtime in order. Catalog reads and
//! rename/delete are the exception; they go through the session's
//! [`FileSystem`](crate::catalog::FileSystem) directly.
//!
//! # Example
//!
//! ```rust
//! use phogo::app::Action;
//! use std::time::Duration;
//!
//! let actions = vec![Action::ScheduleTick {
//!     generation: 1,
//!     delay: Duration::from_secs(5),
//! }];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::worker::RenderRequest;
use std::path::PathBuf;
use std::time::Duration;

/// Commands emitted by [`handle_event`](crate::app::handle_event).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Restore the terminal and exit.
    Quit,

    /// Hand a render job to the dispatcher.
    ///
    /// The completion comes back as
    /// [`Event::RenderCompleted`](crate::app::Event::RenderCompleted).
    RequestRender(RenderRequest),

    /// Arm a one-shot slideshow timer.
    ///
    /// After `delay` the runtime posts
    /// [`Event::Tick`](crate::app::Event::Tick) with the same `generation`.
    ScheduleTick {
        generation: u64,
        delay: Duration,
    },

    /// Put the absolute path on the system clipboard.
    ///
    /// Best effort; on failure the runtime posts
    /// [`Event::ClipboardFailed`](crate::app::Event::ClipboardFailed).
    CopyToClipboard(PathBuf),
}

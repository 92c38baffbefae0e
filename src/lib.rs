//! phogo: a terminal image browser with text-art previews.
//!
//! phogo lists the images of a directory, renders the selected one as
//! colored text art, runs slideshows and does light file management
//! (rename, delete, copy path) without leaving the terminal.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Runtime Shim (main.rs)                    │  ← Entry point
//! │  - raw mode, key mapping, action execution          │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Slideshow generations                            │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Catalog Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (catalog/)    │   │ (worker/)     │
//! │ - Frames      │   │ - Listing     │   │ - Render jobs │
//! │ - Theming     │   │ - Filter/sort │   │ - Seq numbers │
//! │ - Components  │   │ - FileSystem  │   │ - Tick timer  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                                                │
//!                                         ┌───────────────┐
//!                                         │ Render (rend…)│
//!                                         │ - Text art    │
//!                                         └───────────────┘
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Paths and clipboard (infrastructure/)            │
//! │  - Entries, sort keys, render modes (domain/)       │
//! └─────────────────────────────────────────────────────┘
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - Rotating log file, optional OTLP file export     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Session state machine with event/action model
//! - [`catalog`]: Directory listing, filtering and sorting
//! - [`domain`]: Core domain types (entries, render modes, errors)
//! - [`infrastructure`]: Data paths and clipboard access
//! - [`render`]: Image to text-art conversion
//! - [`worker`]: Non-blocking render dispatch and slideshow timer
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: Logging and tracing setup
//!
//! # Startup Flow
//!
//! 1. **Argument parsing** (`main.rs`): build a [`Config`]
//! 2. **Headless path**: with `--convert`, [`run_convert`] renders once and exits
//! 3. **Interactive path**: [`initialize`] builds the [`Session`] and, when
//!    started on an image, the first render request
//! 4. **Event loop**: key presses, render completions and slideshow ticks are
//!    fed to [`handle_event`]; returned [`Action`]s are executed by the shim
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use phogo::app::Viewport;
//! use phogo::catalog::OsFileSystem;
//! use phogo::{handle_event, initialize, Config, Event};
//!
//! let config = Config {
//!     start_path: Some("./photos".into()),
//!     ..Default::default()
//! };
//! let (mut session, _actions) = initialize(&config, Arc::new(OsFileSystem), Viewport::default());
//!
//! let (_redraw, actions) = handle_event(&mut session, &Event::CursorDown)?;
//! for action in actions {
//!     // Execute actions...
//! }
//! # Ok::<(), phogo::PhogoError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod render;
pub mod ui;
pub mod worker;

pub use app::{handle_event, Action, Event, Mode, Session};
pub use domain::{PhogoError, Result};
pub use ui::Theme;

use app::slideshow::{Slideshow, DEFAULT_INTERVAL};
use app::Viewport;
use catalog::FileSystem;
use domain::RenderMode;
use render::{ImageRenderer, FALLBACK_HEIGHT, FALLBACK_WIDTH};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Runtime configuration, built from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory or image to open. Default: the current directory.
    pub start_path: Option<PathBuf>,

    /// Built-in theme name. Unknown names fall back to the default theme.
    pub theme_name: Option<String>,

    /// Tracing level (`trace`, `debug`, `info`, `warn`, `error`).
    ///
    /// `RUST_LOG` takes precedence. Default: `"info"`
    pub trace_level: Option<String>,

    /// Time between slides.
    pub slideshow_interval: Duration,

    /// Also write spans to the OTLP JSON trace file.
    pub export_traces: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_path: None,
            theme_name: None,
            trace_level: None,
            slideshow_interval: DEFAULT_INTERVAL,
            export_traces: false,
        }
    }
}

/// Builds the session for an interactive run.
///
/// A leading `~` in the start path is expanded to the home directory.
/// A directory start path opens that directory in `Browsing`. A file start
/// path opens its parent directory with the file selected; if the file is
/// a listed image the session starts in `ViewingImage` and the returned
/// actions hold its first render request. A file that is not listed
/// (hidden, or not an image) leaves the session in `Browsing` with a status
/// message. A path that does not exist is listed like a directory and so
/// shows up as unreadable.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use phogo::app::{Mode, Viewport};
/// use phogo::catalog::OsFileSystem;
/// use phogo::{initialize, Config};
///
/// let config = Config {
///     start_path: Some("./photos/cat.png".into()),
///     ..Default::default()
/// };
/// let (session, actions) = initialize(&config, Arc::new(OsFileSystem), Viewport::default());
/// assert_eq!(session.mode, Mode::ViewingImage);
/// assert_eq!(actions.len(), 1);
/// ```
pub fn initialize(config: &Config, fs: Arc<dyn FileSystem>, viewport: Viewport) -> (Session, Vec<Action>) {
    let requested = config.start_path.as_deref().unwrap_or_else(|| Path::new("."));
    let start = infrastructure::absolutize(&infrastructure::expand_tilde(requested));
    let _span = tracing::info_span!("initialize", start = %start.display()).entered();

    let theme = Theme::resolve(config.theme_name.as_deref());
    let slideshow = Slideshow::new(config.slideshow_interval);

    let (dir, image) = match (start.parent(), start.file_name()) {
        (Some(parent), Some(name)) if fs.exists(&start) && !fs.is_dir(&start) => (
            parent.to_path_buf(),
            Some(name.to_string_lossy().into_owned()),
        ),
        _ => (start.clone(), None),
    };

    let mut session = Session::new(dir, fs, theme, viewport, slideshow);
    let mut actions = Vec::new();

    if let Some(name) = image {
        let listed = session.select_name(&name) && session.selected().is_some_and(|item| item.is_image());
        if listed {
            if let Some(render) = session.request_render() {
                session.mode = Mode::ViewingImage;
                actions.push(render);
            }
        } else {
            tracing::debug!(name = %name, "start file is not in the image list");
            session.set_status(format!("{name} is not a listed image"));
        }
    }

    tracing::info!(
        dir = %session.working_dir.display(),
        images = session.catalog.image_count(),
        mode = ?session.mode,
        "session ready"
    );
    (session, actions)
}

/// Headless conversion: renders `path` once at the fallback size in
/// [`RenderMode::Color`] and writes exactly the text block to `out`.
///
/// # Errors
///
/// Returns the renderer's error (unreadable or undecodable image) or the
/// write error.
///
/// # Example
///
/// ```no_run
/// use phogo::render::AsciiRenderer;
///
/// let stdout = std::io::stdout();
/// phogo::run_convert(std::path::Path::new("photo.png"), &AsciiRenderer, &mut stdout.lock())?;
/// # Ok::<(), phogo::PhogoError>(())
/// ```
pub fn run_convert<W: Write>(path: &Path, renderer: &dyn ImageRenderer, out: &mut W) -> Result<()> {
    let _span = tracing::info_span!("convert", path = %path.display()).entered();

    let text = renderer.render(path, FALLBACK_WIDTH, FALLBACK_HEIGHT, RenderMode::Color)?;
    out.write_all(text.as_bytes())?;
    out.flush()?;

    tracing::info!(bytes = text.len(), "converted");
    Ok(())
}

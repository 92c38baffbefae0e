//! Terminal runtime wrapper and entry point.
//!
//! This module is the thin integration layer between the phogo library and
//! a real terminal. It parses the command line, owns raw mode and the
//! alternate screen, turns key presses into library events and executes the
//! actions the library returns. Every decision lives in the library.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────┐   Message::Terminal   ┌──────────────────────────┐
//! │ input thread  │ ────────────────────→ │                          │
//! └───────────────┘                       │   event loop (tokio)     │
//! ┌───────────────┐   Message::Rendered   │   owns the Session       │
//! │ blocking pool │ ────────────────────→ │   handle_event → Actions │
//! │ (render jobs) │                       │                          │
//! └───────────────┘   Message::Tick       │                          │
//! ┌───────────────┐ ────────────────────→ │                          │
//! │ tick timers   │                       └──────────────────────────┘
//! └───────────────┘
//! ```
//!
//! All producers feed one unbounded channel; the loop is its only consumer,
//! so the session is never shared.
//!
//! # Keybindings
//!
//! Lists:
//! - `j`/`k`/arrows: Move
//! - `g`/`G`/`Home`/`End`: Top/bottom
//! - `PageUp`/`PageDown`/`Left`/`Right`: Page
//! - `Enter`: Open image or folder
//! - `P`: Slideshow
//! - `s`: Cycle sort
//! - `h`: Toggle hidden files
//! - `/`: Search
//! - `r`/`x`/`y`: Rename, delete, copy path
//! - `d`: Browse folders / use this folder
//! - `f`: Render mode picker
//! - `1`-`4`: Render mode
//! - `Esc`/`q`: Back
//!
//! Everywhere: `Ctrl+c` quits.

#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use crossterm::event::{self, Event as TerminalEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{cursor, execute, terminal};
use phogo::app::{Mode, Viewport};
use phogo::catalog::OsFileSystem;
use phogo::domain::RenderMode;
use phogo::observability::init_tracing;
use phogo::render::AsciiRenderer;
use phogo::worker::{schedule_tick, RenderCompletion, RenderDispatcher};
use phogo::{handle_event, Action, Config, Event, PhogoError, Session};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedSender};

/// Browse images in the terminal as text art.
#[derive(Debug, Parser)]
#[command(name = "phogo", version, about)]
struct Cli {
    /// Directory to browse, or an image to open directly.
    path: Option<PathBuf>,

    /// Print PATH as text art (80x40, color) to stdout and exit.
    #[arg(long, requires = "path")]
    convert: bool,

    /// Built-in theme: phogo-dark, catppuccin-mocha or catppuccin-latte.
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,

    /// Seconds between slideshow images.
    #[arg(long, value_name = "SECS", default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..))]
    interval: u64,

    /// Log level written to the log file (RUST_LOG overrides it).
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Also export spans as OTLP JSON to the data directory.
    #[arg(long)]
    otlp: bool,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            start_path: self.path.clone(),
            theme_name: self.theme.clone(),
            trace_level: self.log_level.clone(),
            slideshow_interval: Duration::from_secs(self.interval),
            export_traces: self.otlp,
        }
    }
}

/// Everything the event loop consumes.
#[derive(Debug)]
enum Message {
    Terminal(TerminalEvent),
    Rendered(RenderCompletion),
    Tick(u64),
    ClipboardFailed(String),
}

/// Raw mode plus alternate screen, restored on drop (also on panic unwind).
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> phogo::Result<Self> {
        terminal::enable_raw_mode().map_err(|e| PhogoError::Terminal(e.to_string()))?;
        execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)
            .map_err(|e| PhogoError::Terminal(e.to_string()))?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(io::stdout(), terminal::LeaveAlternateScreen, cursor::Show);
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = cli.config();
    init_tracing(&config);

    if cli.convert {
        return convert(&config);
    }

    match run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "phogo exited with an error");
            eprintln!("phogo: {e}");
            ExitCode::FAILURE
        }
    }
}

/// `--convert`: one render to stdout, no terminal setup.
fn convert(config: &Config) -> ExitCode {
    let Some(path) = config.start_path.as_deref() else {
        return ExitCode::FAILURE;
    };

    let stdout = io::stdout();
    match phogo::run_convert(path, &AsciiRenderer, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, path = %path.display(), "convert failed");
            eprintln!("phogo: {}: {e}", path.display());
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &Config) -> phogo::Result<()> {
    let (cols, rows) = terminal::size().map_err(|e| PhogoError::Terminal(e.to_string()))?;
    let (session, initial_actions) =
        phogo::initialize(config, Arc::new(OsFileSystem), Viewport { cols, rows });

    let _guard = TerminalGuard::enter()?;

    let (tx, mut rx) = mpsc::unbounded_channel();
    let _input_handle = spawn_input(tx.clone());

    let mut state = State::new(session, tx);
    state.draw()?;
    if state.execute_actions(initial_actions) {
        return Ok(());
    }

    while let Some(message) = rx.recv().await {
        match state.update(message) {
            Flow::Continue { redraw: true } => state.draw()?,
            Flow::Continue { redraw: false } => {}
            Flow::Exit => break,
        }
    }

    tracing::info!("shutting down");
    Ok(())
}

/// Forwards terminal events until the loop stops listening.
fn spawn_input(tx: UnboundedSender<Message>) -> thread::JoinHandle<()> {
    thread::spawn(move || loop {
        match event::read() {
            Ok(event) => {
                if tx.send(Message::Terminal(event)).is_err() {
                    break;
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, "terminal input closed");
                break;
            }
        }
    })
}

enum Flow {
    Continue { redraw: bool },
    Exit,
}

/// Event-loop state: the session plus the handles actions are executed with.
struct State {
    session: Session,
    dispatcher: RenderDispatcher,
    runtime: Handle,
    tx: UnboundedSender<Message>,
}

impl State {
    fn new(session: Session, tx: UnboundedSender<Message>) -> Self {
        let runtime = Handle::current();
        let render_tx = tx.clone();
        let dispatcher = RenderDispatcher::new(
            runtime.clone(),
            Arc::new(AsciiRenderer),
            Arc::new(move |completion| {
                let _ = render_tx.send(Message::Rendered(completion));
            }),
        );

        Self {
            session,
            dispatcher,
            runtime,
            tx,
        }
    }

    /// Translates a message to a library event, delegates to `handle_event`
    /// and executes the resulting actions.
    fn update(&mut self, message: Message) -> Flow {
        let event = match message {
            Message::Terminal(TerminalEvent::Key(key)) => {
                if key.kind != KeyEventKind::Press {
                    return Flow::Continue { redraw: false };
                }
                map_key_event(&key, self.session.mode)
            }
            Message::Terminal(TerminalEvent::Resize(cols, rows)) => Event::Resize { cols, rows },
            Message::Terminal(_) => return Flow::Continue { redraw: false },
            Message::Rendered(completion) => Event::RenderCompleted(completion),
            Message::Tick(generation) => Event::Tick { generation },
            Message::ClipboardFailed(reason) => Event::ClipboardFailed { reason },
        };

        match handle_event(&mut self.session, &event) {
            Ok((redraw, actions)) => {
                tracing::trace!(action_count = actions.len(), redraw, "event handled");
                if self.execute_actions(actions) {
                    Flow::Exit
                } else {
                    Flow::Continue { redraw }
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                Flow::Continue { redraw: false }
            }
        }
    }

    /// Runs actions in order. Returns `true` once a quit is requested.
    fn execute_actions(&self, actions: Vec<Action>) -> bool {
        for action in actions {
            if self.execute_action(action) {
                return true;
            }
        }
        false
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::RequestRender(request) => {
                self.dispatcher.dispatch(request);
            }
            Action::ScheduleTick { generation, delay } => {
                let tx = self.tx.clone();
                schedule_tick(&self.runtime, generation, delay, move |generation| {
                    let _ = tx.send(Message::Tick(generation));
                });
            }
            Action::CopyToClipboard(path) => {
                let tx = self.tx.clone();
                let text = path.to_string_lossy().into_owned();
                self.runtime.spawn_blocking(move || {
                    if let Err(e) = phogo::infrastructure::copy_text(&text) {
                        let _ = tx.send(Message::ClipboardFailed(e.to_string()));
                    }
                });
            }
        }
        false
    }

    fn draw(&self) -> phogo::Result<()> {
        let frame = phogo::ui::render(
            &self.session,
            usize::from(self.session.viewport.rows),
            usize::from(self.session.viewport.cols),
        );
        let mut stdout = io::stdout().lock();
        stdout.write_all(frame.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

/// Maps a key press to a library event for the current mode.
///
/// Text entry (search, rename) receives every printable key as `Char`, and
/// the delete confirmation does too so that only `y` confirms.
fn map_key_event(key: &KeyEvent, mode: Mode) -> Event {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Event::ForceQuit;
    }

    if mode.is_text_entry() || mode == Mode::ConfirmingDelete {
        return match key.code {
            KeyCode::Enter if mode != Mode::ConfirmingDelete => Event::Select,
            KeyCode::Esc => Event::Back,
            KeyCode::Backspace if mode != Mode::ConfirmingDelete => Event::Backspace,
            KeyCode::Char(c) => Event::Char(c),
            _ => Event::Unbound,
        };
    }

    match key.code {
        KeyCode::Char('q') => Event::Quit,
        KeyCode::Esc => Event::Back,
        KeyCode::Char('j') | KeyCode::Down => Event::CursorDown,
        KeyCode::Char('k') | KeyCode::Up => Event::CursorUp,
        KeyCode::Char('g') | KeyCode::Home => Event::CursorTop,
        KeyCode::Char('G') | KeyCode::End => Event::CursorBottom,
        KeyCode::PageDown | KeyCode::Right => Event::PageDown,
        KeyCode::PageUp | KeyCode::Left => Event::PageUp,
        KeyCode::Enter => Event::Select,
        KeyCode::Char('P') => Event::StartSlideshow,
        KeyCode::Char('d') => Event::BrowseDirectories,
        KeyCode::Char('/') => Event::Search,
        KeyCode::Char('h') => Event::ToggleHidden,
        KeyCode::Char('s') => Event::CycleSort,
        KeyCode::Char('f') => Event::SelectFilter,
        KeyCode::Char('r') => Event::Rename,
        KeyCode::Char('x') => Event::Delete,
        KeyCode::Char('y') => Event::CopyPath,
        KeyCode::Char(c) => RenderMode::from_digit(c).map_or(Event::Unbound, Event::SetRenderMode),
        _ => Event::Unbound,
    }
}

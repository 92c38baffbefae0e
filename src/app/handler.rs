//! Event handling and state transition logic.
//!
//! This module implements the session state machine: every key press, timer
//! tick, render completion and resize arrives as an [`Event`], and
//! [`handle_event`] applies it to the [`Session`] and returns the side
//! effects to run.
//!
//! # Rule Order
//!
//! 1. `ForceQuit` always exits.
//! 2. Any input event while a slideshow runs stops the show and is
//!    otherwise swallowed.
//! 3. `Quit` exits from `Browsing`; elsewhere it returns to `Browsing` and
//!    clears the status.
//! 4. Everything else goes to the handler for the current mode.
//!
//! Non-input events (resize, tick, render completion, clipboard failure)
//! skip rules 2 and 3.
//!
//! # Example
//!
//! ```no_run
//! use phogo::app::{handle_event, Event, Session};
//!
//! # fn demo(session: &mut Session) -> phogo::Result<()> {
//! let (redraw, actions) = handle_event(session, &Event::CursorDown)?;
//! # Ok(())
//! # }
//! ```

use crate::app::modes::Mode;
use crate::app::state::{Session, Viewport};
use crate::app::Action;
use crate::domain::entry::{CatalogItem, RenderMode};
use crate::domain::error::{PhogoError, Result};
use crate::worker::RenderCompletion;

/// Events triggered by user input, timers and the render worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Ctrl+C. Exits from any mode.
    ForceQuit,
    /// `q` outside text entry.
    Quit,
    /// Esc: cancel or go up one level.
    Back,

    CursorUp,
    CursorDown,
    PageUp,
    PageDown,
    CursorTop,
    CursorBottom,

    /// Enter: open, descend or confirm.
    Select,
    StartSlideshow,
    /// `d`: enter directory browsing, or commit it.
    BrowseDirectories,
    Search,
    ToggleHidden,
    CycleSort,
    /// `f`: open the render-mode picker.
    SelectFilter,
    Rename,
    Delete,
    CopyPath,
    /// Digit keys `1`–`4`.
    SetRenderMode(RenderMode),

    /// A printable character in text entry or delete confirmation.
    Char(char),
    Backspace,
    /// Any other key.
    Unbound,

    /// Terminal was resized.
    Resize {
        cols: u16,
        rows: u16,
    },

    /// Slideshow timer fired.
    Tick {
        generation: u64,
    },

    /// A render job finished.
    RenderCompleted(RenderCompletion),

    /// Copying to the clipboard failed.
    ClipboardFailed {
        reason: String,
    },
}

impl Event {
    /// Whether this event came from the keyboard.
    #[must_use]
    pub const fn is_input(&self) -> bool {
        !matches!(
            self,
            Self::Resize { .. }
                | Self::Tick { .. }
                | Self::RenderCompleted(_)
                | Self::ClipboardFailed { .. }
        )
    }
}

/// Result of handling one event: redraw flag plus actions to execute.
type Outcome = Result<(bool, Vec<Action>)>;

fn redraw() -> Outcome {
    Ok((true, vec![]))
}

fn unchanged() -> Outcome {
    Ok((false, vec![]))
}

/// Processes an event, mutates the session, and returns actions to execute.
///
/// The returned flag says whether the screen must be redrawn.
///
/// # Errors
///
/// Currently never fails; file-operation errors become status messages. The
/// `Result` keeps the runtime's error path uniform.
pub fn handle_event(session: &mut Session, event: &Event) -> Outcome {
    let _span = tracing::debug_span!("handle_event", event_type = ?event, mode = ?session.mode).entered();

    if *event == Event::ForceQuit {
        return Ok((false, vec![Action::Quit]));
    }

    if event.is_input() && session.stop_slideshow() {
        return redraw();
    }

    match event {
        Event::Quit => {
            if session.mode == Mode::Browsing {
                return Ok((false, vec![Action::Quit]));
            }
            session.return_to_browsing();
            return redraw();
        }
        Event::Resize { cols, rows } => return handle_resize(session, *cols, *rows),
        Event::Tick { generation } => return handle_tick(session, *generation),
        Event::RenderCompleted(completion) => {
            return Ok((session.apply_completion(completion), vec![]));
        }
        Event::ClipboardFailed { reason } => {
            tracing::debug!(reason = %reason, "clipboard unavailable");
            session.set_status(format!("Clipboard unavailable: {reason}"));
            return redraw();
        }
        _ => {}
    }

    match session.mode {
        Mode::Browsing => handle_browsing(session, event),
        Mode::ViewingImage => handle_viewing(session, event),
        Mode::DirectoryBrowsing => handle_directory_browsing(session, event),
        Mode::Searching => handle_searching(session, event),
        Mode::Renaming => handle_renaming(session, event),
        Mode::ConfirmingDelete => handle_confirming_delete(session, event),
        Mode::SelectingFilter => handle_selecting_filter(session, event),
    }
}

/// Cursor movement shared by the list screens. Returns `None` for other events.
fn move_cursor(session: &mut Session, event: &Event) -> Option<Outcome> {
    match event {
        Event::CursorUp => session.move_cursor_up(),
        Event::CursorDown => session.move_cursor_down(),
        Event::PageUp => session.page_up(),
        Event::PageDown => session.page_down(),
        Event::CursorTop => session.cursor_to_top(),
        Event::CursorBottom => session.cursor_to_bottom(),
        _ => return None,
    }
    Some(redraw())
}

fn handle_browsing(session: &mut Session, event: &Event) -> Outcome {
    if let Some(outcome) = move_cursor(session, event) {
        return outcome;
    }

    match event {
        Event::Back => Ok((false, vec![Action::Quit])),
        Event::Select => {
            let Some(render) = session.request_render() else {
                return unchanged();
            };
            session.mode = Mode::ViewingImage;
            Ok((true, vec![render]))
        }
        Event::StartSlideshow => {
            let Some(render) = session.request_render() else {
                return unchanged();
            };
            session.mode = Mode::ViewingImage;
            let tick = session.start_slideshow();
            Ok((true, vec![render, tick]))
        }
        Event::BrowseDirectories => {
            session.mode = Mode::DirectoryBrowsing;
            session.load_directory(session.working_dir.clone());
            redraw()
        }
        Event::Search => {
            open_search(session);
            redraw()
        }
        Event::ToggleHidden => {
            session.show_hidden = !session.show_hidden;
            session.reload_catalog();
            redraw()
        }
        Event::CycleSort => {
            session.sort_key = session.sort_key.next();
            session.reload_catalog();
            redraw()
        }
        Event::SelectFilter => {
            open_filter_picker(session);
            redraw()
        }
        Event::SetRenderMode(mode) => {
            session.render_mode = *mode;
            redraw()
        }
        Event::Rename => {
            let Some(CatalogItem::Image(entry)) = session.selected() else {
                return unchanged();
            };
            let name = entry.name.clone();
            session.input.set(&name);
            session.mode = Mode::Renaming;
            redraw()
        }
        Event::Delete => {
            if !session.selected().is_some_and(CatalogItem::is_image) {
                return unchanged();
            }
            session.mode = Mode::ConfirmingDelete;
            redraw()
        }
        Event::CopyPath => {
            let Some(path) = session.selected_image_path() else {
                return unchanged();
            };
            tracing::debug!(path = %path.display(), "copying path");
            session.set_status("Path copied!");
            Ok((true, vec![Action::CopyToClipboard(path)]))
        }
        _ => unchanged(),
    }
}

fn handle_viewing(session: &mut Session, event: &Event) -> Outcome {
    match event {
        Event::Back => {
            session.return_to_browsing();
            redraw()
        }
        Event::SetRenderMode(mode) => {
            session.render_mode = *mode;
            Ok((true, session.request_render().into_iter().collect()))
        }
        Event::CursorDown => {
            session.scroll_viewer(1);
            redraw()
        }
        Event::CursorUp => {
            session.scroll_viewer(-1);
            redraw()
        }
        Event::SelectFilter => {
            open_filter_picker(session);
            redraw()
        }
        _ => unchanged(),
    }
}

fn handle_directory_browsing(session: &mut Session, event: &Event) -> Outcome {
    if let Some(outcome) = move_cursor(session, event) {
        return outcome;
    }

    match event {
        Event::Select => {
            let target = match session.selected() {
                Some(CatalogItem::Parent) => session.browsing_dir.parent().map(ToOwned::to_owned),
                Some(CatalogItem::Directory(entry)) => Some(session.browsing_dir.join(&entry.name)),
                _ => None,
            };
            let Some(target) = target else {
                return unchanged();
            };
            if !session.fs().is_dir(&target) {
                session.set_status(format!("{} is not a directory", target.display()));
                return redraw();
            }

            let came_from = session
                .browsing_dir
                .file_name()
                .map(|name| name.to_string_lossy().into_owned());
            let ascending = session.browsing_dir.starts_with(&target);

            session.load_directory(target);
            if ascending {
                if let Some(name) = came_from {
                    session.select_name(&name);
                }
            }
            redraw()
        }
        Event::BrowseDirectories | Event::Back => {
            session.return_to_browsing();
            redraw()
        }
        Event::Search => {
            open_search(session);
            redraw()
        }
        Event::ToggleHidden => {
            session.show_hidden = !session.show_hidden;
            session.reload_catalog();
            redraw()
        }
        _ => unchanged(),
    }
}

fn open_search(session: &mut Session) {
    session.search_return = session.mode;
    let query = session.search_query.clone();
    session.input.set(&query);
    session.mode = Mode::Searching;
}

fn open_filter_picker(session: &mut Session) {
    session.filter_return = session.mode;
    session.filter_cursor = session.render_mode.index();
    session.mode = Mode::SelectingFilter;
}

fn handle_searching(session: &mut Session, event: &Event) -> Outcome {
    match event {
        Event::Char(c) => {
            session.input.push(*c);
            let draft = session.input.value().to_string();
            session.reload_catalog_with(&draft);
            redraw()
        }
        Event::Backspace => {
            if !session.input.backspace() {
                return unchanged();
            }
            let draft = session.input.value().to_string();
            session.reload_catalog_with(&draft);
            redraw()
        }
        Event::Select => {
            session.search_query = session.input.value().to_string();
            tracing::debug!(query = %session.search_query, "search committed");
            session.mode = session.search_return;
            session.reload_catalog();
            redraw()
        }
        Event::Back => {
            session.mode = session.search_return;
            session.reload_catalog();
            redraw()
        }
        _ => unchanged(),
    }
}

fn handle_renaming(session: &mut Session, event: &Event) -> Outcome {
    match event {
        Event::Char(c) => {
            session.input.push(*c);
            redraw()
        }
        Event::Backspace => Ok((session.input.backspace(), vec![])),
        Event::Select => {
            let new_name = session.input.value().to_string();
            session.input.clear();
            session.mode = Mode::Browsing;

            match rename_selected(session, &new_name) {
                Ok(Some(message)) => {
                    session.reload_catalog();
                    session.select_name(&new_name);
                    session.set_status(message);
                }
                Ok(None) => session.reload_catalog(),
                Err(e) => {
                    tracing::debug!(error = %e, "rename failed");
                    session.reload_catalog();
                    session.set_status(format!("Rename failed: {e}"));
                }
            }
            redraw()
        }
        Event::Back => {
            session.input.clear();
            session.mode = Mode::Browsing;
            redraw()
        }
        _ => unchanged(),
    }
}

/// Renames the selected image to `new_name` in the working directory.
///
/// Returns `Ok(None)` when the name is unchanged.
fn rename_selected(session: &Session, new_name: &str) -> Result<Option<String>> {
    let Some(CatalogItem::Image(entry)) = session.selected() else {
        return Err(PhogoError::FileOperation("nothing selected".to_string()));
    };

    if new_name.trim().is_empty() {
        return Err(PhogoError::FileOperation("name cannot be empty".to_string()));
    }
    if new_name.contains('/') || new_name.contains(std::path::MAIN_SEPARATOR) {
        return Err(PhogoError::FileOperation(
            "name cannot contain a path separator".to_string(),
        ));
    }
    if new_name == "." || new_name == ".." {
        return Err(PhogoError::FileOperation(format!("{new_name} is not a valid name")));
    }
    if new_name == entry.name {
        return Ok(None);
    }

    let from = session.working_dir.join(&entry.name);
    let to = session.working_dir.join(new_name);
    if session.fs().exists(&to) {
        return Err(PhogoError::FileOperation(format!("{new_name} already exists")));
    }

    session.fs().rename(&from, &to)?;
    tracing::info!(from = %from.display(), to = %to.display(), "renamed");
    Ok(Some(format!("Renamed to {new_name}")))
}

fn handle_confirming_delete(session: &mut Session, event: &Event) -> Outcome {
    session.mode = Mode::Browsing;

    if *event != Event::Char('y') {
        tracing::debug!("delete cancelled");
        return redraw();
    }

    let Some(path) = session.selected_image_path() else {
        return redraw();
    };

    match session.fs().remove_file(&path) {
        Ok(()) => {
            tracing::info!(path = %path.display(), "deleted");
            let name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            session.reload_catalog();
            session.set_status(format!("Deleted {name}"));
        }
        Err(e) => {
            tracing::debug!(error = %e, "delete failed");
            session.reload_catalog();
            session.set_status(format!("Delete failed: {e}"));
        }
    }
    redraw()
}

fn handle_selecting_filter(session: &mut Session, event: &Event) -> Outcome {
    let count = RenderMode::ALL.len();

    match event {
        Event::CursorDown => {
            session.filter_cursor = (session.filter_cursor + 1) % count;
            redraw()
        }
        Event::CursorUp => {
            session.filter_cursor = (session.filter_cursor + count - 1) % count;
            redraw()
        }
        Event::CursorTop => {
            session.filter_cursor = 0;
            redraw()
        }
        Event::CursorBottom => {
            session.filter_cursor = count - 1;
            redraw()
        }
        Event::SetRenderMode(mode) => {
            session.filter_cursor = mode.index();
            redraw()
        }
        Event::Select => {
            session.render_mode = RenderMode::ALL[session.filter_cursor.min(count - 1)];
            session.mode = session.filter_return;
            tracing::debug!(mode = %session.render_mode, "render mode chosen");

            if session.mode == Mode::ViewingImage {
                Ok((true, session.request_render().into_iter().collect()))
            } else {
                redraw()
            }
        }
        Event::Back => {
            session.mode = session.filter_return;
            redraw()
        }
        _ => unchanged(),
    }
}

fn handle_resize(session: &mut Session, cols: u16, rows: u16) -> Outcome {
    session.viewport = Viewport { cols, rows };

    if session.mode == Mode::ViewingImage {
        return Ok((true, session.request_render().into_iter().collect()));
    }
    redraw()
}

fn handle_tick(session: &mut Session, generation: u64) -> Outcome {
    if !session.slideshow.accepts(generation) || session.mode != Mode::ViewingImage {
        tracing::debug!(generation, "dropping slideshow tick");
        return unchanged();
    }

    session.advance_slide();

    let mut actions: Vec<Action> = session.request_render().into_iter().collect();
    actions.push(Action::ScheduleTick {
        generation,
        delay: session.slideshow.interval(),
    });
    Ok((true, actions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::slideshow::Slideshow;
    use crate::catalog::fake::MemoryFileSystem;
    use crate::catalog::FileSystem;
    use crate::ui::theme::Theme;
    use std::path::{Path, PathBuf};
    use std::sync::Arc;
    use std::time::Duration;

    fn session() -> (Session, Arc<MemoryFileSystem>) {
        let fs = Arc::new(MemoryFileSystem::new());
        fs.add_file("/pics/a.png", 10, 0)
            .add_file("/pics/b.png", 20, 0)
            .add_file("/pics/c.jpg", 30, 0)
            .add_file("/pics/notes.txt", 5, 0)
            .add_dir("/pics/trip")
            .add_file("/pics/trip/d.png", 1, 0);
        let session = Session::new(
            PathBuf::from("/pics"),
            fs.clone(),
            Theme::default(),
            Viewport { cols: 80, rows: 24 },
            Slideshow::new(Duration::from_secs(3)),
        );
        (session, fs)
    }

    fn send(session: &mut Session, event: Event) -> Vec<Action> {
        handle_event(session, &event).unwrap().1
    }

    fn selected_name(session: &Session) -> &str {
        session.selected().map_or("", CatalogItem::name)
    }

    fn last_seq(actions: &[Action]) -> u64 {
        actions
            .iter()
            .find_map(|action| match action {
                Action::RequestRender(request) => Some(request.seq),
                _ => None,
            })
            .expect("render request")
    }

    #[test]
    fn quit_exits_only_from_browsing() {
        let (mut session, _) = session();
        assert_eq!(send(&mut session, Event::Quit), vec![Action::Quit]);

        send(&mut session, Event::Select);
        assert_eq!(session.mode, Mode::ViewingImage);
        session.set_status("something");
        assert!(send(&mut session, Event::Quit).is_empty());
        assert_eq!(session.mode, Mode::Browsing);
        assert_eq!(session.status, None);
    }

    #[test]
    fn force_quit_works_in_text_entry() {
        let (mut session, _) = session();
        send(&mut session, Event::Search);
        assert_eq!(send(&mut session, Event::ForceQuit), vec![Action::Quit]);
    }

    #[test]
    fn back_from_browsing_quits() {
        let (mut session, _) = session();
        assert_eq!(send(&mut session, Event::Back), vec![Action::Quit]);
    }

    #[test]
    fn select_opens_viewer_with_render_request() {
        let (mut session, _) = session();
        send(&mut session, Event::CursorDown);
        let actions = send(&mut session, Event::Select);

        assert_eq!(session.mode, Mode::ViewingImage);
        let [Action::RequestRender(request)] = actions.as_slice() else {
            panic!("expected one render request, got {actions:?}");
        };
        assert_eq!(request.path, Path::new("/pics/b.png"));
        assert_eq!((request.width, request.height), (80, 21));
        assert_eq!(request.mode, RenderMode::Color);
        assert!(session.render.pending);
    }

    #[test]
    fn render_mode_digit_rerenders_and_stale_completion_is_dropped() {
        let (mut session, _) = session();
        let first = last_seq(&send(&mut session, Event::Select));
        let actions = send(&mut session, Event::SetRenderMode(RenderMode::Inverted));
        let second = last_seq(&actions);
        assert_eq!(session.render_mode, RenderMode::Inverted);

        let (redraw, _) = handle_event(
            &mut session,
            &Event::RenderCompleted(RenderCompletion { seq: first, outcome: Ok("old".into()) }),
        )
        .unwrap();
        assert!(!redraw);
        assert!(session.render.pending);

        send(
            &mut session,
            Event::RenderCompleted(RenderCompletion { seq: second, outcome: Err("bad".into()) }),
        );
        assert!(!session.render.pending);
        assert_eq!(session.render.content, Some(Err("bad".to_string())));
        assert_eq!(session.mode, Mode::ViewingImage);
    }

    #[test]
    fn slideshow_advances_circularly_and_any_key_stops_it() {
        let (mut session, _) = session();
        send(&mut session, Event::CursorBottom);
        let actions = send(&mut session, Event::StartSlideshow);
        assert_eq!(actions.len(), 2);
        let Action::ScheduleTick { generation, delay } = actions[1] else {
            panic!("expected a tick");
        };
        assert_eq!(delay, Duration::from_secs(3));
        assert_eq!(selected_name(&session), "c.jpg");

        let actions = send(&mut session, Event::Tick { generation });
        assert_eq!(selected_name(&session), "a.png");
        assert!(matches!(actions[0], Action::RequestRender(_)));
        assert_eq!(actions[1], Action::ScheduleTick { generation, delay });

        let actions = send(&mut session, Event::SetRenderMode(RenderMode::Duotone));
        assert!(actions.is_empty(), "the stopping key is swallowed");
        assert_eq!(session.render_mode, RenderMode::Color);
        assert_eq!(session.mode, Mode::ViewingImage);
        assert_eq!(session.status.as_deref(), Some("Slideshow stopped"));

        assert!(send(&mut session, Event::Tick { generation }).is_empty());
        assert_eq!(selected_name(&session), "a.png");
    }

    #[test]
    fn tick_from_an_earlier_show_is_ignored() {
        let (mut session, _) = session();
        let old = send(&mut session, Event::StartSlideshow);
        let Action::ScheduleTick { generation: old_generation, .. } = old[1] else {
            panic!("expected a tick");
        };
        send(&mut session, Event::Unbound);
        send(&mut session, Event::Back);
        send(&mut session, Event::StartSlideshow);

        let before = session.cursor;
        assert!(send(&mut session, Event::Tick { generation: old_generation }).is_empty());
        assert_eq!(session.cursor, before);
    }

    #[test]
    fn resize_while_viewing_uses_new_dimensions() {
        let (mut session, _) = session();
        send(&mut session, Event::Select);
        let actions = send(&mut session, Event::Resize { cols: 120, rows: 40 });
        let [Action::RequestRender(request)] = actions.as_slice() else {
            panic!("expected a render request");
        };
        assert_eq!((request.width, request.height), (120, 37));

        send(&mut session, Event::Back);
        assert!(send(&mut session, Event::Resize { cols: 100, rows: 30 }).is_empty());
    }

    #[test]
    fn search_filters_live_and_cancel_restores_previous_query() {
        let (mut session, _) = session();
        send(&mut session, Event::Search);
        assert_eq!(session.mode, Mode::Searching);

        send(&mut session, Event::Char('B'));
        assert_eq!(session.catalog.len(), 1);
        assert_eq!(selected_name(&session), "b.png");

        send(&mut session, Event::Select);
        assert_eq!(session.mode, Mode::Browsing);
        assert_eq!(session.search_query, "B");

        send(&mut session, Event::Search);
        assert_eq!(session.input.value(), "B");
        send(&mut session, Event::Backspace);
        assert_eq!(session.catalog.len(), 3);
        send(&mut session, Event::Back);
        assert_eq!(session.search_query, "B");
        assert_eq!(session.catalog.len(), 1);
    }

    #[test]
    fn search_from_directory_mode_returns_there() {
        let (mut session, _) = session();
        send(&mut session, Event::BrowseDirectories);
        send(&mut session, Event::Search);
        send(&mut session, Event::Char('t'));
        assert_eq!(session.catalog.items[0], CatalogItem::Parent);
        assert_eq!(session.catalog.items[1].name(), "trip");

        send(&mut session, Event::Select);
        assert_eq!(session.mode, Mode::DirectoryBrowsing);
    }

    #[test]
    fn directory_browsing_descends_climbs_and_commits() {
        let (mut session, _) = session();
        send(&mut session, Event::BrowseDirectories);
        assert_eq!(session.mode, Mode::DirectoryBrowsing);
        assert_eq!(selected_name(&session), "..");

        send(&mut session, Event::CursorDown);
        send(&mut session, Event::Select);
        assert_eq!(session.browsing_dir, Path::new("/pics/trip"));
        assert_eq!(session.working_dir, Path::new("/pics"), "not committed yet");

        send(&mut session, Event::Select);
        assert_eq!(session.browsing_dir, Path::new("/pics"));
        assert_eq!(selected_name(&session), "trip");

        send(&mut session, Event::Select);
        send(&mut session, Event::BrowseDirectories);
        assert_eq!(session.mode, Mode::Browsing);
        assert_eq!(session.working_dir, Path::new("/pics/trip"));
        assert_eq!(selected_name(&session), "d.png");
    }

    #[test]
    fn toggle_hidden_and_sort_reload() {
        let (mut session, fs) = session();
        fs.add_file("/pics/.z.png", 999, 0);
        send(&mut session, Event::ToggleHidden);
        assert_eq!(session.catalog.len(), 4);

        assert_eq!(selected_name(&session), "a.png", "selection kept by name");

        send(&mut session, Event::CycleSort);
        assert_eq!(selected_name(&session), "a.png");
        assert_eq!(session.catalog.items[0].name(), ".z.png");
        assert_eq!(session.catalog.items[1].name(), "c.jpg");
    }

    #[test]
    fn rename_selects_the_new_name() {
        let (mut session, fs) = session();
        send(&mut session, Event::Rename);
        assert_eq!(session.input.value(), "a.png");

        send(&mut session, Event::Backspace);
        send(&mut session, Event::Backspace);
        send(&mut session, Event::Backspace);
        send(&mut session, Event::Backspace);
        send(&mut session, Event::Backspace);
        for c in "z.png".chars() {
            send(&mut session, Event::Char(c));
        }
        send(&mut session, Event::Select);

        assert_eq!(session.mode, Mode::Browsing);
        assert!(fs.exists(Path::new("/pics/z.png")));
        assert!(!fs.exists(Path::new("/pics/a.png")));
        assert_eq!(selected_name(&session), "z.png");
        assert_eq!(session.status.as_deref(), Some("Renamed to z.png"));
    }

    #[test]
    fn rename_refuses_existing_target_and_bad_names() {
        let (mut session, fs) = session();
        send(&mut session, Event::Rename);
        session.input.set("b.png");
        send(&mut session, Event::Select);
        assert!(fs.exists(Path::new("/pics/a.png")));
        assert!(session.status.as_deref().is_some_and(|s| s.contains("already exists")));

        send(&mut session, Event::Rename);
        session.input.set("sub/a.png");
        send(&mut session, Event::Select);
        assert!(session.status.as_deref().is_some_and(|s| s.contains("path separator")));

        send(&mut session, Event::Rename);
        session.input.set("  ");
        send(&mut session, Event::Select);
        assert!(session.status.as_deref().is_some_and(|s| s.contains("empty")));
        assert_eq!(session.catalog.len(), 3);
    }

    #[test]
    fn delete_requires_y() {
        let (mut session, fs) = session();
        send(&mut session, Event::Delete);
        assert_eq!(session.mode, Mode::ConfirmingDelete);
        send(&mut session, Event::Char('n'));
        assert_eq!(session.mode, Mode::Browsing);
        assert!(fs.exists(Path::new("/pics/a.png")));

        send(&mut session, Event::Delete);
        send(&mut session, Event::Char('y'));
        assert!(!fs.exists(Path::new("/pics/a.png")));
        assert_eq!(session.catalog.len(), 2);
        assert_eq!(session.status.as_deref(), Some("Deleted a.png"));
    }

    #[test]
    fn delete_failure_reloads_and_reports() {
        let (mut session, fs) = session();
        send(&mut session, Event::Delete);
        fs.remove_file(Path::new("/pics/a.png")).unwrap();
        send(&mut session, Event::Char('y'));

        assert_eq!(session.mode, Mode::Browsing);
        assert_eq!(session.catalog.len(), 2);
        assert!(session.status.as_deref().is_some_and(|s| s.starts_with("Delete failed")));
    }

    #[test]
    fn copy_path_emits_absolute_path() {
        let (mut session, _) = session();
        let actions = send(&mut session, Event::CopyPath);
        assert_eq!(actions, vec![Action::CopyToClipboard(PathBuf::from("/pics/a.png"))]);

        send(&mut session, Event::ClipboardFailed { reason: "no display".into() });
        assert_eq!(session.status.as_deref(), Some("Clipboard unavailable: no display"));
    }

    #[test]
    fn filter_picker_from_viewer_rerenders() {
        let (mut session, _) = session();
        send(&mut session, Event::Select);
        send(&mut session, Event::SelectFilter);
        assert_eq!(session.mode, Mode::SelectingFilter);
        assert_eq!(session.filter_cursor, 0);

        send(&mut session, Event::CursorDown);
        send(&mut session, Event::CursorDown);
        let actions = send(&mut session, Event::Select);
        assert_eq!(session.mode, Mode::ViewingImage);
        assert_eq!(session.render_mode, RenderMode::Inverted);
        let [Action::RequestRender(request)] = actions.as_slice() else {
            panic!("expected a render request");
        };
        assert_eq!(request.mode, RenderMode::Inverted);
    }

    #[test]
    fn digit_in_browsing_sets_mode_for_next_render() {
        let (mut session, _) = session();
        let actions = send(&mut session, Event::SetRenderMode(RenderMode::Grayscale));
        assert!(actions.is_empty());
        assert_eq!(session.mode, Mode::Browsing);

        let actions = send(&mut session, Event::Select);
        let [Action::RequestRender(request)] = actions.as_slice() else {
            panic!("expected a render request");
        };
        assert_eq!(request.mode, RenderMode::Grayscale);
    }

    #[test]
    fn filter_picker_cancel_keeps_mode() {
        let (mut session, _) = session();
        send(&mut session, Event::SelectFilter);
        send(&mut session, Event::SetRenderMode(RenderMode::Duotone));
        assert_eq!(session.filter_cursor, 3);
        send(&mut session, Event::Back);
        assert_eq!(session.mode, Mode::Browsing);
        assert_eq!(session.render_mode, RenderMode::Color);
    }

    #[test]
    fn unreadable_directory_reports_status() {
        let (mut session, fs) = session();
        fs.deny("/pics/trip");
        send(&mut session, Event::BrowseDirectories);
        send(&mut session, Event::CursorDown);
        send(&mut session, Event::Select);

        assert!(matches!(session.catalog.items[1], CatalogItem::Unreadable { .. }));
        assert!(session.status.as_deref().is_some_and(|s| s.contains("cannot read")));

        send(&mut session, Event::CursorDown);
        send(&mut session, Event::Select);
        assert_eq!(session.browsing_dir, Path::new("/pics/trip"), "unreadable row is inert");
    }

    #[test]
    fn listing_error_clears_after_climbing_out() {
        let (mut session, fs) = session();
        fs.deny("/pics/trip");
        send(&mut session, Event::BrowseDirectories);
        send(&mut session, Event::CursorDown);
        send(&mut session, Event::Select);
        assert!(session.status.is_some());

        send(&mut session, Event::CursorTop);
        send(&mut session, Event::Select);

        assert_eq!(session.browsing_dir, Path::new("/pics"));
        assert_eq!(session.catalog.error, None);
        assert_eq!(session.status, None);
        assert_eq!(selected_name(&session), "trip");
    }

    #[test]
    fn newer_status_survives_successful_listing() {
        let (mut session, fs) = session();
        fs.deny("/pics/trip");
        send(&mut session, Event::BrowseDirectories);
        send(&mut session, Event::CursorDown);
        send(&mut session, Event::Select);

        session.set_status("Path copied!");
        send(&mut session, Event::CursorTop);
        send(&mut session, Event::Select);

        assert_eq!(session.status.as_deref(), Some("Path copied!"));
    }
}

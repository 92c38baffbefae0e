//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform the `Session` into a `UIViewModel`
//! 2. **Component Rendering**: Delegate to the list or viewer layout
//!
//! The result is one string of absolutely positioned lines, written to the
//! terminal in a single call by the runtime.

use crate::app::Session;
use crate::ui::components;
use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BodyView, UIViewModel};

/// Renders the whole screen for `session` at the given terminal size.
///
/// # Example
///
/// ```no_run
/// use phogo::app::Session;
/// use phogo::ui::render;
///
/// # fn demo(session: &Session) {
/// let frame = render(session, 24, 80);
/// print!("{frame}");
/// # }
/// ```
#[must_use]
pub fn render(session: &Session, rows: usize, cols: usize) -> String {
    let _span = tracing::trace_span!("render_frame", rows, cols).entered();
    let viewmodel = session.compute_viewmodel(rows, cols);
    render_viewmodel(&viewmodel, &session.theme, rows, cols)
}

/// Renders a pre-computed view model.
#[must_use]
pub fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) -> String {
    let mut frame = Frame::new(rows);

    match &vm.body {
        BodyView::List {
            items, empty_state, ..
        } => components::render_list_screen(&mut frame, vm, items, empty_state.as_ref(), theme, cols),
        BodyView::Image(view) => components::render_viewer_screen(&mut frame, vm, view, theme, cols),
    }

    frame.finish()
}

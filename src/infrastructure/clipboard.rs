//! System clipboard access.
//!
//! Opening the clipboard can block (X11/Wayland round trips), so the runtime
//! calls [`copy_text`] on the blocking pool and reports failures back as an
//! event.

use crate::domain::error::{PhogoError, Result};

/// Places `text` on the system clipboard.
///
/// # Errors
///
/// Returns [`PhogoError::Clipboard`] when no clipboard is available (e.g. no
/// display server) or the write is rejected.
pub fn copy_text(text: &str) -> Result<()> {
    let _span = tracing::debug_span!("copy_text", len = text.len()).entered();

    let mut clipboard = arboard::Clipboard::new().map_err(|e| PhogoError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text.to_owned())
        .map_err(|e| PhogoError::Clipboard(e.to_string()))?;

    tracing::debug!("copied to clipboard");
    Ok(())
}

//! Error types for phogo.
//!
//! This module defines the centralized error type [`PhogoError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented with the
//! `thiserror` crate.
//!
//! Most failures in an interactive session are not fatal: catalog reads degrade
//! to a synthetic entry, render failures travel inside completion messages and
//! file-operation failures become status messages. The only error that ends the
//! process is a failure to set up the terminal.

use thiserror::Error;

/// The main error type for phogo operations.
///
/// # Examples
///
/// ```
/// use phogo::PhogoError;
///
/// fn refuse() -> Result<(), PhogoError> {
///     Err(PhogoError::FileOperation("b.png already exists".to_string()))
/// }
///
/// assert!(refuse().unwrap_err().to_string().contains("already exists"));
/// ```
#[derive(Debug, Error)]
pub enum PhogoError {
    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Image decoding failed.
    ///
    /// Raised by the text-art renderer for unsupported or corrupt files.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Rendering could not produce a text block.
    #[error("Render error: {0}")]
    Render(String),

    /// Rename or delete was refused before touching the filesystem.
    ///
    /// The string names the reason (existing target, invalid name, ...).
    #[error("{0}")]
    FileOperation(String),

    /// The system clipboard is unavailable or refused the write.
    #[error("{0}")]
    Clipboard(String),

    /// Terminal setup or teardown failed.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// A specialized `Result` type for phogo operations.
pub type Result<T> = std::result::Result<T, PhogoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert_with_context() {
        let err: PhogoError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(err, PhogoError::Io(_)));
        assert_eq!(err.to_string(), "IO error: denied");
    }

    #[test]
    fn file_operation_message_is_shown_verbatim() {
        let err = PhogoError::FileOperation("cannot rename: b.png already exists".into());
        assert_eq!(err.to_string(), "cannot rename: b.png already exists");
    }
}

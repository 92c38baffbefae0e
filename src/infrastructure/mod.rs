//! Infrastructure layer for environment interactions: data and log paths,
//! start path resolution and the system clipboard.

pub mod clipboard;
pub mod paths;

pub use clipboard::copy_text;
pub use paths::{absolutize, expand_tilde, get_data_dir, log_file_path, trace_file_path};

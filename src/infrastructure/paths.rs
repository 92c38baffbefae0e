//! Path utilities: where logs and traces live, and how the start path given
//! on the command line is resolved.
//!
//! Log and trace files go under the platform's local data directory
//! (`~/.local/share/phogo` on Linux), falling back to the system temporary
//! directory when no home is known.

use std::path::{Path, PathBuf};

/// Application directory name under the data directory.
const APP_DIR: &str = "phogo";

/// Returns the data directory for phogo's log and trace files.
///
/// # Examples
///
/// ```
/// use phogo::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert!(data_dir.ends_with("phogo"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR)
}

#[must_use]
pub fn log_file_path() -> PathBuf {
    get_data_dir().join("phogo.log")
}

#[must_use]
pub fn trace_file_path() -> PathBuf {
    get_data_dir().join("otlp.json")
}

/// Expands a leading `~` component to the home directory.
///
/// Shells usually do this already; a quoted `"~/pics"` argument still
/// arrives with the tilde.
///
/// # Examples
///
/// ```
/// use phogo::infrastructure::expand_tilde;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(expand_tilde(Path::new("/absolute/path")), PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) if rest.as_os_str().is_empty() => home,
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

/// Resolves `path` against the current directory and canonicalizes it.
///
/// When canonicalization fails (the path does not exist yet, or a component
/// cannot be read) the joined path is returned as is, so the caller can
/// still report it.
#[must_use]
pub fn absolutize(path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };
    joined.canonicalize().unwrap_or(joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_files_live_in_data_dir() {
        let data_dir = get_data_dir();
        assert!(log_file_path().starts_with(&data_dir));
        assert!(trace_file_path().starts_with(&data_dir));
    }

    #[test]
    fn absolutize_resolves_relative_and_missing_paths() {
        let dir = tempfile::tempdir().unwrap();
        let canonical = dir.path().canonicalize().unwrap();
        assert_eq!(absolutize(dir.path()), canonical);

        let missing = dir.path().join("missing.png");
        assert_eq!(absolutize(&missing), missing);

        assert!(absolutize(Path::new("relative.png")).is_absolute());
    }

    #[test]
    fn tilde_expansion_only_touches_leading_tilde() {
        assert_eq!(expand_tilde(Path::new("a/~/b")), PathBuf::from("a/~/b"));
        assert_eq!(expand_tilde(Path::new("~user/pics")), PathBuf::from("~user/pics"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(Path::new("~/pics")), home.join("pics"));
            assert_eq!(expand_tilde(Path::new("~")), home);
        }
    }
}

//! Filesystem abstraction used by the catalog and the session.
//!
//! The [`FileSystem`] trait is the only way the library touches the disk:
//! listing a directory, probing a path, renaming and deleting. Production
//! code uses [`OsFileSystem`]; unit tests use an in-memory fake so catalog
//! and session behavior can be checked without a real directory tree.

use crate::domain::entry::Entry;
use crate::domain::error::{PhogoError, Result};
use std::path::Path;
use std::time::SystemTime;

/// Abstraction over the raw filesystem operations the browser needs.
///
/// Every method may fail; callers decide how a failure degrades. Catalog
/// builds turn a `read_dir` error into a synthetic entry, the session turns
/// rename/delete errors into status messages.
///
/// # Examples
///
/// ```no_run
/// use phogo::catalog::{FileSystem, OsFileSystem};
/// use std::path::Path;
///
/// let fs = OsFileSystem;
/// let entries = fs.read_dir(Path::new("/tmp"))?;
/// # Ok::<(), phogo::PhogoError>(())
/// ```
pub trait FileSystem: Send + Sync {
    /// Lists the direct children of `dir`.
    ///
    /// Entries are unordered and include hidden files; filtering and sorting
    /// belong to [`crate::catalog::build_catalog`].
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read.
    fn read_dir(&self, dir: &Path) -> Result<Vec<Entry>>;

    /// Whether `path` exists and is (or points to) a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Whether anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Renames `from` to `to`, refusing to replace an existing target.
    ///
    /// # Errors
    ///
    /// Returns an error if the target exists or the OS rejects the rename.
    fn rename(&self, from: &Path, to: &Path) -> Result<()>;

    /// Deletes the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or cannot be removed.
    fn remove_file(&self, path: &Path) -> Result<()>;
}

/// [`FileSystem`] backed by `std::fs`.
///
/// Symlinks are followed, so a link to a directory lists as a directory and
/// a link to an image lists with the target's size. Entries whose metadata
/// cannot be read (dangling links, races with deletion) are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn read_dir(&self, dir: &Path) -> Result<Vec<Entry>> {
        let mut entries = Vec::new();

        for dir_entry in std::fs::read_dir(dir)? {
            let dir_entry = dir_entry?;
            let path = dir_entry.path();

            let metadata = match std::fs::metadata(&path) {
                Ok(metadata) => metadata,
                Err(e) => {
                    tracing::debug!(path = ?path, error = %e, "skipping entry without metadata");
                    continue;
                }
            };

            let modified = metadata
                .modified()
                .map(unix_seconds)
                .unwrap_or_default();
            let name = dir_entry.file_name().to_string_lossy().into_owned();

            entries.push(if metadata.is_dir() {
                Entry::directory(name, modified)
            } else {
                Entry::file(name, metadata.len(), modified)
            });
        }

        Ok(entries)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn exists(&self, path: &Path) -> bool {
        path.symlink_metadata().is_ok()
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<()> {
        // std::fs::rename silently replaces files on Unix
        if self.exists(to) {
            return Err(PhogoError::FileOperation(format!(
                "{} already exists",
                to.display()
            )));
        }
        std::fs::rename(from, to)?;
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        std::fs::remove_file(path)?;
        Ok(())
    }
}

fn unix_seconds(time: SystemTime) -> i64 {
    chrono::DateTime::<chrono::Utc>::from(time).timestamp()
}


#[cfg(test)]
mod tests {
    use super::fake::MemoryFileSystem;
    use super::*;

    #[test]
    fn fake_lists_direct_children_only() {
        let fs = MemoryFileSystem::new();
        fs.add_file("/pics/a.png", 10, 0)
            .add_file("/pics/nested/b.png", 10, 0);

        let mut names: Vec<_> = fs
            .read_dir(Path::new("/pics"))
            .unwrap()
            .into_iter()
            .map(|entry| entry.name)
            .collect();
        names.sort();
        assert_eq!(names, vec!["a.png", "nested"]);
    }

    #[test]
    fn fake_rename_refuses_existing_target() {
        let fs = MemoryFileSystem::new();
        fs.add_file("/a.png", 1, 0).add_file("/b.png", 1, 0);

        let err = fs.rename(Path::new("/a.png"), Path::new("/b.png")).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert!(fs.exists(Path::new("/a.png")));
    }

    #[test]
    fn os_rename_refuses_existing_target() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.png");
        let b = dir.path().join("b.png");
        std::fs::write(&a, b"a").unwrap();
        std::fs::write(&b, b"b").unwrap();

        assert!(OsFileSystem.rename(&a, &b).is_err());
        assert_eq!(std::fs::read(&b).unwrap(), b"b");
    }

    #[test]
    fn os_read_dir_reports_sizes_and_kinds() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.png"), [0u8; 42]).unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();

        let mut entries = OsFileSystem.read_dir(dir.path()).unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].size_bytes, 42);
        assert!(!entries[0].is_dir);
        assert!(entries[1].is_dir);
    }
}

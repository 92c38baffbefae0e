//! Catalog engine.
//!
//! Derives the list a session shows from a directory listing: hidden-file
//! exclusion, type filter, substring filter, then ordering. The engine is a
//! pure function of its inputs and the [`FileSystem`] it reads through.
//!
//! # Failure behavior
//!
//! A directory that cannot be listed never surfaces as an error. The catalog
//! instead holds a single [`CatalogItem::Unreadable`] row (preceded by `..`
//! in directory mode, so the user can still climb out) and carries the
//! message in [`Catalog::error`] for the status line.

mod fs;

#[cfg(test)]
pub(crate) use fs::fake;
pub use fs::{FileSystem, OsFileSystem};

use crate::domain::entry::{CatalogItem, Entry, ListItem, SortKey};
use std::path::Path;

/// What a catalog lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    /// Image files (by extension) of the working directory.
    Images,
    /// Subdirectories of the browsing directory, plus `..` below the root.
    Directories,
}

/// Filter and ordering inputs for [`build_catalog`].
#[derive(Debug, Clone, Copy)]
pub struct CatalogQuery<'a> {
    pub kind: CatalogKind,
    pub query: &'a str,
    pub show_hidden: bool,
    pub sort: SortKey,
}

/// An ordered list of catalog rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub items: Vec<CatalogItem>,

    /// Set when the directory could not be read.
    pub error: Option<String>,
}

impl Catalog {
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CatalogItem> {
        self.items.get(index)
    }

    /// Index of the first row whose name equals `name`.
    #[must_use]
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name() == name)
    }

    /// Number of image rows.
    #[must_use]
    pub fn image_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_image()).count()
    }
}

/// Builds the ordered catalog for `dir`.
///
/// Filters run in a fixed order: hidden entries are dropped unless
/// `show_hidden`, then the type filter keeps directories or image files,
/// then a non-empty `query` keeps names containing it (case-insensitive).
/// The `..` row is exempt from all filters and always comes first.
///
/// # Examples
///
/// ```no_run
/// use phogo::catalog::{build_catalog, CatalogKind, CatalogQuery, OsFileSystem};
/// use phogo::domain::SortKey;
/// use std::path::Path;
///
/// let query = CatalogQuery {
///     kind: CatalogKind::Images,
///     query: "cat",
///     show_hidden: false,
///     sort: SortKey::Name,
/// };
/// let catalog = build_catalog(&OsFileSystem, Path::new("/home/me/photos"), &query);
/// for item in &catalog.items {
///     println!("{}", item.name());
/// }
/// ```
pub fn build_catalog(fs: &dyn FileSystem, dir: &Path, query: &CatalogQuery<'_>) -> Catalog {
    let _span = tracing::debug_span!(
        "build_catalog",
        dir = %dir.display(),
        kind = ?query.kind,
        sort = ?query.sort
    )
    .entered();

    let mut items = Vec::new();
    if query.kind == CatalogKind::Directories && dir.parent().is_some() {
        items.push(CatalogItem::Parent);
    }

    let entries = match fs.read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            let message = format!("cannot read {}: {e}", dir.display());
            tracing::warn!(error = %e, "directory listing failed");
            items.push(CatalogItem::Unreadable {
                message: message.clone(),
            });
            return Catalog {
                items,
                error: Some(message),
            };
        }
    };

    let needle = query.query.to_lowercase();
    let kept: Vec<Entry> = entries
        .into_iter()
        .filter(|entry| query.show_hidden || !entry.is_hidden())
        .filter(|entry| match query.kind {
            CatalogKind::Directories => entry.is_dir,
            CatalogKind::Images => !entry.is_dir && entry.has_image_extension(),
        })
        .filter(|entry| needle.is_empty() || entry.name.to_lowercase().contains(&needle))
        .collect();

    tracing::debug!(count = kept.len(), "catalog built");

    items.extend(kept.into_iter().map(|entry| match query.kind {
        CatalogKind::Directories => CatalogItem::Directory(entry),
        CatalogKind::Images => CatalogItem::Image(entry),
    }));
    items.sort_by(|a, b| a.compare_by(b, query.sort));

    Catalog { items, error: None }
}

#[cfg(test)]
mod tests {
    use super::fake::MemoryFileSystem;
    use super::*;

    fn images(query: &str, show_hidden: bool, sort: SortKey) -> CatalogQuery<'_> {
        CatalogQuery {
            kind: CatalogKind::Images,
            query,
            show_hidden,
            sort,
        }
    }

    fn names(catalog: &Catalog) -> Vec<&str> {
        catalog.items.iter().map(CatalogItem::name).collect()
    }

    fn sample() -> MemoryFileSystem {
        let fs = MemoryFileSystem::new();
        fs.add_file("/p/b.png", 300, 10)
            .add_file("/p/A.JPG", 100, 30)
            .add_file("/p/c.jpeg", 200, 20)
            .add_file("/p/notes.txt", 999, 99)
            .add_file("/p/.secret.png", 5, 5)
            .add_dir("/p/sub")
            .add_dir("/p/.git");
        fs
    }

    #[test]
    fn image_mode_keeps_only_visible_images_sorted_by_name() {
        let catalog = build_catalog(&sample(), Path::new("/p"), &images("", false, SortKey::Name));
        assert_eq!(names(&catalog), vec!["A.JPG", "b.png", "c.jpeg"]);
        assert!(catalog.error.is_none());
    }

    #[test]
    fn sort_cycle_and_hidden_toggle_over_the_same_directory() {
        let fs = MemoryFileSystem::new();
        fs.add_file("/s/a.png", 100, 1)
            .add_file("/s/b.jpg", 50, 2)
            .add_file("/s/.hidden.png", 10, 0);
        let dir = Path::new("/s");

        let by_name = build_catalog(&fs, dir, &images("", false, SortKey::Name));
        assert_eq!(names(&by_name), vec!["a.png", "b.jpg"]);

        let by_size = build_catalog(&fs, dir, &images("", false, SortKey::Name.next()));
        assert_eq!(names(&by_size), vec!["a.png", "b.jpg"]);

        let by_time = build_catalog(&fs, dir, &images("", false, SortKey::Size.next()));
        assert_eq!(names(&by_time), vec!["b.jpg", "a.png"]);

        let with_hidden = build_catalog(&fs, dir, &images("", true, SortKey::ModifiedTime));
        assert_eq!(names(&with_hidden), vec!["b.jpg", "a.png", ".hidden.png"]);

        for sort in [SortKey::Name, SortKey::Size, SortKey::ModifiedTime] {
            let hidden_off = build_catalog(&fs, dir, &images("", false, sort));
            let hidden_on = build_catalog(&fs, dir, &images("", true, sort));
            assert!(
                hidden_off.items.iter().all(|item| hidden_on.items.contains(item)),
                "showing hidden files dropped an entry under {sort:?}"
            );
            assert_eq!(hidden_on.len(), hidden_off.len() + 1);
        }
    }

    #[test]
    fn hidden_images_appear_when_requested() {
        let catalog = build_catalog(&sample(), Path::new("/p"), &images("", true, SortKey::Name));
        assert_eq!(names(&catalog)[0], ".secret.png");
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn size_and_time_sort_descending() {
        let fs = sample();
        let by_size = build_catalog(&fs, Path::new("/p"), &images("", false, SortKey::Size));
        assert_eq!(names(&by_size), vec!["b.png", "c.jpeg", "A.JPG"]);

        let by_time = build_catalog(&fs, Path::new("/p"), &images("", false, SortKey::ModifiedTime));
        assert_eq!(names(&by_time), vec!["A.JPG", "c.jpeg", "b.png"]);
    }

    #[test]
    fn ties_break_on_name() {
        let fs = MemoryFileSystem::new();
        fs.add_file("/t/z.png", 10, 1)
            .add_file("/t/a.png", 10, 1)
            .add_file("/t/m.png", 10, 1);
        let catalog = build_catalog(&fs, Path::new("/t"), &images("", false, SortKey::Size));
        assert_eq!(names(&catalog), vec!["a.png", "m.png", "z.png"]);
    }

    #[test]
    fn substring_filter_ignores_case() {
        let catalog = build_catalog(&sample(), Path::new("/p"), &images("a", false, SortKey::Name));
        assert_eq!(names(&catalog), vec!["A.JPG"]);

        let none = build_catalog(&sample(), Path::new("/p"), &images("zzz", false, SortKey::Name));
        assert!(none.is_empty());
    }

    #[test]
    fn directory_mode_prepends_parent_exempt_from_filters() {
        let query = CatalogQuery {
            kind: CatalogKind::Directories,
            query: "nothing-matches",
            show_hidden: false,
            sort: SortKey::Size,
        };
        let catalog = build_catalog(&sample(), Path::new("/p"), &query);
        assert_eq!(names(&catalog), vec![".."]);

        let all = CatalogQuery { query: "", show_hidden: true, ..query };
        let catalog = build_catalog(&sample(), Path::new("/p"), &all);
        assert_eq!(names(&catalog), vec!["..", ".git", "sub"]);
    }

    #[test]
    fn root_has_no_parent_row() {
        let fs = MemoryFileSystem::new();
        fs.add_dir("/home");
        let query = CatalogQuery {
            kind: CatalogKind::Directories,
            query: "",
            show_hidden: false,
            sort: SortKey::Name,
        };
        let catalog = build_catalog(&fs, Path::new("/"), &query);
        assert_eq!(names(&catalog), vec!["home"]);
    }

    #[test]
    fn unreadable_directory_degrades_to_synthetic_row() {
        let fs = sample();
        fs.deny("/p");

        let catalog = build_catalog(&fs, Path::new("/p"), &images("", false, SortKey::Name));
        assert_eq!(catalog.len(), 1);
        assert!(matches!(catalog.items[0], CatalogItem::Unreadable { .. }));
        assert!(catalog.error.as_deref().is_some_and(|m| m.contains("/p")));

        let query = CatalogQuery {
            kind: CatalogKind::Directories,
            query: "",
            show_hidden: false,
            sort: SortKey::Name,
        };
        let catalog = build_catalog(&fs, Path::new("/p"), &query);
        assert_eq!(catalog.items[0], CatalogItem::Parent);
        assert!(matches!(catalog.items[1], CatalogItem::Unreadable { .. }));
    }

    #[test]
    fn missing_directory_is_unreadable_too() {
        let fs = MemoryFileSystem::new();
        let catalog = build_catalog(&fs, Path::new("/gone"), &images("", false, SortKey::Name));
        assert!(catalog.error.is_some());
        assert_eq!(catalog.image_count(), 0);
    }
}

//! Filesystem entries and the list items built from them.
//!
//! An [`Entry`] is an immutable snapshot of one directory item taken when a
//! catalog is built. Lists in the UI hold [`CatalogItem`]s, a tagged variant
//! over images, directories, the synthetic parent link and the synthetic
//! "unreadable directory" marker. Every list item, including the render-mode
//! choices of the filter picker, exposes the same [`ListItem`] display
//! capability so the table component never needs to know what it is drawing.

use std::cmp::Ordering;
use std::fmt;

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// File extensions (lowercase, without dot) shown in image mode.
pub const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// One filesystem item as seen at catalog-build time.
///
/// `modified` is a Unix timestamp in seconds. `size_bytes` is only meaningful
/// for files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub is_dir: bool,
    pub size_bytes: u64,
    pub modified: i64,
}

impl Entry {
    /// Creates a file entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use phogo::domain::Entry;
    ///
    /// let entry = Entry::file("a.png", 100, 1_700_000_000);
    /// assert!(!entry.is_dir);
    /// assert!(entry.has_image_extension());
    /// ```
    #[must_use]
    pub fn file(name: impl Into<String>, size_bytes: u64, modified: i64) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
            size_bytes,
            modified,
        }
    }

    /// Creates a directory entry.
    #[must_use]
    pub fn directory(name: impl Into<String>, modified: i64) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
            size_bytes: 0,
            modified,
        }
    }

    /// Dot-files are hidden unless the session shows hidden entries.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }

    /// Whether the name ends in one of [`IMAGE_EXTENSIONS`], ignoring case.
    ///
    /// Only the extension is checked; file content is never inspected.
    #[must_use]
    pub fn has_image_extension(&self) -> bool {
        std::path::Path::new(&self.name)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                IMAGE_EXTENSIONS
                    .iter()
                    .any(|allowed| ext.eq_ignore_ascii_case(allowed))
            })
    }

    /// Orders two entries by `key`, breaking ties by name.
    ///
    /// Names compare case-insensitively first so `A.JPG` sorts next to
    /// `a.png`. Size and modification time put the largest and newest
    /// entries first.
    #[must_use]
    pub fn compare_by(&self, other: &Self, key: SortKey) -> Ordering {
        let by_name = || {
            self.name
                .to_lowercase()
                .cmp(&other.name.to_lowercase())
                .then_with(|| self.name.cmp(&other.name))
        };

        match key {
            SortKey::Name => by_name(),
            SortKey::Size => other.size_bytes.cmp(&self.size_bytes).then_with(by_name),
            SortKey::ModifiedTime => other.modified.cmp(&self.modified).then_with(by_name),
        }
    }

    /// Returns a human-readable string describing how long ago the entry was modified.
    ///
    /// - Less than 1 minute: "just now"
    /// - Less than 1 hour: "Xm ago"
    /// - Less than 1 day: "Xh ago"
    /// - 1 day or more: "Xd ago"
    #[must_use]
    pub fn modified_ago(&self, now: i64) -> String {
        let diff = now - self.modified;

        if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            format!("{}m ago", diff / SECONDS_PER_MINUTE)
        } else if diff < SECONDS_PER_DAY {
            format!("{}h ago", diff / SECONDS_PER_HOUR)
        } else {
            format!("{}d ago", diff / SECONDS_PER_DAY)
        }
    }
}

/// Formats a byte count with binary units, e.g. `1536` as `"1.5 KB"`.
///
/// # Examples
///
/// ```
/// use phogo::domain::format_bytes;
///
/// assert_eq!(format_bytes(512), "512 B");
/// assert_eq!(format_bytes(1536), "1.5 KB");
/// assert_eq!(format_bytes(3 * 1024 * 1024), "3.0 MB");
/// ```
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    const UNIT: u64 = 1024;
    const PREFIXES: [char; 6] = ['K', 'M', 'G', 'T', 'P', 'E'];

    if bytes < UNIT {
        return format!("{bytes} B");
    }

    let mut div = UNIT;
    let mut exp = 0;
    let mut n = bytes / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }

    #[allow(clippy::cast_precision_loss)]
    let value = bytes as f64 / div as f64;
    format!("{value:.1} {}B", PREFIXES[exp])
}

/// Display capability shared by everything a list can show.
pub trait ListItem {
    /// Primary text of the row.
    fn display_title(&self) -> String;

    /// Secondary text of the row (size, kind, description).
    fn display_subtitle(&self, now: i64) -> String;

    /// Position of this row relative to `other` when the list is ordered
    /// by `key`.
    fn compare_by(&self, other: &Self, key: SortKey) -> Ordering;
}

/// One row of a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogItem {
    /// The synthetic `..` link shown in directory mode below the root.
    Parent,

    /// An image file in the working directory.
    Image(Entry),

    /// A subdirectory of the directory being browsed.
    Directory(Entry),

    /// Stand-in for a directory that could not be listed.
    Unreadable {
        /// What went wrong, as reported by the OS.
        message: String,
    },
}

impl CatalogItem {
    /// Name used for filtering, sorting and path joins.
    ///
    /// The parent link is `..`; an unreadable marker has no name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Parent => "..",
            Self::Image(entry) | Self::Directory(entry) => &entry.name,
            Self::Unreadable { .. } => "",
        }
    }

    #[must_use]
    pub const fn is_image(&self) -> bool {
        matches!(self, Self::Image(_))
    }

    /// The parent link leads and the unreadable marker trails.
    const fn rank(&self) -> u8 {
        match self {
            Self::Parent => 0,
            Self::Image(_) | Self::Directory(_) => 1,
            Self::Unreadable { .. } => 2,
        }
    }
}

impl ListItem for CatalogItem {
    fn display_title(&self) -> String {
        match self {
            Self::Parent => "..".to_string(),
            Self::Image(entry) => entry.name.clone(),
            Self::Directory(entry) => format!("{}/", entry.name),
            Self::Unreadable { .. } => "<unreadable directory>".to_string(),
        }
    }

    fn display_subtitle(&self, now: i64) -> String {
        match self {
            Self::Parent => "Parent directory".to_string(),
            Self::Image(entry) => format!(
                "{}  {}",
                format_bytes(entry.size_bytes),
                entry.modified_ago(now)
            ),
            Self::Directory(entry) => format!("Directory  {}", entry.modified_ago(now)),
            Self::Unreadable { message } => message.clone(),
        }
    }

    fn compare_by(&self, other: &Self, key: SortKey) -> Ordering {
        match (self, other) {
            (Self::Image(a) | Self::Directory(a), Self::Image(b) | Self::Directory(b)) => {
                a.compare_by(b, key)
            }
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Ordering applied to catalog entries after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Case-insensitive name, ascending.
    #[default]
    Name,
    /// File size, largest first.
    Size,
    /// Modification time, most recent first.
    ModifiedTime,
}

impl SortKey {
    /// The next key in the `Name → Size → ModifiedTime → Name` cycle.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Size,
            Self::Size => Self::ModifiedTime,
            Self::ModifiedTime => Self::Name,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Size => "Size",
            Self::ModifiedTime => "Date",
        }
    }
}

/// The four text-art presets offered by the viewer.
///
/// The session treats these as opaque choices handed to the renderer; what
/// each one looks like is decided in [`crate::render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    #[default]
    Color,
    Grayscale,
    Inverted,
    Duotone,
}

impl RenderMode {
    /// All modes in picker order; the digit key for a mode is its position plus one.
    pub const ALL: [Self; 4] = [Self::Color, Self::Grayscale, Self::Inverted, Self::Duotone];

    /// Maps the digit keys `1`–`4` to a mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use phogo::domain::RenderMode;
    ///
    /// assert_eq!(RenderMode::from_digit('3'), Some(RenderMode::Inverted));
    /// assert_eq!(RenderMode::from_digit('5'), None);
    /// ```
    #[must_use]
    pub fn from_digit(digit: char) -> Option<Self> {
        let index = digit.to_digit(10)?.checked_sub(1)?;
        Self::ALL.get(usize::try_from(index).ok()?).copied()
    }

    /// Position in [`Self::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|mode| *mode == self).unwrap_or(0)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Color => "Color",
            Self::Grayscale => "Grayscale",
            Self::Inverted => "Inverted",
            Self::Duotone => "Duotone",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl ListItem for RenderMode {
    fn display_title(&self) -> String {
        format!("{} {}", self.index() + 1, self.label())
    }

    fn display_subtitle(&self, _now: i64) -> String {
        match self {
            Self::Color => "full color characters",
            Self::Grayscale => "plain characters",
            Self::Inverted => "color, reversed brightness",
            Self::Duotone => "plain, reversed brightness",
        }
        .to_string()
    }

    /// The picker always lists modes in digit order.
    fn compare_by(&self, other: &Self, _key: SortKey) -> Ordering {
        self.index().cmp(&other.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_extension_check_ignores_case() {
        assert!(Entry::file("A.PNG", 1, 0).has_image_extension());
        assert!(Entry::file("b.Jpeg", 1, 0).has_image_extension());
        assert!(!Entry::file("notes.txt", 1, 0).has_image_extension());
        assert!(!Entry::file("png", 1, 0).has_image_extension());
    }

    #[test]
    fn list_items_order_by_sort_key() {
        let big_old = CatalogItem::Image(Entry::file("b.png", 100, 1));
        let small_new = CatalogItem::Image(Entry::file("A.png", 50, 2));

        assert_eq!(small_new.compare_by(&big_old, SortKey::Name), Ordering::Less);
        assert_eq!(big_old.compare_by(&small_new, SortKey::Size), Ordering::Less);
        assert_eq!(small_new.compare_by(&big_old, SortKey::ModifiedTime), Ordering::Less);

        let unreadable = CatalogItem::Unreadable { message: "denied".into() };
        for key in [SortKey::Name, SortKey::Size, SortKey::ModifiedTime] {
            assert_eq!(CatalogItem::Parent.compare_by(&big_old, key), Ordering::Less);
            assert_eq!(unreadable.compare_by(&CatalogItem::Parent, key), Ordering::Greater);
        }

        assert_eq!(
            RenderMode::Duotone.compare_by(&RenderMode::Color, SortKey::Size),
            Ordering::Greater
        );
    }

    #[test]
    fn sort_key_cycles_through_all_keys() {
        let key = SortKey::Name;
        assert_eq!(key.next(), SortKey::Size);
        assert_eq!(key.next().next(), SortKey::ModifiedTime);
        assert_eq!(key.next().next().next(), SortKey::Name);
    }

    #[test]
    fn render_mode_digits_round_trip() {
        for mode in RenderMode::ALL {
            let digit = char::from_digit(u32::try_from(mode.index() + 1).unwrap(), 10).unwrap();
            assert_eq!(RenderMode::from_digit(digit), Some(mode));
        }
        assert_eq!(RenderMode::from_digit('0'), None);
    }

    #[test]
    fn modified_ago_buckets() {
        let entry = Entry::file("a.png", 1, 1_000_000);
        assert_eq!(entry.modified_ago(1_000_030), "just now");
        assert_eq!(entry.modified_ago(1_000_000 + 5 * 60), "5m ago");
        assert_eq!(entry.modified_ago(1_000_000 + 3 * 3600), "3h ago");
        assert_eq!(entry.modified_ago(1_000_000 + 2 * 86400), "2d ago");
    }

    #[test]
    fn catalog_item_titles() {
        assert_eq!(CatalogItem::Parent.display_title(), "..");
        assert_eq!(
            CatalogItem::Directory(Entry::directory("pics", 0)).display_title(),
            "pics/"
        );
        assert_eq!(CatalogItem::Parent.name(), "..");
    }
}

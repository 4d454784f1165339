//! Entry representation.

use std::cmp::Ordering;
use std::ffi::{OsStr, OsString};

/// Name of the synthetic parent marker.
pub const PARENT_MARKER_NAME: &str = "..";

/// One row of a directory listing.
///
/// Either a real child read from the filesystem or the synthetic
/// [`Entry::ParentMarker`] that stands for "go up one level". The marker
/// carries no metadata and is never looked up on disk.
///
/// A real entry keeps the name exactly as the filesystem returned it next
/// to a lossy UTF-8 copy for display. Paths are always built from the
/// former, so names that are not valid UTF-8 still resolve.
///
/// Equality and ordering compare the raw names only; the directory flag is
/// data, not a key.
///
/// # Examples
///
/// ```
/// use cdplus_core::Entry;
///
/// let entry = Entry::real("src", true);
/// assert_eq!(entry.name(), "src");
/// assert!(entry.is_dir());
/// assert!(Entry::parent_marker().is_dir());
/// ```
#[derive(Debug, Clone)]
pub enum Entry {
    /// A child of the directory being listed.
    Real {
        name: String,
        os_name: OsString,
        is_dir: bool,
    },
    /// The synthetic `..` row.
    ParentMarker,
}

/// How the rendering surface should decorate an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconClass {
    File,
    Directory,
    ParentMarker,
}

impl Entry {
    /// Creates a real entry from a file name and its directory flag.
    pub fn real(name: impl Into<String>, is_dir: bool) -> Self {
        let name = name.into();
        Self::Real {
            os_name: OsString::from(&name),
            name,
            is_dir,
        }
    }

    /// Creates a real entry from a name as read from the filesystem.
    pub fn from_os_name(os_name: OsString, is_dir: bool) -> Self {
        Self::Real {
            name: os_name.to_string_lossy().into_owned(),
            os_name,
            is_dir,
        }
    }

    /// Returns the parent marker.
    pub fn parent_marker() -> Self {
        Self::ParentMarker
    }

    /// The displayed name (`..` for the parent marker).
    pub fn name(&self) -> &str {
        match self {
            Self::Real { name, .. } => name,
            Self::ParentMarker => PARENT_MARKER_NAME,
        }
    }

    /// The on-disk name, used when joining paths.
    pub fn file_name(&self) -> &OsStr {
        match self {
            Self::Real { os_name, .. } => os_name,
            Self::ParentMarker => OsStr::new(PARENT_MARKER_NAME),
        }
    }

    /// Returns `true` for directories and for the parent marker.
    pub fn is_dir(&self) -> bool {
        match self {
            Self::Real { is_dir, .. } => *is_dir,
            Self::ParentMarker => true,
        }
    }

    pub fn is_parent_marker(&self) -> bool {
        matches!(self, Self::ParentMarker)
    }

    /// Icon class used by the renderer. Highlighting is decided by the view.
    pub fn icon_class(&self) -> IconClass {
        match self {
            Self::ParentMarker => IconClass::ParentMarker,
            Self::Real { is_dir: true, .. } => IconClass::Directory,
            Self::Real { is_dir: false, .. } => IconClass::File,
        }
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.file_name() == other.file_name()
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    /// Byte-wise comparison of names, independent of locale.
    fn cmp(&self, other: &Self) -> Ordering {
        self.file_name()
            .as_encoded_bytes()
            .cmp(other.file_name().as_encoded_bytes())
    }
}

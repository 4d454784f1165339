//! Canonical ordering of directory entries.

use std::ops::Index;

use crate::fs::entry::Entry;

/// The ordered rows of one directory.
///
/// Always starts with [`Entry::ParentMarker`], followed by directories and
/// then files, each group in ascending byte-wise name order. A listing is
/// never edited; navigation replaces it with a freshly built one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    entries: Vec<Entry>,
}

impl Listing {
    /// Builds a listing from raw, unordered directory children.
    ///
    /// Entries are partitioned into directories and files, each partition
    /// is stably sorted by name, and the parent marker is prepended.
    /// Duplicate names are kept in their input order. A parent marker in
    /// the input is dropped; the listing supplies its own.
    pub fn build(raw: Vec<Entry>) -> Self {
        let (mut dirs, mut files): (Vec<Entry>, Vec<Entry>) = raw
            .into_iter()
            .filter(|e| !e.is_parent_marker())
            .partition(Entry::is_dir);

        dirs.sort();
        files.sort();

        let mut entries = Vec::with_capacity(dirs.len() + files.len() + 1);
        entries.push(Entry::parent_marker());
        entries.extend(dirs);
        entries.extend(files);
        Self { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// Number of rows, including the parent marker.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false` for a built listing; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }
}

impl Index<usize> for Listing {
    type Output = Entry;

    fn index(&self, index: usize) -> &Entry {
        &self.entries[index]
    }
}

impl<'a> IntoIterator for &'a Listing {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

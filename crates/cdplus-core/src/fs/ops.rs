//! Directory reading.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::ReadFailure;
use crate::fs::entry::Entry;

/// Source of directory listings.
///
/// The navigator never reads the filesystem itself; the event loop hands
/// each [`crate::Command::ReadDirectory`] to a reader and feeds the result
/// back as an [`crate::Event`]. Tests substitute an in-memory reader.
pub trait DirectoryReader: Send + Sync {
    /// Lists the immediate children of `path` (unsorted, no parent marker).
    fn read(&self, path: &Path) -> Result<Vec<Entry>, ReadFailure>;
}

/// Reads directories from the local filesystem via [`read_directory`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalReader;

impl DirectoryReader for LocalReader {
    fn read(&self, path: &Path) -> Result<Vec<Entry>, ReadFailure> {
        read_directory(path)
    }
}

/// Reads the immediate contents of a directory and returns them as [`Entry`] values.
///
/// The returned entries are **unsorted**. Use [`crate::nav::listing::Listing::build`]
/// to order them. The directory flag comes from the entry's own file type,
/// so a symlink to a directory is listed as a non-directory.
///
/// Children whose type cannot be determined are skipped and logged at debug
/// level. Names are kept as the filesystem returns them.
///
/// # Errors
///
/// - [`ReadFailure::NotFound`] — the path does not exist.
/// - [`ReadFailure::NotADirectory`] — the path is not a directory.
/// - [`ReadFailure::PermissionDenied`] — read access is denied.
/// - [`ReadFailure::Other`] — any other I/O error.
///
/// # Examples
///
/// ```no_run
/// use cdplus_core::read_directory;
/// use std::path::Path;
///
/// let entries = read_directory(Path::new("/home/user")).unwrap();
/// for entry in &entries {
///     println!("{}", entry.name());
/// }
/// ```
pub fn read_directory(path: &Path) -> Result<Vec<Entry>, ReadFailure> {
    let read_dir = std::fs::read_dir(path).map_err(|e| classify(path, &e))?;

    let mut entries = Vec::new();
    for dir_entry in read_dir {
        let dir_entry = match dir_entry {
            Ok(dir_entry) => dir_entry,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "skipping unreadable entry");
                continue;
            }
        };
        let file_type = match dir_entry.file_type() {
            Ok(file_type) => file_type,
            Err(e) => {
                tracing::debug!(
                    path = %dir_entry.path().display(),
                    error = %e,
                    "skipping entry with unknown type"
                );
                continue;
            }
        };
        entries.push(Entry::from_os_name(dir_entry.file_name(), file_type.is_dir()));
    }

    tracing::debug!(path = %path.display(), count = entries.len(), "read directory");
    Ok(entries)
}

fn classify(path: &Path, err: &std::io::Error) -> ReadFailure {
    let failure = ReadFailure::from_io(path, err);
    match failure {
        // Some platforms report listing a regular file as a generic error.
        ReadFailure::Other { .. }
            if std::fs::metadata(path).is_ok_and(|m| !m.is_dir()) =>
        {
            ReadFailure::NotADirectory(path.to_path_buf())
        }
        other => other,
    }
}

/// Runs `reader` for `path` on the blocking thread pool.
///
/// Returns the path alongside the outcome so the caller can build the
/// matching result event.
pub async fn read_directory_async(
    reader: Arc<dyn DirectoryReader>,
    path: PathBuf,
) -> (PathBuf, Result<Vec<Entry>, ReadFailure>) {
    let target = path.clone();
    let result = tokio::task::spawn_blocking(move || reader.read(&target))
        .await
        .unwrap_or_else(|e| {
            Err(ReadFailure::Other {
                path: path.clone(),
                detail: format!("read task failed: {e}"),
            })
        });
    (path, result)
}

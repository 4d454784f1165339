//! Error types for `cdplus-core`.
//!
//! Directory reads fail with [`ReadFailure`], which the navigator stores as
//! its last error and recovers from. Path formatting fails with
//! [`FormatError`]. Everything else (configuration, export) is folded into
//! [`CoreError`], and fallible operations return [`CoreResult<T>`].

use std::path::{Path, PathBuf};

/// Why a directory could not be read.
///
/// Cloneable so the navigator can keep it in its state value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReadFailure {
    /// The process lacks permission to list the directory.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// The path does not exist (or vanished before it could be read).
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// The path exists but is not a directory.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Any other I/O failure, with the OS message.
    #[error("cannot read {path}: {detail}")]
    Other { path: PathBuf, detail: String },
}

impl ReadFailure {
    /// Classifies an I/O error raised while reading `path`.
    pub fn from_io(path: &Path, err: &std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            std::io::ErrorKind::NotADirectory => Self::NotADirectory(path.to_path_buf()),
            _ => Self::Other {
                path: path.to_path_buf(),
                detail: err.to_string(),
            },
        }
    }

    /// The path whose read failed.
    pub fn path(&self) -> &Path {
        match self {
            Self::PermissionDenied(p) | Self::NotFound(p) | Self::NotADirectory(p) => p,
            Self::Other { path, .. } => path,
        }
    }
}

/// Why a path could not be rendered in the requested format.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// `path` cannot be expressed relative to `base` (e.g. different drives).
    #[error("failed to get relative path: {path} has no common root with {base}")]
    NoCommonRoot { path: PathBuf, base: PathBuf },

    /// The path could not be turned into an absolute path.
    #[error("failed to get absolute path: {0}")]
    Unresolvable(PathBuf),
}

/// Unified error type for core operations outside the navigator.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The target path does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// The process lacks permission to access the path.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// Failed to parse a TOML configuration file.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// A directory read failed.
    #[error(transparent)]
    Read(#[from] ReadFailure),

    /// The selected path could not be formatted.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Writing the exported string failed.
    #[error("export failed: {0}")]
    Export(String),

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout `cdplus-core`.
pub type CoreResult<T> = Result<T, CoreError>;

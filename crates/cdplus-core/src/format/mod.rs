//! Derivation of the exported string from the selected path.
//!
//! [`PathFormatter`] turns the selection captured at export time into one
//! of several textual forms selected by a [`FormatCode`]. Only
//! [`FormatCode::Directory`] and [`FormatCode::HomeRelative`] look at the
//! filesystem, and a failed lookup never turns into an error.

pub mod path;

use std::fmt;
use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR};

pub use path::{lexical_clean, relative_path};

use crate::error::FormatError;

/// Placeholder written in place of the home directory.
pub const DEFAULT_HOME_TOKEN: &str = "$HOME";

/// Which representation of the selected path to export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatCode {
    /// Final path component only.
    BaseName,
    /// Relative to the directory the program was started in.
    Relative,
    /// Fully resolved absolute path.
    Absolute,
    /// Absolute path, with files replaced by their containing directory.
    Directory,
    /// Like `Directory`, rewritten under the home placeholder when possible.
    HomeRelative,
}

impl FormatCode {
    pub const ALL: [FormatCode; 5] = [
        FormatCode::BaseName,
        FormatCode::Relative,
        FormatCode::Absolute,
        FormatCode::Directory,
        FormatCode::HomeRelative,
    ];

    /// Parses the single-letter code (`f`, `r`, `a`, `d`, `p`).
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'f' => Some(Self::BaseName),
            'r' => Some(Self::Relative),
            'a' => Some(Self::Absolute),
            'd' => Some(Self::Directory),
            'p' => Some(Self::HomeRelative),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::BaseName => 'f',
            Self::Relative => 'r',
            Self::Absolute => 'a',
            Self::Directory => 'd',
            Self::HomeRelative => 'p',
        }
    }

    /// Short label for help text.
    pub fn label(self) -> &'static str {
        match self {
            Self::BaseName => "file",
            Self::Relative => "relative",
            Self::Absolute => "absolute",
            Self::Directory => "directory path",
            Self::HomeRelative => "`$HOME` format",
        }
    }
}

impl fmt::Display for FormatCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Reports whether a path is a directory, or `None` if the lookup failed.
pub type DirProbe = fn(&Path) -> Option<bool>;

/// Looks the path up on disk, following symlinks.
pub fn probe_is_dir(path: &Path) -> Option<bool> {
    std::fs::metadata(path).ok().map(|m| m.is_dir())
}

/// Formats selected paths against a fixed start directory and home.
#[derive(Debug, Clone)]
pub struct PathFormatter {
    initial_dir: PathBuf,
    home_dir: Option<PathBuf>,
    home_token: String,
    probe: DirProbe,
}

impl PathFormatter {
    /// Creates a formatter for a session started in `initial_dir`.
    ///
    /// The home directory is taken from the environment; use
    /// [`PathFormatter::with_home_dir`] to override it.
    pub fn new(initial_dir: impl Into<PathBuf>) -> Self {
        Self {
            initial_dir: initial_dir.into(),
            home_dir: dirs::home_dir(),
            home_token: DEFAULT_HOME_TOKEN.to_string(),
            probe: probe_is_dir,
        }
    }

    pub fn with_home_dir(self, home_dir: Option<PathBuf>) -> Self {
        Self { home_dir, ..self }
    }

    pub fn with_home_token(self, token: impl Into<String>) -> Self {
        Self {
            home_token: token.into(),
            ..self
        }
    }

    /// Replaces the metadata lookup used by the directory-based formats.
    pub fn with_probe(self, probe: DirProbe) -> Self {
        Self { probe, ..self }
    }

    pub fn initial_dir(&self) -> &Path {
        &self.initial_dir
    }

    /// Formats `selected` according to `code`.
    ///
    /// `None` returns the selected path unchanged.
    ///
    /// # Errors
    ///
    /// - [`FormatError::NoCommonRoot`] — `Relative` was requested and the
    ///   selection shares no root with the start directory.
    /// - [`FormatError::Unresolvable`] — the path could not be made absolute.
    pub fn format(&self, selected: &Path, code: Option<FormatCode>) -> Result<String, FormatError> {
        let Some(code) = code else {
            return Ok(display(selected));
        };

        match code {
            FormatCode::BaseName => Ok(base_name(selected)),
            FormatCode::Relative => relative_path(&self.initial_dir, selected)
                .map(|rel| display(&rel))
                .ok_or_else(|| FormatError::NoCommonRoot {
                    path: selected.to_path_buf(),
                    base: self.initial_dir.clone(),
                }),
            FormatCode::Absolute => absolute(selected).map(|p| display(&p)),
            FormatCode::Directory => {
                let abs = absolute(selected)?;
                Ok(display(&self.directory_of(abs)))
            }
            FormatCode::HomeRelative => {
                let dir = self.directory_of(absolute(selected)?);
                Ok(self.home_relative(&dir).unwrap_or_else(|| display(&dir)))
            }
        }
    }

    /// Substitutes the containing directory when `abs` is not a directory.
    fn directory_of(&self, abs: PathBuf) -> PathBuf {
        match (self.probe)(&abs) {
            Some(false) => abs.parent().map(Path::to_path_buf).unwrap_or(abs),
            Some(true) => abs,
            None => {
                tracing::debug!(path = %abs.display(), "metadata lookup failed, treating as directory");
                abs
            }
        }
    }

    fn home_relative(&self, dir: &Path) -> Option<String> {
        let home = self.home_dir.as_deref()?;
        let rel = relative_path(home, dir)?;

        match rel.components().next() {
            Some(Component::ParentDir) | Some(Component::RootDir) | Some(Component::Prefix(_)) => {
                tracing::debug!(dir = %dir.display(), "not under home, using absolute path");
                None
            }
            Some(Component::CurDir) | None => Some(self.home_token.clone()),
            Some(Component::Normal(_)) => Some(format!(
                "{}{}{}",
                self.home_token,
                MAIN_SEPARATOR,
                rel.display()
            )),
        }
    }
}

/// Formats `selected` with the environment's home directory.
pub fn format_path(
    selected: &Path,
    code: Option<FormatCode>,
    initial_dir: &Path,
) -> Result<String, FormatError> {
    PathFormatter::new(initial_dir).format(selected, code)
}

fn display(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

fn base_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => display(path),
    }
}

fn absolute(path: &Path) -> Result<PathBuf, FormatError> {
    std::path::absolute(path)
        .map(|p| lexical_clean(&p))
        .map_err(|_| FormatError::Unresolvable(path.to_path_buf()))
}

//! cdplus core library: UI-agnostic logic for an interactive directory
//! navigator.
//!
//! A session starts in a directory, lets the user walk the tree with the
//! keyboard, and ends either with nothing or with one path rendered in a
//! chosen format. Everything here is independent of the terminal frontend
//! (`cdplus-tui`), which only translates keys into [`Event`]s, executes
//! [`Command`]s and draws the [`nav::navigator::NavigatorState`].
//!
//! # Modules
//!
//! - [`fs`]: the [`Entry`] model and the directory read service.
//! - [`nav`]: listing order, filtering and the navigator state machine.
//! - [`format`]: rendering a selected path as name, relative, absolute,
//!   directory or home-relative text.
//! - [`export`]: delivering the formatted text to clipboard/stdout sinks.
//! - [`config`]: TOML settings, key bindings and theme.
//! - [`action`] / [`event`]: the vocabulary between frontend and core.
//! - [`error`]: [`ReadFailure`], [`FormatError`] and [`CoreError`].

pub mod action;
pub mod config;
pub mod error;
pub mod event;
pub mod export;
pub mod format;
pub mod fs;
pub mod nav;

pub use error::{CoreError, CoreResult, FormatError, ReadFailure};
pub use event::{Command, Event};
pub use fs::entry::{Entry, IconClass};
pub use fs::ops::{read_directory, read_directory_async, DirectoryReader, LocalReader};
pub use nav::listing::Listing;
pub use nav::navigator::{Mode, NavigatorState, PendingExport, VisibleRow};

pub use action::{Action, ActionCategory, ActionDescriptor, ActionRegistry};
pub use config::keymap::Keymap;
pub use config::settings::Config;
pub use config::theme::{parse_color, Theme};
pub use config::Settings;
pub use export::{ExportGateway, ExportReport, ExportSink, StdoutSink};
pub use format::{format_path, FormatCode, PathFormatter};

/// Normalises a string to NFC (composed) form.
///
/// macOS stores filenames in NFD (decomposed), which makes accented or
/// Hangul names render as separate combining characters. This helper
/// re-composes them for display.
pub fn nfc_string(s: &str) -> String {
    use unicode_normalization::UnicodeNormalization;
    s.nfc().collect()
}

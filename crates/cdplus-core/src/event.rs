//! Messages into and out of the navigator.
//!
//! The frontend translates key presses into [`Event`]s and delivers them,
//! together with directory read results, to
//! [`crate::nav::navigator::NavigatorState::update`]. The navigator answers
//! with at most one [`Command`], which the frontend executes off the event
//! loop and reports back as another `Event`.

use std::path::PathBuf;

use crate::action::Action;
use crate::error::ReadFailure;
use crate::fs::entry::Entry;

/// Work the navigator asks the frontend to perform.
///
/// Commands flow **Core → runtime**. Each one produces exactly one result event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the directory at the given absolute path.
    ReadDirectory(PathBuf),
}

/// Input processed by the navigator, in arrival order.
#[derive(Debug, Clone)]
pub enum Event {
    /// A bound action (cursor movement, descend, quit, export, ...).
    Action(Action),
    /// A printable character typed while filtering.
    FilterChar(char),
    /// Remove the last character of the filter text.
    FilterBackspace,
    /// Leave filtering and restore the full listing.
    FilterCancel,
    /// A directory has been successfully read.
    DirectoryLoaded {
        /// The absolute path of the directory.
        path: PathBuf,
        /// The raw, unordered entries contained in the directory.
        entries: Vec<Entry>,
    },
    /// A directory read failed.
    DirectoryFailed(ReadFailure),
}

impl Event {
    /// Wraps the outcome of a directory read.
    pub fn from_read(path: PathBuf, result: Result<Vec<Entry>, ReadFailure>) -> Self {
        match result {
            Ok(entries) => Self::DirectoryLoaded { path, entries },
            Err(failure) => Self::DirectoryFailed(failure),
        }
    }
}
